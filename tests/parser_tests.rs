/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * License:
 * This file is part of the FX macro language project.
 *
 * FX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * ==========================================================================
 */

use fx::ast::{Prog, Stmt};
use fx::lexer::Lexer;
use fx::parser::Parser;
use fx::types::TypeId;

fn parse_source(source: &str) -> (Prog, Parser) {
    let lexer = Lexer::new(source, "test.fx");
    let mut parser = Parser::new(lexer).expect("parser construction failed");
    let prog = parser.parse().expect("unrecoverable parse failure");
    (prog, parser)
}

fn parse_clean(source: &str) -> (Prog, Parser) {
    let (prog, parser) = parse_source(source);
    assert_eq!(parser.err_count(), 0, "unexpected syntax errors");
    (prog, parser)
}

#[test]
fn empty_main_parses() {
    let (prog, _) = parse_clean("func main(){ }");
    assert_eq!(prog.funcs.len(), 1);
    assert_eq!(prog.funcs[0].borrow().name(), "main");
    let f = prog.funcs[0].borrow().func().unwrap();
    assert!(f.head.params.is_empty());
    assert!(f.body.stms.is_empty());
}

#[test]
fn scope_stack_is_balanced_after_parse() {
    // Construction owns two frames (builtins + program); every frame the
    // grammar pushes must be popped again.
    let (_, parser) = parse_clean(
        "func f(int x){ iter (i := 0, x, 1){ { circle(i, 0, 0, 0); } } }\n\
         func main(){ f(2); }",
    );
    assert_eq!(parser.envs().depth(), 2);
}

#[test]
fn trace_depth_returns_to_zero() {
    let (_, parser) = parse_clean("func main(){ if(1 > 0){ rect(1, 2, 3, 4); } else { } }");
    assert_eq!(parser.trace_depth(), 0);
}

#[test]
fn formal_parameters_get_declared_types() {
    let (prog, _) = parse_clean("func f(int x, bool b, Coord p){ }  func main(){ }");
    let f = prog.funcs[0].borrow().func().unwrap();
    assert_eq!(f.head.id, "f");
    assert_eq!(f.head.params.len(), 3);
    assert_eq!(f.head.params[0].borrow().sym_type(), TypeId::Int);
    assert_eq!(f.head.params[1].borrow().sym_type(), TypeId::Bool);
    assert_eq!(f.head.params[2].borrow().sym_type(), TypeId::Coord);
}

#[test]
fn statement_kinds_are_recognized() {
    let (prog, _) = parse_clean(
        "func main(){\n\
           int k;\n\
           k = 1;\n\
           circle(k, 0, 0, 0);\n\
           iter (i := 0, 2, 1){ rect(i, 0, 0, 0); }\n\
           if(k > 0){ } else { }\n\
           { int inner; }\n\
         }",
    );
    let f = prog.funcs[0].borrow().func().unwrap();
    assert_eq!(f.body.stms.len(), 6);
    assert!(matches!(f.body.stms[0], Stmt::Decl(_)));
    assert!(matches!(f.body.stms[1], Stmt::Assign(_)));
    assert!(matches!(f.body.stms[2], Stmt::Call(_)));
    assert!(matches!(f.body.stms[3], Stmt::Iter(_)));
    assert!(matches!(f.body.stms[4], Stmt::If(_)));
    assert!(matches!(f.body.stms[5], Stmt::Block(_)));
}

#[test]
fn else_branch_is_optional() {
    let (prog, _) = parse_clean("func main(){ if(1){ } }");
    let f = prog.funcs[0].borrow().func().unwrap();
    let Stmt::If(node_if) = &f.body.stms[0] else {
        panic!("expected if statement");
    };
    assert!(node_if.body_else.is_none());

    let (prog, _) = parse_clean("func main(){ if(1){ } else { circle(1, 2, 3, 4); } }");
    let f = prog.funcs[0].borrow().func().unwrap();
    let Stmt::If(node_if) = &f.body.stms[0] else {
        panic!("expected if statement");
    };
    assert_eq!(node_if.body_else.as_ref().unwrap().stms.len(), 1);
}

#[test]
fn iter_records_control_variable_and_bounds() {
    let (prog, _) = parse_clean("func main(){ iter (i := 0, 10, 2){ } }");
    let f = prog.funcs[0].borrow().func().unwrap();
    let Stmt::Iter(iter) = &f.body.stms[0] else {
        panic!("expected iter statement");
    };
    let control = iter.control.as_ref().unwrap();
    assert_eq!(control.borrow().name(), "i");
    assert_eq!(control.borrow().sym_type(), TypeId::Int);
    assert!(iter.start.is_some());
    assert!(iter.end.is_some());
    assert!(iter.step.is_some());
}

#[test]
fn duplicate_declaration_in_one_block_is_reported() {
    let (_, parser) = parse_source("func main(){ int k; int k; }");
    assert!(parser.err_count() >= 1);
}

#[test]
fn shadowing_across_blocks_is_allowed() {
    let (_, parser) = parse_source("func main(){ int k; { int k; } }");
    assert_eq!(parser.err_count(), 0);
}

#[test]
fn duplicate_function_names_are_reported() {
    let (prog, parser) = parse_source("func f(){ }  func f(){ }  func main(){ }");
    assert!(parser.err_count() >= 1);
    // The second definition is dropped, the rest of the program survives.
    assert_eq!(prog.funcs.len(), 2);
}

#[test]
fn iter_control_variable_does_not_leak() {
    let (_, parser) = parse_source(
        "func main(){\n\
           iter (i := 0, 3, 1){ circle(i, 0, 0, 0); }\n\
           i = 5;\n\
         }",
    );
    assert!(parser.err_count() >= 1);
}

#[test]
fn unknown_statement_head_recovers_at_semicolon() {
    let (prog, parser) = parse_source("func main(){ ghost = 1; circle(1, 2, 3, 4); }");
    assert!(parser.err_count() >= 1);
    // The call after the bad statement still parses.
    let f = prog.funcs[0].borrow().func().unwrap();
    assert!(f
        .body
        .stms
        .iter()
        .any(|stm| matches!(stm, Stmt::Call(_))));
}

#[test]
fn calls_can_only_reference_earlier_definitions() {
    let (_, parser) = parse_source("func main(){ later(); }  func later(){ }");
    assert!(parser.err_count() >= 1);
}

#[test]
fn garbage_at_top_level_is_reported() {
    let (_, parser) = parse_source("42");
    assert!(parser.err_count() >= 1);
}

#[test]
fn five_errors_end_the_parse() {
    let lexer = Lexer::new("func main(){ a; b; c; d; e; f; }", "test.fx");
    let mut parser = Parser::new(lexer).unwrap();
    let err = parser.parse().unwrap_err();
    assert_eq!(err.code, "E_LIMIT");
    assert_eq!(parser.err_count(), 5);
}

#[test]
fn unexpected_eof_is_fatal() {
    let lexer = Lexer::new("func main(){ circle(1, 2", "test.fx");
    let mut parser = Parser::new(lexer).unwrap();
    let err = parser.parse().unwrap_err();
    assert_eq!(err.code, "E_EOF");
}

#[test]
fn missing_comma_in_call_is_reported() {
    let (_, parser) = parse_source("func main(){ circle(1 2 3 4); rect(1, 2, 3, 4); }");
    assert!(parser.err_count() >= 1);
}

#[test]
fn json_dump_mirrors_program_structure() {
    let (prog, _) = parse_clean(
        "func add(int x, int y){ circle(x, y, x + y, 0); }\n\
         func main(){ add(3, 4); }",
    );
    let dump = fx::ast::json::prog_json(&prog);
    assert_eq!(dump["node"], "prog");
    assert_eq!(dump["funcs"][0]["sym"]["name"], "add");
    assert_eq!(dump["funcs"][0]["func"]["head"]["params"][1]["name"], "y");
    assert_eq!(dump["funcs"][1]["sym"]["name"], "main");
    assert_eq!(dump["funcs"][1]["func"]["body"][0]["stmt"], "call");
    assert_eq!(dump["funcs"][1]["func"]["body"][0]["target"]["name"], "add");
}

#[test]
fn text_dump_lists_every_function() {
    let (prog, _) = parse_clean("func helper(){ }  func main(){ }");
    let dump = prog.to_string();
    assert!(dump.contains("PROG"));
    assert!(dump.contains("\"helper\""));
    assert!(dump.contains("\"main\""));
}

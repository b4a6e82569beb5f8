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

use regex::Regex;

use fx::lexer::Lexer;
use fx::parser::Parser;

fn parse(source: &str) -> Parser {
    let lexer = Lexer::new(source, "test.fx");
    let mut parser = Parser::new(lexer).expect("parser construction failed");
    parser.parse().expect("unrecoverable parse failure");
    parser
}

#[test]
fn syntax_error_recovery_reports_and_suppresses_the_run() {
    let source = "func main(){ circle(1 2 3 4); rect(1, 2, 3, 4); }";

    let parser = parse(source);
    assert!(parser.err_count() >= 1);
    assert!(!parser.diagnostics().lines().is_empty());

    // The interpreter must not run on a program with recorded errors.
    let mut out = Vec::new();
    let errors = fx::interpret(source, "test.fx", &mut out).expect("interpret failed");
    assert!(errors >= 1);
    assert!(out.is_empty());
}

#[test]
fn diagnostics_use_the_canonical_line_format() {
    let parser = parse("func main(){ ghost = 1; int k; int k; }");
    assert!(parser.err_count() >= 2);

    let re = Regex::new(r"^test\.fx:\d+: syntax error: ").unwrap();
    for line in parser.diagnostics().lines() {
        assert!(re.is_match(line), "malformed diagnostic: {}", line);
    }
}

#[test]
fn diagnostics_carry_the_offending_line_number() {
    let source = "func main(){\n  circle(1, 2, 3, 4);\n  ghost = 1;\n}";
    let parser = parse(source);

    let re = Regex::new(r"^test\.fx:3: syntax error: symbol ghost not found$").unwrap();
    assert!(
        parser.diagnostics().lines().iter().any(|l| re.is_match(l)),
        "missing expected diagnostic, got: {:?}",
        parser.diagnostics().lines()
    );
}

#[test]
fn unknown_type_in_parameter_list_is_reported() {
    let parser = parse("func f(quux x){ }  func main(){ }");
    let re = Regex::new(r"syntax error: type quux not found$").unwrap();
    assert!(parser.diagnostics().lines().iter().any(|l| re.is_match(l)));
}

#[test]
fn non_type_in_type_position_is_reported() {
    // `circle` resolves, but to a function, not a type.
    let parser = parse("func f(circle x){ }  func main(){ }");
    let re = Regex::new(r"syntax error: expecting type, found circle$").unwrap();
    assert!(parser.diagnostics().lines().iter().any(|l| re.is_match(l)));
}

#[test]
fn error_count_matches_recorded_lines() {
    let parser = parse("func main(){ a = 1; b = 2; }");
    assert_eq!(parser.err_count(), parser.diagnostics().lines().len());
}

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

use fx::ast::Stmt;
use fx::lexer::{Lexer, TokenKind};
use fx::parser::Parser;

/// Runs `func main(){ circle(<expr>, 0, 0, 0); }` and returns the value
/// the primitive printed for `<expr>`.
fn eval(expr: &str) -> i64 {
    let source = format!("func main(){{ circle({}, 0, 0, 0); }}", expr);
    let mut out = Vec::new();
    let errors = fx::interpret(&source, "test.fx", &mut out).expect("interpret failed");
    assert_eq!(errors, 0, "syntax errors in {}", expr);

    let text = String::from_utf8(out).unwrap();
    let first = text
        .strip_prefix("circle ")
        .and_then(|rest| rest.split(' ').next())
        .unwrap_or_else(|| panic!("unexpected output: {}", text));
    first.parse().unwrap()
}

#[test]
fn single_literal_is_a_leaf() {
    let lexer = Lexer::new("func main(){ circle(42, 0, 0, 0); }", "test.fx");
    let mut parser = Parser::new(lexer).unwrap();
    let prog = parser.parse().unwrap();
    assert_eq!(parser.err_count(), 0);

    let f = prog.funcs[0].borrow().func().unwrap();
    let Stmt::Call(call) = &f.body.stms[0] else {
        panic!("expected call statement");
    };
    let leaf = &call.args[0];
    assert_eq!(leaf.tok.kind, TokenKind::IntLit);
    assert_eq!(leaf.tok.value, 42);
    assert!(leaf.left.is_none());
    assert!(leaf.right.is_none());
}

#[test]
fn parenthesized_round_trip_matches_left_to_right_evaluation() {
    // Fully parenthesized forms agree with their flat left-associative
    // spellings.
    let cases = [
        ("((10 - 3) - 4)", "10 - 3 - 4", 3),
        ("((100 / 5) / 2)", "100 / 5 / 2", 10),
        ("((2 * 3) * 4)", "2 * 3 * 4", 24),
        ("((17 % 12) % 4)", "17 % 12 % 4", 1),
        ("((1 + 2) + 3)", "1 + 2 + 3", 6),
    ];
    for (parenthesized, flat, expected) in cases {
        assert_eq!(eval(parenthesized), expected, "{}", parenthesized);
        assert_eq!(eval(flat), expected, "{}", flat);
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2 + 3 * 4"), 14);
    assert_eq!(eval("(2 + 3) * 4"), 20);
    assert_eq!(eval("20 - 6 / 2"), 17);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(eval("2 ** 3 ** 2"), 512);
    assert_eq!(eval("(2 ** 3) ** 2"), 64);
    assert_eq!(eval("2 ** 10"), 1024);
}

#[test]
fn power_binds_tighter_than_product() {
    assert_eq!(eval("2 * 3 ** 2"), 18);
    assert_eq!(eval("3 ** 2 * 2"), 18);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_eq!(eval("(3 > 2)"), 1);
    assert_eq!(eval("(2 > 3)"), 0);
    assert_eq!(eval("(2 >= 2)"), 1);
    assert_eq!(eval("(1 < 2)"), 1);
    assert_eq!(eval("(2 <= 1)"), 0);
}

#[test]
fn comparisons_bind_weaker_than_arithmetic() {
    // 1 + 2 > 2  parses as  (1 + 2) > 2
    assert_eq!(eval("1 + 2 > 2"), 1);
    assert_eq!(eval("1 + 2 < 2"), 0);
}

#[test]
fn logical_family_binds_weakest() {
    // k > 3 | True  parses as  (k > 3) | True
    assert_eq!(eval("2 > 3 | True"), 1);
    assert_eq!(eval("1 & 1"), 1);
    assert_eq!(eval("1 & 0"), 0);
    assert_eq!(eval("0 | 0"), 0);
    assert_eq!(eval("1 ^ 1"), 0);
    assert_eq!(eval("1 ^ 0"), 1);
    assert_eq!(eval("((1 | 0) & 1)"), 1);
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-5 + 10"), 5);
    assert_eq!(eval("+7"), 7);
    assert_eq!(eval("!0"), 1);
    assert_eq!(eval("!3"), 0);
    assert_eq!(eval("!(3 > 5)"), 1);
    assert_eq!(eval("-(2 + 3)"), -5);
}

#[test]
fn deep_nesting_parses() {
    assert_eq!(eval("((((1 + 2) * (3 + 4)) - 5) / 2)"), 8);
}

#[test]
fn bool_literals_are_numeric() {
    assert_eq!(eval("True + True"), 2);
    assert_eq!(eval("False"), 0);
}

#[test]
fn wrapping_division_edge() {
    // i64::MIN / -1 wraps instead of trapping.
    assert_eq!(
        eval("(0 - 9223372036854775807 - 1) / (0 - 1)"),
        i64::MIN
    );
}

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

use fx::lexer::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source, "test.fx");
    let mut out = Vec::new();
    loop {
        let t = lexer.lex().expect("lexing failed");
        let kind = t.kind;
        out.push(kind);
        if kind == TokenKind::Eof {
            return out;
        }
    }
}

#[test]
fn classifies_words() {
    assert_eq!(
        kinds("func main iter if else True False"),
        vec![
            TokenKind::Func,
            TokenKind::Id,
            TokenKind::Key,
            TokenKind::Key,
            TokenKind::Key,
            TokenKind::BoolLit,
            TokenKind::BoolLit,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn classifies_operators_and_punctuation() {
    assert_eq!(
        kinds("( ) { } , ; = := + - * / % ** > >= < <= | & ! ^"),
        vec![
            TokenKind::LPar,
            TokenKind::RPar,
            TokenKind::LCurl,
            TokenKind::RCurl,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Assign,
            TokenKind::Decl,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Divide,
            TokenKind::Rem,
            TokenKind::Pow,
            TokenKind::Gt,
            TokenKind::Gte,
            TokenKind::Lt,
            TokenKind::Lte,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::Not,
            TokenKind::Xor,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn integer_literals_decimal_and_hex() {
    let mut lexer = Lexer::new("42 0x2a 0xff 0", "test.fx");
    for expected in [42, 42, 255, 0] {
        let t = lexer.lex().unwrap();
        assert_eq!(t.kind, TokenKind::IntLit);
        assert_eq!(t.value, expected);
    }
}

#[test]
fn bool_literals_carry_their_value() {
    let mut lexer = Lexer::new("True False", "test.fx");
    assert_eq!(lexer.lex().unwrap().value, 1);
    assert_eq!(lexer.lex().unwrap().value, 0);
}

#[test]
fn line_comments_are_skipped() {
    let mut lexer = Lexer::new("// a comment\n42 // trailing\n// last", "test.fx");
    let t = lexer.lex().unwrap();
    assert_eq!(t.kind, TokenKind::IntLit);
    assert_eq!(t.value, 42);
    assert_eq!(t.place.line, 2);
    assert_eq!(lexer.lex().unwrap().kind, TokenKind::Eof);
}

#[test]
fn peek_is_stable_until_lex() {
    let mut lexer = Lexer::new("a b", "test.fx");
    let first = lexer.peek().unwrap();
    let second = lexer.peek().unwrap();
    assert_eq!(first.lexeme, second.lexeme);

    let consumed = lexer.lex().unwrap();
    assert_eq!(consumed.lexeme, "a");
    assert_eq!(lexer.peek().unwrap().lexeme, "b");
}

#[test]
fn skip_until_leaves_the_stop_token() {
    let mut lexer = Lexer::new("a b c ; d", "test.fx");
    lexer.skip_until(&[TokenKind::Semicolon]).unwrap();
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Semicolon);
    lexer.lex().unwrap();
    assert_eq!(lexer.peek().unwrap().lexeme, "d");
}

#[test]
fn skip_until_and_lex_consumes_the_stop_token() {
    let mut lexer = Lexer::new("a b ; c", "test.fx");
    lexer.skip_until_and_lex(TokenKind::Semicolon).unwrap();
    assert_eq!(lexer.peek().unwrap().lexeme, "c");
}

#[test]
fn skip_until_stops_at_eof() {
    let mut lexer = Lexer::new("a b c", "test.fx");
    lexer.skip_until(&[TokenKind::Semicolon]).unwrap();
    assert_eq!(lexer.peek().unwrap().kind, TokenKind::Eof);
}

#[test]
fn eof_repeats_once_reached() {
    let mut lexer = Lexer::new("", "test.fx");
    assert_eq!(lexer.lex().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.lex().unwrap().kind, TokenKind::Eof);
}

#[test]
fn unknown_character_is_a_lexical_error() {
    let mut lexer = Lexer::new("@", "test.fx");
    let err = lexer.lex().unwrap_err();
    assert_eq!(err.code, "E_LEX");
}

#[test]
fn bare_colon_is_a_lexical_error() {
    let mut lexer = Lexer::new(":", "test.fx");
    let err = lexer.lex().unwrap_err();
    assert_eq!(err.code, "E_LEX");
}

#[test]
fn oversized_hex_literal_is_a_lexical_error() {
    let mut lexer = Lexer::new("0xffffffffffffffff", "test.fx");
    let err = lexer.lex().unwrap_err();
    assert_eq!(err.code, "E_LEX");
}

#[test]
fn tokens_carry_file_and_line() {
    let mut lexer = Lexer::new("a\nb\n\nc", "demo.fx");
    assert_eq!(lexer.lex().unwrap().place.line, 1);
    assert_eq!(lexer.lex().unwrap().place.line, 2);
    let c = lexer.lex().unwrap();
    assert_eq!(c.place.line, 4);
    assert_eq!(c.place.file, "demo.fx");
}

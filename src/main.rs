/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  The fx command-line driver: load a source file, toggle the
 *           debug traces, parse, dump the AST, interpret.
 *
 * Author:   Sam Wilcox
 * Email:    sam@fx-lang.com
 * Github:   https://github.com/samwilcox/fx
 *
 * License:
 * This file is part of the FX macro language project.
 *
 * FX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;
use std::sync::atomic::Ordering;

use fx::ast;
use fx::interpreter;
use fx::lexer::{Lexer, DEBUG_LEXER};
use fx::parser::{Parser, DEBUG_PARSER};

const USAGE: &str = "usage: fx [-p|--trace-parser] [-l|--trace-lexer] [--json] <file.fx>";

fn main() {
    let mut trace_parser = false;
    let mut trace_lexer = false;
    let mut json = false;
    let mut file: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-p" | "--trace-parser" => trace_parser = true,
            "-l" | "--trace-lexer" => trace_lexer = true,
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ if arg.starts_with('-') => {
                eprintln!("fx: unknown option {}\n{}", arg, USAGE);
                process::exit(2);
            }
            _ => {
                if file.is_some() {
                    eprintln!("fx: expected a single source file\n{}", USAGE);
                    process::exit(2);
                }
                file = Some(arg);
            }
        }
    }

    let Some(file) = file else {
        eprintln!("{}", USAGE);
        process::exit(2);
    };

    let source = match fs::read_to_string(&file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("fx: {}: {}", file, err);
            process::exit(1);
        }
    };

    DEBUG_PARSER.store(trace_parser, Ordering::Relaxed);
    DEBUG_LEXER.store(trace_lexer, Ordering::Relaxed);

    let lexer = Lexer::new(&source, file.as_str());
    let mut parser = match Parser::new(lexer) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let prog = match parser.parse() {
        Ok(prog) => prog,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    // Any recorded syntax error suppresses the dump and the run.
    if parser.err_count() > 0 {
        process::exit(1);
    }

    if json {
        let dump = ast::json::prog_json(&prog);
        let text = serde_json::to_string_pretty(&dump)
            .unwrap_or_else(|err| panic!("AST dump failed: {}", err));
        println!("{}", text);
    } else {
        println!("{}", prog);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = interpreter::run(&prog, parser.envs_mut(), &mut out) {
        let _ = out.flush();
        eprintln!("{}", err);
        process::exit(1);
    }
}

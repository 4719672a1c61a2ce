//! XQuery front-end CLI.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use xq_diagnostic::emitter::ColorMode;
use xqc::commands::{
    check_file, explain_error, lex_file, list_dialects, list_implementations, CheckOptions,
};
use xqc::CliError;

fn main() -> ExitCode {
    xqc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();
    let result = match args[1].as_str() {
        "lex" => {
            let Some(path) = args.get(2) else {
                return usage_error("Usage: xqc lex <file.xq>");
            };
            lex_file(path, &mut stdout).map(|()| ExitCode::SUCCESS)
        }
        "check" => {
            let Some((path, options)) = parse_check_args(&args[2..]) else {
                return usage_error(
                    "Usage: xqc check <file.xq> [--target <id>] [--settings <file.json>] [--color <auto|always|never>]",
                );
            };
            let is_tty = std::io::stdout().is_terminal();
            check_file(&path, &options, &mut stdout, is_tty).map(|errors| {
                if errors == 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            })
        }
        "dialects" => list_dialects(&mut stdout).map(|()| ExitCode::SUCCESS),
        "implementations" => list_implementations(&mut stdout).map(|()| ExitCode::SUCCESS),
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                return usage_error("Usage: xqc explain <CODE>\nExample: xqc explain XPST0003");
            };
            explain_error(code, &mut stdout).map(|()| ExitCode::SUCCESS)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        "version" | "--version" | "-V" => {
            println!("xqc {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            Ok(ExitCode::FAILURE)
        }
    };

    result.unwrap_or_else(|err: CliError| {
        eprintln!("error: {err}");
        ExitCode::FAILURE
    })
}

/// Parse `<file> [--target <id>] [--settings <path>] [--color <mode>]`.
fn parse_check_args(args: &[String]) -> Option<(String, CheckOptions)> {
    let mut options = CheckOptions::default();
    let mut path = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--target" | "-t" => options.target = Some(iter.next()?.clone()),
            "--settings" => options.settings = Some(PathBuf::from(iter.next()?)),
            "--color" => {
                options.color = match iter.next()?.as_str() {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return None,
                };
            }
            other => {
                if let Some(id) = other.strip_prefix("--target=") {
                    options.target = Some(id.to_owned());
                } else if other.starts_with('-') || path.is_some() {
                    return None;
                } else {
                    path = Some(other.to_owned());
                }
            }
        }
    }
    Some((path?, options))
}

fn usage_error(usage: &str) -> ExitCode {
    eprintln!("{usage}");
    ExitCode::FAILURE
}

fn print_usage() {
    println!("XQuery front end");
    println!();
    println!("Usage: xqc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.xq>        Tokenize and display tokens with their lexer state");
    println!("  check <file.xq>      Report constructs the selected dialect does not support");
    println!("  dialects             List known XQuery dialects");
    println!("  implementations      List implementations and their target ids");
    println!("  explain <code>       Explain an error code (e.g., XPST0003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --target <id>        Implementation and version, e.g. marklogic/v8/1.0-ml");
    println!("  --settings <file>    JSON settings: {{\"implementation\": \"w3c\", \"version\": \"3.0\"}}");
    println!("  --color <mode>       auto (default), always, never");
    println!();
    println!("Examples:");
    println!("  xqc check query.xq --target w3c/3.1");
    println!("  xqc check query.xq --settings xqc.json");
    println!("  xqc lex query.xq");
    println!("  xqc explain XPST0003");
    println!();
    println!("Set RUST_LOG=debug to trace conformance decisions.");
}

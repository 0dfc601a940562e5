//! XL front-end CLI.

use xlc::commands::{lex_file, parse_lex_args, LexOptions};
use xlc::CliError;

fn main() {
    xlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let parsed = match parse_lex_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(err) => report(&err),
            };
            run_lex(&parsed.path, &parsed.options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("XL {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source file is lexed with default options.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("x"))
            {
                run_lex(command, &LexOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Run `lex`, exiting non-zero on a command failure or a lexical error.
fn run_lex(path: &str, options: &LexOptions) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match lex_file(path, options, &mut out) {
        Ok(summary) if summary.is_clean() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => report(&err),
    }
}

fn report(err: &CliError) -> ! {
    eprintln!("error: {err}");
    if err.is_usage() {
        print_lex_usage();
    }
    std::process::exit(1);
}

fn print_lex_usage() {
    eprintln!("Usage: xl lex <file.x> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --reject-dangling   Treat `3.`, `10-` and `3/4` as illegal literals");
    eprintln!("  --uniform-dates     Require both date separators to match");
    eprintln!("  --no-listing        Do not print the numbered source listing");
}

fn print_usage() {
    println!("XL front end");
    println!();
    println!("Usage: xl <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.x>         Tokenize and display tokens");
    println!("  <file.x>             Same as `lex <file.x>`");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --reject-dangling    Treat `3.`, `10-` and `3/4` as illegal literals");
    println!("  --uniform-dates      Require both date separators to match");
    println!("  --no-listing         Do not print the numbered source listing");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=xl_lexer=debug xl lex prog.x");
}

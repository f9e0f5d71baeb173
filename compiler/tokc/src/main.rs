//! `tok` CLI.

use tokc::commands::{lex_file, parse_lex_options};

fn main() {
    tokc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: tok lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --mode=<mode>       Tokenizer: base, words, element (default: base)");
                eprintln!("  --format=<format>   Output: text, json, markup (default: text)");
                eprintln!("  -s, --skip-spaces   Drop whitespace tokens");
                std::process::exit(1);
            }

            let output = parse_lex_options(&args[2..]).and_then(|options| lex_file(&options));
            match output {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tok {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tok: single-byte classifier and lookahead tokenizer");
    println!();
    println!("Usage: tok <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and print the tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --mode=<mode>        base, words, element (default: base)");
    println!("  --format=<format>    text, json, markup (default: text)");
    println!("  -s, --skip-spaces    Drop whitespace tokens");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tokc=debug) for trace output.");
}

//! DECL command-line tool for translating configuration documents.
//!
//! Usage: decl [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>    Write output to specified file
//!   --check                Check if input translates (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! Reads the whole input, translates it once, and writes the result.
//! On a translation error the message goes to stderr and no output is
//! written.

use libdecl::translate_with_filename;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut output_file: Option<&str> = None;
    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("decl {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-" => {
                // Explicit stdin
                // input_path stays None, which means stdin
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    let input = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    // Error messages name the file by its basename.
    let filename = input_path.map(|p| {
        Path::new(p)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| p.to_string())
    });

    let output = match translate_with_filename(&input, filename.as_deref()) {
        Ok(output) => output,
        Err(e) => {
            if let Some(path) = input_path {
                eprintln!("{}: {}", path, e);
            } else {
                eprintln!("Translation error: {}", e);
            }
            process::exit(1);
        }
    };

    if check_only {
        if let Some(path) = input_path {
            println!("{}: ok", path);
        } else {
            println!("ok");
        }
        return;
    }

    write_text_output(&output, output_file);
}

fn write_text_output(output: &str, output_file: Option<&str>) {
    if let Some(path) = output_file {
        if let Err(e) = fs::write(path, output) {
            eprintln!("Error writing {}: {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", output);
        // Ensure output ends with newline
        if !output.ends_with('\n') {
            println!();
        }
    }
}

fn print_help() {
    println!(
        "decl - DECL configuration translator

USAGE:
    decl [OPTIONS] [FILE]

ARGS:
    [FILE]    Input file (reads from stdin if not provided)

OPTIONS:
    -o, --output <FILE>    Write output to specified file

    --check                Check if input translates (exit 0 if valid, 1 if invalid)

    -h, --help             Print help

    -V, --version          Print version

EXAMPLES:
    # Translate a configuration document to stdout
    decl rules.conf

    # Translate into a file
    decl rules.conf -o rules.decl

    # Validate without writing output
    decl --check rules.conf

    # Translate from stdin
    cat rules.conf | decl
"
    );
}

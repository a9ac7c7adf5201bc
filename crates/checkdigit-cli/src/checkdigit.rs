//! Check-digit CLI
//!
//! Usage: checkdigit <algorithm> <command> [code ...]
//!
//! Arguments:
//!   <algorithm>    code12 | luhn | damm | verhoeff
//!   <command>      generate | check
//!   [code ...]     Codes to process; read from stdin when omitted
//!
//! Options:
//!   --help, -h     Show help
//!
//! Examples:
//!   checkdigit luhn generate 4111-1111-1111-111
//!   checkdigit damm check 01234567894
//!   cat codes.txt | checkdigit verhoeff check
//!
//! Exit status: 0 on success, 1 if any code failed to generate or check,
//! 2 on argument errors.

use checkdigit::{GenerateError, code12, damm, luhn, verhoeff};
use std::env;
use std::io::{self, BufRead};

#[derive(Clone, Copy)]
enum Algorithm {
    Code12,
    Luhn,
    Damm,
    Verhoeff,
}

impl Algorithm {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "code12" => Some(Self::Code12),
            "luhn" => Some(Self::Luhn),
            "damm" => Some(Self::Damm),
            "verhoeff" => Some(Self::Verhoeff),
            _ => None,
        }
    }

    fn generate(self, code: &str) -> Result<String, GenerateError> {
        match self {
            Self::Code12 => code12::generate(code),
            Self::Luhn => luhn::generate(code),
            Self::Damm => damm::generate(code),
            Self::Verhoeff => verhoeff::generate(code),
        }
    }

    fn check(self, code: &str) -> bool {
        match self {
            Self::Code12 => code12::check(code),
            Self::Luhn => luhn::check(code),
            Self::Damm => damm::check(code),
            Self::Verhoeff => verhoeff::check(code),
        }
    }
}

#[derive(Clone, Copy)]
enum Command {
    Generate,
    Check,
}

struct Args {
    algorithm: Algorithm,
    command: Command,
    codes: Vec<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <algorithm> <command> [code ...]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <algorithm>    code12 | luhn | damm | verhoeff");
    eprintln!("  <command>      generate | check");
    eprintln!("  [code ...]     Codes to process; read from stdin when omitted");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help, -h     Show this help message");
    eprintln!();
    eprintln!("Formatting characters in codes (hyphens, spaces) are ignored.");
}

fn parse_args() -> Result<Args, String> {
    let argv: Vec<String> = env::args().collect();

    let mut positional: Vec<String> = Vec::new();
    for arg in &argv[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&argv[0]);
                std::process::exit(0);
            }
            a if a.starts_with("--") => return Err(format!("Unknown option: {}", a)),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();

    let name = positional.next().ok_or("Missing algorithm argument")?;
    let algorithm = Algorithm::parse(&name).ok_or_else(|| {
        format!(
            "Unknown algorithm: {} (expected code12, luhn, damm or verhoeff)",
            name
        )
    })?;

    let name = positional.next().ok_or("Missing command argument")?;
    let command = match name.as_str() {
        "generate" => Command::Generate,
        "check" => Command::Check,
        other => {
            return Err(format!(
                "Unknown command: {} (expected generate or check)",
                other
            ));
        }
    };

    Ok(Args {
        algorithm,
        command,
        codes: positional.collect(),
    })
}

/// Read codes line by line from stdin, skipping blank lines.
fn read_codes_from_stdin() -> Vec<String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(2);
        }
    };

    let codes = if args.codes.is_empty() {
        read_codes_from_stdin()
    } else {
        args.codes
    };

    let mut failures = 0u32;
    for code in &codes {
        match args.command {
            Command::Generate => match args.algorithm.generate(code) {
                Ok(full_code) => println!("{}", full_code),
                Err(e) => {
                    eprintln!("Error: {}: {}", code, e);
                    failures += 1;
                }
            },
            Command::Check => {
                if args.algorithm.check(code) {
                    println!("OK: {}", code);
                } else {
                    println!("NG: {}", code);
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

mod debug_report;

use namecase::{DeclensionResponse, Gender, Language, NameCase};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.json {
        let response = match DeclensionResponse::for_full_name_with(config.language, &config.input, config.gender) {
            Ok(response) => response,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        };
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize response: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut nc = NameCase::new(config.language);
    nc.load_full_name(&config.input);
    if config.gender != Gender::Unknown {
        nc.set_gender(config.gender);
    }
    let metrics = nc.prepare_with_metrics();
    let cases = nc.full_cases();

    debug_report::print_cases(&config.input, nc.case_labels(), &cases, config.color);
    if config.verbose {
        debug_report::print_words(nc.word_collection(), &metrics, config.color);
    }
}

struct CliConfig {
    input: String,
    language: Language,
    gender: Gender,
    json: bool,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut language = Language::default();
    let mut gender = Gender::Unknown;
    let mut json = false;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("namecase {}", namecase::VERSION);
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "--lang" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --lang expects a value".to_string())?;
                language = parse_language(&value)?;
            }
            "--gender" | "-g" => {
                let value = args.next().ok_or_else(|| "error: --gender expects a value".to_string())?;
                gender = parse_gender(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--lang=") => {
                language = parse_language(arg.trim_start_matches("--lang="))?;
            }
            _ if arg.starts_with("--gender=") => {
                gender = parse_gender(arg.trim_start_matches("--gender="))?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, language, gender, json, verbose, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_language(value: &str) -> Result<Language, String> {
    value.parse().map_err(|err| format!("error: {err}"))
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    value.parse().map_err(|err| format!("error: {err}"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "namecase {version}

Declines Russian and Ukrainian personal names.

Usage:
  namecase [OPTIONS] [--] <full name...>
  namecase [OPTIONS] --input <text>

Options:
  -i, --input <text>         Full name to decline. If omitted, reads remaining
                             args or stdin when no args are provided.
  -l, --lang <code>          Rule set: ru (default) or uk.
  -g, --gender <gender>      male, female or auto (default: auto).
  --json                     Print the response as JSON.
  -v, --verbose              Show per-word roles, gender evidence and rules.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = namecase::VERSION
    )
}

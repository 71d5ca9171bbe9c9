use calc::cli::{generate_completions, Args, Commands};
use calc::config::AppConfig;
use calc::diagnostic::render_diagnostics;
use calc::interpreter;
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, Read, Write};

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    verbose_log(&config, "Starting calc");

    if let Some(expression) = &args.expression {
        verbose_log(&config, "Evaluating expression from command-line argument");
        if !evaluate(expression, &config) {
            std::process::exit(1);
        }
        return;
    }

    if atty::is(atty::Stream::Stdin) {
        run_interactive_mode(&config);
    } else {
        run_piped_mode(&config);
    }
}

/// Evaluate one expression, printing the result to stdout or the rendered
/// error to stderr. Returns whether evaluation succeeded.
fn evaluate(source: &str, config: &AppConfig) -> bool {
    match interpreter::parse_with_diagnostics(source) {
        Ok(result) => {
            println!("{}", result);
            true
        }
        Err(diagnostics) => {
            let rendered = render_diagnostics(source, "input", &diagnostics, config.color_enabled);
            eprint!("{}", rendered);
            false
        }
    }
}

fn run_interactive_mode(config: &AppConfig) {
    verbose_log(config, "Entering interactive mode");

    loop {
        print!("calc> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }

                // One bad input does not terminate the session.
                evaluate(trimmed, config);
            }
            Err(e) => {
                error_message(config, &format!("Error reading input: {}", e));
                break;
            }
        }
    }
}

fn run_piped_mode(config: &AppConfig) {
    verbose_log(config, "Reading expressions from stdin");

    let mut buffer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buffer) {
        error_message(config, &format!("Failed to read from stdin: {}", e));
        std::process::exit(1);
    }

    let mut had_error = false;
    for line in buffer.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !evaluate(trimmed, config) {
            had_error = true;
        }
    }

    if had_error {
        std::process::exit(1);
    }
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[calc:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}

//! Kestrel - a minimal browser shell
//!
//! Usage: kestrel [OPTIONS]

mod commands;
mod headless;
mod history;

use std::env;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use kestrel_shell::{Shell, ShellConfig, ShellLayout, UserAction};
use kestrel_url::{normalize, parse_web_url};

use crate::commands::{Command, COMMAND_HELP};
use crate::headless::HeadlessRenderer;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = ShellConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                return ExitCode::SUCCESS;
            }
            "--version" | "-V" => {
                println!("Kestrel {}", VERSION);
                return ExitCode::SUCCESS;
            }
            "--normalize" => {
                let Some(text) = args.get(i + 1) else {
                    eprintln!("Usage: {} --normalize <TEXT>", args[0]);
                    return ExitCode::FAILURE;
                };
                return print_normalized(text);
            }
            "--home" => {
                let Some(url) = args.get(i + 1) else {
                    eprintln!("Usage: {} --home <URL>", args[0]);
                    return ExitCode::FAILURE;
                };
                config.home_url = url.clone();
                i += 2;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage(&args[0]);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Err(e) = run_session(config).await {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Kestrel {} - A minimal browser shell

USAGE:
    {} [OPTIONS]

OPTIONS:
    -h, --help            Print this help message
    -V, --version         Print version information
    --normalize <TEXT>    Print the URL typed text resolves to
    --home <URL>          Address to open on (default: https://google.com)

Without --normalize, commands are read from stdin, one per line.

{}
EXAMPLES:
    {} --normalize "rust borrow checker"
    echo "go example.com" | {} --home duckduckgo.com
"#,
        VERSION, program, COMMAND_HELP, program, program
    );
}

/// Show what address-bar text normalizes to
fn print_normalized(text: &str) -> ExitCode {
    let url = normalize(text);
    match parse_web_url(&url) {
        Ok(_) => {
            println!("{}", url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} (invalid: {})", url, e);
            ExitCode::FAILURE
        }
    }
}

/// Drive a shell over a headless renderer from stdin commands
async fn run_session(config: ShellConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::new(config, HeadlessRenderer::new())?;
    shell.pump();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Edit(text) => shell.dispatch(UserAction::EditText(text)),
            Command::Go(text) => {
                if let Some(text) = text {
                    shell.dispatch(UserAction::EditText(text));
                }
                shell.dispatch(UserAction::Commit);
            }
            Command::Back => shell.dispatch(UserAction::Back),
            Command::Forward => shell.dispatch(UserAction::Forward),
            Command::Reload => shell.dispatch(UserAction::Reload),
            Command::Scroll(offset) => shell.renderer_mut().scroll_to(offset),
            Command::State => println!("{}", serde_json::to_string_pretty(shell.state())?),
            Command::Layout => print!("{}", render_layout(&shell.layout())),
            Command::Help => print!("{}", COMMAND_HELP),
            Command::Quit => break,
        }

        shell.pump();

        if let Some(url) = shell.renderer().current_url() {
            log::debug!("Renderer showing {}", url);
        }
        if let Some(error) = &shell.state().last_error {
            println!("! {}", error);
        }
    }

    Ok(())
}

/// Plain text rendering of the screen, top to bottom
fn render_layout(layout: &ShellLayout) -> String {
    let mut out = String::new();

    if let Some(bar) = &layout.address_bar {
        let text = if bar.text.is_empty() {
            bar.placeholder
        } else {
            bar.text.as_str()
        };
        out.push_str(&format!("[ {} ] [{}]", text, bar.go_button.label));
        if bar.error_visible {
            out.push_str(" (!)");
        }
        out.push('\n');
    }

    out.push_str(&format!("| {} |\n", layout.page_url));

    if layout.progress_visible {
        out.push_str("[==== loading ====]\n");
    }

    if let Some(buttons) = &layout.nav_bar {
        let labels: Vec<String> = buttons.iter().map(|b| format!("[{}]", b.label)).collect();
        out.push_str(&labels.join(" "));
        out.push('\n');
    }

    out
}

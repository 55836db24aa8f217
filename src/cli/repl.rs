//! Line-oriented command reader
//!
//! Reads commands either interactively from stdin or from a script file
//! and forwards them to the engine. Keywords are case-insensitive;
//! language and program names are case-sensitive.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::*;
use eyre::{Context, Result};
use log::info;

use polyrun::domain::Tool;
use polyrun::{Engine, PolyrunError};

use crate::config::Config;

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    DefineProgram { name: String, base: String },
    DefineInterpreter { base: String, target: String },
    DefineTranslator { base: String, source: String, destination: String },
    Execute { program: String },
    List,
    Help,
    Exit,
}

/// Parse one input line. Blank lines and `#` comments parse to `None`;
/// anything else is a command or a descriptive error.
pub fn parse_line(line: &str) -> std::result::Result<Option<ReplCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let keyword = tokens[0].to_uppercase();

    let command = match keyword.as_str() {
        "DEFINE" => {
            let Some(kind) = tokens.get(1) else {
                return Err("define needs a kind: program, interpreter or translator".to_string());
            };
            match (kind.to_uppercase().as_str(), &tokens[2..]) {
                ("PROGRAM", [name, base]) => ReplCommand::DefineProgram {
                    name: name.to_string(),
                    base: base.to_string(),
                },
                ("INTERPRETER", [base, target]) => ReplCommand::DefineInterpreter {
                    base: base.to_string(),
                    target: target.to_string(),
                },
                ("TRANSLATOR", [base, source, destination]) => ReplCommand::DefineTranslator {
                    base: base.to_string(),
                    source: source.to_string(),
                    destination: destination.to_string(),
                },
                ("PROGRAM", _) => return Err("usage: define program <name> <base-language>".to_string()),
                ("INTERPRETER", _) => {
                    return Err("usage: define interpreter <base-language> <target-language>".to_string());
                }
                ("TRANSLATOR", _) => {
                    return Err(
                        "usage: define translator <base-language> <source-language> <destination-language>"
                            .to_string(),
                    );
                }
                _ => return Err(format!("unknown definition kind '{kind}'")),
            }
        }
        "EXECUTE" => match &tokens[1..] {
            [program] => ReplCommand::Execute {
                program: program.to_string(),
            },
            _ => return Err("usage: execute <program-name>".to_string()),
        },
        "LIST" => ReplCommand::List,
        "HELP" => ReplCommand::Help,
        "EXIT" | "QUIT" => ReplCommand::Exit,
        _ => return Err(format!("unknown command '{}'", tokens[0])),
    };

    Ok(Some(command))
}

/// Run the interactive command loop on stdin
pub fn run_interactive(config: &Config) -> Result<()> {
    let mut engine = Engine::with_local(&config.local_language);
    info!("interactive session started, local language = {}", config.local_language);

    println!(
        "{} local language is '{}'. Type 'help' for commands.",
        "polyrun:".cyan(),
        config.local_language
    );

    let stdin = io::stdin();
    loop {
        print!("{}", config.prompt);
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break; // EOF
        }

        if !dispatch_line(&mut engine, &line) {
            break;
        }
    }

    Ok(())
}

/// Run all commands from a script file, one per line
pub fn run_script(path: &Path, config: &Config) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    info!("running script {}", path.display());

    let mut engine = Engine::with_local(&config.local_language);
    for line in content.lines() {
        if config.debug {
            println!("{} {}", ">".dimmed(), line);
        }
        if !dispatch_line(&mut engine, line) {
            break;
        }
    }

    Ok(())
}

/// Parse and run one line. Returns false when the session should end.
fn dispatch_line(engine: &mut Engine, line: &str) -> bool {
    match parse_line(line) {
        Ok(Some(command)) => dispatch(engine, command),
        Ok(None) => true,
        Err(reason) => {
            println!("{} {}", "error:".red(), reason);
            println!("Type 'help' for the command reference.");
            true
        }
    }
}

/// Execute one parsed command against the engine, printing the outcome.
/// Returns false when the session should end.
fn dispatch(engine: &mut Engine, command: ReplCommand) -> bool {
    match command {
        ReplCommand::DefineProgram { name, base } => {
            match engine.define_program(&name, &base) {
                Ok(()) => println!("{} program '{name}' written in '{base}'", "Created".green()),
                Err(err) => report_define_error(err),
            }
        }
        ReplCommand::DefineInterpreter { base, target } => {
            match engine.define_interpreter(&base, &target) {
                Ok(()) => println!(
                    "{} interpreter for '{target}' written in '{base}'",
                    "Created".green()
                ),
                Err(err) => report_define_error(err),
            }
        }
        ReplCommand::DefineTranslator {
            base,
            source,
            destination,
        } => match engine.define_translator(&base, &source, &destination) {
            Ok(()) => println!(
                "{} translator from '{source}' to '{destination}' written in '{base}'",
                "Created".green()
            ),
            Err(err) => report_define_error(err),
        },
        ReplCommand::Execute { program } => match engine.execute(&program) {
            Ok(true) => println!("{} program '{program}' executed successfully", "OK:".green()),
            Ok(false) => println!(
                "{} program '{program}' cannot be executed yet",
                "Blocked:".red()
            ),
            Err(err) => println!("{} {err}", "error:".red()),
        },
        ReplCommand::List => print_listing(engine),
        ReplCommand::Help => print_help(),
        ReplCommand::Exit => return false,
    }
    true
}

fn report_define_error(err: PolyrunError) {
    println!("{} {err}", "Rejected:".yellow());
}

fn print_listing(engine: &Engine) {
    println!("{}", "Programs:".cyan());
    for program in engine.programs() {
        println!("  {} (written in {})", program.name, program.base_language);
    }

    println!("{}", "Interpreters:".cyan());
    for tool in engine.interpreters() {
        if let Tool::Interpreter { base, target } = tool {
            println!("  {target} interpreter written in {base}");
        }
    }

    println!("{}", "Translators:".cyan());
    for tool in engine.translators() {
        if let Tool::Translator {
            base,
            source,
            destination,
        } = tool
        {
            println!("  {source} -> {destination} translator written in {base}");
        }
    }

    println!("{}", "Languages:".cyan());
    for (name, runnable) in engine.languages() {
        let marker = if runnable {
            "runnable".green()
        } else {
            "not runnable".red()
        };
        println!("  {name} [{marker}]");
    }

    println!("Pending tools: {}", engine.pending_tools());
}

fn print_help() {
    println!("Commands:");
    println!("  define program <name> <base-language>");
    println!("      Register a program written in the given language.");
    println!("  define interpreter <base-language> <target-language>");
    println!("      An interpreter for <target-language>, itself written in <base-language>.");
    println!("  define translator <base-language> <source-language> <destination-language>");
    println!("      A translator from source to destination, written in <base-language>.");
    println!("  execute <program-name>");
    println!("      Check whether the program can run through the known tool chains.");
    println!("  list");
    println!("      Show everything defined so far and which languages are runnable.");
    println!("  help");
    println!("      This text.");
    println!("  exit | quit");
    println!("      End the session.");
}

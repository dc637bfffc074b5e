// sprig: read-loop driver for the sprig parser

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use sprig::parser::lexer::{Lexer, LexerConfig, WhitespacePolicy};
use sprig::parser::Parser;

/// Parse sprig source and print the resulting syntax tree
#[derive(Debug, ClapParser)]
#[command(name = "sprig", author, about, version)]
struct Args {
    /// Source file; every line is parsed on its own. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(short, long)]
    tokens: bool,

    /// Characters skipped between tokens
    #[arg(long, value_enum, default_value_t = Whitespace::Space)]
    whitespace: Whitespace,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Whitespace {
    /// Only the space character
    Space,
    /// Any ASCII whitespace
    Ascii,
}

impl From<Whitespace> for WhitespacePolicy {
    fn from(value: Whitespace) -> Self {
        match value {
            Whitespace::Space => WhitespacePolicy::SpaceOnly,
            Whitespace::Ascii => WhitespacePolicy::Ascii,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = LexerConfig {
        whitespace: args.whitespace.into(),
    };

    match &args.file {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            for (index, line) in source.lines().enumerate() {
                if !line.trim().is_empty() {
                    run_line(line, config, args.tokens, Some(index + 1))?;
                }
            }
        }
        None => repl(config, args.tokens)?,
    }

    Ok(())
}

fn repl(config: LexerConfig, tokens: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_tty();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", "sprig> ".bold());
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        run_line(&line?, config, tokens, None)?;
    }

    Ok(())
}

/// Parse one line as a fresh session and report the outcome.
fn run_line(
    line: &str,
    config: LexerConfig,
    tokens: bool,
    line_number: Option<usize>,
) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let lexer = Lexer::with_config(line, config);

    if tokens {
        for token in lexer.tokenize() {
            writeln!(stdout, "{token}")?;
        }
        return Ok(());
    }

    match Parser::new(lexer).parse() {
        Ok(program) => write!(stdout, "{program}")?,
        Err(e) => {
            let prefix = match line_number {
                Some(n) => format!("line {n}: "),
                None => String::new(),
            };
            eprintln!("{}", format!("{prefix}parse error: {e}").red());
        }
    }

    Ok(())
}

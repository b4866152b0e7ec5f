//! MiniC scanner command line
//!
//! Usage: minic lex --input <file> [--output <file>]

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser as ClapParser, Subcommand};
use log::debug;
use minic::driver::{Driver, LexConfig};

#[derive(ClapParser, Debug)]
#[command(name = "minic")]
#[command(author = "MiniC Team")]
#[command(version)]
#[command(about = "MiniC lexer", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenize a source file
    Lex {
        /// Input source file
        #[arg(short, long)]
        input: PathBuf,

        /// Output tokens file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show diagnostics with source snippets
        #[arg(long)]
        pretty: bool,

        /// Exit with an error status if the input has lexical errors
        #[arg(long)]
        deny_errors: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    match &args.command {
        Command::Lex {
            input,
            output,
            pretty,
            deny_errors,
        } => {
            let driver = Driver::new(LexConfig {
                pretty: *pretty,
                deny_errors: *deny_errors,
            });
            let result = driver.run(input, output.as_deref(), &mut io::stdout().lock())?;
            debug!("{} lexical error(s)", result.error_count);
        }
    }
    Ok(())
}

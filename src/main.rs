use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use idlparse::ast::{Expr, ToIdlString};
use idlparse::error::{DiagnosticError, IdlError};
use idlparse::json;
use idlparse::IdlParser;

#[derive(Parser)]
#[command(name = "idlparse")]
#[command(author, version, about = "Parse IDL files and write them back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Trace every combinator invocation (very noisy)
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an IDL file for syntax errors
    Check {
        /// The IDL file to check
        input: PathBuf,
    },

    /// Parse an IDL file and print it back from the AST
    Print {
        /// The IDL file to print
        input: PathBuf,
    },

    /// Emit the JSON projection of an IDL file
    Json {
        /// The IDL file to convert
        input: PathBuf,

        /// Emit a single line instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },

    /// Dump the full AST (including whitespace nodes) as JSON
    DumpAst {
        /// The IDL file to dump
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on flags
    if cli.trace {
        log::set_max_level(log::LevelFilter::Trace);
    } else if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Check { input } => check(&input),
        Commands::Print { input } => print(&input),
        Commands::Json { input, compact } => to_json(&input, !compact),
        Commands::DumpAst { input } => dump_ast(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Parsing state for a single input file
struct ParseState {
    source: String,
    files: SimpleFiles<String, String>,
    file_id: usize,
}

impl ParseState {
    fn new(input: &Path) -> Result<Self> {
        let source = fs::read_to_string(input)
            .with_context(|| format!("Failed to read source file: {:?}", input))?;

        let mut files = SimpleFiles::new();
        let file_id = files.add(input.display().to_string(), source.clone());

        Ok(Self {
            source,
            files,
            file_id,
        })
    }

    fn report_error(&self, error: IdlError) -> Result<()> {
        let diagnostic = DiagnosticError::new(error, self.file_id).to_diagnostic(&self.source);
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();
        codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)?;
        Ok(())
    }
}

fn parse(input: &Path) -> Result<Vec<Expr>> {
    if input.extension().and_then(|ext| ext.to_str()) != Some("idl") {
        log::warn!("input file should be .idl: {:?}", input);
    }
    log::info!("reading {:?}...", input);

    let state = ParseState::new(input)?;
    match IdlParser::new().parse(&state.source) {
        Ok(exprs) => Ok(exprs),
        Err(e) => {
            state.report_error(IdlError::parse(input, e.clone()))?;
            Err(IdlError::parse(input, e)).context("Parsing failed")
        }
    }
}

fn check(input: &Path) -> Result<()> {
    log::info!("Checking {:?}", input);
    let exprs = parse(input)?;
    log::debug!("{} top-level expressions", exprs.len());
    println!("{}: No errors found", "success".green().bold());
    Ok(())
}

fn print(input: &Path) -> Result<()> {
    let exprs = parse(input)?;
    print!("{}", exprs.to_idl_string());
    Ok(())
}

fn to_json(input: &Path, pretty: bool) -> Result<()> {
    let exprs = parse(input)?;
    println!("{}", json::to_json_string(&exprs, pretty)?);
    Ok(())
}

fn dump_ast(input: &Path) -> Result<()> {
    let exprs = parse(input)?;
    println!("{}", serde_json::to_string_pretty(&exprs)?);
    Ok(())
}

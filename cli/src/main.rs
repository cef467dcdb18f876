mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use xlsx_compare::CompareError;

#[derive(Parser)]
#[command(name = "xlsx-compare")]
#[command(about = "Compare Excel workbooks sheet-by-sheet and export the differences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare two workbooks and write a comparison document")]
    Compare {
        #[arg(help = "Path to the first (left) workbook")]
        file1: String,
        #[arg(help = "Path to the second (right) workbook")]
        file2: String,
        #[arg(help = "Output document path", default_value = "comparison_output.xlsx")]
        output: String,
        #[arg(
            long,
            help = "Comma-separated list of sheet names to compare (default: all sheets)"
        )]
        sheets: Option<String>,
        #[arg(long, short, value_enum, default_value = "text", help = "Summary output format")]
        format: OutputFormat,
        #[arg(long, short, help = "Quiet mode: suppress progress output")]
        quiet: bool,
    },
    #[command(about = "Show information about a workbook")]
    Info {
        #[arg(help = "Path to the workbook")]
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            file1,
            file2,
            output,
            sheets,
            format,
            quiet,
        } => commands::compare::run(&file1, &file2, &output, sheets.as_deref(), format, quiet),
        Commands::Info { path } => commands::info::run(&path),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    if is_internal_error(err) {
        ExitCode::from(3)
    } else {
        ExitCode::from(2)
    }
}

fn is_internal_error(err: &anyhow::Error) -> bool {
    // Environment failures (unreadable inputs, unwritable output) carry a
    // CompareError somewhere in the chain; anything else is a bug.
    !err.chain().any(|cause| cause.is::<CompareError>())
}

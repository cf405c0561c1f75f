//! One-shot CLI commands that reuse the core client without the TUI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;
use color_eyre::eyre::{bail, Result};
use indicatif::ProgressBar;

use casedeck_core::text::{sanitize, truncate};
use casedeck_core::{ApiClient, Config, SelectedFile, Stats, TestCase, TestCaseApi};

#[derive(Subcommand)]
pub enum Command {
    /// Upload a requirement document and generate test cases
    Upload {
        /// Path to a PDF, DOCX, or TXT requirement document
        file: PathBuf,
    },
    /// List test cases
    List {
        /// Only show cases generated from this document
        #[arg(long)]
        filename: Option<String>,
    },
    /// Download the spreadsheet export
    Export {
        /// Directory to write the spreadsheet into (defaults to the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete ALL test cases on the server
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(command: Command, config: &Config, api: &ApiClient) -> Result<()> {
    match command {
        Command::Upload { file } => upload(file, api).await,
        Command::List { filename } => list(filename.as_deref(), api).await,
        Command::Export { output } => export(output, config, api).await,
        Command::Clear { yes } => clear(yes, api).await,
    }
}

async fn upload(path: PathBuf, api: &ApiClient) -> Result<()> {
    let file = match SelectedFile::from_path(&path) {
        Ok(file) => file,
        Err(e) => bail!("{e}"),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Generating test cases from {}...", file.name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = api.upload(&file).await;
    spinner.finish_and_clear();
    let response = result?;

    if response.replaced {
        println!(
            "Replaced previous test cases. Generated {} new test cases for \"{}\"",
            response.test_cases.len(),
            response.filename
        );
    } else {
        println!(
            "Successfully generated {} test cases for \"{}\"",
            response.test_cases.len(),
            response.filename
        );
    }
    println!();
    print_table(&response.test_cases);

    Ok(())
}

async fn list(filename: Option<&str>, api: &ApiClient) -> Result<()> {
    let cases = api.list(filename).await?;

    if cases.is_empty() {
        println!("No test cases yet. Upload a requirement document to get started!");
        return Ok(());
    }

    print_table(&cases);

    let stats = Stats::compute(&cases);
    println!();
    println!(
        "{} total | {} functional | {} non-functional | {} high priority",
        stats.total, stats.functional, stats.non_functional, stats.high_priority
    );

    Ok(())
}

async fn export(output: Option<PathBuf>, config: &Config, api: &ApiClient) -> Result<()> {
    let dir = output.unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
    let path = api.export(&dir).await?;
    println!("Exported test cases to {}", path.display());
    Ok(())
}

async fn clear(yes: bool, api: &ApiClient) -> Result<()> {
    if !yes {
        print!("Are you sure you want to delete ALL test cases? This action cannot be undone. [y/N] ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let message = api.clear_all().await?;
    println!("{message}");
    Ok(())
}

fn print_table(cases: &[TestCase]) {
    println!("{:>5}  {:<50}  {:<8}  {:<16}", "ID", "Name", "Priority", "Type");
    for case in cases {
        println!(
            "{:>5}  {:<50}  {:<8}  {:<16}",
            case.id,
            truncate(&sanitize(&case.test_case_name), 50),
            sanitize(&case.priority),
            sanitize(&case.test_type),
        );
    }
}

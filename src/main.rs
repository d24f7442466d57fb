use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use profile_capture::batch::{self, BatchStats};
use profile_capture::capture::{self, Submission};
use profile_capture::settings::{OutputFormat, Settings};
use profile_capture::{Field, ProfileRecord};

#[derive(Parser)]
#[command(name = "profile_capture", about = "Extract profile fields from copied profile text")]
struct Cli {
    /// Pin the current year used to bound graduation years
    #[arg(long, global = true)]
    year: Option<i32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse profile text (file or stdin) into a record
    Extract {
        file: Option<PathBuf>,
        /// Output layout (default from PROFILE_OUTPUT, else pretty)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Find the first email address in text (file or stdin)
    Email { file: Option<PathBuf> },
    /// Parse profile text and print the spreadsheet submission body
    Payload {
        file: Option<PathBuf>,
        #[arg(short, long)]
        email: String,
        /// Profile page URL
        #[arg(short, long)]
        url: Option<String>,
        /// Also print the review table on stderr
        #[arg(long)]
        review: bool,
    },
    /// Parse many text files (directories expand to their *.txt files)
    Batch {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Files per parallel chunk
        #[arg(long)]
        chunk_size: Option<usize>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("loading PROFILE_* settings")?;
    info!(settings = ?settings, "Starting profile capture");

    let t0 = Instant::now();
    let year = cli.year.unwrap_or_else(|| settings.year());

    let code = match cli.command {
        Commands::Extract { file, output } => {
            let text = read_input(file.as_deref())?;
            let record = profile_capture::extract_with_year(&text, year);
            print_warnings(&capture::capture_warnings(&text, &record, None));
            print_record(&record, output.unwrap_or(settings.output))?;
            ExitCode::SUCCESS
        }
        Commands::Email { file } => {
            let text = read_input(file.as_deref())?;
            match capture::capture_email(&text) {
                Ok(email) => {
                    println!("{}", email);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Payload {
            file,
            email,
            url,
            review,
        } => {
            let text = read_input(file.as_deref())?;
            let record = match capture::capture_profile(&text, year) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            print_warnings(&capture::capture_warnings(&text, &record, url.as_deref()));
            match Submission::assemble(record, &email, url.as_deref()) {
                Ok(submission) => {
                    println!("{}", serde_json::to_string(&submission)?);
                    if review {
                        for (label, value) in submission.review_lines() {
                            eprintln!("{:<12} {}", label, value);
                        }
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Batch { paths, chunk_size } => {
            let inputs = batch::collect_inputs(&paths)?;
            if inputs.is_empty() {
                println!("No input files found.");
                return Ok(ExitCode::SUCCESS);
            }
            eprintln!("Parsing {} files...", inputs.len());
            let chunk_size = chunk_size.unwrap_or(settings.chunk_size);
            let items = batch::run(&inputs, year, chunk_size, true);
            for item in &items {
                println!("{}", serde_json::to_string(item)?);
            }
            let stats = BatchStats::from_items(&items);
            stats.print();
            if stats.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(code)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_warnings(warnings: &[String]) {
    for w in warnings {
        eprintln!("Warning: {}", w);
    }
}

fn print_record(record: &ProfileRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Compact => println!("{}", serde_json::to_string(record)?),
        OutputFormat::Table => {
            for field in Field::ALL {
                let mark = if record.is_captured(field) { "+" } else { "-" };
                println!("{} {:<10} | {}", mark, field.label(), record.get(field));
            }
        }
    }
    Ok(())
}

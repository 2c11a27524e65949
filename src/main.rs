use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};

use edi_po_scan::reader::{AsyncFileReader, ReaderConfig};
use edi_po_scan::{report, scanner, segment_records, PoClassifier};

#[derive(Parser, Debug)]
#[command(name = "edi-po-scan")]
#[command(about = "Flags EDI records whose purchase-order values look suspicious")]
#[command(version)]
struct Args {
    /// EDI text file to scan (prompted for when omitted)
    input: Option<PathBuf>,

    /// Write the text report to this file instead of listing to the console
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Console listing format (the report file is always text)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, conflicts_with = "output")]
    format: OutputFormat,

    /// Log at debug level
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Paths and presentation for one run, resolved from arguments or prompts
#[derive(Debug)]
struct RunConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    // WHY: structured JSON logging on stderr keeps stdout free for the listing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = resolve_config(args).await?;
    info!(?config, "Starting scan");

    let classifier = PoClassifier::new().context("Failed to compile PO classifier")?;

    let file_reader = AsyncFileReader::new(ReaderConfig::default());
    let (lines, _stats) = file_reader.read_file_lines(&config.input).await?;

    let records = segment_records(&lines);
    let text_output = config.output.is_some() || config.format == OutputFormat::Text;
    if text_output {
        println!(
            "\nFound {} records. Scanning for potential problems...\n",
            records.len()
        );
    }

    let scan = scanner::scan_records(&classifier, records);

    match (&config.output, config.format) {
        (Some(path), _) => {
            report::write_report(path, &scan).await?;
            println!("Scan complete. Results written to:\n{}", path.display());
        }
        (None, OutputFormat::Text) => print!("{}", report::render_console(&scan)),
        (None, OutputFormat::Json) => println!("{}", report::render_json(&scan)?),
    }

    Ok(())
}

/// Take paths from the arguments, falling back to interactive prompts when
/// no input path was given
async fn resolve_config(args: Args) -> Result<RunConfig> {
    if let Some(input) = args.input {
        return Ok(RunConfig {
            input,
            output: args.output,
            format: args.format,
        });
    }

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    let input = prompt(&mut stdin, "Enter the path to the EDI text file:")
        .await?
        .filter(|answer| !answer.is_empty())
        .context("No input path provided")?;

    // JSON only goes to the console, so there is no report path to ask for
    let output = match (args.output, args.format) {
        (Some(path), _) => Some(path),
        (None, OutputFormat::Json) => None,
        (None, OutputFormat::Text) => prompt(
            &mut stdin,
            "Enter the path for the output report file (leave blank for console):",
        )
        .await?
        .filter(|answer| !answer.is_empty())
        .map(PathBuf::from),
    };

    Ok(RunConfig {
        input: PathBuf::from(input),
        output,
        format: args.format,
    })
}

async fn prompt<R>(lines: &mut tokio::io::Lines<R>, question: &str) -> Result<Option<String>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    println!("{question}");
    print!("> ");
    std::io::stdout().flush()?;

    let answer = lines.next_line().await.context("Failed to read from stdin")?;
    Ok(answer.map(|a| a.trim().to_string()))
}

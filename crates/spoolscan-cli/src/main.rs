use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use spoolscan::{FilamentRecord, ScanConfig, Scanner, parse_label_text};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "spoolscan", version, about = "Extract structured filament data from spool label photos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a spool label photograph
    Scan {
        /// Path to the label image (PNG or JPEG)
        image: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to the tesseract binary (otherwise resolved from PATH)
        #[arg(long)]
        tesseract: Option<PathBuf>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip all network lookups
        #[arg(long)]
        offline: bool,
    },

    /// Parse already-extracted label text from a file, or stdin with "-"
    Parse {
        /// Text file to parse, or "-" for stdin
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("processing failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Scan { image, format, tesseract, config, offline } => {
            let mut scan_config = match &config {
                Some(path) => ScanConfig::from_toml_file(path)
                    .with_context(|| format!("failed to load config '{}'", path.display()))?,
                None => ScanConfig::default(),
            };
            if let Some(binary) = tesseract {
                scan_config.ocr.binary = Some(binary);
            }

            let scanner = if offline {
                Scanner::offline(&scan_config)
            } else {
                Scanner::new(&scan_config)?
            };
            let record = scanner.scan_file(&image).await?;
            print_record(&record, format)?;
        }
        Command::Parse { input, format } => {
            let text = read_input(&input)
                .with_context(|| format!("failed to read '{input}'"))?;
            let record = parse_label_text(&text);
            print_record(&record, format)?;
        }
    }
    Ok(())
}

fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}

fn print_record(record: &FilamentRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => print!("{}", render_text(record)),
    }
    Ok(())
}

fn render_text(record: &FilamentRecord) -> String {
    let mut out = String::new();
    let mut field = |label: &str, value: &Option<String>| {
        if let Some(value) = value {
            out.push_str(&format!("{label:<14}{value}\n"));
        }
    };

    field("Brand:", &record.brand);
    field("Material:", &record.material);
    field("Color:", &record.color_name);
    field("Hex:", &record.color_hex);
    field("Weight:", &record.weight_g.map(|w| format!("{w} g")));
    field("Diameter:", &Some(format!("{:.2} mm", record.diameter_or_default())));
    field("Nozzle temp:", &record.temp_nozzle);
    field("Code:", &record.filament_code);
    field("Barcode:", &record.barcode);
    field("Symbology:", &record.barcode_type);
    field("Product:", &record.product_title);
    out
}

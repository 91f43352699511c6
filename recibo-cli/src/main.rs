//! recibo: run receipt extraction over OCR dumps from the command line.
//!
//! Inputs are either JSON OCR dumps (bare `RawOcrResult` shape or the
//! provider shape nested under a `document` key) or plain text files,
//! which are treated as a text-only OCR pass.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use recibo_core::{RawOcrResult, ReceiptRecord};
use recibo_extract::extract;

#[derive(Parser, Debug)]
#[command(name = "recibo", version, about = "Receipt OCR field extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract one receipt and print the record as JSON
    Extract {
        /// OCR dump (.json) or plain text file
        input: PathBuf,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Print the human-readable confirmation block instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Extract many receipts and write one CSV row per receipt
    Export {
        /// OCR dumps and/or text files
        inputs: Vec<PathBuf>,

        /// Output CSV path
        #[arg(long)]
        out: PathBuf,
    },
}

fn load_ocr_result(path: &Path) -> Result<RawOcrResult> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let value: serde_json::Value = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        RawOcrResult::from_json_value(value)
    } else {
        Ok(RawOcrResult::from_text(contents))
    }
}

fn csv_row(path: &Path, record: &ReceiptRecord) -> Vec<String> {
    let opt = |v: Option<f64>| v.map(|a| format!("{a:.2}")).unwrap_or_default();
    vec![
        path.display().to_string(),
        record.merchant_name.clone(),
        record.date.to_string(),
        record.time.clone().unwrap_or_default(),
        opt(record.subtotal_amount),
        opt(record.tax_amount),
        opt(record.total_amount),
        record.currency.clone(),
        record
            .payment_method
            .map(|m| m.label().to_string())
            .unwrap_or_default(),
        record.line_items.len().to_string(),
        format!("{:.2}", record.confidence_score),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            input,
            pretty,
            summary,
        } => {
            let raw = load_ocr_result(&input)?;
            let record = extract(&raw);

            if summary {
                print!("{}", record.summary());
            } else if pretty {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", serde_json::to_string(&record)?);
            }
        }

        Command::Export { inputs, out } => {
            let mut writer = csv::Writer::from_path(&out)
                .with_context(|| format!("creating {}", out.display()))?;
            writer.write_record([
                "source",
                "merchant",
                "date",
                "time",
                "subtotal",
                "tax",
                "total",
                "currency",
                "payment_method",
                "line_items",
                "confidence",
            ])?;

            for input in &inputs {
                let raw = load_ocr_result(input)?;
                let record = extract(&raw);
                tracing::debug!(input = %input.display(), merchant = %record.merchant_name, "extracted");
                writer.write_record(csv_row(input, &record))?;
            }
            writer.flush()?;

            println!("Wrote {} receipt(s) to {}", inputs.len(), out.display());
        }
    }

    Ok(())
}

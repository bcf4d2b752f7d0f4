//! Command-line front end

use crate::app::QuoteApp;
use crate::config::{
    AppConfig, ClientConfig, ExtractorConfig, DEFAULT_BASE_URL, DEFAULT_FUNCTION_PATH,
};
use crate::quote::{parse_quantities, QuoteParameters, DEFAULT_HOURLY_RATE};
use crate::render::QuoteView;
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pdf-quote", version, about = "Quote a part from its PDF drawing")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "PDF_QUOTE_ENDPOINT",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the quoting deployment"
    )]
    pub endpoint: String,
    #[arg(
        long,
        global = true,
        env = "PDF_QUOTE_FUNCTION_PATH",
        default_value = DEFAULT_FUNCTION_PATH,
        help = "Path of the quoting function"
    )]
    pub function_path: String,
    #[arg(long, global = true, help = "Request timeout in seconds (default: none)")]
    pub timeout_secs: Option<u64>,
    #[arg(
        long,
        global = true,
        env = "PDFIUM_DYNAMIC_LIB_PATH",
        help = "Directory containing the PDFium library"
    )]
    pub pdfium_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Password for encrypted PDFs")]
    pub password: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract and print the text of a PDF
    Extract {
        file: PathBuf,
        #[arg(
            long,
            default_value_t = false,
            help = "Print the full text instead of the preview"
        )]
        full: bool,
    },
    /// Extract a PDF and request a quote for it
    Quote(QuoteArgs),
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub material: String,
    #[arg(long, default_value_t = 0.0)]
    pub price_per_kg: f64,
    #[arg(long, default_value_t = DEFAULT_HOURLY_RATE)]
    pub hourly_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    pub paint_per_kg: f64,
    #[arg(long, default_value_t = false)]
    pub apply_paint: bool,
    #[arg(long, default_value_t = false)]
    pub include_setup: bool,
    #[arg(
        long,
        default_value = "",
        help = "Comma-separated order quantities, e.g. \"10, 50\""
    )]
    pub quantities: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long, help = "Write the result to a file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl QuoteArgs {
    pub fn parameters(&self) -> QuoteParameters {
        QuoteParameters {
            material: self.material.clone(),
            price_per_kg: self.price_per_kg,
            hourly_rate: self.hourly_rate,
            paint_per_kg: self.paint_per_kg,
            apply_paint: self.apply_paint,
            include_setup: self.include_setup,
            quantities: parse_quantities(&self.quantities),
        }
    }
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig {
            client: ClientConfig {
                base_url: self.endpoint.clone(),
                function_path: self.function_path.clone(),
                timeout: self.timeout_secs.map(Duration::from_secs),
            },
            extractor: ExtractorConfig {
                library_dir: self.pdfium_dir.clone(),
                password: self.password.clone(),
            },
        }
    }
}

/// Run one command; status lines go to stderr, results to stdout or a file
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut app = QuoteApp::from_config(&cli.config())?;

    match cli.command {
        Commands::Extract { file, full } => {
            app.select_file(file)?;
            let result = app.analyze().await.map(|doc| {
                if full {
                    doc.text().to_string()
                } else {
                    doc.preview().to_string()
                }
            });
            eprintln!("{}", app.status());
            println!("{}", result?);
        }
        Commands::Quote(args) => {
            app.select_file(args.file.clone())?;
            let analyzed = app.analyze().await.map(|_| ());
            eprintln!("{}", app.status());
            analyzed?;

            let view = app.calculate(&args.parameters()).await;
            eprintln!("{}", app.status());
            let view = view?;

            let rendered = format_output(&app, &view, args.format)?;
            match &args.output {
                Some(path) => std::fs::write(path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}

fn format_output<E: crate::pdf::TextExtractor>(
    app: &QuoteApp<E>,
    view: &QuoteView,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => view.to_string(),
        OutputFormat::Html => view.to_html(),
        OutputFormat::Json => {
            let quote = app.session().quote().context("No quote in session")?;
            let mut json = serde_json::to_string_pretty(quote)?;
            json.push('\n');
            json
        }
    })
}

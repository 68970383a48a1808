//! # Pricetag CLI
//!
//! Command-line interface for product label generation.
//!
//! ## Usage
//!
//! ```bash
//! # List the catalog
//! pricetag list
//!
//! # Resolve a WSN or WID code
//! pricetag lookup xifkjoq --json
//!
//! # Autocomplete a partial code or title
//! pricetag suggest bulb
//!
//! # Render a label to PNG (default name: barcode_label_<wsn>_<millis>.png)
//! pricetag render WSN001 --png label.png
//!
//! # Send a label to the system printer
//! pricetag print WSN001 --printer zebra
//!
//! # Interactive session on the terminal
//! pricetag --catalog products.json --font DejaVuSans.ttf --currency ₹ interactive
//! ```

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

use pricetag::{
    Catalog, LabelConfig, LabelRenderer, PricetagError,
    catalog::ResolvedProduct,
    export::{self, PrintHandoff, SystemPrinter},
    fonts::{FontSet, TtfFace},
    logging,
    session::Session,
    surface::RasterSurface,
    terminal::{TerminalInput, TerminalStatus, TerminalSuggestions},
};

/// Pricetag - Product label generator
#[derive(Parser, Debug)]
#[command(name = "pricetag")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in sample products)
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// TrueType font for label text (defaults to the built-in bitmap font)
    #[arg(long, global = true, value_name = "FILE")]
    font: Option<PathBuf>,

    /// TrueType font for bold text (used with --font)
    #[arg(long, global = true, value_name = "FILE")]
    bold_font: Option<PathBuf>,

    /// Currency symbol printed before prices
    #[arg(long, global = true, default_value = "Rs.")]
    currency: String,

    /// Label width in pixels
    #[arg(long, global = true, default_value_t = LabelConfig::REFERENCE_WIDTH)]
    width: u32,

    /// Label height in pixels
    #[arg(long, global = true, default_value_t = LabelConfig::REFERENCE_HEIGHT)]
    height: u32,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every product in the catalog
    List,

    /// Resolve a WSN or WID code
    Lookup {
        code: String,

        /// Print the product as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show autocomplete candidates for a partial code or title
    Suggest { query: String },

    /// Render a label to a PNG file
    Render {
        code: String,

        /// Output file (defaults to the download name)
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Send a label to the system print spooler
    Print {
        code: String,

        /// Printer name (defaults to the system default printer)
        #[arg(long)]
        printer: Option<String>,

        /// Spooler command that reads the PNG from stdin
        #[arg(long, default_value = "lp")]
        command: String,
    },

    /// Run an interactive session on the terminal
    Interactive,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PricetagError> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample(),
    };

    match &cli.command {
        Commands::List => {
            println!("{:<8} {:<9} {:>6} {:>6}  Title", "WSN", "WID", "MRP", "FSP");
            for (wsn, record) in catalog.iter() {
                println!(
                    "{:<8} {:<9} {:>6} {:>6}  {}",
                    wsn, record.wid, record.mrp, record.fsp, record.title
                );
            }
        }

        Commands::Lookup { code, json } => {
            let product = catalog.resolve(&code.trim().to_uppercase())?;
            if *json {
                let text = serde_json::to_string_pretty(&product)
                    .map_err(|e| PricetagError::Catalog(e.to_string()))?;
                println!("{}", text);
            } else {
                print_product(&product, &cli.currency);
            }
        }

        Commands::Suggest { query } => {
            let matches = catalog.suggest(&query.trim().to_uppercase());
            if matches.is_empty() {
                println!("No matches for '{}'", query);
            }
            for product in matches {
                println!("{:<8} {:<9} {}", product.wsn, product.record.wid, product.record.title);
            }
        }

        Commands::Render { code, png } => {
            let product = catalog.resolve(&code.trim().to_uppercase())?;
            let surface = render_label(&cli, &product)?;
            let path = png.clone().unwrap_or_else(|| {
                PathBuf::from(export::download_file_name(&product.wsn, Utc::now()))
            });
            export::save_png(&surface, &path)?;
            println!("Saved to {}", path.display());
        }

        Commands::Print {
            code,
            printer,
            command,
        } => {
            let product = catalog.resolve(&code.trim().to_uppercase())?;
            let surface = render_label(&cli, &product)?;
            let png = export::encode_png(&surface)?;

            let mut spooler = SystemPrinter::new(command.clone());
            if let Some(name) = printer {
                spooler = spooler.destination(name.clone());
            }
            println!("Printing label for {}...", product.wsn);
            spooler.print(&png, &format!("label-{}", product.wsn))?;
            println!("Printed successfully!");
        }

        Commands::Interactive => {
            let renderer = LabelRenderer::new(label_config(&cli));
            let mut session = Session::new(&catalog, renderer, load_fonts(&cli)?);

            println!(
                "Enter a WSN/WID code to generate a label. ?text suggests, :N picks a suggestion, :download [path], :print, :quit"
            );
            let mut input = TerminalInput::new(BufReader::new(std::io::stdin())).with_prompt("> ");
            let mut suggestions = TerminalSuggestions::new(std::io::stdout());
            let mut status = TerminalStatus::new(std::io::stdout());
            let printer = SystemPrinter::default();

            session.run(&mut input, &mut suggestions, &mut status, &printer);
            std::io::stdout().flush()?;
        }
    }

    Ok(())
}

fn label_config(cli: &Cli) -> LabelConfig {
    LabelConfig::reference()
        .with_size(cli.width, cli.height)
        .with_currency(cli.currency.clone())
}

fn load_fonts(cli: &Cli) -> Result<Arc<FontSet>, PricetagError> {
    let fonts = match &cli.font {
        Some(regular) => FontSet::with_sans(TtfFace::load(regular, cli.bold_font.as_deref())?),
        None => FontSet::bitmap(),
    };
    Ok(Arc::new(fonts))
}

fn render_label(cli: &Cli, product: &ResolvedProduct) -> Result<RasterSurface, PricetagError> {
    let config = label_config(cli);
    let mut surface = RasterSurface::new(config.width, config.height, load_fonts(cli)?);
    LabelRenderer::new(config).render(&mut surface, product)?;
    Ok(surface)
}

fn print_product(product: &ResolvedProduct, currency: &str) {
    let record = &product.record;
    println!("WSN:      {}", product.wsn);
    println!("WID:      {}", record.wid);
    println!("FSN:      {}", record.fsn);
    println!("Title:    {}", record.title);
    println!("MRP:      {}{}", currency, record.mrp);
    println!("FSP:      {}{}", currency, record.fsp);
    println!("Vertical: {}", record.vertical);
    println!("Brand:    {}", record.brand);
}

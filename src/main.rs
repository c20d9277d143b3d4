use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use qrstudio::{
    handlers::{generate, generate_batch, scan_image, GenerateRequest},
    Color, ECLevel, Palette, ScanResult, Style,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrstudio")]
#[command(about = "QR code generator & scanner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one QR code
    Generate {
        /// Text or URL to encode
        text: String,

        /// Logo to place at the center (PNG or JPEG)
        #[arg(long, short = 'l')]
        logo: Option<PathBuf>,

        /// Where to write the PNG
        #[arg(long, short = 'o', default_value = "qr_code.png")]
        output: PathBuf,

        /// Also print the symbol to the terminal
        #[arg(long)]
        print: bool,

        #[command(flatten)]
        style: StyleArgs,
    },
    /// Generate one QR code per row of a CSV file with a `data` column
    Batch {
        /// CSV file
        input: PathBuf,

        /// Where to write the zip archive
        #[arg(long, short = 'o', default_value = "qr_codes.zip")]
        output: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },
    /// Scan an image for a QR code
    Scan {
        /// Image containing a QR code (PNG or JPEG)
        image: PathBuf,
    },
}

#[derive(Args, Clone)]
struct StyleArgs {
    /// Foreground (dark module) color
    #[arg(long, env = "QRSTUDIO_FG", default_value = "#000000")]
    fg: Color,

    /// Background (light module) color
    #[arg(long, env = "QRSTUDIO_BG", default_value = "#FFFFFF")]
    bg: Color,

    /// Error correction level: L, M, Q or H
    #[arg(long, env = "QRSTUDIO_EC_LEVEL", default_value = "M")]
    ec_level: ECLevel,

    /// Pixels per module
    #[arg(long, env = "QRSTUDIO_MODULE_SIZE", default_value_t = 10)]
    module_size: u32,

    /// Border width in modules
    #[arg(long, env = "QRSTUDIO_QUIET_ZONE", default_value_t = 5)]
    quiet_zone: u32,

    /// Smallest QR version to use (1-40)
    #[arg(long, env = "QRSTUDIO_MIN_VERSION", default_value_t = 1)]
    min_version: u8,
}

impl From<StyleArgs> for Style {
    fn from(args: StyleArgs) -> Self {
        Style {
            palette: Palette::new(args.fg, args.bg),
            ec_level: args.ec_level,
            module_size: args.module_size,
            quiet_zone: args.quiet_zone,
            min_version: args.min_version,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate { text, logo, output, print, style } => {
            let style = Style::from(style);
            let mut req = GenerateRequest::new(text, style);
            if let Some(path) = logo {
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("Failed to read logo {}", path.display()))?;
                req = req.with_logo(bytes);
            }

            let out = generate(req)?;
            debug!(symbol = %out.symbol.metadata(), "Fitted symbol");
            if print {
                println!("{}", out.symbol.to_str(1, 2));
            }

            std::fs::write(&output, &out.png)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(path = %output.display(), "Saved QR code");
            println!("QR code saved to: {}", output.display());
        }
        Commands::Batch { input, output, style } => {
            let table = std::fs::read(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let out = generate_batch(&table, style.into())?;
            std::fs::write(&output, &out.archive)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Batch QR Codes Generated! {} images saved to: {}", out.count, output.display());
        }
        Commands::Scan { image } => {
            let bytes = std::fs::read(&image)
                .with_context(|| format!("Failed to read {}", image.display()))?;
            match scan_image(&bytes)? {
                ScanResult::Found(msg) => println!("Scanned Data: {msg}"),
                not_found @ ScanResult::NotFound => println!("{not_found}"),
            }
        }
    }
    Ok(())
}

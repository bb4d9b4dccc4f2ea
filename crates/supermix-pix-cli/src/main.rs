//! pix-qr
//!
//! Generate a PIX copy-and-paste code and QR image from the command line,
//! or check an existing code.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use supermix_pix::{DecodedPayload, PixConfig, PixGenerator, PixSettings};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "pix-qr")]
#[command(about = "Generate and verify static PIX payment codes", long_about = None)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a code, check its CRC and print its fields
    Verify {
        /// The copy-and-paste payload
        payload: String,

        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// PIX key (email, phone, CPF/CNPJ or random key)
    #[arg(long, env = "PIX_KEY")]
    key: Option<String>,

    /// Receiver name
    #[arg(long, env = "PIX_NAME")]
    name: Option<String>,

    /// Receiver city
    #[arg(long, env = "PIX_CITY")]
    city: Option<String>,

    /// Amount in reais
    #[arg(short, long, default_value_t = 10.0)]
    amount: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON file with generator configuration
    #[arg(long)]
    config: Option<String>,

    /// Skip the settings and amount checks
    #[arg(long)]
    no_validate: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The payload text only
    Text,
    /// An SVG document
    Svg,
    /// A QR drawn with Unicode blocks, then the payload
    Terminal,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pix_qr=debug,supermix_pix=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pix_qr=info,supermix_pix=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Some(Commands::Verify { payload, json }) => verify(&payload, json),
        None => generate(cli.generate),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PixConfig::default(),
    };
    if args.no_validate {
        config.validate_inputs = false;
    }

    let settings = PixSettings::new(
        args.key.unwrap_or_default(),
        args.name.unwrap_or_default(),
        args.city.unwrap_or_default(),
    );
    let generator = PixGenerator::new(settings, config);

    match args.format {
        Format::Text => {
            println!("{}", generator.payload(args.amount)?);
        }
        Format::Svg => {
            println!("{}", generator.generate(args.amount)?.svg);
        }
        Format::Terminal => {
            let (payload, qr) = generator.generate_terminal(args.amount)?;
            println!("\n{}\n", qr);
            println!("{}", payload);
        }
    }

    Ok(())
}

fn verify(payload: &str, json: bool) -> Result<()> {
    let decoded = PixGenerator::verify(payload.trim()).context("invalid PIX code")?;
    debug!(
        key = decoded.key().unwrap_or_default(),
        amount = decoded.amount().unwrap_or_default(),
        crc = decoded.crc().unwrap_or_default(),
        fields = decoded.fields.len(),
        "verified PIX code"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        print!("{}", describe(&decoded));
    }
    Ok(())
}

fn describe(decoded: &DecodedPayload) -> String {
    let rows = [
        ("key", decoded.key()),
        ("name", decoded.name()),
        ("city", decoded.city()),
        ("amount", decoded.amount()),
        ("txid", decoded.transaction_id()),
        ("crc", decoded.crc()),
    ];

    let mut out = String::from("CRC OK\n");
    for (label, value) in rows {
        out.push_str(&format!("{:<8}{}\n", label, value.unwrap_or("-")));
    }
    out
}

/// Read a [`PixConfig`] from a JSON file. Missing fields keep their defaults.
fn load_config(path: impl AsRef<Path>) -> Result<PixConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: PixConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    info!(
        path = %path.display(),
        transaction_id = %config.transaction_id,
        validate_inputs = config.validate_inputs,
        "loaded config"
    );
    Ok(config)
}

use std::path::PathBuf;

use clap::Parser;
use prometheus::Registry;
use tracing::info;

use code_obfuscator::config::load_config;
use code_obfuscator::errors::AppError;
use code_obfuscator::logger;
use code_obfuscator::metrics::Metrics;
use code_obfuscator::pipeline::Pipeline;

/// Rewrites a Rust project so defined names become meaningless identifiers
/// and string literals become decode-table lookups. The output directory is
/// destructively replaced if it already exists.
#[derive(Parser)]
#[command(name = "code-obfuscator", version)]
struct Cli {
    /// Source project directory to obfuscate.
    #[arg(short, long)]
    source: PathBuf,

    /// Output directory for the obfuscated mirror of the project.
    #[arg(short, long)]
    output: PathBuf,

    /// RNG seed; a fixed seed makes the rename map reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// Length of the random part of generated identifiers.
    #[arg(long)]
    name_length: Option<usize>,

    /// JSON file holding an array of names that must never be renamed.
    #[arg(long)]
    exclude: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();
    let cfg = load_config(cli.exclude.as_deref(), cli.seed, cli.name_length)?;

    let registry = Registry::new();
    let metrics = Metrics::new(&registry);

    info!(source = %cli.source.display(), output = %cli.output.display(), "starting obfuscation");
    let pipeline = Pipeline::new(cfg);
    let summary = pipeline.run(&cli.source, &cli.output, &metrics).await?;
    info!(
        files = summary.files_transformed,
        names = summary.names_mapped,
        "obfuscation complete"
    );
    Ok(())
}

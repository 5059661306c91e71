use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "factsheet", about = "Normaliza facts de inventario y genera el informe")]
struct Cli {
    /// Output spreadsheet path (e.g. inventario.xlsx).
    output: PathBuf,

    /// One or more glob patterns matching per-host JSON fact documents.
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Raise the log level to debug.
    #[arg(long)]
    debug: bool,

    /// Print only the text table, skip writing the spreadsheet.
    #[arg(long)]
    text_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let opts = factsheet::RunOptions {
        output: cli.output,
        patterns: cli.patterns,
        text_only: cli.text_only,
    };
    let summary = factsheet::run(&opts)?;

    println!(
        "Informe generado: {} hosts, {} ficheros omitidos ({})",
        summary.hosts,
        summary.skipped,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
    );
    Ok(())
}

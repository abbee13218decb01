use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use atlas_shell::bootstrap::{build_controller, resolve_config, tracing::init_tracing_subscriber};
use atlas_shell::commands::{get_view, list_regions, reload_countries};

mod render;

#[derive(Parser)]
#[command(name = "world-atlas")]
#[command(about = "Countries of the world with population and GDP", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/world-atlas/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show a single region
    #[arg(short, long)]
    region: Option<String>,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,

    /// Print region names only
    #[arg(long)]
    list_regions: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("world-atlas: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = resolve_config(cli.config).context("Failed to load configuration")?;
    tracing::info!(
        base_url = %config.provider.base_url,
        year = config.enrichment.indicator_year,
        "Starting world-atlas"
    );
    let controller = build_controller(&config).context("Failed to wire dependencies")?;

    let view = match reload_countries(&controller, cli.region.as_deref()).await {
        Ok(view) => view,
        Err(message) => {
            if cli.json {
                let view = get_view(&controller, cli.region.as_deref());
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            eprintln!("world-atlas: {message}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.list_regions {
        let regions = list_regions(&controller);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&regions)?);
        } else {
            for region in regions {
                println!("{region}");
            }
        }
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_table(&view));
    }

    Ok(ExitCode::SUCCESS)
}

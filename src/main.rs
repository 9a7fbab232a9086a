use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use appex_site::catalog::{Catalog, SolutionRecord};
use appex_site::config::{Config, ConfigOverrides};
use appex_site::finder::{filter, Facet, FacetOptions, FilterState, TierFilter};
use appex_site::navigation::Page;
use appex_site::output::csv::{options_to_csv, solutions_to_csv};
use appex_site::output::json::{detail_value, render_json};
use appex_site::output::table::{
    render_detail_table, render_options_table, render_solutions_table,
};
use appex_site::server::run_server;
use appex_site::viewer::{DetailViewer, KeyListeners};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "appex-site",
    about = "Need-driven automation catalog with a Solutions Finder"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long = "calendar-link")]
    calendar_link: Option<String>,
    #[arg(long = "initial-page")]
    initial_page: Option<Page>,
    /// Deliver contact form submissions to this URL.
    #[arg(long = "webhook-url")]
    webhook_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the site and JSON API.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// List solutions matching the given filters.
    Solutions {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(long)]
        tier: Option<TierFilter>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        need: Option<String>,
    },
    /// Show one solution as the detail viewer would.
    Show {
        id: String,
        #[arg(long, default_value_t = 0)]
        media: usize,
    },
    /// List the finder's facet options.
    Options,
    /// Write or print the configuration file.
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(config_path.as_path()))?;
    config.apply_overrides(ConfigOverrides {
        brand_name: cli.brand.clone(),
        initial_page: cli.initial_page,
        calendar_link: cli.calendar_link.clone(),
        webhook_url: cli.webhook_url.clone(),
    });

    let catalog = Catalog::shared();
    match &cli.command {
        Commands::Serve { host, port } => {
            let host = host.as_deref().unwrap_or(&config.server.host);
            let port = port.unwrap_or(config.server.port);
            let bind = format!("{host}:{port}");
            let addr: SocketAddr = bind
                .parse()
                .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
            return run_server(config, addr).await;
        }
        Commands::Solutions {
            query,
            tier,
            industry,
            need,
        } => {
            let state = FilterState {
                query: query.clone().unwrap_or_default(),
                tier: tier.unwrap_or_default(),
                industry: Facet::from(industry.clone()),
                need: Facet::from(need.clone()),
            };
            let visible = filter(catalog.records(), &state);
            print_solutions(&visible, cli.output)?;
        }
        Commands::Show { id, media } => {
            let mut host = KeyListeners::default();
            let mut viewer = DetailViewer::default();
            if !viewer.open(catalog, id, &mut host) {
                return Err(anyhow!("unknown solution id: {id}"));
            }
            if *media > 0 && !viewer.seek(*media) {
                warn!("media position {media} is out of range, showing the first item");
            }
            let record = viewer
                .active(catalog)
                .ok_or_else(|| anyhow!("unknown solution id: {id}"))?;
            print_detail(record, &viewer, cli.output)?;
            viewer.close(&mut host);
        }
        Commands::Options => print_options(&FacetOptions::standard(), cli.output)?,
        Commands::Config { .. } => {
            return handle_config_command(&cli.command, &config, &config_path);
        }
    }

    Ok(())
}

fn handle_config_command(command: &Commands, config: &Config, config_path: &Path) -> Result<()> {
    let Commands::Config { init, show } = command else {
        return Ok(());
    };
    if *init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if *show || !*init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn print_solutions(records: &[&SolutionRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", render_solutions_table(records));
            println!("Showing {} solutions", records.len());
        }
        OutputFormat::Json => println!("{}", render_json(records)?),
        OutputFormat::Csv => print!("{}", solutions_to_csv(records)?),
    }
    Ok(())
}

fn print_detail(record: &SolutionRecord, viewer: &DetailViewer, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_detail_table(record, viewer.carousel())),
        OutputFormat::Json => {
            println!("{}", render_json(&detail_value(record, viewer.carousel())?)?)
        }
        OutputFormat::Csv => {
            warn!("CSV output for a single solution not implemented, using JSON");
            println!("{}", render_json(&detail_value(record, viewer.carousel())?)?);
        }
    }
    Ok(())
}

fn print_options(options: &FacetOptions, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_options_table(options)),
        OutputFormat::Json => println!("{}", render_json(options)?),
        OutputFormat::Csv => print!("{}", options_to_csv(options)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_reach_overrides() {
        let cli = Cli::try_parse_from([
            "appex-site",
            "--webhook-url",
            "https://hooks.example/contact",
            "config",
            "--show",
        ])
        .expect("parse cli");
        assert_eq!(cli.webhook_url.as_deref(), Some("https://hooks.example/contact"));
        assert!(matches!(cli.command, Commands::Config { init: false, show: true }));
    }
}

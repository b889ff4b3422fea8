use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use url::Url;

use rs_webmail::api::http::HttpMailApi;
use rs_webmail::config::load_config;
use rs_webmail::terminal::run_tui;

#[derive(Parser)]
#[command(name = "rs_webmail")]
#[command(about = "Terminal client for a REST webmail server", long_about = None)]
struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = load_config().map_err(|e| eyre!("Configuration error: {e}"))?;
    let base: Url = cli
        .base_url
        .unwrap_or(cfg.base_url)
        .parse()
        .map_err(|e| eyre!("Invalid base URL: {e}"))?;

    let api = HttpMailApi::new(base, cfg.session_cookie)?;
    run_tui(&api)
}

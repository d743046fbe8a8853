use std::path::PathBuf;

use clap::Parser;
use embedview_config::SessionConfig;

/// Embedview: open a page in an embedded platform webview.
#[derive(Parser, Debug)]
#[command(name = "embedview", version, about)]
pub struct Args {
    /// Page to open. Overrides `[session] url`.
    #[arg(long)]
    pub url: Option<String>,

    /// Query item merged into the URL, as NAME=VALUE. Repeatable.
    #[arg(long = "query", value_name = "NAME=VALUE", value_parser = parse_query_item)]
    pub query: Vec<(String, String)>,

    /// Extra request header, as NAME:VALUE. Repeatable.
    #[arg(long = "header", value_name = "NAME:VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `embedview=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Overlay command-line session values onto a loaded config.
    ///
    /// The URL replaces the configured one; query items and headers are
    /// added, replacing configured entries with the same name.
    pub fn apply_to(&self, config: &mut SessionConfig) {
        if let Some(url) = &self.url {
            config.session.url = url.clone();
        }
        config.session.query.extend(self.query.iter().cloned());
        config.session.headers.extend(self.headers.iter().cloned());
    }
}

fn parse_query_item(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("query item '{raw}' has an empty name"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("header '{raw}' has an empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

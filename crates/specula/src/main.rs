//! Specula DNS Forwarder
//!
//! A transparent UDP DNS forwarder: queries go to a fixed upstream
//! resolver verbatim, replies come back verbatim, and every datagram is
//! decoded on the side so the traffic can be observed in the logs.

use anyhow::{Context, Result};
use clap::Parser;
use specula_relay::{RelayConfig, UdpRelay};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Specula DNS forwarder - forward queries verbatim, watch them pass
#[derive(Parser, Debug)]
#[command(name = "specula")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on for UDP queries
    #[arg(short = 'L', long, default_value = "0.0.0.0:53", value_name = "ADDR")]
    listen: SocketAddr,

    /// Upstream resolver to forward all queries to
    #[arg(short, long, default_value = "1.1.1.1:53", value_name = "ADDR")]
    upstream: SocketAddr,

    /// Seconds to wait for an upstream reply
    #[arg(short, long, default_value_t = 5, value_name = "SECS")]
    timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info", value_name = "LEVEL")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

/// Parse log level from string
fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize logging/tracing subsystem
fn init_tracing(level: Level, json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(parse_log_level(&cli.log_level), cli.log_json);

    let config = RelayConfig {
        listen: cli.listen,
        upstream: cli.upstream,
        upstream_timeout: Duration::from_secs(cli.timeout),
    };

    let relay = UdpRelay::bind(config)
        .await
        .with_context(|| format!("failed to bind UDP listener on {}", cli.listen))?;

    tokio::select! {
        result = relay.run() => {
            result.context("relay loop terminated")?;
        }
        _ = signal::ctrl_c() => {
            info!("shutdown signal received, exiting");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Level::DEBUG);
        assert_eq!(parse_log_level("WARN"), Level::WARN);
        assert_eq!(parse_log_level("bogus"), Level::INFO);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["specula"]);
        assert_eq!(cli.listen.port(), 53);
        assert_eq!(cli.upstream.to_string(), "1.1.1.1:53");
        assert_eq!(cli.timeout, 5);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "specula",
            "--listen",
            "127.0.0.1:5353",
            "--upstream",
            "9.9.9.9:53",
            "--timeout",
            "2",
        ]);
        assert_eq!(cli.listen.to_string(), "127.0.0.1:5353");
        assert_eq!(cli.upstream.to_string(), "9.9.9.9:53");
        assert_eq!(cli.timeout, 2);
    }
}

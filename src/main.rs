//! RESTCONF command-line client
//!
//! Usage:
//!   restconf --config device.toml --name Loopback200 --ip 20.0.0.1
//!   restconf --url https://198.51.100.10 --username admin --password admin \
//!       --name Loopback200 --ip 20.0.0.1 --netmask 255.255.255.255
//!   restconf --name Loopback200 --ip 20.0.0.1 --dry-run

use std::io::Write;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use reqwest::header::CONTENT_TYPE;
use restconf_client::config::DEFAULT_TIMEOUT_SECS;
use restconf_client::{Client, ClientConfig, InterfaceRequest, MediaType, RestconfError};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "restconf")]
#[command(about = "Create a loopback interface on a RESTCONF device")]
struct Args {
    /// Path to a TOML file with url, username, password and timeout_secs
    #[arg(short, long, conflicts_with_all = ["url", "username", "password"])]
    config: Option<PathBuf>,

    /// Device base URL
    #[arg(long)]
    url: Option<String>,

    #[arg(short, long)]
    username: Option<String>,

    #[arg(short, long)]
    password: Option<String>,

    /// Request timeout in seconds [default: 30, or timeout_secs from --config]
    #[arg(long)]
    timeout: Option<u64>,

    /// Interface name
    #[arg(short, long)]
    name: String,

    /// Interface IPv4 address
    #[arg(long)]
    ip: Ipv4Addr,

    #[arg(long, default_value = "255.255.255.255")]
    netmask: Ipv4Addr,

    /// Create the interface administratively down
    #[arg(long)]
    disabled: bool,

    /// Print the payload instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn client(&self) -> Result<Client, RestconfError> {
        if let Some(path) = &self.config {
            let mut config = ClientConfig::from_file(path)?;
            if let Some(timeout) = self.timeout {
                config.timeout_secs = timeout;
            }
            return Ok(Client::from_config(&config));
        }

        let missing = |flag: &str| RestconfError::Config(format!("--{} is required", flag));
        let url = self.url.clone().ok_or_else(|| missing("url"))?;
        let username = self.username.clone().ok_or_else(|| missing("username"))?;
        let password = self.password.clone().ok_or_else(|| missing("password"))?;

        Ok(Client::new(
            Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            url,
            username,
            password,
        ))
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args, &mut std::io::stdout()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "restconf: request failed");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the device answered with a success status
async fn run(args: &Args, out: &mut impl Write) -> Result<bool, RestconfError> {
    let request =
        InterfaceRequest::loopback(&args.name, args.ip, args.netmask).with_enabled(!args.disabled);

    if args.dry_run {
        writeln!(out, "{}", request.to_json_pretty()?)?;
        return Ok(true);
    }

    let client = args.client()?;
    info!(url = %client.base_url(), interface = %args.name, "creating loopback interface");

    let response = client.create_loopback_interface(&request).await?;
    let status = response.status();
    let media_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(MediaType::from_header);
    let body = response.text().await?;

    writeln!(out, "{}", status)?;
    if !body.is_empty() {
        if media_type.is_none() {
            warn!(status = %status, "response body is not YANG data");
        }
        writeln!(out, "{}", body)?;
    }

    Ok(status.is_success())
}

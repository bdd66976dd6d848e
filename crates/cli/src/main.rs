use clap::Parser;
use listkeeper_api::{AppState, ListUseCases};
use listkeeper_application::services::ListLock;
use listkeeper_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "listkeeper")]
#[command(version)]
#[command(about = "Listkeeper - blocklist and allowlist management service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Blocklist file path
    #[arg(long, value_name = "FILE")]
    blocklist: Option<String>,

    /// Allowlist file path
    #[arg(long, value_name = "FILE")]
    allowlist: Option<String>,

    /// Directory holding the web frontend
    #[arg(long, value_name = "DIR")]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        blocklist_path: cli.blocklist,
        allowlist_path: cli.allowlist,
        static_dir: cli.static_dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting Listkeeper v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = bootstrap::check_static_dir(&config.web) {
        error!(error = %e, "Cannot mount static assets");
        return Err(e);
    }

    // Dependency Injection
    let repos = di::Repositories::new(&config);
    repos.report_missing_lists().await;

    let app_state = AppState {
        lists: ListUseCases::new(repos.lists.clone(), ListLock::new()),
    };

    let bind_ip: IpAddr = config.server.bind_address.parse().map_err(|e| {
        anyhow::anyhow!(
            "Invalid bind address '{}': {}",
            config.server.bind_address,
            e
        )
    })?;
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    if let Err(e) = server::start_web_server(web_addr, app_state, &config).await {
        error!(error = %e, "Web server failed");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}

//! Municipal services portal entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use municipal_portal::api::{create_router, AppState};
use municipal_portal::config::Config;
use municipal_portal::error::PortalError;
use municipal_portal::routes::{portal_routes, RouteTree};
use municipal_portal::telemetry;
use municipal_portal::utils::shutdown_signal;

/// Municipal services portal.
#[derive(Parser, Debug)]
#[command(name = "municipal-portal")]
#[command(about = "Server-rendered municipal services portal")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the portal (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the route tree.
    Routes,

    /// Resolve a URI against the route tree and print the node.
    Resolve {
        /// URI to resolve, e.g. /areas/gov.
        uri: String,
    },

    /// Print the sidebar navigation projections as JSON.
    Nav,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Serve { port }) => cmd_serve(port.or(args.port), args.verbose).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Routes) => cmd_routes(),
        Some(Command::Resolve { uri }) => cmd_resolve(&uri),
        Some(Command::Nav) => cmd_nav(),
        None => cmd_serve(args.port, args.verbose).await,
    }
}

/// Serve the portal until a shutdown signal arrives.
async fn cmd_serve(port: Option<u16>, verbose: bool) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(port) = port {
        config.port = port;
    }
    config.verbose |= verbose;
    config.validate().map_err(PortalError::InvalidConfig)?;

    let telemetry = telemetry::init(&config)?.clone();

    let routes = portal_routes().map_err(PortalError::from)?;
    info!(nodes = routes.len(), "Route tree built");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(AppState::new(routes, config, telemetry));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("MUNICIPAL PORTAL - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    print!("Building route tree... ");
    match portal_routes() {
        Ok(tree) => println!("OK ({} nodes)", tree.len()),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Route tree invalid"));
        }
    }

    let unset = || "<unset>".to_string();
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.bind_addr());
    println!("  Environment: {}", config.app_env);
    println!("  Log Format: {}", config.log_format);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!(
        "  OTLP Endpoint: {}",
        config.otel_exporter_otlp_endpoint.clone().unwrap_or_else(unset)
    );
    println!("  Loki Host: {}", config.loki_host.clone().unwrap_or_else(unset));
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the route tree, one node per line.
fn cmd_routes() -> anyhow::Result<()> {
    let tree = portal_routes()?;
    print!("{}", format_tree(&tree));
    Ok(())
}

fn format_tree(tree: &RouteTree) -> String {
    let mut out = String::new();
    for node in tree.iter() {
        let depth = node.uri().split('/').filter(|s| !s.is_empty()).count();
        let placement = node
            .sidebar_placement()
            .map(|p| format!("  [{}]", p))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}{:<40}{}{}\n",
            "  ".repeat(depth.saturating_sub(1)),
            node.uri(),
            node.title().unwrap_or("-"),
            placement
        ));
    }
    out
}

/// Resolve a URI and print the node as JSON.
fn cmd_resolve(uri: &str) -> anyhow::Result<()> {
    let tree = portal_routes()?;
    let node = tree.resolve(uri)?;
    println!("{}", serde_json::to_string_pretty(node)?);
    Ok(())
}

/// Print both navigation projections as JSON.
fn cmd_nav() -> anyhow::Result<()> {
    let tree = portal_routes()?;
    let nav = serde_json::json!({
        "main": tree.nav_main(),
        "secondary": tree.nav_secondary(),
    });
    println!("{}", serde_json::to_string_pretty(&nav)?);
    Ok(())
}

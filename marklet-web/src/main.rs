//! Marklet Web Server
//!
//! The web interface for Marklet - a personal bookmarking service.

use clap::Parser;
use marklet_web::server::MarkletServerBuilder;
use marklet_web::{init_logging, WebConfig};

/// Marklet Web Server - session filter controls for your bookmarks
#[derive(Parser)]
#[command(name = "marklet-web")]
#[command(about = "A web interface for Marklet")]
#[command(version)]
struct Args {
    /// Server host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable development mode
    #[arg(long)]
    dev: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging first
    std::env::set_var(
        "RUST_LOG",
        format!("marklet_web={},tower_http=debug", args.log_level),
    );
    init_logging();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Create web configuration, command line arguments win over env
    let mut config = WebConfig::from_env();
    config.host = args.host;
    config.port = args.port;
    config.dev_mode = args.dev;

    println!("🚀 Starting Marklet Web Server");
    println!("📍 Server: http://{}:{}", config.host, config.port);

    // Build and start the server (this will block until shutdown)
    let server = MarkletServerBuilder::new()
        .host(config.host.clone())
        .port(config.port)
        .dev_mode(config.dev_mode)
        .build();

    if let Err(e) = server.start().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}

//! Reverie HTTP entry point.
//!
//! Binary name: `reverie`
//!
//! Parses CLI arguments, resolves configuration from flags and
//! environment, then serves the dream reflection endpoint.

use clap::Parser;

use reverie_api::http::router::build_router;
use reverie_api::state::AppState;
use reverie_infra::config::ServiceConfig;

/// Dream reflection API server.
#[derive(Debug, Parser)]
#[command(name = "reverie", version, about)]
struct Cli {
    /// Host to bind.
    #[arg(long, env = "REVERIE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, env = "REVERIE_PORT", default_value_t = 8787)]
    port: u16,

    /// Model identifier to request from the generator.
    #[arg(long, env = "REVERIE_MODEL")]
    model: Option<String>,

    /// Override the generator base URL (useful for tests and proxies).
    #[arg(long)]
    base_url: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Export spans via OpenTelemetry (stdout exporter).
    #[arg(long)]
    otel: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "info,reverie=debug",
        _ => "trace",
    };
    reverie_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = ServiceConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if config.api_key.is_none() {
        // The server still starts so health probes answer; submissions
        // fail with the structured configuration error instead.
        tracing::warn!(
            "OPENAI_API_KEY is not set; reflection requests will return a configuration error"
        );
    }

    let state = AppState::new(config);
    let router = build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Reverie API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    reverie_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

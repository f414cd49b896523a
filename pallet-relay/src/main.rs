use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pallet_relay::config::{credential_looks_encoded, RelayConfig, AUTH_VAR};
use pallet_relay::evocon::EvoconClient;

#[derive(Parser)]
#[command(
    name = "pallet-relay",
    about = "Printable pallet label that relays submissions to Evocon"
)]
struct Args {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Listen port. Hosting platforms inject PORT.
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RelayConfig::from_env();
    warn_on_config_problems(&config);

    let evocon = EvoconClient::new(&config);
    tracing::info!("Evocon target: {}", evocon.checklist_url());

    let app = pallet_relay::build_router_with_client(config, evocon);

    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Pallet relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind TCP listener")?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

/// Log configuration problems at startup. None of them stop the server;
/// a missing credential is reported per submission as HTTP 500.
fn warn_on_config_problems(config: &RelayConfig) {
    match &config.auth {
        None => {
            tracing::warn!("========================================");
            tracing::warn!("  {} is not set", AUTH_VAR);
            tracing::warn!("  Every submission will fail with 500");
            tracing::warn!("  until the credential is configured.");
            tracing::warn!("========================================");
        }
        Some(auth) => {
            if !credential_looks_encoded(auth) {
                tracing::warn!(
                    "{} does not decode as Base64(username:password); Evocon will likely reject submissions",
                    AUTH_VAR
                );
            }
        }
    }
    if uuid::Uuid::parse_str(&config.checklist_id).is_err() {
        tracing::warn!(
            "EVOCON_CHECKLIST_ID {:?} is not a UUID",
            config.checklist_id
        );
    }
}

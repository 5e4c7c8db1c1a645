//! Demo: guest login against a live backend, then the first fetches a
//! game client would make.
//!
//! ```text
//! RAIDLINK_URL=http://localhost/tbrpg-service cargo run -p login-flow
//! ```

use raidlink::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("raidlink=debug")),
        )
        .init();

    let base_url = std::env::var("RAIDLINK_URL")
        .unwrap_or_else(|_| "http://localhost/tbrpg-service".to_string());
    let client = ServiceClient::builder(base_url)
        .routing(RoutingConfig::default())
        .build()?;

    let time = client.get_service_time().await;
    if !time.success() {
        tracing::error!(code = ?time.error_code, "service unreachable");
        return Ok(());
    }
    tracing::info!(service_time = time.service_time, "backend is up");

    let login = client.guest_login("demo-device-0001").await;
    if !login.success() {
        tracing::error!(code = ?login.error_code, "guest login failed");
        return Ok(());
    }
    let token = login.player.login_token.clone();
    tracing::info!(player = %login.player.id, "logged in as guest");

    let items = client.get_item_list(&token).await;
    let currencies = client.get_currency_list(&token).await;
    let staminas = client.get_stamina_list(&token).await;

    println!("player:     {}", login.player.id);
    println!("items:      {}", items.items.len());
    println!("currencies: {}", currencies.currencies.len());
    println!("staminas:   {}", staminas.staminas.len());

    Ok(())
}

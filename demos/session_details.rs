//! Session example.
//!
//! Logs in, prints the session details and logs out again.
//!
//! Environment variables:
//! - IG_API_KEY, IG_USERNAME, IG_PASSWORD: credentials
//! - IG_ACCOUNT_ID: account to bind the session to
//! - IG_ENVIRONMENT: "demo" (default) or "live"
//!
//! Run with: cargo run --example session_details

use ig_rest_client::{ClientConfig, Credentials, Environment, Session};

fn main() -> ig_rest_client::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let credentials = Credentials::from_env()?;
    let account_id = std::env::var("IG_ACCOUNT_ID")
        .expect("IG_ACCOUNT_ID environment variable required");
    let environment: Environment = std::env::var("IG_ENVIRONMENT")
        .unwrap_or_else(|_| "demo".to_string())
        .parse()?;

    println!("Connecting to IG {} environment...", environment);

    let mut session = Session::open(
        credentials,
        account_id,
        ClientConfig::for_environment(environment),
    )?;

    println!("Successfully authenticated!");

    let details = session.session_details()?;
    println!("  Client:   {}", details.client_id);
    println!("  Account:  {}", details.account_id);
    println!("  Currency: {}", details.currency);
    println!("  Locale:   {}", details.locale);
    println!("  Streaming endpoint: {}", details.lightstreamer_endpoint);

    session.log_out()?;
    println!("\nLogged out.");
    Ok(())
}

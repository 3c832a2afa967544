//! Manual end-to-end check against a live tickr service.
//!
//! Exercises the full counter lifecycle (create, get, increment, update,
//! delete) and verifies each step. Requires `TICKR_API_KEY`;
//! `TICKR_BASE_URL` overrides the production origin.
//!
//! Run with: cargo run -p tickr-lifecycle

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use tickr_client::{CreateCounter, TickrClient, UpdateCounter, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tickr_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("TICKR_API_KEY")
        .map_err(|_| "TICKR_API_KEY environment variable is not set")?;
    let base_url =
        std::env::var("TICKR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    tracing::info!(%base_url, "initializing client");
    let client = TickrClient::with_base_url(Some(api_key), base_url);

    // Create
    let name = format!("Test Counter {}", Uuid::new_v4());
    tracing::info!(%name, "creating counter");
    let mut args = CreateCounter::new(&name);
    args.initial_value = 10;
    let created = client.create_counter(args).await?;
    tracing::info!(?created, "created");

    if created.name.as_deref() != Some(name.as_str()) || created.current_value != Some(10) {
        return Err("creation failed verification".into());
    }
    let slug = created
        .slug
        .clone()
        .ok_or("created counter has no slug")?;

    // Get
    tracing::info!(%slug, "fetching counter");
    let fetched = client.get_counter(&slug).await?;
    tracing::info!(?fetched, "fetched");
    if fetched.slug != created.slug {
        return Err("fetched counter slug does not match created counter".into());
    }

    // Increment
    tracing::info!(%slug, "incrementing by 5");
    let incremented = client.increment_counter_by(&slug, 5).await?;
    tracing::info!(?incremented, "incremented");
    if incremented.current_value != Some(15) {
        return Err(format!(
            "expected value 15, got {:?}",
            incremented.current_value
        )
        .into());
    }

    // Update
    let new_name = format!("{name} Updated");
    tracing::info!(%slug, %new_name, "renaming counter");
    let updated = client
        .update_counter(
            &slug,
            UpdateCounter {
                name: Some(new_name.clone()),
                ..UpdateCounter::default()
            },
        )
        .await?;
    tracing::info!(?updated, "updated");
    if updated.name.as_deref() != Some(new_name.as_str()) {
        return Err("update name failed".into());
    }
    if updated.current_value != Some(15) {
        return Err("update changed the counter value".into());
    }

    // Delete
    tracing::info!(%slug, "deleting counter");
    client.delete_counter(&slug).await?;
    match client.get_counter(&slug).await {
        Ok(counter) => {
            tracing::warn!(?counter, "counter still visible after deletion");
        }
        Err(err) => {
            tracing::info!(%err, "counter gone after deletion");
        }
    }

    tracing::info!("lifecycle completed successfully");
    Ok(())
}

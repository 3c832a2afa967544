//! Tickr Client SDK.
//!
//! This crate provides a client library for the tickr counter service: named,
//! slug-identified counters that can be created, read, listed, incremented,
//! updated, and deleted over its JSON REST API.
//!
//! # Example
//!
//! ```no_run
//! use tickr_client::{CreateCounter, TickrClient};
//!
//! # async fn example() -> Result<(), tickr_client::ClientError> {
//! let client = TickrClient::new(Some("your-api-key".to_string()));
//!
//! // Create a counter starting at 10
//! let mut args = CreateCounter::new("Page views");
//! args.initial_value = 10;
//! let counter = client.create_counter(args).await?;
//! let slug = counter.slug.expect("service assigns a slug on creation");
//!
//! // Bump it
//! let counter = client.increment_counter_by(&slug, 5).await?;
//! println!("current value: {:?}", counter.current_value);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{TickrClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use types::{Counter, CreateCounter, UpdateCounter};

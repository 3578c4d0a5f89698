//! # Replay Store - JSON Replay Storage Service
//!
//! Stores opaque JSON documents ("replays") under generated ids and serves them
//! back over HTTP, built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core types (replay ids, upload records, validation errors)
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: SQLite index and filesystem blob store adapters
//! - **API**: HTTP handlers and middleware
//!
//! ## Consistency
//!
//! An upload is committed to the index before its gzip blob is published with
//! a temp-file-then-link write. A crash between the two leaves an indexed id
//! whose fetch reports not found, never a blob that listing cannot see.
//!
//! ## Example Usage
//!
//! ```no_run
//! use replay_store::{application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::from_env())
//!     .with_index()
//!     .await?
//!     .with_blob_store()
//!     .await?
//!     .build()?;
//! let app = replay_store::api::create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};

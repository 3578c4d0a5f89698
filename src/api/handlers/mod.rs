pub mod fetch;
pub mod health;
pub mod health_checks;
pub mod list;
pub mod upload;

#[cfg(test)]
mod tests;

pub use fetch::{fetch_handler, preflight_handler};
pub use health::{health_handler, readiness_handler};
pub use list::list_handler;
pub use upload::{upload_handler, UploadState};

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod models;
pub mod source;

mod memory;
pub use memory::MemorySource;

pub use client::RandomUserClient;
pub use config::{ApiConfig, GalleryConfig};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::{ConfigError, FetchError};
pub use gallery::{GalleryState, ProfileCardView};
pub use models::UserRecord;
pub use source::{ProfileSource, DEFAULT_RESULTS};

//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const GALLERY_CSS: Asset = asset!("/assets/gallery.css");

mod app;
pub use app::App;

pub mod activity_log;
pub use activity_log::{
    log_activity, try_use_activity_log, use_activity_log, ActivityLog, ActivitySink, LogEntry,
    LogLevel,
};

mod gallery;
pub use gallery::{use_gallery, ProfileGallery};

mod profile_card;
pub use profile_card::{ProfileCard, ProfileGrid};

mod source;
pub use source::{load_config, make_source};

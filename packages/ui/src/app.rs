use dioxus::prelude::*;

use crate::activity_log::ActivityLog;
use crate::gallery::ProfileGallery;
use crate::source::{load_config, make_source};
use crate::GALLERY_CSS;

/// Application root shared by the web and desktop launchers.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    let config = use_hook(load_config);
    let source = use_hook(|| make_source(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: GALLERY_CSS }

        ProfileGallery { source: source }
    }
}

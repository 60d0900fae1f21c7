//! The profile gallery component and its loading hook.

use dioxus::prelude::*;
use profiles::{GalleryState, ProfileSource, DEFAULT_RESULTS};

use crate::activity_log::{log_activity, try_use_activity_log, ActivitySink, LogLevel};
use crate::profile_card::ProfileGrid;

/// Gallery state for the current component, loaded once on mount.
///
/// The returned signal starts empty. A single request for `results` profiles is
/// issued when the component mounts; later renders reuse the same resource and
/// never fetch again. On success the list is replaced and the component
/// re-renders. On failure the error goes to the activity log (if one is
/// provided) and to `tracing`, and the list stays as it was.
///
/// The loader runs as a task of the calling scope, so unmounting the component
/// drops an in-flight request before it can touch the state.
pub fn use_gallery<S>(source: S, results: u32) -> Signal<GalleryState>
where
    S: ProfileSource + Clone + 'static,
{
    let mut state = use_signal(GalleryState::new);
    let log = try_use_activity_log();

    // No signal is read inside the loader, so it is never re-run.
    let _loader = use_resource(move || {
        let source = source.clone();
        async move {
            let outcome = source.fetch_profiles(results).await;
            let mut sink = ActivitySink::new(log);
            if state.write().apply(outcome, &mut sink) {
                let count = state.peek().len();
                tracing::info!("Loaded {} profiles", count);
                if let Some(mut log) = log {
                    log_activity(&mut log, LogLevel::Info, &format!("Loaded {count} profiles"));
                }
            }
        }
    });

    state
}

/// Fetches profiles from `source` on mount and renders them as a card grid.
#[component]
pub fn ProfileGallery<S: ProfileSource + Clone + PartialEq + 'static>(
    source: S,
    #[props(default = DEFAULT_RESULTS)] results: u32,
) -> Element {
    let gallery = use_gallery(source, results);
    let cards = gallery.read().cards();

    rsx! {
        ProfileGrid { cards: cards }
    }
}

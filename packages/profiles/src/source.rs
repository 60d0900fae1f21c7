//! The seam between the gallery and wherever profiles come from.
//!
//! [`ProfileSource`] is implemented by [`crate::RandomUserClient`] for the live
//! API and by [`crate::MemorySource`] for tests and previews. Components take the
//! source as a value, so nothing in the UI reaches for a global HTTP client.

use crate::error::FetchError;
use crate::models::UserRecord;

/// Number of profiles requested when nothing else is configured.
pub const DEFAULT_RESULTS: u32 = 10;

/// Async trait for fetching a batch of profiles.
pub trait ProfileSource {
    /// Fetch `results` profiles. The returned order is the arrival order.
    fn fetch_profiles(
        &self,
        results: u32,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, FetchError>>;
}

use std::sync::{Arc, Mutex};

use crate::error::FetchError;
use crate::models::UserRecord;
use crate::source::ProfileSource;

/// In-memory ProfileSource for testing and previews.
///
/// Clones share the canned outcome and the request log, so a test can hand one
/// clone to a component and inspect the other afterwards.
#[derive(Clone, Debug)]
pub struct MemorySource {
    outcome: Arc<Result<Vec<UserRecord>, String>>,
    requests: Arc<Mutex<Vec<u32>>>,
}

impl MemorySource {
    /// A source that answers every request with `users`.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            outcome: Arc::new(Ok(users)),
            requests: Arc::default(),
        }
    }

    /// A source whose every request fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Arc::new(Err(message.into())),
            requests: Arc::default(),
        }
    }

    /// The `results` argument of each request received so far, in order.
    pub fn requests(&self) -> Vec<u32> {
        self.requests.lock().unwrap().clone()
    }
}

impl PartialEq for MemorySource {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.outcome, &other.outcome) && Arc::ptr_eq(&self.requests, &other.requests)
    }
}

impl ProfileSource for MemorySource {
    async fn fetch_profiles(&self, results: u32) -> Result<Vec<UserRecord>, FetchError> {
        self.requests.lock().unwrap().push(results);
        match self.outcome.as_ref() {
            Ok(users) => Ok(users.clone()),
            Err(message) => Err(FetchError::Unavailable(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<UserRecord> {
        vec![
            UserRecord::new("http://x/1.jpg", "Mona", "Heen", "mona.heen@example.com"),
            UserRecord::new("http://x/2.jpg", "Susan", "Craig", "susan.craig@example.com"),
        ]
    }

    #[tokio::test]
    async fn test_returns_canned_users() {
        let source = MemorySource::new(sample());

        let users = source.fetch_profiles(10).await.unwrap();
        assert_eq!(users, sample());
        assert_eq!(source.requests(), vec![10]);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = MemorySource::failing("offline");

        let err = source.fetch_profiles(10).await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(ref m) if m == "offline"));
        assert_eq!(source.requests(), vec![10]);
    }

    #[tokio::test]
    async fn test_clones_share_request_log() {
        let source = MemorySource::new(sample());
        let handle = source.clone();

        source.fetch_profiles(3).await.unwrap();
        source.fetch_profiles(5).await.unwrap();

        assert_eq!(handle.requests(), vec![3, 5]);
        assert_eq!(handle, source);
        assert_ne!(MemorySource::new(sample()), source);
    }
}

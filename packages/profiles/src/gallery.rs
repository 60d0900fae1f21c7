//! # Gallery state
//!
//! [`GalleryState`] is the in-memory list a gallery renders. It starts empty and
//! changes only through [`GalleryState::apply`], which takes the outcome of the
//! single profile fetch:
//!
//! - `Ok(users)` replaces the list wholesale, keeping arrival order.
//! - `Err(e)` goes to the [`DiagnosticSink`] and leaves the list as it was.
//!
//! [`GalleryState::cards`] turns the list into [`ProfileCardView`]s, the exact
//! values a card displays. Cards are keyed by position, which is stable because
//! the list is never sorted, filtered or appended to after it is populated.

use crate::diagnostics::DiagnosticSink;
use crate::error::FetchError;
use crate::models::UserRecord;

/// The profiles currently shown by a gallery.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    users: Vec<UserRecord>,
}

/// Display values for one profile card.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileCardView {
    /// Position in the gallery, used as the render key
    pub index: usize,
    pub avatar_url: String,
    /// `"{first} {last}"`
    pub full_name: String,
    pub email: String,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replace the whole list.
    pub fn replace(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    /// Record the outcome of a fetch. Returns `true` if the list was replaced.
    pub fn apply(
        &mut self,
        outcome: Result<Vec<UserRecord>, FetchError>,
        sink: &mut impl DiagnosticSink,
    ) -> bool {
        match outcome {
            Ok(users) => {
                self.replace(users);
                true
            }
            Err(e) => {
                sink.report(&e);
                false
            }
        }
    }

    /// One card per user, in list order.
    pub fn cards(&self) -> Vec<ProfileCardView> {
        self.users
            .iter()
            .enumerate()
            .map(|(index, user)| ProfileCardView {
                index,
                avatar_url: user.picture_url.clone(),
                full_name: user.full_name(),
                email: user.email.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySource;
    use crate::source::{ProfileSource, DEFAULT_RESULTS};

    #[derive(Default)]
    struct RecordingSink {
        reports: Vec<String>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&mut self, error: &FetchError) {
            self.reports.push(error.to_string());
        }
    }

    fn user(n: usize) -> UserRecord {
        UserRecord::new(
            format!("http://x/{n}.jpg"),
            format!("First{n}"),
            format!("Last{n}"),
            format!("user{n}@example.com"),
        )
    }

    #[test]
    fn test_starts_empty() {
        let state = GalleryState::new();
        assert!(state.is_empty());
        assert!(state.cards().is_empty());
    }

    #[tokio::test]
    async fn test_successful_load_replaces_users() {
        let users: Vec<_> = (1..=10).map(user).collect();
        let source = MemorySource::new(users.clone());
        let mut sink = RecordingSink::default();
        let mut state = GalleryState::new();

        let outcome = source.fetch_profiles(DEFAULT_RESULTS).await;
        assert!(state.apply(outcome, &mut sink));

        assert_eq!(state.len(), 10);
        assert_eq!(state.users(), users.as_slice());
        assert!(sink.reports.is_empty());
        assert_eq!(source.requests(), vec![10]);
    }

    #[tokio::test]
    async fn test_failed_load_reports_once_and_keeps_users() {
        let source = MemorySource::failing("connection reset");
        let mut sink = RecordingSink::default();
        let mut state = GalleryState::new();

        let outcome = source.fetch_profiles(DEFAULT_RESULTS).await;
        assert!(!state.apply(outcome, &mut sink));

        assert!(state.is_empty());
        assert_eq!(sink.reports.len(), 1);
        assert!(sink.reports[0].contains("connection reset"));
    }

    #[test]
    fn test_failure_never_clears_existing_users() {
        let mut sink = RecordingSink::default();
        let mut state = GalleryState::new();
        state.replace(vec![user(1), user(2)]);

        state.apply(Err(FetchError::Unavailable("down".to_string())), &mut sink);

        assert_eq!(state.users(), &[user(1), user(2)]);
        assert_eq!(sink.reports.len(), 1);
    }

    #[test]
    fn test_cards_follow_input_order() {
        let mut sink = RecordingSink::default();
        let mut state = GalleryState::new();
        let order = [3, 0, 4, 1, 2];
        state.apply(Ok(order.iter().copied().map(user).collect()), &mut sink);

        let cards = state.cards();
        let emails: Vec<_> = cards.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(
            emails,
            vec![
                "user3@example.com",
                "user0@example.com",
                "user4@example.com",
                "user1@example.com",
                "user2@example.com",
            ]
        );
        assert!(cards.iter().enumerate().all(|(i, c)| c.index == i));
    }

    #[test]
    fn test_card_fields() {
        let mut state = GalleryState::new();
        state.replace(vec![UserRecord::new(
            "http://x/1.jpg",
            "Mona",
            "Heen",
            "mona.heen@example.com",
        )]);

        assert_eq!(
            state.cards(),
            vec![ProfileCardView {
                index: 0,
                avatar_url: "http://x/1.jpg".to_string(),
                full_name: "Mona Heen".to_string(),
                email: "mona.heen@example.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_cards_are_idempotent() {
        let mut state = GalleryState::new();
        state.replace(vec![user(1), user(2), user(3)]);
        assert_eq!(state.cards(), state.cards());
    }
}

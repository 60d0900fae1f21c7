//! # Profile models
//!
//! Two layers describe a profile:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`UserRecord`] | The flattened record the gallery stores and renders: avatar URL, first and last name, email. |
//! | [`RandomUserPage`] / [`RandomUser`] | Deserialization targets for the `randomuser.me` response body. Only the fields the gallery shows are declared; everything else in the payload is ignored. |
//!
//! A [`RandomUser`] converts into a [`UserRecord`] with `From`, so the client can
//! map the `results` array in arrival order without touching individual fields.

use serde::{Deserialize, Serialize};

/// One fetched profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Avatar image URL (the API's `picture.large`)
    pub picture_url: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(
        picture_url: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            picture_url: picture_url.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// `"{first} {last}"`, as shown on the card heading.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response body of `GET /api/?results=N`.
#[derive(Debug, Deserialize)]
pub struct RandomUserPage {
    pub results: Vec<RandomUser>,
}

/// A single entry of the `results` array.
#[derive(Debug, Deserialize)]
pub struct RandomUser {
    pub name: RandomUserName,
    pub email: String,
    pub picture: RandomUserPicture,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomUserPicture {
    pub large: String,
}

impl From<RandomUser> for UserRecord {
    fn from(user: RandomUser) -> Self {
        Self {
            picture_url: user.picture.large,
            first_name: user.name.first,
            last_name: user.name.last,
            email: user.email,
        }
    }
}

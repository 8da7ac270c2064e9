//! Wire shape of the random-user API and the flat record the table shows.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ColumnKey, FetchError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLogin {
    pub uuid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLocation {
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPicture {
    pub thumbnail: String,
}

/// One entry of the `results` array. Fields the table does not use are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawUserRecord {
    pub login: RawLogin,
    pub name: RawName,
    pub email: String,
    pub phone: String,
    pub location: RawLocation,
    pub picture: RawPicture,
}

/// Response body of `GET /api/?results=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<RawUserRecord>,
}

/// A user as rendered by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub picture_url: String,
}

impl DisplayUser {
    /// Raw string behind a column.
    pub fn field(&self, key: ColumnKey) -> &str {
        match key {
            ColumnKey::Picture => &self.picture_url,
            ColumnKey::Name => &self.name,
            ColumnKey::Email => &self.email,
            ColumnKey::Phone => &self.phone,
            ColumnKey::Country => &self.country,
        }
    }
}

/// Flattens one raw record.
///
/// A record without an identity is rejected: rows are keyed by it.
pub fn normalize_user(raw: RawUserRecord) -> Result<DisplayUser, FetchError> {
    if raw.login.uuid.trim().is_empty() {
        return Err(FetchError::MalformedResponse(
            "record without login.uuid".to_string(),
        ));
    }

    Ok(DisplayUser {
        id: raw.login.uuid,
        name: format!("{} {}", raw.name.first, raw.name.last),
        email: raw.email,
        phone: raw.phone,
        country: raw.location.country,
        picture_url: raw.picture.thumbnail,
    })
}

/// Flattens a whole batch in source order. One bad record fails the batch.
pub fn normalize_batch(records: Vec<RawUserRecord>) -> Result<Vec<DisplayUser>, FetchError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut users = Vec::with_capacity(records.len());

    for raw in records {
        let user = normalize_user(raw)?;
        if !seen.insert(user.id.clone()) {
            return Err(FetchError::MalformedResponse(format!(
                "duplicate login.uuid {}",
                user.id
            )));
        }
        users.push(user);
    }

    Ok(users)
}

/// Decodes a response body and normalizes its `results`.
pub fn parse_users(body: &[u8]) -> Result<Vec<DisplayUser>, FetchError> {
    let response: RandomUserResponse = serde_json::from_slice(body)
        .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;
    normalize_batch(response.results)
}

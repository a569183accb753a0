//! Backend capability abstraction.
//!
//! Decouples the page from any specific HTTP stack. The concrete client
//! lives in `jogos-client`; tests use in-memory fakes.

use std::future::Future;

use thiserror::Error;

use crate::record::{GameFields, GameRecord};

/// Collection resource, target of create requests.
pub const COLLECTION_PATH: &str = "jogos/";

/// Resource path of a single record.
pub fn record_path(id: &str) -> String {
    format!("jogos/{id}")
}

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status { status: u16, path: String },

    /// The response body was not a valid record.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// The three backend operations the form page needs.
///
/// Futures are not required to be `Send`: in the browser everything runs
/// on one thread.
pub trait GameApi {
    /// `GET jogos/{id}`.
    fn fetch_game(&self, id: &str) -> impl Future<Output = Result<GameRecord, ApiError>>;

    /// `POST jogos/` with the five fields as body. The response is ignored.
    fn create_game(&self, fields: &GameFields) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT jogos/{id}` with the five fields as body. The response is ignored.
    fn update_game(
        &self,
        id: &str,
        fields: &GameFields,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

impl<T: GameApi> GameApi for &T {
    fn fetch_game(&self, id: &str) -> impl Future<Output = Result<GameRecord, ApiError>> {
        (**self).fetch_game(id)
    }

    fn create_game(&self, fields: &GameFields) -> impl Future<Output = Result<(), ApiError>> {
        (**self).create_game(fields)
    }

    fn update_game(
        &self,
        id: &str,
        fields: &GameFields,
    ) -> impl Future<Output = Result<(), ApiError>> {
        (**self).update_game(id, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(COLLECTION_PATH, "jogos/");
        assert_eq!(record_path("7"), "jogos/7");
    }

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            status: 404,
            path: record_path("9"),
        };
        assert_eq!(err.to_string(), "jogos/9 returned HTTP 404");
    }
}

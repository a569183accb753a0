//! HTTP implementation of [`GameApi`].
//!
//! [`HttpGameApi`] talks to the backend through the browser `fetch` API
//! (`gloo-net`). Response bodies are read as text and decoded here so a
//! malformed body is reported as [`ApiError::Decode`].

use gloo_net::http::{Request, RequestBuilder};
use jogos_core::api::{ApiError, COLLECTION_PATH, GameApi, record_path};
use jogos_core::record::{GameFields, GameRecord};
use tracing::debug;

use crate::config::ApiConfig;

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// Map a non-success status to [`ApiError::Status`].
pub fn check_status(path: &str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            path: path.to_string(),
        })
    }
}

/// Decode a `GET jogos/{id}` body.
pub fn decode_record(body: &str) -> Result<GameRecord, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ---------------------------------------------------------------------------
// HttpGameApi
// ---------------------------------------------------------------------------

/// Backend client for the `jogos` resource.
#[derive(Clone, Debug)]
pub struct HttpGameApi {
    config: ApiConfig,
}

impl HttpGameApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        path: &str,
        body: Option<&GameFields>,
    ) -> Result<String, ApiError> {
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(path, response.status())?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

impl GameApi for HttpGameApi {
    async fn fetch_game(&self, id: &str) -> Result<GameRecord, ApiError> {
        let path = record_path(id);
        let url = self.config.url(&path);
        debug!(%url, "GET");
        let body = self.send(Request::get(&url), &path, None).await?;
        decode_record(&body)
    }

    async fn create_game(&self, fields: &GameFields) -> Result<(), ApiError> {
        let url = self.config.url(COLLECTION_PATH);
        debug!(%url, "POST");
        self.send(Request::post(&url), COLLECTION_PATH, Some(fields))
            .await
            .map(drop)
    }

    async fn update_game(&self, id: &str, fields: &GameFields) -> Result<(), ApiError> {
        let path = record_path(id);
        let url = self.config.url(&path);
        debug!(%url, "PUT");
        self.send(Request::put(&url), &path, Some(fields))
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses() {
        assert!(check_status("jogos/", 200).is_ok());
        assert!(check_status("jogos/", 201).is_ok());
        assert!(check_status("jogos/1", 204).is_ok());
    }

    #[test]
    fn failure_statuses_carry_path() {
        assert_eq!(
            check_status("jogos/1", 404),
            Err(ApiError::Status {
                status: 404,
                path: "jogos/1".into()
            })
        );
        assert!(check_status("jogos/", 500).is_err());
        assert!(check_status("jogos/", 302).is_err());
    }

    #[test]
    fn decodes_record_body() {
        let record = decode_record(r#"{"id":3,"nome":"Tetris","generoId":2}"#).unwrap();
        assert_eq!(record.id.as_deref(), Some("3"));
        assert_eq!(record.fields.nome, "Tetris");
        assert_eq!(record.fields.genero_id, "2");
    }

    #[test]
    fn bad_body_is_decode_error() {
        assert!(matches!(decode_record("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn keeps_its_config() {
        let api = HttpGameApi::new(ApiConfig::new("http://api.test/"));
        assert_eq!(api.config().url(COLLECTION_PATH), "http://api.test/jogos/");
    }
}

//! # Character API Gateway
//!
//! Implements the `CharacterGateway` trait over the mini-app backend's JSON API.
//! Every response is an envelope `{status, message?, data?}`; anything other than
//! `status == "ok"` is a rejection, and unreadable bodies count as transport failures.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::character::CharacterRecord;
use crate::domain::config::BackendConfig;
use crate::domain::error::GatewayError;
use crate::domain::paths::{self, INIT_ROUTE, SAVE_ROUTE};
use crate::domain::traits::CharacterGateway;

pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    status: String,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct InitPayload {
    #[serde(default)]
    character: Option<CharacterRecord>,
}

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    telegram_init_data: &'a str,
    character: &'a CharacterRecord,
}

pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn read_body(response: reqwest::Response) -> Result<String, GatewayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;
        if !status.is_success() {
            // Error responses still carry an envelope.
            tracing::debug!("Backend answered HTTP {}", status);
        }
        Ok(body)
    }
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, GatewayError> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| GatewayError::Transport(format!("Failed to parse response: {}", e)))?;
    if envelope.status != "ok" {
        return Err(GatewayError::Rejected {
            message: envelope.message,
        });
    }
    Ok(envelope)
}

/// Extracts the saved character from an init response body.
pub fn parse_init_response(body: &str) -> Result<Option<CharacterRecord>, GatewayError> {
    let envelope = parse_envelope::<InitPayload>(body)?;
    Ok(envelope.data.and_then(|data| data.character))
}

pub fn parse_save_response(body: &str) -> Result<(), GatewayError> {
    parse_envelope::<serde_json::Value>(body).map(|_| ())
}

#[async_trait]
impl CharacterGateway for HttpGateway {
    async fn load(&self, init_data: &str) -> Result<Option<CharacterRecord>, GatewayError> {
        let url = paths::endpoint(&self.base_url, INIT_ROUTE);
        tracing::info!("Loading character from {}", url);

        let response = self
            .client
            .get(&url)
            .header(INIT_DATA_HEADER, init_data)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("HTTP request failed: {}", e)))?;

        let body = Self::read_body(response).await?;
        parse_init_response(&body)
    }

    async fn save(&self, init_data: &str, character: &CharacterRecord) -> Result<(), GatewayError> {
        let url = paths::endpoint(&self.base_url, SAVE_ROUTE);
        tracing::info!("Saving character to {}", url);

        let request = SaveRequest {
            telegram_init_data: init_data,
            character,
        };
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("HTTP request failed: {}", e)))?;

        let body = Self::read_body(response).await?;
        parse_save_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AppearanceField;

    #[test]
    fn test_init_without_character() {
        assert_eq!(parse_init_response(r#"{"status":"ok","data":{}}"#), Ok(None));
        assert_eq!(
            parse_init_response(r#"{"status":"ok","data":{"character":null}}"#),
            Ok(None)
        );
        assert_eq!(parse_init_response(r#"{"status":"ok"}"#), Ok(None));
    }

    #[test]
    fn test_init_tolerates_off_type_numbers() {
        let body = r#"{
            "status": "ok",
            "data": {
                "character": {
                    "appearance": {"gender": "Female", "portrait_seed": 5000000000},
                    "personality": {"character_name": "Ivy", "character_age": "25"}
                }
            }
        }"#;

        let character = parse_init_response(body).unwrap().unwrap();
        assert_eq!(character.appearance.gender.as_deref(), Some("Female"));
        assert_eq!(character.appearance.portrait_seed, None);
        assert_eq!(character.personality.character_name, "Ivy");
        assert_eq!(character.personality.character_age, Some(25));

        let body = r#"{"status":"ok","data":{"character":{"personality":{"character_age":-1}}}}"#;
        let character = parse_init_response(body).unwrap().unwrap();
        assert_eq!(character.personality.character_age, None);
    }

    #[test]
    fn test_init_with_character() {
        let body = r#"{
            "status": "ok",
            "data": {
                "character": {
                    "appearance": {"gender": "Male", "hair_color": "Red", "portrait_seed": 123},
                    "personality": {
                        "character_name": "Leo",
                        "character_age": 40,
                        "personality_traits": ["Bold"],
                        "interests": [],
                        "occupation": "Writer"
                    }
                }
            }
        }"#;

        let character = parse_init_response(body).unwrap().unwrap();
        assert_eq!(character.appearance.get(AppearanceField::Gender), Some("Male"));
        assert_eq!(character.appearance.portrait_seed, Some(123));
        assert_eq!(character.appearance.eye_color, None);
        assert_eq!(character.personality.character_age, Some(40));
        assert_eq!(character.personality.occupation.as_deref(), Some("Writer"));
    }

    #[test]
    fn test_non_ok_status_is_rejection() {
        assert_eq!(
            parse_init_response(r#"{"status":"error","message":"invalid init data"}"#),
            Err(GatewayError::Rejected {
                message: Some("invalid init data".to_string())
            })
        );
        assert_eq!(
            parse_save_response(r#"{"status":"fail"}"#),
            Err(GatewayError::Rejected { message: None })
        );
        assert_eq!(parse_save_response(r#"{"status":"ok"}"#), Ok(()));
    }

    #[test]
    fn test_unreadable_body_is_transport_failure() {
        assert!(matches!(
            parse_save_response("<html>502 Bad Gateway</html>"),
            Err(GatewayError::Transport(_))
        ));
        assert!(matches!(
            parse_init_response(r#"{"data":{}}"#),
            Err(GatewayError::Transport(_))
        ));
    }

    #[test]
    fn test_save_request_shape() {
        let mut character = CharacterRecord::default();
        character.appearance.portrait_seed = Some(77);
        let request = SaveRequest {
            telegram_init_data: "auth",
            character: &character,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["telegram_init_data"], "auth");
        assert_eq!(value["character"]["appearance"]["portrait_seed"], 77);
        assert!(value["character"]["personality"].is_object());
    }
}

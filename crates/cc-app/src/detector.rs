use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use cc_core::detect::{CardPrediction, DetectedCards};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_DETECT_URL: &str = "https://detect.roboflow.com/playing-cards-ow27d/4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Failures are reported to the user as a dismissible notice; the round
/// being counted is never touched by one.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("no API key configured; pass --api-key or set CC_API_KEY")]
    MissingApiKey,
    #[error("could not read photo {path}: {source}")]
    Photo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("detection request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("detection service answered with status {0}")]
    Api(StatusCode),
    #[error("no cards detected; try a clearer photo")]
    NoDetections,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    predictions: Vec<CardPrediction>,
}

/// Thin client for the card-detection service: posts one base64 JPEG and
/// reduces the predictions to a counting suggestion. One outstanding
/// request at a time; the caller decides whether the answer still matters.
pub struct CardDetector {
    url: String,
    api_key: String,
    client: Client,
}

impl CardDetector {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Result<Self, DetectError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(DetectError::MissingApiKey)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            url: url.into(),
            api_key,
            client,
        })
    }

    pub fn detect_file(&self, path: &Path) -> Result<DetectedCards, DetectError> {
        let bytes = std::fs::read(path).map_err(|source| DetectError::Photo {
            path: path.to_path_buf(),
            source,
        })?;
        self.detect_bytes(&bytes)
    }

    pub fn detect_bytes(&self, image: &[u8]) -> Result<DetectedCards, DetectError> {
        let body = BASE64.encode(image);
        let response = self
            .client
            .post(&self.url)
            .query(&[("api_key", self.api_key.as_str())])
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectError::Api(status));
        }

        let parsed: DetectResponse = response.json()?;
        debug!(predictions = parsed.predictions.len(), "detection response");

        let detected = DetectedCards::from_predictions(&parsed.predictions);
        if detected.is_empty() {
            return Err(DetectError::NoDetections);
        }
        Ok(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::{CardDetector, DetectError, DetectResponse};

    #[test]
    fn missing_api_key_is_rejected_up_front() {
        assert!(matches!(
            CardDetector::new("http://localhost/x", None),
            Err(DetectError::MissingApiKey)
        ));
        assert!(matches!(
            CardDetector::new("http://localhost/x", Some("  ".into())),
            Err(DetectError::MissingApiKey)
        ));
    }

    #[test]
    fn response_without_predictions_parses_as_empty() {
        let parsed: DetectResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.predictions.is_empty());
    }

    #[test]
    fn response_predictions_deserialize() {
        let json = r#"{"predictions": [{"class": "QS", "confidence": 0.91}]}"#;
        let parsed: DetectResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.predictions[0].class, "QS");
    }
}

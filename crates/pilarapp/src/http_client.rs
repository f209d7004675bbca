//! HTTP transport for the classification service.
//!
//! Uploads the image as a `multipart/form-data` POST with a single `file`
//! field, optionally authenticated with a bearer token, and hands the body to
//! [`crate::classify::parse_response`].

use crate::classify::{parse_response, Classification, Classifier, ImageUpload};
use crate::config::PilarConfig;
use crate::error::{PilarError, Result};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpClassifier {
    agent: ureq::Agent,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>, read_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(read_timeout)
            .timeout_write(WRITE_TIMEOUT)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            auth_token: None,
        }
    }

    pub fn from_config(config: &PilarConfig) -> Self {
        let classifier = Self::new(
            config.classify_url.clone(),
            Duration::from_secs(config.timeout_secs),
        );
        match &config.auth_token {
            Some(token) => classifier.with_auth_token(token.clone()),
            None => classifier,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, image: &ImageUpload) -> Result<Classification> {
        let boundary = format!("pilar-{}", Uuid::new_v4().simple());
        let body = multipart_body(&boundary, image);

        let mut request = self.agent.post(&self.endpoint).set(
            "Content-Type",
            &format!("multipart/form-data; boundary={}", boundary),
        );
        if let Some(token) = &self.auth_token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        debug!(endpoint = %self.endpoint, bytes = image.bytes.len(), "uploading image");
        let response = match request.send_bytes(&body) {
            Ok(response) => response,
            // Error statuses still carry the service's JSON explanation.
            Err(ureq::Error::Status(code, response)) => {
                let text = response.into_string().unwrap_or_default();
                return Err(match parse_response(&text) {
                    Err(PilarError::Classification(msg)) if !text.is_empty() => {
                        PilarError::Classification(format!("HTTP {}: {}", code, msg))
                    }
                    _ => PilarError::Http(format!("HTTP {}", code)),
                });
            }
            Err(e) => return Err(PilarError::Http(e.to_string())),
        };

        let text = response
            .into_string()
            .map_err(|e| PilarError::Http(e.to_string()))?;
        let classification = parse_response(&text)?;
        debug!(
            waste_type = %classification.waste_type,
            category = %classification.category,
            confidence = classification.confidence,
            "classified image"
        );
        Ok(classification)
    }
}

fn multipart_body(boundary: &str, image: &ImageUpload) -> Vec<u8> {
    let file_name = image.file_name.replace('"', "");
    let mut body = Vec::with_capacity(image.bytes.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", image.content_type).as_bytes());
    body.extend_from_slice(&image.bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

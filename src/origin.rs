//! Origin providers.
//!
//! `HttpOriginProvider` asks an IP geolocation endpoint for an approximate
//! position; `FixedOrigin` always answers with a known coordinate (or a
//! known failure).

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::OriginConfig;
use crate::error::OriginError;
use crate::location::Position;
use crate::traits::OriginProvider;

/// Provider with a predetermined answer.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedOrigin(pub Result<Position, OriginError>);

impl FixedOrigin {
    pub fn at(position: impl Into<Position>) -> Self {
        Self(Ok(position.into()))
    }

    pub fn failing(err: OriginError) -> Self {
        Self(Err(err))
    }
}

impl OriginProvider for FixedOrigin {
    fn current_position(&self) -> Result<Position, OriginError> {
        self.0.clone()
    }
}

#[derive(Debug, Clone)]
pub struct HttpOriginProvider {
    config: OriginConfig,
    client: reqwest::blocking::Client,
}

impl HttpOriginProvider {
    pub fn new(config: OriginConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OriginConfig {
        &self.config
    }
}

impl OriginProvider for HttpOriginProvider {
    fn current_position(&self) -> Result<Position, OriginError> {
        let response = self
            .client
            .get(self.config.endpoint.as_str())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<GeolocationResponse>());

        let body = match response {
            Ok(body) => body,
            Err(err) => {
                warn!(endpoint = %self.config.endpoint, error = %err, "origin lookup failed");
                return Err(err.into());
            }
        };

        let position = Position::new(body.latitude, body.longitude);
        position.validate()?;

        debug!(lat = position.lat, lng = position.lng, "origin resolved");
        Ok(position)
    }
}

#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
}

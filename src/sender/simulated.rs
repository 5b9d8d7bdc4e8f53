//! Simulated delivery backend
//!
//! Stand-in for a real transport: sleeps a configurable latency, then
//! fails with a configurable probability. Replace with an HTTP client or
//! similar behind the same [`ContactSender`] seam.

use super::traits::{ContactSender, SendError};
use crate::config::ContactConfig;
use crate::state::FormSnapshot;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Default simulated round-trip latency
const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
/// Default probability of a simulated network failure
const DEFAULT_FAILURE_RATE: f64 = 0.1;

pub struct SimulatedSender {
    latency: Duration,
    failure_rate: f64,
}

impl SimulatedSender {
    pub fn from_config(config: &ContactConfig) -> Self {
        Self {
            latency: config
                .sender_latency_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_LATENCY),
            failure_rate: config
                .sender_failure_rate
                .unwrap_or(DEFAULT_FAILURE_RATE)
                .clamp(0.0, 1.0),
        }
    }

    #[cfg(test)]
    fn with_params(latency: Duration, failure_rate: f64) -> Self {
        Self {
            latency,
            failure_rate,
        }
    }
}

#[async_trait]
impl ContactSender for SimulatedSender {
    async fn send(&mut self, snapshot: &FormSnapshot) -> Result<(), SendError> {
        tokio::time::sleep(self.latency).await;

        // Roll after the sleep so the failure path has realistic timing
        let roll: f64 = rand::thread_rng().gen();
        if roll < self.failure_rate {
            return Err(SendError::Network("simulated network failure".to_string()));
        }

        let payload = serde_json::to_string(snapshot)
            .map_err(|e| SendError::Rejected(format!("unserializable payload: {e}")))?;
        info!(%payload, "contact form delivered (simulated)");
        Ok(())
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::RouterOsClient;
use crate::metrics::{MetricSink, Observation};

/// The device being scraped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub address: String,
}

impl Device {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Per-call inputs of a collect pass. Not owned by any collector.
#[derive(Clone)]
pub struct CollectorContext {
    pub device: Device,
    pub client: Arc<dyn RouterOsClient>,
    pub metrics: MetricSink,
}

impl CollectorContext {
    pub fn new(device: Device, client: Arc<dyn RouterOsClient>, metrics: MetricSink) -> Self {
        Self { device, client, metrics }
    }

    /// Pushes one observation. Fails only when the receiving end is gone.
    pub(crate) fn send(&self, observation: Observation) -> bool {
        self.metrics.send(observation).is_ok()
    }
}

impl std::fmt::Debug for CollectorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorContext")
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}

#![allow(dead_code)]

pub mod builders {
    pub mod interface;
}
pub mod mocks {
    pub mod client;
}

use std::sync::Arc;

use routeros_metrics::collector::{CollectorContext, Device};
use routeros_metrics::metrics::Observation;
use tokio::sync::mpsc;

pub use builders::interface::{reply, TestInterfaceBuilder};
pub use mocks::client::FakeClient;

pub fn context(
    device: Device,
    client: Arc<FakeClient>,
) -> (CollectorContext, mpsc::UnboundedReceiver<Observation>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CollectorContext::new(device, client, tx), rx)
}

pub fn drain(rx: &mut mpsc::UnboundedReceiver<Observation>) -> Vec<Observation> {
    let mut observations = Vec::new();
    while let Ok(observation) = rx.try_recv() {
        observations.push(observation);
    }
    observations
}

use std::fmt::Write as _;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use crate::client::{MockRouterOsClient, Reply, ReplyRow};
use crate::collector::{CollectorContext, Device};
use crate::metrics::Observation;

/// A log event flattened to its level and `field=value` pairs.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: String,
}

impl CapturedEvent {
    pub fn has_field(&self, name: &str, value: &str) -> bool {
        self.fields.contains(&format!("{}={} ", name, value))
            || self.fields.contains(&format!("{}={:?} ", name, value))
    }
}

/// Records every event seen while installed as the thread default.
#[derive(Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Installs the capture for the current thread until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn errors(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.level == Level::ERROR)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct FieldRecorder(String);

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        self.events.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: recorder.0,
        });
    }
}

pub fn test_device() -> Device {
    Device::new("rtr1", "10.0.0.1")
}

/// A mock answering every command with `rows`.
pub fn mock_client_with_rows(rows: Vec<ReplyRow>) -> MockRouterOsClient {
    let mut mock = MockRouterOsClient::new();
    mock.expect_run().returning(move |_, _| Ok(Reply::new(rows.clone())));
    mock
}

/// A context around `client` plus the receiving end of its sink.
pub fn test_context(client: MockRouterOsClient) -> (CollectorContext, mpsc::UnboundedReceiver<Observation>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CollectorContext::new(test_device(), Arc::new(client), tx), rx)
}

pub fn drain(rx: &mut mpsc::UnboundedReceiver<Observation>) -> Vec<Observation> {
    let mut observations = Vec::new();
    while let Ok(observation) = rx.try_recv() {
        observations.push(observation);
    }
    observations
}

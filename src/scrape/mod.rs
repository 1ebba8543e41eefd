//! # Device scrapes
//!
//! [`DeviceScraper`] runs every collector for one device concurrently and
//! reports, per collector, how long it took and whether it succeeded. The
//! report is also published as two gauges through the same observation sink:
//!
//! * `mikrotik_scrape_collector_duration_seconds{device, collector}`
//! * `mikrotik_scrape_collector_success{device, collector}`
//!
//! A failing collector never stops the others, and nothing is retried.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{error, info};

use crate::collector::{Collector, CollectorContext};
use crate::error::Error;
use crate::metrics::{DescriptorSink, MetricDescriptor, Observation, DEFAULT_NAMESPACE};

const SUBSYSTEM: &str = "scrape";
const LABELS: [&str; 2] = ["device", "collector"];

/// Outcome of one collector within a scrape.
#[derive(Debug)]
pub struct CollectorOutcome {
    pub collector: String,
    pub duration: Duration,
    pub error: Option<Error>,
}

impl CollectorOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-collector outcomes of one device scrape, in registration order.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub device: String,
    pub outcomes: Vec<CollectorOutcome>,
}

impl ScrapeReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CollectorOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CollectorOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }
}

pub struct DeviceScraper {
    collectors: Vec<Arc<dyn Collector>>,
    duration_desc: Arc<MetricDescriptor>,
    success_desc: Arc<MetricDescriptor>,
}

impl Default for DeviceScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceScraper {
    pub fn new() -> Self {
        let labels: Vec<String> = LABELS.iter().map(|label| label.to_string()).collect();
        Self {
            collectors: Vec::new(),
            duration_desc: Arc::new(MetricDescriptor::new(
                DEFAULT_NAMESPACE,
                SUBSYSTEM,
                "collector_duration_seconds",
                "duration of a collector scrape",
                labels.clone(),
            )),
            success_desc: Arc::new(MetricDescriptor::new(
                DEFAULT_NAMESPACE,
                SUBSYSTEM,
                "collector_success",
                "whether a collector succeeded",
                labels,
            )),
        }
    }

    pub fn with_collector(mut self, collector: Arc<dyn Collector>) -> Self {
        self.collectors.push(collector);
        self
    }

    /// Pushes the scrape descriptors and those of every collector.
    pub fn describe(&self, sink: &DescriptorSink) -> usize {
        let own = [&self.duration_desc, &self.success_desc]
            .into_iter()
            .take_while(|desc| sink.send(Arc::clone(*desc)).is_ok())
            .count();
        own + self.collectors.iter().map(|collector| collector.describe(sink)).sum::<usize>()
    }

    /// Runs all collectors against the device in `ctx`.
    pub async fn scrape(&self, ctx: &CollectorContext) -> ScrapeReport {
        let runs = self.collectors.iter().map(|collector| async move {
            let start = Instant::now();
            let result = collector.collect(ctx).await;
            CollectorOutcome {
                collector: collector.name().to_string(),
                duration: start.elapsed(),
                error: result.err(),
            }
        });
        let outcomes = join_all(runs).await;

        for outcome in &outcomes {
            if let Some(err) = &outcome.error {
                error!(
                    device = %ctx.device.name,
                    collector = %outcome.collector,
                    error = %err,
                    "collector failed"
                );
            }
            self.publish(ctx, outcome);
        }

        let report = ScrapeReport {
            device: ctx.device.name.clone(),
            outcomes,
        };
        info!(
            device = %report.device,
            collectors = report.outcomes.len(),
            failed = report.failures().count(),
            "scrape finished"
        );
        report
    }

    fn publish(&self, ctx: &CollectorContext, outcome: &CollectorOutcome) {
        let labels = vec![ctx.device.name.clone(), outcome.collector.clone()];
        let success = if outcome.is_success() { 1.0 } else { 0.0 };
        let duration = Observation::new(
            Arc::clone(&self.duration_desc),
            outcome.duration.as_secs_f64(),
            labels.clone(),
        );
        let success = Observation::new(Arc::clone(&self.success_desc), success, labels);

        if !ctx.send(duration) || !ctx.send(success) {
            error!(device = %ctx.device.name, "metric sink closed, scrape metrics dropped");
        }
    }
}

impl std::fmt::Debug for DeviceScraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.collectors.iter().map(|c| c.name()).collect();
        f.debug_struct("DeviceScraper").field("collectors", &names).finish()
    }
}

//! RouterOS Metrics - translate RouterOS monitoring replies into Prometheus gauges
//!
//! This crate sits between a RouterOS API client and a Prometheus registry.
//! A collector runs one monitoring command (for example
//! `/interface/monitor-traffic =interface=uplink =once=`), reads a fixed set
//! of properties from every reply row, converts the textual values to numbers
//! and sends labeled observations down a channel.
//!
//! # Features
//!
//! - **Config-driven collectors**: one [`collector::PropertyCollector`] per
//!   property table, loadable from JSON
//! - **Stable descriptors**: metric names and label schemas built once per
//!   collector
//! - **Failure isolation**: a malformed value skips one observation, never the
//!   row or the collect call
//! - **Export**: a `prometheus` registry fed from the observation channel
//! - **Scrapes**: run every collector of a device concurrently with per
//!   collector duration and success gauges
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use routeros_metrics::prelude::*;
//! use tokio::sync::mpsc;
//!
//! async fn scrape_once(client: Arc<dyn RouterOsClient>) -> Result<String> {
//!     let (tx, mut rx) = mpsc::unbounded_channel();
//!     let ctx = CollectorContext::new(Device::new("rtr1", "10.0.0.1"), client, tx);
//!
//!     let scraper = DeviceScraper::new()
//!         .with_collector(Arc::new(PropertyCollector::new(presets::bandwidth())?));
//!     scraper.scrape(&ctx).await;
//!
//!     let exporter = GaugeExporter::new();
//!     exporter.drain(&mut rx);
//!     exporter.render()
//! }
//! ```
//!
//! # Error Handling
//!
//! Only failures to query the device cross the `collect` boundary:
//!
//! ```rust
//! use routeros_metrics::{Error, Result};
//!
//! fn fetch() -> Result<()> {
//!     Err(Error::transport("connection refused"))
//! }
//!
//! assert!(fetch().unwrap_err().is_transport());
//! ```
//!
//! # Thread Safety
//!
//! Collectors hold only their read-only descriptor map, so one collector can
//! serve many concurrent collect calls, each with its own context.

pub mod client;
pub mod collector;
pub mod error;
pub mod export;
pub mod logging;
pub mod metrics;
pub mod scrape;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::client::{Reply, ReplyRow, RouterOsClient};
    pub use crate::collector::{
        presets, CoercionRule, Collector, CollectorConfig, CollectorContext, Device, LabelSchema, MonitoredProperty,
        PropertyCollector,
    };
    pub use crate::error::{Error, Result};
    pub use crate::export::GaugeExporter;
    pub use crate::metrics::{MetricDescriptor, Observation};
    pub use crate::scrape::{DeviceScraper, ScrapeReport};
}

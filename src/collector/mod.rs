//! # Property collectors
//!
//! A collector runs one monitoring command against a device and turns the
//! reply rows into gauges:
//!
//! 1. [`ReplyFetcher`] issues the command (one round trip per collect).
//! 2. [`RowEmitter`] walks rows x monitored properties.
//! 3. [`coerce`] turns each raw value into a number or skips it.
//! 4. The observation, labeled through the [`LabelSchema`], goes to the
//!    context's sink.
//!
//! Only fetch errors leave `collect`. A malformed value is logged and only
//! that single observation is skipped.
//!
//! ## Example
//!
//! ```rust
//! use routeros_metrics::collector::{presets, Collector, PropertyCollector};
//!
//! let collector = PropertyCollector::new(presets::bandwidth()).unwrap();
//! assert_eq!(collector.name(), "bandwidth");
//! assert_eq!(collector.descriptors().len(), 4);
//! assert!(collector.descriptors().contains_key("rx-bits-per-second"));
//! ```

pub mod coerce;
pub mod context;
pub mod emit;
pub mod fetch;
pub mod presets;
pub mod property_collector;
pub mod types;

pub use coerce::{coerce, CoercionError, TRUE_TOKEN};
pub use context::{CollectorContext, Device};
pub use emit::{EmitSummary, RowEmitter};
pub use fetch::ReplyFetcher;
pub use property_collector::PropertyCollector;
pub use types::{CoercionRule, CollectorConfig, LabelSchema, LabelSource, LabelSpec, MonitoredProperty};

use async_trait::async_trait;

use crate::error::Result;
use crate::metrics::DescriptorSink;

/// The describe/collect contract the scrape orchestration drives.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Name used in logs and in the scrape metrics
    fn name(&self) -> &str;

    /// Pushes every descriptor to `sink`, returning how many were sent.
    fn describe(&self, sink: &DescriptorSink) -> usize;

    /// Collects one reading from the device in `ctx`.
    ///
    /// Returns the fetch error unchanged when the device could not be queried.
    async fn collect(&self, ctx: &CollectorContext) -> Result<()>;
}

//! # Metric descriptors and observations
//!
//! Descriptors are built once per collector and shared behind an [`Arc`];
//! every [`Observation`] points back at the descriptor it belongs to.
//!
//! ## Example
//!
//! ```rust
//! use routeros_metrics::metrics::build_descriptors;
//!
//! let labels = vec!["name".to_string(), "address".to_string()];
//! let descriptors = build_descriptors("mikrotik", "interface", &["rx-bits-per-second"], &labels);
//!
//! let desc = &descriptors["rx-bits-per-second"];
//! assert_eq!(desc.fq_name(), "mikrotik_interface_rx_bits_per_second");
//! assert_eq!(desc.label_names(), labels.as_slice());
//! ```
//!
//! [`Arc`]: std::sync::Arc

pub mod descriptor;
pub mod observation;

pub use descriptor::{
    build_descriptors, build_fq_name, is_valid_label_name, is_valid_metric_name, metric_name_cleanup,
    MetricDescriptor, DEFAULT_NAMESPACE,
};
pub use observation::Observation;

use std::sync::Arc;

use tokio::sync::mpsc;

/// Write end of the observation channel handed to collectors.
pub type MetricSink = mpsc::UnboundedSender<Observation>;

/// Write end of the descriptor channel used during describe passes.
pub type DescriptorSink = mpsc::UnboundedSender<Arc<MetricDescriptor>>;

#[cfg(test)]
mod tests;

//! # Prometheus export
//!
//! [`GaugeExporter`] is the consuming end of the observation channel. Each
//! descriptor becomes a `GaugeVec` in its own [`prometheus::Registry`] and
//! each observation sets one labeled gauge.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use routeros_metrics::export::GaugeExporter;
//! use routeros_metrics::metrics::{MetricDescriptor, Observation};
//!
//! let desc = Arc::new(MetricDescriptor::new("mikrotik", "interface", "running", "running", vec!["name".into()]));
//! let exporter = GaugeExporter::new();
//! exporter.record(&Observation::new(desc, 1.0, vec!["rtr1".into()])).unwrap();
//!
//! let text = exporter.render().unwrap();
//! assert!(text.contains("mikrotik_interface_running{name=\"rtr1\"} 1"));
//! ```

use std::collections::HashMap;

use parking_lot::RwLock;
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use tokio::sync::mpsc;
use tracing::warn;

use crate::error::{Error, Result};
use crate::metrics::{MetricDescriptor, Observation};

/// A registered gauge family and the descriptor it was registered with.
struct Family {
    descriptor: MetricDescriptor,
    gauge: GaugeVec,
}

impl Family {
    /// Fails unless `descriptor` has the same help text and the same label
    /// names, in the same order, as the registered one.
    fn check(&self, descriptor: &MetricDescriptor) -> Result<()> {
        if self.descriptor.label_names() != descriptor.label_names() {
            return Err(Error::invalid_data(format!(
                "{} registered with labels {:?}, got {:?}",
                descriptor.fq_name(),
                self.descriptor.label_names(),
                descriptor.label_names()
            )));
        }
        if self.descriptor.help() != descriptor.help() {
            return Err(Error::invalid_data(format!(
                "{} registered with help {:?}, got {:?}",
                descriptor.fq_name(),
                self.descriptor.help(),
                descriptor.help()
            )));
        }
        Ok(())
    }
}

/// Keeps the latest value of every observed gauge.
pub struct GaugeExporter {
    registry: Registry,
    families: RwLock<HashMap<String, Family>>,
}

impl Default for GaugeExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GaugeExporter {
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            families: RwLock::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers the gauge family for `descriptor`.
    ///
    /// Registering an equal descriptor again is a no-op. A descriptor with the
    /// same name but other labels or help text is rejected.
    pub fn register(&self, descriptor: &MetricDescriptor) -> Result<()> {
        let mut families = self.families.write();
        if let Some(family) = families.get(descriptor.fq_name()) {
            return family.check(descriptor);
        }

        let label_names: Vec<&str> = descriptor.label_names().iter().map(String::as_str).collect();
        let gauge = GaugeVec::new(Opts::new(descriptor.fq_name(), descriptor.help()), &label_names)?;
        self.registry.register(Box::new(gauge.clone()))?;
        families.insert(
            descriptor.fq_name().to_string(),
            Family {
                descriptor: descriptor.clone(),
                gauge,
            },
        );
        Ok(())
    }

    /// Sets the gauge for the observation's label values.
    pub fn record(&self, observation: &Observation) -> Result<()> {
        let name = observation.fq_name();
        if !self.families.read().contains_key(name) {
            self.register(&observation.descriptor)?;
        }

        let families = self.families.read();
        let family = families
            .get(name)
            .ok_or_else(|| Error::invalid_data(format!("gauge {} is not registered", name)))?;
        family.check(&observation.descriptor)?;
        family
            .gauge
            .get_metric_with_label_values(&observation.label_refs())?
            .set(observation.value);
        Ok(())
    }

    /// Records every observation currently queued on `rx`.
    ///
    /// Observations that cannot be recorded are logged and skipped.
    pub fn drain(&self, rx: &mut mpsc::UnboundedReceiver<Observation>) -> usize {
        let mut recorded = 0;
        while let Ok(observation) = rx.try_recv() {
            match self.record(&observation) {
                Ok(()) => recorded += 1,
                Err(err) => warn!(
                    metric = %observation.fq_name(),
                    error = %err,
                    "dropping observation"
                ),
            }
        }
        recorded
    }

    /// Forgets all label sets, e.g. before the next scrape cycle.
    pub fn reset(&self) {
        for family in self.families.read().values() {
            family.gauge.reset();
        }
    }

    /// Text exposition of everything recorded so far.
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| Error::invalid_data(err.to_string()))
    }
}

impl std::fmt::Debug for GaugeExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaugeExporter")
            .field("families", &self.families.read().len())
            .finish()
    }
}

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{error, warn};

use crate::client::ReplyRow;
use crate::metrics::{build_descriptors, MetricDescriptor, Observation};

use super::coerce::coerce;
use super::context::CollectorContext;
use super::types::{CollectorConfig, LabelSchema, MonitoredProperty};

/// What happened to one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Observations pushed to the sink
    pub emitted: usize,
    /// Properties absent or empty in the row
    pub absent: usize,
    /// Properties whose value failed to parse
    pub malformed: usize,
    /// Observations lost because the sink was closed
    pub dropped: usize,
}

impl EmitSummary {
    pub fn merge(&mut self, other: EmitSummary) {
        self.emitted += other.emitted;
        self.absent += other.absent;
        self.malformed += other.malformed;
        self.dropped += other.dropped;
    }
}

/// Turns reply rows into labeled observations.
#[derive(Debug, Clone)]
pub struct RowEmitter {
    properties: Vec<MonitoredProperty>,
    descriptors: BTreeMap<String, Arc<MetricDescriptor>>,
    labels: LabelSchema,
    identity_field: String,
}

impl RowEmitter {
    pub fn from_config(config: &CollectorConfig) -> Self {
        let descriptors = build_descriptors(
            &config.namespace,
            &config.subsystem,
            config.property_names().as_slice(),
            &config.labels.names(),
        );
        Self {
            properties: config.properties.clone(),
            descriptors,
            labels: config.labels.clone(),
            identity_field: config.identity_field.clone(),
        }
    }

    pub fn descriptors(&self) -> &BTreeMap<String, Arc<MetricDescriptor>> {
        &self.descriptors
    }

    /// Emits one observation per property that coerces to a value.
    ///
    /// A malformed value is logged and skipped; the remaining properties of
    /// the row are still processed.
    pub fn emit(&self, row: &ReplyRow, ctx: &CollectorContext) -> EmitSummary {
        let mut summary = EmitSummary::default();
        let mut label_values: Option<Vec<String>> = None;

        for property in &self.properties {
            let Some(descriptor) = self.descriptors.get(&property.name) else {
                continue;
            };
            let raw = row.get(&property.name);

            let value = match coerce(property.rule, raw) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    summary.absent += 1;
                    continue;
                }
                Err(err) => {
                    error!(
                        device = %ctx.device.name,
                        interface = row.get_or_empty(&self.identity_field),
                        property = %property.name,
                        value = raw.unwrap_or_default(),
                        error = %err,
                        "error parsing metric value"
                    );
                    summary.malformed += 1;
                    continue;
                }
            };

            let labels = label_values
                .get_or_insert_with(|| self.labels.values(&ctx.device, row))
                .clone();
            let observation = Observation::new(Arc::clone(descriptor), value, labels);

            if ctx.send(observation) {
                summary.emitted += 1;
            } else {
                summary.dropped += 1;
            }
        }

        if summary.dropped > 0 {
            warn!(
                device = %ctx.device.name,
                interface = row.get_or_empty(&self.identity_field),
                dropped = summary.dropped,
                "metric sink closed, observations dropped"
            );
        }

        summary
    }
}

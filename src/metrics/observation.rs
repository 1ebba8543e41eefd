use std::sync::Arc;

use super::descriptor::MetricDescriptor;

/// One gauge reading: descriptor, value and label values in descriptor order.
#[derive(Debug, Clone)]
pub struct Observation {
    pub descriptor: Arc<MetricDescriptor>,
    pub value: f64,
    pub label_values: Vec<String>,
}

impl Observation {
    pub fn new(descriptor: Arc<MetricDescriptor>, value: f64, label_values: Vec<String>) -> Self {
        Self {
            descriptor,
            value,
            label_values,
        }
    }

    pub fn fq_name(&self) -> &str {
        self.descriptor.fq_name()
    }

    /// Looks up a label value by label name.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.descriptor
            .label_names()
            .iter()
            .position(|label| label == name)
            .and_then(|index| self.label_values.get(index))
            .map(String::as_str)
    }

    /// Label values as `&str`, the shape the exporter hands to prometheus.
    pub fn label_refs(&self) -> Vec<&str> {
        self.label_values.iter().map(String::as_str).collect()
    }
}

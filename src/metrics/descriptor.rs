use std::collections::BTreeMap;
use std::sync::Arc;

/// Default metric namespace, the first segment of every metric name.
pub const DEFAULT_NAMESPACE: &str = "mikrotik";

/// The identity of one gauge: its fully-qualified name, help text and the
/// ordered names of its variable labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricDescriptor {
    fq_name: String,
    help: String,
    property: String,
    label_names: Vec<String>,
}

impl MetricDescriptor {
    pub fn new(
        namespace: &str,
        subsystem: &str,
        property: &str,
        help: impl Into<String>,
        label_names: Vec<String>,
    ) -> Self {
        Self {
            fq_name: build_fq_name(namespace, subsystem, &metric_name_cleanup(property)),
            help: help.into(),
            property: property.to_string(),
            label_names,
        }
    }

    /// Fully-qualified metric name, e.g. `mikrotik_interface_rx_bits_per_second`.
    pub fn fq_name(&self) -> &str {
        &self.fq_name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// The reply field this metric is read from.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }
}

/// Replaces characters RouterOS uses in field names but Prometheus forbids.
pub fn metric_name_cleanup(name: &str) -> String {
    name.replace('-', "_")
}

/// Joins the non-empty name parts with `_`.
pub fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// Whether `name` is a valid Prometheus metric name, `[a-zA-Z_:][a-zA-Z0-9_:]*`.
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// Whether `name` is a valid Prometheus label name, `[a-zA-Z_][a-zA-Z0-9_]*`.
/// Names starting with `__` are reserved.
pub fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    !name.starts_with("__") && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Builds one descriptor per property. The help text is the property name.
///
/// Pure: two calls with equal inputs return maps that compare equal.
pub fn build_descriptors<S: AsRef<str>>(
    namespace: &str,
    subsystem: &str,
    properties: &[S],
    label_names: &[String],
) -> BTreeMap<String, Arc<MetricDescriptor>> {
    properties
        .iter()
        .map(|property| {
            let property = property.as_ref();
            let descriptor =
                MetricDescriptor::new(namespace, subsystem, property, property, label_names.to_vec());
            (property.to_string(), Arc::new(descriptor))
        })
        .collect()
}

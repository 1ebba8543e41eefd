use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::client::ReplyRow;
use crate::error::{Error, Result};
use crate::metrics::{
    build_fq_name, is_valid_label_name, is_valid_metric_name, metric_name_cleanup, DEFAULT_NAMESPACE,
};

use super::context::Device;

/// How a raw reply value becomes a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionRule {
    /// `"true"` is 1, everything else is 0
    Boolean,
    /// Base-10 signed 64-bit integer
    Integer,
    /// Base-10 floating point
    Float,
}

/// A reply field translated into a gauge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredProperty {
    pub name: String,
    pub rule: CoercionRule,
}

impl MonitoredProperty {
    pub fn new(name: impl Into<String>, rule: CoercionRule) -> Self {
        Self { name: name.into(), rule }
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, CoercionRule::Integer)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, CoercionRule::Float)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, CoercionRule::Boolean)
    }
}

/// Where a label value comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    DeviceName,
    DeviceAddress,
    /// A reply field, read verbatim; missing fields yield `""`
    Field(String),
}

/// One label: its name in the metric output and its value source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    pub source: LabelSource,
}

impl LabelSpec {
    pub fn new(name: impl Into<String>, source: LabelSource) -> Self {
        Self { name: name.into(), source }
    }

    fn extract(&self, device: &Device, row: &ReplyRow) -> String {
        match &self.source {
            LabelSource::DeviceName => device.name.clone(),
            LabelSource::DeviceAddress => device.address.clone(),
            LabelSource::Field(field) => row.get_or_empty(field).to_string(),
        }
    }
}

/// Ordered label schema. Both descriptor label names and per-row label values
/// are derived from it, so they always line up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSchema(pub Vec<LabelSpec>);

impl LabelSchema {
    /// Device name and address followed by the interface fields.
    pub fn interface() -> Self {
        let mut specs = vec![
            LabelSpec::new("name", LabelSource::DeviceName),
            LabelSpec::new("address", LabelSource::DeviceAddress),
            LabelSpec::new("interface", LabelSource::Field("name".to_string())),
        ];
        specs.extend(
            ["type", "disabled", "comment", "running", "slave"]
                .iter()
                .map(|field| LabelSpec::new(*field, LabelSource::Field(field.to_string()))),
        );
        Self(specs)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|spec| spec.name.clone()).collect()
    }

    /// Label values for one row, in schema order.
    pub fn values(&self, device: &Device, row: &ReplyRow) -> Vec<String> {
        self.0.iter().map(|spec| spec.extract(device, row)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LabelSchema {
    fn default() -> Self {
        Self::interface()
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_identity_field() -> String {
    "name".to_string()
}

fn default_snapshot() -> bool {
    true
}

/// Everything that distinguishes one property collector from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Collector name used in logs and scrape metrics
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub subsystem: String,
    /// API command path, e.g. `/interface/monitor-traffic`
    pub command: String,
    /// Name of the argument selecting the target, e.g. `interface`
    #[serde(default)]
    pub target_param: Option<String>,
    /// Target resource, e.g. `uplink`
    #[serde(default)]
    pub target: Option<String>,
    /// Ask for a single reading (`=once=`) instead of a stream
    #[serde(default = "default_snapshot")]
    pub snapshot: bool,
    /// Row field identifying the entity; used as a label, never as a metric
    #[serde(default = "default_identity_field")]
    pub identity_field: String,
    pub properties: Vec<MonitoredProperty>,
    #[serde(default)]
    pub labels: LabelSchema,
}

impl CollectorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Attribute words sent along with the command.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(2);
        if let (Some(param), Some(target)) = (&self.target_param, &self.target) {
            args.push(format!("={}={}", param, target));
        }
        if self.snapshot {
            args.push("=once=".to_string());
        }
        args
    }

    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::invalid_config("collector name is empty"));
        }
        if self.subsystem.is_empty() {
            return Err(Error::invalid_config(format!("{}: subsystem is empty", self.name)));
        }
        if self.command.is_empty() {
            return Err(Error::invalid_config(format!("{}: command is empty", self.name)));
        }
        if self.target_param.is_some() != self.target.is_some() {
            return Err(Error::invalid_config(format!(
                "{}: target_param and target must be set together",
                self.name
            )));
        }
        if self.properties.is_empty() {
            return Err(Error::invalid_config(format!("{}: no monitored properties", self.name)));
        }

        let mut seen = HashSet::new();
        for property in &self.properties {
            if property.name.is_empty() {
                return Err(Error::invalid_config(format!("{}: empty property name", self.name)));
            }
            if property.name == self.identity_field {
                return Err(Error::invalid_config(format!(
                    "{}: identity field '{}' cannot be a metric",
                    self.name, property.name
                )));
            }
            if !seen.insert(property.name.as_str()) {
                return Err(Error::invalid_config(format!(
                    "{}: duplicate property '{}'",
                    self.name, property.name
                )));
            }
            let fq_name =
                build_fq_name(&self.namespace, &self.subsystem, &metric_name_cleanup(&property.name));
            if !is_valid_metric_name(&fq_name) {
                return Err(Error::invalid_config(format!(
                    "{}: property '{}' gives invalid metric name '{}'",
                    self.name, property.name, fq_name
                )));
            }
        }

        if self.labels.is_empty() {
            return Err(Error::invalid_config(format!("{}: label schema is empty", self.name)));
        }
        let mut label_names = HashSet::new();
        for spec in &self.labels.0 {
            if spec.name.is_empty() || !label_names.insert(spec.name.as_str()) {
                return Err(Error::invalid_config(format!(
                    "{}: invalid or duplicate label '{}'",
                    self.name, spec.name
                )));
            }
            if !is_valid_label_name(&spec.name) {
                return Err(Error::invalid_config(format!(
                    "{}: invalid label name '{}'",
                    self.name, spec.name
                )));
            }
        }

        Ok(())
    }
}

use crate::metrics::DEFAULT_NAMESPACE;

use super::types::{CollectorConfig, LabelSchema, MonitoredProperty};

const MONITOR_TRAFFIC: &str = "/interface/monitor-traffic";
const UPLINK: &str = "uplink";

fn monitor_traffic(name: &str, properties: Vec<MonitoredProperty>) -> CollectorConfig {
    CollectorConfig {
        name: name.to_string(),
        namespace: DEFAULT_NAMESPACE.to_string(),
        subsystem: "interface".to_string(),
        command: MONITOR_TRAFFIC.to_string(),
        target_param: Some("interface".to_string()),
        target: Some(UPLINK.to_string()),
        snapshot: true,
        identity_field: "name".to_string(),
        properties,
        labels: LabelSchema::interface(),
    }
}

/// Packet and bit rates of the uplink interface.
pub fn bandwidth() -> CollectorConfig {
    monitor_traffic(
        "bandwidth",
        vec![
            MonitoredProperty::integer("rx-packets-per-second"),
            MonitoredProperty::integer("rx-bits-per-second"),
            MonitoredProperty::integer("tx-bits-per-second"),
            MonitoredProperty::integer("tx-packets-per-second"),
        ],
    )
}

/// Bandwidth plus drop/error rates and the running flag of the uplink.
pub fn interface_traffic() -> CollectorConfig {
    let mut properties = bandwidth().properties;
    properties.extend([
        MonitoredProperty::integer("rx-drops-per-second"),
        MonitoredProperty::integer("rx-errors-per-second"),
        MonitoredProperty::integer("tx-drops-per-second"),
        MonitoredProperty::integer("tx-errors-per-second"),
        MonitoredProperty::boolean("running"),
    ]);
    monitor_traffic("interface_traffic", properties)
}

/// A bandwidth collector watching another interface.
pub fn bandwidth_for(interface: &str) -> CollectorConfig {
    CollectorConfig {
        name: format!("bandwidth_{}", interface),
        target: Some(interface.to_string()),
        ..bandwidth()
    }
}

use super::*;

fn interface_labels() -> Vec<String> {
    ["name", "address", "interface", "type", "disabled", "comment", "running", "slave"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_fq_name_replaces_dashes() {
    let desc = MetricDescriptor::new("mikrotik", "interface", "tx-packets-per-second", "help", vec![]);
    assert_eq!(desc.fq_name(), "mikrotik_interface_tx_packets_per_second");
    assert_eq!(desc.property(), "tx-packets-per-second");
}

#[test]
fn test_build_fq_name_skips_empty_parts() {
    assert_eq!(build_fq_name("", "interface", "running"), "interface_running");
    assert_eq!(build_fq_name("mikrotik", "", "running"), "mikrotik_running");
    assert_eq!(build_fq_name("mikrotik", "interface", "running"), "mikrotik_interface_running");
}

#[test]
fn test_build_descriptors_one_per_property() {
    let props = ["rx-bits-per-second", "tx-bits-per-second"];
    let descriptors = build_descriptors(DEFAULT_NAMESPACE, "interface", &props, &interface_labels());

    assert_eq!(descriptors.len(), 2);
    for prop in props {
        let desc = &descriptors[prop];
        assert_eq!(desc.help(), prop);
        assert_eq!(desc.label_names().len(), 8);
    }
}

#[test]
fn test_build_descriptors_is_idempotent() {
    let props = ["rx-packets-per-second", "rx-bits-per-second", "tx-bits-per-second", "tx-packets-per-second"];
    let first = build_descriptors(DEFAULT_NAMESPACE, "interface", &props, &interface_labels());
    let second = build_descriptors(DEFAULT_NAMESPACE, "interface", &props, &interface_labels());

    assert_eq!(first.keys().collect::<Vec<_>>(), second.keys().collect::<Vec<_>>());
    for (prop, desc) in &first {
        let other = &second[prop];
        assert!(!std::sync::Arc::ptr_eq(desc, other));
        assert_eq!(desc.fq_name(), other.fq_name());
        assert_eq!(desc.label_names(), other.label_names());
        assert_eq!(desc, other);
    }
}

#[test]
fn test_observation_label_lookup() {
    let descriptors = build_descriptors(DEFAULT_NAMESPACE, "interface", &["running"], &interface_labels());
    let values: Vec<String> = ["rtr1", "10.0.0.1", "ether1", "ether", "false", "", "true", "false"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let obs = Observation::new(descriptors["running"].clone(), 1.0, values);

    assert_eq!(obs.fq_name(), "mikrotik_interface_running");
    assert_eq!(obs.label("interface"), Some("ether1"));
    assert_eq!(obs.label("comment"), Some(""));
    assert_eq!(obs.label("missing"), None);
    assert_eq!(obs.label_refs().len(), 8);
}

#[test]
fn test_name_validity() {
    assert!(is_valid_metric_name("mikrotik_interface_rx_bits_per_second"));
    assert!(is_valid_metric_name(":ns:metric"));
    assert!(!is_valid_metric_name("mikrotik_system_cpu.load"));
    assert!(!is_valid_metric_name("9lives"));
    assert!(!is_valid_metric_name(""));

    assert!(is_valid_label_name("board_name"));
    assert!(is_valid_label_name("_hidden"));
    assert!(!is_valid_label_name("board-name"));
    assert!(!is_valid_label_name("__name__"));
    assert!(!is_valid_label_name("a:b"));
    assert!(!is_valid_label_name(""));
}

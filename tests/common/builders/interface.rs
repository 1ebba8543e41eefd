use routeros_metrics::client::{Reply, ReplyRow};

/// Builder for `/interface/monitor-traffic` reply rows
pub struct TestInterfaceBuilder {
    row: ReplyRow,
}

impl TestInterfaceBuilder {
    /// A running, enabled ethernet interface with no traffic fields
    pub fn new(name: &str) -> Self {
        Self {
            row: ReplyRow::from_words([
                format!("={}={}", "name", name),
                "=type=ether".to_string(),
                "=disabled=false".to_string(),
                "=comment=".to_string(),
                "=running=true".to_string(),
                "=slave=false".to_string(),
            ]),
        }
    }

    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.row.insert(key, value);
        self
    }

    /// Sets all four packet and bit rates
    pub fn traffic(self, rx_packets: u64, rx_bits: u64, tx_bits: u64, tx_packets: u64) -> Self {
        self.field("rx-packets-per-second", &rx_packets.to_string())
            .field("rx-bits-per-second", &rx_bits.to_string())
            .field("tx-bits-per-second", &tx_bits.to_string())
            .field("tx-packets-per-second", &tx_packets.to_string())
    }

    pub fn build(self) -> ReplyRow {
        self.row
    }
}

pub fn reply(rows: Vec<ReplyRow>) -> Reply {
    Reply::new(rows)
}

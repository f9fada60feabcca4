//! Parser for `iwlist <iface> scan` output

use std::collections::HashSet;

use tracing::debug;

use crate::core::types::WirelessNetwork;

/// Literal escape `iwlist` prints for hidden networks
const NULL_BYTE_ARTIFACT: &str = "\\x00";

/// Accumulates the fields of one scan cell until the next cell starts
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    mac: String,
    name: Option<String>,
    password_required: bool,
}

impl NetworkBuilder {
    pub fn new(mac: impl Into<String>) -> Self {
        Self {
            mac: mac.into(),
            ..Default::default()
        }
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn password_required(&mut self, required: bool) -> &mut Self {
        self.password_required = required;
        self
    }

    /// Finish the record
    ///
    /// Returns `None` for cells without a usable name: missing, empty or
    /// containing the null-byte artifact.
    pub fn finish(self) -> Option<WirelessNetwork> {
        let name = self.name.filter(|name| is_usable_name(name))?;
        Some(WirelessNetwork {
            mac: self.mac,
            name,
            password_required: self.password_required,
        })
    }
}

fn is_usable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(NULL_BYTE_ARTIFACT)
}

/// Text after the first `:` of a `Key:value` line
fn field_value(line: &str) -> &str {
    line.split_once(':').map_or("", |(_, value)| value)
}

fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Collects finished cells, keeping the first network seen for each name
#[derive(Default)]
struct Collector {
    networks: Vec<WirelessNetwork>,
    names: HashSet<String>,
}

impl Collector {
    fn flush(&mut self, builder: Option<NetworkBuilder>) {
        let Some(network) = builder.and_then(NetworkBuilder::finish) else {
            return;
        };

        if self.names.insert(network.name.clone()) {
            self.networks.push(network);
        } else {
            debug!(name = %network.name, mac = %network.mac, "skipping duplicate network");
        }
    }
}

/// Parse raw scan output into networks in the order they were reported
pub fn parse_scan_output(output: &str) -> Vec<WirelessNetwork> {
    let mut collector = Collector::default();
    let mut current: Option<NetworkBuilder> = None;

    for line in output.split('\n').map(str::trim) {
        if line.starts_with("Cell") {
            collector.flush(current.take());

            let mac = line.rsplit(": ").next().unwrap_or_default();
            debug!(mac, "found network");
            current = Some(NetworkBuilder::new(mac));
        } else if line.starts_with("ESSID") {
            let name = strip_quotes(field_value(line));
            match current.as_mut() {
                Some(builder) => {
                    debug!(mac = %builder.mac, name, "network ESSID");
                    builder.name(name);
                }
                None => debug!(name, "ESSID outside of a cell"),
            }
        } else if line.starts_with("Encryption key") {
            let status = field_value(line);
            match current.as_mut() {
                Some(builder) => {
                    debug!(mac = %builder.mac, status, "network encryption key");
                    builder.password_required(status == "on");
                }
                None => debug!(status, "encryption key outside of a cell"),
            }
        }
    }

    collector.flush(current);
    collector.networks
}

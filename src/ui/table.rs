//! Network table rendering

use crate::core::types::WirelessNetwork;

const INDENT: &str = "  ";
const SEPARATOR: &str = "    ";
const NAME_HEADER: &str = "ESSID";
const PASSWORD_HEADER: &str = "Password?";

/// Render `networks` as a column-aligned table with 1-based indices
///
/// The name column is as wide as the widest name (or the header), measured
/// in characters. Lines are newline-terminated.
pub fn render_network_table(networks: &[WirelessNetwork]) -> String {
    let index_width = networks.len().to_string().chars().count();
    let name_width = networks
        .iter()
        .map(|n| n.name.chars().count())
        .chain(std::iter::once(NAME_HEADER.chars().count()))
        .max()
        .unwrap_or_default();

    let mut table = render_row("", NAME_HEADER, PASSWORD_HEADER, index_width, name_width);
    for (i, network) in networks.iter().enumerate() {
        let password = if network.password_required { "yes" } else { "no" };
        table.push_str(&render_row(
            &(i + 1).to_string(),
            &network.name,
            password,
            index_width,
            name_width,
        ));
    }
    table
}

fn render_row(
    index: &str,
    name: &str,
    password: &str,
    index_width: usize,
    name_width: usize,
) -> String {
    format!(
        "{INDENT}{index:>index_width$}{SEPARATOR}{name:<name_width$}{SEPARATOR}{password}\n"
    )
}

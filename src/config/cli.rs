//! Command-line argument parsing

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[clap(name = "wifi-provisioner", version, author)]
#[clap(about = "Connect a headless Raspberry Pi to a WiFi network over SSH")]
pub struct CliArgs {
    /// Print debug logs (the commands run and their output)
    #[clap(short, long)]
    pub debug: bool,
}

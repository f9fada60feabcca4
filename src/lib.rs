//! WiFi Provisioner
//!
//! Connects a headless Raspberry Pi to a WiFi network by running commands on it
//! over SSH:
//! - locate the device with a single ping
//! - scan for networks with `iwlist` and let the operator pick one
//! - write `wpa_supplicant.conf` and reconfigure the interface

pub mod backend;
pub mod config;
pub mod core;
pub mod ui;

pub use core::{
    error::{CommandError, ProvisionError},
    provisioner::Provisioner,
    types::{CommandOutput, WirelessNetwork},
};

//! Core business logic module

pub mod configurator;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod provisioner;
pub mod remote;
pub mod scanner;
pub mod types;

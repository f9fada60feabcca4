//! Operator-facing console interaction

pub mod progress;
pub mod prompt;
pub mod table;

pub use {
    progress::{finish_step, start_step},
    prompt::{SelectionError, parse_selection, prompt_password, prompt_selection},
    table::render_network_table,
};

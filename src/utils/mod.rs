//! Small helpers shared across clients.

pub mod json_path;

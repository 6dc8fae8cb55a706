//! One module per binary.

pub mod generate;
pub mod show;

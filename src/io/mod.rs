//! I/O helpers for exporting sampled fields.

pub mod csv;

pub use csv::*;

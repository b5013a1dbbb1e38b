//! Repository listing contracts for the Projects app.

pub mod service;
pub mod types;

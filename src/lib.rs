//! Padel racket catalog: loading, filtering, sorting and summarising.
//!
//! The egui front-end lives in the binary; everything here is
//! framework-independent so it can be driven from tests.

pub mod config;
pub mod data;
pub mod state;

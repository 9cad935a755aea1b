//! Command implementations for the Razzberry CLI

pub mod categories;
pub mod config;
pub mod sort;

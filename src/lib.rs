//! jotter - Personal journal in your terminal
//!
//! A command-line journal that keeps every entry in one persisted JSON
//! collection and manages it with append, list, and remove operations.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotterError;

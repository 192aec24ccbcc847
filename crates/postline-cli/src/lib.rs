//! Postline CLI - Command-line interface for the listing synchronizer
//!
//! This crate provides the CLI application that ties together all postline components.

pub mod config;

pub use config::{Command, Config, OutputFormat};

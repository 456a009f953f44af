//! Core library components.
//!
//! Encryption, key management, storage, export formatting, subprocess
//! execution and the remote protocol. Nothing here prints to the terminal.

pub mod config;
pub mod constants;
pub mod crypto;
pub mod domain;
pub mod env;
pub mod keys;
pub mod remote;
pub mod runner;
pub mod store;
pub mod types;
pub mod validation;
pub mod vault;

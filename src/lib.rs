//! Lockbox - encrypted local secret storage.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create store and key
//! │   ├── secrets       # set / get / delete / list
//! │   ├── env           # Shell export lines
//! │   ├── run           # Run with injected secrets
//! │   ├── serve         # Loopback HTTP server
//! │   ├── resolve       # Local or remote secret source
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── crypto        # AES-256-GCM sealing
//!     ├── keys          # Encryption key lifecycle
//!     ├── store/        # Persistence
//!     │   ├── mod       # Store trait
//!     │   ├── sqlite    # On-disk SQLite backend
//!     │   └── memory    # In-memory backend
//!     ├── vault         # Store + key: secret operations
//!     ├── env           # Export line formatting
//!     ├── runner        # Child process execution
//!     └── remote/       # HTTP protocol
//!         ├── server    # axum router and server
//!         └── client    # Blocking client
//! ```
//!
//! # Features
//!
//! - Values sealed with AES-256-GCM, one fresh nonce per write
//! - A single SQLite file, durable on every write
//! - `eval`-safe shell export lines
//! - Read-only HTTP access on loopback for other local processes

pub mod cli;
pub mod core;
pub mod error;

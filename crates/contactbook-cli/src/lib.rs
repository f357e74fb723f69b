//! Contact book text interface
//!
//! The dialog is an explicit state machine:
//! 1. **Screens**: [`dialog::Screen`] plus a transition table
//! 2. **Session**: [`session::Session`] steps the machine one input line at a time
//! 3. **Console**: [`console::run`] connects a session to stdin/stdout
//!
//! # Quick Start
//!
//! ```rust
//! use contactbook_cli::session::Session;
//! use contactbook_core::ContactBook;
//! use contactbook_store::MemoryStore;
//!
//! let mut session = Session::new(ContactBook::new(MemoryStore::new()));
//! let out = session.step("1").unwrap();
//! assert!(out.contains(&"No results found.".to_string()));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod console;
pub mod dialog;
pub mod logging;
pub mod render;
pub mod session;

pub use config::{AppConfig, ConfigError, LogConfig, StoreConfig};
pub use session::{Session, SessionError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Testimony Hub Core - Domain logic for the hub.
//!
//! This crate provides everything the hub does independent of how it is
//! served:
//! - `web` - Server-rendered site built on these types
//! - `cli` - Command-line tools operating on the same store
//!
//! # Architecture
//!
//! The core crate performs no network I/O. Persistence goes through the
//! [`store::KeyValueStore`] trait, so the same logic runs against
//! [`store::MemoryStore`] in tests and a file-backed store in production.
//!
//! # Modules
//!
//! - [`types`] - IDs, roles, testimonies, links
//! - [`store`] - Key-value store adapter with best-effort persistence
//! - [`session`] - Current role and passcode checks
//! - [`moderation`] - Pending/published testimony workflow
//! - [`links`] - Link list
//! - [`hero`] - Hero message
//! - [`qr`] - QR code image URLs
//! - [`hub`] - Application state tying the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod hero;
pub mod hub;
pub mod links;
pub mod moderation;
pub mod qr;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;

pub use error::{AuthError, HubError, ModerationError, StoreError, ValidationError};
pub use hub::Hub;
pub use session::{Grant, Passcodes};
pub use store::{KeyValueStore, MemoryStore};
pub use types::*;

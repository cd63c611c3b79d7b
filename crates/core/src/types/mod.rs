//! Core types for Testimony Hub.
//!
//! This module provides type-safe wrappers for the hub's domain concepts.

pub mod id;
pub mod link;
pub mod link_url;
pub mod role;
pub mod testimony;

pub use id::*;
pub use link::Link;
pub use link_url::{LinkUrl, LinkUrlError};
pub use role::Role;
pub use testimony::Testimony;

//! Networking modules for the vessel contents resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP request, `types` defines the wire schema of a
//! content item, and `error` classifies request failures.

pub mod api;
pub mod error;
pub mod types;

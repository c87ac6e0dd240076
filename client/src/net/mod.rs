//! Networking for the correction panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single HTTP call; wire types and normalization live in
//! the shared `correction` crate.

pub mod api;

//! Shared domain types for localchat.
//!
//! This crate contains the core domain types used across the localchat
//! service: conversation turns, generation parameters, wire request/response
//! shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, toml, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod params;

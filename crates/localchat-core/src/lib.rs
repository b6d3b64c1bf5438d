//! Core chat logic for localchat.
//!
//! This crate owns the three pieces of original logic in the system -- the
//! session store, the prompt builder, and the parameter normalizer -- plus
//! the [`service::ChatService`] that orchestrates them. It defines the
//! [`engine::InferenceEngine`] port that the infrastructure layer implements;
//! it never depends on `localchat-infra` or any IO crate.

pub mod engine;
pub mod params;
pub mod prompt;
pub mod service;
pub mod session;

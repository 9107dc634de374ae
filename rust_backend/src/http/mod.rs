//! HTTP server module for the resflow backend.
//!
//! This module provides an axum-based HTTP server that exposes the flow
//! engine as a REST API. It reuses the existing service layer, plan parsing,
//! and DTOs from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Parsing Layer (existing parsing/)                        │
//! │  - Plan snapshot deserialization                          │
//! │  - Catalog validation, checksum                           │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (existing services/)                       │
//! │  - Flow reconciliation                                    │
//! │  - Utilization computation                                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is stateless between invocations, so the router carries no
//! shared application state: every request ships its own plan snapshot.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

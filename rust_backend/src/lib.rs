//! # Resflow Rust Backend
//!
//! Resource flow reconciliation engine for the team-capacity planning tool.
//!
//! This crate receives an immutable snapshot of the planning state (teams,
//! projects, time points and the per-cell headcount allocation matrix) and
//! derives the analytical datasets rendered by the React frontend. The core
//! is the flow engine: a pure function that explains how capacity migrates
//! from one time point to the next as direct supply, inheritance,
//! cross-project transfer, or heuristic spillover. The surrounding
//! configuration and editing layers (CRUD store, drawers, import/export,
//! persistence) live outside this crate and only exchange snapshots with it.
//!
//! ## Features
//!
//! - **Plan Parsing**: Parse plan snapshots from JSON format with catalog
//!   validation and checksum bookkeeping
//! - **Flow Reconciliation**: Derive the bounded three-column flow graph
//!   (nodes plus merged links) from the allocation matrix
//! - **Utilization**: Per-team occupied/prerelease/free summaries across all
//!   time points
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Id newtypes, the `Plan` snapshot aggregate, and DTO re-exports
//! - [`models`]: Catalog entries, period labels, and the allocation matrix
//! - [`services`]: The flow engine and derived datasets
//! - [`routes`]: Route-specific data types
//! - [`parsing`]: Plan snapshot deserialization and validation
//! - [`http`]: Axum-based HTTP server and request handlers
//!
pub mod api;

pub mod models;

pub mod parsing;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

//! Triangulation service for trifan
//!
//! This crate wires the two capability ports, a point-set source and a
//! triangulation engine, into a request handler, provides the blocking
//! HTTP client for the upstream point-set manager, and renders every
//! outcome into the transport-agnostic replies an HTTP adapter serves.

pub mod boundary;
pub mod client;
pub mod service;

pub use boundary::*;
pub use client::*;
pub use service::*;

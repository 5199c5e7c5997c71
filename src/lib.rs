//! Message Board - message API with deployment naming utilities
//!
//! This crate implements the logical core of a message board demo: a small
//! HTTP message API over a pluggable store, the page-side handlers that
//! call it, and the deterministic resource-naming scheme deployments use
//! to keep resource names globally distinct.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

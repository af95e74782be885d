//! Alertbridge Core
//!
//! Core types and transformations for the log-to-alert bridge.
//!
//! This crate contains:
//! - Domain types: Log records as shipped by the log pipeline, and the alerts
//!   posted to Alertmanager
//! - Decoding: Turning a raw request body into an ordered batch of records
//! - Translation: Mapping one record onto the fixed alert schema
//!
//! Nothing here performs I/O. Delivery lives in `alertbridge-client`, HTTP
//! wiring in `alertbridge-server`.

pub mod decode;
pub mod domain;
pub mod translate;

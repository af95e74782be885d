//! Service Module
//!
//! Business logic layer for the bridge.
//! Services drive records from decoding through translation to delivery.

pub mod bridge;
pub mod forwarder;

// Re-export for convenience
pub use bridge as bridge_service;
pub use forwarder::AlertForwarder;

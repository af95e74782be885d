//! Core domain types
//!
//! Records flow in from the log shipper, alerts flow out to Alertmanager.
//! Both are created and discarded within a single request.

pub mod alert;
pub mod record;

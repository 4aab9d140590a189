//! Application Layer
//!
//! Ports describing the exchange, and the service that drives it.

pub mod ports;
pub mod services;

//! Application Ports
//!
//! Driven ports: how the application reaches external systems.

mod exchange_port;

pub use exchange_port::{ExchangeError, ExchangePort, ServerTime};

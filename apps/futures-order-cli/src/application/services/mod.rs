//! Application Services
//!
//! Services coordinate domain types and exchange adapters.

mod order_service;

pub use order_service::OrderService;

//! Domain Layer
//!
//! Pure order-entry types and validation rules. No network, file or clock
//! access happens in this layer.
//!
//! # Bounded Contexts
//!
//! - [`order_entry`]: Input validation, order payloads and normalized results

pub mod order_entry;

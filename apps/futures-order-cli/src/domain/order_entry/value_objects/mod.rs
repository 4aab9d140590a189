//! Order Entry Value Objects
//!
//! Immutable types for order entry.

mod order_side;
mod order_type;
mod symbol;
mod time_in_force;

pub use order_side::OrderSide;
pub use order_type::OrderType;
pub use symbol::Symbol;
pub use time_in_force::TimeInForce;

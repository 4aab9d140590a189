//! Order Entry Bounded Context
//!
//! Turns raw operator input into a validated [`OrderRequest`], derives the
//! exchange payload from it, and defines the normalized [`OrderResult`].
//!
//! Nothing here performs I/O.

pub mod errors;
pub mod payload;
pub mod request;
pub mod result;
pub mod validation;
pub mod value_objects;

pub use errors::ValidationError;
pub use payload::OrderPayload;
pub use request::OrderRequest;
pub use result::OrderResult;
pub use validation::{
    validate_order_inputs, validate_order_type, validate_price, validate_quantity, validate_side,
    validate_symbol,
};
pub use value_objects::{OrderSide, OrderType, Symbol, TimeInForce};

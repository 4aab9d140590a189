//! Infrastructure Layer
//!
//! Driven adapters implementing the application ports:
//!
//! - `exchange/`: Exchange API adapters (Binance USD-M futures)

pub mod exchange;

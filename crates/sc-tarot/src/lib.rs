//! Terminal tarot reader.
//!
//! Deals Major Arcana cards without replacement, flips each one upright or
//! reversed, and prints them as ASCII-art cards with their meanings.

pub mod art;
pub mod config;
pub mod deck;
pub mod error;
pub mod reading;
pub mod session;

pub use config::TarotConfig;
pub use deck::{Card, MAJOR_ARCANA, Orientation};
pub use error::{TarotError, TarotResult};
pub use reading::{DrawnCard, Reading, Spread};
pub use session::{FAREWELL, TarotSession};

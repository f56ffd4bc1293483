//! Domain layer - Core listing types with no external dependencies.

pub mod listing;

pub use listing::{APPLICATION_NAME, InvalidSymbol, Symbol, WatchState, listing_message};

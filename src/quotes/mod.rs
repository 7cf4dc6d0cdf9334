pub mod engine;
pub mod state;
pub mod store;
pub mod text;

pub use engine::QuotesEngine;
pub use store::{Quote, QuoteStore};

mod client;
pub mod domain;
mod search_url;

pub use client::*;
pub use domain::*;
pub use search_url::*;

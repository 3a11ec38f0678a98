pub mod cache;
pub mod dedup;
pub mod error;
pub mod fetcher;
pub mod post;
pub mod registry;
pub mod relay;
pub mod scheduler;
mod util;

#[cfg(test)]
pub(crate) mod mock;

pub use error::*;
pub use post::{Account, CastHash, Post, Snapshot};

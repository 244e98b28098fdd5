mod common;
mod game;
mod record;
mod summary;

pub use common::*;
pub use game::*;
pub use record::*;
pub use summary::*;

#[cfg(test)]
pub(crate) mod fixtures;

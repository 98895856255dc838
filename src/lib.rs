//! Hashed-key skip list used as the pattern dictionary of a Wu-Manber style
//! multi-pattern matcher.

pub use crate::config::*;
pub use crate::error::*;
pub use crate::hash::*;
pub use crate::level::*;
pub use crate::skiplist::*;

mod config;
mod error;
mod hash;
mod level;
mod node;
mod skiplist;

pub mod error;
mod hasher;
mod mode;
mod path;

pub use crate::hasher::{FileHasher, HashCache, VERSION_PARAM};
pub use crate::mode::Mode;

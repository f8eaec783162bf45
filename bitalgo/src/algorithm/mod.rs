mod copy;
mod fill;
mod find;
mod pairwise;
mod shift;
mod transform;
mod writer;

pub use copy::{copy, try_copy};
pub use fill::fill;
pub use find::{Ones, find, ones};
pub use pairwise::{compare, equal, mismatch};
pub use shift::{shift_left, shift_right};
pub use transform::{transform, transform_unary};

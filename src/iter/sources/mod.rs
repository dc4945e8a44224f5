//! Iterators over host data.
//!
//! - [`SliceIter`]: Borrowed linear buffers (slices, arrays, vectors)
//! - [`IntoIter`]: Owned linear buffers
//! - [`Chars`]: Text, one `char` at a time
//! - [`SetIter`]: Sets, single-ended
//! - [`MapIter`]: Key/value maps as `(key, value)` pairs, single-ended
//! - [`OptionIter`]: Zero or one element
//! - [`FromStd`]: Any `std` iterator

mod chars;
mod from_std;
mod map;
mod option;
mod set;
mod slice;
mod vec;

pub use chars::Chars;
pub use from_std::{FromStd, from_std};
pub use map::MapIter;
pub use option::OptionIter;
pub use set::SetIter;
pub use slice::SliceIter;
pub use vec::IntoIter;

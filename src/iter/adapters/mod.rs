//! Lazy adapters.
//!
//! Every adapter owns its upstream iterator(s) plus whatever cursor or
//! lookahead state it needs, and does work only when pulled. Cloning an
//! adapter clones the upstream and the state, so the copy continues
//! independently from the same position.

mod chain;
mod cloned;
mod cycle;
mod enumerate;
mod filter;
mod filter_map;
mod flatten;
mod fuse;
mod intersperse;
mod map;
mod map_while;
mod rev;
mod skip;
mod skip_while;
mod step_by;
mod take;
mod take_while;
mod zip;

pub use chain::Chain;
pub use cloned::Cloned;
pub use cycle::Cycle;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use filter_map::FilterMap;
pub use flatten::{FlatMap, Flatten};
pub use fuse::Fuse;
pub use intersperse::Intersperse;
pub use map::Map;
pub use map_while::MapWhile;
pub use rev::Rev;
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use step_by::StepBy;
pub use take::Take;
pub use take_while::TakeWhile;
pub use zip::Zip;

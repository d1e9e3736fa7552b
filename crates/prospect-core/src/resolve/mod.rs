// Attribute resolvers.
//
// Each resolver turns draws from the batch's `RandomStream` plus the relevant
// configuration into one attribute. They hold no state; given the same draws
// and inputs they return the same value. None of them fail: out-of-range or
// malformed inputs are clamped or replaced by a fallback.

pub mod age;
pub mod hand;
pub mod jersey;
pub mod name;
pub mod origin;
pub mod position;
pub mod size;

pub use age::{resolve_age, rookie_age};
pub use hand::random_hand;
pub use jersey::{parse_manual_number, resolve_number};
pub use name::{make_name, to_title_case};
pub use origin::resolve_origin;
pub use position::resolve_position;
pub use size::resolve_size;

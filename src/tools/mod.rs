//! Numeric helpers shared by every domain: saturating/periodic bounds and the
//! mixed-radix action codec.

pub mod bounds;
pub mod codec;
pub mod error;

pub use bounds::{bound, wrap, wrap_angle};
pub use codec::{
    cardinality, index_to_multi_index, multi_index_to_index, signed_index_to_multi_index,
    MixedRadix,
};
pub use error::CodecError;

//! Presentation views over decoded call results.
//!
//! Formatting rules shared by every view: big integers become decimal
//! strings, byte arrays become lowercase hex without a prefix, addresses
//! become checksummed `0x` hex, booleans and plain integers pass through.

pub mod fee_quoter;
pub mod value;

use alloy::primitives::Address;

pub use fee_quoter::*;
pub use value::{named_tuple_view, value_view};

/// Conversion from a decoded native struct into its display shape.
///
/// Implementations are pure; converting the same value twice yields equal
/// views.
pub trait ToView {
    type View;

    fn to_view(&self) -> Self::View;
}

pub(crate) fn address_hex(address: &Address) -> String {
    address.to_checksum(None)
}

pub(crate) fn bytes_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

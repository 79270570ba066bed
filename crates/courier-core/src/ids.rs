//! Strongly typed order identifier.
//!
//! `OrderId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! queue element without ceremony.  The inner integer is `pub` for display
//! and test construction, but callers should treat IDs as opaque.

use std::fmt;

/// Unique identifier of an order, allocated sequentially by the dispatch
/// system starting from [`OrderId::FIRST`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderId(pub u32);

impl OrderId {
    /// The first ID handed out by a fresh order book.
    pub const FIRST: OrderId = OrderId(1001);

    /// The ID that follows this one in allocation order.
    #[inline]
    pub fn next(self) -> OrderId {
        OrderId(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrderId({})", self.0)
    }
}

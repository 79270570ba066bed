//! The order record shared between the graph planner and the dispatch system.

use crate::OrderId;

/// A delivery order.
///
/// `pickup` and `dropoff` are location names in the route map; the dispatch
/// system validates both exist before an order is accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id: OrderId,
    /// Location the courier collects from (e.g. a restaurant).
    pub pickup: String,
    /// Location the order is delivered to.
    pub dropoff: String,
    /// Order price in the local currency.
    pub price: f64,
}

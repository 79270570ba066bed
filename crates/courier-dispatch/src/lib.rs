//! `courier-dispatch` — order lifecycle and the dispatch facade.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`orders`] | `OrderBook` (FIFO intake, LIFO completion, index) |
//! | [`system`] | `DispatchSystem` facade, `SystemStatus`           |
//! | [`error`]  | `DispatchError`, `DispatchResult<T>`              |
//!
//! The dispatch layer consumes `courier-graph` only through shortest-path
//! planning and path-distance aggregation; it never reaches into the
//! adjacency structure.

pub mod error;
pub mod orders;
pub mod system;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DispatchError, DispatchResult};
pub use orders::OrderBook;
pub use system::{DispatchSystem, SystemStatus};

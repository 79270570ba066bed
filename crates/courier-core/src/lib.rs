//! `courier-core` — foundational types for the courier dispatch workspace.
//!
//! This crate is a dependency of every other `courier-*` crate.  It
//! intentionally has no `courier-*` dependencies and no required external
//! ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                |
//! |--------------|-----------------------------------------|
//! | [`ids`]      | `OrderId`                               |
//! | [`order`]    | `Order` record                          |
//! | [`distance`] | `Distance` unit type                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod distance;
pub mod ids;
pub mod order;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::Distance;
pub use ids::OrderId;
pub use order::Order;

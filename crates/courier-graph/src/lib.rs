//! `courier-graph` — route map, shortest-path routing, and delivery planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`store`]   | `RouteMap` (adjacency store + path-distance aggregation)|
//! | [`router`]  | `Router` trait, `DijkstraRouter`                        |
//! | [`planner`] | `plan_delivery`, `DeliveryPlan`, `Leg`                  |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod planner;
pub mod router;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GraphError, GraphResult};
pub use planner::{plan_delivery, DeliveryPlan, Leg};
pub use router::{DijkstraRouter, Router};
pub use store::RouteMap;

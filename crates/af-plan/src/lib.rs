//! `af-plan`: choose which routes the ants take.
//!
//! # Pipeline
//!
//! ```text
//! ColonyGraph ──▶ RouteFinder ──▶ candidate routes ──▶ selector ──▶ RouteGroup
//!                 (by graph size)                      (min turn_cost)
//! ```
//!
//! Small graphs enumerate every simple route and search every pairwise
//! disjoint subset.  Large graphs (node count above
//! [`SolverConfig::large_graph_threshold`](af_core::SolverConfig)) extract up
//! to `K` disjoint shortest routes and use all of them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`cost`]    | `turn_cost`, `distribute`                          |
//! | [`group`]   | `RouteGroup`                                       |
//! | [`select`]  | `select_best_group`                                |
//! | [`planner`] | `Planner`, `Plan`, `Strategy`                      |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                       |

pub mod cost;
pub mod error;
pub mod group;
pub mod planner;
pub mod select;


pub use cost::{distribute, turn_cost};
pub use error::{PlanError, PlanResult};
pub use group::RouteGroup;
pub use planner::{Plan, Planner, Strategy};
pub use select::select_best_group;

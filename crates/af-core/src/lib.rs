//! `af-core`: foundational types shared by every `af-*` crate.
//!
//! Intentionally has no `af-*` dependencies and only `thiserror` as a required
//! external one (plus optional `serde` / `serde_json`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `NodeId`, `AntId`                                 |
//! | [`coord`]    | `Coord`: integer 2-D position of a node          |
//! | [`step`]     | `Step`: synchronous simulation step counter      |
//! | [`config`]   | `SolverConfig`                                    |
//! | [`error`]    | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types, JSON config loader.|

pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SolverConfig;
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{AntId, NodeId};
pub use step::Step;

//! `af-graph`: colony graph, routes, and route enumeration.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`graph`]  | `ColonyGraph` (CSR adjacency), `ColonyGraphBuilder`, `NodeRole`|
//! | [`colony`] | `Colony`: graph + ant count + original input lines           |
//! | [`route`]  | `Route`: a simple start-to-end path                           |
//! | [`finder`] | `RouteFinder` trait, `ExhaustiveFinder`, `DisjointShortestFinder` |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                                 |

pub mod colony;
pub mod error;
pub mod finder;
pub mod graph;
pub mod route;


pub use colony::Colony;
pub use error::{GraphError, GraphResult};
pub use finder::{shortest_route, DisjointShortestFinder, ExhaustiveFinder, RouteFinder};
pub use graph::{ColonyGraph, ColonyGraphBuilder, NodeRole};
pub use route::Route;

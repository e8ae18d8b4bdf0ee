//! `af-sim`: moves the ants across a chosen route group, one step at a time.
//!
//! # Step model
//!
//! ```text
//! while ants are waiting or moving:
//!   ① Advance  every moving ant, in launch order, steps to the next node of
//!              its route if that node is the end or unoccupied.  The node
//!              it leaves stays occupied until the step ends.
//!   ② Launch   waiting ants, in queue order, enter the first node of their
//!              route while it is free (or is the end).  The first ant that
//!              cannot launch stops the launch phase.
//!   ③ Record   advances then launches become one `StepRecord`.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use af_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(&colony.graph, &plan.group, colony.ant_count).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod ant;
pub mod assign;
pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod sim;

#[cfg(test)]
mod tests;

pub use ant::Ant;
pub use assign::assign_ants;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{MoveObserver, NoopObserver};
pub use record::{Move, StepRecord};
pub use sim::{SimSummary, Simulator};

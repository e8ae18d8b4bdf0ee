//! Ant-to-route assignment.

use af_core::AntId;
use af_plan::{distribute, RouteGroup};

use crate::Ant;

/// Spread `ant_count` ants over the routes of `group`.
///
/// Shares come from a round-robin deal over the length-sorted routes, so a
/// shorter route never receives fewer ants than a longer one.  Ids are then
/// handed out route by route: all of route 0 first, starting at `L1`.  The
/// returned order is the launch queue order.
pub fn assign_ants(group: &RouteGroup, ant_count: usize) -> Vec<Ant> {
    let shares = distribute(ant_count, group.len());
    let mut ants = Vec::with_capacity(ant_count);
    for (route, &share) in shares.iter().enumerate() {
        for _ in 0..share {
            let id = AntId(ants.len() as u32 + 1);
            ants.push(Ant::new(id, route));
        }
    }
    ants
}

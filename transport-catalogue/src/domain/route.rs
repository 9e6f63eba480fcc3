//! Bus routes.

use serde::{Deserialize, Serialize};

use super::StopId;

/// A named bus route over an ordered, non-empty list of stops.
///
/// A circular route lists its terminus at both ends and is travelled in one
/// direction only. A linear route is travelled out along the list and then
/// back again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub circular: bool,
    pub stops: Vec<StopId>,
}

impl Route {
    /// Number of stops a rider passes through on one full trip.
    ///
    /// A linear route visits every stop twice except the far terminus.
    pub fn stops_on_route(&self) -> usize {
        if self.circular {
            self.stops.len()
        } else {
            (self.stops.len() * 2).saturating_sub(1)
        }
    }

    /// Consecutive stop pairs in list order.
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

//! Itinerary steps produced by the router.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteId, StopId};

/// One leg of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItineraryStep {
    /// Wait at a stop for the next bus.
    Wait { stop: StopId, time: f64 },

    /// Ride a route for `span_count` stops.
    Ride {
        route: RouteId,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryStep {
    /// Duration of the step in minutes.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryStep::Wait { time, .. } | ItineraryStep::Ride { time, .. } => *time,
        }
    }
}

/// A fastest itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    pub steps: Vec<ItineraryStep>,

    /// Total duration in minutes.
    pub total_time: f64,
}

impl Itinerary {
    /// The itinerary from a stop to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_time() {
        let wait = ItineraryStep::Wait {
            stop: StopId(0),
            time: 6.0,
        };
        let ride = ItineraryStep::Ride {
            route: RouteId(1),
            span_count: 3,
            time: 4.5,
        };
        assert_eq!(wait.time(), 6.0);
        assert_eq!(ride.time(), 4.5);

        let itinerary = Itinerary {
            steps: vec![wait, ride],
            total_time: 10.5,
        };
        assert!(!itinerary.is_empty());
        assert!(Itinerary::empty().is_empty());
    }
}

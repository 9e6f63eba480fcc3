//! Routing configuration.

use serde::{Deserialize, Serialize};

/// Minutes needed to cover one meter at 1 km/h.
const MINUTES_PER_METER_AT_1_KPH: f64 = 60.0 / 1000.0;

/// Parameters that turn road distances into travel times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before boarding any bus.
    pub bus_wait_time: u32,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings with the given wait time and speed.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Set the bus speed in km/h.
    pub fn with_velocity(mut self, kph: f64) -> Self {
        self.bus_velocity = kph;
        self
    }

    /// Wait time in minutes, as an edge weight.
    pub fn wait_time(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride one meter at the configured speed.
    pub fn minutes_per_meter(&self) -> f64 {
        MINUTES_PER_METER_AT_1_KPH / self.bus_velocity
    }

    /// Minutes needed to ride `meters` at the configured speed.
    pub fn travel_time(&self, meters: u64) -> f64 {
        meters as f64 * self.minutes_per_meter()
    }

    /// Returns true if the speed is a usable positive number.
    pub fn is_valid(&self) -> bool {
        self.bus_velocity.is_finite() && self.bus_velocity > 0.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_settings() {
        let settings = RoutingSettings::default();

        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.is_valid());
    }

    #[test]
    fn travel_time_conversion() {
        let settings = RoutingSettings::new(2, 60.0);

        // 60 km/h is one kilometer per minute.
        assert_relative_eq!(settings.travel_time(1000), 1.0);
        assert_relative_eq!(settings.travel_time(2500), 2.5);
        assert_eq!(settings.wait_time(), 2.0);
    }

    #[test]
    fn with_velocity_replaces_speed() {
        let settings = RoutingSettings::new(2, 60.0).with_velocity(30.0);

        assert_eq!(settings, RoutingSettings::new(2, 30.0));
        assert_relative_eq!(settings.minutes_per_meter(), 0.002);
    }

    #[test]
    fn invalid_velocity() {
        assert!(!RoutingSettings::new(6, 0.0).is_valid());
        assert!(!RoutingSettings::new(6, -5.0).is_valid());
        assert!(!RoutingSettings::new(6, f64::NAN).is_valid());
    }

    #[test]
    fn deserialize_from_json() {
        let settings: RoutingSettings =
            serde_json::from_str(r#"{"bus_wait_time": 6, "bus_velocity": 40}"#).unwrap();
        assert_eq!(settings, RoutingSettings::new(6, 40.0));
    }
}

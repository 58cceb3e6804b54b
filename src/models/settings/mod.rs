// Settings module
// Time grid quantisation used by the creation engine

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::utils::date::{minutes, MINUTES_PER_DAY};

/// Grid configuration for pointer-driven creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Length of one grid slot
    pub slot_minutes: u32,
    /// Length of an event created by a plain click
    pub default_duration_minutes: u32,
    /// Added to the later bound of a dragged range
    pub drag_extension_minutes: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            default_duration_minutes: 30,
            drag_extension_minutes: 30,
        }
    }
}

impl GridSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.slot_minutes == 0 {
            return Err("Grid slot length must be greater than zero".to_string());
        }

        if MINUTES_PER_DAY % self.slot_minutes != 0 {
            return Err(format!(
                "Grid slot length of {} minutes does not divide a day evenly",
                self.slot_minutes
            ));
        }

        if self.default_duration_minutes == 0 || self.drag_extension_minutes == 0 {
            return Err("Creation durations must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Number of grid slots in one day
    pub fn total_slots(&self) -> u32 {
        if self.slot_minutes == 0 {
            return 0;
        }
        MINUTES_PER_DAY / self.slot_minutes
    }

    pub fn slot_duration(&self) -> Duration {
        minutes(self.slot_minutes)
    }

    pub fn default_duration(&self) -> Duration {
        minutes(self.default_duration_minutes)
    }

    pub fn drag_extension(&self) -> Duration {
        minutes(self.drag_extension_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GridSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.total_slots(), 48);
        assert_eq!(settings.slot_duration(), Duration::minutes(30));
    }

    #[test]
    fn test_uneven_slot_rejected() {
        let settings = GridSettings {
            slot_minutes: 25,
            ..GridSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("25 minutes"));
    }

    #[test]
    fn test_zero_slot_rejected() {
        let settings = GridSettings {
            slot_minutes: 0,
            ..GridSettings::default()
        };
        assert!(settings.validate().is_err());
        assert_eq!(settings.total_slots(), 0);
    }
}

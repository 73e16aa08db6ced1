/*
 * Copyright (c) 2003-2003-2023. Trevor Campbell and others.
 *
 * This file is part of Kelpie Flight Planner.
 *
 * Kelpie Flight Planner is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Flight Planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Flight Planner; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

use std::str::FromStr;

use log::warn;
use preferences::{AppInfo, Preferences, PreferencesMap};
use serde::{Deserialize, Serialize};

use crate::model::procedure::ProcedureTypes;
use crate::util::units::{AltitudeUnit, DistanceUnit, Units};

pub const PREFS_PATH: &str = "route-tracker";
pub const APP_INFO: AppInfo = AppInfo {
    name: "kelpie-flight-planner",
    author: "shartrec.com",
};

// Preference constants
pub const UNITS: &str = "Units";
pub const ALTITUDE_UNITS: &str = "Units.altitude";
pub const TOD_RULE: &str = "Route.todRule";
pub const SHOW_SID: &str = "Map.showSid";
pub const SHOW_STAR: &str = "Map.showStar";
pub const SHOW_TRANSITION: &str = "Map.showTransition";
pub const SHOW_APPROACH: &str = "Map.showApproach";
pub const SHOW_MISSED: &str = "Map.showMissed";

/// Distance in user units lost per 1000 user altitude units, 3nm per 1000ft.
pub const DEFAULT_TOD_RULE: f64 = 3.0;

/// String keyed preference store. The manager is a plain value: whoever
/// owns it decides when it is loaded and saved.
pub struct PreferenceManager {
    preferences: PreferencesMap,
    path: String,
}

impl PreferenceManager {
    pub fn new(path: &str) -> Self {
        Self {
            preferences: PreferencesMap::new(),
            path: path.to_string(),
        }
    }

    pub fn load(path: &str) -> Self {
        let preferences = match PreferencesMap::<String>::load(&APP_INFO, path) {
            Ok(map) => map,
            Err(e) => {
                warn!("Error opening preferences {}", e);
                PreferencesMap::new()
            }
        };
        Self {
            preferences,
            path: path.to_string(),
        }
    }

    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.preferences.get(key) {
            Some(s) => match s.parse::<T>() {
                Ok(i) => Some(i),
                Err(_e) => None,
            },
            None => None,
        }
    }

    pub fn put<T: ToString>(&mut self, key: &str, value: T) {
        self.preferences.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        let _e = self.preferences.remove(key);
    }

    pub fn clear(&mut self) {
        self.preferences.clear();
    }

    pub fn store(&self) {
        if let Err(e) = self.preferences.save(&APP_INFO, &self.path) {
            warn!("Error saving preferences {}", e);
        }
    }
}

/// Everything the tracker needs from the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Top of descent rule: distance in `units.distance` per 1000 `units.altitude`.
    pub tod_rule: f64,
    pub units: Units,
    /// Procedure types shown on the map. Hidden missed approach legs are
    /// never tracked.
    pub shown_procedures: ProcedureTypes,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tod_rule: DEFAULT_TOD_RULE,
            units: Units::default(),
            shown_procedures: ProcedureTypes::ALL,
        }
    }
}

impl TrackerConfig {
    pub fn from_preferences(pref: &PreferenceManager) -> Self {
        let mut shown_procedures = ProcedureTypes::empty();
        for (key, flag) in [
            (SHOW_SID, ProcedureTypes::SID),
            (SHOW_STAR, ProcedureTypes::STAR),
            (SHOW_TRANSITION, ProcedureTypes::TRANSITION),
            (SHOW_APPROACH, ProcedureTypes::APPROACH),
            (SHOW_MISSED, ProcedureTypes::MISSED),
        ] {
            if pref.get::<bool>(key).unwrap_or(true) {
                shown_procedures |= flag;
            }
        }

        let tod_rule = match pref.get::<f64>(TOD_RULE) {
            Some(rule) if rule > 0.0 => rule,
            Some(rule) => {
                warn!("Ignoring top of descent rule {}", rule);
                DEFAULT_TOD_RULE
            }
            None => DEFAULT_TOD_RULE,
        };

        Self {
            tod_rule,
            units: Units {
                distance: pref.get::<DistanceUnit>(UNITS).unwrap_or(DistanceUnit::Nm),
                altitude: pref.get::<AltitudeUnit>(ALTITUDE_UNITS).unwrap_or(AltitudeUnit::Feet),
            },
            shown_procedures,
        }
    }

    pub fn is_missed_shown(&self) -> bool {
        self.shown_procedures.contains(ProcedureTypes::MISSED)
    }

    /// Nautical miles flown per foot of descent.
    pub fn descent_nm_per_foot(&self) -> f64 {
        let distance_nm = self.units.distance.to_nm(self.tod_rule);
        let altitude_ft = self.units.altitude.to_feet(1000.0);
        distance_nm / altitude_ft
    }
}

#[cfg(test)]
mod tests {
    use crate::model::procedure::ProcedureTypes;
    use crate::util::units::{AltitudeUnit, DistanceUnit};

    use super::{PreferenceManager, TrackerConfig, SHOW_MISSED, TOD_RULE, UNITS, ALTITUDE_UNITS};

    #[test]
    fn test_put_get() {
        let mut manager = PreferenceManager::new("kelpie-unit-test");

        manager.put("Test_KEY 1", "First");
        manager.put("Test_KEY 2", 1 as i32);
        manager.put("Test_KEY 3", 24.66 as f64);

        assert_eq!(
            manager.get::<String>("Test_KEY 1"),
            Some("First".to_string())
        );
        assert_eq!(manager.get::<i32>("Test_KEY 2"), Some(1));
        assert_eq!(manager.get::<f64>("Test_KEY 3"), Some(24.66));
        assert_eq!(manager.get::<f64>("Test_KEY 1"), None);

        manager.remove("Test_KEY 2");
        assert_eq!(manager.get::<i32>("Test_KEY 2"), None);
        manager.clear();
        assert_eq!(manager.get::<String>("Test_KEY 1"), None);
    }

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::from_preferences(&PreferenceManager::new("kelpie-unit-test"));
        assert_eq!(config, TrackerConfig::default());
        assert!(config.is_missed_shown());
        assert!((config.descent_nm_per_foot() - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_config_from_preferences() {
        let mut manager = PreferenceManager::new("kelpie-unit-test");
        manager.put(TOD_RULE, 1.0);
        manager.put(UNITS, "Km");
        manager.put(ALTITUDE_UNITS, "M");
        manager.put(SHOW_MISSED, false);

        let config = TrackerConfig::from_preferences(&manager);
        assert_eq!(config.units.distance, DistanceUnit::Km);
        assert_eq!(config.units.altitude, AltitudeUnit::Meter);
        assert!(!config.is_missed_shown());
        assert!(config.shown_procedures.contains(ProcedureTypes::APPROACH));
        // 1km per 1000m
        let expected = (1.0 / 1.852) / 3280.84;
        assert!((config.descent_nm_per_foot() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bad_tod_rule() {
        let mut manager = PreferenceManager::new("kelpie-unit-test");
        manager.put(TOD_RULE, -2.0);
        assert_eq!(TrackerConfig::from_preferences(&manager).tod_rule, 3.0);
    }
}

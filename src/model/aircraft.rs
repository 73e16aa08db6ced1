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

/// The aircraft flying the route. Only the cruise altitude in feet feeds
/// the descent calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    name: String,
    cruise_altitude: i32,
}

impl Aircraft {
    pub fn new(name: String, cruise_altitude: i32) -> Self {
        Aircraft { name, cruise_altitude }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_cruise_altitude(&self) -> i32 {
        self.cruise_altitude
    }
}

impl Default for Aircraft {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            cruise_altitude: 7000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Aircraft;

    #[test]
    fn test_default() {
        let aircraft = Aircraft::default();
        assert_eq!(aircraft.get_cruise_altitude(), 7000);
        assert_eq!(aircraft.get_name(), "");
        assert_eq!(Aircraft::new("C172".to_string(), 9000).get_cruise_altitude(), 9000);
    }
}

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

use super::aircraft::Aircraft;

/// Flight plan wide values shared by every leg of a route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanInfo {
    aircraft: Option<Aircraft>,
    max_altitude: i32,
}

impl PlanInfo {
    pub fn new(aircraft: Option<Aircraft>, max_altitude: i32) -> Self {
        Self {
            aircraft,
            max_altitude,
        }
    }

    pub fn get_aircraft(&self) -> Option<&Aircraft> {
        self.aircraft.as_ref()
    }

    pub fn set_aircraft(&mut self, aircraft: Option<Aircraft>) {
        self.aircraft = aircraft;
    }

    pub fn set_max_altitude(&mut self, max_altitude: i32) {
        self.max_altitude = max_altitude;
    }

    pub fn get_max_altitude(&self) -> i32 {
        self.max_altitude
    }

    /// Cruise altitude in feet. An explicit maximum altitude wins over the
    /// aircraft cruise altitude.
    pub fn get_plan_altitude(&self) -> i32 {
        match self.max_altitude {
            0 => match &self.aircraft {
                Some(a) => a.get_cruise_altitude(),
                None => 0,
            },
            max => max,
        }
    }
}

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

use crate::earth::coordinate::Coordinate;
use crate::model::location::Location;

use super::{airport::Airport, fix::Fix, navaid::Navaid, procedure::ProcedureLeg};

/// What a route leg flies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Waypoint {
    User { id: String, loc: Coordinate, elevation: f64 },
    Fix { fix: Fix, elevation: f64 },
    Navaid { navaid: Navaid },
    Airport { airport: Airport },
    Procedure { leg: ProcedureLeg },
}

impl Waypoint {
    pub fn get_id(&self) -> &str {
        match self {
            Waypoint::User { id, .. } => id,
            Waypoint::Fix { fix, .. } => fix.get_id(),
            Waypoint::Navaid { navaid } => navaid.get_id(),
            Waypoint::Airport { airport } => airport.get_id(),
            Waypoint::Procedure { leg } => leg.get_ident(),
        }
    }

    pub fn get_name(&self) -> &str {
        match self {
            Waypoint::User { .. } => "GPS Waypoint",
            Waypoint::Fix { fix, .. } => fix.get_name(),
            Waypoint::Navaid { navaid } => navaid.get_name(),
            Waypoint::Airport { airport } => airport.get_name(),
            Waypoint::Procedure { leg } => leg.get_ident(),
        }
    }

    /// Elevation or altitude in feet.
    pub fn get_elevation(&self) -> f64 {
        match self {
            Waypoint::User { elevation, .. } => *elevation,
            Waypoint::Fix { elevation, .. } => *elevation,
            Waypoint::Navaid { navaid } => navaid.get_elevation(),
            Waypoint::Airport { airport } => airport.get_elevation(),
            Waypoint::Procedure { leg } => leg.get_altitude(),
        }
    }

    pub fn get_loc(&self) -> &Coordinate {
        match self {
            Waypoint::User { loc, .. } => loc,
            Waypoint::Fix { fix, .. } => fix.get_loc(),
            Waypoint::Navaid { navaid } => navaid.get_loc(),
            Waypoint::Airport { airport } => airport.get_loc(),
            Waypoint::Procedure { leg } => leg.get_end(),
        }
    }

    /// Magnetic variation from the navigation database, if this waypoint has one.
    pub fn get_mag_var(&self) -> Option<f64> {
        match self {
            Waypoint::User { .. } => None,
            Waypoint::Fix { fix, .. } => fix.get_mag_var(),
            Waypoint::Navaid { navaid } => navaid.get_mag_var(),
            Waypoint::Airport { airport } => airport.get_mag_var(),
            Waypoint::Procedure { leg } => leg.get_mag_var(),
        }
    }

    pub fn get_procedure_leg(&self) -> Option<&ProcedureLeg> {
        match self {
            Waypoint::Procedure { leg } => Some(leg),
            _ => None,
        }
    }

    pub fn is_airport(&self) -> bool {
        matches!(self, Waypoint::Airport { .. })
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Waypoint::User { .. })
    }
}

#[cfg(test)]
mod tests {
    use crate::earth::coordinate::Coordinate;
    use crate::model::test_utils::{make_airport, make_fix};

    use super::Waypoint;

    #[test]
    fn test_identity() {
        let w = Waypoint::User {
            id: "WP1".to_string(),
            loc: Coordinate::new(13.0, 111.0),
            elevation: 1500.0,
        };
        assert_eq!(w.get_id(), "WP1");
        assert_eq!(w.get_elevation(), 1500.0);
        assert_eq!(w.get_mag_var(), None);
        assert!(w.is_user());

        let w = Waypoint::Airport {
            airport: make_airport("YSSY", -33.95, 151.18),
        };
        assert_eq!(w.get_id(), "YSSY");
        assert!(w.is_airport());
        assert!(w.get_mag_var().is_some());
        assert!(w.get_procedure_leg().is_none());

        let w = Waypoint::Fix {
            fix: make_fix("BOREE", -33.0, 150.0),
            elevation: 0.0,
        };
        assert_eq!(w.get_id(), "BOREE");
        assert_eq!(w.get_loc(), &Coordinate::new(-33.0, 150.0));
    }

    #[test]
    fn test_equality() {
        let w1 = Waypoint::User {
            id: "WP1".to_string(),
            loc: Coordinate::new(13.0, 111.0),
            elevation: 10.0,
        };
        let w2 = Waypoint::User {
            id: "WP2".to_string(),
            loc: Coordinate::new(23.0, 121.0),
            elevation: 20.0,
        };
        assert_eq!(w1, w1.clone());
        assert_ne!(w1, w2);
        let w3 = Waypoint::Airport {
            airport: make_airport("YSSY", 13.0, 111.0),
        };
        assert_ne!(w1, w3);
    }
}

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

//! Procedure legs as handed over by the procedure resolver. The geometry of
//! every leg is already built: the tracker only measures against it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::earth::coordinate::Coordinate;
use crate::earth::line_string::LineString;

bitflags! {
    /// Set of procedure kinds, used both to select legs for removal and to
    /// filter what is shown on the map.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ProcedureTypes: u32 {
        const SID = 1 << 0;
        const STAR = 1 << 1;
        const TRANSITION = 1 << 2;
        const APPROACH = 1 << 3;
        const MISSED = 1 << 4;

        const ARRIVAL = Self::TRANSITION.bits() | Self::APPROACH.bits() | Self::MISSED.bits();
        const ALL = Self::SID.bits() | Self::STAR.bits() | Self::ARRIVAL.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Sid,
    Star,
    Transition,
    Approach,
    Missed,
}

impl ProcedureKind {
    pub fn flag(&self) -> ProcedureTypes {
        match self {
            ProcedureKind::Sid => ProcedureTypes::SID,
            ProcedureKind::Star => ProcedureTypes::STAR,
            ProcedureKind::Transition => ProcedureTypes::TRANSITION,
            ProcedureKind::Approach => ProcedureTypes::APPROACH,
            ProcedureKind::Missed => ProcedureTypes::MISSED,
        }
    }
}

/// ARINC 424 path terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureLegType {
    ArcToFix,
    CourseToAltitude,
    CourseToDmeDistance,
    CourseToFix,
    CourseToIntercept,
    CourseToRadialTermination,
    DirectToFix,
    FixToAltitude,
    TrackFromFixFromDistance,
    TrackFromFixToDmeDistance,
    FromFixToManualTermination,
    HoldToAltitude,
    HoldToFix,
    HoldToManualTermination,
    InitialFix,
    ProcedureTurn,
    RadiusToFix,
    TrackToFix,
    HeadingToAltitude,
    HeadingToDmeDistance,
    HeadingToIntercept,
    HeadingToManualTermination,
    HeadingToRadialTermination,
}

impl ProcedureLegType {
    pub fn is_hold(&self) -> bool {
        match self {
            ProcedureLegType::HoldToAltitude
            | ProcedureLegType::HoldToFix
            | ProcedureLegType::HoldToManualTermination => true,
            ProcedureLegType::ArcToFix
            | ProcedureLegType::CourseToAltitude
            | ProcedureLegType::CourseToDmeDistance
            | ProcedureLegType::CourseToFix
            | ProcedureLegType::CourseToIntercept
            | ProcedureLegType::CourseToRadialTermination
            | ProcedureLegType::DirectToFix
            | ProcedureLegType::FixToAltitude
            | ProcedureLegType::TrackFromFixFromDistance
            | ProcedureLegType::TrackFromFixToDmeDistance
            | ProcedureLegType::FromFixToManualTermination
            | ProcedureLegType::InitialFix
            | ProcedureLegType::ProcedureTurn
            | ProcedureLegType::RadiusToFix
            | ProcedureLegType::TrackToFix
            | ProcedureLegType::HeadingToAltitude
            | ProcedureLegType::HeadingToDmeDistance
            | ProcedureLegType::HeadingToIntercept
            | ProcedureLegType::HeadingToManualTermination
            | ProcedureLegType::HeadingToRadialTermination => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureLeg {
    ident: String,
    kind: ProcedureKind,
    leg_type: ProcedureLegType,
    turn_direction: Option<TurnDirection>,
    start: Coordinate,
    end: Coordinate,
    hold_line: Option<(Coordinate, Coordinate)>,
    geometry: LineString,
    calculated_distance: f64,
    mag_var: Option<f64>,
    altitude: f64,
}

impl ProcedureLeg {
    /// A straight leg from `start` to `end`. Curved legs replace the geometry
    /// with [`ProcedureLeg::with_geometry`].
    pub fn new(
        ident: String,
        kind: ProcedureKind,
        leg_type: ProcedureLegType,
        start: Coordinate,
        end: Coordinate,
    ) -> Self {
        let geometry = if start.almost_equal(&end) {
            LineString::from_point(end.clone())
        } else {
            LineString::from_line(start.clone(), end.clone())
        };
        let calculated_distance = start.distance_to(&end);
        Self {
            ident,
            kind,
            leg_type,
            turn_direction: None,
            start,
            end,
            hold_line: None,
            geometry,
            calculated_distance,
            mag_var: None,
            altitude: 0.0,
        }
    }

    pub fn with_geometry(mut self, geometry: LineString, calculated_distance: f64) -> Self {
        self.geometry = geometry;
        self.calculated_distance = calculated_distance;
        self
    }

    /// Turn direction and the helper line used to detect leaving the hold.
    pub fn with_hold(mut self, turn_direction: TurnDirection, hold_line: Option<(Coordinate, Coordinate)>) -> Self {
        self.turn_direction = Some(turn_direction);
        self.hold_line = hold_line;
        self
    }

    pub fn with_mag_var(mut self, mag_var: f64) -> Self {
        self.mag_var = Some(mag_var);
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    pub fn get_ident(&self) -> &str {
        &self.ident
    }

    pub fn get_kind(&self) -> ProcedureKind {
        self.kind
    }

    pub fn get_leg_type(&self) -> ProcedureLegType {
        self.leg_type
    }

    pub fn get_turn_direction(&self) -> Option<TurnDirection> {
        self.turn_direction
    }

    pub fn get_start(&self) -> &Coordinate {
        &self.start
    }

    /// The fix terminating the leg. This is where the route leg sits.
    pub fn get_end(&self) -> &Coordinate {
        &self.end
    }

    pub fn get_hold_line(&self) -> Option<&(Coordinate, Coordinate)> {
        self.hold_line.as_ref()
    }

    pub fn get_geometry(&self) -> &LineString {
        &self.geometry
    }

    pub fn get_calculated_distance(&self) -> f64 {
        self.calculated_distance
    }

    pub fn get_mag_var(&self) -> Option<f64> {
        self.mag_var
    }

    pub fn get_altitude(&self) -> f64 {
        self.altitude
    }

    pub fn is_hold(&self) -> bool {
        self.leg_type.is_hold()
    }

    pub fn is_missed(&self) -> bool {
        self.kind == ProcedureKind::Missed
    }

    /// Initial fixes and legs collapsed to a single point carry no distance.
    pub fn is_approach_point(&self) -> bool {
        self.leg_type == ProcedureLegType::InitialFix
            || (!self.is_hold() && self.start.almost_equal(&self.end))
    }
}

/// A complete procedure block as attached to a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    ident: String,
    legs: Vec<ProcedureLeg>,
}

impl Procedure {
    pub fn new(ident: String, legs: Vec<ProcedureLeg>) -> Self {
        Self { ident, legs }
    }

    pub fn get_ident(&self) -> &str {
        &self.ident
    }

    pub fn get_legs(&self) -> &[ProcedureLeg] {
        &self.legs
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// True if every leg is of one of the given kinds.
    pub fn has_only(&self, types: ProcedureTypes) -> bool {
        self.legs.iter().all(|l| types.contains(l.get_kind().flag()))
    }
}

#[cfg(test)]
mod tests {
    use crate::earth::coordinate::Coordinate;

    use super::{ProcedureKind, ProcedureLeg, ProcedureLegType, ProcedureTypes};

    #[test]
    fn test_flags() {
        assert!(ProcedureTypes::ARRIVAL.contains(ProcedureKind::Missed.flag()));
        assert!(!ProcedureTypes::ARRIVAL.contains(ProcedureKind::Sid.flag()));
        assert!(ProcedureTypes::ALL.contains(ProcedureTypes::STAR));
    }

    #[test]
    fn test_approach_point() {
        let p = Coordinate::new(1.0, 1.0);
        let q = Coordinate::new(1.0, 1.1);
        let initial = ProcedureLeg::new(
            "IF".to_string(),
            ProcedureKind::Approach,
            ProcedureLegType::InitialFix,
            p.clone(),
            q.clone(),
        );
        assert!(initial.is_approach_point());

        let collapsed = ProcedureLeg::new(
            "CF".to_string(),
            ProcedureKind::Approach,
            ProcedureLegType::CourseToFix,
            p.clone(),
            p.clone(),
        );
        assert!(collapsed.is_approach_point());
        assert_eq!(collapsed.get_geometry().len(), 1);

        let line = ProcedureLeg::new(
            "TF".to_string(),
            ProcedureKind::Approach,
            ProcedureLegType::TrackToFix,
            p.clone(),
            q.clone(),
        );
        assert!(!line.is_approach_point());
        assert_eq!(line.get_geometry().len(), 2);
        assert!((line.get_calculated_distance() - p.distance_to(&q)).abs() < 1e-9);

        let hold = ProcedureLeg::new(
            "HM".to_string(),
            ProcedureKind::Approach,
            ProcedureLegType::HoldToManualTermination,
            p.clone(),
            p,
        );
        assert!(hold.is_hold());
        assert!(!hold.is_approach_point());
    }

    #[test]
    fn test_hold_types() {
        assert!(ProcedureLegType::HoldToAltitude.is_hold());
        assert!(ProcedureLegType::HoldToFix.is_hold());
        assert!(ProcedureLegType::HoldToManualTermination.is_hold());
        assert!(!ProcedureLegType::ProcedureTurn.is_hold());
        assert!(!ProcedureLegType::FromFixToManualTermination.is_hold());
        assert!(!ProcedureLegType::HeadingToManualTermination.is_hold());
    }
}

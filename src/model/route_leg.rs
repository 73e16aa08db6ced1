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
use crate::earth::line_string::LineString;
use crate::earth::normalize_course;

use super::procedure::{ProcedureKind, ProcedureLeg, ProcedureLegType, ProcedureTypes};
use super::waypoint::Waypoint;

/// One element of a route: the waypoint flown to plus the values calculated
/// for the leg arriving there from the previous element.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    index: usize,
    waypoint: Waypoint,
    mag_var: Option<f64>,
    distance_to: f64,
    course_to: f64,
    geometry: LineString,
}

impl RouteLeg {
    pub fn new(waypoint: Waypoint) -> Self {
        let geometry = LineString::from_point(waypoint.get_loc().clone());
        Self {
            index: 0,
            waypoint,
            mag_var: None,
            distance_to: 0.0,
            course_to: 0.0,
            geometry,
        }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn get_waypoint(&self) -> &Waypoint {
        &self.waypoint
    }

    pub fn get_ident(&self) -> &str {
        self.waypoint.get_id()
    }

    pub fn get_position(&self) -> &Coordinate {
        self.waypoint.get_loc()
    }

    /// Altitude or elevation in feet.
    pub fn get_altitude(&self) -> f64 {
        self.waypoint.get_elevation()
    }

    /// Resolved magnetic variation, 0 if neither this leg nor a neighbour has one.
    pub fn get_mag_var(&self) -> f64 {
        self.mag_var.unwrap_or(0.0)
    }

    pub fn has_valid_mag_var(&self) -> bool {
        self.mag_var.is_some()
    }

    pub fn has_mag_var_source(&self) -> bool {
        self.waypoint.get_mag_var().is_some()
    }

    pub(crate) fn update_mag_var(&mut self) {
        self.mag_var = self.waypoint.get_mag_var();
    }

    pub(crate) fn set_mag_var(&mut self, mag_var: Option<f64>) {
        self.mag_var = mag_var;
    }

    /// Distance in nautical miles from the previous leg.
    pub fn get_distance_to(&self) -> f64 {
        self.distance_to
    }

    /// True course from the previous leg.
    pub fn get_course_to(&self) -> f64 {
        self.course_to
    }

    pub fn get_course_to_mag(&self) -> f64 {
        normalize_course(self.course_to - self.get_mag_var())
    }

    pub fn get_geometry(&self) -> &LineString {
        &self.geometry
    }

    pub(crate) fn update_distance_and_course(&mut self, prev: Option<&RouteLeg>) {
        let pos = self.get_position().clone();
        match prev {
            Some(prev) => {
                let prev_pos = prev.get_position();
                match self.waypoint.get_procedure_leg() {
                    // Entering a procedure at a single point from the en route part
                    Some(leg) if !prev.is_any_procedure() && !leg.is_hold() && leg.get_start().almost_equal(leg.get_end()) => {
                        self.distance_to = prev_pos.distance_to(&pos);
                        self.course_to = prev_pos.bearing_to_deg(&pos);
                        self.geometry = LineString::from_line(prev_pos.clone(), pos);
                    }
                    Some(leg) => {
                        self.distance_to = leg.get_calculated_distance();
                        self.course_to = if leg.get_start().almost_equal(leg.get_end()) {
                            prev_pos.bearing_to_deg(&pos)
                        } else {
                            leg.get_start().bearing_to_deg(leg.get_end())
                        };
                        self.geometry = leg.get_geometry().clone();
                    }
                    None => {
                        self.distance_to = prev_pos.distance_to(&pos);
                        self.course_to = prev_pos.bearing_to_deg(&pos);
                        self.geometry = LineString::from_line(prev_pos.clone(), pos);
                    }
                }
            }
            None => self.clear_distance_and_course(),
        }
    }

    pub(crate) fn clear_distance_and_course(&mut self) {
        self.distance_to = 0.0;
        self.course_to = 0.0;
        self.geometry = LineString::from_point(self.get_position().clone());
    }

    pub fn get_procedure_leg(&self) -> Option<&ProcedureLeg> {
        self.waypoint.get_procedure_leg()
    }

    pub fn get_procedure_leg_type(&self) -> Option<ProcedureLegType> {
        self.get_procedure_leg().map(|l| l.get_leg_type())
    }

    pub fn is_any_procedure(&self) -> bool {
        self.get_procedure_leg().is_some()
    }

    pub fn is_procedure_of(&self, types: ProcedureTypes) -> bool {
        self.get_procedure_leg()
            .is_some_and(|l| types.contains(l.get_kind().flag()))
    }

    fn is_kind(&self, kind: ProcedureKind) -> bool {
        self.get_procedure_leg().is_some_and(|l| l.get_kind() == kind)
    }

    pub fn is_sid(&self) -> bool {
        self.is_kind(ProcedureKind::Sid)
    }

    pub fn is_star(&self) -> bool {
        self.is_kind(ProcedureKind::Star)
    }

    pub fn is_transition(&self) -> bool {
        self.is_kind(ProcedureKind::Transition)
    }

    pub fn is_approach(&self) -> bool {
        self.is_kind(ProcedureKind::Approach)
    }

    pub fn is_missed(&self) -> bool {
        self.is_kind(ProcedureKind::Missed)
    }

    pub fn is_hold(&self) -> bool {
        self.get_procedure_leg().is_some_and(|l| l.is_hold())
    }

    pub fn is_approach_point(&self) -> bool {
        self.get_procedure_leg().is_some_and(|l| l.is_approach_point())
    }
}

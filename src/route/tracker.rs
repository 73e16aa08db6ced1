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

//! Active leg tracking. Every position sample is measured against the
//! active leg and the one after it, and the active leg advances once the
//! aircraft is better aligned with the next one.

use log::{Level, debug, log_enabled, warn};

use crate::earth::coordinate::Coordinate;
use crate::earth::line_distance::{LineDistance, LineDistanceStatus, is_smaller};
use crate::earth::pos_course::PosCourse;
use crate::earth::{METERS_PER_NM, course_difference};
use crate::model::procedure::{ProcedureLegType, TurnDirection};
use crate::model::route_leg::RouteLeg;
use crate::util::distance_format::DistanceFormat;

use super::Route;

/// Leaving a hold over its own fix: cross track limit on the next leg.
pub const HOLD_EXIT_CROSS_TRACK_NM: f64 = 0.5;
/// Leaving a hold over its own fix: distance already flown along the next leg.
pub const HOLD_EXIT_TRAVELLED_NM: f64 = 0.75;
pub const HOLD_EXIT_COURSE_DIFF: f64 = 25.0;
/// Distance beyond the hold helper line for holds left elsewhere.
pub const HOLD_LINE_EXIT_NM: f64 = 0.5;
/// Cross track distance to the entry of a following hold.
pub const HOLD_ENTRY_NM: f64 = 0.5;
pub const PROCEDURE_TURN_FUZZ_NM: f64 = 100.0 / METERS_PER_NM;
pub const PROCEDURE_TURN_COURSE_DIFF: f64 = 45.0;
pub const DEFAULT_FUZZ_NM: f64 = 10.0 / METERS_PER_NM;
pub const DEFAULT_COURSE_DIFF: f64 = 90.0;

/// Initial fixes skipped when looking for the leg after a hold.
const MAX_INITIAL_FIX_SKIP: usize = 2;
/// Hold fix and next leg start closer than this count as the same point.
const SAME_POINT_NM: f64 = 0.01;

/// How the switch from the active to the next leg is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchRule {
    HoldExit,
    HoldEntry,
    ProcedureTurn,
    Default,
}

impl SwitchRule {
    fn for_legs(active: &RouteLeg, next: &RouteLeg) -> Self {
        match (LegClass::of(active), LegClass::of(next)) {
            (LegClass::Hold, _) => SwitchRule::HoldExit,
            (LegClass::ProcedureTurn | LegClass::Plain, LegClass::Hold) => SwitchRule::HoldEntry,
            (LegClass::ProcedureTurn, LegClass::ProcedureTurn | LegClass::Plain) => SwitchRule::ProcedureTurn,
            (LegClass::Plain, LegClass::ProcedureTurn | LegClass::Plain) => SwitchRule::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegClass {
    Hold,
    ProcedureTurn,
    Plain,
}

impl LegClass {
    fn of(leg: &RouteLeg) -> Self {
        let Some(leg_type) = leg.get_procedure_leg_type() else {
            return LegClass::Plain;
        };
        match leg_type {
            ProcedureLegType::HoldToAltitude
            | ProcedureLegType::HoldToFix
            | ProcedureLegType::HoldToManualTermination => LegClass::Hold,
            ProcedureLegType::ProcedureTurn => LegClass::ProcedureTurn,
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
            | ProcedureLegType::RadiusToFix
            | ProcedureLegType::TrackToFix
            | ProcedureLegType::HeadingToAltitude
            | ProcedureLegType::HeadingToDmeDistance
            | ProcedureLegType::HeadingToIntercept
            | ProcedureLegType::HeadingToManualTermination
            | ProcedureLegType::HeadingToRadialTermination => LegClass::Plain,
        }
    }
}

impl Route {
    /// Feed a new position sample and advance the active leg if needed.
    pub fn update_active_leg_and_pos(&mut self, pos: &PosCourse) {
        if self.legs.is_empty() || !pos.is_valid() {
            self.reset_active();
            return;
        }
        self.active_pos = pos.clone();

        if self.legs.len() == 1 {
            self.active_leg = Some(0);
            self.active_leg_result = self.leg_line_distance(pos.get_pos(), 0);
            return;
        }

        let active = match self.active_leg {
            Some(active) => active,
            None => match self.nearest_all_leg_index(pos) {
                Some((index, cross_track)) => {
                    debug!("Seeding active leg {} at {:.2}nm cross track", index, cross_track);
                    index
                }
                None => {
                    warn!("No leg near enough to start tracking");
                    self.active_leg = None;
                    self.active_leg_result = LineDistance::invalid();
                    return;
                }
            },
        };

        let mut active = active.clamp(1, self.legs.len() - 1);
        self.active_leg = Some(active);
        self.active_leg_result = self.leg_line_distance(pos.get_pos(), active);

        // Keep advancing while the sample is already past the following legs.
        let mut switched = false;
        for _ in 0..self.legs.len() {
            let Some(next) = self.next_leg_candidate(active) else {
                break;
            };

            let p1 = self.legs[next - 1].get_position();
            let p2 = self.legs[next].get_position();
            let next_leg_result = pos.get_pos().distance_to_line(p1, p2);
            let course_diff = course_difference(pos.get_course(), p1.bearing_to_deg(p2));

            if !self.should_switch(active, next, pos, &next_leg_result, course_diff) {
                break;
            }

            if self.legs[next].is_missed() && !self.config.is_missed_shown() {
                debug!("Not switching to hidden missed approach leg {}", next);
                break;
            }

            debug!("Switched active leg from {} to {} ({})", active, next, self.legs[next].get_ident());
            self.active_leg = Some(next);
            self.active_leg_result = next_leg_result;
            active = next;
            switched = true;
        }

        if switched && log_enabled!(Level::Debug) {
            if let Some(distances) = self.route_distances() {
                debug!("{}", distances.describe(&DistanceFormat::new(self.config.units.distance)));
            }
        }
    }

    /// Re-run tracking with the last position sample.
    pub fn update_active_leg(&mut self) {
        let pos = self.active_pos.clone();
        self.update_active_leg_and_pos(&pos);
    }

    /// Force the active leg, clamped into the legs that have a predecessor.
    pub fn set_active_leg(&mut self, value: usize) {
        match self.legs.len() {
            0 => self.reset_active(),
            1 => {
                self.active_leg = Some(0);
                self.active_leg_result = self.leg_line_distance(self.active_pos.get_pos(), 0);
            }
            len => {
                let active = value.clamp(1, len - 1);
                if active != value {
                    warn!("Active leg {} out of range, using {}", value, active);
                }
                self.active_leg = Some(active);
                self.active_leg_result = self.leg_line_distance(self.active_pos.get_pos(), active);
            }
        }
    }

    pub fn reset_active(&mut self) {
        self.active_leg = None;
        self.active_pos = PosCourse::invalid();
        self.active_leg_result = LineDistance::invalid();
    }

    pub fn active_leg_index(&self) -> Option<usize> {
        self.active_leg
    }

    pub fn active_leg(&self) -> Option<&RouteLeg> {
        self.active_leg.and_then(|i| self.legs.get(i))
    }

    pub fn active_leg_result(&self) -> &LineDistance {
        &self.active_leg_result
    }

    pub fn active_pos(&self) -> &PosCourse {
        &self.active_pos
    }

    /// Active leg index for display, with a flag telling whether it was
    /// moved to a neighbouring leg. The index is currently never moved.
    pub fn active_leg_index_corrected(&self) -> Option<(usize, bool)> {
        // TODO: move to the following leg while the active one is an
        // approach point directly before the last procedure leg.
        self.active_leg.map(|active| (active, false))
    }

    pub fn active_leg_corrected(&self) -> Option<(&RouteLeg, bool)> {
        let (index, corrected) = self.active_leg_index_corrected()?;
        self.legs.get(index).map(|leg| (leg, corrected))
    }

    pub fn is_active_missed(&self) -> bool {
        self.active_leg().is_some_and(|l| l.is_missed())
    }

    /// True once the aircraft has flown past the end of the last leg that
    /// counts, either the destination or the last leg before the missed approach.
    pub fn is_passed_last_leg(&self) -> bool {
        let Some(active) = self.active_leg else {
            return false;
        };
        if self.active_leg_result.status != LineDistanceStatus::AfterEnd {
            return false;
        }
        let is_last = active + 1 >= self.legs.len();
        let before_missed = !self.legs[active].is_missed()
            && self.legs.get(active + 1).is_some_and(|l| l.is_missed());
        is_last || before_missed
    }

    /// Line distance of `pos` to the leg ending at `index`. The first leg is a point.
    pub(crate) fn leg_line_distance(&self, pos: &Coordinate, index: usize) -> LineDistance {
        if !pos.is_valid() || index >= self.legs.len() {
            return LineDistance::invalid();
        }
        let end = self.legs[index].get_position();
        let start = match index {
            0 => end,
            _ => self.legs[index - 1].get_position(),
        };
        pos.distance_to_line(start, end)
    }

    fn next_leg_candidate(&self, active: usize) -> Option<usize> {
        let mut next = active + 1;
        if next >= self.legs.len() {
            return None;
        }
        if self.legs[active].is_hold() {
            let mut skipped = 0;
            while skipped < MAX_INITIAL_FIX_SKIP
                && next + 1 < self.legs.len()
                && self.legs[next].get_procedure_leg_type() == Some(ProcedureLegType::InitialFix)
            {
                next += 1;
                skipped += 1;
            }
        }
        Some(next)
    }

    fn should_switch(
        &self,
        active: usize,
        next: usize,
        pos: &PosCourse,
        next_leg_result: &LineDistance,
        course_diff: f64,
    ) -> bool {
        let active_leg = &self.legs[active];
        let next_leg = &self.legs[next];

        match SwitchRule::for_legs(active_leg, next_leg) {
            SwitchRule::HoldExit => self.is_hold_exited(active_leg, next, pos, next_leg_result, course_diff),
            SwitchRule::HoldEntry => next_leg_result.distance.abs() < HOLD_ENTRY_NM,
            SwitchRule::ProcedureTurn => {
                is_smaller(next_leg_result, &self.active_leg_result, PROCEDURE_TURN_FUZZ_NM)
                    && course_diff < PROCEDURE_TURN_COURSE_DIFF
            }
            SwitchRule::Default => {
                self.active_leg_result.status == LineDistanceStatus::AfterEnd
                    || (is_smaller(next_leg_result, &self.active_leg_result, DEFAULT_FUZZ_NM)
                        && course_diff < DEFAULT_COURSE_DIFF)
            }
        }
    }

    fn is_hold_exited(
        &self,
        hold: &RouteLeg,
        next: usize,
        pos: &PosCourse,
        next_leg_result: &LineDistance,
        course_diff: f64,
    ) -> bool {
        let next_leg = &self.legs[next];
        let next_start = match next_leg.get_procedure_leg() {
            Some(leg) => leg.get_start(),
            None => self.legs[next - 1].get_position(),
        };

        let hold_line = hold.get_procedure_leg().and_then(|l| l.get_hold_line());
        let leaves_over_fix = next_start.distance_to(hold.get_position()) < SAME_POINT_NM;

        match hold_line {
            Some((line1, line2)) if !leaves_over_fix => {
                let result = pos.get_pos().distance_to_line(line1, line2);
                if !result.is_along_track() {
                    return false;
                }
                let turn = hold
                    .get_procedure_leg()
                    .and_then(|l| l.get_turn_direction())
                    .unwrap_or(TurnDirection::Right);
                match turn {
                    TurnDirection::Left => result.distance < -HOLD_LINE_EXIT_NM,
                    TurnDirection::Right => result.distance > HOLD_LINE_EXIT_NM,
                }
            }
            _ => {
                next_leg_result.is_along_track()
                    && next_leg_result.distance.abs() < HOLD_EXIT_CROSS_TRACK_NM
                    && next_leg_result.distance_from1 > HOLD_EXIT_TRAVELLED_NM
                    && course_diff < HOLD_EXIT_COURSE_DIFF
            }
        }
    }
}

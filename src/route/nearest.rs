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
use crate::earth::line_distance::{LineDistance, LineDistanceStatus};
use crate::earth::pos_course::PosCourse;

use super::Route;

/// Positions further than this from every leg do not start tracking.
pub const MAX_SEED_DISTANCE_NM: f64 = 100.0;

impl Route {
    /// Leg closest to `pos`, procedure legs included. Returns the leg index
    /// and the signed cross track distance, or `None` if nothing is within
    /// [`MAX_SEED_DISTANCE_NM`].
    pub fn nearest_all_leg_index(&self, pos: &PosCourse) -> Option<(usize, f64)> {
        if !pos.is_valid() {
            return None;
        }
        self.nearest_segment(pos.get_pos(), |_| true)
            .map(|(index, result)| (index, result.distance))
            .filter(|(_, cross_track)| cross_track.abs() <= MAX_SEED_DISTANCE_NM)
    }

    /// Closest en route leg to `pos`, ignoring legs that start at a
    /// procedure leg. No distance limit applies.
    pub fn nearest_leg_result(&self, pos: &Coordinate) -> Option<(usize, LineDistance)> {
        if !pos.is_valid() {
            return None;
        }
        self.nearest_segment(pos, |index| !self.legs[index - 1].is_any_procedure())
    }

    fn nearest_segment<F>(&self, pos: &Coordinate, include: F) -> Option<(usize, LineDistance)>
    where
        F: Fn(usize) -> bool,
    {
        let mut nearest: Option<(usize, LineDistance)> = None;
        for index in 1..self.legs.len() {
            if !include(index) {
                continue;
            }
            let result = pos.distance_to_line(
                self.legs[index - 1].get_position(),
                self.legs[index].get_position(),
            );
            if result.status == LineDistanceStatus::Invalid {
                continue;
            }
            let closer = match &nearest {
                Some((_, n)) => result.distance.abs() < n.distance.abs(),
                None => true,
            };
            if closer {
                nearest = Some((index, result));
            }
        }
        nearest
    }
}

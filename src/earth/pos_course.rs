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

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A live aircraft sample: position plus true course over ground in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosCourse {
    pos: Coordinate,
    course: f64,
}

impl PosCourse {
    pub fn new(pos: Coordinate, course: f64) -> Self {
        Self { pos, course }
    }

    pub fn invalid() -> Self {
        Self {
            pos: Coordinate::new(f64::NAN, f64::NAN),
            course: f64::NAN,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.pos.is_valid() && self.course.is_finite()
    }

    pub fn get_pos(&self) -> &Coordinate {
        &self.pos
    }

    pub fn get_course(&self) -> f64 {
        self.course
    }
}

impl Default for PosCourse {
    fn default() -> Self {
        Self::invalid()
    }
}

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

pub mod bounding_rect;
pub mod coordinate;
pub mod line_distance;
pub mod line_string;
pub mod pos_course;

pub const METERS_PER_NM: f64 = 1852.0;
pub const FEET_PER_NM: f64 = 6076.0;

/// Segments shorter than this are treated as a single point.
pub const ZERO_LENGTH_NM: f64 = 1.0e-6;

pub fn meters_to_nm(meters: f64) -> f64 {
    meters / METERS_PER_NM
}

/// Normalise a course into the range 0 to 360 degrees.
pub fn normalize_course(course: f64) -> f64 {
    let c = course % 360.0;
    if c < 0.0 { c + 360.0 } else { c }
}

/// Absolute angle between two courses, 0 to 180 degrees.
pub fn course_difference(course1: f64, course2: f64) -> f64 {
    let diff = normalize_course(course1 - course2);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

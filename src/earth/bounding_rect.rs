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

/// Lat/long box in degrees. When the box crosses the antimeridian `west` is
/// greater than `east`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    west: f64,
    north: f64,
    east: f64,
    south: f64,
}

impl BoundingRect {
    pub fn new(west: f64, north: f64, east: f64, south: f64) -> Self {
        Self {
            west,
            north,
            east,
            south,
        }
    }

    /// Smallest box holding all points. The longitude range is the complement
    /// of the widest gap between neighbouring longitudes, so a route from
    /// Fiji to Samoa does not span the whole globe.
    pub fn from_coordinates<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut north = f64::MIN;
        let mut south = f64::MAX;
        let mut longitudes: Vec<f64> = Vec::new();

        for c in coordinates.into_iter().filter(|c| c.is_valid()) {
            north = north.max(c.get_latitude());
            south = south.min(c.get_latitude());
            longitudes.push(c.get_longitude());
        }

        if longitudes.is_empty() {
            return None;
        }

        longitudes.sort_by(|a, b| a.total_cmp(b));

        let first = longitudes[0];
        let last = longitudes[longitudes.len() - 1];

        // Gap across the antimeridian
        let mut widest_gap = 360.0 - (last - first);
        let mut west = first;
        let mut east = last;

        for w in longitudes.windows(2) {
            let gap = w[1] - w[0];
            if gap > widest_gap {
                widest_gap = gap;
                west = w[1];
                east = w[0];
            }
        }

        Some(Self::new(west, north, east, south))
    }

    pub fn get_west(&self) -> f64 {
        self.west
    }

    pub fn get_north(&self) -> f64 {
        self.north
    }

    pub fn get_east(&self) -> f64 {
        self.east
    }

    pub fn get_south(&self) -> f64 {
        self.south
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        let lat = c.get_latitude();
        let lon = c.get_longitude();
        if lat > self.north || lat < self.south {
            return false;
        }
        if self.crosses_antimeridian() {
            lon >= self.west || lon <= self.east
        } else {
            lon >= self.west && lon <= self.east
        }
    }
}

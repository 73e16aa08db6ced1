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

use super::coordinate::Coordinate;
use super::line_distance::{LineDistance, LineDistanceStatus};

/// An ordered polyline of great circle segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    points: Vec<Coordinate>,
}

impl LineString {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn from_point(point: Coordinate) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn from_line(pos1: Coordinate, pos2: Coordinate) -> Self {
        Self {
            points: vec![pos1, pos2],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get_points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum()
    }

    /// Position at a fraction of the total length, walking the segments in order.
    pub fn interpolate(&self, fraction: f64) -> Option<Coordinate> {
        let first = self.points.first()?;
        let length = self.length();
        if self.points.len() == 1 || length <= 0.0 {
            return Some(first.clone());
        }

        let target = fraction.clamp(0.0, 1.0) * length;
        let mut travelled = 0.0;
        for w in self.points.windows(2) {
            let segment = w[0].distance_to(&w[1]);
            if travelled + segment >= target {
                if segment <= 0.0 {
                    return Some(w[1].clone());
                }
                return Some(w[0].interpolate(&w[1], (target - travelled) / segment));
            }
            travelled += segment;
        }
        self.points.last().cloned()
    }

    /// Distance from `pos` to the closest segment of this line.
    ///
    /// `distance_from1` is the distance to the first point of the line and
    /// `distance_from2` is what is left to fly: the distance to the end of the
    /// closest segment plus the length of every segment after it.
    pub fn distance_to_line_string(&self, pos: &Coordinate) -> LineDistance {
        match self.points.len() {
            0 => LineDistance::invalid(),
            1 => pos.distance_to_line(&self.points[0], &self.points[0]),
            _ => {
                let mut best: Option<(usize, LineDistance)> = None;
                for (i, w) in self.points.windows(2).enumerate() {
                    let result = pos.distance_to_line(&w[0], &w[1]);
                    if result.status == LineDistanceStatus::Invalid {
                        continue;
                    }
                    let closer = match &best {
                        Some((_, b)) => result.distance.abs() < b.distance.abs(),
                        None => true,
                    };
                    if closer {
                        best = Some((i, result));
                    }
                }

                match best {
                    Some((i, mut result)) => {
                        let remaining: f64 = self.points[i + 1..]
                            .windows(2)
                            .map(|w| w[0].distance_to(&w[1]))
                            .sum();
                        result.distance_from1 = pos.distance_to(&self.points[0]);
                        result.distance_from2 += remaining;
                        result
                    }
                    None => LineDistance::invalid(),
                }
            }
        }
    }
}

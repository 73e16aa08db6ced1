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

/// Where the foot of the perpendicular from a point falls on a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDistanceStatus {
    Invalid,
    BeforeStart,
    AlongTrack,
    AfterEnd,
}

/// Result of measuring a point against a segment. All values in nautical miles.
///
/// `distance` is the signed cross track distance when the status is
/// [`LineDistanceStatus::AlongTrack`] and the distance to the nearer end point
/// otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDistance {
    pub status: LineDistanceStatus,
    pub distance: f64,
    pub distance_from1: f64,
    pub distance_from2: f64,
}

impl LineDistance {
    pub fn invalid() -> Self {
        Self {
            status: LineDistanceStatus::Invalid,
            distance: f64::MAX,
            distance_from1: f64::MAX,
            distance_from2: f64::MAX,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status != LineDistanceStatus::Invalid
    }

    pub fn is_along_track(&self) -> bool {
        self.status == LineDistanceStatus::AlongTrack
    }
}

impl Default for LineDistance {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Fuzzy compare of cross track distances.
pub fn is_smaller(dist1: &LineDistance, dist2: &LineDistance, epsilon: f64) -> bool {
    dist1.distance.abs() < dist2.distance.abs() + epsilon
}

#[cfg(test)]
mod tests {
    use super::{is_smaller, LineDistance, LineDistanceStatus};

    fn along(distance: f64) -> LineDistance {
        LineDistance {
            status: LineDistanceStatus::AlongTrack,
            distance,
            distance_from1: 1.0,
            distance_from2: 1.0,
        }
    }

    #[test]
    fn test_is_smaller() {
        assert!(is_smaller(&along(-1.0), &along(2.0), 0.0));
        assert!(!is_smaller(&along(2.0), &along(-1.0), 0.0));
        assert!(is_smaller(&along(1.05), &along(1.0), 0.1));
        assert!(!is_smaller(&along(1.0), &along(1.0), 0.0));
    }

    #[test]
    fn test_invalid() {
        let d = LineDistance::default();
        assert!(!d.is_valid());
        assert!(!d.is_along_track());
        assert!(along(0.0).is_along_track());
    }
}

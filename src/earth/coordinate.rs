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

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::line_distance::{LineDistance, LineDistanceStatus};
use super::ZERO_LENGTH_NM;

/// A point on the earth surface in decimal degrees. All distances returned by
/// this type are in nautical miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub const EARTH_RADIUS: f64 = 3441.85;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }

    /// Initial great circle bearing in radians, 0 to 2PI.
    pub fn bearing_to(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let d_lon = (l.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        let heading = y.atan2(x);

        (heading + 2.0 * PI) % (2.0 * PI)
    }

    pub fn bearing_to_deg(&self, l: &Coordinate) -> f64 {
        self.bearing_to(l).to_degrees()
    }

    pub fn coordinate_at(&self, distance: f64, heading: f64) -> Coordinate {
        let d = distance / Self::EARTH_RADIUS;
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let tc = heading.to_radians();
        let lat = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * tc.cos()).asin();
        let d_lon = (tc.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat.sin());

        let lon = (lon1 + d_lon + 3.0 * PI) % (2.0 * PI) - PI;

        Coordinate::new(lat.to_degrees(), lon.to_degrees())
    }

    pub fn distance_to(&self, l: &Coordinate) -> f64 {
        Self::EARTH_RADIUS * self.central_angle_to(l)
    }

    fn central_angle_to(&self, l: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();
        let d_lon = lon1 - lon2;
        let d_lat = lat1 - lat2;

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        (2.0 * a.sqrt().atan2((1.0 - a).sqrt())).abs()
    }

    pub fn almost_equal(&self, l: &Coordinate) -> bool {
        self.distance_to(l) < ZERO_LENGTH_NM
    }

    /// Point on the great circle between this and `l`. A fraction of 0 gives
    /// this point, 1 gives `l`.
    pub fn interpolate(&self, l: &Coordinate, fraction: f64) -> Coordinate {
        if fraction <= 0.0 {
            return self.clone();
        }
        if fraction >= 1.0 {
            return l.clone();
        }
        let d = self.central_angle_to(l);
        if d < f64::EPSILON {
            return self.clone();
        }

        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lon2 = l.longitude.to_radians();

        let a = ((1.0 - fraction) * d).sin() / d.sin();
        let b = (fraction * d).sin() / d.sin();
        let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
        let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
        let z = a * lat1.sin() + b * lat2.sin();

        let lat = z.atan2((x * x + y * y).sqrt());
        let lon = y.atan2(x);
        Coordinate::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Distance from this point to the great circle segment `pos1` to `pos2`.
    ///
    /// The cross track distance is positive when this point lies right of the
    /// course from `pos1` to `pos2`. When the foot of the perpendicular falls
    /// outside the segment the distance to the nearer end point is reported
    /// instead, with the matching status. A segment of zero length is a point
    /// and always reports [`LineDistanceStatus::AfterEnd`].
    pub fn distance_to_line(&self, pos1: &Coordinate, pos2: &Coordinate) -> LineDistance {
        if !self.is_valid() || !pos1.is_valid() || !pos2.is_valid() {
            return LineDistance::invalid();
        }

        let distance_from1 = pos1.distance_to(self);
        let distance_from2 = pos2.distance_to(self);
        let length = pos1.distance_to(pos2);

        if length < ZERO_LENGTH_NM {
            return LineDistance {
                status: LineDistanceStatus::AfterEnd,
                distance: distance_from1,
                distance_from1,
                distance_from2,
            };
        }

        let d13 = distance_from1 / Self::EARTH_RADIUS;
        let delta = pos1.bearing_to(self) - pos1.bearing_to(pos2);
        let cross_track = (d13.sin() * delta.sin()).asin();

        let mut along_track = ((d13.cos() / cross_track.cos()).clamp(-1.0, 1.0)).acos()
            * Self::EARTH_RADIUS;
        if delta.cos() < 0.0 {
            along_track = -along_track;
        }

        if along_track < 0.0 {
            LineDistance {
                status: LineDistanceStatus::BeforeStart,
                distance: distance_from1,
                distance_from1,
                distance_from2,
            }
        } else if along_track > length {
            LineDistance {
                status: LineDistanceStatus::AfterEnd,
                distance: distance_from2,
                distance_from1,
                distance_from2,
            }
        } else {
            LineDistance {
                status: LineDistanceStatus::AlongTrack,
                distance: cross_track * Self::EARTH_RADIUS,
                distance_from1,
                distance_from2,
            }
        }
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use crate::earth::line_distance::LineDistanceStatus;

    use super::Coordinate;

    #[test]
    fn test_construct() {
        let result = Coordinate::new(-34.0, 151.0);
        assert_eq!(result.get_latitude(), -34.0);
        assert_eq!(result.get_longitude(), 151.0);
        assert!(result.is_valid());
        assert!(!Coordinate::new(91.0, 151.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_distance_to() {
        let c1 = Coordinate::new(-34.0, 151.0);
        let c2 = Coordinate::new(-34.0, 151.0);
        assert_eq!(c1.distance_to(&c2), 0.0);
        let c1 = Coordinate::new(-34.0, 151.0);
        let c2 = Coordinate::new(-35.0, 151.0);
        assert_eq!(c1.distance_to(&c2).round(), 60.0);
        let c1 = Coordinate::new(-34.45, 150.50);
        let c2 = Coordinate::new(-34.18, 150.86);
        assert_eq!(c1.distance_to(&c2).round(), 24.0);
    }

    #[test]
    fn test_bearing_to_deg() {
        let c1 = Coordinate::new(-34.0, 151.0);
        let c2 = Coordinate::new(-35.0, 151.0);
        assert_eq!(c1.bearing_to_deg(&c2).round(), 180.0);
        let c1 = Coordinate::new(34.0, 151.0);
        let c2 = Coordinate::new(35.0, 151.0);
        assert_eq!(c1.bearing_to_deg(&c2).round(), 0.0);
        let c1 = Coordinate::new(0.0, 151.0);
        let c2 = Coordinate::new(0.0, 152.0);
        assert_eq!(c1.bearing_to_deg(&c2).round(), 90.0);
        let c2 = Coordinate::new(0.0, 150.0);
        assert_eq!(c1.bearing_to_deg(&c2).round(), 270.0);
        assert_eq!(c1.bearing_to_deg(&c1), 0.0);
    }

    #[test]
    fn test_coordinate_at() {
        let c1 = Coordinate::new(0.0, 151.0);
        let c2 = c1.coordinate_at(120.0, 60.0);
        assert!(is_between(c2.latitude, 0.99, 1.01));
        assert!(is_between(c2.longitude, 152.72, 152.74));

        let c1 = Coordinate::new(-34.0, 151.0);
        let c2 = c1.coordinate_at(120.0, 120.0);
        assert!(is_between(c2.latitude, -34.99, -34.97));
        assert!(is_between(c2.longitude, 153.10, 153.12));
    }

    #[test]
    fn test_interpolate() {
        let c1 = Coordinate::new(0.0, 10.0);
        let c2 = Coordinate::new(0.0, 12.0);
        assert_eq!(c1.interpolate(&c2, 0.0), c1);
        assert_eq!(c1.interpolate(&c2, 1.0), c2);
        let mid = c1.interpolate(&c2, 0.5);
        assert!(is_between(mid.latitude, -0.0001, 0.0001));
        assert!(is_between(mid.longitude, 10.9999, 11.0001));
    }

    #[test]
    fn test_distance_to_line() {
        let a = Coordinate::new(0.0, 0.0);
        let b = a.coordinate_at(10.0, 90.0);

        // South of an eastbound course is right of course
        let right = a.coordinate_at(5.0, 90.0).coordinate_at(2.0, 180.0);
        let result = right.distance_to_line(&a, &b);
        assert_eq!(result.status, LineDistanceStatus::AlongTrack);
        assert!(is_between(result.distance, 1.99, 2.01));

        let left = a.coordinate_at(5.0, 90.0).coordinate_at(2.0, 0.0);
        let result = left.distance_to_line(&a, &b);
        assert_eq!(result.status, LineDistanceStatus::AlongTrack);
        assert!(is_between(result.distance, -2.01, -1.99));

        let before = a.coordinate_at(3.0, 270.0);
        let result = before.distance_to_line(&a, &b);
        assert_eq!(result.status, LineDistanceStatus::BeforeStart);
        assert!(is_between(result.distance, 2.99, 3.01));

        let after = a.coordinate_at(14.0, 90.0);
        let result = after.distance_to_line(&a, &b);
        assert_eq!(result.status, LineDistanceStatus::AfterEnd);
        assert!(is_between(result.distance, 3.99, 4.01));
    }

    #[test]
    fn test_distance_to_point_line() {
        let a = Coordinate::new(10.0, 10.0);
        let p = a.coordinate_at(7.0, 45.0);
        let result = p.distance_to_line(&a, &a);
        assert_eq!(result.status, LineDistanceStatus::AfterEnd);
        assert!(is_between(result.distance, 6.99, 7.01));

        let invalid = Coordinate::new(f64::NAN, 0.0);
        assert_eq!(
            invalid.distance_to_line(&a, &a).status,
            LineDistanceStatus::Invalid
        );
    }

    fn is_between(variable: f64, bottom: f64, top: f64) -> bool {
        let result = variable >= bottom && variable <= top;
        if !result {
            println!("Variable {} not between {} and {}", variable, bottom, top);
        }
        result
    }
}

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

use crate::earth::coordinate::Coordinate;
use crate::model::route_leg::RouteLeg;
use crate::util::distance_format::DistanceFormat;

use super::Route;

/// Progress along the route for the last position sample, in nautical miles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistances {
    pub from_start: f64,
    pub to_destination: f64,
    pub to_next_leg: f64,
    /// Signed cross track distance, only while abeam the active leg.
    pub cross_track: Option<f64>,
}

impl RouteDistances {
    pub fn describe(&self, format: &DistanceFormat) -> String {
        format!(
            "From start {}, to destination {}, to next {}, cross track {}",
            format.format(&self.from_start),
            format.format(&self.to_destination),
            format.format(&self.to_next_leg),
            format.format_option(self.cross_track)
        )
    }
}

impl Route {
    /// Distances for the active leg and position. Missed approach legs only
    /// count once the missed approach is being flown.
    pub fn route_distances(&self) -> Option<RouteDistances> {
        let active = self.active_leg?;
        if !self.active_pos.is_valid() || self.legs.is_empty() {
            return None;
        }
        let index = active.min(self.legs.len() - 1);
        let leg = &self.legs[index];
        let pos = self.active_pos.get_pos();

        let (to_next_leg, cross_track) = if leg.is_any_procedure() && leg.get_geometry().len() > 2 {
            let result = leg.get_geometry().distance_to_line_string(pos);
            (result.distance_from2, result.is_along_track().then_some(result.distance))
        } else {
            let result = &self.active_leg_result;
            (
                leg.get_position().distance_to(pos),
                result.is_along_track().then_some(result.distance),
            )
        };

        let active_is_missed = leg.is_missed();
        let counts = |l: &&RouteLeg| active_is_missed || !l.is_missed();

        let flown: f64 = self.legs[..=index]
            .iter()
            .filter(counts)
            .map(|l| l.get_distance_to())
            .sum();
        let from_start = (flown - to_next_leg).abs();

        let remaining: f64 = self.legs[index + 1..]
            .iter()
            .filter(counts)
            .map(|l| l.get_distance_to())
            .sum();
        let to_destination = remaining + to_next_leg;

        Some(RouteDistances {
            from_start,
            to_destination,
            to_next_leg,
            cross_track,
        })
    }

    /// Top of descent as distance before the destination.
    pub fn top_of_descent_from_destination(&self) -> f64 {
        let Some(last) = self.legs.last() else {
            return 0.0;
        };
        let cruise_altitude = self.plan.get_plan_altitude() as f64;
        (cruise_altitude - last.get_altitude()) * self.config.descent_nm_per_foot()
    }

    /// Top of descent as distance from the departure.
    pub fn top_of_descent_from_start(&self) -> f64 {
        if self.legs.is_empty() {
            return 0.0;
        }
        self.total_distance - self.top_of_descent_from_destination()
    }

    pub fn top_of_descent(&self) -> Option<Coordinate> {
        self.position_at_distance(self.top_of_descent_from_start())
    }

    /// Position on the route `distance` nautical miles after the departure.
    pub fn position_at_distance(&self, distance: f64) -> Option<Coordinate> {
        if self.legs.is_empty() || !(0.0..=self.total_distance).contains(&distance) {
            return None;
        }
        if distance == 0.0 || self.legs.len() == 1 {
            return self.legs.first().map(|l| l.get_position().clone());
        }

        let mut total = 0.0;
        let mut found = None;
        for (i, leg) in self.legs.iter().enumerate().skip(1) {
            total += leg.get_distance_to();
            if total > distance {
                found = Some(i);
                break;
            }
        }
        let Some(found) = found else {
            return self.last_counted_position();
        };

        // Approach points carry no distance and never contain the position
        let leg = &self.legs[found];
        let leg_distance = leg.get_distance_to();
        let fraction = (distance - (total - leg_distance)) / leg_distance;
        if leg.is_any_procedure() {
            leg.get_geometry().interpolate(fraction)
        } else {
            let from = self.legs[found - 1].get_position();
            Some(from.interpolate(leg.get_position(), fraction))
        }
    }

    fn last_counted_position(&self) -> Option<Coordinate> {
        self.legs
            .iter()
            .enumerate()
            .rev()
            .find(|(i, l)| !l.is_missed() && !self.is_airport_after_arrival(*i))
            .map(|(_, l)| l.get_position().clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::earth::coordinate::Coordinate;
    use crate::earth::pos_course::PosCourse;
    use crate::model::aircraft::Aircraft;
    use crate::model::plan::PlanInfo;
    use crate::model::procedure::{ProcedureKind, ProcedureLegType};
    use crate::model::test_utils::{
        approach, equator_points, hold_leg, make_airport, plan_info, procedure_leg, procedure_waypoint,
        straight_route, user_waypoint,
    };
    use crate::model::waypoint::Waypoint;
    use crate::preference::TrackerConfig;
    use crate::route::Route;
    use crate::util::distance_format::DistanceFormat;
    use crate::util::units::DistanceUnit;

    fn at(along_nm: f64, right_nm: f64) -> PosCourse {
        let on_track = Coordinate::new(0.0, 0.0).coordinate_at(along_nm, 90.0);
        PosCourse::new(on_track.coordinate_at(right_nm, 180.0), 90.0)
    }

    #[test]
    fn test_distances_on_track() {
        let mut route = straight_route(4, 10.0);
        assert!(route.route_distances().is_none());

        for along in [1.0, 4.5, 12.0, 19.0, 27.5] {
            route.update_active_leg_and_pos(&at(along, 0.0));
            let d = route.route_distances().unwrap();
            assert!((d.from_start - along).abs() < 0.01);
            assert!((d.from_start + d.to_destination - route.get_total_distance()).abs() < 0.01);
            assert!(d.cross_track.unwrap().abs() < 0.01);
        }

        let mut route = straight_route(4, 10.0);
        route.update_active_leg_and_pos(&at(12.0, 0.0));
        let d = route.route_distances().unwrap();
        assert_eq!(route.active_leg_index(), Some(2));
        assert!((d.to_next_leg - 8.0).abs() < 0.01);
    }

    #[test]
    fn test_cross_track() {
        let mut route = straight_route(3, 10.0);
        route.update_active_leg_and_pos(&at(5.0, 2.0));
        let d = route.route_distances().unwrap();
        assert!((d.cross_track.unwrap() - 2.0).abs() < 0.01);

        // Past the end of the route, no longer abeam
        route.update_active_leg_and_pos(&at(25.0, 0.0));
        let d = route.route_distances().unwrap();
        assert_eq!(d.cross_track, None);
        assert!((d.to_next_leg - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_missed_distances() {
        let points = equator_points(4, 10.0);
        let mut legs = approach(&points[1..3]).get_legs().to_vec();
        legs.push(procedure_leg(
            "MA1",
            ProcedureKind::Missed,
            ProcedureLegType::CourseToFix,
            &points[2],
            &points[3],
        ));
        let mut waypoints = vec![user_waypoint("WP1", points[0].clone())];
        waypoints.extend(legs.into_iter().map(procedure_waypoint));
        let mut route = Route::new(plan_info(), waypoints, TrackerConfig::default());
        assert!((route.get_total_distance() - 20.0).abs() < 0.001);

        route.update_active_leg_and_pos(&at(15.0, 0.0));
        let d = route.route_distances().unwrap();
        assert!((d.to_destination - 5.0).abs() < 0.01);
        assert!((d.from_start - 15.0).abs() < 0.01);

        route.update_active_leg_and_pos(&at(25.0, 0.0));
        assert!(route.is_active_missed());
        let d = route.route_distances().unwrap();
        assert!((d.to_destination - 5.0).abs() < 0.01);
        assert!((d.from_start - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_distances_in_hold() {
        let points = equator_points(3, 10.0);
        let hold = hold_leg("HOLD", ProcedureKind::Approach, &points[1], 90.0);
        let hold_length = hold.get_calculated_distance();
        let waypoints = vec![
            user_waypoint("WP1", points[0].clone()),
            user_waypoint("WP2", points[1].clone()),
            procedure_waypoint(hold),
            user_waypoint("WP3", points[2].clone()),
        ];
        let mut route = Route::new(plan_info(), waypoints, TrackerConfig::default());
        route.set_active_leg(2);
        // Abeam the fix on the outbound side
        let abeam = points[1].coordinate_at(2.0, 180.0);
        route.update_active_leg_and_pos(&PosCourse::new(abeam, 180.0));
        assert_eq!(route.active_leg_index(), Some(2));

        let d = route.route_distances().unwrap();
        assert!(d.to_next_leg > 0.0 && d.to_next_leg < hold_length);
        assert!((d.to_destination - (d.to_next_leg + 10.0)).abs() < 0.01);
    }

    #[test]
    fn test_position_at_distance() {
        let route = straight_route(4, 10.0);
        let points = equator_points(4, 10.0);

        assert!(route.position_at_distance(0.0).unwrap().almost_equal(&points[0]));
        let total = route.get_total_distance();
        assert!(route.position_at_distance(total).unwrap().almost_equal(&points[3]));
        assert!(route.position_at_distance(30.1).is_none());
        assert!(route.position_at_distance(-0.1).is_none());
        assert!(route.position_at_distance(f64::NAN).is_none());

        let p = route.position_at_distance(15.0).unwrap();
        assert!(p.distance_to(&points[0].coordinate_at(15.0, 90.0)) < 0.001);

        let empty = Route::new(plan_info(), vec![], TrackerConfig::default());
        assert!(empty.position_at_distance(0.0).is_none());
    }

    #[test]
    fn test_position_on_procedure() {
        let points = equator_points(3, 10.0);
        let mut waypoints = vec![user_waypoint("WP1", points[0].clone())];
        waypoints.extend(approach(&points[1..3]).get_legs().iter().cloned().map(procedure_waypoint));
        let route = Route::new(plan_info(), waypoints, TrackerConfig::default());
        // WP1, IF, AP1
        assert!((route.get_total_distance() - 20.0).abs() < 0.001);
        let p = route.position_at_distance(15.0).unwrap();
        assert!(p.distance_to(&points[0].coordinate_at(15.0, 90.0)) < 0.001);
        let p = route.position_at_distance(5.0).unwrap();
        assert!(p.distance_to(&points[0].coordinate_at(5.0, 90.0)) < 0.001);
    }

    #[test]
    fn test_position_in_hold() {
        let points = equator_points(3, 10.0);
        let hold = hold_leg("HOLD", ProcedureKind::Approach, &points[1], 90.0);
        let hold_length = hold.get_calculated_distance();
        let waypoints = vec![
            user_waypoint("WP1", points[0].clone()),
            user_waypoint("WP2", points[1].clone()),
            procedure_waypoint(hold),
            user_waypoint("WP3", points[2].clone()),
        ];
        let route = Route::new(plan_info(), waypoints, TrackerConfig::default());
        assert!((route.get_total_distance() - (20.0 + hold_length)).abs() < 0.001);

        // Entering the hold at its fix
        let p = route.position_at_distance(10.0).unwrap();
        assert!(p.distance_to(&points[1]) < 0.001);
        // Two miles into the racetrack is abeam the fix
        let p = route.position_at_distance(12.0).unwrap();
        assert!(p.distance_to(&points[1].coordinate_at(2.0, 180.0)) < 0.001);
        // Past the hold, back on the straight leg to WP3
        let p = route.position_at_distance(15.0 + hold_length).unwrap();
        assert!(p.distance_to(&points[1].coordinate_at(5.0, 90.0)) < 0.001);
    }

    #[test]
    fn test_top_of_descent() {
        let points = equator_points(4, 30.0);
        let waypoints = vec![
            user_waypoint("WP1", points[0].clone()),
            user_waypoint("WP2", points[1].clone()),
            user_waypoint("WP3", points[2].clone()),
            Waypoint::Airport {
                airport: make_airport("YMML", points[3].get_latitude(), points[3].get_longitude()),
            },
        ];
        let plan = PlanInfo::new(Some(Aircraft::new("C172".to_string(), 9000)), 10021);
        let route = Route::new(plan, waypoints, TrackerConfig::default());

        // 10000ft above the airport at 3nm per 1000ft
        assert!((route.top_of_descent_from_destination() - 30.0).abs() < 0.001);
        assert!((route.top_of_descent_from_start() - 60.0).abs() < 0.001);
        assert!(route.top_of_descent().unwrap().distance_to(&points[2]) < 0.001);

        let empty = Route::new(plan_info(), vec![], TrackerConfig::default());
        assert_eq!(empty.top_of_descent_from_destination(), 0.0);
        assert_eq!(empty.top_of_descent_from_start(), 0.0);
    }

    #[test]
    fn test_top_of_descent_before_departure() {
        // Descent longer than the route
        let route = straight_route(2, 10.0);
        assert!(route.top_of_descent_from_start() < 0.0);
        assert!(route.top_of_descent().is_none());
    }

    #[test]
    fn test_describe() {
        let mut route = straight_route(3, 10.0);
        route.update_active_leg_and_pos(&at(5.0, 0.0));
        let text = route
            .route_distances()
            .unwrap()
            .describe(&DistanceFormat::new(DistanceUnit::Nm));
        assert!(text.starts_with("From start 5.0Nm, to destination 15.0Nm, to next 5.0Nm"));
    }
}

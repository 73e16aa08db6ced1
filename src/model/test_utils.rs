use crate::earth::coordinate::Coordinate;
use crate::model::aircraft::Aircraft;
use crate::model::plan::PlanInfo;
use crate::model::procedure::{Procedure, ProcedureKind, ProcedureLeg, ProcedureLegType, TurnDirection};
use crate::model::waypoint::Waypoint;
use crate::preference::TrackerConfig;
use crate::route::Route;

use super::airport::Airport;
use super::fix::Fix;

pub fn make_airport(id: &str, latitude: f64, longitude: f64) -> Airport {
    Airport::new(
        id.to_string(),
        latitude,
        longitude,
        21.0,
        Some(12.5),
        "Sydney".to_string(),
    )
}

pub fn make_fix(id: &str, latitude: f64, longitude: f64) -> Fix {
    Fix::new(id.to_string(), latitude, longitude, None)
}

pub fn user_waypoint(id: &str, loc: Coordinate) -> Waypoint {
    Waypoint::User {
        id: id.to_string(),
        loc,
        elevation: 0.0,
    }
}

/// Points spaced `leg_nm` apart flying east along the equator from 0/0.
pub fn equator_points(count: usize, leg_nm: f64) -> Vec<Coordinate> {
    let start = Coordinate::new(0.0, 0.0);
    (0..count)
        .map(|i| start.coordinate_at(leg_nm * i as f64, 90.0))
        .collect()
}

pub fn plan_info() -> PlanInfo {
    PlanInfo::new(Some(Aircraft::new("C172".to_string(), 9000)), 0)
}

/// Straight eastbound route of user waypoints.
pub fn straight_route(count: usize, leg_nm: f64) -> Route {
    let waypoints = equator_points(count, leg_nm)
        .into_iter()
        .enumerate()
        .map(|(i, p)| user_waypoint(&format!("WP{}", i + 1), p))
        .collect();
    Route::new(plan_info(), waypoints, TrackerConfig::default())
}

pub fn procedure_leg(
    ident: &str,
    kind: ProcedureKind,
    leg_type: ProcedureLegType,
    start: &Coordinate,
    end: &Coordinate,
) -> ProcedureLeg {
    ProcedureLeg::new(ident.to_string(), kind, leg_type, start.clone(), end.clone())
}

pub fn procedure_waypoint(leg: ProcedureLeg) -> Waypoint {
    Waypoint::Procedure { leg }
}

/// A right hand racetrack hold at `fix` with the inbound course given.
pub fn hold_leg(ident: &str, kind: ProcedureKind, fix: &Coordinate, inbound: f64) -> ProcedureLeg {
    let outbound = (inbound + 180.0) % 360.0;
    let abeam = fix.coordinate_at(2.0, inbound + 90.0);
    let outbound_end = abeam.coordinate_at(4.0, outbound);
    let inbound_start = fix.coordinate_at(4.0, outbound);
    let geometry = crate::earth::line_string::LineString::new(vec![
        fix.clone(),
        abeam.clone(),
        outbound_end,
        inbound_start,
        fix.clone(),
    ]);
    let length = geometry.length();
    procedure_leg(ident, kind, ProcedureLegType::HoldToManualTermination, fix, fix)
        .with_geometry(geometry, length)
        .with_hold(TurnDirection::Right, None)
}

/// Straight approach with an initial fix followed by track to fix legs
/// between the given points.
pub fn approach(points: &[Coordinate]) -> Procedure {
    let mut legs = vec![procedure_leg(
        "IF",
        ProcedureKind::Approach,
        ProcedureLegType::InitialFix,
        &points[0],
        &points[0],
    )];
    for (i, w) in points.windows(2).enumerate() {
        legs.push(procedure_leg(
            &format!("AP{}", i + 1),
            ProcedureKind::Approach,
            ProcedureLegType::TrackToFix,
            &w[0],
            &w[1],
        ));
    }
    Procedure::new("RNAV".to_string(), legs)
}

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

//! The route: a flat, ordered list of legs from departure to destination
//! with procedure blocks spliced in, plus the active leg tracking state.

use log::{info, warn};
use regex_lite::Regex;
use thiserror::Error;

use crate::earth::bounding_rect::BoundingRect;
use crate::earth::line_distance::LineDistance;
use crate::earth::pos_course::PosCourse;
use crate::model::plan::PlanInfo;
use crate::model::procedure::{Procedure, ProcedureLeg, ProcedureTypes};
use crate::model::route_leg::RouteLeg;
use crate::model::waypoint::Waypoint;
use crate::preference::TrackerConfig;

pub mod distance;
pub mod nearest;
pub mod tracker;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("Index {index} is out of range for {len} legs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Procedure legs can only be attached as part of a procedure")]
    ProcedureWaypoint,
    #[error("Procedure {0} has no legs")]
    EmptyProcedure(String),
    #[error("Procedure {ident} contains legs that are not {expected:?}")]
    WrongProcedureKind { ident: String, expected: ProcedureTypes },
    #[error("A route needs a departure and a destination before procedures can be attached")]
    TooFewLegs,
}

#[derive(Debug, Clone)]
pub struct Route {
    legs: Vec<RouteLeg>,
    plan: PlanInfo,
    config: TrackerConfig,

    total_distance: f64,
    bounding_rect: Option<BoundingRect>,
    true_course: bool,

    departure_procedure: Option<Procedure>,
    star_procedure: Option<Procedure>,
    approach_procedure: Option<Procedure>,
    transition_procedure: Option<Procedure>,
    departure_legs_offset: Option<usize>,
    star_legs_offset: Option<usize>,
    arrival_legs_offset: Option<usize>,

    active_leg: Option<usize>,
    active_pos: PosCourse,
    active_leg_result: LineDistance,
}

impl Route {
    pub fn new(plan: PlanInfo, waypoints: Vec<Waypoint>, config: TrackerConfig) -> Self {
        let mut route = Self {
            legs: waypoints.into_iter().map(RouteLeg::new).collect(),
            plan,
            config,
            total_distance: 0.0,
            bounding_rect: None,
            true_course: true,
            departure_procedure: None,
            star_procedure: None,
            approach_procedure: None,
            transition_procedure: None,
            departure_legs_offset: None,
            star_legs_offset: None,
            arrival_legs_offset: None,
            active_leg: None,
            active_pos: PosCourse::invalid(),
            active_leg_result: LineDistance::invalid(),
        };
        route.update_all();
        route
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn get_legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    pub fn get_leg(&self, index: usize) -> Option<&RouteLeg> {
        self.legs.get(index)
    }

    pub fn get_plan(&self) -> &PlanInfo {
        &self.plan
    }

    pub fn set_plan(&mut self, plan: PlanInfo) {
        self.plan = plan;
    }

    pub fn get_config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrackerConfig) {
        self.config = config;
    }

    /// Total distance in nautical miles, missed approach legs excluded.
    pub fn get_total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn get_bounding_rect(&self) -> Option<&BoundingRect> {
        self.bounding_rect.as_ref()
    }

    /// True if no leg has a magnetic variation source, so courses are shown true.
    pub fn is_true_course(&self) -> bool {
        self.true_course
    }

    /// Course to the leg at `index`, magnetic unless the route is flown on true courses.
    pub fn course_to(&self, index: usize) -> Option<f64> {
        let leg = self.legs.get(index)?;
        if self.true_course {
            Some(leg.get_course_to())
        } else {
            Some(leg.get_course_to_mag())
        }
    }

    pub fn get_departure_legs_offset(&self) -> Option<usize> {
        self.departure_legs_offset
    }

    pub fn get_star_legs_offset(&self) -> Option<usize> {
        self.star_legs_offset
    }

    pub fn get_arrival_legs_offset(&self) -> Option<usize> {
        self.arrival_legs_offset
    }

    pub fn has_departure_procedure(&self) -> bool {
        self.departure_procedure.is_some()
    }

    pub fn has_star_procedure(&self) -> bool {
        self.star_procedure.is_some()
    }

    pub fn has_arrival_procedure(&self) -> bool {
        self.approach_procedure.is_some()
    }

    pub fn has_transition_procedure(&self) -> bool {
        self.transition_procedure.is_some()
    }

    pub fn has_valid_departure(&self) -> bool {
        self.legs.first().is_some_and(|l| l.get_waypoint().is_airport())
    }

    pub fn has_valid_destination(&self) -> bool {
        self.legs.len() > 1 && self.legs.last().is_some_and(|l| l.get_waypoint().is_airport())
    }

    /// The destination airport following an arrival or STAR. It adds no
    /// distance since the procedure already ends at the runway.
    pub fn is_airport_after_arrival(&self, index: usize) -> bool {
        (self.has_arrival_procedure() || self.has_star_procedure())
            && index + 1 == self.legs.len()
            && self.legs[index].get_waypoint().is_airport()
    }

    /// Number for the next user waypoint named like `WP12`.
    pub fn next_user_waypoint_number(&self) -> u32 {
        let user_wp_id = match Regex::new(r"^WP([0-9]+)$") {
            Ok(re) => re,
            Err(e) => {
                warn!("{}", e);
                return 1;
            }
        };

        let next_num = self
            .legs
            .iter()
            .filter(|l| l.get_waypoint().is_user())
            .filter_map(|l| user_wp_id.captures(l.get_ident()))
            .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
            .max()
            .unwrap_or(0);
        next_num + 1
    }

    /// Insert an en route waypoint. `index` counts only legs that are not
    /// part of a procedure, procedure blocks are placed around them again.
    pub fn insert_leg(&mut self, index: usize, waypoint: Waypoint) -> Result<(), RouteError> {
        if waypoint.get_procedure_leg().is_some() {
            return Err(RouteError::ProcedureWaypoint);
        }
        self.erase_procedure_legs(ProcedureTypes::ALL);
        if index > self.legs.len() {
            let len = self.legs.len();
            self.update_procedure_legs();
            return Err(RouteError::IndexOutOfRange { index, len });
        }
        self.legs.insert(index, RouteLeg::new(waypoint));
        self.update_procedure_legs();
        Ok(())
    }

    /// Remove an en route waypoint, `index` counted as for [`Route::insert_leg`].
    pub fn remove_leg(&mut self, index: usize) -> Result<RouteLeg, RouteError> {
        self.erase_procedure_legs(ProcedureTypes::ALL);
        if index >= self.legs.len() {
            let len = self.legs.len();
            self.update_procedure_legs();
            return Err(RouteError::IndexOutOfRange { index, len });
        }
        let removed = self.legs.remove(index);
        self.update_procedure_legs();
        Ok(removed)
    }

    pub fn set_departure_procedure(&mut self, procedure: Procedure) -> Result<(), RouteError> {
        self.check_procedure(&procedure, ProcedureTypes::SID)?;
        self.departure_procedure = Some(procedure);
        self.update_procedure_legs();
        Ok(())
    }

    pub fn set_star_procedure(&mut self, procedure: Procedure) -> Result<(), RouteError> {
        self.check_procedure(&procedure, ProcedureTypes::STAR)?;
        self.star_procedure = Some(procedure);
        self.update_procedure_legs();
        Ok(())
    }

    /// Attach an approach, including its missed approach legs, and an
    /// optional transition flown before it.
    pub fn set_arrival_procedure(
        &mut self,
        approach: Procedure,
        transition: Option<Procedure>,
    ) -> Result<(), RouteError> {
        self.check_procedure(&approach, ProcedureTypes::APPROACH | ProcedureTypes::MISSED)?;
        if let Some(transition) = &transition {
            self.check_procedure(transition, ProcedureTypes::TRANSITION)?;
        }
        self.approach_procedure = Some(approach);
        self.transition_procedure = transition;
        self.update_procedure_legs();
        Ok(())
    }

    fn check_procedure(&self, procedure: &Procedure, expected: ProcedureTypes) -> Result<(), RouteError> {
        if self.legs.iter().filter(|l| !l.is_any_procedure()).count() < 2 {
            return Err(RouteError::TooFewLegs);
        }
        if procedure.is_empty() {
            return Err(RouteError::EmptyProcedure(procedure.get_ident().to_string()));
        }
        if !procedure.has_only(expected) {
            return Err(RouteError::WrongProcedureKind {
                ident: procedure.get_ident().to_string(),
                expected,
            });
        }
        Ok(())
    }

    pub fn clear_all_procedures(&mut self) {
        self.departure_procedure = None;
        self.star_procedure = None;
        self.approach_procedure = None;
        self.transition_procedure = None;
        self.update_procedure_legs();
    }

    pub fn clear_departure_procedure(&mut self) {
        if self.departure_procedure.take().is_some() {
            self.update_procedure_legs();
        }
    }

    pub fn clear_star_procedure(&mut self) {
        if self.star_procedure.take().is_some() {
            self.update_procedure_legs();
        }
    }

    pub fn clear_transition_procedure(&mut self) {
        if self.transition_procedure.take().is_some() {
            self.update_procedure_legs();
        }
    }

    pub fn clear_approach_and_transition_procedure(&mut self) {
        if self.approach_procedure.take().is_some() {
            self.transition_procedure = None;
            self.update_procedure_legs();
        }
    }

    /// Remove all procedure legs and splice the attached procedures back in:
    /// the departure after the first leg, STAR and arrival before the last.
    pub fn update_procedure_legs(&mut self) {
        self.erase_procedure_legs(ProcedureTypes::ALL);

        self.departure_legs_offset = None;
        self.star_legs_offset = None;
        self.arrival_legs_offset = None;

        if self.legs.len() < 2 {
            if self.departure_procedure.is_some()
                || self.star_procedure.is_some()
                || self.approach_procedure.is_some()
            {
                warn!("Procedures not inserted, route has {} legs", self.legs.len());
            }
            self.update_all();
            return;
        }

        if let Some(departure) = &self.departure_procedure {
            self.departure_legs_offset = Some(1);
            for (i, leg) in departure.get_legs().iter().enumerate() {
                self.legs.insert(1 + i, procedure_route_leg(leg));
            }
        }

        let star_legs: Vec<ProcedureLeg> = self
            .star_procedure
            .iter()
            .flat_map(|p| p.get_legs().iter().cloned())
            .collect();
        if !star_legs.is_empty() {
            self.star_legs_offset = Some(self.legs.len() - 1);
            self.insert_before_destination(&star_legs);
        }

        let arrival_legs: Vec<ProcedureLeg> = self
            .transition_procedure
            .iter()
            .chain(self.approach_procedure.iter())
            .flat_map(|p| p.get_legs().iter().cloned())
            .collect();
        if !arrival_legs.is_empty() {
            self.arrival_legs_offset = Some(self.legs.len() - 1);
            self.insert_before_destination(&arrival_legs);
        }

        info!(
            "Procedure legs updated: departure {:?}, STAR {:?}, arrival {:?}",
            self.departure_legs_offset, self.star_legs_offset, self.arrival_legs_offset
        );
        self.update_all();
    }

    fn insert_before_destination(&mut self, legs: &[ProcedureLeg]) {
        for leg in legs {
            let at = self.legs.len() - 1;
            self.legs.insert(at, procedure_route_leg(leg));
        }
    }

    /// Remove every procedure leg whose kind is in `types`. Indices are not
    /// updated, call [`Route::update_all`] afterwards.
    pub fn erase_procedure_legs(&mut self, types: ProcedureTypes) {
        self.legs.retain(|leg| !leg.is_procedure_of(types));
    }

    /// Recalculate everything derived from the leg list.
    pub fn update_all(&mut self) {
        self.update_indices();
        self.update_magvar();
        self.update_distances_and_course();
        self.update_bounding_rect();
        self.clamp_active_leg();
    }

    pub fn update_indices(&mut self) {
        for (i, leg) in self.legs.iter_mut().enumerate() {
            leg.set_index(i);
        }
    }

    /// Take the variation from the database objects, then fill the gaps from
    /// the nearest leg that has one, looking backwards first.
    pub fn update_magvar(&mut self) {
        for leg in self.legs.iter_mut() {
            leg.update_mag_var();
        }

        let sources: Vec<Option<f64>> = self
            .legs
            .iter()
            .map(|l| l.get_waypoint().get_mag_var())
            .collect();

        for (i, leg) in self.legs.iter_mut().enumerate() {
            if leg.has_valid_mag_var() {
                continue;
            }
            let nearest = (1..sources.len()).find_map(|k| {
                let before = i.checked_sub(k).and_then(|j| sources[j]);
                before.or_else(|| sources.get(i + k).copied().flatten())
            });
            leg.set_mag_var(nearest);
        }

        self.true_course = !self.legs.iter().any(|l| l.has_mag_var_source());
    }

    pub fn update_distances_and_course(&mut self) {
        self.total_distance = 0.0;
        for i in 0..self.legs.len() {
            if self.is_airport_after_arrival(i) {
                self.legs[i].clear_distance_and_course();
                break;
            }
            let (before, rest) = self.legs.split_at_mut(i);
            let leg = &mut rest[0];
            leg.update_distance_and_course(before.last());
            if !leg.is_missed() {
                self.total_distance += leg.get_distance_to();
            }
        }
    }

    pub fn update_bounding_rect(&mut self) {
        self.bounding_rect = BoundingRect::from_coordinates(self.legs.iter().map(|l| l.get_position()));
    }

    fn clamp_active_leg(&mut self) {
        if self.legs.is_empty() {
            self.reset_active();
        } else if let Some(active) = self.active_leg {
            if active >= self.legs.len() {
                self.active_leg = Some(self.legs.len() - 1);
            }
        }
    }
}

fn procedure_route_leg(leg: &ProcedureLeg) -> RouteLeg {
    RouteLeg::new(Waypoint::Procedure { leg: leg.clone() })
}

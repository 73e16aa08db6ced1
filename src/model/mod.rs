pub mod aircraft;
pub mod airport;
pub mod fix;
pub mod location;
pub mod navaid;
pub mod plan;
pub mod procedure;
pub mod route_leg;
pub mod waypoint;

#[cfg(test)]
pub(crate) mod test_utils;

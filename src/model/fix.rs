use super::location::Location;
use crate::earth::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    id: String,
    coordinate: Coordinate,
    mag_var: Option<f64>,
}

impl Fix {
    pub fn new(id: String, latitude: f64, longitude: f64, mag_var: Option<f64>) -> Self {
        Self {
            id,
            coordinate: Coordinate::new(latitude, longitude),
            mag_var,
        }
    }
}

impl Location for Fix {
    fn get_elevation(&self) -> f64 {
        0.0
    }

    fn get_id(&self) -> &str {
        self.id.as_str()
    }

    fn get_loc(&self) -> &Coordinate {
        &self.coordinate
    }

    fn get_name(&self) -> &str {
        ""
    }

    fn get_mag_var(&self) -> Option<f64> {
        self.mag_var
    }
}

/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */
use super::units::DistanceUnit;

pub struct DistanceFormat {
    unit: DistanceUnit,
}

impl DistanceFormat {
    pub fn new(unit: DistanceUnit) -> Self {
        Self { unit }
    }

    /// Format a distance given in nautical miles.
    pub fn format(&self, distance: &f64) -> String {
        let converted_distance = self.unit.from_nm(*distance);
        format!("{:.1}{}", converted_distance, self.unit.get_name())
    }

    /// Like [`DistanceFormat::format`] but shows a dash where no value is available.
    pub fn format_option(&self, distance: Option<f64>) -> String {
        match distance {
            Some(d) => self.format(&d),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::util::units::DistanceUnit;

    use super::DistanceFormat;

    #[test]
    fn test_fmt_distance() {
        assert_eq!(DistanceFormat::new(DistanceUnit::Nm).format(&35.0), "35.0Nm");
        assert_eq!(DistanceFormat::new(DistanceUnit::Mi).format(&34.0), "39.1Mi");
        assert_eq!(DistanceFormat::new(DistanceUnit::Km).format(&34.0), "63.0Km");
        assert_eq!(DistanceFormat::new(DistanceUnit::Nm).format_option(None), "-");
    }
}

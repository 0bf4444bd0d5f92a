use crate::domain::model::VehicleRecord;

/// Fleet-wide maxima used as denominators for the performance score.
/// A zero maximum is stored as 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetMaxima {
    pub horsepower: f64,
    pub engine_capacity: f64,
    pub cylinders: f64,
}

impl FleetMaxima {
    /// Returns `None` for an empty fleet.
    pub fn from_vehicles(vehicles: &[VehicleRecord]) -> Option<Self> {
        if vehicles.is_empty() {
            return None;
        }

        let horsepower = vehicles.iter().map(|v| v.horsepower).max().unwrap_or(0);
        let cylinders = vehicles.iter().map(|v| v.cylinders).max().unwrap_or(0);
        let engine_capacity = vehicles
            .iter()
            .map(|v| v.engine_capacity)
            .fold(0.0_f64, f64::max);

        let mut degenerate = Vec::new();
        if horsepower == 0 {
            degenerate.push("horsepower");
        }
        if engine_capacity <= 0.0 {
            degenerate.push("engine_capacity");
        }
        if cylinders == 0 {
            degenerate.push("cylinders");
        }
        if !degenerate.is_empty() {
            tracing::warn!(
                "⚠️ Fleet maximum is zero for {}, substituting 1",
                degenerate.join(", ")
            );
        }

        Some(Self {
            horsepower: or_one(f64::from(horsepower)),
            engine_capacity: or_one(engine_capacity),
            cylinders: or_one(f64::from(cylinders)),
        })
    }
}

fn or_one(max: f64) -> f64 {
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

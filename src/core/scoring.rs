use crate::core::normalizer::FleetMaxima;
use crate::domain::model::{InteriorRecord, VehicleRecord};

pub const HORSEPOWER_WEIGHT: f64 = 40.0;
pub const ENGINE_WEIGHT: f64 = 30.0;
pub const CYLINDER_WEIGHT: f64 = 30.0;

pub const LEATHER_POINTS: f64 = 20.0;
pub const VENTILATED_POINTS: f64 = 15.0;
pub const HEATED_STEERING_POINTS: f64 = 10.0;
/// Two points per inch of screen, capped.
pub const INFOTAINMENT_POINTS_PER_INCH: f64 = 2.0;
pub const INFOTAINMENT_MAX_POINTS: f64 = 20.0;

/// 0–100 weighted against the fleet maxima.
pub fn performance_score(vehicle: &VehicleRecord, maxima: &FleetMaxima) -> f64 {
    f64::from(vehicle.horsepower) / maxima.horsepower * HORSEPOWER_WEIGHT
        + vehicle.engine_capacity / maxima.engine_capacity * ENGINE_WEIGHT
        + f64::from(vehicle.cylinders) / maxima.cylinders * CYLINDER_WEIGHT
}

/// 0–65; no interior scores 0. Climate control is not part of the score.
pub fn interior_score(interior: Option<&InteriorRecord>) -> f64 {
    let Some(interior) = interior else {
        return 0.0;
    };

    let flag = |on: bool, points: f64| if on { points } else { 0.0 };
    let screen = (interior.infotainment_size * INFOTAINMENT_POINTS_PER_INCH)
        .clamp(0.0, INFOTAINMENT_MAX_POINTS);

    flag(interior.leather_seats, LEATHER_POINTS)
        + flag(interior.ventilated_seats, VENTILATED_POINTS)
        + flag(interior.heated_steering, HEATED_STEERING_POINTS)
        + screen
}

/// Quality points per 1000 of total cost.
pub fn value_score(performance: f64, interior: f64, total_cost: f64) -> f64 {
    if total_cost > 0.0 {
        (performance + interior) / (total_cost / 1000.0)
    } else {
        0.0
    }
}

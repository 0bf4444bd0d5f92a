use crate::core::amortization::amortize;
use crate::core::normalizer::FleetMaxima;
use crate::core::ranker::{rank, RankingKey};
use crate::core::scoring::{interior_score, performance_score, value_score};
use crate::domain::model::{RankedResults, ScoredResult, SkippedVehicle, VehicleRecord};
use crate::utils::error::{RankError, Result};

/// Scores every vehicle that can be scored. A vehicle-level failure
/// (no finance, bad loan term) lands in the skipped list instead of
/// failing the batch.
pub fn score_fleet(vehicles: &[VehicleRecord]) -> (Vec<ScoredResult<'_>>, Vec<SkippedVehicle>) {
    let Some(maxima) = FleetMaxima::from_vehicles(vehicles) else {
        return (Vec::new(), Vec::new());
    };

    let mut scored = Vec::with_capacity(vehicles.len());
    let mut skipped = Vec::new();

    for vehicle in vehicles {
        match score_vehicle(vehicle, &maxima) {
            Ok(result) => scored.push(result),
            Err(e) => {
                tracing::warn!("⏭️ Skipping vehicle {} ({}): {}", vehicle.id, vehicle.company, e);
                skipped.push(SkippedVehicle {
                    vehicle_id: vehicle.id,
                    company: vehicle.company.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (scored, skipped)
}

fn score_vehicle<'a>(vehicle: &'a VehicleRecord, maxima: &FleetMaxima) -> Result<ScoredResult<'a>> {
    let finance = vehicle
        .finance
        .as_ref()
        .ok_or(RankError::MissingFinance {
            vehicle_id: vehicle.id,
        })?;
    let cost = amortize(finance)?;

    let performance = performance_score(vehicle, maxima);
    let interior = interior_score(vehicle.interior.as_ref());

    Ok(ScoredResult {
        vehicle,
        performance_score: performance,
        interior_score: interior,
        total_cost: cost.total_cost,
        value_score: value_score(performance, interior, cost.total_cost),
    })
}

/// Scores the fleet and returns the best-performance, best-value and
/// cheapest views, each cut to `top_n`.
pub fn score_and_rank(vehicles: &[VehicleRecord], top_n: usize) -> Result<RankedResults<'_>> {
    if top_n < 1 {
        return Err(RankError::InvalidTopN { value: top_n });
    }

    let (scored, skipped) = score_fleet(vehicles);
    tracing::debug!(
        "Scored {} of {} vehicles ({} skipped)",
        scored.len(),
        vehicles.len(),
        skipped.len()
    );

    Ok(RankedResults {
        best_performance: rank(&scored, RankingKey::Performance, top_n),
        best_value: rank(&scored, RankingKey::Value, top_n),
        cheapest: rank(&scored, RankingKey::Cost, top_n),
        skipped,
    })
}

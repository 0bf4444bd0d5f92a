use crate::domain::model::{ScoredResult, VehicleRecord};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKey {
    /// Highest performance score first.
    Performance,
    /// Highest value score first.
    Value,
    /// Lowest total cost first.
    Cost,
}

impl RankingKey {
    fn compare(self, a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
        match self {
            RankingKey::Performance => b.performance_score.total_cmp(&a.performance_score),
            RankingKey::Value => b.value_score.total_cmp(&a.value_score),
            RankingKey::Cost => a.total_cost.total_cmp(&b.total_cost),
        }
    }
}

/// Stable sort by `key`, truncated to `top_n`. Ties keep input order.
pub fn rank<'a>(results: &[ScoredResult<'a>], key: RankingKey, top_n: usize) -> Vec<ScoredResult<'a>> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted.truncate(top_n);
    sorted
}

/// Dashboard listing: every vehicle, most horsepower first.
pub fn by_horsepower(vehicles: &[VehicleRecord]) -> Vec<&VehicleRecord> {
    let mut listing: Vec<&VehicleRecord> = vehicles.iter().collect();
    listing.sort_by(|a, b| b.horsepower.cmp(&a.horsepower));
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: u64, horsepower: u32) -> VehicleRecord {
        VehicleRecord {
            id,
            owner_id: 1,
            company: format!("Make {}", id),
            model: None,
            horsepower,
            engine_capacity: 2.0,
            cylinders: 4,
            interior: None,
            finance: None,
        }
    }

    fn scored(vehicle: &VehicleRecord, performance: f64, value: f64, cost: f64) -> ScoredResult<'_> {
        ScoredResult {
            vehicle,
            performance_score: performance,
            interior_score: 0.0,
            total_cost: cost,
            value_score: value,
        }
    }

    fn ids(results: &[ScoredResult<'_>]) -> Vec<u64> {
        results.iter().map(|r| r.vehicle.id).collect()
    }

    #[test]
    fn test_each_key_orders_independently() {
        let fleet: Vec<VehicleRecord> = (1..=3).map(|id| vehicle(id, 100)).collect();
        let results = vec![
            scored(&fleet[0], 50.0, 1.0, 30_000.0),
            scored(&fleet[1], 90.0, 0.5, 60_000.0),
            scored(&fleet[2], 70.0, 3.0, 20_000.0),
        ];

        assert_eq!(ids(&rank(&results, RankingKey::Performance, 3)), vec![2, 3, 1]);
        assert_eq!(ids(&rank(&results, RankingKey::Value, 3)), vec![3, 1, 2]);
        assert_eq!(ids(&rank(&results, RankingKey::Cost, 3)), vec![3, 1, 2]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let fleet: Vec<VehicleRecord> = (1..=4).map(|id| vehicle(id, 100)).collect();
        let results: Vec<ScoredResult<'_>> =
            fleet.iter().map(|v| scored(v, 80.0, 2.0, 25_000.0)).collect();

        for key in [RankingKey::Performance, RankingKey::Value, RankingKey::Cost] {
            assert_eq!(ids(&rank(&results, key, 4)), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_resorting_is_idempotent() {
        let fleet: Vec<VehicleRecord> = (1..=5).map(|id| vehicle(id, 100)).collect();
        let results = vec![
            scored(&fleet[0], 10.0, 1.0, 5.0),
            scored(&fleet[1], 30.0, 1.0, 5.0),
            scored(&fleet[2], 30.0, 2.0, 1.0),
            scored(&fleet[3], 20.0, 2.0, 1.0),
            scored(&fleet[4], 10.0, 0.0, 9.0),
        ];

        for key in [RankingKey::Performance, RankingKey::Value, RankingKey::Cost] {
            let once = rank(&results, key, results.len());
            let twice = rank(&once, key, results.len());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_truncation_and_short_input() {
        let fleet: Vec<VehicleRecord> = (1..=2).map(|id| vehicle(id, 100)).collect();
        let results = vec![
            scored(&fleet[0], 10.0, 1.0, 5.0),
            scored(&fleet[1], 20.0, 2.0, 1.0),
        ];

        assert_eq!(rank(&results, RankingKey::Performance, 1).len(), 1);
        assert_eq!(rank(&results, RankingKey::Performance, 10).len(), 2);
        assert!(rank(&[], RankingKey::Value, 3).is_empty());
    }

    #[test]
    fn test_dashboard_listing_by_horsepower() {
        let fleet = vec![vehicle(1, 200), vehicle(2, 450), vehicle(3, 300), vehicle(4, 450)];
        let listing: Vec<u64> = by_horsepower(&fleet).iter().map(|v| v.id).collect();
        assert_eq!(listing, vec![2, 4, 3, 1]);
    }
}

// Adapters layer: concrete vehicle sources (local export files, HTTP API).

pub mod file_source;
pub mod http_source;

pub use file_source::FileVehicleSource;
pub use http_source::HttpVehicleSource;

use crate::domain::model::VehicleRecord;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// 篩選擁有者並逐筆驗證，壞掉的紀錄只記 log 不中斷整批
pub(crate) fn accept_records(
    candidates: Vec<Result<VehicleRecord>>,
    owner_id: Option<u64>,
) -> Vec<VehicleRecord> {
    let mut accepted = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let record = match candidate.and_then(|record| record.validate().map(|_| record)) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("⚠️ Dropping vehicle record: {}", e);
                continue;
            }
        };

        if owner_id.map_or(true, |id| record.owner_id == id) {
            accepted.push(record);
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RankError;

    fn record(id: u64, owner_id: u64, company: &str) -> VehicleRecord {
        VehicleRecord {
            id,
            owner_id,
            company: company.to_string(),
            model: None,
            horsepower: 120,
            engine_capacity: 1.6,
            cylinders: 4,
            interior: None,
            finance: None,
        }
    }

    #[test]
    fn test_accept_records_isolates_failures() {
        let candidates = vec![
            Ok(record(1, 1, "Fiat")),
            Err(RankError::InvalidRecord {
                record: "row 2".to_string(),
                reason: "unparseable".to_string(),
            }),
            Ok(record(3, 1, "")),
            Ok(record(4, 2, "Kia")),
        ];

        let all = accept_records(candidates, None);
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_accept_records_filters_owner() {
        let candidates = vec![Ok(record(1, 1, "Fiat")), Ok(record(2, 2, "Kia"))];
        let mine = accept_records(candidates, Some(2));
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].company, "Kia");
    }
}

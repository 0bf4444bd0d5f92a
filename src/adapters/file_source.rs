use crate::adapters::accept_records;
use crate::domain::model::{FinanceRecord, InteriorRecord, PurchaseType, VehicleRecord};
use crate::domain::ports::VehicleSource;
use crate::utils::error::{RankError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Reads a vehicle export from disk: a JSON array of records or a flat CSV.
#[derive(Debug, Clone)]
pub struct FileVehicleSource {
    path: PathBuf,
}

impl FileVehicleSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl VehicleSource for FileVehicleSource {
    async fn fetch_vehicles(&self, owner_id: Option<u64>) -> Result<Vec<VehicleRecord>> {
        tracing::debug!("Reading vehicles from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;

        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let candidates = match extension.as_deref() {
            Some("json") => parse_json_vehicles(&data)?,
            Some("csv") => parse_csv_vehicles(&data)?,
            _ => {
                return Err(RankError::InvalidConfigValueError {
                    field: "input".to_string(),
                    value: self.path.display().to_string(),
                    reason: "Vehicle file must end in .json or .csv".to_string(),
                })
            }
        };

        Ok(accept_records(candidates, owner_id))
    }
}

/// 整體必須是 JSON 陣列；個別元素解析失敗只影響該筆
pub fn parse_json_vehicles(data: &[u8]) -> Result<Vec<Result<VehicleRecord>>> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(data)?;
    Ok(json_items_to_records(items))
}

pub(crate) fn json_items_to_records(items: Vec<serde_json::Value>) -> Vec<Result<VehicleRecord>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| RankError::InvalidRecord {
                record: format!("at index {}", index),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// One row of the flat CSV export. Interior and finance columns are
/// optional; an all-empty group means the sub-record is absent.
#[derive(Debug, Deserialize)]
struct CsvVehicleRow {
    id: u64,
    owner_id: u64,
    company: String,
    #[serde(default)]
    model: Option<String>,
    horsepower: u32,
    engine_capacity: f64,
    cylinders: u32,
    #[serde(default)]
    leather_seats: Option<bool>,
    #[serde(default)]
    ventilated_seats: Option<bool>,
    #[serde(default)]
    heated_steering: Option<bool>,
    #[serde(default)]
    climate_control: Option<bool>,
    #[serde(default)]
    infotainment_size: Option<f64>,
    #[serde(default)]
    purchase_type: Option<PurchaseType>,
    #[serde(default)]
    downpayment: Option<f64>,
    #[serde(default)]
    interest_rate: Option<f64>,
    #[serde(default)]
    loan_term: Option<i32>,
    #[serde(default)]
    trade_in_value: Option<f64>,
    #[serde(default)]
    additional_costs: Option<f64>,
    #[serde(default)]
    car_price: Option<f64>,
}

impl CsvVehicleRow {
    fn interior(&self) -> Option<InteriorRecord> {
        let any_set = self.leather_seats.is_some()
            || self.ventilated_seats.is_some()
            || self.heated_steering.is_some()
            || self.climate_control.is_some()
            || self.infotainment_size.is_some();
        if !any_set {
            return None;
        }

        Some(InteriorRecord {
            leather_seats: self.leather_seats.unwrap_or(false),
            ventilated_seats: self.ventilated_seats.unwrap_or(false),
            heated_steering: self.heated_steering.unwrap_or(false),
            climate_control: self.climate_control.unwrap_or(false),
            infotainment_size: self.infotainment_size.unwrap_or(0.0),
        })
    }

    fn finance(&self) -> Result<Option<FinanceRecord>> {
        match (self.car_price, self.interest_rate, self.loan_term) {
            (None, None, None) => Ok(None),
            (Some(car_price), Some(interest_rate), Some(loan_term)) => Ok(Some(FinanceRecord {
                purchase_type: self.purchase_type.unwrap_or_default(),
                downpayment: self.downpayment.unwrap_or(0.0),
                interest_rate,
                loan_term,
                trade_in_value: self.trade_in_value.unwrap_or(0.0),
                additional_costs: self.additional_costs.unwrap_or(0.0),
                car_price,
            })),
            _ => Err(RankError::InvalidRecord {
                record: format!("#{}", self.id),
                reason: "car_price, interest_rate and loan_term must be given together"
                    .to_string(),
            }),
        }
    }

    fn into_record(self) -> Result<VehicleRecord> {
        let interior = self.interior();
        let finance = self.finance()?;

        Ok(VehicleRecord {
            id: self.id,
            owner_id: self.owner_id,
            company: self.company,
            model: self.model.filter(|m| !m.trim().is_empty()),
            horsepower: self.horsepower,
            engine_capacity: self.engine_capacity,
            cylinders: self.cylinders,
            interior,
            finance,
        })
    }
}

pub fn parse_csv_vehicles(data: &[u8]) -> Result<Vec<Result<VehicleRecord>>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    // 缺少標題列視為整份檔案無效
    reader.headers()?;

    Ok(reader
        .deserialize::<CsvVehicleRow>()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|e| RankError::InvalidRecord {
                record: format!("on CSV line {}", index + 2),
                reason: e.to_string(),
            })
            .and_then(CsvVehicleRow::into_record)
        })
        .collect())
}

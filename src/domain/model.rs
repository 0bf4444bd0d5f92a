use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 使用者登錄的一台車，scoring 只讀不寫
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: u64,
    pub owner_id: u64,
    pub company: String,
    #[serde(default)]
    pub model: Option<String>,
    pub horsepower: u32,
    pub engine_capacity: f64,
    pub cylinders: u32,
    #[serde(default)]
    pub interior: Option<InteriorRecord>,
    #[serde(default)]
    pub finance: Option<FinanceRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteriorRecord {
    pub leather_seats: bool,
    pub ventilated_seats: bool,
    pub heated_steering: bool,
    /// 有記錄但不計分
    pub climate_control: bool,
    pub infotainment_size: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseType {
    #[default]
    Buy,
    Lease,
}

impl std::fmt::Display for PurchaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseType::Buy => write!(f, "buy"),
            PurchaseType::Lease => write!(f, "lease"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    #[serde(default)]
    pub purchase_type: PurchaseType,
    pub downpayment: f64,
    /// Annual percentage rate, e.g. `6.0` for 6%.
    pub interest_rate: f64,
    /// Months. Signed so that a bad upstream value reaches the calculator and is rejected there.
    pub loan_term: i32,
    #[serde(default)]
    pub trade_in_value: f64,
    #[serde(default)]
    pub additional_costs: f64,
    pub car_price: f64,
}

/// Scores for one financed vehicle, borrowed from the input fleet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredResult<'a> {
    pub vehicle: &'a VehicleRecord,
    pub performance_score: f64,
    pub interior_score: f64,
    pub total_cost: f64,
    pub value_score: f64,
}

/// 因單一車輛錯誤而被排除的紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedVehicle {
    pub vehicle_id: u64,
    pub company: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedResults<'a> {
    pub best_performance: Vec<ScoredResult<'a>>,
    pub best_value: Vec<ScoredResult<'a>>,
    pub cheapest: Vec<ScoredResult<'a>>,
    pub skipped: Vec<SkippedVehicle>,
}

impl RankedResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.best_performance.is_empty() && self.best_value.is_empty() && self.cheapest.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub rank: usize,
    pub vehicle_id: u64,
    pub company: String,
    pub model: Option<String>,
    pub purchase_type: PurchaseType,
    pub performance_score: f64,
    pub interior_score: f64,
    pub total_cost: f64,
    pub value_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub company: String,
    pub performance_score: f64,
    pub value_score: f64,
}

/// 排名輸出，可直接序列化成 JSON / CSV / TSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: DateTime<Utc>,
    pub owner_id: Option<u64>,
    pub top_n: usize,
    pub vehicles_considered: usize,
    pub best_performance: Vec<ReportRow>,
    pub best_value: Vec<ReportRow>,
    pub cheapest: Vec<ReportRow>,
    pub skipped: Vec<SkippedVehicle>,
    pub chart_data: Vec<ChartPoint>,
}

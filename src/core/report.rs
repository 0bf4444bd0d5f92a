use crate::domain::model::{ChartPoint, RankedResults, RankingReport, ReportRow, ScoredResult};
use crate::utils::error::{RankError, Result};
use chrono::Utc;
use serde::Serialize;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn to_rows(results: &[ScoredResult<'_>]) -> Vec<ReportRow> {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| ReportRow {
            rank: index + 1,
            vehicle_id: result.vehicle.id,
            company: result.vehicle.company.clone(),
            model: result.vehicle.model.clone(),
            purchase_type: result
                .vehicle
                .finance
                .as_ref()
                .map(|f| f.purchase_type)
                .unwrap_or_default(),
            performance_score: round_to(result.performance_score, 1),
            interior_score: round_to(result.interior_score, 1),
            total_cost: round_to(result.total_cost, 2),
            value_score: round_to(result.value_score, 2),
        })
        .collect()
}

/// Owned, display-rounded copy of the rankings.
pub fn build_report(
    results: &RankedResults<'_>,
    owner_id: Option<u64>,
    top_n: usize,
    vehicles_considered: usize,
) -> RankingReport {
    let best_performance = to_rows(&results.best_performance);
    let best_value = to_rows(&results.best_value);
    let cheapest = to_rows(&results.cheapest);

    // 圖表資料沿用三個列表的串接順序
    let chart_data = best_performance
        .iter()
        .chain(&best_value)
        .chain(&cheapest)
        .map(|row| ChartPoint {
            company: row.company.clone(),
            performance_score: row.performance_score,
            value_score: row.value_score,
        })
        .collect();

    RankingReport {
        generated_at: Utc::now(),
        owner_id,
        top_n,
        vehicles_considered,
        best_performance,
        best_value,
        cheapest,
        skipped: results.skipped.clone(),
        chart_data,
    }
}

#[derive(Serialize)]
struct FlatRow<'a> {
    list: &'static str,
    rank: usize,
    vehicle_id: u64,
    company: &'a str,
    model: Option<&'a str>,
    purchase_type: String,
    performance_score: f64,
    interior_score: f64,
    total_cost: f64,
    value_score: f64,
}

pub fn render_json(report: &RankingReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One row per listed vehicle, tagged with the list it belongs to.
pub fn render_delimited(report: &RankingReport, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    let lists = [
        ("best_performance", &report.best_performance),
        ("best_value", &report.best_value),
        ("cheapest", &report.cheapest),
    ];

    for (list, rows) in lists {
        for row in rows {
            writer.serialize(FlatRow {
                list,
                rank: row.rank,
                vehicle_id: row.vehicle_id,
                company: &row.company,
                model: row.model.as_deref(),
                purchase_type: row.purchase_type.to_string(),
                performance_score: row.performance_score,
                interior_score: row.interior_score,
                total_cost: row.total_cost,
                value_score: row.value_score,
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RankError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RankError::ConfigError {
        message: format!("Report is not valid UTF-8: {}", e),
    })
}

/// 回傳 (檔名, 內容)，格式名稱需先經過驗證
pub fn render(report: &RankingReport, format: &str) -> Result<(String, String)> {
    match format {
        "json" => Ok(("rankings.json".to_string(), render_json(report)?)),
        "csv" => Ok(("rankings.csv".to_string(), render_delimited(report, b',')?)),
        "tsv" => Ok(("rankings.tsv".to_string(), render_delimited(report, b'\t')?)),
        other => Err(RankError::InvalidConfigValueError {
            field: "output_formats".to_string(),
            value: other.to_string(),
            reason: "Unsupported format".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ranking::score_and_rank;
    use crate::domain::model::{FinanceRecord, PurchaseType, VehicleRecord};

    fn fleet() -> Vec<VehicleRecord> {
        let financed = |id: u64, company: &str, horsepower: u32, car_price: f64| VehicleRecord {
            id,
            owner_id: 9,
            company: company.to_string(),
            model: Some(format!("Model {}", id)),
            horsepower,
            engine_capacity: 2.0,
            cylinders: 4,
            interior: None,
            finance: Some(FinanceRecord {
                purchase_type: if id % 2 == 0 { PurchaseType::Lease } else { PurchaseType::Buy },
                downpayment: 2_000.0,
                interest_rate: 0.0,
                loan_term: 24,
                trade_in_value: 0.0,
                additional_costs: 0.0,
                car_price,
            }),
        };
        vec![
            financed(1, "Honda", 150, 24_000.0),
            financed(2, "BMW", 380, 61_000.0),
            VehicleRecord {
                finance: None,
                ..financed(3, "Tesla", 500, 80_000.0)
            },
        ]
    }

    #[test]
    fn test_report_rounds_and_ranks() {
        let vehicles = fleet();
        let results = score_and_rank(&vehicles, 3).unwrap();
        let report = build_report(&results, Some(9), 3, vehicles.len());

        assert_eq!(report.vehicles_considered, 3);
        assert_eq!(report.best_performance[0].company, "BMW");
        assert_eq!(report.best_performance[0].rank, 1);
        assert_eq!(report.best_performance[1].rank, 2);
        assert_eq!(report.cheapest[0].company, "Honda");
        assert_eq!(report.cheapest[0].total_cost, 24_000.0);
        assert_eq!(report.best_performance[0].purchase_type, PurchaseType::Lease);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.chart_data.len(), 6);

        let score = report.best_performance[1].performance_score;
        assert_eq!(score, round_to(score, 1));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(86.666_666, 1), 86.7);
        assert_eq!(round_to(3.862_279, 2), 3.86);
    }

    #[test]
    fn test_render_delimited_tags_lists() {
        let vehicles = fleet();
        let results = score_and_rank(&vehicles, 1).unwrap();
        let report = build_report(&results, None, 1, vehicles.len());

        let csv = render_delimited(&report, b',').unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("list,rank,vehicle_id,company,model"));
        assert!(lines[1].starts_with("best_performance,1,2,BMW"));
        assert!(lines[3].starts_with("cheapest,1,1,Honda"));

        let tsv = render_delimited(&report, b'\t').unwrap();
        assert!(tsv.lines().next().unwrap().contains("list\trank"));
    }

    #[test]
    fn test_render_unknown_format() {
        let report = build_report(&RankedResults::default(), None, 3, 0);
        assert!(render(&report, "json").is_ok());
        assert!(render(&report, "xml").is_err());
    }
}

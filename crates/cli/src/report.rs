//! Final report rendering

use anyhow::Result;
use checkout_core::application::SimulationReport;
use colored::Colorize;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CashierRow {
    cashier: u32,
    lane: String,
    served: u64,
    termination: String,
}

#[derive(Tabled)]
struct CustomerRow {
    joined: u64,
    redirected: u64,
    balked: u64,
    finished: u64,
    remaining: u64,
}

/// Render the report as human-readable tables
pub fn render_table(report: &SimulationReport) -> String {
    let cashiers: Vec<CashierRow> = report
        .cashiers
        .iter()
        .map(|c| CashierRow {
            cashier: c.cashier_id,
            lane: c.lane.to_string(),
            served: c.served,
            termination: c.termination.to_string(),
        })
        .collect();

    let customers = vec![CustomerRow {
        joined: report.stats.joined,
        redirected: report.stats.redirected,
        balked: report.stats.balked,
        finished: report.stats.customers_finished,
        remaining: report.remaining,
    }];

    format!(
        "{}\n{}\n\n{}\n{}",
        "Cashiers".cyan().bold(),
        Table::new(cashiers),
        "Customers".cyan().bold(),
        Table::new(customers)
    )
}

pub fn render_json(report: &SimulationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::application::{CashierSummary, StatsSnapshot, Termination};
    use checkout_core::domain::Lane;

    fn report() -> SimulationReport {
        SimulationReport {
            cashiers: vec![
                CashierSummary {
                    cashier_id: 1,
                    lane: Lane::One,
                    served: 3,
                    termination: Termination::Exhausted,
                },
                CashierSummary {
                    cashier_id: 2,
                    lane: Lane::Two,
                    served: 1,
                    termination: Termination::Idle,
                },
            ],
            remaining: 0,
            stats: StatsSnapshot {
                joined: 3,
                redirected: 1,
                balked: 2,
                served: 4,
                customers_finished: 6,
            },
        }
    }

    #[test]
    fn test_table_lists_both_cashiers() {
        colored::control::set_override(false);
        let table = render_table(&report());
        assert!(table.contains("EXHAUSTED"));
        assert!(table.contains("IDLE"));
        assert!(table.contains("balked"));
    }

    #[test]
    fn test_json_round_trips_lane_names() {
        let json = render_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cashiers"][0]["lane"], "ONE");
        assert_eq!(value["cashiers"][1]["termination"], "IDLE");
        assert_eq!(value["stats"]["balked"], 2);
    }
}

use crate::checkout::record::RunOutcome;
use crate::config::SimulationConfig;
use crate::metrics::RunMetrics;
use crate::simulation::run_simulation;
use failure::Error;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub num_cashiers: u32,
    pub outcome: RunOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioComparison {
    pub scenario_a: ScenarioResult,
    pub scenario_b: ScenarioResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Verdict {
    WaitReduced,
    NoImprovement,
    Inconclusive,
}

/// Runs scenario A and then scenario B under the very same parameters and
/// seed, only the cashier count differs. Each run reseeds its own stream,
/// so the comparison is paired draw-for-draw until differing queue state
/// shifts which draw lands on which customer.
pub fn run_scenarios(config: &SimulationConfig) -> Result<ScenarioComparison, Error> {
    config.validate()?;

    let scenario_a = ScenarioResult {
        num_cashiers: config.cashiers_a,
        outcome: run_simulation(&config.run_params(config.cashiers_a)),
    };

    let scenario_b = ScenarioResult {
        num_cashiers: config.cashiers_b,
        outcome: run_simulation(&config.run_params(config.cashiers_b)),
    };

    Ok(ScenarioComparison {
        scenario_a,
        scenario_b,
    })
}

impl ScenarioComparison {
    /// Strictly smaller mean queue time in B counts as the win, a tie is
    /// no improvement. Once either run served nobody there is nothing to
    /// compare.
    pub fn verdict(&self) -> Verdict {
        let a = RunMetrics::from_records(&self.scenario_a.outcome.records);
        let b = RunMetrics::from_records(&self.scenario_b.outcome.records);

        match (a, b) {
            (Some(a), Some(b)) => {
                if b.avg_queue_time < a.avg_queue_time {
                    Verdict::WaitReduced
                } else {
                    Verdict::NoImprovement
                }
            }
            _ => Verdict::Inconclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::record::CustomerRecord;

    fn result_with_queue_times(num_cashiers: u32, queue_times: &[u32]) -> ScenarioResult {
        let records = queue_times
            .iter()
            .enumerate()
            .map(|(index, queue_time)| {
                let arrival = index as u32 * 3;

                CustomerRecord::new(index as u32 + 1, arrival, arrival + queue_time, arrival + queue_time + 5)
            })
            .collect();

        ScenarioResult {
            num_cashiers,
            outcome: RunOutcome {
                records,
                peak_queue_len: 0,
                left_waiting: 0,
            },
        }
    }

    #[test]
    fn smaller_mean_wait_in_b_wins() {
        let comparison = ScenarioComparison {
            scenario_a: result_with_queue_times(1, &[4, 6, 8]),
            scenario_b: result_with_queue_times(2, &[1, 2, 3]),
        };

        assert_eq!(comparison.verdict(), Verdict::WaitReduced);
    }

    #[test]
    fn a_tie_is_not_an_improvement() {
        let comparison = ScenarioComparison {
            scenario_a: result_with_queue_times(1, &[2, 2]),
            scenario_b: result_with_queue_times(2, &[2, 2]),
        };

        assert_eq!(comparison.verdict(), Verdict::NoImprovement);
    }

    #[test]
    fn an_empty_run_makes_the_comparison_inconclusive() {
        let comparison = ScenarioComparison {
            scenario_a: result_with_queue_times(1, &[2, 2]),
            scenario_b: result_with_queue_times(2, &[]),
        };

        assert_eq!(comparison.verdict(), Verdict::Inconclusive);
    }

    #[test]
    fn invalid_config_never_reaches_the_engine() {
        let mut config = SimulationConfig::default();
        config.cashiers_a = 0;

        assert!(run_scenarios(&config).is_err());
    }
}

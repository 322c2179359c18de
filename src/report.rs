use crate::checkout::record::{CustomerRecord, RunOutcome};
use crate::config::SimulationConfig;
use crate::metrics::{Histogram, RunMetrics};
use crate::scenario::{ScenarioComparison, ScenarioResult, Verdict};
use colored::Colorize;

const HEAD_ROWS: usize = 10;
const HISTOGRAM_BUCKETS: usize = 10;
const SERIES_ROWS: usize = 20;
const BAR_WIDTH: u32 = 40;

pub fn render_config(config: &SimulationConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("  horizon:      {} time units\n", config.sim_time));
    out.push_str(&format!(
        "  interarrival: {}-{}\n",
        config.interarrival.min, config.interarrival.max
    ));
    out.push_str(&format!(
        "  service:      {}-{}\n",
        config.service.min, config.service.max
    ));
    out.push_str(&format!("  seed:         {}\n", config.random_seed));
    out.push_str(&format!("  scenario A:   {} cashier(s)\n", config.cashiers_a));
    out.push_str(&format!("  scenario B:   {} cashier(s)\n", config.cashiers_b));

    out
}

fn render_metrics(metrics: &RunMetrics, outcome: &RunOutcome) -> String {
    let mut out = String::new();

    out.push_str(&format!("  customers served:      {}\n", metrics.customers_served));
    out.push_str(&format!("  mean queue time:       {:.2}\n", metrics.avg_queue_time));
    out.push_str(&format!("  max queue time:        {}\n", metrics.max_queue_time));
    out.push_str(&format!("  mean system time:      {:.2}\n", metrics.avg_system_time));
    out.push_str(&format!("  mean service duration: {:.2}\n", metrics.avg_service_duration));
    out.push_str(&format!("  peak queue length:     {}\n", outcome.peak_queue_len));
    out.push_str(&format!("  left waiting at close: {}\n", outcome.left_waiting));

    out
}

pub fn render_record_table(records: &[CustomerRecord], rows: usize) -> String {
    let mut out = String::new();

    out.push_str("    id  arrival  start  finish  queue  service  system\n");

    for record in records.iter().take(rows) {
        out.push_str(&format!(
            "  {:>4}  {:>7}  {:>5}  {:>6}  {:>5}  {:>7}  {:>6}\n",
            record.customer_id,
            record.arrival_time,
            record.start_service,
            record.finish_time,
            record.queue_time,
            record.service_duration,
            record.system_time,
        ));
    }

    out
}

pub fn render_histogram(histogram: &Histogram) -> String {
    let mut out = String::new();

    let peak = histogram.counts.iter().cloned().max().unwrap_or(0);

    if peak == 0 {
        return out;
    }

    for (index, count) in histogram.counts.iter().enumerate() {
        let lo = index as u32 * histogram.bucket_width;
        let hi = lo + histogram.bucket_width - 1;
        let bar = "#".repeat((count * BAR_WIDTH / peak) as usize);

        out.push_str(&format!("  {:>4}-{:<4} | {} {}\n", lo, hi, bar, count));
    }

    out
}

pub fn render_queue_time_series(records: &[CustomerRecord], rows: usize) -> String {
    let mut out = String::new();

    // all-zero waits still list every customer, the bars just stay empty
    let peak = records
        .iter()
        .map(|record| record.queue_time)
        .max()
        .unwrap_or(0)
        .max(1);

    // an even stride thins a long run down to at most `rows` lines
    let rows = rows.max(1);
    let stride = ((records.len() + rows - 1) / rows).max(1);

    for record in records.iter().step_by(stride) {
        let bar = "#".repeat((record.queue_time as u64 * BAR_WIDTH as u64 / peak as u64) as usize);

        out.push_str(&format!(
            "  {:>4} | {} {}\n",
            record.customer_id, bar, record.queue_time
        ));
    }

    out
}

fn print_scenario(name: &str, scenario: &ScenarioResult) {
    println!("Scenario {} - {} cashier(s)", name, scenario.num_cashiers);

    match RunMetrics::from_records(&scenario.outcome.records) {
        Some(metrics) => {
            print!("{}", render_metrics(&metrics, &scenario.outcome));

            println!();
            println!("  first customers:");
            print!("{}", render_record_table(&scenario.outcome.records, HEAD_ROWS));

            println!();
            println!("  queue time distribution:");
            print!(
                "{}",
                render_histogram(&Histogram::of_queue_times(
                    &scenario.outcome.records,
                    HISTOGRAM_BUCKETS
                ))
            );

            println!();
            println!("  queue time per customer:");
            print!(
                "{}",
                render_queue_time_series(&scenario.outcome.records, SERIES_ROWS)
            );
        }
        None => {
            println!(
                "{}",
                "  no customer finished service, try different parameters".red()
            );
        }
    }

    println!();
}

fn print_verdict(comparison: &ScenarioComparison) {
    let a = RunMetrics::from_records(&comparison.scenario_a.outcome.records);
    let b = RunMetrics::from_records(&comparison.scenario_b.outcome.records);

    match (comparison.verdict(), a, b) {
        (Verdict::WaitReduced, Some(a), Some(b)) => {
            let line = format!(
                "Adding cashiers brought the mean queue time from {:.2} down to {:.2}",
                a.avg_queue_time, b.avg_queue_time
            );

            println!("{}", line.green());
        }
        (Verdict::NoImprovement, Some(a), Some(b)) => {
            let line = format!(
                "Adding cashiers did not reduce the mean queue time ({:.2} against {:.2})",
                a.avg_queue_time, b.avg_queue_time
            );

            println!("{}", line.yellow());
        }
        _ => {
            println!(
                "{}",
                "One of the scenarios served nobody, the comparison is inconclusive".red()
            );
        }
    }
}

pub fn print_report(config: &SimulationConfig, comparison: &ScenarioComparison) {
    println!("Cashier line simulation");
    print!("{}", render_config(config));
    println!();

    print_scenario("A", &comparison.scenario_a);
    print_scenario("B", &comparison.scenario_b);

    print_verdict(comparison);
}

use queue_sim::{
    run_scenarios, run_simulation, DrawBounds, RunMetrics, RunParams, SimulationConfig, Verdict,
};

fn params(num_cashiers: u32, sim_time: u32, seed: u64) -> RunParams {
    RunParams {
        num_cashiers,
        sim_time,
        interarrival: DrawBounds { min: 2, max: 3 },
        service: DrawBounds { min: 4, max: 7 },
        random_seed: seed,
    }
}

#[test]
fn identical_params_and_seed_replay_identically() {
    let first = run_simulation(&params(2, 1000, 42));
    let second = run_simulation(&params(2, 1000, 42));

    assert_eq!(first.records, second.records);
    assert_eq!(first.peak_queue_len, second.peak_queue_len);
    assert_eq!(first.left_waiting, second.left_waiting);
}

#[test]
fn every_record_satisfies_the_timing_identities() {
    let outcome = run_simulation(&params(1, 1000, 42));

    assert!(!outcome.records.is_empty());

    for record in &outcome.records {
        assert!(record.start_service >= record.arrival_time);
        assert!(record.service_duration >= 4 && record.service_duration <= 7);
        assert_eq!(record.queue_time, record.start_service - record.arrival_time);
        assert_eq!(record.system_time, record.queue_time + record.service_duration);
        assert_eq!(record.finish_time, record.start_service + record.service_duration);
    }
}

#[test]
fn served_ids_form_a_prefix_in_arrival_order() {
    let outcome = run_simulation(&params(2, 1000, 42));

    let mut records = outcome.records.clone();
    records.sort_by_key(|record| record.customer_id);

    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.customer_id, index as u32 + 1);
    }

    for pair in records.windows(2) {
        assert!(pair[0].arrival_time <= pair[1].arrival_time);
    }
}

#[test]
fn no_arrival_or_service_start_passes_the_horizon() {
    let outcome = run_simulation(&params(1, 100, 42));

    for record in &outcome.records {
        assert!(record.arrival_time <= 100);
        assert!(record.start_service <= 100);
    }
}

#[test]
fn services_in_flight_at_the_horizon_run_to_completion() {
    let outcome = run_simulation(&params(1, 100, 42));

    assert!(outcome.records.iter().any(|record| record.finish_time > 100));
}

#[test]
fn a_single_cashier_saturates_and_customers_wait() {
    let outcome = run_simulation(&params(1, 100, 42));

    assert!(!outcome.records.is_empty());
    assert!(outcome.records.iter().any(|record| record.queue_time > 0));
    assert!(outcome.left_waiting > 0);
    assert!(outcome.peak_queue_len > 0);
}

#[test]
fn a_second_cashier_does_not_worsen_the_mean_wait() {
    let one = run_simulation(&params(1, 1000, 42));
    let two = run_simulation(&params(2, 1000, 42));

    let one = RunMetrics::from_records(&one.records).unwrap();
    let two = RunMetrics::from_records(&two.records).unwrap();

    assert!(two.avg_queue_time <= one.avg_queue_time);
}

#[test]
fn default_scenarios_compare_deterministically() {
    let config = SimulationConfig::default();

    let first = run_scenarios(&config).unwrap();
    let second = run_scenarios(&config).unwrap();

    assert_eq!(
        first.scenario_a.outcome.records,
        second.scenario_a.outcome.records
    );
    assert_eq!(
        first.scenario_b.outcome.records,
        second.scenario_b.outcome.records
    );
    assert_eq!(first.verdict(), Verdict::WaitReduced);
}

#[test]
fn equal_scenarios_produce_identical_runs() {
    let mut config = SimulationConfig::default();
    config.cashiers_b = config.cashiers_a;

    let comparison = run_scenarios(&config).unwrap();

    assert_eq!(
        comparison.scenario_a.outcome.records,
        comparison.scenario_b.outcome.records
    );
}

#[test]
fn a_too_short_horizon_yields_an_empty_result() {
    let mut config = SimulationConfig::default();
    config.sim_time = 1;

    let comparison = run_scenarios(&config).unwrap();

    assert!(comparison.scenario_a.outcome.records.is_empty());
    assert!(comparison.scenario_b.outcome.records.is_empty());
    assert_eq!(comparison.verdict(), Verdict::Inconclusive);
}

#[test]
fn invalid_config_is_rejected_before_any_run() {
    let mut config = SimulationConfig::default();
    config.interarrival = DrawBounds { min: 3, max: 2 };

    assert!(run_scenarios(&config).is_err());
}

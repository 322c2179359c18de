use crate::checkout;
use crate::checkout::arrival_generator::ArrivalGenerator;
use crate::checkout::cashier_line::CashierLine;
use crate::checkout::record::RunOutcome;
use crate::config::RunParams;
use crate::discrete_system::DiscreteSystem;

/// Runs one staffing scenario to completion. The event queue is drained
/// fully, so services in flight at the horizon run to their end and land
/// in the records.
pub fn run_simulation(params: &RunParams) -> RunOutcome {
    let mut system: DiscreteSystem<checkout::Event, checkout::Component> =
        DiscreteSystem::new(params.random_seed);

    let line_address = system.register_component(
        CashierLine::new(params.num_cashiers, params.sim_time, params.service.clone()).into(),
    );

    system.register_component(
        ArrivalGenerator::new(line_address, params.sim_time, params.interarrival.clone()).into(),
    );

    system.start();

    while system.has_events() {
        system.tick();
    }

    let line = match system.components.remove(&line_address) {
        Some(checkout::Component::CashierLine(line)) => line,
        _ => panic!("the cashier line is not registered"),
    };

    line.close()
}

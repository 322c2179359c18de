use crate::checkout;
use crate::checkout::cashier_line;
use crate::checkout::CheckoutComponent;
use crate::config::DrawBounds;
use crate::discrete_system::address::Address;
use crate::discrete_system::component::{HandleInfo, StartInfo};
use crate::discrete_system::effector::Effector;
use crate::discrete_system::{SimRng, Time};

#[derive(Debug)]
pub struct ArrivalGenerator {
    line_address: Address,
    sim_time: Time,
    interarrival: DrawBounds,
}

/// Only goal of the ArrivalGenerator is to keep drawing interarrival gaps
/// and to hand the line one new customer per gap, until the next arrival
/// would land past the horizon
impl ArrivalGenerator {
    pub fn new(line_address: Address, sim_time: Time, interarrival: DrawBounds) -> ArrivalGenerator {
        ArrivalGenerator {
            line_address,
            sim_time,
            interarrival,
        }
    }

    fn schedule_next(
        &mut self,
        effector: &mut Effector<checkout::Event>,
        current_time: Time,
        rng: &mut SimRng,
    ) {
        let gap = self.interarrival.sample(rng);

        // the draw is consumed even when it overshoots the horizon; ticks only
        // land at or before the horizon, so the difference cannot wrap
        if gap <= self.sim_time - current_time {
            effector.schedule_in_to_self(gap, checkout::Event::ArrivalGeneratorEvent(Event::Tick));
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    Tick,
}

impl CheckoutComponent for ArrivalGenerator {
    fn start(&mut self, info: StartInfo) -> Effector<checkout::Event> {
        let mut effector = Effector::new();

        self.schedule_next(&mut effector, info.current_time, info.rng);

        effector
    }

    fn handle(&mut self, info: HandleInfo, message: checkout::Event) -> Effector<checkout::Event> {
        let mut effector = Effector::new();

        let message: Option<Event> = message.into();

        match message {
            Some(Event::Tick) => {
                effector.schedule_immediately(
                    self.line_address,
                    checkout::Event::CashierLineEvent(cashier_line::Event::CustomerArrived),
                );

                self.schedule_next(&mut effector, info.current_time, info.rng);
            }
            _ => {}
        }

        effector
    }
}

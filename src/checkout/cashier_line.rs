use crate::checkout;
use crate::checkout::record::{CustomerRecord, RunOutcome};
use crate::checkout::CheckoutComponent;
use crate::config::DrawBounds;
use crate::discrete_system::component::{HandleInfo, StartInfo};
use crate::discrete_system::effector::Effector;
use crate::discrete_system::{SimRng, Time};
use std::cmp::max;
use std::collections::vec_deque::VecDeque;

/// 1. On `CustomerArrived` at time `t`
///     * The customer takes the next id (ids follow arrival order)
///     * If a cashier is free (`busy < num_cashiers`)
///         1) `busy += 1` and the service duration is drawn
///         2) `ServiceFinished` is scheduled in `duration`
///     * Else the customer joins the back of the waiting line
/// 2. On `ServiceFinished` at time `t`
///     * The record of the served customer is written, `t` past the horizon
///       included (services are never cut short)
///     * `busy -= 1`
///     * If the line is not empty and `t <= sim_time`
///         1) The head of the line is called forward and served as in 1.
///     * Past the horizon nobody is called forward any more, whoever is
///       still waiting stays unrecorded

#[derive(Debug, Clone)]
pub enum Event {
    CustomerArrived,
    ServiceFinished {
        customer_id: u32,
        arrival_time: Time,
        start_service: Time,
    },
}

impl Into<checkout::Event> for Event {
    fn into(self) -> checkout::Event {
        checkout::Event::CashierLineEvent(self)
    }
}

#[derive(Debug)]
struct WaitingCustomer {
    customer_id: u32,
    arrival_time: Time,
}

#[derive(Debug)]
pub struct CashierLine {
    num_cashiers: u32,
    sim_time: Time,
    service: DrawBounds,
    busy: u32,
    waiting: VecDeque<WaitingCustomer>,
    next_customer_id: u32,
    records: Vec<CustomerRecord>,
    max_queue_len: u32,
}

impl CashierLine {
    pub fn new(num_cashiers: u32, sim_time: Time, service: DrawBounds) -> CashierLine {
        CashierLine {
            num_cashiers,
            sim_time,
            service,
            busy: 0,
            waiting: VecDeque::new(),
            next_customer_id: 1,
            records: Vec::new(),
            max_queue_len: 0,
        }
    }

    fn begin_service(
        &mut self,
        customer_id: u32,
        arrival_time: Time,
        start_service: Time,
        effector: &mut Effector<checkout::Event>,
        rng: &mut SimRng,
    ) {
        self.busy += 1;

        let duration = self.service.sample(rng);

        effector.schedule_in_to_self(
            duration,
            Event::ServiceFinished {
                customer_id,
                arrival_time,
                start_service,
            }
            .into(),
        );
    }

    pub fn close(self) -> RunOutcome {
        RunOutcome {
            peak_queue_len: self.max_queue_len,
            left_waiting: self.waiting.len() as u32,
            records: self.records,
        }
    }
}

impl CheckoutComponent for CashierLine {
    fn start(&mut self, _info: StartInfo) -> Effector<checkout::Event> {
        Effector::new()
    }

    fn handle(&mut self, info: HandleInfo, message: checkout::Event) -> Effector<checkout::Event> {
        let mut effector = Effector::new();

        let message: Option<Event> = message.into();

        match message {
            Some(Event::CustomerArrived) => {
                let customer_id = self.next_customer_id;
                self.next_customer_id += 1;

                if self.busy < self.num_cashiers {
                    self.begin_service(
                        customer_id,
                        info.current_time,
                        info.current_time,
                        &mut effector,
                        info.rng,
                    );
                } else {
                    self.waiting.push_back(WaitingCustomer {
                        customer_id,
                        arrival_time: info.current_time,
                    });

                    self.max_queue_len = max(self.waiting.len() as u32, self.max_queue_len);
                }
            }
            Some(Event::ServiceFinished {
                customer_id,
                arrival_time,
                start_service,
            }) => {
                self.records.push(CustomerRecord::new(
                    customer_id,
                    arrival_time,
                    start_service,
                    info.current_time,
                ));

                self.busy -= 1;

                if info.current_time <= self.sim_time {
                    if let Some(customer) = self.waiting.pop_front() {
                        self.begin_service(
                            customer.customer_id,
                            customer.arrival_time,
                            info.current_time,
                            &mut effector,
                            info.rng,
                        );
                    }
                }
            }
            None => {}
        }

        effector
    }
}

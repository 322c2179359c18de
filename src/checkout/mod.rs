use crate::discrete_system::component::{Component as SystemComponent, HandleInfo, StartInfo};
use crate::discrete_system::effector::Effector;

pub mod arrival_generator;
pub mod cashier_line;
pub mod record;

#[derive(Debug, Clone)]
pub enum Event {
    ArrivalGeneratorEvent(arrival_generator::Event),
    CashierLineEvent(cashier_line::Event),
}

impl Into<Option<arrival_generator::Event>> for Event {
    fn into(self) -> Option<arrival_generator::Event> {
        match self {
            Event::ArrivalGeneratorEvent(event) => Some(event),
            _ => None,
        }
    }
}

impl Into<Option<cashier_line::Event>> for Event {
    fn into(self) -> Option<cashier_line::Event> {
        match self {
            Event::CashierLineEvent(event) => Some(event),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Component {
    ArrivalGenerator(arrival_generator::ArrivalGenerator),
    CashierLine(cashier_line::CashierLine),
}

impl Into<Component> for arrival_generator::ArrivalGenerator {
    fn into(self) -> Component {
        Component::ArrivalGenerator(self)
    }
}

impl Into<Component> for cashier_line::CashierLine {
    fn into(self) -> Component {
        Component::CashierLine(self)
    }
}

trait CheckoutComponent {
    fn start(&mut self, info: StartInfo) -> Effector<Event>;
    fn handle(&mut self, info: HandleInfo, message: Event) -> Effector<Event>;
}

impl SystemComponent<Event> for Component {
    fn start(&mut self, info: StartInfo) -> Effector<Event> {
        match self {
            Component::ArrivalGenerator(generator) => generator.start(info),
            Component::CashierLine(line) => line.start(info),
        }
    }

    fn handle(&mut self, info: HandleInfo, message: Event) -> Effector<Event> {
        match self {
            Component::ArrivalGenerator(generator) => generator.handle(info, message),
            Component::CashierLine(line) => line.handle(info, message),
        }
    }
}

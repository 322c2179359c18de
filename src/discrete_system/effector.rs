use crate::discrete_system::{DiscreteSystemMessage, Time};
use crate::discrete_system::address::Address;

pub enum ScheduledEventAddress {
    SelfAddress,
    RemoteAddress(Address),
}

pub struct ScheduledEvent<M> {
    pub message: M,
    pub in_time: Time,
    pub address: ScheduledEventAddress,
}

/// Collects the events a component wants to schedule while it is
/// handling a message. The system drains it afterwards and turns the
/// relative `in_time` offsets into absolute queue entries.
pub struct Effector<M: DiscreteSystemMessage> {
    pub events: Vec<ScheduledEvent<M>>,
}

impl<M: DiscreteSystemMessage> Effector<M> {
    pub fn new() -> Effector<M> {
        Effector { events: Vec::new() }
    }

    pub fn schedule_in(&mut self, address: Address, in_time: Time, message: M) {
        self.events.push(ScheduledEvent {
            in_time,
            message,
            address: ScheduledEventAddress::RemoteAddress(address),
        })
    }

    pub fn schedule_immediately(&mut self, address: Address, message: M) {
        self.events.push(ScheduledEvent {
            in_time: 0,
            message,
            address: ScheduledEventAddress::RemoteAddress(address),
        })
    }

    pub fn schedule_in_to_self(&mut self, in_time: Time, message: M) {
        self.events.push(ScheduledEvent {
            in_time,
            message,
            address: ScheduledEventAddress::SelfAddress,
        })
    }

    pub fn schedule_to_self_immediately(&mut self, message: M) {
        self.events.push(ScheduledEvent {
            in_time: 0,
            message,
            address: ScheduledEventAddress::SelfAddress,
        })
    }
}

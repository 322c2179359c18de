use crate::discrete_system::component::{Component, StartInfo, HandleInfo};
use std::collections::{HashMap, BinaryHeap};
use crate::discrete_system::address::{Address, AddressGenerator};
use std::cmp::Ordering;
use crate::discrete_system::effector::{Effector, ScheduledEventAddress};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod address;
pub mod component;
pub mod effector;

pub type Time = u32;

/// The one random stream of a system. Every component draws from it through
/// `StartInfo`/`HandleInfo`, so a run is fully determined by the seed.
pub type SimRng = ChaCha8Rng;

pub trait DiscreteSystemMessage: Clone {}
impl<T: Clone> DiscreteSystemMessage for T {}

#[derive(Debug, Clone)]
pub struct Event<M: DiscreteSystemMessage> {
    time: Time,
    seq: u64,
    pub to_address: Address,
    pub from_address: Address,
    pub message: M,
}

impl<M: DiscreteSystemMessage> PartialEq for Event<M> {
    fn eq(&self, other: &Event<M>) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl<M: DiscreteSystemMessage> Eq for Event<M> {}

impl<M: DiscreteSystemMessage> PartialOrd for Event<M> {
    fn partial_cmp(&self, other: &Event<M>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: DiscreteSystemMessage> Ord for Event<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        // from low time to high; among equal times the event scheduled
        // first pops first
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct DiscreteSystem<M: DiscreteSystemMessage, C: Component<M>> {
    pub current_time: u32,
    pub components: HashMap<Address, C>,
    events: BinaryHeap<Event<M>>,
    address_generator: AddressGenerator,
    next_seq: u64,
    rng: SimRng,
}

/// `DiscreteSystem` manages a discrete system, which composes of components
/// and the messages which the components are sending between themselves. The
/// system owns the event queue, the clock and the random stream.

impl<M: DiscreteSystemMessage, C: Component<M>> DiscreteSystem<M, C> {
    pub fn new(seed: u64) -> DiscreteSystem<M, C> {
        DiscreteSystem {
            current_time: 0,
            components: HashMap::new(),
            events: BinaryHeap::new(),
            address_generator: AddressGenerator::new(),
            next_seq: 0,
            rng: SimRng::seed_from_u64(seed),
        }
    }

    pub fn register_component(&mut self, c: C) -> Address {
        let addr = self.address_generator.next();

        self.components.insert(addr.clone(), c);

        addr
    }

    fn start_component(&mut self, address: Address) {
        let effector = self.components.get_mut(&address).unwrap().start(StartInfo {
            self_address: address.clone(),
            current_time: self.current_time,
            rng: &mut self.rng,
        });

        self.apply_effector(address.clone(), effector);
    }

    fn apply_effector(&mut self, from_address: Address, effector: Effector<M>) {
        for event in effector.events.into_iter() {
            let to_address = match event.address {
                ScheduledEventAddress::SelfAddress => from_address.clone(),
                ScheduledEventAddress::RemoteAddress(remote) => remote,
            };

            let seq = self.next_seq;
            self.next_seq += 1;

            self.events.push(Event {
                from_address: from_address.clone(),
                to_address,
                message: event.message,
                time: self.current_time + event.in_time,
                seq,
            });
        }
    }

    pub fn tick(&mut self) -> Vec<Event<M>> {
        let mut events = Vec::new();

        if self.events.is_empty() {
            return events;
        }

        self.current_time = self.events.peek().unwrap().time;

        while self.events.peek().is_some() && self.events.peek().unwrap().time == self.current_time
            {
                let event = self.events.pop().unwrap();

                events.push(event.clone());

                let effector = self.components.get_mut(&event.to_address).unwrap().handle(
                    HandleInfo {
                        self_address: event.to_address.clone(),
                        sender_address: event.from_address.clone(),
                        current_time: self.current_time,
                        rng: &mut self.rng,
                    },
                    event.message.clone(),
                );

                self.apply_effector(event.to_address.clone(), effector);
            }

        events
    }

    pub fn start(&mut self) {
        let mut addresses: Vec<_> = self.components.keys().cloned().collect();

        // HashMap iteration order is arbitrary, start in registration order
        addresses.sort();

        addresses
            .into_iter()
            .for_each(|address| self.start_component(address));

        if self.events.peek().is_some() && self.events.peek().unwrap().time == 0 {
            self.tick();
        }
    }

    pub fn run(&mut self) {
        self.start();

        while !self.events.is_empty() {
            self.tick();
        }
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

use crate::discrete_system::{DiscreteSystemMessage, SimRng, Time};
use crate::discrete_system::effector::Effector;
use crate::discrete_system::address::Address;

pub struct StartInfo<'a> {
    pub self_address: Address,
    pub current_time: Time,
    pub rng: &'a mut SimRng,
}

pub struct HandleInfo<'a> {
    pub self_address: Address,
    pub sender_address: Address,
    pub current_time: Time,
    pub rng: &'a mut SimRng,
}

pub trait Component<M: DiscreteSystemMessage> {
    fn start(&mut self, info: StartInfo) -> Effector<M>;
    fn handle(&mut self, info: HandleInfo, message: M) -> Effector<M>;
}

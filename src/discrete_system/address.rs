pub type Address = u32;

#[derive(Clone, Debug)]
pub struct AddressGenerator {
    counter: u32,
}

/// Addresses are handed out in registration order; `DiscreteSystem::start`
/// relies on that order to start components deterministically.

impl AddressGenerator {
    pub fn new() -> AddressGenerator {
        AddressGenerator { counter: 0 }
    }

    pub fn next(&mut self) -> Address {
        let addr = self.counter;

        self.counter += 1;

        addr
    }
}

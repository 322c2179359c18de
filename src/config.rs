use crate::discrete_system::{SimRng, Time};
use failure::{Error, Fail};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Fail)]
#[fail(display = "validation failed because of \"{}\"", error)]
pub struct ValidationError {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DrawBounds {
    pub min: u32, // Inclusive lower bound of the uniform draw
    pub max: u32, // Inclusive upper bound of the uniform draw
}

impl DrawBounds {
    pub fn sample(&self, rng: &mut SimRng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimulationConfig {
    pub sim_time: Time,           // Horizon after which no new arrival is admitted
    pub interarrival: DrawBounds, // Gap between two successive arrivals
    pub service: DrawBounds,      // Per-customer service duration
    pub cashiers_a: u32,          // Cashiers open in scenario A
    pub cashiers_b: u32,          // Cashiers open in scenario B
    pub random_seed: u64,         // Seed shared by both scenario runs
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            sim_time: 1000,
            interarrival: DrawBounds { min: 2, max: 3 },
            service: DrawBounds { min: 4, max: 7 },
            cashiers_a: 1,
            cashiers_b: 2,
            random_seed: 42,
        }
    }
}

fn validate_bounds(name: &str, bounds: &DrawBounds) -> Result<(), Error> {
    if bounds.min == 0 || bounds.min > bounds.max {
        return Err(ValidationError {
            error: format!(
                "there is invalid {} range \"{}-{}\"",
                name, bounds.min, bounds.max
            ),
        }
        .into());
    }

    Ok(())
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.sim_time == 0 {
            return Err(ValidationError {
                error: format!("there is invalid simulation time \"{}\"", self.sim_time),
            }
            .into());
        }

        if self.cashiers_a == 0 {
            return Err(ValidationError {
                error: format!(
                    "there is invalid cashier count \"{}\" in scenario A",
                    self.cashiers_a
                ),
            }
            .into());
        }

        if self.cashiers_b == 0 {
            return Err(ValidationError {
                error: format!(
                    "there is invalid cashier count \"{}\" in scenario B",
                    self.cashiers_b
                ),
            }
            .into());
        }

        validate_bounds("interarrival", &self.interarrival)?;
        validate_bounds("service", &self.service)?;

        // the slowest service drawn right at the horizon still has to finish
        // inside the clock
        if self.sim_time > Time::MAX - self.service.max {
            return Err(ValidationError {
                error: format!("there is too large simulation time \"{}\"", self.sim_time),
            }
            .into());
        }

        return Ok(());
    }

    pub fn run_params(&self, num_cashiers: u32) -> RunParams {
        RunParams {
            num_cashiers,
            sim_time: self.sim_time,
            interarrival: self.interarrival.clone(),
            service: self.service.clone(),
            random_seed: self.random_seed,
        }
    }
}

/// Parameters of a single engine invocation, one staffing scenario at a time.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub num_cashiers: u32,
    pub sim_time: Time,
    pub interarrival: DrawBounds,
    pub service: DrawBounds,
    pub random_seed: u64,
}

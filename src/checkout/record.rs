use crate::discrete_system::Time;
use serde::{Deserialize, Serialize};

/// One row of a run result. Written exactly once, at the instant the
/// service of the customer finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: u32,
    pub arrival_time: Time,
    pub start_service: Time,
    pub finish_time: Time,
    pub queue_time: u32,
    pub service_duration: u32,
    pub system_time: u32,
}

impl CustomerRecord {
    pub fn new(
        customer_id: u32,
        arrival_time: Time,
        start_service: Time,
        finish_time: Time,
    ) -> CustomerRecord {
        CustomerRecord {
            customer_id,
            arrival_time,
            start_service,
            finish_time,
            queue_time: start_service - arrival_time,
            service_duration: finish_time - start_service,
            system_time: finish_time - arrival_time,
        }
    }
}

/// Everything one engine run leaves behind: the records in completion
/// order plus the closing state of the waiting line.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub records: Vec<CustomerRecord>,
    pub peak_queue_len: u32,
    pub left_waiting: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_the_durations_from_the_three_instants() {
        let record = CustomerRecord::new(4, 10, 13, 20);

        assert_eq!(record.queue_time, 3);
        assert_eq!(record.service_duration, 7);
        assert_eq!(record.system_time, 10);
    }
}

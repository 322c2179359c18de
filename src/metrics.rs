use crate::checkout::record::CustomerRecord;
use serde::Serialize;

/// Summary of one run. Only derivable from a run that served somebody,
/// an empty run has no mean to speak of.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub customers_served: u32,
    pub avg_queue_time: f64,
    pub max_queue_time: u32,
    pub avg_system_time: f64,
    pub avg_service_duration: f64,
}

impl RunMetrics {
    pub fn from_records(records: &[CustomerRecord]) -> Option<RunMetrics> {
        if records.is_empty() {
            return None;
        }

        let count = records.len() as f64;

        Some(RunMetrics {
            customers_served: records.len() as u32,
            avg_queue_time: records
                .iter()
                .map(|record| record.queue_time as f64)
                .sum::<f64>()
                / count,
            max_queue_time: records
                .iter()
                .map(|record| record.queue_time)
                .max()
                .unwrap(),
            avg_system_time: records
                .iter()
                .map(|record| record.system_time as f64)
                .sum::<f64>()
                / count,
            avg_service_duration: records
                .iter()
                .map(|record| record.service_duration as f64)
                .sum::<f64>()
                / count,
        })
    }
}

/// Queue times bucketed into fixed-width bins, bucket `i` covers
/// `i * bucket_width ..= (i + 1) * bucket_width - 1`.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub bucket_width: u32,
    pub counts: Vec<u32>,
}

impl Histogram {
    pub fn of_queue_times(records: &[CustomerRecord], buckets: usize) -> Histogram {
        // never less than one bucket, whatever the caller asks for
        let buckets = buckets.max(1);

        let max_queue = records
            .iter()
            .map(|record| record.queue_time)
            .max()
            .unwrap_or(0);

        // wide enough that the largest value still maps below `buckets`
        let bucket_width = max_queue / buckets as u32 + 1;

        let mut counts = vec![0; buckets];

        for record in records.iter() {
            counts[(record.queue_time / bucket_width) as usize] += 1;
        }

        Histogram {
            bucket_width,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer_id: u32, arrival_time: u32, start_service: u32, finish_time: u32) -> CustomerRecord {
        CustomerRecord::new(customer_id, arrival_time, start_service, finish_time)
    }

    #[test]
    fn averages_over_the_whole_run() {
        let records = vec![
            record(1, 0, 0, 4),
            record(2, 2, 4, 9),
            record(3, 5, 9, 15),
        ];

        let metrics = RunMetrics::from_records(&records).unwrap();

        assert_eq!(metrics.customers_served, 3);
        assert_eq!(metrics.avg_queue_time, 2.0);
        assert_eq!(metrics.max_queue_time, 4);
        assert_eq!(metrics.avg_system_time, 7.0);
        assert_eq!(metrics.avg_service_duration, 5.0);
    }

    #[test]
    fn an_empty_run_has_no_metrics() {
        assert!(RunMetrics::from_records(&[]).is_none());
    }

    #[test]
    fn buckets_cover_the_full_queue_time_range() {
        let records = vec![
            record(1, 0, 0, 4),
            record(2, 2, 2, 6),
            record(3, 4, 7, 11),
            record(4, 6, 13, 17),
        ];

        let histogram = Histogram::of_queue_times(&records, 4);

        assert_eq!(histogram.bucket_width, 2);
        assert_eq!(histogram.counts, vec![2, 1, 0, 1]);
    }

    #[test]
    fn all_zero_waits_land_in_the_first_bucket() {
        let records = vec![record(1, 0, 0, 4), record(2, 5, 5, 9)];

        let histogram = Histogram::of_queue_times(&records, 10);

        assert_eq!(histogram.bucket_width, 1);
        assert_eq!(histogram.counts[0], 2);
        assert_eq!(histogram.counts.iter().sum::<u32>(), 2);
    }

    #[test]
    fn zero_requested_buckets_collapse_into_a_single_one() {
        let records = vec![record(1, 0, 3, 7)];

        let histogram = Histogram::of_queue_times(&records, 0);

        assert_eq!(histogram.counts, vec![1]);
    }
}

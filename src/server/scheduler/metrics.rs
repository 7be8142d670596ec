//! Counters emitted by the lifecycle scheduler.
//!
//! The scheduler records through the `SchedulerMetrics` trait rather than global
//! statics, so tests can inject their own sink and the HTTP layer can read a snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::scheduler::SchedulerMetricsDto;

/// One monotonic counter per job outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulerCounter {
    EventStartSuccess,
    EventStartFailure,
    EventEndSuccess,
    EventEndFailure,
    TrackStartSuccess,
    TrackStartFailure,
    TrackEndSuccess,
    TrackEndFailure,
    RegistrationSuccess,
    RegistrationFailure,
}

impl SchedulerCounter {
    pub const ALL: [SchedulerCounter; 10] = [
        Self::EventStartSuccess,
        Self::EventStartFailure,
        Self::EventEndSuccess,
        Self::EventEndFailure,
        Self::TrackStartSuccess,
        Self::TrackStartFailure,
        Self::TrackEndSuccess,
        Self::TrackEndFailure,
        Self::RegistrationSuccess,
        Self::RegistrationFailure,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Sink for scheduler counters.
pub trait SchedulerMetrics: Send + Sync {
    /// Increments `counter` by one.
    fn record(&self, counter: SchedulerCounter);

    /// Current value of `counter`.
    fn value(&self, counter: SchedulerCounter) -> u64;

    fn snapshot(&self) -> SchedulerMetricsDto {
        SchedulerMetricsDto {
            event_start_success: self.value(SchedulerCounter::EventStartSuccess),
            event_start_failure: self.value(SchedulerCounter::EventStartFailure),
            event_end_success: self.value(SchedulerCounter::EventEndSuccess),
            event_end_failure: self.value(SchedulerCounter::EventEndFailure),
            track_start_success: self.value(SchedulerCounter::TrackStartSuccess),
            track_start_failure: self.value(SchedulerCounter::TrackStartFailure),
            track_end_success: self.value(SchedulerCounter::TrackEndSuccess),
            track_end_failure: self.value(SchedulerCounter::TrackEndFailure),
            registration_success: self.value(SchedulerCounter::RegistrationSuccess),
            registration_failure: self.value(SchedulerCounter::RegistrationFailure),
        }
    }
}

/// In-process counters backed by atomics.
#[derive(Debug, Default)]
pub struct AtomicSchedulerMetrics {
    counters: [AtomicU64; SchedulerCounter::ALL.len()],
}

impl AtomicSchedulerMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchedulerMetrics for AtomicSchedulerMetrics {
    fn record(&self, counter: SchedulerCounter) {
        self.counters[counter.index()].fetch_add(1, Ordering::Relaxed);
    }

    fn value(&self, counter: SchedulerCounter) -> u64 {
        self.counters[counter.index()].load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_independent() {
        let metrics = AtomicSchedulerMetrics::new();

        metrics.record(SchedulerCounter::TrackEndFailure);
        metrics.record(SchedulerCounter::TrackEndFailure);
        metrics.record(SchedulerCounter::EventStartSuccess);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.track_end_failure, 2);
        assert_eq!(snapshot.event_start_success, 1);
        assert_eq!(snapshot.track_end_success, 0);
        assert_eq!(snapshot.registration_failure, 0);
    }
}

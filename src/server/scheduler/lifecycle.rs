//! Time-driven status transitions for events and tracks.
//!
//! Two cron jobs (events, tracks) run on the same schedule. Each tick runs a start pass
//! (`scheduled` -> `in_process`) followed by an end pass (-> `completed`). Every item
//! is transitioned in its own transaction; a failing item is logged and counted and the
//! rest of the batch still runs.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::{
    error::AppError,
    scheduler::metrics::{SchedulerCounter, SchedulerMetrics},
    service::{event::EventService, track::TrackService},
};

/// Which lifecycle a target drives; selects the counters a pass records to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleKind {
    Event,
    Track,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    End,
}

impl LifecycleKind {
    fn label(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Track => "track",
        }
    }

    /// Success and failure counters for a pass.
    fn counters(self, phase: Phase) -> (SchedulerCounter, SchedulerCounter) {
        match (self, phase) {
            (Self::Event, Phase::Start) => (
                SchedulerCounter::EventStartSuccess,
                SchedulerCounter::EventStartFailure,
            ),
            (Self::Event, Phase::End) => (
                SchedulerCounter::EventEndSuccess,
                SchedulerCounter::EventEndFailure,
            ),
            (Self::Track, Phase::Start) => (
                SchedulerCounter::TrackStartSuccess,
                SchedulerCounter::TrackStartFailure,
            ),
            (Self::Track, Phase::End) => (
                SchedulerCounter::TrackEndSuccess,
                SchedulerCounter::TrackEndFailure,
            ),
        }
    }
}

/// Something whose status the scheduler advances.
///
/// Implemented by `EventService` and `TrackService`. Eligibility is decided by the
/// store; `start` and `end` must each be atomic for a single item.
#[async_trait]
pub trait LifecycleTarget: Send + Sync {
    fn kind(&self) -> LifecycleKind;

    /// Ids of items whose window has opened and that are still scheduled.
    async fn find_to_start(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError>;

    /// Ids of items whose window has closed and that are not yet completed.
    async fn find_to_end(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError>;

    async fn start(&self, id: i32) -> Result<(), AppError>;

    async fn end(&self, id: i32) -> Result<(), AppError>;
}

/// Outcome of one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Outcome of one tick. A pass is `None` when its eligible items couldn't be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionReport {
    pub start: Option<PassReport>,
    pub end: Option<PassReport>,
}

/// Runs the start pass and then the end pass for `target`.
///
/// # Arguments
/// - `target`: Events or tracks to advance
/// - `metrics`: Sink receiving one success or failure per attempted item
/// - `now`: Reference time for eligibility
///
/// # Returns
/// - `TransitionReport` with per-pass counts; errors never escape a tick
pub async fn run_transitions(
    target: &dyn LifecycleTarget,
    metrics: &dyn SchedulerMetrics,
    now: DateTime<Utc>,
) -> TransitionReport {
    TransitionReport {
        start: run_pass(target, metrics, Phase::Start, now).await,
        end: run_pass(target, metrics, Phase::End, now).await,
    }
}

async fn run_pass(
    target: &dyn LifecycleTarget,
    metrics: &dyn SchedulerMetrics,
    phase: Phase,
    now: DateTime<Utc>,
) -> Option<PassReport> {
    let kind = target.kind();
    let (success, failure) = kind.counters(phase);

    let listed = match phase {
        Phase::Start => target.find_to_start(now).await,
        Phase::End => target.find_to_end(now).await,
    };

    let ids = match listed {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(kind = kind.label(), ?phase, "Failed to list eligible items: {}", e);
            return None;
        }
    };

    let mut report = PassReport::default();

    for id in ids {
        let result = match phase {
            Phase::Start => target.start(id).await,
            Phase::End => target.end(id).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(kind = kind.label(), id, ?phase, "Lifecycle transition applied");
                metrics.record(success);
                report.succeeded += 1;
            }
            Err(e) => {
                tracing::error!(
                    kind = kind.label(),
                    id,
                    ?phase,
                    "Lifecycle transition failed: {}",
                    e
                );
                metrics.record(failure);
                report.failed += 1;
            }
        }
    }

    Some(report)
}

/// Handle to the running lifecycle jobs.
///
/// Dropping the handle leaves the jobs running; call `shutdown` to stop them.
pub struct LifecycleScheduler {
    scheduler: JobScheduler,
}

impl LifecycleScheduler {
    /// Registers the event and track jobs and starts ticking.
    ///
    /// A job that fails to register (for example because of a malformed schedule) is
    /// logged and counted; the other job and the rest of the process carry on.
    ///
    /// # Arguments
    /// - `db`: Database connection the jobs open their transactions on
    /// - `metrics`: Sink for transition and registration counters
    /// - `schedule`: Cron expression with a seconds field, e.g. `0 * * * * *`
    ///
    /// # Returns
    /// - `Ok(LifecycleScheduler)`: Scheduler started
    /// - `Err(AppError::SchedulerErr)`: The scheduler itself could not be created or started
    pub async fn start(
        db: DatabaseConnection,
        metrics: Arc<dyn SchedulerMetrics>,
        schedule: &str,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;

        for kind in [LifecycleKind::Event, LifecycleKind::Track] {
            let registered = match lifecycle_job(schedule, kind, db.clone(), metrics.clone()) {
                Ok(job) => scheduler.add(job).await.map(|_| ()),
                Err(e) => Err(e),
            };

            match registered {
                Ok(()) => {
                    tracing::info!(kind = kind.label(), schedule, "Lifecycle job registered");
                    metrics.record(SchedulerCounter::RegistrationSuccess);
                }
                Err(e) => {
                    tracing::warn!(
                        kind = kind.label(),
                        schedule,
                        "Failed to register lifecycle job: {}",
                        e
                    );
                    metrics.record(SchedulerCounter::RegistrationFailure);
                }
            }
        }

        scheduler.start().await?;

        tracing::info!("Lifecycle scheduler started");

        Ok(Self { scheduler })
    }

    /// Stops all jobs. A tick already in progress is not interrupted.
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;

        tracing::info!("Lifecycle scheduler stopped");

        Ok(())
    }
}

fn lifecycle_job(
    schedule: &str,
    kind: LifecycleKind,
    db: DatabaseConnection,
    metrics: Arc<dyn SchedulerMetrics>,
) -> Result<Job, JobSchedulerError> {
    Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let metrics = metrics.clone();

        Box::pin(async move {
            let now = Utc::now();

            let report = match kind {
                LifecycleKind::Event => {
                    run_transitions(&EventService::new(&db), metrics.as_ref(), now).await
                }
                LifecycleKind::Track => {
                    run_transitions(&TrackService::new(&db), metrics.as_ref(), now).await
                }
            };

            tracing::debug!(kind = kind.label(), ?report, "Lifecycle tick finished");
        })
    })
}

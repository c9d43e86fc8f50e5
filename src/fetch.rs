//! Batched, bounded-concurrency fetching of per-employee attendance data.
//!
//! The remote attendance API is reached through the [`AttendanceSource`] trait,
//! implemented by the caller's HTTP client. [`fetch_all`] fans out one request
//! per employee with a cap on requests in flight, and returns only once every
//! employee's data has arrived, so the pure classification core never has to
//! reason about concurrency.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeMonthData;

/// A provider of per-employee monthly attendance data.
pub trait AttendanceSource: Send + Sync + 'static {
    /// Fetches one employee's punch records and leave history for a month.
    fn fetch_employee_month(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> impl Future<Output = EngineResult<EmployeeMonthData>> + Send;
}

/// Fetches data for every employee with at most `max_concurrency` requests in
/// flight.
///
/// Duplicate employee ids are fetched once. The first failure aborts the
/// remaining requests and is returned.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `max_concurrency` is zero, the
/// source's error for a failed fetch, and [`EngineError::FetchFailed`] if a
/// fetch task panicked or was cancelled.
pub async fn fetch_all<S: AttendanceSource>(
    source: Arc<S>,
    employee_ids: &[String],
    year: i32,
    month: u32,
    max_concurrency: usize,
) -> EngineResult<HashMap<String, EmployeeMonthData>> {
    if max_concurrency == 0 {
        return Err(EngineError::InvalidInput {
            message: "max_concurrency must be at least 1".to_string(),
        });
    }

    let semaphore = Arc::new(Semaphore::new(max_concurrency));
    let mut tasks = JoinSet::new();
    let mut results = HashMap::with_capacity(employee_ids.len());

    for employee_id in employee_ids {
        if results.contains_key(employee_id) {
            continue;
        }
        // Reserve the slot so duplicates are skipped before their fetch completes.
        results.insert(employee_id.clone(), EmployeeMonthData::default());

        let source = Arc::clone(&source);
        let semaphore = Arc::clone(&semaphore);
        let employee_id = employee_id.clone();
        tasks.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    return (
                        employee_id.clone(),
                        Err(EngineError::FetchFailed {
                            employee_id,
                            message: e.to_string(),
                        }),
                    );
                }
            };
            debug!(employee_id = %employee_id, year, month, "Fetching attendance data");
            let data = source.fetch_employee_month(&employee_id, year, month).await;
            (employee_id, data)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (employee_id, data) = joined.map_err(|e| EngineError::FetchFailed {
            employee_id: "<unknown>".to_string(),
            message: e.to_string(),
        })?;
        match data {
            Ok(data) => {
                results.insert(employee_id, data);
            }
            Err(err) => {
                warn!(employee_id = %employee_id, error = %err, "Attendance fetch failed");
                tasks.abort_all();
                return Err(err);
            }
        }
    }

    Ok(results)
}

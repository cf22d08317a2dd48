//! Progress logging utilities.

use log::info;

/// Logs how many records have been accepted so far and the rate.
///
/// # Arguments
///
/// * `start_time` - The start time of the load
/// * `accepted` - Number of records handed to storage so far
pub fn log_progress(start_time: std::time::Instant, accepted: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        accepted as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Accepted {} records in {:.2} seconds (~{:.2} records/sec)",
        accepted, elapsed_secs, rate
    );
}

use lazy_static::lazy_static;
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

lazy_static! {
    // Error response metrics
    pub static ref ERROR_RESPONSES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "error_responses_total",
        "Total error responses written",
        &["status"]
    )
    .unwrap();

    pub static ref ERROR_ENTRIES_TOTAL: IntCounter = register_int_counter!(
        "error_entries_total",
        "Total error entries written across all responses"
    )
    .unwrap();

    pub static ref ERROR_SERIALIZATION_FAILURES_TOTAL: IntCounter = register_int_counter!(
        "error_serialization_failures_total",
        "Total error responses whose body could not be produced"
    )
    .unwrap();
}

/// Initialize all metrics (forces lazy_static evaluation)
pub fn init_metrics() {
    lazy_static::initialize(&ERROR_RESPONSES_TOTAL);
    lazy_static::initialize(&ERROR_ENTRIES_TOTAL);
    lazy_static::initialize(&ERROR_SERIALIZATION_FAILURES_TOTAL);
}

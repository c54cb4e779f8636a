// Each bench binary uses a different subset of the workloads and helpers.
#[allow(dead_code)]
pub mod workload;

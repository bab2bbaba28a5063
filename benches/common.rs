use gs1_scan::tools::{bench_limit_from_env, load_scans, scans_path_from_env};

pub fn collect_scans() -> Vec<String> {
    let path = scans_path_from_env();
    let limit = bench_limit_from_env();
    load_scans(&path, limit).unwrap_or_default()
}

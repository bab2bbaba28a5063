use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default scan list from environment variables.
pub fn scans_path_from_env() -> PathBuf {
    env::var("GS1_SCANS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("benches/scans/sample.txt"))
}

/// Default bench limit from environment variables.
///
/// Returns `None` (whole list) when `GS1_BENCH_LIMIT` is unset or set to `0`.
pub fn bench_limit_from_env() -> Option<usize> {
    match env::var("GS1_BENCH_LIMIT") {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|v| if v == 0 { None } else { Some(v) }),
        Err(_) => None,
    }
}

/// Split a scan list into raw scans.
///
/// One scan per line. Blank lines and lines starting with `#` are skipped;
/// everything else is kept verbatim apart from the line ending, since leading
/// or trailing spaces can be part of a payload.
pub fn parse_scan_list(contents: &str, limit: Option<usize>) -> Vec<String> {
    let scans = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string);
    match limit {
        Some(limit) => scans.take(limit).collect(),
        None => scans.collect(),
    }
}

/// Load a scan list file.
pub fn load_scans<P: AsRef<Path>>(path: P, limit: Option<usize>) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_scan_list(&contents, limit))
}

use std::fs;

/// Resident set size of this process in KB, or 0 where `/proc` is unavailable.
pub fn get_rss_memory() -> u64 {
    fs::read_to_string("/proc/self/statm")
        .ok()
        .and_then(|statm| parse_statm_rss(&statm))
        .unwrap_or(0)
}

fn parse_statm_rss(statm: &str) -> Option<u64> {
    let pages = statm.split_whitespace().nth(1)?.parse::<u64>().ok()?;
    Some(pages * 4096 / 1024)
}

/// Upper bound on concurrent metadata fetches per listing request.
/// Sibling stats are independent, so a small pool hides per-call
/// latency without flooding the disk with requests.
pub const STAT_WORKERS: usize = 8;

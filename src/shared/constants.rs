/// Number of reports shown on the public landing summary
#[allow(dead_code)]
pub const RECENT_SUMMARY_LIMIT: usize = 6;

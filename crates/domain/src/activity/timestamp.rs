use chrono::NaiveDateTime;

/// Format a wall-clock time as `(DD/MM/YYYY) hh:mm AM|PM`.
///
/// Hours are 12-hour wall clock (midnight renders as `12`), zero-padded
/// to two digits. Every activity log line carries exactly this pattern,
/// so the formatter lives here rather than at each recording call site.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("(%d/%m/%Y) %I:%M %p").to_string()
}

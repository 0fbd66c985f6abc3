use domain::activity::error::ActivityError;

/// Pluggable append-only store for activity log lines.
///
/// The store owns the full ordered sequence of recorded lines; entries are
/// only ever appended, never mutated or deleted by this subsystem.
/// Implementations must serialize concurrent appends so simultaneous
/// recordings never interleave partial lines or lose entries. The trait is
/// object-safe for use behind `Arc<dyn ActivityStore>`.
pub trait ActivityStore: Send + Sync {
    /// Durably append one line (without its terminator) to the store.
    fn append_line(&self, line: &str) -> Result<(), ActivityError>;

    /// Read every stored line, oldest first.
    fn read_lines(&self) -> Result<Vec<String>, ActivityError>;
}

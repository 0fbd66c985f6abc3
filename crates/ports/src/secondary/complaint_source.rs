use domain::complaint::entity::Complaint;
use domain::stats::error::StatsError;

/// Read-only view of the complaint collection owned by the persistence layer.
pub trait ComplaintSource: Send + Sync {
    /// Snapshot of all complaints, in storage discovery order.
    fn list_complaints(&self) -> Result<Vec<Complaint>, StatsError>;
}

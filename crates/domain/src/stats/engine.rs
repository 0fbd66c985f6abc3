use std::collections::{BTreeMap, HashMap};

use crate::complaint::entity::Complaint;
use crate::user::entity::UserId;

/// Group complaints by status label and count each group.
pub fn count_by_status(complaints: &[Complaint]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for complaint in complaints {
        *counts.entry(complaint.status.label().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Group complaints by department and count each group.
pub fn count_by_department(complaints: &[Complaint]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for complaint in complaints {
        *counts.entry(complaint.department.clone()).or_insert(0) += 1;
    }
    counts
}

/// Rank submitters by complaint count, descending, capped at `limit`.
///
/// Ties keep the order in which a submitter first appears in the input
/// (stable sort over first-seen accumulation), so repeated runs over the
/// same collection produce the same ranking. Role filtering happens later,
/// once identities are resolved against the user directory.
pub fn top_submitters(complaints: &[Complaint], limit: usize) -> Vec<(UserId, u64)> {
    let mut order: Vec<UserId> = Vec::new();
    let mut counts: HashMap<UserId, u64> = HashMap::new();
    for complaint in complaints {
        let entry = counts.entry(complaint.created_by.clone()).or_insert(0);
        if *entry == 0 {
            order.push(complaint.created_by.clone());
        }
        *entry += 1;
    }

    let mut ranked: Vec<(UserId, u64)> = order
        .into_iter()
        .map(|id| {
            let count = counts[&id];
            (id, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complaint::entity::{ComplaintId, ComplaintStatus};

    fn complaint(id: &str, by: &str, department: &str, status: &str) -> Complaint {
        Complaint {
            id: ComplaintId(id.to_string()),
            title: format!("complaint {id}"),
            description: String::new(),
            department: department.to_string(),
            status: ComplaintStatus::from(status.to_string()),
            created_by: UserId(by.to_string()),
            submitted_at_ns: 0,
        }
    }

    #[test]
    fn empty_collection_yields_empty_counts() {
        assert!(count_by_status(&[]).is_empty());
        assert!(count_by_department(&[]).is_empty());
        assert!(top_submitters(&[], 5).is_empty());
    }

    #[test]
    fn counts_statuses_including_unrecognized() {
        let complaints = vec![
            complaint("c1", "u1", "IT", "Pending"),
            complaint("c2", "u1", "IT", "Pending"),
            complaint("c3", "u2", "HR", "Resolved"),
            complaint("c4", "u2", "HR", "Escalated"),
        ];
        let counts = count_by_status(&complaints);
        assert_eq!(counts["Pending"], 2);
        assert_eq!(counts["Resolved"], 1);
        assert_eq!(counts["Escalated"], 1);
    }

    #[test]
    fn counts_departments() {
        let complaints = vec![
            complaint("c1", "u1", "IT", "Pending"),
            complaint("c2", "u1", "IT", "Pending"),
            complaint("c3", "u2", "HR", "Rejected"),
        ];
        let counts = count_by_department(&complaints);
        assert_eq!(counts["IT"], 2);
        assert_eq!(counts["HR"], 1);
    }

    #[test]
    fn ranks_submitters_descending() {
        let complaints = vec![
            complaint("c1", "u1", "IT", "Pending"),
            complaint("c2", "u2", "IT", "Pending"),
            complaint("c3", "u1", "IT", "Pending"),
            complaint("c4", "u1", "IT", "Pending"),
            complaint("c5", "u2", "IT", "Pending"),
            complaint("c6", "u3", "IT", "Pending"),
        ];
        let ranked = top_submitters(&complaints, 5);
        assert_eq!(
            ranked,
            vec![
                (UserId("u1".to_string()), 3),
                (UserId("u2".to_string()), 2),
                (UserId("u3".to_string()), 1),
            ]
        );
    }

    #[test]
    fn caps_at_limit() {
        let complaints: Vec<Complaint> = (0..8)
            .map(|i| complaint(&format!("c{i}"), &format!("u{i}"), "IT", "Pending"))
            .collect();
        assert_eq!(top_submitters(&complaints, 5).len(), 5);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let complaints = vec![
            complaint("c1", "zoe", "IT", "Pending"),
            complaint("c2", "amy", "IT", "Pending"),
            complaint("c3", "zoe", "IT", "Pending"),
            complaint("c4", "amy", "IT", "Pending"),
        ];
        let ranked = top_submitters(&complaints, 5);
        assert_eq!(ranked[0].0, UserId("zoe".to_string()));
        assert_eq!(ranked[1].0, UserId("amy".to_string()));
    }
}

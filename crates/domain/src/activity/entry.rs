use chrono::NaiveDateTime;

use super::timestamp::format_timestamp;

/// Sentinel actor used when the acting identity cannot be resolved,
/// e.g. a logout request whose auth context is already gone.
pub const GUEST_ACTOR: &str = "Guest";

/// One activity to be recorded: who did what.
///
/// An entry is formatted into a single immutable log line; once written
/// it is never mutated or deleted individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub actor: String,
    pub action: String,
}

impl ActivityEntry {
    /// Build an entry, normalizing the inputs for the one-entry-one-line
    /// invariant: an empty or whitespace actor falls back to [`GUEST_ACTOR`],
    /// and embedded line terminators in the action are replaced by spaces.
    pub fn new(actor: &str, action: &str) -> Self {
        let actor = flatten(actor);
        let actor = if actor.is_empty() {
            GUEST_ACTOR.to_string()
        } else {
            actor
        };
        Self {
            actor,
            action: flatten(action),
        }
    }

    /// Render the full log line: `[(DD/MM/YYYY) hh:mm AM|PM] <actor> <action>`.
    pub fn format_line(&self, at: NaiveDateTime) -> String {
        format!("[{}] {} {}", format_timestamp(at), self.actor, self.action)
    }
}

/// Replace line terminators with spaces and trim, preserving the
/// one-entry-one-line invariant for arbitrary caller input.
fn flatten(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

/// A log line split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The raw timestamp text, e.g. `(05/03/2024) 02:47 PM`.
    pub timestamp: String,
    pub actor: String,
    pub action: String,
}

/// Parse a formatted log line back into timestamp, actor, and action.
///
/// Returns `None` for lines that do not carry the `[timestamp] actor action`
/// shape. Actors never contain spaces (usernames), so the first token after
/// the closing bracket is the actor and the remainder is the action text.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let rest = line.strip_prefix('[')?;
    let (timestamp, rest) = rest.split_once("] ")?;
    let (actor, action) = rest.split_once(' ')?;
    if actor.is_empty() || action.is_empty() {
        return None;
    }
    Some(ParsedLine {
        timestamp: timestamp.to_string(),
        actor: actor.to_string(),
        action: action.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 47, 0)
            .unwrap()
    }

    #[test]
    fn formats_the_documented_example() {
        let entry = ActivityEntry::new("admin", "deleted user bob");
        assert_eq!(
            entry.format_line(sample_time()),
            "[(05/03/2024) 02:47 PM] admin deleted user bob"
        );
    }

    #[test]
    fn empty_actor_falls_back_to_guest() {
        let entry = ActivityEntry::new("", "logged out");
        assert_eq!(entry.actor, GUEST_ACTOR);
        let entry = ActivityEntry::new("   ", "logged out");
        assert_eq!(entry.actor, GUEST_ACTOR);
    }

    #[test]
    fn newlines_in_action_are_flattened() {
        let entry = ActivityEntry::new("alice", "submitted complaint: 'no\nheating\r\nin office'");
        assert!(!entry.action.contains('\n'));
        assert!(!entry.action.contains('\r'));
        let line = entry.format_line(sample_time());
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn newlines_in_actor_are_flattened() {
        let entry = ActivityEntry::new("ali\nce", "logged in");
        assert_eq!(entry.actor, "ali ce");
        assert_eq!(entry.format_line(sample_time()).lines().count(), 1);
    }

    #[test]
    fn round_trips_actor_and_action() {
        let entry = ActivityEntry::new("alice", "changed status of complaint 'Broken AC' to 'Resolved'");
        let line = entry.format_line(sample_time());
        let parsed = parse_line(&line).unwrap();
        assert_eq!(parsed.timestamp, "(05/03/2024) 02:47 PM");
        assert_eq!(parsed.actor, entry.actor);
        assert_eq!(parsed.action, entry.action);
    }

    #[test]
    fn round_trips_actions_with_embedded_quotes() {
        let entry = ActivityEntry::new("bob", "submitted complaint: 'printer says \"PC LOAD LETTER\"'");
        let parsed = parse_line(&entry.format_line(sample_time())).unwrap();
        assert_eq!(parsed.actor, "bob");
        assert_eq!(parsed.action, entry.action);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("no brackets here").is_none());
        assert!(parse_line("[(05/03/2024) 02:47 PM]").is_none());
        assert!(parse_line("[(05/03/2024) 02:47 PM] loneactor").is_none());
    }
}

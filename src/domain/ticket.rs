use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::error::{AppError, AppResult};

pub const DEFAULT_TRACKER_CODE: &str = "GCW";

/// Placeholder summary for tickets the tracker no longer knows about.
pub const UNAVAILABLE_SUMMARY: &str = "_Ticket information unavailable_";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketId(String);

impl TicketId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedTicket {
    pub id: TicketId,
    pub summary: String,
}

/// Matches ticket references of the form `<CODE>-<digits>` in commit subjects.
pub struct TicketPattern {
    regex: Regex,
}

impl TicketPattern {
    pub fn new(code: &str) -> AppResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::Configuration(
                "tracker code must not be empty".to_string(),
            ));
        }
        let regex = Regex::new(&format!(r"{}-\d+", regex::escape(code)))
            .map_err(|err| AppError::Configuration(format!("invalid tracker code: {err}")))?;
        Ok(Self { regex })
    }

    /// Scans the log line by line, taking the first match per line only, and
    /// returns the identifiers deduplicated in first-seen order.
    pub fn extract(&self, log: &str) -> Vec<TicketId> {
        let mut seen = HashSet::new();
        let mut tickets = Vec::new();
        for line in log.lines() {
            let Some(found) = self.regex.find(line) else {
                continue;
            };
            let id = found.as_str();
            if seen.insert(id.to_string()) {
                tickets.push(TicketId(id.to_string()));
            }
        }
        tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tickets: &[TicketId]) -> Vec<&str> {
        tickets.iter().map(TicketId::as_str).collect()
    }

    #[test]
    fn extracts_in_first_seen_order_without_duplicates() {
        let pattern = TicketPattern::new(DEFAULT_TRACKER_CODE).unwrap();
        let log = "abc123 Fix GCW-10 bug\n\
                   def456 GCW-10 followup\n\
                   ghi789 no ticket\n\
                   jkl012 GCW-22 feature";
        assert_eq!(ids(&pattern.extract(log)), vec!["GCW-10", "GCW-22"]);
    }

    #[test]
    fn takes_only_the_first_match_per_line() {
        let pattern = TicketPattern::new(DEFAULT_TRACKER_CODE).unwrap();
        let log = "abc123 GCW-1 relates to GCW-2";
        assert_eq!(ids(&pattern.extract(log)), vec!["GCW-1"]);
    }

    #[test]
    fn ignores_other_tracker_prefixes() {
        let pattern = TicketPattern::new("FOO").unwrap();
        let log = "aaa GCW-10 ported\nbbb FOO-7 shipped\nccc FOO-7 again";
        assert_eq!(ids(&pattern.extract(log)), vec!["FOO-7"]);
    }

    #[test]
    fn empty_log_yields_no_tickets() {
        let pattern = TicketPattern::new(DEFAULT_TRACKER_CODE).unwrap();
        assert!(pattern.extract("").is_empty());
    }

    #[test]
    fn rejects_blank_tracker_code() {
        assert!(TicketPattern::new("   ").is_err());
    }
}

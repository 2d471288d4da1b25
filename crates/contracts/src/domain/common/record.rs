use serde::{de::DeserializeOwned, Serialize};

/// A flat record kept in one of the registries (animals, tickets, ...).
///
/// Ids are human-readable strings with a numeric tail (`A1007`, `T-4392`,
/// `RPT-2025-003`). The store allocates the next id by taking the largest
/// numeric tail in the collection and asking the record to format it.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name used in logs, routes and export file names (`animals`, `tickets`).
    const ENTITY: &'static str;

    /// Record id as shown to users.
    fn id(&self) -> String;

    /// Short human label, used in log lines and summaries.
    fn title(&self) -> &str;

    /// Rewrite the id from an allocated sequence number.
    fn assign_id(&mut self, sequence: u64);

    /// Numeric part of the id.
    fn sequence(&self) -> Option<u64> {
        trailing_number(&self.id())
    }
}

/// Parse the trailing run of ASCII digits (`"RPT-2025-007"` -> `7`).
pub fn trailing_number(id: &str) -> Option<u64> {
    let digits: String = id
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Next free sequence number for a collection, `first` when it is empty.
pub fn next_sequence<T: Record>(items: &[T], first: u64) -> u64 {
    items
        .iter()
        .filter_map(|r| r.sequence())
        .max()
        .map(|max| max + 1)
        .unwrap_or(first)
}

//! Search filter over the billboard collection.
//!
//! A record matches a query when the query is a case-insensitive substring of
//! its code or region, or a substring of its decimal id. The filter is stable:
//! matching records keep their relative order.

use model::BillboardRecord;

/// Returns `true` if `query` is blank, i.e. the filter is a no-op.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Disjunctive match of a single record against `query`, taken as given.
/// A blank query matches everything.
pub fn matches(record: &BillboardRecord, query: &str) -> bool {
    if is_blank(query) {
        return true;
    }

    let needle = query.to_lowercase();

    record.billboard_id.to_lowercase().contains(&needle)
        || record.region.to_lowercase().contains(&needle)
        || record.id.to_string().contains(&needle)
}

/// Filters `collection` by `query`. Blank queries return the collection unchanged.
pub fn apply(collection: &[BillboardRecord], query: &str) -> Vec<BillboardRecord> {
    if is_blank(query) {
        return collection.to_vec();
    }

    let filtered: Vec<BillboardRecord> = collection
        .iter()
        .filter(|record| matches(record, query))
        .cloned()
        .collect();

    tracing::trace!(
        query,
        total = collection.len(),
        matched = filtered.len(),
        "Applied billboard search filter"
    );
    filtered
}

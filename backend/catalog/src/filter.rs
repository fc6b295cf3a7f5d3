use crate::models::GameRecord;

pub const FEATURED_COUNT: usize = 3;

/// Case-insensitive substring search over name, developer and category.
/// An empty query keeps every record. Order is preserved.
pub fn filter<'a>(records: &'a [GameRecord], query: &str) -> Vec<&'a GameRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

fn matches(record: &GameRecord, needle: &str) -> bool {
    [&record.name, &record.developer, &record.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn featured(records: &[GameRecord]) -> &[GameRecord] {
    &records[..records.len().min(FEATURED_COUNT)]
}

pub fn find<'a>(records: &'a [GameRecord], id: &str) -> Option<&'a GameRecord> {
    records.iter().find(|record| record.id == id)
}

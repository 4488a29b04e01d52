use crate::content::ContentItem;

/// Filter the pool by case-insensitive substring containment.
///
/// A blank query yields nothing rather than the whole pool. Matches keep
/// their pool order; there is no ranking.
pub fn search<'a>(pool: &'a [ContentItem], query: &str) -> Vec<&'a ContentItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    pool.iter()
        .filter(|item| item.haystack().contains(&needle))
        .collect()
}

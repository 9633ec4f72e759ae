//! Named lookups over cached record lists.
//!
//! Records never compare themselves against raw ids or names. Callers pick
//! the lookup they mean instead.

/// Records carrying a vendor assigned numeric id
pub trait Identified {
    fn id(&self) -> i64;
}

/// Records carrying a display name
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Whole name, case sensitive
    Exact,
    /// Fragment anywhere in the name, case sensitive
    Contains,
    /// Fragment anywhere in the name, ignoring case
    ContainsIgnoreCase,
}

impl NameMatch {
    pub fn matches(&self, name: &str, query: &str) -> bool {
        match self {
            NameMatch::Exact => name == query,
            NameMatch::Contains => name.contains(query),
            NameMatch::ContainsIgnoreCase => name.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// Return the first record with the provided id
pub fn find_by_id<T: Identified>(items: &[T], id: i64) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Return the first record whose name matches the query
pub fn find_by_name<'a, T: Named>(items: &'a [T], query: &str, how: NameMatch) -> Option<&'a T> {
    items.iter().find(|item| how.matches(item.name(), query))
}

/// Return every record whose name matches the query
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str, how: NameMatch) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| how.matches(item.name(), query))
        .collect()
}

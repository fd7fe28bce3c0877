use std::collections::HashSet;

/// Case-insensitive substring test: does `haystack` contain `needle`?
///
/// An empty needle is contained in every haystack.
#[inline]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive equality.
#[inline]
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Insertion-ordered set of strings, deduplicated case-insensitively.
///
/// The first spelling inserted for a term is the one kept.
#[derive(Debug, Clone, Default)]
pub struct CiSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl CiSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term; returns `false` if a case-insensitive duplicate was already present
    pub fn insert(&mut self, term: &str) -> bool {
        if self.seen.insert(term.to_lowercase()) {
            self.items.push(term.to_string());
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

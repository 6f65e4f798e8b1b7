use crate::util::split_comma_list;
use indexmap::IndexSet;

/// Origins trusted for credentialed cross-origin access.
///
/// Fixed once built. Matching is exact string equality; the first spelling of
/// a duplicated entry wins and insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    origins: IndexSet<String>,
}

impl AllowList {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins
                .into_iter()
                .map(|origin| origin.into().trim().to_string())
                .collect(),
        }
    }

    /// Parse a comma-separated list such as `https://a.example,http://localhost:3000`.
    pub fn parse(value: &str) -> Self {
        Self::new(split_comma_list(value))
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;

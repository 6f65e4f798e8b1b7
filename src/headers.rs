use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let merged = merge_vary(
            self.headers.get(header::VARY).map(String::as_str),
            &value.into(),
        );

        match merged {
            Some(value) => {
                self.headers.insert(header::VARY.to_string(), value);
            }
            None => {
                self.headers.shift_remove(header::VARY);
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

/// Merges `incoming` into an existing `Vary` value, dropping blank and
/// case-insensitively duplicated entries. `None` means no `Vary` header.
pub fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let mut deduped: Vec<&str> = Vec::new();
    let entries = existing
        .unwrap_or_default()
        .split(',')
        .chain(incoming.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    for entry in entries {
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    if deduped.is_empty() {
        None
    } else {
        Some(deduped.join(", "))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

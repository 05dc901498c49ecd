use std::collections::HashMap;

use super::entry::RedirectEntry;

/// Path → url lookup table
///
/// Built once, read-only afterwards. Paths are compared as exact,
/// case-sensitive strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    routes: HashMap<String, String>,
}

impl RedirectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries in input order
    ///
    /// A path seen more than once keeps the url of its last occurrence.
    pub fn build(entries: impl IntoIterator<Item = RedirectEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.path, entry.url))
            .collect()
    }

    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(path, url)| (path.as_str(), url.as_str()))
    }
}

impl<P, U> FromIterator<(P, U)> for RedirectTable
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut routes = HashMap::with_capacity(iter.size_hint().0);
        for (path, url) in iter {
            routes.insert(path.into(), url.into());
        }
        Self { routes }
    }
}

impl From<HashMap<String, String>> for RedirectTable {
    fn from(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }
}

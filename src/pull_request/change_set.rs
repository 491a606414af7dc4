/// Ordered `path -> content` changes for one pull request. Empty content
/// empties the file instead of removing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<(String, String)>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a change; an already present path keeps its position and takes
    /// the new content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();

        match self.changes.iter_mut().find(|(existing, _)| *existing == path) {
            Some((_, existing)) => *existing = content,
            None => self.changes.push((path, content)),
        }
    }

    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.changes
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }
}

impl<P, C> FromIterator<(P, C)> for ChangeSet
where
    P: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut changes = ChangeSet::new();
        for (path, content) in iter {
            changes.insert(path, content);
        }
        changes
    }
}

impl<P, C, const N: usize> From<[(P, C); N]> for ChangeSet
where
    P: Into<String>,
    C: Into<String>,
{
    fn from(entries: [(P, C); N]) -> Self {
        entries.into_iter().collect()
    }
}

use indexmap::IndexMap;
use std::{hash::Hash, sync::OnceLock};

/// Ordered `directive -> sources` map with a memoized serialization.
///
/// Directives keep their insertion order, so the rendered header is identical
/// across runs. The cache is filled on first read and dropped by every
/// mutation, which always goes through `&mut self`.
#[derive(Debug, Clone)]
pub(crate) struct DirectiveMap<D, S> {
    policies: IndexMap<D, Vec<S>>,
    cache: OnceLock<String>,
}

impl<D, S> Default for DirectiveMap<D, S> {
    fn default() -> Self {
        Self {
            policies: IndexMap::new(),
            cache: OnceLock::new(),
        }
    }
}

impl<D, S> DirectiveMap<D, S>
where
    D: AsRef<str> + Hash + Eq,
    S: AsRef<str>,
{
    pub fn from_entries(entries: impl IntoIterator<Item = (D, Vec<S>)>) -> Self {
        let mut map = Self::default();
        for (directive, sources) in entries {
            if directive.as_ref().is_empty() {
                continue;
            }
            map.policies.entry(directive).or_default().extend(sources);
        }
        map
    }

    pub fn create(&mut self, directive: D) {
        if directive.as_ref().is_empty() {
            return;
        }

        self.cache.take();
        self.policies.entry(directive).or_default();
    }

    pub fn add(&mut self, directive: D, sources: impl IntoIterator<Item = S>) {
        if directive.as_ref().is_empty() {
            return;
        }

        self.cache.take();
        self.policies.entry(directive).or_default().extend(sources);
    }

    /// Returns `true` if at least one directive was removed.
    pub fn remove<'a>(&mut self, directives: impl IntoIterator<Item = &'a D>) -> bool
    where
        D: 'a,
    {
        let mut removed = false;
        for directive in directives {
            removed |= self.policies.shift_remove(directive).is_some();
        }

        if removed {
            self.cache.take();
        }
        removed
    }

    pub fn contains(&self, directive: &D) -> bool {
        self.policies.contains_key(directive)
    }

    pub fn sources(&self, directive: &D) -> Option<&[S]> {
        self.policies.get(directive).map(Vec::as_slice)
    }

    pub fn directives(&self) -> impl Iterator<Item = &D> {
        self.policies.keys()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// `dir src src; dir; ...`
    pub fn render(&self) -> &str {
        self.cache.get_or_init(|| {
            let mut out = String::new();
            for (directive, sources) in &self.policies {
                if !out.is_empty() {
                    out.push_str("; ");
                }
                out.push_str(directive.as_ref());
                for source in sources {
                    out.push(' ');
                    out.push_str(source.as_ref());
                }
            }
            out
        })
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }
}

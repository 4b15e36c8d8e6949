//! Binding registry: keyword names mapped to actions, in declaration order.

use std::borrow::Cow;
use std::collections::HashMap;

/// An ordered, write-once map from keyword name to binding action.
///
/// Entries keep their declaration order for iteration. Lookup is by exact
/// name through a side index, with no prefix matching or case folding.
pub struct ActionMap<A> {
    entries: Vec<(Cow<'static, str>, A)>,
    index: HashMap<Cow<'static, str>, usize>,
}

impl<A> ActionMap<A> {
    pub fn new() -> Self {
        ActionMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert `action` under `name`. Returns `false` and leaves the map
    /// untouched when the name is already present.
    pub fn emplace(&mut self, name: impl Into<Cow<'static, str>>, action: A) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, action));
        true
    }

    /// Position and action bound to exactly `name`.
    pub fn find(&self, name: &str) -> Option<(usize, &A)> {
        let &position = self.index.get(name)?;
        Some((position, &self.entries[position].1))
    }

    pub fn keyword(&self, position: usize) -> &Cow<'static, str> {
        &self.entries[position].0
    }

    pub fn action(&self, position: usize) -> &A {
        &self.entries[position].1
    }

    pub fn action_mut(&mut self, position: usize) -> &mut A {
        &mut self.entries[position].1
    }

    /// Keyword names in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| &**name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Cow<'static, str>, &A)> + '_ {
        self.entries.iter().map(|(name, action)| (name, action))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for ActionMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

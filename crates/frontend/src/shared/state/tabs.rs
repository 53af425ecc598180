//! Exclusive tab selection over a fixed key set.
//!
//! A `TabSet` owns an ordered, non-empty set of keys with static content
//! bound to each one. Exactly one key is active at all times; swapping the
//! active key is the only mutation the type performs.

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by [`TabSet`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TabError<K: Debug> {
    /// `select` was called with a key outside the fixed set. Recoverable:
    /// the selection is ignored and the active key is unchanged.
    #[error("unknown tab key: {0:?}")]
    UnknownKey(K),
    /// A tab set needs at least one tab.
    #[error("tab set is empty")]
    Empty,
    /// The same key was supplied twice at construction.
    #[error("duplicate tab key: {0:?}")]
    DuplicateKey(K),
}

/// Mutually-exclusive selector over a fixed set of keys.
#[derive(Debug)]
pub struct TabSet<K, C>
where
    K: Copy + Eq + Debug,
{
    entries: Vec<(K, C)>,
    active: K,
}

impl<K, C> TabSet<K, C>
where
    K: Copy + Eq + Debug,
{
    /// Build a tab set from ordered `(key, content)` entries. The first
    /// entry becomes the initial active tab. The set is fixed from here
    /// on: keys and content are never mutated at runtime.
    pub fn new(entries: Vec<(K, C)>) -> Result<Self, TabError<K>> {
        let Some(&(first, _)) = entries.first() else {
            return Err(TabError::Empty);
        };
        for (index, (key, _)) in entries.iter().enumerate() {
            if entries[..index].iter().any(|(seen, _)| seen == key) {
                return Err(TabError::DuplicateKey(*key));
            }
        }
        Ok(Self {
            entries,
            active: first,
        })
    }

    /// Make `key` the active tab. The sole mutator. Selecting the
    /// already-active key is an idempotent no-op; a key outside the set is
    /// rejected and leaves the state unchanged.
    pub fn select(&mut self, key: K) -> Result<(), TabError<K>> {
        if !self.entries.iter().any(|(k, _)| *k == key) {
            return Err(TabError::UnknownKey(key));
        }
        self.active = key;
        Ok(())
    }

    pub fn active_key(&self) -> K {
        self.active
    }

    /// Content bound to the active key. Total: `active ∈ keys` holds by
    /// construction, so the lookup always succeeds.
    pub fn active_content(&self) -> &C {
        self.content(self.active)
            .expect("active key is always a member of the set")
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == key
    }

    pub fn content(&self, key: K) -> Option<&C> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| c)
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::DemoTab;

    fn demo_set() -> TabSet<DemoTab, &'static str> {
        TabSet::new(vec![
            (DemoTab::Athlete, "athlete view"),
            (DemoTab::Coach, "coach view"),
            (DemoTab::Team, "team view"),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_active_is_first_key() {
        let tabs = demo_set();
        assert_eq!(tabs.active_key(), DemoTab::Athlete);
        assert_eq!(*tabs.active_content(), "athlete view");
    }

    #[test]
    fn test_select_swaps_active_content() {
        let mut tabs = demo_set();
        for key in DemoTab::all() {
            tabs.select(key).unwrap();
            assert_eq!(tabs.active_key(), key);
            assert_eq!(tabs.active_content(), tabs.content(key).unwrap());
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = demo_set();
        tabs.select(DemoTab::Coach).unwrap();
        let before = (tabs.active_key(), *tabs.active_content());
        tabs.select(DemoTab::Coach).unwrap();
        assert_eq!((tabs.active_key(), *tabs.active_content()), before);
        tabs.select(DemoTab::Coach).unwrap();
        assert_eq!((tabs.active_key(), *tabs.active_content()), before);
    }

    #[test]
    fn test_unknown_key_leaves_state_unchanged() {
        // Exercise the stringly-typed edge where an out-of-set key can
        // actually be constructed.
        let mut tabs = TabSet::new(vec![("athlete", 1), ("coach", 2), ("team", 3)]).unwrap();
        tabs.select("team").unwrap();

        let err = tabs.select("bogus").unwrap_err();
        assert_eq!(err, TabError::UnknownKey("bogus"));
        assert_eq!(tabs.active_key(), "team");
        assert_eq!(*tabs.active_content(), 3);
    }

    #[test]
    fn test_demo_scenario() {
        let mut tabs = demo_set();
        tabs.select(DemoTab::Team).unwrap();
        assert_eq!(*tabs.active_content(), "team view");
        assert!(!tabs.is_active(DemoTab::Coach));
        assert!(tabs.is_active(DemoTab::Team));
    }

    #[test]
    fn test_empty_set_rejected() {
        let result: Result<TabSet<DemoTab, ()>, _> = TabSet::new(vec![]);
        assert_eq!(result.unwrap_err(), TabError::Empty);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = TabSet::new(vec![(DemoTab::Athlete, 1), (DemoTab::Athlete, 2)]);
        assert_eq!(result.unwrap_err(), TabError::DuplicateKey(DemoTab::Athlete));
    }

    #[test]
    fn test_keys_preserve_order() {
        let tabs = demo_set();
        assert_eq!(tabs.keys().collect::<Vec<_>>(), DemoTab::all());
        assert_eq!(tabs.len(), 3);
        assert!(!tabs.is_empty());
    }
}

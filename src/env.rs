use std::collections::{HashMap, HashSet};
use std::ffi::OsString;

/// Read-only lookup the locator pulls its context from.
///
/// Values are raw `OsString`s so directory names that are not valid UTF-8 still
/// name the same files. Empty values count as unset, so an exported-but-blank
/// variable never turns into a candidate.
pub trait EnvLookup {
    fn get(&self, key: &str) -> Option<OsString>;

    /// True when this layer deliberately clears `key` for any layer behind it.
    fn clears(&self, _key: &str) -> bool {
        false
    }
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key).filter(|value| !value.is_empty())
    }
}

/// Fixed set of values, used for CLI overrides and in tests.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    values: HashMap<String, OsString>,
    cleared: HashSet<String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        let key = key.into();
        self.cleared.remove(&key);
        self.values.insert(key, value.into());
    }

    /// Mark `key` as unset even if a layer behind this one has a value for it.
    pub fn clear(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.values.remove(&key);
        self.cleared.insert(key);
        self
    }
}

impl EnvLookup for MapEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.values.get(key).filter(|value| !value.is_empty()).cloned()
    }

    fn clears(&self, key: &str) -> bool {
        self.cleared.contains(key)
    }
}

/// Looks in `front` first and falls back to `back`, unless `front` clears the key.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    front: A,
    back: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(front: A, back: B) -> Self {
        Self { front, back }
    }
}

impl<A: EnvLookup, B: EnvLookup> EnvLookup for Layered<A, B> {
    fn get(&self, key: &str) -> Option<OsString> {
        if self.front.clears(key) {
            return None;
        }
        self.front.get(key).or_else(|| self.back.get(key))
    }

    fn clears(&self, key: &str) -> bool {
        self.front.clears(key) || self.back.clears(key)
    }
}

use std::{cmp::Ordering, collections::HashMap, hash::Hash, ops::Index, slice};

use derive_ex::Ex;
use serde::{Deserialize, Serialize};

mod apply;
mod diff;
mod patch;

pub use apply::*;
pub use diff::*;
pub use patch::*;


/// A keyed group of values occupying one position in a [`SectionedSequence`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section<S, T> {
    pub key: S,
    pub values: Vec<T>,
}

impl<S, T> Section<S, T> {
    pub fn new(key: S, values: Vec<T>) -> Self {
        Self { key, values }
    }
}

/// An ordered list of sections, each holding an ordered list of values.
///
/// Sections are positional: the same key may appear more than once.
/// Two sequences are equal when they have the same keys and values at every position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Ex)]
#[derive_ex(Default)]
#[default(Self::new())]
#[serde(transparent)]
pub struct SectionedSequence<S, T> {
    sections: Vec<Section<S, T>>,
}

impl<S, T> SectionedSequence<S, T> {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }
    pub fn from_sections(sections: Vec<Section<S, T>>) -> Self {
        Self { sections }
    }

    /// Groups `values` into sections by `key_of`, then sorts the sections by
    /// key and each section's values.
    ///
    /// Both sorts are stable.
    pub fn from_values(
        values: impl IntoIterator<Item = T>,
        mut key_of: impl FnMut(&T) -> S,
        mut compare_keys: impl FnMut(&S, &S) -> Ordering,
        mut compare_values: impl FnMut(&T, &T) -> Ordering,
    ) -> Self
    where
        S: Hash + Eq + Clone,
    {
        let mut positions: HashMap<S, usize> = HashMap::new();
        let mut sections: Vec<Section<S, T>> = Vec::new();
        for value in values {
            let key = key_of(&value);
            if let Some(&index) = positions.get(&key) {
                sections[index].values.push(value);
            } else {
                positions.insert(key.clone(), sections.len());
                sections.push(Section::new(key, vec![value]));
            }
        }
        sections.sort_by(|a, b| compare_keys(&a.key, &b.key));
        for section in &mut sections {
            section.values.sort_by(|a, b| compare_values(a, b));
        }
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
    pub fn get(&self, section: usize) -> Option<&Section<S, T>> {
        self.sections.get(section)
    }
    pub fn key(&self, section: usize) -> Option<&S> {
        Some(&self.get(section)?.key)
    }
    pub fn values(&self, section: usize) -> Option<&[T]> {
        Some(&self.get(section)?.values)
    }
    pub fn keys(&self) -> impl Iterator<Item = &S> + '_ {
        self.sections.iter().map(|s| &s.key)
    }
    pub fn iter(&self) -> slice::Iter<'_, Section<S, T>> {
        self.sections.iter()
    }
    pub fn as_slice(&self) -> &[Section<S, T>] {
        &self.sections
    }
    pub fn into_sections(self) -> Vec<Section<S, T>> {
        self.sections
    }

    /// Returns a copy with one more section at the end.
    pub fn append(&self, key: S, values: Vec<T>) -> Self
    where
        S: Clone,
        T: Clone,
    {
        let mut this = self.clone();
        this.push(key, values);
        this
    }
    pub fn push(&mut self, key: S, values: Vec<T>) {
        self.sections.push(Section::new(key, values));
    }
}

impl<S, T> Index<usize> for SectionedSequence<S, T> {
    type Output = Section<S, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sections[index]
    }
}
impl<S, T> From<Vec<Section<S, T>>> for SectionedSequence<S, T> {
    fn from(sections: Vec<Section<S, T>>) -> Self {
        Self::from_sections(sections)
    }
}
impl<S, T> FromIterator<(S, Vec<T>)> for SectionedSequence<S, T> {
    fn from_iter<I: IntoIterator<Item = (S, Vec<T>)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(key, values)| Section::new(key, values))
                .collect(),
        }
    }
}
impl<'a, S, T> IntoIterator for &'a SectionedSequence<S, T> {
    type Item = &'a Section<S, T>;
    type IntoIter = slice::Iter<'a, Section<S, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<S, T> IntoIterator for SectionedSequence<S, T> {
    type Item = Section<S, T>;
    type IntoIter = std::vec::IntoIter<Section<S, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

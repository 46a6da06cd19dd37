use std::{fmt, slice};

use derive_ex::Ex;
use parse_display::Display;
use serde::{Deserialize, Serialize};

use crate::{table::ComparisonTable, DiffOptions, InvalidScript, StepKind, TieBreak};


/// A single insertion or deletion.
///
/// The index of an insertion is a position in the result; the index of a
/// deletion is a position in the source.
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffStep<T> {
    #[display("+{value}@{index}")]
    Insert { index: usize, value: T },
    #[display("-{value}@{index}")]
    Delete { index: usize, value: T },
}

impl<T> DiffStep<T> {
    pub fn index(&self) -> usize {
        match self {
            DiffStep::Insert { index, .. } | DiffStep::Delete { index, .. } => *index,
        }
    }
    pub fn value(&self) -> &T {
        match self {
            DiffStep::Insert { value, .. } | DiffStep::Delete { value, .. } => value,
        }
    }
    pub fn into_value(self) -> T {
        match self {
            DiffStep::Insert { value, .. } | DiffStep::Delete { value, .. } => value,
        }
    }
    pub fn kind(&self) -> StepKind {
        match self {
            DiffStep::Insert { .. } => StepKind::Insert,
            DiffStep::Delete { .. } => StepKind::Delete,
        }
    }
    pub fn is_insert(&self) -> bool {
        matches!(self, DiffStep::Insert { .. })
    }
    pub fn is_delete(&self) -> bool {
        matches!(self, DiffStep::Delete { .. })
    }
    fn inverted(self) -> Self {
        match self {
            DiffStep::Insert { index, value } => DiffStep::Delete { index, value },
            DiffStep::Delete { index, value } => DiffStep::Insert { index, value },
        }
    }
}

/// An ordered edit script: deletions by descending source index, then
/// insertions by ascending result index.
///
/// Applying the steps in this order never invalidates the index of a step
/// that has not been applied yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Ex)]
#[derive_ex(Default)]
#[default(Self::new())]
pub struct EditScript<T> {
    deletions: Vec<DiffStep<T>>,
    insertions: Vec<DiffStep<T>>,
}

impl<T> EditScript<T> {
    pub fn new() -> Self {
        Self {
            deletions: Vec::new(),
            insertions: Vec::new(),
        }
    }

    /// Builds a script from steps in any order.
    pub fn from_steps(steps: impl IntoIterator<Item = DiffStep<T>>) -> Self {
        let (mut deletions, mut insertions): (Vec<_>, Vec<_>) =
            steps.into_iter().partition(|s| s.is_delete());
        deletions.sort_by(|a, b| b.index().cmp(&a.index()));
        insertions.sort_by_key(|s| s.index());
        Self {
            deletions,
            insertions,
        }
    }

    pub fn deletions(&self) -> &[DiffStep<T>] {
        &self.deletions
    }
    pub fn insertions(&self) -> &[DiffStep<T>] {
        &self.insertions
    }
    pub fn len(&self) -> usize {
        self.deletions.len() + self.insertions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn iter(&self) -> ScriptIter<'_, T> {
        self.deletions.iter().chain(self.insertions.iter())
    }
    pub fn into_steps(self) -> Vec<DiffStep<T>> {
        let mut steps = self.deletions;
        steps.extend(self.insertions);
        steps
    }
    pub(crate) fn into_parts(self) -> (Vec<DiffStep<T>>, Vec<DiffStep<T>>) {
        (self.deletions, self.insertions)
    }

    /// Swaps insertions and deletions, producing a script from the result back to the source.
    pub fn reverse(self) -> Self {
        Self::from_steps(self.into_steps().into_iter().map(DiffStep::inverted))
    }
}

pub type ScriptIter<'a, T> =
    std::iter::Chain<slice::Iter<'a, DiffStep<T>>, slice::Iter<'a, DiffStep<T>>>;

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a DiffStep<T>;
    type IntoIter = ScriptIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T> IntoIterator for EditScript<T> {
    type Item = DiffStep<T>;
    type IntoIter = std::vec::IntoIter<DiffStep<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_steps().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for EditScript<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Computes the minimal edit script transforming `x` into `y`.
pub fn diff<T: PartialEq + Clone>(x: &[T], y: &[T]) -> EditScript<T> {
    diff_with(x, y, &DiffOptions::default())
}

pub fn diff_with<T: PartialEq + Clone>(
    x: &[T],
    y: &[T],
    options: &DiffOptions,
) -> EditScript<T> {
    log::trace!("diff: {} -> {} elements", x.len(), y.len());
    let table = ComparisonTable::new(x, y);
    let mut deletions = Vec::new();
    let mut insertions = Vec::new();
    let (mut i, mut j) = (x.len(), y.len());
    while i > 0 || j > 0 {
        let insert = if i == 0 {
            true
        } else if j == 0 {
            false
        } else {
            let here = table.get(i, j);
            let left = here == table.get(i, j - 1);
            let up = here == table.get(i - 1, j);
            match options.tie_break {
                TieBreak::PreferInsert if left => true,
                TieBreak::PreferInsert if up => false,
                TieBreak::PreferDelete if up => false,
                TieBreak::PreferDelete if left => true,
                _ => {
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }
        };
        if insert {
            j -= 1;
            insertions.push(DiffStep::Insert {
                index: j,
                value: y[j].clone(),
            });
        } else {
            i -= 1;
            deletions.push(DiffStep::Delete {
                index: i,
                value: x[i].clone(),
            });
        }
    }
    // Backtracking emits both lists by descending index.
    insertions.reverse();
    EditScript {
        deletions,
        insertions,
    }
}

/// Returns a longest common subsequence of `x` and `y`, in order.
pub fn longest_common_subsequence<T: PartialEq + Clone>(x: &[T], y: &[T]) -> Vec<T> {
    let table = ComparisonTable::new(x, y);
    let mut lcs = Vec::with_capacity(table.get(x.len(), y.len()));
    let (mut i, mut j) = (x.len(), y.len());
    // Same walk as `diff`, so the result is exactly the elements `diff` keeps.
    while i > 0 && j > 0 {
        let here = table.get(i, j);
        if here == table.get(i, j - 1) {
            j -= 1;
        } else if here == table.get(i - 1, j) {
            i -= 1;
        } else {
            lcs.push(x[i - 1].clone());
            i -= 1;
            j -= 1;
        }
    }
    lcs.reverse();
    lcs
}

/// Applies `script` to `x`.
///
/// Fails if a step does not fit the intermediate state it is applied to.
pub fn apply<T: PartialEq + Clone>(
    script: &EditScript<T>,
    x: &[T],
) -> Result<Vec<T>, InvalidScript> {
    let mut items = x.to_vec();
    apply_in_place(script, &mut items)?;
    Ok(items)
}

fn apply_in_place<T: PartialEq + Clone>(
    script: &EditScript<T>,
    items: &mut Vec<T>,
) -> Result<(), InvalidScript> {
    for step in script.iter() {
        apply_step(step, items)?;
    }
    Ok(())
}

fn apply_step<T: PartialEq + Clone>(
    step: &DiffStep<T>,
    items: &mut Vec<T>,
) -> Result<(), InvalidScript> {
    match step {
        DiffStep::Insert { index, value } => {
            insert_checked(items, *index, StepKind::Insert, value.clone())
        }
        DiffStep::Delete { index, value } => {
            remove_checked(items, *index, StepKind::Delete, |x| x == value).map(|_| ())
        }
    }
}

pub(crate) fn insert_checked<E>(
    items: &mut Vec<E>,
    index: usize,
    op: StepKind,
    value: E,
) -> Result<(), InvalidScript> {
    let len = items.len();
    if index > len {
        return Err(InvalidScript::OutOfRange { op, index, len });
    }
    items.insert(index, value);
    Ok(())
}

/// Removes `items[index]` if it exists and satisfies `expected`.
pub(crate) fn remove_checked<E>(
    items: &mut Vec<E>,
    index: usize,
    op: StepKind,
    expected: impl FnOnce(&E) -> bool,
) -> Result<E, InvalidScript> {
    let len = items.len();
    let Some(current) = items.get(index) else {
        return Err(InvalidScript::OutOfRange { op, index, len });
    };
    if !expected(current) {
        return Err(InvalidScript::Mismatch { op, index });
    }
    Ok(items.remove(index))
}

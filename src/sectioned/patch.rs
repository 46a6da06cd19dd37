use std::{fmt, iter::Chain, slice};

use derive_ex::Ex;
use parse_display::Display;
use serde::{Deserialize, Serialize};

use crate::{utils::is_sorted_by_key, DiffStep, StepKind};

/// A single step of a [`SectionedPatch`].
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionedDiffStep<S, T> {
    #[display("+{value}@{section}:{row}")]
    RowInsert { section: usize, row: usize, value: T },
    #[display("-{value}@{section}:{row}")]
    RowDelete { section: usize, row: usize, value: T },
    #[display("+[{key}]@{section}")]
    SectionInsert { section: usize, key: S },
    #[display("-[{key}]@{section}")]
    SectionDelete { section: usize, key: S },
}

impl<S, T> SectionedDiffStep<S, T> {
    pub(crate) fn from_row(section: usize, step: DiffStep<T>) -> Self {
        match step {
            DiffStep::Insert { index, value } => SectionedDiffStep::RowInsert {
                section,
                row: index,
                value,
            },
            DiffStep::Delete { index, value } => SectionedDiffStep::RowDelete {
                section,
                row: index,
                value,
            },
        }
    }
    pub(crate) fn from_section(step: DiffStep<S>) -> Self {
        match step {
            DiffStep::Insert { index, value } => SectionedDiffStep::SectionInsert {
                section: index,
                key: value,
            },
            DiffStep::Delete { index, value } => SectionedDiffStep::SectionDelete {
                section: index,
                key: value,
            },
        }
    }

    pub fn section(&self) -> usize {
        match self {
            SectionedDiffStep::RowInsert { section, .. }
            | SectionedDiffStep::RowDelete { section, .. }
            | SectionedDiffStep::SectionInsert { section, .. }
            | SectionedDiffStep::SectionDelete { section, .. } => *section,
        }
    }
    /// The row index, or `None` for section steps.
    pub fn row(&self) -> Option<usize> {
        match self {
            SectionedDiffStep::RowInsert { row, .. } | SectionedDiffStep::RowDelete { row, .. } => {
                Some(*row)
            }
            SectionedDiffStep::SectionInsert { .. } | SectionedDiffStep::SectionDelete { .. } => {
                None
            }
        }
    }
    pub fn kind(&self) -> StepKind {
        match self {
            SectionedDiffStep::RowInsert { .. } => StepKind::Insert,
            SectionedDiffStep::RowDelete { .. } => StepKind::Delete,
            SectionedDiffStep::SectionInsert { .. } => StepKind::SectionInsert,
            SectionedDiffStep::SectionDelete { .. } => StepKind::SectionDelete,
        }
    }
    pub(crate) fn with_section(mut self, new_section: usize) -> Self {
        match &mut self {
            SectionedDiffStep::RowInsert { section, .. }
            | SectionedDiffStep::RowDelete { section, .. }
            | SectionedDiffStep::SectionInsert { section, .. }
            | SectionedDiffStep::SectionDelete { section, .. } => *section = new_section,
        }
        self
    }
}

/// The steps transforming one [`SectionedSequence`](crate::SectionedSequence) into another.
///
/// Steps appear in four phases:
///
/// 1. row deletions, addressed by section indices of the source
/// 2. section deletions, by descending index
/// 3. section insertions, by ascending index
/// 4. row insertions, addressed by section indices of the result
///
/// Within each section, row deletions are by descending row and row
/// insertions by ascending row.
/// A consumer updating a live view incrementally must resolve the deletions
/// against the old section layout before resolving the insertions against the new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Ex)]
#[derive_ex(Default)]
#[default(Self::new())]
pub struct SectionedPatch<S, T> {
    pub(crate) row_deletions: Vec<SectionedDiffStep<S, T>>,
    pub(crate) section_deletions: Vec<SectionedDiffStep<S, T>>,
    pub(crate) section_insertions: Vec<SectionedDiffStep<S, T>>,
    pub(crate) row_insertions: Vec<SectionedDiffStep<S, T>>,
}

pub type PatchIter<'a, S, T> = Chain<
    Chain<
        Chain<slice::Iter<'a, SectionedDiffStep<S, T>>, slice::Iter<'a, SectionedDiffStep<S, T>>>,
        slice::Iter<'a, SectionedDiffStep<S, T>>,
    >,
    slice::Iter<'a, SectionedDiffStep<S, T>>,
>;

impl<S, T> SectionedPatch<S, T> {
    pub fn new() -> Self {
        Self {
            row_deletions: Vec::new(),
            section_deletions: Vec::new(),
            section_insertions: Vec::new(),
            row_insertions: Vec::new(),
        }
    }

    pub fn row_deletions(&self) -> &[SectionedDiffStep<S, T>] {
        &self.row_deletions
    }
    pub fn section_deletions(&self) -> &[SectionedDiffStep<S, T>] {
        &self.section_deletions
    }
    pub fn section_insertions(&self) -> &[SectionedDiffStep<S, T>] {
        &self.section_insertions
    }
    pub fn row_insertions(&self) -> &[SectionedDiffStep<S, T>] {
        &self.row_insertions
    }
    pub fn len(&self) -> usize {
        self.row_deletions.len()
            + self.section_deletions.len()
            + self.section_insertions.len()
            + self.row_insertions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn iter(&self) -> PatchIter<'_, S, T> {
        self.row_deletions
            .iter()
            .chain(self.section_deletions.iter())
            .chain(self.section_insertions.iter())
            .chain(self.row_insertions.iter())
    }
    pub fn into_steps(self) -> Vec<SectionedDiffStep<S, T>> {
        let mut steps = self.row_deletions;
        steps.extend(self.section_deletions);
        steps.extend(self.section_insertions);
        steps.extend(self.row_insertions);
        steps
    }

    /// Returns `true` if every phase holds only its own step kind in the required order.
    pub fn is_ordered(&self) -> bool {
        fn all_kind<S, T>(steps: &[SectionedDiffStep<S, T>], kind: StepKind) -> bool {
            steps.iter().all(|s| s.kind() == kind)
        }
        fn rows_in_order<S, T>(steps: &[SectionedDiffStep<S, T>], descending: bool) -> bool {
            let mut ranges = steps.chunk_by(|a, b| a.section() == b.section());
            let mut seen = Vec::new();
            ranges.all(|chunk| {
                let section = chunk[0].section();
                if seen.contains(&section) {
                    return false;
                }
                seen.push(section);
                if descending {
                    is_sorted_by_key(chunk, |s| std::cmp::Reverse(s.row()))
                } else {
                    is_sorted_by_key(chunk, |s| s.row())
                }
            })
        }
        all_kind(&self.row_deletions, StepKind::Delete)
            && all_kind(&self.section_deletions, StepKind::SectionDelete)
            && all_kind(&self.section_insertions, StepKind::SectionInsert)
            && all_kind(&self.row_insertions, StepKind::Insert)
            && is_sorted_by_key(&self.section_deletions, |s| std::cmp::Reverse(s.section()))
            && is_sorted_by_key(&self.section_insertions, |s| s.section())
            && rows_in_order(&self.row_deletions, true)
            && rows_in_order(&self.row_insertions, false)
    }
}

impl<'a, S, T> IntoIterator for &'a SectionedPatch<S, T> {
    type Item = &'a SectionedDiffStep<S, T>;
    type IntoIter = PatchIter<'a, S, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<S, T> IntoIterator for SectionedPatch<S, T> {
    type Item = SectionedDiffStep<S, T>;
    type IntoIter = std::vec::IntoIter<SectionedDiffStep<S, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_steps().into_iter()
    }
}

impl<S: fmt::Display, T: fmt::Display> fmt::Display for SectionedPatch<S, T> {
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

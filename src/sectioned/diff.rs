use crate::{
    diff_with, utils::IndexMiddleToOld, DiffOptions, SectionedDiffStep, SectionedPatch,
    SectionedSequence,
};

/// Computes the patch transforming `lhs` into `rhs`.
pub fn diff_sectioned<S, T>(
    lhs: &SectionedSequence<S, T>,
    rhs: &SectionedSequence<S, T>,
) -> SectionedPatch<S, T>
where
    S: PartialEq + Clone,
    T: PartialEq + Clone,
{
    diff_sectioned_with(lhs, rhs, &DiffOptions::default())
}

pub fn diff_sectioned_with<S, T>(
    lhs: &SectionedSequence<S, T>,
    rhs: &SectionedSequence<S, T>,
    options: &DiffOptions,
) -> SectionedPatch<S, T>
where
    S: PartialEq + Clone,
    T: PartialEq + Clone,
{
    if lhs.keys().eq(rhs.keys()) {
        let values: Vec<&[T]> = lhs.iter().map(|s| &s.values[..]).collect();
        let (row_deletions, row_insertions) = diff_rows(&values, rhs, options);
        return SectionedPatch {
            row_deletions,
            section_deletions: Vec::new(),
            section_insertions: Vec::new(),
            row_insertions,
        };
    }

    let lhs_keys: Vec<S> = lhs.keys().cloned().collect();
    let rhs_keys: Vec<S> = rhs.keys().cloned().collect();
    let (section_deletions, section_insertions) =
        diff_with(&lhs_keys, &rhs_keys, options).into_parts();
    log::debug!(
        "diff_sectioned: {} section deletions, {} section insertions",
        section_deletions.len(),
        section_insertions.len()
    );

    // `middle` has the section layout of `rhs` and the values of `lhs`.
    let mut middle: Vec<&[T]> = lhs.iter().map(|s| &s.values[..]).collect();
    let mut middle_to_old = IndexMiddleToOld::identity(lhs.len());
    for step in &section_deletions {
        middle.remove(step.index());
        middle_to_old.remove(step.index());
    }
    for step in &section_insertions {
        middle.insert(step.index(), &[]);
        middle_to_old.insert_placeholder(step.index());
    }
    debug_assert_eq!(middle.len(), rhs.len());
    debug_assert_eq!(middle_to_old.len(), rhs.len());

    let (row_deletions, row_insertions) = diff_rows(&middle, rhs, options);
    let row_deletions = row_deletions
        .into_iter()
        .map(|step| {
            let section = step.section();
            match middle_to_old.get(section) {
                Some(old) => step.with_section(old),
                None => unreachable!("row deletion in inserted section {section}"),
            }
        })
        .collect();

    SectionedPatch {
        row_deletions,
        section_deletions: section_deletions
            .into_iter()
            .map(SectionedDiffStep::from_section)
            .collect(),
        section_insertions: section_insertions
            .into_iter()
            .map(SectionedDiffStep::from_section)
            .collect(),
        row_insertions,
    }
}

/// Diffs the values of sections at the same position.
///
/// `middle` must have the same section count as `rhs`.
fn diff_rows<S, T>(
    middle: &[&[T]],
    rhs: &SectionedSequence<S, T>,
    options: &DiffOptions,
) -> (Vec<SectionedDiffStep<S, T>>, Vec<SectionedDiffStep<S, T>>)
where
    T: PartialEq + Clone,
{
    let mut deletions = Vec::new();
    let mut insertions = Vec::new();
    for (section, (&old, new)) in middle.iter().zip(rhs.iter()).enumerate() {
        let (d, i) = diff_with(old, &new.values, options).into_parts();
        deletions.extend(d.into_iter().map(|s| SectionedDiffStep::from_row(section, s)));
        insertions.extend(i.into_iter().map(|s| SectionedDiffStep::from_row(section, s)));
    }
    (deletions, insertions)
}

/// Computes the patch transforming `rhs` back into `lhs`.
///
/// The phase order of a patch depends on its direction, so this diffs again
/// instead of inverting the steps of `diff_sectioned(lhs, rhs)`.
pub fn reverse_sectioned<S, T>(
    lhs: &SectionedSequence<S, T>,
    rhs: &SectionedSequence<S, T>,
) -> SectionedPatch<S, T>
where
    S: PartialEq + Clone,
    T: PartialEq + Clone,
{
    diff_sectioned(rhs, lhs)
}

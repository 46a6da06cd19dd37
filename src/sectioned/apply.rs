use crate::{
    script::{insert_checked, remove_checked},
    InvalidScript, Section, SectionedDiffStep, SectionedPatch, SectionedSequence, StepKind,
};

/// Applies `patch` to `lhs`.
///
/// Steps are applied one by one in patch order. Fails on the first step that
/// does not fit the intermediate state.
pub fn apply_sectioned<S, T>(
    patch: &SectionedPatch<S, T>,
    lhs: &SectionedSequence<S, T>,
) -> Result<SectionedSequence<S, T>, InvalidScript>
where
    S: PartialEq + Clone,
    T: PartialEq + Clone,
{
    let mut sections = lhs.as_slice().to_vec();
    for step in patch {
        apply_step(step, &mut sections)?;
    }
    log::trace!("apply_sectioned: applied {} steps", patch.len());
    Ok(SectionedSequence::from_sections(sections))
}

fn apply_step<S, T>(
    step: &SectionedDiffStep<S, T>,
    sections: &mut Vec<Section<S, T>>,
) -> Result<(), InvalidScript>
where
    S: PartialEq + Clone,
    T: PartialEq + Clone,
{
    match step {
        SectionedDiffStep::RowDelete {
            section,
            row,
            value,
        } => {
            let values = values_mut(sections, *section)?;
            remove_checked(values, *row, StepKind::Delete, |x| x == value)
                .map_err(|e| e.in_section(*section))?;
        }
        SectionedDiffStep::RowInsert {
            section,
            row,
            value,
        } => {
            let values = values_mut(sections, *section)?;
            insert_checked(values, *row, StepKind::Insert, value.clone())
                .map_err(|e| e.in_section(*section))?;
        }
        SectionedDiffStep::SectionDelete { section, key } => {
            remove_checked(sections, *section, StepKind::SectionDelete, |s| &s.key == key)?;
        }
        SectionedDiffStep::SectionInsert { section, key } => {
            let new_section = Section::new(key.clone(), Vec::new());
            insert_checked(sections, *section, StepKind::SectionInsert, new_section)?;
        }
    }
    Ok(())
}

fn values_mut<S, T>(
    sections: &mut [Section<S, T>],
    section: usize,
) -> Result<&mut Vec<T>, InvalidScript> {
    let count = sections.len();
    match sections.get_mut(section) {
        Some(s) => Ok(&mut s.values),
        None => Err(InvalidScript::NoSection { section, count }),
    }
}

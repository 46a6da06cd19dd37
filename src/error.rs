use parse_display::Display;
use serde::{Deserialize, Serialize};

/// The kind of step that failed to apply.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "snake_case")]
pub enum StepKind {
    Insert,
    Delete,
    SectionInsert,
    SectionDelete,
}

/// A script or patch does not match the sequence it is applied to.
///
/// This is always a caller bug: the script was computed against a different
/// source, or has already been applied.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum InvalidScript {
    #[display("{op} at {index} is out of range for length {len}")]
    OutOfRange {
        op: StepKind,
        index: usize,
        len: usize,
    },
    #[display("{op} at {index} does not match the element at that position")]
    Mismatch { op: StepKind, index: usize },
    #[display("section {section} does not exist (section count {count})")]
    NoSection { section: usize, count: usize },
    #[display("in section {section}: {source}")]
    InSection {
        section: usize,
        source: Box<InvalidScript>,
    },
}

impl InvalidScript {
    pub(crate) fn in_section(self, section: usize) -> Self {
        Self::InSection {
            section,
            source: Box::new(self),
        }
    }
}

impl std::error::Error for InvalidScript {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidScript::InSection { source, .. } => Some(&**source),
            InvalidScript::OutOfRange { .. }
            | InvalidScript::Mismatch { .. }
            | InvalidScript::NoSection { .. } => None,
        }
    }
}

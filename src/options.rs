use serde::{Deserialize, Serialize};

/// Which step to take when an insertion and a deletion are equally minimal.
///
/// Either choice yields a minimal script; only the exact step sequence differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    #[default]
    PreferInsert,
    PreferDelete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffOptions {
    pub tie_break: TieBreak,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

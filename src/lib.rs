//! Minimal edit scripts for sequences and for sectioned sequences.
//!
//! [`diff`] computes an [`EditScript`] from one slice to another using a
//! longest-common-subsequence table, and [`apply`] replays it.
//! [`diff_sectioned`] does the same for a [`SectionedSequence`], diffing the
//! section keys as well as the values of each section, and produces a
//! [`SectionedPatch`] whose steps are ordered so that a list or grid view can
//! be updated in place.
//!
//! ```rust
//! use listdiff::{apply, diff, longest_common_subsequence};
//!
//! let x: Vec<char> = "BANANA".chars().collect();
//! let y: Vec<char> = "KATANA".chars().collect();
//!
//! let script = diff(&x, &y);
//! assert_eq!(script.to_string(), "-N@2,-B@0,+K@0,+T@2");
//! assert_eq!(apply(&script, &x).unwrap(), y);
//!
//! let lcs: String = longest_common_subsequence(&x, &y).into_iter().collect();
//! assert_eq!(lcs, "AANA");
//! ```
//!
//! ```rust
//! use listdiff::{apply_sectioned, diff_sectioned, SectionedSequence};
//!
//! let lhs: SectionedSequence<&str, i32> =
//!     [("a", vec![1, 2]), ("b", vec![3])].into_iter().collect();
//! let rhs: SectionedSequence<&str, i32> =
//!     [("b", vec![3, 4]), ("c", vec![])].into_iter().collect();
//!
//! let patch = diff_sectioned(&lhs, &rhs);
//! assert_eq!(patch.to_string(), "-[a]@0,+[c]@1,+4@0:1");
//! assert_eq!(apply_sectioned(&patch, &lhs).unwrap(), rhs);
//! ```

mod error;
mod options;
mod script;
mod sectioned;
mod table;
mod utils;

#[cfg(doctest)]
mod tests_readme;

pub use error::*;
pub use options::*;
pub use script::*;
pub use sectioned::*;

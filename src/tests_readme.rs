// #![include_doc("../README.md", start)]
//! # listdiff
//!
//! Minimal edit scripts for sequences and sectioned sequences.
//!
//! - `diff` / `apply` compute and replay an LCS-based edit script over slices.
//! - `diff_sectioned` / `apply_sectioned` do the same for an ordered list of keyed
//!   sections, diffing the section keys and each section's values, and produce a
//!   patch ordered as: row deletions, section deletions, section insertions, row
//!   insertions. That is the order a list or grid view needs to animate changes in
//!   place.
//!
//! ```rust
//! use listdiff::{apply, diff};
//!
//! let x: Vec<char> = "BANANA".chars().collect();
//! let y: Vec<char> = "KATANA".chars().collect();
//! let script = diff(&x, &y);
//! assert_eq!(script.to_string(), "-N@2,-B@0,+K@0,+T@2");
//! assert_eq!(apply(&script, &x).unwrap(), y);
//! ```
//!
//! ## License
//!
//! This project is dual licensed under Apache-2.0/MIT.
// #![include_doc("../README.md", end)]

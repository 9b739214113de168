//! # Venn Diagrams
//!
//! Area-proportional layouts for 2 or 3 sets.
//!
//! A [`VennLayout`] places one circle per set, sized by the set's share of
//! the union, and spaced so that pairwise overlaps match the pairwise
//! intersections. It also places one label per set, and one count label per
//! exclusive region (subset).
//!
//! ```
//! use vocabscope::{types::VSHashSet, venn::VennLayout};
//!
//! let a: VSHashSet<&str> = ["a", "ab"].into_iter().collect();
//! let b: VSHashSet<&str> = ["ab", "abc"].into_iter().collect();
//!
//! let layout = VennLayout::from_sets(&[&a, &b], Some(&["A", "B"])).unwrap();
//! assert_eq!(layout.subset_sizes(), &[1, 1, 1]);
//! ```

pub mod geometry;
pub mod labels;
mod layout;
pub mod solver;

#[doc(inline)]
pub use geometry::{Bounds, Circle, Point};
#[doc(inline)]
pub use labels::VennLabel;
#[doc(inline)]
pub use layout::*;

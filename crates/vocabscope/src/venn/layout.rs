//! # Venn Layout

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::{
    VSResult,
    VocabscopeError,
    venn::{
        geometry::{Bounds, Circle},
        labels::{VennLabel, set_label_positions, subset_labels},
        solver::{solve_venn2, solve_venn3, venn2_areas, venn3_areas},
    },
};

/// Check that `count` sets can be laid out.
fn check_arity(count: usize) -> VSResult<()> {
    match count {
        2 | 3 => Ok(()),
        _ => Err(VocabscopeError::Arity { count }),
    }
}

/// The number of elements in each exclusive region of `sets`.
///
/// Region `mask - 1` holds the elements that are in exactly the sets whose
/// bits are set in `mask`; for 2 sets this is `[A, B, AB]`,
/// for 3 sets `[A, B, AB, C, AC, BC, ABC]`.
pub fn subset_sizes<T, S>(sets: &[&HashSet<T, S>]) -> VSResult<Vec<usize>>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    check_arity(sets.len())?;

    let mut sizes = vec![0usize; (1 << sets.len()) - 1];
    for (i, set) in sets.iter().enumerate() {
        for item in set.iter() {
            // Count each element once, from the first set holding it.
            if sets[..i].iter().any(|earlier| earlier.contains(item)) {
                continue;
            }
            let mask = sets
                .iter()
                .enumerate()
                .filter(|(_, s)| s.contains(item))
                .fold(0, |mask, (j, _)| mask | (1 << j));
            sizes[mask - 1] += 1;
        }
    }
    Ok(sizes)
}

/// The static geometry of a 2- or 3-set Venn diagram.
///
/// Coordinates are in layout units, where the union of all sets has area 1.
#[derive(Debug, Clone, PartialEq)]
pub struct VennLayout {
    circles: Vec<Circle>,
    set_labels: Vec<VennLabel>,
    subset_labels: Vec<VennLabel>,
    subset_sizes: Vec<usize>,
}

impl VennLayout {
    /// Lay out the overlap of `sets`.
    ///
    /// `labels` name the sets; they are only applied when there is exactly
    /// one label per set. Otherwise the set labels are blank.
    pub fn from_sets<T, S>(
        sets: &[&HashSet<T, S>],
        labels: Option<&[&str]>,
    ) -> VSResult<Self>
    where
        T: Eq + Hash,
        S: BuildHasher,
    {
        let sizes = subset_sizes(sets)?;
        Self::from_subset_sizes(&sizes, labels)
    }

    /// Lay out a diagram from its exclusive region sizes.
    ///
    /// `sizes` must have 3 (2 sets) or 7 (3 sets) entries, in the order of [`subset_sizes`].
    pub fn from_subset_sizes(
        sizes: &[usize],
        labels: Option<&[&str]>,
    ) -> VSResult<Self> {
        let circles = match sizes {
            [a, b, ab] => solve_venn2(&venn2_areas(&[*a, *b, *ab])),
            [a, b, ab, c, ac, bc, abc] => {
                solve_venn3(&venn3_areas(&[*a, *b, *ab, *c, *ac, *bc, *abc]))
            }
            _ => {
                // 2^n - 1 regions for n sets.
                let count = (sizes.len() + 1).ilog2() as usize;
                return Err(VocabscopeError::Arity { count });
            }
        };
        let set_count = circles.len();

        let names: Vec<&str> = match labels {
            Some(labels) if labels.len() == set_count => labels.to_vec(),
            Some(labels) => {
                log::debug!(
                    "ignoring {} set labels for {set_count} sets",
                    labels.len()
                );
                vec![""; set_count]
            }
            None => vec![""; set_count],
        };

        let set_labels = set_label_positions(&circles)
            .into_iter()
            .zip(names)
            .map(|(position, name)| VennLabel {
                position,
                text: name.to_string(),
            })
            .collect();

        let subset_labels = subset_labels(&circles, sizes);

        Ok(Self {
            circles,
            set_labels,
            subset_labels,
            subset_sizes: sizes.to_vec(),
        })
    }

    /// The number of sets, 2 or 3.
    pub fn set_count(&self) -> usize {
        self.circles.len()
    }

    /// One circle per set, in input order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// One label per set, in input order.
    pub fn set_labels(&self) -> &[VennLabel] {
        &self.set_labels
    }

    /// One label per exclusive region, in [`subset_sizes`] order.
    pub fn subset_labels(&self) -> &[VennLabel] {
        &self.subset_labels
    }

    /// The exclusive region sizes, in [`subset_sizes`] order.
    pub fn subset_sizes(&self) -> &[usize] {
        &self.subset_sizes
    }

    /// The bounding box of all circles.
    pub fn bounds(&self) -> Bounds {
        // Construction always produces 2 or 3 circles.
        Bounds::enclosing(&self.circles).unwrap_or(Bounds {
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VSHashSet;

    fn set(items: &[&'static str]) -> VSHashSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_subset_sizes_2() {
        let a = set(&["a", "ab"]);
        let b = set(&["ab", "abc"]);
        assert_eq!(subset_sizes(&[&a, &b]).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_subset_sizes_3() {
        let a = set(&["a", "ab", "ac", "abc"]);
        let b = set(&["b", "ab", "bc", "abc"]);
        let c = set(&["c", "c2", "ac", "bc", "abc"]);
        assert_eq!(
            subset_sizes(&[&a, &b, &c]).unwrap(),
            vec![1, 1, 1, 2, 1, 1, 1]
        );
    }

    #[test]
    fn test_arity() {
        let a = set(&["a"]);
        assert!(matches!(
            subset_sizes(&[&a]),
            Err(VocabscopeError::Arity { count: 1 })
        ));
        assert!(matches!(
            VennLayout::from_sets(&[&a, &a, &a, &a], None),
            Err(VocabscopeError::Arity { count: 4 })
        ));
        assert!(matches!(
            VennLayout::from_subset_sizes(&[1], None),
            Err(VocabscopeError::Arity { count: 1 })
        ));
        assert!(matches!(
            VennLayout::from_subset_sizes(&[1; 15], None),
            Err(VocabscopeError::Arity { count: 4 })
        ));
    }

    #[test]
    fn test_two_set_layout() {
        let a = set(&["a", "ab"]);
        let b = set(&["ab", "abc"]);
        let layout = VennLayout::from_sets(&[&a, &b], Some(&["A", "B"])).unwrap();

        assert_eq!(layout.set_count(), 2);
        assert_eq!(layout.circles().len(), 2);
        assert_eq!(layout.subset_sizes(), &[1, 1, 1]);

        let set_texts: Vec<&str> = layout.set_labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(set_texts, vec!["A", "B"]);

        let subset_texts: Vec<&str> = layout
            .subset_labels()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(subset_texts, vec!["1", "1", "1"]);

        // The lens label sits inside both circles.
        let lens = &layout.subset_labels()[2].position;
        assert!(layout.circles().iter().all(|c| c.contains(lens)));
    }

    #[test]
    fn test_mismatched_labels_are_ignored() {
        let a = set(&["a"]);
        let b = set(&["b"]);
        let layout = VennLayout::from_sets(&[&a, &b], Some(&["A", "B", "C"])).unwrap();
        assert!(layout.set_labels().iter().all(|l| l.text.is_empty()));

        let layout = VennLayout::from_sets(&[&a, &b], None).unwrap();
        assert_eq!(layout.set_labels().len(), 2);
        assert!(layout.set_labels().iter().all(|l| l.text.is_empty()));
    }

    #[test]
    fn test_identical_sets() {
        let a = set(&["x", "y", "z", "w"]);
        let layout = VennLayout::from_sets(&[&a, &a, &a], Some(&["A", "B", "C"])).unwrap();
        assert_eq!(layout.subset_labels().len(), 7);
        assert_eq!(layout.subset_labels()[6].text, "4");
        for label in &layout.subset_labels()[..6] {
            assert!(label.text.is_empty() || label.text == "0", "{label:?}");
        }
    }

    #[test]
    fn test_empty_sets() {
        let empty: VSHashSet<&str> = VSHashSet::default();
        let layout = VennLayout::from_sets(&[&empty, &empty], None).unwrap();
        assert_eq!(layout.subset_labels().len(), 3);
        assert!(layout.bounds().width() > 0.0);

        let layout = VennLayout::from_sets(&[&empty, &empty, &empty], None).unwrap();
        assert_eq!(layout.subset_labels().len(), 7);
    }
}

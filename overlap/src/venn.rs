//! Three-way overlap counts between line sets.

use std::collections::BTreeSet;

use serde::Serialize;

/// Region sizes of a three-set Venn diagram.
///
/// The `in_*` fields are whole-set sizes; the rest are disjoint regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub in_first: usize,
    pub in_second: usize,
    pub in_third: usize,
    pub only_first: usize,
    pub only_second: usize,
    pub only_third: usize,
    pub first_second: usize,
    pub first_third: usize,
    pub second_third: usize,
    pub all_three: usize,
}

impl Overlap {
    pub fn compute<T: Ord>(first: &BTreeSet<T>, second: &BTreeSet<T>, third: &BTreeSet<T>) -> Self {
        let mut overlap = Self {
            in_first: first.len(),
            in_second: second.len(),
            in_third: third.len(),
            ..Self::default()
        };
        let everything: BTreeSet<&T> = first.iter().chain(second).chain(third).collect();
        for item in everything {
            match (
                first.contains(item),
                second.contains(item),
                third.contains(item),
            ) {
                (true, false, false) => overlap.only_first += 1,
                (false, true, false) => overlap.only_second += 1,
                (false, false, true) => overlap.only_third += 1,
                (true, true, false) => overlap.first_second += 1,
                (true, false, true) => overlap.first_third += 1,
                (false, true, true) => overlap.second_third += 1,
                (true, true, true) => overlap.all_three += 1,
                (false, false, false) => {}
            }
        }
        overlap
    }

    /// Sum of the seven disjoint regions, i.e. the size of the union.
    pub fn union_len(&self) -> usize {
        self.only_first
            + self.only_second
            + self.only_third
            + self.first_second
            + self.first_third
            + self.second_third
            + self.all_three
    }
}

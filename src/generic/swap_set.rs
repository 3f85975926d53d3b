/*!
A set over a bounded range of small integers with constant-time insertion, removal, and membership.

In other words, a dense vector of members with a companion vector which tracks the current location of
each possible element in the dense vector.
Removal swaps the removed element with the last member and pops, so member order is unspecified.

Both the [falselist](crate::db::falselist) and the score buckets of a [score index](crate::db) are backed
by this structure: each needs O(1) add and remove-by-id while every flip moves variables between buckets
and clauses in and out of the falselist.

Removing an element which is not a member indicates corrupted score-index bookkeeping, and panics rather
than letting every subsequent score drift.
*/

/// Sentinel for an element with no position in the dense vector.
const NOT_A_MEMBER: usize = usize::MAX;

/// The swap set struct.
#[derive(Clone, Debug)]
pub struct SwapSet {
    dense: Vec<u32>,
    position: Vec<usize>,
}

impl SwapSet {
    /// An empty set over the elements `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        SwapSet {
            dense: Vec::new(),
            position: vec![NOT_A_MEMBER; capacity],
        }
    }

    /// Makes `element` a member.
    ///
    /// # Panics
    /// If `element` is already a member, as the callers of this structure only ever insert on a state
    /// transition (clause satisfied to falsified, variable score changed).
    pub fn insert(&mut self, element: u32) {
        assert!(
            self.position[element as usize] == NOT_A_MEMBER,
            "insertion of {element}, already a member"
        );
        self.position[element as usize] = self.dense.len();
        self.dense.push(element);
    }

    /// Removes `element` by swapping it with the last member.
    ///
    /// # Panics
    /// If `element` is not a member.
    pub fn remove(&mut self, element: u32) {
        let hole = self.position[element as usize];
        assert!(
            hole != NOT_A_MEMBER,
            "removal of {element}, not a member"
        );

        let last = self.dense.pop().expect("a member has a position");
        if hole < self.dense.len() {
            self.dense[hole] = last;
            self.position[last as usize] = hole;
        }
        self.position[element as usize] = NOT_A_MEMBER;
    }

    pub fn contains(&self, element: u32) -> bool {
        self.position[element as usize] != NOT_A_MEMBER
    }

    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// The members, in unspecified order.
    pub fn as_slice(&self) -> &[u32] {
        &self.dense
    }

    /// An iterator over the members, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.dense.iter().copied()
    }
}

#[cfg(test)]
mod swap_set_tests {
    use super::*;
    use crate::generic::pcg::Pcg32;
    use rand::Rng;

    #[test]
    fn insert_then_remove_everything() {
        let mut set = SwapSet::new(256);
        for element in 0..256 {
            set.insert(element);
        }
        assert_eq!(set.len(), 256);

        for element in (0..256).step_by(2) {
            set.remove(element);
        }
        assert_eq!(set.len(), 128);
        for element in 0..256 {
            assert_eq!(set.contains(element), element % 2 == 1);
        }
    }

    #[test]
    fn positions_track_members_through_churn() {
        let mut rng = Pcg32::new(101);
        let mut set = SwapSet::new(64);
        let mut mirror = std::collections::HashSet::new();

        for _ in 0..1_000 {
            let element = rng.random_range(0..64_u32);
            if mirror.contains(&element) {
                set.remove(element);
                mirror.remove(&element);
            } else {
                set.insert(element);
                mirror.insert(element);
            }
            assert_eq!(set.len(), mirror.len());
        }

        let members: std::collections::HashSet<u32> = set.iter().collect();
        assert_eq!(members, mirror);
    }

    #[test]
    #[should_panic]
    fn removing_a_non_member_panics() {
        let mut set = SwapSet::new(4);
        set.insert(1);
        set.remove(2);
    }
}

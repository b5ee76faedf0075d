/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to choose the most efficient implementation based on context.

Examples:
- Sparse sets -> `HashSet` / `FxHashSet`
- Dense sets over node ids -> [`NodeBitSet`]
*/

use std::{
    collections::{HashSet, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::{Cloned, Map},
};

use fixedbitset::{FixedBitSet, Ones};

use crate::node::*;

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries, iteration, and bulk operations.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    /// May clone elements depending on the underlying data structure.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

fn index_to_node(index: usize) -> Node {
    index as Node
}

/// Bits beyond the size of the bitset are never contained. Inserting one panics, hence the
/// bitset has to be sized by the capacity of the graph rather than its number of vertices.
impl Set<Node> for NodeBitSet {
    fn insert(&mut self, value: Node) -> bool {
        self.put(value as usize)
    }

    fn remove(&mut self, value: &Node) -> bool {
        let present = FixedBitSet::contains(self, *value as usize);
        if present {
            FixedBitSet::remove(self, *value as usize);
        }
        present
    }

    type SetIter<'a>
        = Map<Ones<'a>, fn(usize) -> Node>
    where
        Self: 'a,
        Node: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.ones().map(index_to_node as fn(usize) -> Node)
    }

    fn contains(&self, value: &Node) -> bool {
        FixedBitSet::contains(self, *value as usize)
    }

    fn clear(&mut self) {
        FixedBitSet::clear(self);
    }

    fn len(&self) -> usize {
        self.count_ones(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    fn exercise<S: Set<Node>>(mut set: S) {
        assert!(set.is_empty());
        assert!(!set.insert(3));
        assert!(set.insert(3));
        set.insert_multiple([1, 7, 3]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&7));
        assert!(!set.contains(&2));
        assert_eq!(set.iter().sorted().collect_vec(), vec![1, 3, 7]);

        assert!(set.remove(&7));
        assert!(!set.remove(&7));
        assert_eq!(set.len(), 2);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));
    }

    #[test]
    fn node_bitset() {
        exercise(NodeBitSet::with_capacity(8));
    }

    #[test]
    fn hash_sets() {
        exercise(FxHashSet::<Node>::default());
        exercise(HashSet::<Node>::new());
    }

    #[test]
    fn node_bitset_beyond_size() {
        let mut set = NodeBitSet::with_capacity(2);
        assert!(!Set::contains(&set, &100));
        assert!(!Set::remove(&mut set, &100));
        assert_eq!(Set::len(&set), 0);
    }
}

//! Per-node augmentation hooks for the splay engine.

use std::marker::PhantomData;

use crate::policy::PathMonoid;

/// Data carried by every node and recomputed by the splay engine.
///
/// The engine calls `update` after every structural change of a node, with the
/// payloads of its splay children in path order (`light` comes first on the
/// path). Implementations only see their own node and its two children.
pub trait Augment: Copy + Default {
    fn update(&mut self, light: Option<&Self>, heavy: Option<&Self>);

    /// The splay subtree of this node has been reversed.
    #[inline(always)]
    fn reverse(&mut self) {}

    /// `child` became a virtual child (its parent pointer is a path-parent
    /// pointer to this node).
    #[inline(always)]
    fn attach_virtual(&mut self, _child: &Self) {}

    /// `child` stopped being a virtual child of this node.
    #[inline(always)]
    fn detach_virtual(&mut self, _child: &Self) {}
}

/// The minimal tree carries nothing.
impl Augment for () {
    #[inline(always)]
    fn update(&mut self, _light: Option<&Self>, _heavy: Option<&Self>) {}
}

/// Path statistics and weight aggregates of the extended tree.
pub struct PathStats<M: PathMonoid> {
    /// Nodes in the splay subtree, i.e. on the represented path segment.
    pub(crate) size: u32,
    /// Nodes reachable through virtual children of this node.
    pub(crate) virtual_size: u32,
    /// Splay subtree plus everything hanging below it through virtual children.
    pub(crate) subtree_size: u32,
    pub(crate) weight: M::Weight,
    pub(crate) sum: M::Sum,
    pub(crate) sum_rev: M::Sum,
    _marker: PhantomData<fn() -> M>,
}

impl<M: PathMonoid> PathStats<M> {
    pub(crate) fn with_weight(weight: M::Weight) -> Self {
        let sum = M::sum_from_weight(&weight);
        Self {
            size: 1,
            virtual_size: 0,
            subtree_size: 1,
            weight,
            sum,
            sum_rev: sum,
            _marker: PhantomData,
        }
    }
}

impl<M: PathMonoid> Clone for PathStats<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: PathMonoid> Copy for PathStats<M> {}

impl<M: PathMonoid> Default for PathStats<M> {
    fn default() -> Self {
        Self::with_weight(M::weight_unit())
    }
}

impl<M: PathMonoid> Augment for PathStats<M> {
    fn update(&mut self, light: Option<&Self>, heavy: Option<&Self>) {
        let unit = M::sum_unit();
        let (l_size, l_all, l_sum, l_rev) =
            light.map_or((0, 0, unit, unit), |l| (l.size, l.subtree_size, l.sum, l.sum_rev));
        let (h_size, h_all, h_sum, h_rev) =
            heavy.map_or((0, 0, unit, unit), |h| (h.size, h.subtree_size, h.sum, h.sum_rev));

        self.size = 1 + l_size + h_size;
        self.subtree_size = 1 + self.virtual_size + l_all + h_all;
        self.sum = M::sum_merge(&l_sum, &self.weight, &h_sum);
        self.sum_rev = if M::REVERSAL_INVARIANT {
            self.sum
        } else {
            M::sum_merge(&h_rev, &self.weight, &l_rev)
        };
    }

    #[inline(always)]
    fn reverse(&mut self) {
        if !M::REVERSAL_INVARIANT {
            std::mem::swap(&mut self.sum, &mut self.sum_rev);
        }
    }

    #[inline(always)]
    fn attach_virtual(&mut self, child: &Self) {
        self.virtual_size += child.subtree_size;
    }

    #[inline(always)]
    fn detach_virtual(&mut self, child: &Self) {
        debug_assert!(self.virtual_size >= child.subtree_size);
        self.virtual_size -= child.subtree_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Affine, Composite, Sum};

    #[test]
    fn update_counts_path_and_virtual_nodes() {
        let mut light = PathStats::<Sum>::with_weight(2);
        let heavy = PathStats::<Sum>::with_weight(5);
        let hanging = PathStats::<Sum>::with_weight(100);

        light.attach_virtual(&hanging);
        light.update(None, None);
        assert_eq!((light.size, light.subtree_size), (1, 2));

        let mut mid = PathStats::<Sum>::with_weight(3);
        mid.update(Some(&light), Some(&heavy));
        assert_eq!(mid.size, 3);
        assert_eq!(mid.subtree_size, 4);
        assert_eq!(mid.sum, 10);

        light.detach_virtual(&hanging);
        light.update(None, None);
        assert_eq!((light.size, light.subtree_size), (1, 1));
    }

    #[test]
    fn reverse_swaps_directional_aggregates() {
        let light = PathStats::<Composite>::with_weight(Affine::new(1, 1));
        let heavy = PathStats::<Composite>::with_weight(Affine::new(2, 0));
        let mut mid = PathStats::<Composite>::with_weight(Affine::new(1, -3));
        mid.update(Some(&light), Some(&heavy));
        // x + 1, x - 3, 2x
        assert_eq!(mid.sum.apply(4), (4 + 1 - 3) * 2);
        // 2x, x - 3, x + 1
        assert_eq!(mid.sum_rev.apply(4), 4 * 2 - 3 + 1);

        let (sum, sum_rev) = (mid.sum, mid.sum_rev);
        mid.reverse();
        assert_eq!((mid.sum, mid.sum_rev), (sum_rev, sum));
    }
}

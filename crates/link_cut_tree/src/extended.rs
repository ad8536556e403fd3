//! Path statistics and weighted path folds on top of the splay engine.

use crate::augment::PathStats;
use crate::engine::{Id, LinkCutTree, id};
use crate::policy::{PathMonoid, Unweighted};
use crate::traits::PathQueries;

/// Link-cut tree maintaining path sizes, component sizes and vertex weights
/// aggregated by `M`.
pub type ExtendedLinkCutTree<M = Unweighted> = LinkCutTree<PathStats<M>>;

impl<M: PathMonoid> LinkCutTree<PathStats<M>> {
    pub fn from_weights(weights: &[M::Weight]) -> Self {
        Self::from_payloads(weights.iter().map(|&w| PathStats::with_weight(w)))
    }

    pub fn add_node_with_weight(&mut self, weight: M::Weight) -> usize {
        self.push_node(PathStats::with_weight(weight))
    }

    #[inline(always)]
    fn size(&self, x: Id) -> usize {
        if x.is_nil() {
            0
        } else {
            self.node(x).aug.size as usize
        }
    }

    /// Make `x` the root and expose the path `x ..= y` as the splay tree of `y`.
    fn expose_path(&mut self, x: Id, y: Id) {
        self.make_root_at(x);
        self.access(y);
    }

    /// Connectivity check followed by `expose_path`.
    fn expose_connected(&mut self, u: usize, v: usize) -> Option<Id> {
        self.check(u);
        self.check(v);
        let (x, y) = (id(u), id(v));
        if !self.connected_ids(x, y) {
            return None;
        }
        self.expose_path(x, y);
        Some(y)
    }

    /// Number of vertices in the tree containing `v`.
    pub fn get_size(&mut self, v: usize) -> usize {
        self.check(v);
        let x = id(v);
        self.access(x);
        self.node(x).aug.subtree_size as usize
    }

    /// Number of edges on the path between `u` and `v`.
    pub fn get_distance(&mut self, u: usize, v: usize) -> Option<usize> {
        let y = self.expose_connected(u, v)?;
        Some(self.size(y) - 1)
    }

    /// Lowest common ancestor of `u` and `v` with respect to the current root
    /// of their tree. The root is left unchanged.
    pub fn get_lca(&mut self, u: usize, v: usize) -> Option<usize> {
        self.check(u);
        self.check(v);
        let (x, y) = (id(u), id(v));
        if !self.connected_ids(x, y) {
            return None;
        }
        self.access(x);
        self.access(y);
        // If `x` is off the exposed path, its splay tree now hangs from the
        // vertex where the root-to-`x` path leaves the root-to-`y` path.
        self.splay(x);
        let p = self.node(x).parent;
        Some(if p.is_nil() { u } else { p.idx() })
    }

    /// Reroot the tree at `root`, then answer `get_lca(u, v)`.
    ///
    /// Returns `None` if `u` or `v` is not in the tree of `root`.
    pub fn get_lca_rooted(&mut self, u: usize, v: usize, root: usize) -> Option<usize> {
        self.check(u);
        self.check(v);
        self.check(root);
        let r = id(root);
        self.make_root_at(r);
        if self.root_of(id(u)) != r || self.root_of(id(v)) != r {
            return None;
        }
        self.get_lca(u, v)
    }

    /// The `index`-th vertex on the path from `u` to `v`: `u` for `0`, `v` for
    /// `get_distance(u, v)`.
    pub fn get_nth_node(&mut self, u: usize, v: usize, index: usize) -> Option<usize> {
        let y = self.expose_connected(u, v)?;
        if index >= self.size(y) {
            return None;
        }
        let mut k = index;
        let mut x = y;
        loop {
            self.push(x);
            let light = self.node(x).light;
            let light_size = self.size(light);
            if k < light_size {
                x = light;
            } else if k == light_size {
                self.splay(x);
                return Some(x.idx());
            } else {
                k -= light_size + 1;
                x = self.node(x).heavy;
            }
        }
    }

    /// Vertices on the path from `u` to `v`, both included. Empty if they are
    /// not connected.
    pub fn get_path(&mut self, u: usize, v: usize) -> Vec<usize> {
        let Some(y) = self.expose_connected(u, v) else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(self.size(y));
        let mut pending = Vec::new();
        let mut x = y;
        loop {
            while !x.is_nil() {
                self.push(x);
                pending.push(x);
                x = self.node(x).light;
            }
            let Some(top) = pending.pop() else {
                break;
            };
            path.push(top.idx());
            x = self.node(top).heavy;
        }
        path
    }

    pub fn get_weight(&self, v: usize) -> M::Weight {
        self.check(v);
        self.node(id(v)).aug.weight
    }

    pub fn set_weight(&mut self, v: usize, weight: M::Weight) {
        self.check(v);
        let x = id(v);
        self.access(x);
        self.node_mut(x).aug.weight = weight;
        self.update(x);
    }

    /// Fold of the weights on the path from `u` to `v`, in that order.
    pub fn get_path_sum(&mut self, u: usize, v: usize) -> Option<M::Sum> {
        let y = self.expose_connected(u, v)?;
        Some(self.node(y).aug.sum)
    }
}

impl<M: PathMonoid> PathQueries for LinkCutTree<PathStats<M>> {
    fn get_size(&mut self, v: usize) -> usize {
        self.get_size(v)
    }

    fn get_distance(&mut self, u: usize, v: usize) -> Option<usize> {
        self.get_distance(u, v)
    }

    fn get_lca(&mut self, u: usize, v: usize) -> Option<usize> {
        self.get_lca(u, v)
    }

    fn get_lca_rooted(&mut self, u: usize, v: usize, root: usize) -> Option<usize> {
        self.get_lca_rooted(u, v, root)
    }

    fn get_nth_node(&mut self, u: usize, v: usize, index: usize) -> Option<usize> {
        self.get_nth_node(u, v, index)
    }

    fn get_path(&mut self, u: usize, v: usize) -> Vec<usize> {
        self.get_path(u, v)
    }
}

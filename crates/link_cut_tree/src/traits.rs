//! Trait-based API over the link-cut tree variants.

pub trait DynamicForest: Sized {
    /// Create a forest of `num_nodes` isolated vertices `0..num_nodes`.
    fn new(num_nodes: usize) -> Self;
    fn len(&self) -> usize;
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an isolated vertex and return its index.
    fn add_node(&mut self) -> usize;

    /// Make `u` a child of `v` if they are in different trees.
    ///
    /// Returns `false` and leaves the forest unchanged if they are already connected.
    fn link(&mut self, u: usize, v: usize) -> bool;

    /// Remove the edge `(u, v)` if it exists.
    ///
    /// Returns `false` if there is no such edge.
    fn cut(&mut self, u: usize, v: usize) -> bool;

    fn connected(&mut self, u: usize, v: usize) -> bool;

    /// Reorient the tree of `v` so that `v` is its root.
    fn make_root(&mut self, v: usize);
    fn get_root(&mut self, v: usize) -> usize;
}

/// Queries on the path between two vertices. `None` means "not connected".
pub trait PathQueries: DynamicForest {
    fn get_size(&mut self, v: usize) -> usize;
    fn get_distance(&mut self, u: usize, v: usize) -> Option<usize>;

    /// Lowest common ancestor under the current root of the tree.
    fn get_lca(&mut self, u: usize, v: usize) -> Option<usize>;

    /// Lowest common ancestor after rerooting the tree at `root`.
    fn get_lca_rooted(&mut self, u: usize, v: usize, root: usize) -> Option<usize>;

    fn get_nth_node(&mut self, u: usize, v: usize, index: usize) -> Option<usize>;
    fn get_path(&mut self, u: usize, v: usize) -> Vec<usize>;
}

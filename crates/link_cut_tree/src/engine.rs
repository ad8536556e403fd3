use crate::augment::Augment;
use crate::traits::DynamicForest;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
pub(crate) fn id(v: usize) -> Id {
    debug_assert!(v < u32::MAX as usize);
    Id(v as u32)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<A> {
    pub(crate) parent: Id,
    /// Splay child toward the start of the represented path.
    pub(crate) light: Id,
    /// Splay child toward the end of the represented path.
    pub(crate) heavy: Id,
    /// The children still owe a reversal. `light`/`heavy` of this node are
    /// already swapped.
    pub(crate) lazy_reverse: bool,
    pub(crate) aug: A,
}

impl<A: Augment> Node<A> {
    fn new(aug: A) -> Self {
        Self {
            parent: Id::NIL,
            light: Id::NIL,
            heavy: Id::NIL,
            lazy_reverse: false,
            aug,
        }
    }
}

/// Link-Cut Tree (splay-based) over vertices `0..len()`.
///
/// Generic over an [`Augment`] payload; `()` gives the minimal tree with
/// `link`, `cut` and `connected` only. See
/// [`ExtendedLinkCutTree`](crate::ExtendedLinkCutTree) for path queries.
///
/// Every operation panics if given an index `>= len()`.
pub struct LinkCutTree<A: Augment = ()> {
    nodes: Vec<Node<A>>,
    stack: Vec<Id>,
}

impl<A: Augment> Default for LinkCutTree<A> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<A: Augment> LinkCutTree<A> {
    pub fn new(num_nodes: usize) -> Self {
        Self::from_payloads((0..num_nodes).map(|_| A::default()))
    }

    pub(crate) fn from_payloads(payloads: impl ExactSizeIterator<Item = A>) -> Self {
        assert!(
            payloads.len() < u32::MAX as usize,
            "too many nodes: {}",
            payloads.len()
        );
        let nodes: Vec<_> = payloads.map(Node::new).collect();
        let stack = Vec::with_capacity(nodes.len());
        Self { nodes, stack }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self) -> usize {
        self.push_node(A::default())
    }

    pub(crate) fn push_node(&mut self, aug: A) -> usize {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "too many nodes: {}", index + 1);
        self.nodes.push(Node::new(aug));
        index
    }

    #[inline(always)]
    #[track_caller]
    pub(crate) fn check(&self, v: usize) {
        assert!(
            v < self.nodes.len(),
            "vertex {v} out of range for a forest of {} vertices",
            self.nodes.len()
        );
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<A> {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.nodes.len());
        if cfg!(debug_assertions) {
            &self.nodes[x.idx()]
        } else {
            // SAFETY: `Id` values are only created from checked indices and `NIL` is never followed.
            unsafe { self.nodes.get_unchecked(x.idx()) }
        }
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Id) -> &mut Node<A> {
        debug_assert!(!x.is_nil());
        debug_assert!(x.idx() < self.nodes.len());
        if cfg!(debug_assertions) {
            &mut self.nodes[x.idx()]
        } else {
            // SAFETY: `Id` values are only created from checked indices and `NIL` is never followed.
            unsafe { self.nodes.get_unchecked_mut(x.idx()) }
        }
    }

    #[inline(always)]
    fn aug(&self, x: Id) -> Option<A> {
        if x.is_nil() { None } else { Some(self.node(x).aug) }
    }

    /// Whether `x` is the root of its splay tree. Its parent, if any, is then
    /// a path-parent.
    #[inline(always)]
    pub(crate) fn is_root(&self, x: Id) -> bool {
        let p = self.node(x).parent;
        p.is_nil() || (self.node(p).light != x && self.node(p).heavy != x)
    }

    fn reverse(&mut self, x: Id) {
        if x.is_nil() {
            return;
        }
        let nx = self.node_mut(x);
        std::mem::swap(&mut nx.light, &mut nx.heavy);
        nx.aug.reverse();
        nx.lazy_reverse ^= true;
    }

    pub(crate) fn push(&mut self, x: Id) {
        let nx = self.node(x);
        if !nx.lazy_reverse {
            return;
        }
        let (l, h) = (nx.light, nx.heavy);
        self.reverse(l);
        self.reverse(h);
        self.node_mut(x).lazy_reverse = false;
    }

    pub(crate) fn update(&mut self, x: Id) {
        let (l, h) = {
            let nx = self.node(x);
            (nx.light, nx.heavy)
        };
        let light = self.aug(l);
        let heavy = self.aug(h);
        self.node_mut(x).aug.update(light.as_ref(), heavy.as_ref());
    }

    fn attach_virtual(&mut self, parent: Id, child: Id) {
        let child = self.node(child).aug;
        self.node_mut(parent).aug.attach_virtual(&child);
    }

    fn detach_virtual(&mut self, parent: Id, child: Id) {
        let child = self.node(child).aug;
        self.node_mut(parent).aug.detach_virtual(&child);
    }

    /// Promote `x` over its splay parent. Both must already be pushed.
    fn rotate(&mut self, x: Id) {
        let p = self.node(x).parent;
        let g = self.node(p).parent;
        debug_assert!(!self.node(p).lazy_reverse && !self.node(x).lazy_reverse);

        if !self.is_root(p) {
            let ng = self.node_mut(g);
            if ng.light == p {
                ng.light = x;
            } else {
                ng.heavy = x;
            }
        }

        let inner = if self.node(p).light == x {
            let inner = self.node(x).heavy;
            self.node_mut(p).light = inner;
            self.node_mut(x).heavy = p;
            inner
        } else {
            let inner = self.node(x).light;
            self.node_mut(p).heavy = inner;
            self.node_mut(x).light = p;
            inner
        };
        if !inner.is_nil() {
            self.node_mut(inner).parent = p;
        }
        self.node_mut(p).parent = x;
        self.node_mut(x).parent = g;

        self.update(p);
        self.update(x);
    }

    /// Push lazy state from the root of `x`'s splay tree down to `x`.
    fn push_until(&mut self, x: Id) {
        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        let mut y = x;
        stack.push(y);
        while !self.is_root(y) {
            y = self.node(y).parent;
            stack.push(y);
        }
        while let Some(y) = stack.pop() {
            self.push(y);
        }
        self.stack = stack;
    }

    pub(crate) fn splay(&mut self, x: Id) {
        self.push_until(x);

        while !self.is_root(x) {
            let p = self.node(x).parent;
            if !self.is_root(p) {
                let g = self.node(p).parent;
                let zigzig = (self.node(g).light == p) == (self.node(p).light == x);
                if zigzig {
                    self.rotate(p);
                } else {
                    self.rotate(x);
                }
            }
            self.rotate(x);
        }
    }

    /// Expose the path from the root of `x`'s tree to `x` as the splay tree
    /// rooted at `x`. Afterwards `x` has no heavy child and no parent.
    pub(crate) fn access(&mut self, x: Id) {
        let mut last = Id::NIL;
        let mut y = x;
        while !y.is_nil() {
            self.splay(y);
            let old = self.node(y).heavy;
            if !old.is_nil() {
                self.attach_virtual(y, old);
            }
            if !last.is_nil() {
                self.detach_virtual(y, last);
            }
            self.node_mut(y).heavy = last;
            self.update(y);
            last = y;
            y = self.node(y).parent;
        }
        self.splay(x);
    }

    pub(crate) fn make_root_at(&mut self, x: Id) {
        self.access(x);
        // `x` is the last vertex of the exposed path; reversing it makes it the first.
        self.reverse(x);
        self.push(x);
    }

    pub(crate) fn root_of(&mut self, x: Id) -> Id {
        self.access(x);
        let mut y = x;
        self.push(y);
        while !self.node(y).light.is_nil() {
            y = self.node(y).light;
            self.push(y);
        }
        self.splay(y);
        y
    }

    pub fn make_root(&mut self, v: usize) {
        self.check(v);
        self.make_root_at(id(v));
    }

    /// Returns the current root of the tree containing `v`.
    pub fn get_root(&mut self, v: usize) -> usize {
        self.check(v);
        self.root_of(id(v)).idx()
    }

    /// Does not change the root of either tree.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.check(u);
        self.check(v);
        u == v || self.connected_ids(id(u), id(v))
    }

    pub(crate) fn connected_ids(&mut self, x: Id, y: Id) -> bool {
        self.root_of(x) == self.root_of(y)
    }

    /// Reroots `u`'s tree at `u` and hangs it below `v`.
    ///
    /// If `u` and `v` are already connected nothing changes, not even the
    /// roots, and `false` is returned. Otherwise the root of `v`'s tree
    /// becomes the root of the merged tree.
    pub fn link(&mut self, u: usize, v: usize) -> bool {
        self.check(u);
        self.check(v);
        let (x, y) = (id(u), id(v));
        if u == v || self.connected_ids(x, y) {
            return false;
        }
        self.make_root_at(x);
        self.access(y);
        self.node_mut(x).parent = y;
        self.attach_virtual(y, x);
        self.update(y);
        true
    }

    pub fn cut(&mut self, u: usize, v: usize) -> bool {
        self.check(u);
        self.check(v);
        let (x, y) = (id(u), id(v));
        self.cut_below(x, y) || self.cut_below(y, x)
    }

    /// Cut `(x, y)` if `x` is the direct predecessor of `y` once `x` is the root.
    fn cut_below(&mut self, x: Id, y: Id) -> bool {
        self.make_root_at(x);
        self.access(y);
        if self.node(y).light != x || !self.node(x).heavy.is_nil() {
            return false;
        }
        self.node_mut(y).light = Id::NIL;
        self.node_mut(x).parent = Id::NIL;
        self.update(y);
        true
    }
}

impl<A: Augment> DynamicForest for LinkCutTree<A> {
    fn new(num_nodes: usize) -> Self {
        Self::new(num_nodes)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn add_node(&mut self) -> usize {
        self.add_node()
    }

    fn link(&mut self, u: usize, v: usize) -> bool {
        self.link(u, v)
    }

    fn cut(&mut self, u: usize, v: usize) -> bool {
        self.cut(u, v)
    }

    fn connected(&mut self, u: usize, v: usize) -> bool {
        self.connected(u, v)
    }

    fn make_root(&mut self, v: usize) {
        self.make_root(v)
    }

    fn get_root(&mut self, v: usize) -> usize {
        self.get_root(v)
    }
}

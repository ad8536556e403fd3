use bench::{random_tree_edges, rng_for, shuffled_path_edges};
use rand::Rng;

pub const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
pub const OPS_PER_SIZE: usize = 5_000;
pub const WEIGHT_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

#[derive(Clone, Copy, Debug)]
pub enum ConnOp {
    Link { u: usize, v: usize },
    Cut { u: usize, v: usize },
    Connected { u: usize, v: usize },
}

#[derive(Clone, Copy, Debug)]
pub enum QueryOp {
    Distance { u: usize, v: usize },
    Lca { u: usize, v: usize, root: usize },
    NthNode { u: usize, v: usize, index: usize },
    Path { u: usize, v: usize },
}

#[derive(Clone, Copy, Debug)]
pub enum WeightOp {
    SetWeight {
        v: usize,
        weight: i64,
    },
    PathSum {
        u: usize,
        v: usize,
    },
    /// Reattach the subtree below `child` somewhere else; a no-op pair if the
    /// target ends up inside that subtree.
    EdgeSwap {
        child: usize,
        parent: usize,
        new_parent: usize,
    },
}

#[derive(Clone, Debug)]
pub struct ConnectivityCase {
    pub edges: Vec<(usize, usize)>,
    pub ops: Vec<ConnOp>,
}

#[derive(Clone, Debug)]
pub struct QueryCase {
    pub edges: Vec<(usize, usize)>,
    pub ops: Vec<QueryOp>,
}

#[derive(Clone, Debug)]
pub struct WeightCase {
    pub weights: Vec<i64>,
    pub edges: Vec<(usize, usize)>,
    pub ops: Vec<WeightOp>,
}

fn random_pair(rng: &mut impl Rng, n: usize) -> (usize, usize) {
    (rng.random_range(0..n), rng.random_range(0..n))
}

/// Random forest (a random tree with a quarter of its edges removed) followed
/// by a mix of connectivity queries, links and cuts.
///
/// Links are drawn blindly, so some of them join vertices that are already
/// connected and exercise the no-op path; cuts always pick a previously
/// issued edge, which may be stale for the same reason.
pub fn generate_connectivity_case(n: usize) -> ConnectivityCase {
    let mut rng = rng_for(1, n);
    let mut edges = random_tree_edges(&mut rng, n);
    for _ in 0..n / 4 {
        if edges.is_empty() {
            break;
        }
        let idx = rng.random_range(0..edges.len());
        edges.swap_remove(idx);
    }

    let mut live = edges.clone();
    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let roll = rng.random_range(0..100_u32);
        if roll < 50 || (roll >= 75 && live.is_empty()) {
            let (u, v) = random_pair(&mut rng, n);
            ops.push(ConnOp::Connected { u, v });
        } else if roll < 75 {
            let (u, v) = random_pair(&mut rng, n);
            live.push((u, v));
            ops.push(ConnOp::Link { u, v });
        } else {
            let idx = rng.random_range(0..live.len());
            let (u, v) = live.swap_remove(idx);
            ops.push(ConnOp::Cut { u, v });
        }
    }

    ConnectivityCase { edges, ops }
}

/// A single tree (random, or a path when `path_shaped`) and path queries on it.
pub fn generate_query_case(n: usize, path_shaped: bool) -> QueryCase {
    let mut rng = rng_for(if path_shaped { 3 } else { 2 }, n);
    let edges = if path_shaped {
        shuffled_path_edges(&mut rng, n)
    } else {
        random_tree_edges(&mut rng, n)
    };

    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let (u, v) = random_pair(&mut rng, n);
        let op = match rng.random_range(0..4_u32) {
            0 => QueryOp::Distance { u, v },
            1 => QueryOp::Lca {
                u,
                v,
                root: rng.random_range(0..n),
            },
            2 => QueryOp::NthNode {
                u,
                v,
                index: rng.random_range(0..n.min(64)),
            },
            _ => QueryOp::Path { u, v },
        };
        ops.push(op);
    }

    QueryCase { edges, ops }
}

pub fn generate_weight_case(n: usize) -> WeightCase {
    let mut rng = rng_for(4, n);
    let weights = (0..n).map(|_| rng.random_range(WEIGHT_RANGE)).collect();
    let edges = random_tree_edges(&mut rng, n);

    let mut ops = Vec::with_capacity(OPS_PER_SIZE);
    for _ in 0..OPS_PER_SIZE {
        let roll = rng.random_range(0..100_u32);
        let op = if roll < 40 {
            WeightOp::SetWeight {
                v: rng.random_range(0..n),
                weight: rng.random_range(WEIGHT_RANGE),
            }
        } else if roll < 80 {
            let (u, v) = random_pair(&mut rng, n);
            WeightOp::PathSum { u, v }
        } else {
            let (child, parent) = edges[rng.random_range(0..edges.len())];
            WeightOp::EdgeSwap {
                child,
                parent,
                new_parent: rng.random_range(0..n),
            }
        };
        ops.push(op);
    }

    WeightCase {
        weights,
        edges,
        ops,
    }
}

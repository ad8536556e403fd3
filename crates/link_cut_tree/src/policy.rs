//! Vertex weight policies for the extended link-cut tree.
//!
//! A policy is a monoid over per-vertex weights, folded along a path in order
//! from its first vertex to its last one.

/// A monoid used to aggregate vertex weights along a path.
///
/// `Sum` represents the aggregate over an *ordered* sequence of weights.
/// `sum_unit()` must be neutral in `sum_merge`.
pub trait PathMonoid {
    type Weight: Copy;
    type Sum: Copy;

    /// Whether the aggregate is invariant under sequence reversal.
    ///
    /// If `true`, the tree skips maintaining the reverse aggregate.
    const REVERSAL_INVARIANT: bool;

    /// Weight given to vertices created without an explicit one.
    fn weight_unit() -> Self::Weight;

    fn sum_unit() -> Self::Sum;
    fn sum_from_weight(weight: &Self::Weight) -> Self::Sum;

    /// Merge aggregates as `left + [weight] + right`.
    fn sum_merge(left: &Self::Sum, weight: &Self::Weight, right: &Self::Sum) -> Self::Sum;
}

/// No weights: only the structural statistics are maintained.
#[derive(Clone, Copy, Debug)]
pub enum Unweighted {}

impl PathMonoid for Unweighted {
    type Weight = ();
    type Sum = ();

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn weight_unit() -> Self::Weight {}

    #[inline(always)]
    fn sum_unit() -> Self::Sum {}

    #[inline(always)]
    fn sum_from_weight(_weight: &Self::Weight) -> Self::Sum {}

    #[inline(always)]
    fn sum_merge(_left: &Self::Sum, _weight: &Self::Weight, _right: &Self::Sum) -> Self::Sum {}
}

/// Wrapping `i64` sum.
#[derive(Clone, Copy, Debug)]
pub enum Sum {}

impl PathMonoid for Sum {
    type Weight = i64;
    type Sum = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn weight_unit() -> Self::Weight {
        0
    }

    #[inline(always)]
    fn sum_unit() -> Self::Sum {
        0
    }

    #[inline(always)]
    fn sum_from_weight(weight: &Self::Weight) -> Self::Sum {
        *weight
    }

    #[inline(always)]
    fn sum_merge(left: &Self::Sum, weight: &Self::Weight, right: &Self::Sum) -> Self::Sum {
        left.wrapping_add(*weight).wrapping_add(*right)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Xor {}

impl PathMonoid for Xor {
    type Weight = u64;
    type Sum = u64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn weight_unit() -> Self::Weight {
        0
    }

    #[inline(always)]
    fn sum_unit() -> Self::Sum {
        0
    }

    #[inline(always)]
    fn sum_from_weight(weight: &Self::Weight) -> Self::Sum {
        *weight
    }

    #[inline(always)]
    fn sum_merge(left: &Self::Sum, weight: &Self::Weight, right: &Self::Sum) -> Self::Sum {
        left ^ weight ^ right
    }
}

/// Path maximum. Vertices without a weight hold `i64::MIN`.
#[derive(Clone, Copy, Debug)]
pub enum Max {}

impl PathMonoid for Max {
    type Weight = i64;
    type Sum = i64;

    const REVERSAL_INVARIANT: bool = true;

    #[inline(always)]
    fn weight_unit() -> Self::Weight {
        i64::MIN
    }

    #[inline(always)]
    fn sum_unit() -> Self::Sum {
        i64::MIN
    }

    #[inline(always)]
    fn sum_from_weight(weight: &Self::Weight) -> Self::Sum {
        *weight
    }

    #[inline(always)]
    fn sum_merge(left: &Self::Sum, weight: &Self::Weight, right: &Self::Sum) -> Self::Sum {
        (*left).max(*weight).max(*right)
    }
}

/// The affine map `x -> a * x + b` (wrapping arithmetic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine {
    pub a: i64,
    pub b: i64,
}

impl Affine {
    pub const IDENTITY: Self = Self { a: 1, b: 0 };

    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    pub fn apply(self, x: i64) -> i64 {
        self.a.wrapping_mul(x).wrapping_add(self.b)
    }

    /// `self ∘ inner`: apply `inner` first, then `self`.
    pub fn after(self, inner: Self) -> Self {
        Self {
            a: self.a.wrapping_mul(inner.a),
            b: self.a.wrapping_mul(inner.b).wrapping_add(self.b),
        }
    }
}

/// Composition of affine maps along the path, first vertex applied first.
///
/// Not reversal invariant: `get_path_sum(u, v)` and `get_path_sum(v, u)`
/// generally differ.
#[derive(Clone, Copy, Debug)]
pub enum Composite {}

impl PathMonoid for Composite {
    type Weight = Affine;
    type Sum = Affine;

    const REVERSAL_INVARIANT: bool = false;

    #[inline(always)]
    fn weight_unit() -> Self::Weight {
        Affine::IDENTITY
    }

    #[inline(always)]
    fn sum_unit() -> Self::Sum {
        Affine::IDENTITY
    }

    #[inline(always)]
    fn sum_from_weight(weight: &Self::Weight) -> Self::Sum {
        *weight
    }

    #[inline(always)]
    fn sum_merge(left: &Self::Sum, weight: &Self::Weight, right: &Self::Sum) -> Self::Sum {
        right.after(weight.after(*left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold<P: PathMonoid>(weights: &[P::Weight]) -> P::Sum {
        weights
            .iter()
            .fold(P::sum_unit(), |acc, w| P::sum_merge(&acc, w, &P::sum_unit()))
    }

    #[test]
    fn units_are_neutral() {
        assert_eq!(Sum::sum_merge(&0, &7, &0), 7);
        assert_eq!(Xor::sum_merge(&0, &5, &0), 5);
        assert_eq!(Max::sum_merge(&i64::MIN, &-3, &i64::MIN), -3);
        let f = Affine::new(3, -2);
        assert_eq!(Composite::sum_merge(&Affine::IDENTITY, &f, &Affine::IDENTITY), f);
    }

    #[test]
    fn composite_applies_in_path_order() {
        // x + 1, then 2x, then x - 3
        let maps = [Affine::new(1, 1), Affine::new(2, 0), Affine::new(1, -3)];
        let total = fold::<Composite>(&maps);
        assert_eq!(total.apply(5), (5 + 1) * 2 - 3);

        let mut reversed = maps;
        reversed.reverse();
        let total_rev = fold::<Composite>(&reversed);
        assert_eq!(total_rev.apply(5), (5 - 3) * 2 + 1);
    }

    #[test]
    fn merge_is_associative_around_a_weight() {
        let left = fold::<Composite>(&[Affine::new(2, 1), Affine::new(-1, 4)]);
        let right = fold::<Composite>(&[Affine::new(3, 0)]);
        let mid = Affine::new(5, -7);
        let whole = fold::<Composite>(&[
            Affine::new(2, 1),
            Affine::new(-1, 4),
            Affine::new(5, -7),
            Affine::new(3, 0),
        ]);
        assert_eq!(Composite::sum_merge(&left, &mid, &right), whole);
    }
}

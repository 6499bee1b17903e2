use crate::bounds::{Boundary, Extended};
use std::cmp::Ordering;

/// One contiguous span of values: a pair of possibly infinite bounds, each
/// with its own open or closed boundary.
///
/// Construction is canonical.  An infinite bound always carries an open
/// boundary, and bounds that describe no value at all (a lower bound above
/// the upper one, or equal bounds with an open side) collapse to a single
/// empty form `(+inf,-inf)`.  Two atomic intervals holding the same values
/// therefore compare equal with the derived `PartialEq`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AtomicInterval<T> {
    left: Boundary,
    lower: Extended<T>,
    upper: Extended<T>,
    right: Boundary,
}

impl<T> AtomicInterval<T> {
    /// The canonical empty interval `(+inf,-inf)`.
    pub fn empty() -> Self {
        AtomicInterval {
            left: Boundary::Open,
            lower: Extended::PosInf,
            upper: Extended::NegInf,
            right: Boundary::Open,
        }
    }

    pub fn left(&self) -> Boundary {
        self.left
    }

    pub fn lower(&self) -> &Extended<T> {
        &self.lower
    }

    pub fn upper(&self) -> &Extended<T> {
        &self.upper
    }

    pub fn right(&self) -> Boundary {
        self.right
    }
}

impl<T: Ord> AtomicInterval<T> {
    /// Build an interval from its bounds, normalizing as needed.
    pub fn new(
        left: Boundary,
        lower: Extended<T>,
        upper: Extended<T>,
        right: Boundary,
    ) -> Self {
        let left = if lower.is_finite() { left } else { Boundary::Open };
        let right = if upper.is_finite() { right } else { Boundary::Open };
        let empty = match lower.cmp(&upper) {
            Ordering::Greater => true,
            Ordering::Equal => left.is_open() || right.is_open(),
            Ordering::Less => false,
        };
        if empty {
            AtomicInterval::empty()
        } else {
            AtomicInterval {
                left,
                lower,
                upper,
                right,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self.lower.cmp(&self.upper) {
            Ordering::Greater => true,
            Ordering::Equal => self.left.is_open() || self.right.is_open(),
            Ordering::Less => false,
        }
    }

    /// Whether `value` lies inside the interval.
    pub fn contains(&self, value: &T) -> bool {
        let above = match self.lower.cmp_value(value) {
            Ordering::Less => true,
            Ordering::Equal => self.left.is_closed(),
            Ordering::Greater => false,
        };
        let below = match self.upper.cmp_value(value) {
            Ordering::Greater => true,
            Ordering::Equal => self.right.is_closed(),
            Ordering::Less => false,
        };
        above && below
    }

    /// Whether every value of self is strictly below every value of other.
    /// Touching bounds qualify when at least one of the facing boundaries
    /// is open:
    ///
    /// ```txt
    ///    [--self--)[--other--]     true
    ///    [--self--](--other--]     true
    ///    [--self--][--other--]     false, the bound is shared
    /// ```
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        match self.upper.cmp(&other.lower) {
            Ordering::Less => true,
            Ordering::Equal => self.right.is_open() || other.left.is_open(),
            Ordering::Greater => false,
        }
    }

    /// Whether other is a subset of self.
    pub fn encloses(&self, other: &Self) -> bool {
        self.cmp_lower(other) != Ordering::Greater
            && self.cmp_upper(other) != Ordering::Less
    }

    /// Whether the union of the two intervals is one contiguous interval:
    /// they overlap, or they touch with a closed boundary on at least one
    /// side of the touching point.  The empty interval is mergeable with
    /// everything.
    pub fn mergeable(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return true;
        }
        let (first, second) = if self.cmp_lower(other) == Ordering::Greater {
            (other, self)
        } else {
            (self, other)
        };
        match first.upper.cmp(&second.lower) {
            Ordering::Greater => true,
            Ordering::Equal => first.right.is_closed() || second.left.is_closed(),
            Ordering::Less => false,
        }
    }

    /// Order by lower bound.  At equal values the closed boundary comes
    /// first since it reaches further left.
    pub(crate) fn cmp_lower(&self, other: &Self) -> Ordering {
        self.lower.cmp(&other.lower).then(match (self.left, other.left) {
            (Boundary::Closed, Boundary::Open) => Ordering::Less,
            (Boundary::Open, Boundary::Closed) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }

    /// Order by upper bound.  At equal values the open boundary comes
    /// first since it stops short of the bound.
    pub(crate) fn cmp_upper(&self, other: &Self) -> Ordering {
        self.upper.cmp(&other.upper).then(match (self.right, other.right) {
            (Boundary::Open, Boundary::Closed) => Ordering::Less,
            (Boundary::Closed, Boundary::Open) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }
}

impl<T: Ord + Clone> AtomicInterval<T> {
    /// The values common to both intervals.
    ///
    /// The intersection starts at the later of the two lower bounds and
    /// stops at the earlier of the two upper bounds.  At equal bound
    /// values the open boundary wins, it is the more restrictive one.
    pub fn intersection(&self, other: &Self) -> Self {
        let (left, lower) = if self.cmp_lower(other) == Ordering::Less {
            (other.left, other.lower.clone())
        } else {
            (self.left, self.lower.clone())
        };
        let (right, upper) = if self.cmp_upper(other) == Ordering::Greater {
            (other.right, other.upper.clone())
        } else {
            (self.right, self.upper.clone())
        };
        AtomicInterval::new(left, lower, upper, right)
    }

    /// The smallest single interval containing both, whether or not they
    /// overlap.  At equal bound values the closed boundary wins.
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let (left, lower) = if self.cmp_lower(other) == Ordering::Greater {
            (other.left, other.lower.clone())
        } else {
            (self.left, self.lower.clone())
        };
        let (right, upper) = if self.cmp_upper(other) == Ordering::Less {
            (other.right, other.upper.clone())
        } else {
            (self.right, self.upper.clone())
        };
        AtomicInterval::new(left, lower, upper, right)
    }
}

impl<T: ::core::fmt::Display + PartialEq> ::core::fmt::Display for AtomicInterval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if matches!(
            (&self.lower, &self.upper),
            (Extended::PosInf, Extended::NegInf)
        ) {
            return write!(f, "()");
        }
        let left = if self.left.is_closed() { '[' } else { '(' };
        let right = if self.right.is_closed() { ']' } else { ')' };
        if self.lower == self.upper {
            write!(f, "{}{}{}", left, self.lower, right)
        } else {
            write!(f, "{}{},{}{}", left, self.lower, self.upper, right)
        }
    }
}

impl<T: ::core::fmt::Debug + PartialEq> ::core::fmt::Debug for AtomicInterval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if matches!(
            (&self.lower, &self.upper),
            (Extended::PosInf, Extended::NegInf)
        ) {
            return write!(f, "()");
        }
        let left = if self.left.is_closed() { '[' } else { '(' };
        let right = if self.right.is_closed() { ']' } else { ')' };
        if self.lower == self.upper {
            write!(f, "{}{:?}{}", left, self.lower, right)
        } else {
            write!(f, "{}{:?},{:?}{}", left, self.lower, self.upper, right)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bounds::Boundary::{Closed, Open};
    use crate::bounds::Extended::{Finite, NegInf, PosInf};

    fn closed(lower: i32, upper: i32) -> AtomicInterval<i32> {
        AtomicInterval::new(Closed, Finite(lower), Finite(upper), Closed)
    }

    fn open(lower: i32, upper: i32) -> AtomicInterval<i32> {
        AtomicInterval::new(Open, Finite(lower), Finite(upper), Open)
    }

    fn closedopen(lower: i32, upper: i32) -> AtomicInterval<i32> {
        AtomicInterval::new(Closed, Finite(lower), Finite(upper), Open)
    }

    fn openclosed(lower: i32, upper: i32) -> AtomicInterval<i32> {
        AtomicInterval::new(Open, Finite(lower), Finite(upper), Closed)
    }

    #[test]
    fn test_new() {
        let intv = closed(0, 1);
        assert_eq!(intv.left(), Closed);
        assert_eq!(*intv.lower(), Finite(0));
        assert_eq!(*intv.upper(), Finite(1));
        assert_eq!(intv.right(), Closed);

        // Infinite bounds are always open
        let intv = AtomicInterval::new(Closed, NegInf, Finite(3), Closed);
        assert_eq!(intv.left(), Open);
        assert_eq!(intv.right(), Closed);

        // Degenerate bounds collapse to the one empty form
        assert_eq!(closed(3, 1), AtomicInterval::empty());
        assert_eq!(open(0, 0), AtomicInterval::empty());
        assert_eq!(closedopen(0, 0), AtomicInterval::empty());
        assert_eq!(
            AtomicInterval::<i32>::new(Closed, PosInf, PosInf, Closed),
            AtomicInterval::empty()
        );
        assert!(closed(3, 1).is_empty());
        assert!(!closed(0, 0).is_empty());
        assert!(!closed(0, 1).is_empty());
    }

    #[test]
    fn test_contains() {
        let intv = closedopen(0, 5);
        assert!(intv.contains(&0));
        assert!(intv.contains(&3));
        assert!(!intv.contains(&5));
        assert!(!intv.contains(&-1));

        let intv = AtomicInterval::new(Open, NegInf, Finite(3), Closed);
        assert!(intv.contains(&i32::MIN));
        assert!(intv.contains(&3));
        assert!(!intv.contains(&4));

        assert!(!AtomicInterval::empty().contains(&0));
    }

    #[test]
    fn test_strictly_left_of() {
        assert!(closed(0, 1).strictly_left_of(&closed(2, 3)));
        assert!(closedopen(0, 1).strictly_left_of(&closed(1, 2)));
        assert!(closed(0, 1).strictly_left_of(&openclosed(1, 2)));
        assert!(!closed(0, 1).strictly_left_of(&closed(1, 2)));
        assert!(!closed(0, 5).strictly_left_of(&closed(2, 3)));
    }

    #[test]
    fn test_encloses() {
        assert!(closed(0, 5).encloses(&closed(1, 4)));
        assert!(closed(0, 5).encloses(&closed(0, 5)));
        assert!(closed(0, 5).encloses(&open(0, 5)));
        assert!(!open(0, 5).encloses(&closed(0, 5)));
        assert!(!closed(0, 5).encloses(&closed(4, 6)));
        assert!(closed(0, 5).encloses(&AtomicInterval::empty()));
        assert!(AtomicInterval::<i32>::empty().encloses(&AtomicInterval::empty()));
    }

    #[test]
    fn test_mergeable() {
        assert!(closed(0, 2).mergeable(&closed(1, 3)));
        assert!(closed(0, 1).mergeable(&closed(1, 2)));
        assert!(closedopen(0, 1).mergeable(&closed(1, 2)));
        assert!(!closedopen(0, 1).mergeable(&openclosed(1, 2)));
        assert!(!closed(0, 1).mergeable(&closed(2, 3)));
        assert!(closed(2, 3).mergeable(&closed(0, 1)) == closed(0, 1).mergeable(&closed(2, 3)));
        assert!(closed(0, 1).mergeable(&AtomicInterval::empty()));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(closed(0, 5).intersection(&closed(3, 8)), closed(3, 5));
        assert_eq!(closed(0, 5).intersection(&open(0, 5)), open(0, 5));
        assert_eq!(closed(0, 1).intersection(&closed(1, 2)), closed(1, 1));
        assert_eq!(
            closedopen(0, 1).intersection(&closed(1, 2)),
            AtomicInterval::empty()
        );
        assert_eq!(
            closed(0, 1).intersection(&closed(4, 5)),
            AtomicInterval::empty()
        );
    }

    #[test]
    fn test_hull() {
        assert_eq!(closed(0, 1).hull(&closed(4, 5)), closed(0, 5));
        assert_eq!(open(0, 5).hull(&closed(0, 5)), closed(0, 5));
        assert_eq!(closed(4, 5).hull(&closed(0, 1)), closed(0, 5));
        assert_eq!(closed(0, 1).hull(&AtomicInterval::empty()), closed(0, 1));
        assert_eq!(AtomicInterval::empty().hull(&closed(0, 1)), closed(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", closed(0, 1)), "[0,1]");
        assert_eq!(format!("{}", openclosed(0, 1)), "(0,1]");
        assert_eq!(format!("{}", closed(2, 2)), "[2]");
        assert_eq!(format!("{}", AtomicInterval::<i32>::empty()), "()");
        assert_eq!(
            format!("{}", AtomicInterval::new(Open, NegInf, Finite(1), Open)),
            "(-inf,1)"
        );
    }
}

use crate::atomic::AtomicInterval;
use crate::bounds::{Boundary, Extended};
use crate::interval::Interval;
use std::cmp::Ordering;

/// A type whose values have immediate neighbours.
///
/// Interval algebra treats every domain as dense: `(0,1)` is not empty
/// and `[0,1] | [2,3]` does not merge, since nothing tells apart the
/// reals from the integers there.  This trait tells them apart, and
/// [`Interval::canonicalized`] uses it to rewrite an interval in terms
/// of the values it actually contains.
pub trait Discrete: Sized {
    /// The smallest value greater than `self`, if there is one.
    fn successor(&self) -> Option<Self>;

    /// The greatest value smaller than `self`, if there is one.
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! discrete_int {
    ($($t:ty),*) => {
        $(
            impl Discrete for $t {
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

discrete_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Discrete for char {
    fn successor(&self) -> Option<Self> {
        let mut code = *self as u32 + 1;
        // Skip the surrogate range, those are not scalar values
        if (0xD800..=0xDFFF).contains(&code) {
            code = 0xE000;
        }
        char::from_u32(code)
    }

    fn predecessor(&self) -> Option<Self> {
        let mut code = (*self as u32).checked_sub(1)?;
        if (0xD800..=0xDFFF).contains(&code) {
            code = 0xD7FF;
        }
        char::from_u32(code)
    }
}

#[cfg(feature = "chrono")]
impl Discrete for chrono::NaiveDate {
    fn successor(&self) -> Option<Self> {
        self.succ_opt()
    }

    fn predecessor(&self) -> Option<Self> {
        self.pred_opt()
    }
}

// Closes a finite open bound on the nearest contained neighbour.  A
// bound with no neighbour on that side is left as it is.
fn canonical_atom<T: Ord + Clone + Discrete>(atom: &AtomicInterval<T>) -> AtomicInterval<T> {
    let mut left = atom.left();
    let mut lower = atom.lower().clone();
    if left.is_open() {
        if let Extended::Finite(value) = &lower {
            if let Some(next) = value.successor() {
                lower = Extended::Finite(next);
                left = Boundary::Closed;
            }
        }
    }
    let mut right = atom.right();
    let mut upper = atom.upper().clone();
    if right.is_open() {
        if let Extended::Finite(value) = &upper {
            if let Some(previous) = value.predecessor() {
                upper = Extended::Finite(previous);
                right = Boundary::Closed;
            }
        }
    }
    AtomicInterval::new(left, lower, upper, right)
}

// Canonical pieces also merge across a gap no value falls in, as
// [0,1] and [2,3] do for integers.
fn mergeable_discrete<T: Ord + Clone + Discrete>(
    a: &AtomicInterval<T>,
    b: &AtomicInterval<T>,
) -> bool {
    if a.mergeable(b) {
        return true;
    }
    let (first, second) = if a.cmp_lower(b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    };
    if first.right().is_closed() && second.left().is_closed() {
        if let (Extended::Finite(upper), Extended::Finite(lower)) = (first.upper(), second.lower())
        {
            return upper.successor().as_ref() == Some(lower);
        }
    }
    false
}

impl<T: Ord + Clone + Discrete> Interval<T> {
    /// The same set of values, written with closed bounds wherever the
    /// domain allows it, and with touching pieces merged:
    ///
    /// ```
    ///    use interval_unions::Interval;
    ///
    ///    assert_eq!(Interval::open(0, 5).canonicalized(), Interval::closed(1, 4));
    ///    assert!(Interval::open(0, 1).canonicalized().is_empty());
    ///    assert_eq!(
    ///        (Interval::closed(0, 1) | Interval::closed(2, 3)).canonicalized(),
    ///        Interval::closed(0, 3),
    ///    );
    /// ```
    ///
    /// The rest of the crate keeps treating bounds densely; call this
    /// where discrete semantics are wanted.
    pub fn canonicalized(&self) -> Self {
        Interval::normalized(self.iter().map(canonical_atom), mergeable_discrete)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_successor() {
        assert_eq!(0_i32.successor(), Some(1));
        assert_eq!(0_i32.predecessor(), Some(-1));
        assert_eq!(i32::MAX.successor(), None);
        assert_eq!(i32::MIN.predecessor(), None);
        assert_eq!(0_u8.predecessor(), None);
        assert_eq!(255_u8.successor(), None);
    }

    #[test]
    fn test_char_neighbours() {
        assert_eq!('a'.successor(), Some('b'));
        assert_eq!('b'.predecessor(), Some('a'));
        assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
        assert_eq!('\u{E000}'.predecessor(), Some('\u{D7FF}'));
        assert_eq!(char::MAX.successor(), None);
        assert_eq!('\0'.predecessor(), None);
    }

    #[test]
    fn test_canonicalized() {
        assert_eq!(
            Interval::open(0, 5).canonicalized(),
            Interval::closed(1, 4)
        );
        assert_eq!(
            Interval::openclosed(0, 5).canonicalized(),
            Interval::closed(1, 5)
        );
        assert!(Interval::open(0, 1).canonicalized().is_empty());
        assert_eq!(
            Interval::open(0, 2).canonicalized(),
            Interval::singleton(1)
        );
        assert_eq!(
            Interval::closed(0, 3).canonicalized(),
            Interval::closed(0, 3)
        );

        // Open infinite bounds stay open
        assert_eq!(
            Interval::less_than(5).canonicalized(),
            Interval::at_most(4)
        );
        assert_eq!(
            Interval::at_least(0).canonicalized(),
            Interval::at_least(0)
        );

        // Bounds without a neighbour are kept as they are
        let edge = Interval::open(i32::MAX - 1, i32::MAX).canonicalized();
        assert!(edge.is_empty());
        let edge = Interval::openclosed(i32::MAX, i32::MAX);
        assert!(edge.is_empty());
    }

    #[test]
    fn test_canonicalized_merges() {
        assert_eq!(
            (Interval::closed(0, 1) | Interval::closed(2, 3)).canonicalized(),
            Interval::closed(0, 3)
        );
        assert_eq!(
            (Interval::closed(0, 1) | Interval::closed(3, 4)).canonicalized(),
            Interval::closed(0, 1) | Interval::closed(3, 4)
        );
        assert_eq!(
            (Interval::closedopen(0, 2) | Interval::closed(2, 3)).canonicalized(),
            Interval::closed(0, 3)
        );
        assert_eq!(
            (Interval::singleton(1) | Interval::singleton(2)).canonicalized(),
            Interval::closed(1, 2)
        );
        assert_eq!(
            Interval::open('a', 'd').canonicalized(),
            Interval::closed('b', 'c')
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_dates() {
        use chrono::NaiveDate;

        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(date(2024, 1, 31).successor(), Some(date(2024, 2, 1)));
        assert_eq!(date(2024, 3, 1).predecessor(), Some(date(2024, 2, 29)));

        let intv = Interval::open(date(2024, 1, 1), date(2024, 1, 10)).canonicalized();
        assert_eq!(intv, Interval::closed(date(2024, 1, 2), date(2024, 1, 9)));
    }
}

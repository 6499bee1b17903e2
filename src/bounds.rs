use std::cmp::Ordering;
use std::ops::{Neg, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether an endpoint belongs to the interval it delimits.
///
/// A closed boundary includes the bound value, an open boundary excludes
/// it.  Negating a boundary returns the other kind, which is what the
/// complement of an interval does to each of its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    Closed,
    Open,
}

impl Boundary {
    pub fn is_closed(self) -> bool {
        matches!(self, Boundary::Closed)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Boundary::Open)
    }
}

impl Not for Boundary {
    type Output = Boundary;

    fn not(self) -> Boundary {
        match self {
            Boundary::Closed => Boundary::Open,
            Boundary::Open => Boundary::Closed,
        }
    }
}

/// A bound value extended with the two infinities.
///
/// The variants are declared in increasing order, so the derived `Ord`
/// places `NegInf` below every finite value and `PosInf` above.
///
/// ```
///    use interval_unions::Extended;
///
///    assert!(Extended::NegInf < Extended::Finite(i32::MIN));
///    assert!(Extended::Finite(i32::MAX) < Extended::PosInf);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extended<T> {
    NegInf,
    Finite(T),
    PosInf,
}

impl<T> Extended<T> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Extended::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// The finite value, if there is one.
    pub fn as_finite(&self) -> Option<&T> {
        match self {
            Extended::Finite(value) => Some(value),
            Extended::NegInf | Extended::PosInf => None,
        }
    }

    pub fn into_finite(self) -> Option<T> {
        match self {
            Extended::Finite(value) => Some(value),
            Extended::NegInf | Extended::PosInf => None,
        }
    }

    /// Apply a function to the finite value, keeping infinities as they
    /// are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Extended<U> {
        match self {
            Extended::NegInf => Extended::NegInf,
            Extended::Finite(value) => Extended::Finite(f(value)),
            Extended::PosInf => Extended::PosInf,
        }
    }
}

impl<T: Ord> Extended<T> {
    /// Compare against a plain value of the bound type.
    pub fn cmp_value(&self, value: &T) -> Ordering {
        match self {
            Extended::NegInf => Ordering::Less,
            Extended::Finite(this) => this.cmp(value),
            Extended::PosInf => Ordering::Greater,
        }
    }
}

///   -Extended
impl<T: Neg<Output = T>> Neg for Extended<T> {
    type Output = Extended<T>;

    fn neg(self) -> Extended<T> {
        match self {
            Extended::NegInf => Extended::PosInf,
            Extended::Finite(value) => Extended::Finite(-value),
            Extended::PosInf => Extended::NegInf,
        }
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for Extended<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Extended::NegInf => write!(f, "-inf"),
            Extended::Finite(value) => write!(f, "{}", value),
            Extended::PosInf => write!(f, "+inf"),
        }
    }
}

impl<T: ::core::fmt::Debug> ::core::fmt::Debug for Extended<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Extended::NegInf => write!(f, "-inf"),
            Extended::Finite(value) => write!(f, "{:?}", value),
            Extended::PosInf => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_boundary() {
        assert!(Boundary::Closed.is_closed());
        assert!(!Boundary::Closed.is_open());
        assert!(Boundary::Open.is_open());
        assert_eq!(!Boundary::Closed, Boundary::Open);
        assert_eq!(!Boundary::Open, Boundary::Closed);
        assert_eq!(!!Boundary::Open, Boundary::Open);
    }

    #[test]
    fn test_order() {
        assert!(Extended::NegInf < Extended::Finite(i32::MIN));
        assert!(Extended::Finite(0) < Extended::Finite(1));
        assert!(Extended::Finite(i32::MAX) < Extended::PosInf);
        assert!(Extended::NegInf::<i32> < Extended::PosInf);
        assert_eq!(Extended::Finite(3), Extended::Finite(3));
    }

    #[test]
    fn test_cmp_value() {
        assert_eq!(Extended::NegInf.cmp_value(&5), Ordering::Less);
        assert_eq!(Extended::Finite(3).cmp_value(&5), Ordering::Less);
        assert_eq!(Extended::Finite(5).cmp_value(&5), Ordering::Equal);
        assert_eq!(Extended::Finite(8).cmp_value(&5), Ordering::Greater);
        assert_eq!(Extended::PosInf.cmp_value(&5), Ordering::Greater);
    }

    #[test]
    fn test_map() {
        assert_eq!(Extended::Finite(4).map(|v| v * 2), Extended::Finite(8));
        assert_eq!(Extended::NegInf::<i32>.map(|v| v * 2), Extended::NegInf);
        assert_eq!(Extended::PosInf::<i32>.map(|v| v * 2), Extended::PosInf);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Extended::Finite(4), Extended::Finite(-4));
        assert_eq!(-Extended::NegInf::<i32>, Extended::PosInf);
        assert_eq!(-Extended::PosInf::<i32>, Extended::NegInf);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Extended::Finite(4)), "4");
        assert_eq!(format!("{}", Extended::NegInf::<i32>), "-inf");
        assert_eq!(format!("{}", Extended::PosInf::<i32>), "+inf");
    }
}

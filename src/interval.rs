use crate::atomic::AtomicInterval;
use crate::bounds::{Boundary, Extended};
use itertools::Itertools;
use std::cmp::Ordering;
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

/// An interval on an ordered type, stored as a union of atomic intervals.
///
/// The union is kept normalized at all times: components are non-empty,
/// sorted by lower bound, pairwise disjoint and non-mergeable.  Every set
/// of values therefore has exactly one representation, and the derived
/// `PartialEq` compares intervals by the values they contain:
///
/// ```
///    use interval_unions::Interval;
///
///    let intv = Interval::closed(0, 2) | Interval::closed(1, 5);
///    assert_eq!(intv, Interval::closed(0, 5));
/// ```
///
/// The empty interval is the union of no components.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    atoms: Vec<AtomicInterval<T>>,
}

impl<T> Interval<T> {
    /// The interval containing no value.
    pub fn empty() -> Self {
        Interval { atoms: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether the interval has at most one component.  The empty
    /// interval is atomic.
    pub fn is_atomic(&self) -> bool {
        self.atoms.len() <= 1
    }

    /// The number of atomic components.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// The n-th atomic component, in increasing order.
    pub fn get(&self, index: usize) -> Option<&AtomicInterval<T>> {
        self.atoms.get(index)
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, AtomicInterval<T>> {
        self.atoms.iter()
    }

    /// The boundary of the lowest bound, if the interval is not empty.
    pub fn left(&self) -> Option<Boundary> {
        self.atoms.first().map(AtomicInterval::left)
    }

    /// The lowest bound, if the interval is not empty.
    pub fn lower(&self) -> Option<&Extended<T>> {
        self.atoms.first().map(AtomicInterval::lower)
    }

    /// The highest bound, if the interval is not empty.
    pub fn upper(&self) -> Option<&Extended<T>> {
        self.atoms.last().map(AtomicInterval::upper)
    }

    /// The boundary of the highest bound, if the interval is not empty.
    pub fn right(&self) -> Option<Boundary> {
        self.atoms.last().map(AtomicInterval::right)
    }
}

impl<T: Ord> Interval<T> {
    /// Build an interval from a single set of bounds.
    ///
    /// Infinite bounds are forced open, and bounds describing no value
    /// produce the empty interval.
    pub fn from_atomic(
        left: Boundary,
        lower: Extended<T>,
        upper: Extended<T>,
        right: Boundary,
    ) -> Self {
        AtomicInterval::new(left, lower, upper, right).into()
    }

    /// Create an interval including both bounds:
    ///
    /// ```txt
    ///    [------------------]
    ///    lower          upper
    /// ```
    pub fn closed(lower: T, upper: T) -> Self {
        Interval::from_atomic(
            Boundary::Closed,
            Extended::Finite(lower),
            Extended::Finite(upper),
            Boundary::Closed,
        )
    }

    /// Create an interval excluding both bounds:
    ///
    /// ```txt
    ///    (------------------)
    ///    lower          upper
    /// ```
    pub fn open(lower: T, upper: T) -> Self {
        Interval::from_atomic(
            Boundary::Open,
            Extended::Finite(lower),
            Extended::Finite(upper),
            Boundary::Open,
        )
    }

    /// Create an interval including the lower bound and excluding the
    /// upper one:
    ///
    /// ```txt
    ///    [------------------)
    ///    lower          upper
    /// ```
    pub fn closedopen(lower: T, upper: T) -> Self {
        Interval::from_atomic(
            Boundary::Closed,
            Extended::Finite(lower),
            Extended::Finite(upper),
            Boundary::Open,
        )
    }

    /// Create an interval excluding the lower bound and including the
    /// upper one:
    ///
    /// ```txt
    ///    (------------------]
    ///    lower          upper
    /// ```
    pub fn openclosed(lower: T, upper: T) -> Self {
        Interval::from_atomic(
            Boundary::Open,
            Extended::Finite(lower),
            Extended::Finite(upper),
            Boundary::Closed,
        )
    }

    /// Create the interval `[lower,+inf)`.
    pub fn at_least(lower: T) -> Self {
        Interval::from_atomic(
            Boundary::Closed,
            Extended::Finite(lower),
            Extended::PosInf,
            Boundary::Open,
        )
    }

    /// Create the interval `(lower,+inf)`.
    pub fn greater_than(lower: T) -> Self {
        Interval::from_atomic(
            Boundary::Open,
            Extended::Finite(lower),
            Extended::PosInf,
            Boundary::Open,
        )
    }

    /// Create the interval `(-inf,upper]`.
    pub fn at_most(upper: T) -> Self {
        Interval::from_atomic(
            Boundary::Open,
            Extended::NegInf,
            Extended::Finite(upper),
            Boundary::Closed,
        )
    }

    /// Create the interval `(-inf,upper)`.
    pub fn less_than(upper: T) -> Self {
        Interval::from_atomic(
            Boundary::Open,
            Extended::NegInf,
            Extended::Finite(upper),
            Boundary::Open,
        )
    }

    /// Create the interval containing every value.
    pub fn whole() -> Self {
        Interval::from_atomic(
            Boundary::Open,
            Extended::NegInf,
            Extended::PosInf,
            Boundary::Open,
        )
    }

    /// Whether `value` lies inside the interval.
    pub fn contains(&self, value: &T) -> bool {
        self.atoms.iter().any(|atom| atom.contains(value))
    }

    /// Whether `other` is a subset of self.
    pub fn contains_interval(&self, other: &Self) -> bool {
        let mut mine = self.atoms.iter();
        let mut current = mine.next();
        'pieces: for piece in &other.atoms {
            while let Some(atom) = current {
                if atom.strictly_left_of(piece) {
                    current = mine.next();
                } else if atom.encloses(piece) {
                    continue 'pieces;
                } else {
                    return false;
                }
            }
            return false;
        }
        true
    }

    /// Whether the two intervals share at least one value.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.atoms.get(i), other.atoms.get(j)) {
            if a.strictly_left_of(b) {
                i += 1;
            } else if b.strictly_left_of(a) {
                j += 1;
            } else {
                return true;
            }
        }
        false
    }

    /// Whether every value of the interval is strictly below x.  True
    /// when the interval is empty.
    pub fn strictly_left_of(&self, x: &T) -> bool {
        match self.atoms.last() {
            None => true,
            Some(last) => match last.upper().cmp_value(x) {
                Ordering::Less => true,
                Ordering::Equal => last.right().is_open(),
                Ordering::Greater => false,
            },
        }
    }

    /// Whether every value of the interval is below or equal to x.  True
    /// when the interval is empty.
    pub fn left_of(&self, x: &T) -> bool {
        match self.atoms.last() {
            None => true,
            Some(last) => last.upper().cmp_value(x) != Ordering::Greater,
        }
    }

    /// Whether every value of the interval is strictly above x.  True
    /// when the interval is empty.
    pub fn strictly_right_of(&self, x: &T) -> bool {
        match self.atoms.first() {
            None => true,
            Some(first) => match first.lower().cmp_value(x) {
                Ordering::Greater => true,
                Ordering::Equal => first.left().is_open(),
                Ordering::Less => false,
            },
        }
    }

    /// Whether every value of the interval is above or equal to x.  True
    /// when the interval is empty.
    pub fn right_of(&self, x: &T) -> bool {
        match self.atoms.first() {
            None => true,
            Some(first) => first.lower().cmp_value(x) != Ordering::Less,
        }
    }

    /// Whether every value of self is strictly below every value of
    /// other.  Touching bounds qualify when one of the facing boundaries
    /// is open.  True when either interval is empty.
    pub fn strictly_left_of_interval(&self, other: &Self) -> bool {
        match (self.atoms.last(), other.atoms.first()) {
            (Some(last), Some(first)) => last.strictly_left_of(first),
            _ => true,
        }
    }

    /// Mirror of [`Interval::strictly_left_of_interval`].
    pub fn strictly_right_of_interval(&self, other: &Self) -> bool {
        other.strictly_left_of_interval(self)
    }

    /// Whether self ends before other does, or at the same bound.  An
    /// open upper bound ends before a closed one on the same value.  True
    /// when either interval is empty.
    pub fn ends_no_later_than(&self, other: &Self) -> bool {
        match (self.atoms.last(), other.atoms.last()) {
            (Some(a), Some(b)) => a.cmp_upper(b) != Ordering::Greater,
            _ => true,
        }
    }

    /// Whether self starts after other does, or at the same bound.  An
    /// open lower bound starts after a closed one on the same value.
    /// True when either interval is empty.
    pub fn starts_no_earlier_than(&self, other: &Self) -> bool {
        match (self.atoms.first(), other.atoms.first()) {
            (Some(a), Some(b)) => a.cmp_lower(b) != Ordering::Less,
            _ => true,
        }
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// Create an interval containing a single value.
    pub fn singleton(value: T) -> Self {
        Interval::from_atomic(
            Boundary::Closed,
            Extended::Finite(value.clone()),
            Extended::Finite(value),
            Boundary::Closed,
        )
    }

    /// Build an interval from any collection of atomic pieces.  The
    /// pieces may be empty, unsorted or overlapping, the result is
    /// normalized.
    pub fn from_atomics<I>(atoms: I) -> Self
    where
        I: IntoIterator<Item = AtomicInterval<T>>,
    {
        Interval::normalized(atoms, AtomicInterval::mergeable)
    }

    /// Normalize a collection of atomic pieces: drop the empty ones, sort
    /// by lower bound and merge neighbors for which `mergeable` holds.
    pub(crate) fn normalized<I, F>(atoms: I, mergeable: F) -> Self
    where
        I: IntoIterator<Item = AtomicInterval<T>>,
        F: Fn(&AtomicInterval<T>, &AtomicInterval<T>) -> bool,
    {
        let mut atoms: Vec<AtomicInterval<T>> =
            atoms.into_iter().filter(|atom| !atom.is_empty()).collect();
        atoms.sort_unstable_by(|a, b| a.cmp_lower(b));
        let mut merged: Vec<AtomicInterval<T>> = Vec::with_capacity(atoms.len());
        for atom in atoms {
            match merged.last_mut() {
                Some(last) if mergeable(last, &atom) => *last = last.hull(&atom),
                _ => merged.push(atom),
            }
        }
        Interval { atoms: merged }
    }

    /// The values present in self, other or both.
    pub fn union(&self, other: &Self) -> Self {
        Interval::from_atomics(self.atoms.iter().chain(other.atoms.iter()).cloned())
    }

    /// The values present in both intervals.
    ///
    /// Components are walked in parallel, always advancing the one that
    /// ends first.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut pieces = Vec::new();
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.atoms.get(i), other.atoms.get(j)) {
            if a.strictly_left_of(b) {
                i += 1;
            } else if b.strictly_left_of(a) {
                j += 1;
            } else {
                pieces.push(a.intersection(b));
                if a.cmp_upper(b) == Ordering::Greater {
                    j += 1;
                } else {
                    i += 1;
                }
            }
        }
        Interval::from_atomics(pieces)
    }

    /// The values not present in the interval: the gap before the first
    /// component, the gaps between consecutive components, and the gap
    /// after the last one.  Each kept bound flips its boundary.
    pub fn complement(&self) -> Self {
        if self.atoms.is_empty() {
            return Interval::whole();
        }
        let mut pieces = Vec::with_capacity(self.atoms.len() + 1);
        if let Some(first) = self.atoms.first() {
            pieces.push(AtomicInterval::new(
                Boundary::Open,
                Extended::NegInf,
                first.lower().clone(),
                !first.left(),
            ));
        }
        for (before, after) in self.atoms.iter().tuple_windows() {
            pieces.push(AtomicInterval::new(
                !before.right(),
                before.upper().clone(),
                after.lower().clone(),
                !after.left(),
            ));
        }
        if let Some(last) = self.atoms.last() {
            pieces.push(AtomicInterval::new(
                !last.right(),
                last.upper().clone(),
                Extended::PosInf,
                Boundary::Open,
            ));
        }
        Interval::from_atomics(pieces)
    }

    /// The values of self not present in other.
    pub fn difference(&self, other: &Self) -> Self {
        self.intersection(&other.complement())
    }

    /// The values present in exactly one of the two intervals.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// The smallest atomic interval containing self.
    pub fn enclosure(&self) -> Self {
        match (self.atoms.first(), self.atoms.last()) {
            (Some(first), Some(last)) => Interval::from_atomic(
                first.left(),
                first.lower().clone(),
                last.upper().clone(),
                last.right(),
            ),
            _ => Interval::empty(),
        }
    }

    /// Whether the two intervals touch without sharing any value, so
    /// that their union is one contiguous interval.
    pub fn adjacent(&self, other: &Self) -> bool {
        self.intersection(other).is_empty() && self.union(other).is_atomic()
    }

    /// Rebuild the interval with some of its outer bounds replaced.
    ///
    /// Bounds given as `None` keep the value they have in the enclosure
    /// of self.  The result is renormalized, so narrowing a bound can
    /// drop components and widening one can merge them.
    pub fn replace(
        &self,
        left: Option<Boundary>,
        lower: Option<Extended<T>>,
        upper: Option<Extended<T>>,
        right: Option<Boundary>,
    ) -> Self {
        let (enc_left, enc_lower, enc_upper, enc_right) =
            match (self.atoms.first(), self.atoms.last()) {
                (Some(first), Some(last)) => (
                    first.left(),
                    first.lower().clone(),
                    last.upper().clone(),
                    last.right(),
                ),
                _ => (
                    Boundary::Open,
                    Extended::PosInf,
                    Extended::NegInf,
                    Boundary::Open,
                ),
            };
        let left = left.unwrap_or(enc_left);
        let lower = lower.unwrap_or(enc_lower);
        let upper = upper.unwrap_or(enc_upper);
        let right = right.unwrap_or(enc_right);

        if self.is_atomic() {
            return Interval::from_atomic(left, lower, upper, right);
        }
        let narrowed = self.intersection(&Interval::from_atomic(
            left,
            lower.clone(),
            upper.clone(),
            right,
        ));
        if narrowed.is_atomic() {
            return Interval::from_atomic(left, lower, upper, right);
        }
        let mut pieces = narrowed.atoms;
        if let Some(first) = pieces.first_mut() {
            *first = AtomicInterval::new(left, lower, first.upper().clone(), first.right());
        }
        if let Some(last) = pieces.last_mut() {
            *last = AtomicInterval::new(last.left(), last.lower().clone(), upper, right);
        }
        Interval::from_atomics(pieces)
    }

    /// Transform each atomic component and reassemble the results into a
    /// normalized interval.  The function may return an atomic interval
    /// or a whole one.
    ///
    /// ```
    ///    use interval_unions::{AtomicInterval, Interval};
    ///
    ///    let intv = Interval::closed(0, 1) | Interval::closed(4, 5);
    ///    let shifted = intv.apply(|atom| {
    ///        AtomicInterval::new(
    ///            atom.left(),
    ///            atom.lower().clone().map(|v| v + 10),
    ///            atom.upper().clone().map(|v| v + 10),
    ///            atom.right(),
    ///        )
    ///    });
    ///    assert_eq!(shifted, Interval::closed(10, 11) | Interval::closed(14, 15));
    /// ```
    pub fn apply<F, I>(&self, mut f: F) -> Self
    where
        F: FnMut(&AtomicInterval<T>) -> I,
        I: Into<Interval<T>>,
    {
        self.atoms
            .iter()
            .map(|atom| -> Interval<T> { f(atom).into() })
            .collect()
    }
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Interval::empty()
    }
}

impl<T: Ord> From<AtomicInterval<T>> for Interval<T> {
    fn from(atom: AtomicInterval<T>) -> Self {
        if atom.is_empty() {
            Interval::empty()
        } else {
            Interval { atoms: vec![atom] }
        }
    }
}

/// Collecting atomic intervals builds their normalized union.
impl<T: Ord + Clone> FromIterator<AtomicInterval<T>> for Interval<T> {
    fn from_iter<I: IntoIterator<Item = AtomicInterval<T>>>(iter: I) -> Self {
        Interval::from_atomics(iter)
    }
}

/// Collecting intervals builds their union.
impl<T: Ord + Clone> FromIterator<Interval<T>> for Interval<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Interval::from_atomics(iter.into_iter().flat_map(|intv| intv.atoms))
    }
}

impl<'a, T> IntoIterator for &'a Interval<T> {
    type Item = &'a AtomicInterval<T>;
    type IntoIter = ::std::slice::Iter<'a, AtomicInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl<T> IntoIterator for Interval<T> {
    type Item = AtomicInterval<T>;
    type IntoIter = ::std::vec::IntoIter<AtomicInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

///  &Interval & &Interval
impl<T: Ord + Clone> BitAnd<&Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: &Interval<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  &Interval & Interval
impl<T: Ord + Clone> BitAnd<Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Interval<T>) -> Self::Output {
        self.intersection(&rhs)
    }
}

///  Interval & &Interval
impl<T: Ord + Clone> BitAnd<&Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: &Interval<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

///  Interval & Interval
impl<T: Ord + Clone> BitAnd<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, rhs: Interval<T>) -> Self::Output {
        self.intersection(&rhs)
    }
}

///  &Interval | &Interval
impl<T: Ord + Clone> BitOr<&Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: &Interval<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  &Interval | Interval
impl<T: Ord + Clone> BitOr<Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: Interval<T>) -> Self::Output {
        self.union(&rhs)
    }
}

///  Interval | &Interval
impl<T: Ord + Clone> BitOr<&Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: &Interval<T>) -> Self::Output {
        self.union(rhs)
    }
}

///  Interval | Interval
impl<T: Ord + Clone> BitOr<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitor(self, rhs: Interval<T>) -> Self::Output {
        self.union(&rhs)
    }
}

///  &Interval - &Interval
impl<T: Ord + Clone> Sub<&Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: &Interval<T>) -> Self::Output {
        self.difference(rhs)
    }
}

///  &Interval - Interval
impl<T: Ord + Clone> Sub<Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: Interval<T>) -> Self::Output {
        self.difference(&rhs)
    }
}

///  Interval - &Interval
impl<T: Ord + Clone> Sub<&Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: &Interval<T>) -> Self::Output {
        self.difference(rhs)
    }
}

///  Interval - Interval
impl<T: Ord + Clone> Sub<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn sub(self, rhs: Interval<T>) -> Self::Output {
        self.difference(&rhs)
    }
}

///  &Interval ^ &Interval
impl<T: Ord + Clone> BitXor<&Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitxor(self, rhs: &Interval<T>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

///  &Interval ^ Interval
impl<T: Ord + Clone> BitXor<Interval<T>> for &Interval<T> {
    type Output = Interval<T>;

    fn bitxor(self, rhs: Interval<T>) -> Self::Output {
        self.symmetric_difference(&rhs)
    }
}

///  Interval ^ &Interval
impl<T: Ord + Clone> BitXor<&Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitxor(self, rhs: &Interval<T>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

///  Interval ^ Interval
impl<T: Ord + Clone> BitXor<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn bitxor(self, rhs: Interval<T>) -> Self::Output {
        self.symmetric_difference(&rhs)
    }
}

///  !&Interval
impl<T: Ord + Clone> Not for &Interval<T> {
    type Output = Interval<T>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

///  !Interval
impl<T: Ord + Clone> Not for Interval<T> {
    type Output = Interval<T>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl<T: ::core::fmt::Display + PartialEq> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.atoms.is_empty() {
            return write!(f, "()");
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

impl<T: ::core::fmt::Debug + PartialEq> ::core::fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.atoms.is_empty() {
            return write!(f, "()");
        }
        for (index, atom) in self.atoms.iter().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{:?}", atom)?;
        }
        Ok(())
    }
}

use crate::atomic::AtomicInterval;
use crate::errors::Error;
use crate::interval::Interval;
use std::cmp::Ordering;

/// Lazily yield the values of `interval`, starting from its lower bound
/// and applying `step` repeatedly.
///
/// Values falling in a gap between two pieces are skipped, so the step
/// does not have to line up with the bounds:
///
/// ```
///    use interval_unions::{iterate, Interval};
///
///    let intv = Interval::closed(0, 2) | Interval::openclosed(4, 6);
///    let values = iterate(&intv, |v| v + 1).unwrap().collect::<Vec<_>>();
///    assert_eq!(values, vec![0, 1, 2, 5, 6]);
/// ```
///
/// The iterator is infinite when the interval has no upper bound.  An
/// interval with no lower bound cannot be iterated this way and fails
/// with [`Error::UnboundedStart`].
pub fn iterate<'a, T, S>(
    interval: &'a Interval<T>,
    step: S,
) -> Result<impl Iterator<Item = T> + 'a, Error>
where
    T: Ord + Clone,
    S: FnMut(&T) -> T + 'a,
{
    iterate_aligned(interval, step, seed_identity)
}

/// Like [`iterate`], with each piece's first value passed through `base`
/// before stepping starts.  This keeps the yielded values aligned on a
/// grid rather than on the bounds of the pieces:
///
/// ```
///    use interval_unions::{iterate_aligned, Interval};
///
///    let intv = Interval::closed(1, 7);
///    let evens = iterate_aligned(&intv, |v| v + 2, |v: i32| v - v.rem_euclid(2))
///        .unwrap()
///        .collect::<Vec<_>>();
///    assert_eq!(evens, vec![2, 4, 6]);
/// ```
///
/// `base` may return a value below the piece it starts; stepping resumes
/// from there until the piece is reached.
pub fn iterate_aligned<'a, T, S, B>(
    interval: &'a Interval<T>,
    step: S,
    base: B,
) -> Result<impl Iterator<Item = T> + 'a, Error>
where
    T: Ord + Clone,
    S: FnMut(&T) -> T + 'a,
    B: FnMut(T) -> T + 'a,
{
    if let Some(first) = interval.get(0) {
        if !first.lower().is_finite() {
            return Err(Error::UnboundedStart);
        }
    }
    Ok(Steps {
        atoms: interval.iter(),
        current: None,
        value: None,
        step,
        base,
        descending: false,
    })
}

/// Like [`iterate`], from the upper bound down.  `step` must decrease
/// its argument.
///
/// Fails with [`Error::UnboundedStart`] when the interval has no upper
/// bound; the iterator is infinite when it has no lower bound.
pub fn iterate_rev<'a, T, S>(
    interval: &'a Interval<T>,
    step: S,
) -> Result<impl Iterator<Item = T> + 'a, Error>
where
    T: Ord + Clone,
    S: FnMut(&T) -> T + 'a,
{
    iterate_rev_aligned(interval, step, seed_identity)
}

/// Like [`iterate_rev`], with each piece's first value passed through
/// `base` before stepping starts.
pub fn iterate_rev_aligned<'a, T, S, B>(
    interval: &'a Interval<T>,
    step: S,
    base: B,
) -> Result<impl Iterator<Item = T> + 'a, Error>
where
    T: Ord + Clone,
    S: FnMut(&T) -> T + 'a,
    B: FnMut(T) -> T + 'a,
{
    if let Some(last) = interval.iter().next_back() {
        if !last.upper().is_finite() {
            return Err(Error::UnboundedStart);
        }
    }
    Ok(Steps {
        atoms: interval.iter().rev(),
        current: None,
        value: None,
        step,
        base,
        descending: true,
    })
}

fn seed_identity<T>(value: T) -> T {
    value
}

struct Steps<'a, T, I, S, B> {
    atoms: I,
    current: Option<&'a AtomicInterval<T>>,
    value: Option<T>,
    step: S,
    base: B,
    descending: bool,
}

impl<'a, T: Ord, I, S, B> Steps<'a, T, I, S, B> {
    // Whether `value` still lies before the start of `atom`, in the
    // direction of travel.
    fn before_start(&self, atom: &AtomicInterval<T>, value: &T) -> bool {
        if self.descending {
            match atom.upper().cmp_value(value) {
                Ordering::Less => true,
                Ordering::Equal => atom.right().is_open(),
                Ordering::Greater => false,
            }
        } else {
            match atom.lower().cmp_value(value) {
                Ordering::Greater => true,
                Ordering::Equal => atom.left().is_open(),
                Ordering::Less => false,
            }
        }
    }

    // Whether `value` has not yet left `atom` through its far end.
    fn within_end(&self, atom: &AtomicInterval<T>, value: &T) -> bool {
        if self.descending {
            match atom.lower().cmp_value(value) {
                Ordering::Less => true,
                Ordering::Equal => atom.left().is_closed(),
                Ordering::Greater => false,
            }
        } else {
            match atom.upper().cmp_value(value) {
                Ordering::Greater => true,
                Ordering::Equal => atom.right().is_closed(),
                Ordering::Less => false,
            }
        }
    }
}

impl<'a, T, I, S, B> Iterator for Steps<'a, T, I, S, B>
where
    T: Ord + Clone,
    I: Iterator<Item = &'a AtomicInterval<T>>,
    S: FnMut(&T) -> T,
    B: FnMut(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.value.take() {
                let atom = self.current?;
                if self.within_end(atom, &value) {
                    self.value = Some((self.step)(&value));
                    return Some(value);
                }
                // Fell past this piece, start over on the next one
            }
            let atom = self.atoms.next()?;
            self.current = Some(atom);
            let bound = if self.descending {
                atom.upper()
            } else {
                atom.lower()
            };
            let mut value = (self.base)(bound.as_finite()?.clone());
            while self.before_start(atom, &value) {
                value = (self.step)(&value);
            }
            self.value = Some(value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(intv: &Interval<i32>) -> Vec<i32> {
        iterate(intv, |v| v + 1).unwrap().collect()
    }

    #[test]
    fn test_iterate() {
        assert_eq!(collect(&Interval::closed(0, 2)), vec![0, 1, 2]);
        assert_eq!(collect(&Interval::open(0, 3)), vec![1, 2]);
        assert_eq!(collect(&Interval::openclosed(0, 2)), vec![1, 2]);
        assert_eq!(collect(&Interval::singleton(5)), vec![5]);
        assert_eq!(collect(&Interval::empty()), Vec::<i32>::new());

        let intv = Interval::closed(0, 1) | Interval::closed(4, 5);
        assert_eq!(collect(&intv), vec![0, 1, 4, 5]);

        // An open gap bound is skipped over
        let intv = Interval::closedopen(0, 2) | Interval::open(2, 5);
        assert_eq!(collect(&intv), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_iterate_step() {
        let stepped = iterate(&Interval::closed(0, 6), |v| v + 2)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(stepped, vec![0, 2, 4, 6]);

        // The step does not have to land on the bounds
        let stepped = iterate(&Interval::closed(0, 5), |v| v + 2)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(stepped, vec![0, 2, 4]);
    }

    #[test]
    fn test_iterate_aligned() {
        let evens = iterate_aligned(&Interval::closed(1, 7), |v| v + 2, |v: i32| {
            v - v.rem_euclid(2)
        })
        .unwrap()
        .collect::<Vec<_>>();
        assert_eq!(evens, vec![2, 4, 6]);

        // Alignment is applied again on each piece
        let intv = Interval::closed(1, 4) | Interval::closed(11, 14);
        let evens = iterate_aligned(&intv, |v| v + 2, |v: i32| v - v.rem_euclid(2))
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(evens, vec![2, 4, 12, 14]);
    }

    #[test]
    fn test_iterate_rev() {
        let values = iterate_rev(&Interval::closed(0, 2), |v| v - 1)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(values, vec![2, 1, 0]);

        let values = iterate_rev(&Interval::closedopen(0, 3), |v| v - 1)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(values, vec![2, 1, 0]);

        let intv = Interval::closed(0, 1) | Interval::open(4, 7);
        let values = iterate_rev(&intv, |v| v - 1).unwrap().collect::<Vec<_>>();
        assert_eq!(values, vec![6, 5, 1, 0]);
    }

    #[test]
    fn test_iterate_rev_aligned() {
        let evens = iterate_rev_aligned(&Interval::closed(1, 7), |v| v - 2, |v: i32| {
            v - v.rem_euclid(2)
        })
        .unwrap()
        .collect::<Vec<_>>();
        assert_eq!(evens, vec![6, 4, 2]);
    }

    #[test]
    fn test_iterate_unbounded() {
        let first = iterate(&Interval::at_least(0), |v| v + 1)
            .unwrap()
            .take(3)
            .collect::<Vec<_>>();
        assert_eq!(first, vec![0, 1, 2]);

        let first = iterate_rev(&Interval::at_most(0), |v| v - 1)
            .unwrap()
            .take(3)
            .collect::<Vec<_>>();
        assert_eq!(first, vec![0, -1, -2]);

        assert!(matches!(
            iterate(&Interval::at_most(0), |v| v + 1),
            Err(Error::UnboundedStart)
        ));
        assert!(matches!(
            iterate(&Interval::less_than(0), |v| v + 1),
            Err(Error::UnboundedStart)
        ));
        assert!(matches!(
            iterate_rev(&Interval::at_least(0), |v| v - 1),
            Err(Error::UnboundedStart)
        ));
        assert!(matches!(
            iterate_rev(&Interval::whole(), |v: &i32| v - 1),
            Err(Error::UnboundedStart)
        ));
    }
}

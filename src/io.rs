use crate::atomic::AtomicInterval;
use crate::bounds::{Boundary, Extended};
use crate::errors::Error;
use crate::interval::Interval;
use regex::Regex;

/// Labels used by [`to_string_with`] to print an interval.
///
/// The defaults produce the same text as the `Display` implementation,
/// `"[0,1] | (2,4]"` style.
#[derive(Clone, Debug)]
pub struct Format {
    /// Separator between the pieces of a union.
    pub disj: String,
    /// Separator between the two bounds of a piece.
    pub sep: String,
    pub left_open: String,
    pub left_closed: String,
    pub right_open: String,
    pub right_closed: String,
    pub pinf: String,
    pub ninf: String,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            disj: " | ".to_string(),
            sep: ",".to_string(),
            left_open: "(".to_string(),
            left_closed: "[".to_string(),
            right_open: ")".to_string(),
            right_closed: "]".to_string(),
            pinf: "+inf".to_string(),
            ninf: "-inf".to_string(),
        }
    }
}

/// Regular-expression fragments used by [`from_string_with`] to
/// recognize the pieces of an interval.
///
/// The defaults accept everything the default [`Format`] prints, with
/// some slack on whitespace around separators.  A fragment may use
/// alternations, `"<|\\["` accepts both `<` and `[` as a closed left
/// boundary.
#[derive(Clone, Debug)]
pub struct Pattern {
    /// Matches a single bound value, lazily.
    pub bound: String,
    pub disj: String,
    pub sep: String,
    pub left_open: String,
    pub left_closed: String,
    pub right_open: String,
    pub right_closed: String,
    pub pinf: String,
    pub ninf: String,
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern {
            bound: ".+?".to_string(),
            disj: r" ?\| ?".to_string(),
            sep: ", ?".to_string(),
            left_open: r"\(".to_string(),
            left_closed: r"\[".to_string(),
            right_open: r"\)".to_string(),
            right_closed: r"\]".to_string(),
            pinf: r"\+inf".to_string(),
            ninf: "-inf".to_string(),
        }
    }
}

/// Print `interval` with the default [`Format`]:
///
/// ```
///    use interval_unions::{to_string, Interval};
///
///    let intv = Interval::closed(0, 1) | Interval::singleton(3);
///    assert_eq!(to_string(&intv), "[0,1] | [3]");
/// ```
pub fn to_string<T>(interval: &Interval<T>) -> String
where
    T: Ord + ::core::fmt::Display,
{
    to_string_with(interval, |value| value.to_string(), &Format::default())
}

/// Print `interval`, one piece at a time, with `conv` applied to every
/// finite bound.  A piece with equal bounds is printed with a single
/// bound, `[2]` rather than `[2,2]`.
pub fn to_string_with<T, F>(interval: &Interval<T>, mut conv: F, format: &Format) -> String
where
    T: Ord,
    F: FnMut(&T) -> String,
{
    if interval.is_empty() {
        return format!("{}{}", format.left_open, format.right_open);
    }

    let mut bound_text = |bound: &Extended<T>| match bound {
        Extended::NegInf => format.ninf.clone(),
        Extended::Finite(value) => conv(value),
        Extended::PosInf => format.pinf.clone(),
    };

    let mut pieces = Vec::new();
    for atom in interval.iter() {
        let left = if atom.left().is_closed() {
            &format.left_closed
        } else {
            &format.left_open
        };
        let right = if atom.right().is_closed() {
            &format.right_closed
        } else {
            &format.right_open
        };
        let lower = bound_text(atom.lower());
        if atom.lower() == atom.upper() {
            pieces.push(format!("{}{}{}", left, lower, right));
        } else {
            let upper = bound_text(atom.upper());
            pieces.push(format!("{}{}{}{}{}", left, lower, format.sep, upper, right));
        }
    }
    pieces.join(&format.disj)
}

/// Parse `text` with the default [`Pattern`].  `conv` turns the text of
/// a finite bound into a value; returning `None` fails the parse.
///
/// ```
///    use interval_unions::{from_string, Interval};
///
///    let intv = from_string("[0,1] | (2,4]", |s| s.parse::<i32>().ok()).unwrap();
///    assert_eq!(intv, Interval::closed(0, 1) | Interval::openclosed(2, 4));
/// ```
pub fn from_string<T, F>(text: &str, conv: F) -> Result<Interval<T>, Error>
where
    T: Ord + Clone,
    F: FnMut(&str) -> Option<T>,
{
    from_string_with(text, conv, &Pattern::default())
}

/// Parse `text` as a union of intervals.
///
/// Pieces are matched one after the other, separated by the disjunction
/// pattern, and their union is returned.  A piece with a single bound is
/// read as a singleton, a piece with no bound at all as empty.  The
/// infinity patterns are tried on each bound before `conv` is called.
pub fn from_string_with<T, F>(text: &str, mut conv: F, pattern: &Pattern) -> Result<Interval<T>, Error>
where
    T: Ord + Clone,
    F: FnMut(&str) -> Option<T>,
{
    let atom_re = Regex::new(&format!(
        "^(?P<left>{lo}|{lc})(|(?P<lower>{bound})({sep}(?P<upper>{bound}))?)(?P<right>{ro}|{rc})",
        lo = pattern.left_open,
        lc = pattern.left_closed,
        bound = pattern.bound,
        sep = pattern.sep,
        ro = pattern.right_open,
        rc = pattern.right_closed,
    ))?;
    let disj_re = Regex::new(&format!("^(?:{})", pattern.disj))?;
    let left_closed_re = Regex::new(&format!("^(?:{})$", pattern.left_closed))?;
    let right_closed_re = Regex::new(&format!("^(?:{})$", pattern.right_closed))?;
    let pinf_re = Regex::new(&format!("^(?:{})", pattern.pinf))?;
    let ninf_re = Regex::new(&format!("^(?:{})", pattern.ninf))?;

    let mut convert = |bound: &str| -> Result<Extended<T>, Error> {
        if pinf_re.is_match(bound) {
            Ok(Extended::PosInf)
        } else if ninf_re.is_match(bound) {
            Ok(Extended::NegInf)
        } else {
            conv(bound)
                .map(Extended::Finite)
                .ok_or_else(|| Error::Parse(text.to_string()))
        }
    };

    let mut atoms = Vec::new();
    let mut remaining = text;
    loop {
        let caps = atom_re
            .captures(remaining)
            .ok_or_else(|| Error::Parse(text.to_string()))?;
        let end = caps.get(0).map_or(0, |m| m.end());
        if end == 0 {
            return Err(Error::Parse(text.to_string()));
        }

        let left = match caps.name("left") {
            Some(m) if left_closed_re.is_match(m.as_str()) => Boundary::Closed,
            _ => Boundary::Open,
        };
        let right = match caps.name("right") {
            Some(m) if right_closed_re.is_match(m.as_str()) => Boundary::Closed,
            _ => Boundary::Open,
        };
        // No bound at all is an empty piece, a single bound a singleton
        let lower = match caps.name("lower") {
            Some(m) => convert(m.as_str())?,
            None => Extended::PosInf,
        };
        let upper = match caps.name("upper") {
            Some(m) => convert(m.as_str())?,
            None => lower.clone(),
        };
        atoms.push(AtomicInterval::new(left, lower, upper, right));

        remaining = &remaining[end..];
        if remaining.is_empty() {
            break;
        }
        let sep = disj_re
            .find(remaining)
            .ok_or_else(|| Error::Parse(text.to_string()))?;
        remaining = &remaining[sep.end()..];
    }
    Ok(Interval::from_atomics(atoms))
}

/// Export `interval` as `(left, lower, upper, right)` tuples, one per
/// piece, in order.
pub fn to_data<T: Clone>(
    interval: &Interval<T>,
) -> Vec<(Boundary, Extended<T>, Extended<T>, Boundary)> {
    interval
        .iter()
        .map(|atom| {
            (
                atom.left(),
                atom.lower().clone(),
                atom.upper().clone(),
                atom.right(),
            )
        })
        .collect()
}

/// Build an interval back from [`to_data`] tuples.  The pieces do not
/// have to be sorted or disjoint, the result is normalized.
pub fn from_data<T, I>(data: I) -> Interval<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = (Boundary, Extended<T>, Extended<T>, Boundary)>,
{
    data.into_iter()
        .map(|(left, lower, upper, right)| AtomicInterval::new(left, lower, upper, right))
        .collect()
}

/// Serialized as [`to_data`] tuples.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Interval<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.iter()
                .map(|atom| (atom.left(), atom.lower(), atom.upper(), atom.right())),
        )
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Interval<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data =
            Vec::<(Boundary, Extended<T>, Extended<T>, Boundary)>::deserialize(deserializer)?;
        Ok(from_data(data))
    }
}

//! Operations on intervals and unions of intervals.
//!
//! An [`Interval`] holds every value between its bounds.  It may be
//! unbounded on either side, and it may consist of several disjoint
//! pieces.  Every operation normalizes its result, so two intervals
//! holding the same values always compare equal.
//!
//!  |Interval |Constructor               |Description
//!  |---------|--------------------------|--------------
//!  | `[A,B]` |[`Interval::closed`]      |left-closed, right-closed
//!  | `[A,B)` |[`Interval::closedopen`]  |left-closed, right-open
//!  | `(A,B)` |[`Interval::open`]        |left-open, right-open
//!  | `(A,B]` |[`Interval::openclosed`]  |left-open, right-closed
//!  | `[A]`   |[`Interval::singleton`]   |a single value
//!  | `[A,)`  |[`Interval::at_least`]    |right-unbounded
//!  | `(A,)`  |[`Interval::greater_than`]|right-unbounded, left-open
//!  | `(,A]`  |[`Interval::at_most`]     |left-unbounded
//!  | `(,A)`  |[`Interval::less_than`]   |left-unbounded, right-open
//!  | `(,)`   |[`Interval::whole`]       |all values
//!  | `()`    |[`Interval::empty`]       |no value
//!
//! Any totally ordered type can be used for the bounds.  Most
//! operations only require `Ord`, some also require `Clone`.
//!
//! The usual set operations are available both as methods and as
//! operators:
//!
//! ```text
//!        [------ A ------]
//!               [----- B -------]
//!
//!               [--------]            Intersection (A & B)
//!        [----------------------]     Union (A | B)
//!        [------)                     Difference (A - B)
//!        [------)        (------]     Symmetric difference (A ^ B)
//!        [----------------------]     Enclosure
//! ```
//!
//! When the operands do not touch, a union simply keeps both pieces,
//! and the other operations work piece by piece:
//!
//! ```text
//!      [---A---]   [----B----]
//!
//!                                 Intersection (A & B) is empty
//!      [-------]   [---------]    Union (A | B), two pieces
//!      [---------------------]    Enclosure
//! ```
//!
//! Bounds are compared densely, whatever the type: `(0,1)` on integers
//! is not empty, and `[0,1] | [2,3]` keeps two pieces.  The
//! [`Discrete`] trait and [`Interval::canonicalized`] opt into
//! discrete semantics where that is wanted.
//!
//! [`IntervalDict`] maps disjoint intervals to values, [`iterate`]
//! steps through the values of an interval, and [`to_string`] /
//! [`from_string`] round-trip intervals through text.

mod atomic;
mod bounds;
mod dict;
mod discrete;
mod errors;
mod interval;
mod io;
mod iterate;

pub use crate::atomic::AtomicInterval;
pub use crate::bounds::{Boundary, Extended};
pub use crate::dict::IntervalDict;
pub use crate::discrete::Discrete;
pub use crate::errors::Error;
pub use crate::interval::Interval;
pub use crate::io::{
    from_data, from_string, from_string_with, to_data, to_string, to_string_with, Format, Pattern,
};
pub use crate::iterate::{iterate, iterate_aligned, iterate_rev, iterate_rev_aligned};

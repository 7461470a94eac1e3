/*!
[`Interval`] represents an interval over any totally ordered domain by a pair
of [`Endpoint`]s, each of which may be open, closed, or unbounded, and answers
questions about it: is it empty, does it cover the whole domain, does it
contain a given point, and how does it relate to another interval (before,
after, overlapping, starting or ending earlier, including it).


# Endpoints

Each side of an interval is one of:

- [`Endpoint::Closed`]: the boundary value belongs to the interval (`≤`/`≥`).
- [`Endpoint::Open`]: the boundary value does not (`<`/`>`).
- [`Endpoint::Unbounded`]: the interval extends to infinity on that side.

No relationship between the two sides is enforced. An interval whose lower
bound lies above its upper bound is simply empty, as is one whose bounds
coincide unless both are closed:

```rust
use intervals::{Endpoint, Interval};

assert!(!Interval::new(Endpoint::closed(3), Endpoint::closed(3)).is_empty());
assert!(Interval::new(Endpoint::open(3), Endpoint::open(3)).is_empty());
assert!(Interval::new(Endpoint::closed(4), Endpoint::closed(3)).is_empty());
```

Intervals can also be built from the standard library's range types
(`1..3` becomes `[1, 3)`, `..=5` becomes `(-inf, 5]`), and implement
[`RangeBounds`](core::ops::RangeBounds).


# Touching boundaries

Two intervals that meet at a value share that point only if both of them
include it:

```rust
use intervals::{Endpoint, Int, Interval};

// [1, 3] and (3, +inf)
let i = Interval::new(Endpoint::closed(Int(1)), Endpoint::closed(Int(3)));
let i2 = Interval::new(Endpoint::open(Int(3)), Endpoint::unbounded());

assert!(!i.overlaps(&i2));
assert!(i.before(&i2));
assert!(i.contains(&Int(2)));
assert!(!i2.contains(&Int(3)));
```

For any two non-empty intervals, exactly one of
[`before`](Interval::before), [`after`](Interval::after) and
[`overlaps`](Interval::overlaps) holds.


# Value types

Any type implementing [`Ordered`] can be used as the interval's value
type. [`Ordered`] is implemented for the primitive integer types, and two
ready-made wrappers are provided: [`Int`] and (with the **chrono** feature)
[`Time`].

```rust
use intervals::{Endpoint, Interval, Ordered};

#[derive(Clone, Copy, PartialEq)]
struct Version {
    major: u32,
    minor: u32,
}

impl Ordered for Version {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn less_than(&self, other: &Self) -> bool {
        (self.major, self.minor) < (other.major, other.minor)
    }
}

let v = |major, minor| Version { major, minor };

// [1.0, 2.0) and [1.5, 2.5)
let i = Interval::new(Endpoint::closed(v(1, 0)), Endpoint::open(v(2, 0)));
let i2 = Interval::new(Endpoint::closed(v(1, 5)), Endpoint::open(v(2, 5)));
assert!(i.overlaps(&i2));
```


## Crate features

The **chrono** feature is enabled by default, and provides the [`Time`]
wrapper over `chrono::DateTime<Utc>`. Disable default features to build
with no dependencies on other crates.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for all types in this crate.

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.


## Building without the Rust standard library

This crate works without the standard library or a global allocator;
it links only `core`.



[`Interval`]: crate::Interval
[`Endpoint`]: crate::Endpoint
[`Endpoint::Closed`]: crate::Endpoint::Closed
[`Endpoint::Open`]: crate::Endpoint::Open
[`Endpoint::Unbounded`]: crate::Endpoint::Unbounded
[`Ordered`]: crate::Ordered
[`Int`]: crate::Int

*/

#![cfg_attr(not(test), no_std)]
#[cfg(feature = "quickcheck")]
extern crate alloc;

pub mod endpoint;
pub mod interval;
mod ordered;
#[cfg(feature = "chrono")]
mod time;

pub use endpoint::Endpoint;
pub use interval::Interval;
pub use ordered::{Int, Ordered};
#[cfg(feature = "chrono")]
pub use time::Time;

// Doc tests for README.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

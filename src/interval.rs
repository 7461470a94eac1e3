use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use crate::{Endpoint, Ordered};

/// An interval over an ordered domain, given by a lower and an upper
/// [`Endpoint`].
///
/// No relationship between the two endpoints is enforced on construction.
/// An interval whose lower bound lies above its upper bound (or on it,
/// unless both are closed) is simply empty; see [`is_empty`](Interval::is_empty).
///
/// All predicates are pure and total. Predicates relating two intervals
/// are `false` whenever either of them is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    lower: Endpoint<T>,
    upper: Endpoint<T>,
}

impl<T> Interval<T> {
    /// Makes a new interval from its two endpoints.
    pub fn new(lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
        Interval { lower, upper }
    }

    /// Makes the interval covering the whole domain.
    pub fn entire() -> Self {
        Interval::new(Endpoint::Unbounded, Endpoint::Unbounded)
    }

    pub fn lower(&self) -> &Endpoint<T> {
        &self.lower
    }

    pub fn upper(&self) -> &Endpoint<T> {
        &self.upper
    }

    /// Consumes the interval, returning `(lower, upper)`.
    pub fn into_endpoints(self) -> (Endpoint<T>, Endpoint<T>) {
        (self.lower, self.upper)
    }

    /// Returns `true` if both endpoints are unbounded.
    pub fn is_entire(&self) -> bool {
        !self.lower.is_bounded() && !self.upper.is_bounded()
    }

    /// Returns `true` if both endpoints are bounded.
    pub fn is_bounded(&self) -> bool {
        self.lower.is_bounded() && self.upper.is_bounded()
    }
}

impl<T> Interval<T>
where
    T: Ordered,
{
    /// Returns `true` if no point lies in the interval.
    ///
    /// An interval with an unbounded side is never empty. A bounded
    /// interval is empty if its lower value lies above its upper value,
    /// or if the two are equal and at least one of them is open.
    ///
    /// ```
    /// use intervals::{Endpoint, Interval};
    ///
    /// assert!(!Interval::new(Endpoint::closed(1), Endpoint::closed(1)).is_empty());
    /// assert!(Interval::new(Endpoint::closed(1), Endpoint::open(1)).is_empty());
    /// assert!(Interval::new(Endpoint::closed(2), Endpoint::closed(1)).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match (self.lower.value(), self.upper.value()) {
            (Some(lower), Some(upper)) => {
                !lower.less_than(upper) && !self.lower.equal_and_both_closed(&self.upper)
            }
            _ => false,
        }
    }

    /// Returns `true` if `point` lies in the interval.
    ///
    /// An unbounded side never rejects a point.
    #[doc(alias = "contains_point")]
    pub fn contains(&self, point: &T) -> bool {
        if self.is_empty() {
            return false;
        }
        let above_lower = match &self.lower {
            Endpoint::Unbounded => true,
            Endpoint::Open(lower) => !(point.less_than(lower) || point.equal(lower)),
            Endpoint::Closed(lower) => !point.less_than(lower),
        };
        let below_upper = match &self.upper {
            Endpoint::Unbounded => true,
            Endpoint::Open(upper) => !(upper.less_than(point) || point.equal(upper)),
            Endpoint::Closed(upper) => !upper.less_than(point),
        };
        above_lower && below_upper
    }

    /// Returns `true` if this interval ends before `other` starts,
    /// without the two sharing a point.
    ///
    /// ```
    /// use intervals::{Endpoint, Interval};
    ///
    /// // [1, 3] and (3, +inf)
    /// let i = Interval::new(Endpoint::closed(1), Endpoint::closed(3));
    /// let i2 = Interval::new(Endpoint::open(3), Endpoint::unbounded());
    /// assert!(i.before(&i2));
    /// assert!(i2.after(&i));
    /// ```
    pub fn before(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        separated(&self.upper, &other.lower)
    }

    /// Returns `true` if this interval starts after `other` ends,
    /// without the two sharing a point.
    pub fn after(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        separated(&other.upper, &self.lower)
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// For non-empty intervals this is exactly `!self.before(other) &&
    /// !self.after(other)`.
    ///
    /// ```
    /// use intervals::{Endpoint, Interval};
    ///
    /// // (1, 2] and [2, 3) share the point 2.
    /// let i = Interval::new(Endpoint::open(1), Endpoint::closed(2));
    /// let i2 = Interval::new(Endpoint::closed(2), Endpoint::open(3));
    /// assert!(i.overlaps(&i2));
    ///
    /// // (1, 2) and [2, 3) do not.
    /// let i = Interval::new(Endpoint::open(1), Endpoint::open(2));
    /// assert!(!i.overlaps(&i2));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.is_entire() || other.is_entire() {
            return true;
        }

        // Two rays pointing the same way.
        if (!self.lower.is_bounded() && !other.lower.is_bounded())
            || (!self.upper.is_bounded() && !other.upper.is_bounded())
        {
            return true;
        }

        // At most two of the four endpoints are unbounded from here on,
        // and they don't face the same way, so only one pair of
        // endpoints is left to compare.
        if !self.lower.is_bounded() || !other.upper.is_bounded() {
            return meets(&other.lower, &self.upper);
        }
        if !self.upper.is_bounded() || !other.lower.is_bounded() {
            return meets(&self.lower, &other.upper);
        }

        match (
            self.lower.value(),
            self.upper.value(),
            other.lower.value(),
            other.upper.value(),
        ) {
            (Some(lower), Some(upper), Some(other_lower), Some(other_upper)) => {
                if lower.equal(other_upper) {
                    self.lower.equal_and_both_closed(&other.upper)
                } else if upper.equal(other_lower) {
                    self.upper.equal_and_both_closed(&other.lower)
                } else {
                    lower.less_than(other_upper) && other_lower.less_than(upper)
                }
            }
            _ => false,
        }
    }

    /// Returns `true` if this interval starts before `other`.
    ///
    /// An unbounded lower side starts before any bounded one. At the
    /// same value a closed lower side starts before an open one.
    pub fn starts_before(&self, other: &Self) -> bool {
        self.order_lower(other) == Some(Ordering::Less)
    }

    /// Returns `true` if both intervals start at the same boundary,
    /// i.e. the same value with the same closedness, or both unbounded.
    pub fn starts_with(&self, other: &Self) -> bool {
        self.order_lower(other) == Some(Ordering::Equal)
    }

    pub fn starts_after(&self, other: &Self) -> bool {
        self.order_lower(other) == Some(Ordering::Greater)
    }

    /// Returns `true` if this interval ends before `other`.
    ///
    /// Any bounded upper side ends before an unbounded one. At the
    /// same value an open upper side ends before a closed one.
    pub fn ends_before(&self, other: &Self) -> bool {
        self.order_upper(other) == Some(Ordering::Less)
    }

    pub fn ends_with(&self, other: &Self) -> bool {
        self.order_upper(other) == Some(Ordering::Equal)
    }

    pub fn ends_after(&self, other: &Self) -> bool {
        self.order_upper(other) == Some(Ordering::Greater)
    }

    /// Returns `true` if this interval covers all of `other`.
    ///
    /// ```
    /// use intervals::{Endpoint, Interval};
    ///
    /// let outer = Interval::new(Endpoint::closed(1), Endpoint::closed(4));
    /// let inner = Interval::new(Endpoint::closed(2), Endpoint::closed(3));
    /// assert!(outer.includes(&inner));
    /// assert!(outer.includes(&outer));
    /// assert!(!inner.includes(&outer));
    /// ```
    pub fn includes(&self, other: &Self) -> bool {
        (self.starts_before(other) || self.starts_with(other))
            && (self.ends_after(other) || self.ends_with(other))
    }

    fn order_lower(&self, other: &Self) -> Option<Ordering> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        Some(self.lower.order_as_lower(&other.lower))
    }

    fn order_upper(&self, other: &Self) -> Option<Ordering> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        Some(self.upper.order_as_upper(&other.upper))
    }
}

// Does an interval ending at `upper` stop short of one starting at `lower`?
// Touching on a value only counts as contact if both sides are closed.
fn separated<T: Ordered>(upper: &Endpoint<T>, lower: &Endpoint<T>) -> bool {
    match (upper.value(), lower.value()) {
        (Some(u), Some(l)) => {
            u.less_than(l) || (u.equal(l) && !upper.equal_and_both_closed(lower))
        }
        _ => false,
    }
}

// Does an interval starting at `lower` reach one ending at `upper`?
fn meets<T: Ordered>(lower: &Endpoint<T>, upper: &Endpoint<T>) -> bool {
    match (lower.value(), upper.value()) {
        (Some(l), Some(u)) => {
            l.less_than(u)
                || lower.equal_and_both_closed(upper)
                || upper.equal_and_both_closed(lower)
        }
        _ => false,
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.lower.as_bound()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.upper.as_bound()
    }
}

impl<T> From<(Bound<T>, Bound<T>)> for Interval<T> {
    fn from((lower, upper): (Bound<T>, Bound<T>)) -> Self {
        Interval::new(lower.into(), upper.into())
    }
}

impl<T> From<Range<T>> for Interval<T> {
    fn from(range: Range<T>) -> Self {
        Interval::new(Endpoint::Closed(range.start), Endpoint::Open(range.end))
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Interval::new(Endpoint::Closed(start), Endpoint::Closed(end))
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Interval::new(Endpoint::Closed(range.start), Endpoint::Unbounded)
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(range: RangeTo<T>) -> Self {
        Interval::new(Endpoint::Unbounded, Endpoint::Open(range.end))
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Interval::new(Endpoint::Unbounded, Endpoint::Closed(range.end))
    }
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Interval::entire()
    }
}

/// Formats the interval in the usual notation, e.g. `[1, 3)` or `(-inf, 2]`.
impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Endpoint::Unbounded => f.write_str("(-inf")?,
            Endpoint::Open(value) => write!(f, "({}", value)?,
            Endpoint::Closed(value) => write!(f, "[{}", value)?,
        }
        f.write_str(", ")?;
        match &self.upper {
            Endpoint::Unbounded => f.write_str("+inf)"),
            Endpoint::Open(value) => write!(f, "{})", value),
            Endpoint::Closed(value) => write!(f, "{}]", value),
        }
    }
}

#[cfg(feature = "quickcheck")]
impl<T> quickcheck::Arbitrary for Interval<T>
where
    T: quickcheck::Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Interval::new(
            <Endpoint<T> as quickcheck::Arbitrary>::arbitrary(g),
            <Endpoint<T> as quickcheck::Arbitrary>::arbitrary(g),
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let lower = self.lower.clone();
        let upper = self.upper.clone();
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.lower)
                .map(move |l| Interval::new(l, upper.clone()))
                .chain(
                    quickcheck::Arbitrary::shrink(&self.upper)
                        .map(move |u| Interval::new(lower.clone(), u)),
                ),
        )
    }
}

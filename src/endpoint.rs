use core::cmp::Ordering;
use core::ops::Bound;

use crate::Ordered;

/// One side of an [`Interval`](crate::Interval).
///
/// A bounded endpoint carries a value and either excludes it
/// ([`Open`](Endpoint::Open)) or includes it ([`Closed`](Endpoint::Closed)).
/// An [`Unbounded`](Endpoint::Unbounded) endpoint extends to infinity
/// in whichever direction it faces, and has no value to compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint<T> {
    Unbounded,
    Open(T),
    Closed(T),
}

impl<T> Endpoint<T> {
    /// Makes a bounded endpoint that excludes `value`.
    pub fn open(value: T) -> Self {
        Endpoint::Open(value)
    }

    /// Makes a bounded endpoint that includes `value`.
    pub fn closed(value: T) -> Self {
        Endpoint::Closed(value)
    }

    /// Makes an endpoint that extends to infinity.
    pub fn unbounded() -> Self {
        Endpoint::Unbounded
    }

    /// Returns `true` unless the endpoint is unbounded.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Endpoint::Unbounded)
    }

    /// Returns `true` if the endpoint is bounded and includes its value.
    pub fn is_closed(&self) -> bool {
        matches!(self, Endpoint::Closed(_))
    }

    /// Returns `true` if the endpoint is bounded and excludes its value.
    pub fn is_open(&self) -> bool {
        matches!(self, Endpoint::Open(_))
    }

    /// The boundary value, if the endpoint is bounded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Endpoint::Unbounded => None,
            Endpoint::Open(value) | Endpoint::Closed(value) => Some(value),
        }
    }

    /// Borrows the endpoint as a standard library [`Bound`].
    pub fn as_bound(&self) -> Bound<&T> {
        match self {
            Endpoint::Unbounded => Bound::Unbounded,
            Endpoint::Open(value) => Bound::Excluded(value),
            Endpoint::Closed(value) => Bound::Included(value),
        }
    }
}

impl<T> Endpoint<T>
where
    T: Ordered,
{
    /// Do the two endpoints sit on the same value, with both including it?
    ///
    /// Two coincident boundaries only make contact if this holds.
    pub(crate) fn equal_and_both_closed(&self, other: &Self) -> bool {
        match (self, other) {
            (Endpoint::Closed(a), Endpoint::Closed(b)) => a.equal(b),
            _ => false,
        }
    }

    /// Ordering of two endpoints used as lower bounds.
    ///
    /// Unbounded sorts first. At the same value a closed bound
    /// starts earlier than an open one, because it includes the value.
    pub(crate) fn order_as_lower(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Endpoint::Unbounded, Endpoint::Unbounded) => Ordering::Equal,
            (Endpoint::Unbounded, _) => Ordering::Less,
            (_, Endpoint::Unbounded) => Ordering::Greater,
            (a, b) => order_bounded(a, b).then_with(|| match (a, b) {
                (Endpoint::Closed(_), Endpoint::Open(_)) => Ordering::Less,
                (Endpoint::Open(_), Endpoint::Closed(_)) => Ordering::Greater,
                _ => Ordering::Equal,
            }),
        }
    }

    /// Ordering of two endpoints used as upper bounds.
    ///
    /// Unbounded sorts last. At the same value an open bound
    /// ends earlier than a closed one, because it excludes the value.
    pub(crate) fn order_as_upper(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Endpoint::Unbounded, Endpoint::Unbounded) => Ordering::Equal,
            (Endpoint::Unbounded, _) => Ordering::Greater,
            (_, Endpoint::Unbounded) => Ordering::Less,
            (a, b) => order_bounded(a, b).then_with(|| match (a, b) {
                (Endpoint::Open(_), Endpoint::Closed(_)) => Ordering::Less,
                (Endpoint::Closed(_), Endpoint::Open(_)) => Ordering::Greater,
                _ => Ordering::Equal,
            }),
        }
    }
}

// Value ordering of two endpoints; both must be bounded.
fn order_bounded<T: Ordered>(a: &Endpoint<T>, b: &Endpoint<T>) -> Ordering {
    match (a.value(), b.value()) {
        (Some(a), Some(b)) => a.compare(b),
        _ => Ordering::Equal,
    }
}

impl<T> From<Bound<T>> for Endpoint<T> {
    fn from(bound: Bound<T>) -> Self {
        match bound {
            Bound::Unbounded => Endpoint::Unbounded,
            Bound::Excluded(value) => Endpoint::Open(value),
            Bound::Included(value) => Endpoint::Closed(value),
        }
    }
}

impl<T> From<Endpoint<T>> for Bound<T> {
    fn from(endpoint: Endpoint<T>) -> Self {
        match endpoint {
            Endpoint::Unbounded => Bound::Unbounded,
            Endpoint::Open(value) => Bound::Excluded(value),
            Endpoint::Closed(value) => Bound::Included(value),
        }
    }
}

#[cfg(feature = "quickcheck")]
impl<T> quickcheck::Arbitrary for Endpoint<T>
where
    T: quickcheck::Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        match g.choose(&[0u8, 1, 2]).copied() {
            Some(0) => Endpoint::Unbounded,
            Some(1) => Endpoint::Open(T::arbitrary(g)),
            _ => Endpoint::Closed(T::arbitrary(g)),
        }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        match self {
            Endpoint::Unbounded => quickcheck::empty_shrinker(),
            Endpoint::Open(value) => {
                alloc::boxed::Box::new(value.shrink().map(Endpoint::Open))
            }
            Endpoint::Closed(value) => {
                alloc::boxed::Box::new(value.shrink().map(Endpoint::Closed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Int;

    #[test]
    fn constructors() {
        assert_eq!(Endpoint::open(Int(1)), Endpoint::Open(Int(1)));
        assert_eq!(Endpoint::closed(Int(1)), Endpoint::Closed(Int(1)));
        assert_eq!(Endpoint::<Int>::unbounded(), Endpoint::Unbounded);
    }

    #[test]
    fn flags_and_value() {
        let open = Endpoint::open(1);
        let closed = Endpoint::closed(1);
        let unbounded = Endpoint::<i32>::unbounded();

        assert!(open.is_bounded() && open.is_open() && !open.is_closed());
        assert!(closed.is_bounded() && closed.is_closed() && !closed.is_open());
        assert!(!unbounded.is_bounded() && !unbounded.is_open() && !unbounded.is_closed());

        assert_eq!(open.value(), Some(&1));
        assert_eq!(closed.value(), Some(&1));
        assert_eq!(unbounded.value(), None);
    }

    #[test]
    fn equal_and_both_closed() {
        let v1 = Int(1);
        let v2 = Int(2);
        let unbounded = Endpoint::<Int>::unbounded();

        let cases = [
            (unbounded, unbounded, false),
            (unbounded, Endpoint::open(v1), false),
            (unbounded, Endpoint::closed(v1), false),
            (Endpoint::open(v1), unbounded, false),
            (Endpoint::open(v1), Endpoint::open(v1), false),
            (Endpoint::open(v1), Endpoint::closed(v1), false),
            (Endpoint::closed(v1), unbounded, false),
            (Endpoint::closed(v1), Endpoint::open(v1), false),
            (Endpoint::closed(v1), Endpoint::closed(v2), false),
            (Endpoint::closed(v1), Endpoint::closed(v1), true),
        ];
        for (a, b, want) in cases {
            assert_eq!(a.equal_and_both_closed(&b), want, "{:?}, {:?}", a, b);
        }
    }

    #[test]
    fn lower_order() {
        use Ordering::*;
        let u = Endpoint::<i32>::unbounded();
        assert_eq!(u.order_as_lower(&u), Equal);
        assert_eq!(u.order_as_lower(&Endpoint::open(i32::MIN)), Less);
        assert_eq!(Endpoint::closed(0).order_as_lower(&u), Greater);
        assert_eq!(Endpoint::closed(0).order_as_lower(&Endpoint::open(0)), Less);
        assert_eq!(Endpoint::open(0).order_as_lower(&Endpoint::closed(0)), Greater);
        assert_eq!(Endpoint::open(0).order_as_lower(&Endpoint::open(0)), Equal);
        assert_eq!(Endpoint::open(0).order_as_lower(&Endpoint::closed(1)), Less);
    }

    #[test]
    fn upper_order() {
        use Ordering::*;
        let u = Endpoint::<i32>::unbounded();
        assert_eq!(u.order_as_upper(&u), Equal);
        assert_eq!(u.order_as_upper(&Endpoint::closed(i32::MAX)), Greater);
        assert_eq!(Endpoint::closed(0).order_as_upper(&u), Less);
        assert_eq!(Endpoint::open(0).order_as_upper(&Endpoint::closed(0)), Less);
        assert_eq!(Endpoint::closed(0).order_as_upper(&Endpoint::open(0)), Greater);
        assert_eq!(Endpoint::closed(0).order_as_upper(&Endpoint::closed(0)), Equal);
        assert_eq!(Endpoint::closed(1).order_as_upper(&Endpoint::open(0)), Greater);
    }

    #[test]
    fn bound_conversions() {
        assert_eq!(Endpoint::from(Bound::Included(3)), Endpoint::Closed(3));
        assert_eq!(Endpoint::from(Bound::Excluded(3)), Endpoint::Open(3));
        assert_eq!(Endpoint::<i32>::from(Bound::Unbounded), Endpoint::Unbounded);
        assert_eq!(Bound::from(Endpoint::closed(3)), Bound::Included(3));
        assert_eq!(Endpoint::open(3).as_bound(), Bound::Excluded(&3));
        assert_eq!(Endpoint::<i32>::unbounded().as_bound(), Bound::Unbounded);
    }
}

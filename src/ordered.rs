use core::cmp::Ordering;
use core::fmt;

/// Minimal ordering capability required of an interval's value type.
///
/// Implementations must form a strict total order consistent with
/// equality: for any `a` and `b`, exactly one of `a.less_than(&b)`,
/// `b.less_than(&a)` and `a.equal(&b)` holds. This is not checked;
/// a non-conforming implementation makes the predicates on
/// [`Interval`](crate::Interval) return inconsistent answers.
///
/// Unlike [`Ord`], `equal` need not agree with the type's `PartialEq`
/// implementation (two timestamps in different time zones may denote
/// the same instant).
pub trait Ordered {
    fn equal(&self, other: &Self) -> bool;
    fn less_than(&self, other: &Self) -> bool;

    /// Three-way comparison derived from [`less_than`](Ordered::less_than).
    fn compare(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if other.less_than(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

macro_rules! impl_ordered_for_primitive {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                fn equal(&self, other: &Self) -> bool {
                    self == other
                }

                fn less_than(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )*
    };
}

impl_ordered_for_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Integer wrapper implementing [`Ordered`].
///
/// The primitive integer types implement [`Ordered`] directly; this
/// wrapper exists for callers who want a dedicated point type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde1", serde(transparent))]
pub struct Int(pub i64);

impl Ordered for Int {
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Int(value)
    }
}

impl From<Int> for i64 {
    fn from(value: Int) -> Self {
        value.0
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "quickcheck")]
impl quickcheck::Arbitrary for Int {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Int(<i64 as quickcheck::Arbitrary>::arbitrary(g))
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(quickcheck::Arbitrary::shrink(&self.0).map(Int))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_orders_like_i64() {
        assert!(Int(1).less_than(&Int(2)));
        assert!(!Int(2).less_than(&Int(1)));
        assert!(!Int(2).less_than(&Int(2)));
        assert!(Int(-3).equal(&Int(-3)));
        assert!(!Int(-3).equal(&Int(3)));
    }

    #[test]
    fn compare_is_derived_from_less_than() {
        assert_eq!(Int(1).compare(&Int(2)), Ordering::Less);
        assert_eq!(Int(2).compare(&Int(1)), Ordering::Greater);
        assert_eq!(Int(2).compare(&Int(2)), Ordering::Equal);
        assert_eq!(7u8.compare(&7u8), Ordering::Equal);
        assert_eq!((-1i128).compare(&0), Ordering::Less);
    }

    #[test]
    fn int_conversions_and_display() {
        let i: Int = 42.into();
        assert_eq!(i, Int(42));
        assert_eq!(i64::from(i), 42);
        assert_eq!(format!("{}", Int(-5)), "-5");
    }

    // A type with no `Ord` implementation at all.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Version {
        major: u32,
        minor: u32,
    }

    impl Ordered for Version {
        fn equal(&self, other: &Self) -> bool {
            self == other
        }

        fn less_than(&self, other: &Self) -> bool {
            self.major < other.major || (self.major == other.major && self.minor < other.minor)
        }
    }

    #[test]
    fn custom_type_compares() {
        let v1_0 = Version { major: 1, minor: 0 };
        let v1_5 = Version { major: 1, minor: 5 };
        let v2_0 = Version { major: 2, minor: 0 };
        assert_eq!(v1_0.compare(&v1_5), Ordering::Less);
        assert_eq!(v2_0.compare(&v1_5), Ordering::Greater);
        assert_eq!(v2_0.compare(&v2_0), Ordering::Equal);
    }
}

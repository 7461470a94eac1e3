#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use intervals::{Endpoint, Interval};

#[derive(Clone, Debug, Arbitrary)]
enum Ep {
    Unbounded,
    Open(u8),
    Closed(u8),
}

impl From<Ep> for Endpoint<u8> {
    fn from(ep: Ep) -> Self {
        match ep {
            Ep::Unbounded => Endpoint::unbounded(),
            Ep::Open(v) => Endpoint::open(v),
            Ep::Closed(v) => Endpoint::closed(v),
        }
    }
}

fuzz_target!(|eps: (Ep, Ep, Ep, Ep, u8)| {
    let (a, b, c, d, point) = eps;
    let i = Interval::new(a.into(), b.into());
    let i2 = Interval::new(c.into(), d.into());

    if i.is_empty() || i2.is_empty() {
        assert!(!i.overlaps(&i2) && !i.before(&i2) && !i.after(&i2));
        return;
    }

    // Exactly one relation holds between non-empty intervals.
    let holding = [i.before(&i2), i.after(&i2), i.overlaps(&i2)]
        .iter()
        .filter(|b| **b)
        .count();
    assert_eq!(holding, 1);

    assert_eq!(i.overlaps(&i2), i2.overlaps(&i));
    assert_eq!(i.before(&i2), i2.after(&i));

    if i.contains(&point) && i2.contains(&point) {
        assert!(i.overlaps(&i2));
    }
    if i.includes(&i2) && i2.contains(&point) {
        assert!(i.contains(&point));
    }
});

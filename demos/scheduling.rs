use chrono::offset::TimeZone;
use chrono::{Duration, Utc};
use intervals::{Endpoint, Int, Interval, Time};

fn main() {
    // Integers: [1, 3] and (3, +inf) meet at 3, but only one includes it.
    let i = Interval::new(Endpoint::closed(Int(1)), Endpoint::closed(Int(3)));
    let i2 = Interval::new(Endpoint::open(Int(3)), Endpoint::unbounded());
    println!("{} overlaps {}: {}", i, i2, i.overlaps(&i2));
    println!("{} before {}: {}", i, i2, i.before(&i2));

    // Timestamps: a week-long booking, and two shifts inside and across it.
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let booking = Interval::new(
        Endpoint::closed(Time(start)),
        Endpoint::open(Time(start + Duration::weeks(1))),
    );
    let shifts = [
        Interval::new(
            Endpoint::closed(Time(start + Duration::days(1))),
            Endpoint::closed(Time(start + Duration::days(2))),
        ),
        Interval::new(
            Endpoint::closed(Time(start + Duration::weeks(1))),
            Endpoint::open(Time(start + Duration::weeks(2))),
        ),
    ];

    // The second shift starts exactly when the booking ends, but the
    // booking excludes that instant, so they don't clash.
    for shift in &shifts {
        println!(
            "{}: overlaps {}, included {}",
            shift,
            shift.overlaps(&booking),
            booking.includes(shift)
        );
    }
}

//! The built-in zone modules behave like the generic API bound to one zone.

use typezone::{
    jiff::SignedDuration,
    zones::{self, brt, cet, cst, ct, est, hkt, pst, sgt, utc},
    Error, Time, Zone,
};

#[test]
fn facades_interpret_clock_times_in_their_zone() -> anyhow::Result<()> {
    let christmas = [
        ("est", est::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("pst", pst::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("ct", ct::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("cst", cst::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("cet", cet::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("brt", brt::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("hkt", hkt::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("sgt", sgt::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
        ("utc", utc::date(2024, 12, 25, 9, 0, 0, 0)?.to_string()),
    ];
    assert_eq!(
        christmas,
        [
            ("est", String::from("2024-12-25T09:00:00-05:00")),
            ("pst", String::from("2024-12-25T09:00:00-08:00")),
            ("ct", String::from("2024-12-25T09:00:00-06:00")),
            ("cst", String::from("2024-12-25T09:00:00+08:00")),
            ("cet", String::from("2024-12-25T09:00:00+01:00")),
            ("brt", String::from("2024-12-25T09:00:00-03:00")),
            ("hkt", String::from("2024-12-25T09:00:00+08:00")),
            ("sgt", String::from("2024-12-25T09:00:00+08:00")),
            ("utc", String::from("2024-12-25T09:00:00Z")),
        ]
    );
    Ok(())
}

#[test]
fn zone_names_and_abbreviations() -> anyhow::Result<()> {
    let winter = utc::date(2024, 1, 15, 12, 0, 0, 0)?;
    let summer = utc::date(2024, 7, 15, 12, 0, 0, 0)?;

    assert_eq!(est::from_moment(winter).zone().0, "EST");
    assert_eq!(est::from_moment(summer).zone().0, "EDT");
    assert_eq!(pst::from_moment(winter).zone().0, "PST");
    assert_eq!(pst::from_moment(summer).zone().0, "PDT");
    assert_eq!(ct::from_moment(summer).zone().0, "CDT");
    assert_eq!(cst::from_moment(summer).zone().0, "CST");
    assert_eq!(cet::from_moment(winter).zone().0, "CET");
    assert_eq!(cet::from_moment(summer).zone().0, "CEST");
    assert_eq!(hkt::from_moment(winter).zone().0, "HKT");
    assert_eq!(utc::from_moment(summer).zone(), (String::from("UTC"), 0));

    assert!(cet::from_moment(summer).is_dst());
    assert!(!brt::from_moment(summer).is_dst());
    assert!(!sgt::from_moment(summer).is_dst());

    assert_eq!(est::now().zone_name(), zones::Eastern::NAME);
    assert_eq!(sgt::now().zone_name(), "Asia/Singapore");
    Ok(())
}

#[test]
fn facade_epoch_constructors() -> anyhow::Result<()> {
    let seconds = hkt::unix(1_705_320_000, 0)?;
    assert_eq!(hkt::unix_milli(1_705_320_000_000)?, seconds);
    assert_eq!(hkt::unix_micro(1_705_320_000_000_000)?, seconds);
    assert_eq!(seconds.hour(), 20);
    Ok(())
}

#[test]
fn facade_parse_and_conversion() -> anyhow::Result<()> {
    let parsed = est::parse("%Y-%m-%dT%H:%M:%S%:z", "2024-12-25T09:00:00-05:00")?;
    let event = pst::parse("%Y-%m-%d %H:%M", "2024-12-25 06:00")?;
    assert_eq!(parsed, event);

    let in_utc: utc::Time = utc::from_moment(event);
    assert_eq!(in_utc.to_string(), "2024-12-25T14:00:00Z");

    let back: est::Time = Time::from_moment(in_utc);
    assert_eq!(back.format("%-I:%M %p %Z")?, "9:00 AM EST");

    assert!(matches!(
        ct::parse("%Y-%m-%d", "25/12/2024"),
        Err(Error::Parse(_))
    ));
    Ok(())
}

#[test]
fn daylight_saving_boundaries() -> anyhow::Result<()> {
    // Clocks in New York jump from 02:00 to 03:00 on March 10, 2024.
    let before = est::date(2024, 3, 10, 1, 59, 0, 0)?;
    let after = before + SignedDuration::from_mins(1);
    assert_eq!(after.clock(), (3, 0, 0));
    assert!(after.is_dst());
    assert!(!before.is_dst());

    let (start, end) = after.zone_bounds();
    assert_eq!(start, after);
    assert_eq!(end.to_string(), "2024-11-03T01:00:00-05:00");

    // A clock time inside the gap resolves to the later side of it.
    let skipped = est::date(2024, 3, 10, 2, 30, 0, 0)?;
    assert_eq!(skipped.clock(), (3, 30, 0));

    // Singapore has no transitions after 1982.
    let (_, end) = sgt::date(2024, 1, 1, 0, 0, 0, 0)?.zone_bounds();
    assert!(end.is_zero());
    Ok(())
}

#[test]
fn verify_all_preloads_the_table() -> anyhow::Result<()> {
    zones::verify_all()?;
    for name in zones::all() {
        assert!(typezone::registry::is_cached(name));
    }
    Ok(())
}

use typezone::{
    jiff::SignedDuration,
    zones::{est, pst, utc},
};

fn print_utc(label: &str, time: utc::Time) -> anyhow::Result<()> {
    println!("   {label}: {}", time.format("%Y-%m-%d %H:%M:%S %Z")?);
    Ok(())
}

fn print_eastern(label: &str, time: est::Time) -> anyhow::Result<()> {
    println!("   {label}: {}", time.format("%Y-%m-%d %H:%M:%S %Z")?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    println!("1. Current time:");
    println!("   UTC: {}", utc::now());
    println!("   EST: {}", est::now());
    println!("   PST: {}", pst::now());

    println!("2. A specific date:");
    let meeting = est::date(2024, 12, 25, 10, 30, 0, 0)?;
    println!("   Meeting: {}", meeting.format("%A, %B %-d, %Y at %-I:%M %p %Z")?);

    println!("3. Formats:");
    let t = utc::date(2024, 6, 15, 14, 30, 45, 0)?;
    println!("   RFC 3339: {t}");
    println!("   Kitchen:  {}", t.format("%-I:%M%p")?);
    println!("   Custom:   {}", t.format("%Y-%m-%d %H:%M:%S")?);

    println!("4. Typed signatures:");
    print_utc("UTC", utc::now())?;
    print_eastern("EST", est::now())?;
    // print_utc("UTC", est::now()) does not compile.

    println!("5. Converting between zones:");
    println!("   Meeting EST: {}", meeting.format("%-I:%M%p")?);
    println!("   Meeting UTC: {}", utc::from_moment(meeting).format("%-I:%M%p")?);
    println!("   Meeting PST: {}", pst::from_moment(meeting).format("%-I:%M%p")?);

    println!("6. Arithmetic:");
    let follow_up = meeting + SignedDuration::from_hours(2);
    println!("   Follow-up: {follow_up}");
    println!("   Next year: {}", meeting.add_date(1, 0, 0));
    println!("   Gap:       {:?}", follow_up - meeting);

    Ok(())
}

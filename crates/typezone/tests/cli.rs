use clap::Parser;
use typezone::cli::Args;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let args = Args::try_parse_from(std::iter::once("typezone").chain(args.iter().copied()))?;
    let mut output = Vec::new();
    args.execute(&mut output)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn convert_clock_time_between_facade_zones() -> anyhow::Result<()> {
    let output = run(&[
        "convert",
        "--from",
        "est",
        "--to",
        "pst",
        "--pattern",
        "%Y-%m-%d %H:%M %Z",
        "2024-12-25 09:00:00",
    ])?;
    assert_eq!(output, "2024-12-25 06:00 PST\n");
    Ok(())
}

#[test]
fn convert_rfc3339_ignores_the_source_zone() -> anyhow::Result<()> {
    let output = run(&[
        "--pattern",
        "%H:%M %Z",
        "convert",
        "--from",
        "sgt",
        "--to",
        "Asia/Tokyo",
        "2024-01-15T12:00:00Z",
    ])?;
    assert_eq!(output, "21:00 JST\n");
    Ok(())
}

#[test]
fn convert_with_custom_input_pattern() -> anyhow::Result<()> {
    let output = run(&[
        "convert",
        "--from",
        "cet",
        "--to",
        "utc",
        "--input-pattern",
        "%d/%m/%Y %H:%M",
        "--pattern",
        "%Y-%m-%dT%H:%M:%S%:z",
        "14/07/2024 20:00",
    ])?;
    assert_eq!(output, "2024-07-14T18:00:00+00:00\n");
    Ok(())
}

#[test]
fn now_prints_requested_zones() -> anyhow::Result<()> {
    let output = run(&["now", "hkt", "America/Denver", "--pattern", "%Z"])?;
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("hkt"));
    assert!(lines[0].ends_with("HKT"));
    assert!(lines[1].starts_with("America/Denver"));
    Ok(())
}

#[test]
fn now_defaults_to_every_builtin_zone() -> anyhow::Result<()> {
    let output = run(&["now"])?;
    assert_eq!(output.lines().count(), typezone::zones::TABLE.len());
    assert!(output.starts_with("UTC"));
    Ok(())
}

#[test]
fn zones_lists_the_table() -> anyhow::Result<()> {
    let output = run(&["zones"])?;
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().all(|line| line.ends_with(" ok")));
    assert!(lines[1].starts_with("est  America/New_York"));
    Ok(())
}

#[test]
fn unknown_zones_are_errors() {
    let err = run(&["now", "Mars/Olympus_Mons"]).unwrap_err();
    assert!(err.to_string().contains("Mars/Olympus_Mons"));
}

#[test]
fn malformed_text_is_an_error() {
    assert!(run(&["convert", "--from", "utc", "--to", "est", "invalid-time-string"]).is_err());
}

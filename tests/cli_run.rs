use clap::Parser;
use fitness_tracker::cli::Cli;
use fitness_tracker::report::run;
use std::io::Write;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("fitness-tracker").chain(args.iter().copied())).unwrap()
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn no_packages_reports_the_samples() {
    let mut out = Vec::new();
    let reported = run(&cli(&[]), &mut out).unwrap();

    assert_eq!(reported, 3);
    let lines = lines(&out);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Workout type: Swimming;"));
    assert!(lines[1].starts_with("Workout type: Running;"));
    assert!(lines[2].starts_with("Workout type: SportsWalking;"));
}

#[test]
fn input_file_and_package_flags_are_combined() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"[{{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}}]"#).unwrap();
    let path = f.path().to_str().unwrap();

    let mut out = Vec::new();
    let reported = run(&cli(&["-i", path, "-p", "WLK:9000,1,75,180"]), &mut out).unwrap();

    assert_eq!(reported, 2);
    let lines = lines(&out);
    assert!(lines[0].starts_with("Workout type: Swimming;"));
    assert!(lines[1].starts_with("Workout type: SportsWalking;"));
}

#[test]
fn json_prints_one_object_per_line() {
    let mut out = Vec::new();
    run(
        &cli(&["--json", "-p", "RUN:1500,1,75", "-p", "SWM:720,1,80,25,40"]),
        &mut out,
    )
    .unwrap();

    let objects: Vec<serde_json::Value> = lines(&out)
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["training_type"], "Running");
    assert_eq!(objects[1]["training_type"], "Swimming");
    assert_eq!(objects[1]["speed"], 1.0);
}

#[test]
fn keep_going_skips_bad_packages_and_still_fails() {
    let mut out = Vec::new();
    let err = run(
        &cli(&[
            "--keep-going",
            "-p",
            "RUN:1,2",
            "-p",
            "XYZ:1,2,3",
            "-p",
            "RUN:1500,1,75",
        ]),
        &mut out,
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "2 of 3 packages could not be read");
    let lines = lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Workout type: Running;"));
}

#[test]
fn first_bad_package_stops_the_run() {
    let mut out = Vec::new();
    let err = run(&cli(&["-p", "RUN:1500,0,75", "-p", "RUN:1500,1,75"]), &mut out).unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("package #1"), "{msg}");
    assert!(msg.contains("must be greater than zero"), "{msg}");
    assert!(out.is_empty());
}

#[test]
fn missing_input_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("packages.json");

    let mut out = Vec::new();
    let err = run(&cli(&["-i", missing.to_str().unwrap()]), &mut out).unwrap_err();

    assert!(format!("{err:#}").contains("reading packages"));
    assert!(out.is_empty());
}

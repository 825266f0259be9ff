use crate::cli::Cli;
use crate::dlog;
use crate::input::{self, Package};
use anyhow::{Context, Result, bail};
use std::io::Write;

/// Packages named by the command line: the `--input` file first, then each
/// `--package`. Falls back to the built-in samples when there are none.
pub fn collect_packages(cli: &Cli) -> Result<Vec<Package>> {
    let mut packages: Vec<Package> = Vec::new();
    if let Some(path) = &cli.input {
        packages.extend(input::load_packages(path)?);
    }
    packages.extend(cli.packages.iter().cloned());
    if packages.is_empty() {
        dlog!("no packages given, using built-in samples");
        packages = input::sample_packages();
    }
    Ok(packages)
}

/// Write one report line per package to `out` and return how many were reported.
///
/// Without `--keep-going` the first bad package stops the run. With it, bad
/// packages are logged and skipped, and the run still fails at the end.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<usize> {
    let packages = collect_packages(cli)?;
    let total = packages.len();
    let mut failed = 0usize;

    for (i, package) in packages.iter().enumerate() {
        let training = match package.read() {
            Ok(t) => t,
            Err(e) if cli.keep_going => {
                tracing::warn!(
                    index = i,
                    workout_type = %package.workout_type,
                    err = %e,
                    "skipping package"
                );
                failed += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "package #{} ({} {:?})",
                        i + 1,
                        package.workout_type,
                        package.data
                    )
                });
            }
        };

        let info = training.show_training_info();
        if cli.json {
            serde_json::to_writer(&mut *out, &info).context("writing JSON report")?;
            writeln!(out).context("writing JSON report")?;
        } else {
            writeln!(out, "{}", info.get_message()).context("writing report")?;
        }
    }

    let reported = total - failed;
    tracing::info!(total, reported, failed, "done");

    if failed > 0 {
        bail!("{failed} of {total} packages could not be read");
    }
    Ok(reported)
}

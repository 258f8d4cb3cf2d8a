//! Free-disk-space check for a single mountpoint.
//!
//! Reports the available megabytes on the filesystem holding `--path`
//! and validates them against the usual warning/critical thresholds:
//!
//! ```text
//! check_disk --path / --warn 2048: --crit 512:
//! OK: Mountpoint / has 31337MB free.
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

use std::process::{self, Command};

use anyhow::{Context, bail};
use vigil::{ArgSpec, Bindings, Plugin};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let plugin = Plugin::builder("check_disk_free")
        .template("${STATE}: Mountpoint ${path} has ${result}MB free.")
        .args(vec![
            ArgSpec::new("path", 'p', "--path STRING", "Disk path you want to check"),
            ArgSpec::new(
                "warn",
                'w',
                "--warn THRESHOLD",
                "Minimum disk free in MB before warning",
            ),
            ArgSpec::new(
                "crit",
                'c',
                "--crit THRESHOLD",
                "Minimum disk free in MB before critical",
            ),
        ])
        .measure(free_megabytes)
        .build();

    println!("{plugin}");
    process::exit(plugin.code());
}

/// Available megabytes on the filesystem holding the bound path, read
/// from POSIX `df -P -k` output.
fn free_megabytes(bindings: &Bindings) -> anyhow::Result<String> {
    let path = bindings
        .text("path")
        .context("you must specify a -p/--path to check")?;

    let output = Command::new("df")
        .args(["-P", "-k", path])
        .output()
        .context("failed to run df")?;
    if !output.status.success() {
        bail!(
            "df {path} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let available_kb: u64 = stdout
        .lines()
        .last()
        .and_then(|line| line.split_whitespace().nth(3))
        .context("df output had no available column")?
        .parse()
        .context("df available column was not a number")?;

    Ok((available_kb / 1024).to_string())
}

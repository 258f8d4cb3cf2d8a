//! Kernel release check against an expected pattern.
//!
//! Measures `uname -r` and goes critical unless the release matches the
//! `--expect` pattern (case-insensitively):
//!
//! ```text
//! check_kernel_version --expect '^6\.'
//! OK: check_kernel_version 6.8.0-45-generic
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
use vigil::{ArgSpec, Plugin, validator};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let plugin = Plugin::builder("check_kernel_version")
        .args(vec![ArgSpec::new(
            "expect",
            'e',
            "--expect STRING",
            "Return critical unless the kernel release matches STRING",
        )])
        .measure(|_| kernel_release())
        .validate(|value, bindings| {
            validator::string_match(value, bindings.expect().unwrap_or(""))
        })
        .build();

    println!("{plugin}");
    process::exit(plugin.code());
}

/// The running kernel's release string, from `uname -r`.
fn kernel_release() -> anyhow::Result<String> {
    let output = Command::new("uname")
        .arg("-r")
        .output()
        .context("failed to run uname")?;
    if !output.status.success() {
        bail!("uname -r exited with {}", output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

//! Build script for PCC
//!
//! Increments the build number on each recompilation and embeds build
//! metadata into the binary environment.

use std::fs;
use std::path::Path;

fn main() {
    // Only rerun when src/ files change (not on every cargo build)
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new("build_number.txt");
    let build_number = next_build_number(counter_path);
    fs::write(counter_path, build_number.to_string()).expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=PCC_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=PCC_BUILD_TIMESTAMP={}", timestamp);

    // Also output for build log visibility
    println!("cargo:warning=PCC Build #{} at {}", build_number, timestamp);
}

/// Read the previous build number and advance it; a missing or unreadable
/// counter file restarts the count.
fn next_build_number(path: &Path) -> u64 {
    let previous: u64 = fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    previous + 1
}

use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year; server and client must render the same value
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}

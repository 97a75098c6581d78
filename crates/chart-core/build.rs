// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry access used by the Skia font manager (RegOpenKeyExW and friends)
        println!("cargo:rustc-link-lib=advapi32");
    }
}

// File: crates/mekko-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc. (DirectWrite font lookup)
        println!("cargo:rustc-link-lib=advapi32");
    }
}

//! Build script for the vix-vm crate.
//!
//! When the `vmware-sdk` feature is enabled, locates the VMware VIX SDK and
//! emits the link directives for libvixAllProducts. Without the feature the
//! crate has no native link dependency.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=VIX_SDK_DIR");

    // Only the real backend links against the vendor library.
    if env::var_os("CARGO_FEATURE_VMWARE_SDK").is_none() {
        return;
    }

    match find_sdk_lib_dir() {
        Some(dir) => {
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        None => {
            println!(
                "cargo:warning=VIX SDK not found; set VIX_SDK_DIR to the \
                 directory containing libvixAllProducts"
            );
        }
    }

    println!("cargo:rustc-link-lib=dylib=vixAllProducts");

    // The VIX client library pulls in these on each platform.
    #[cfg(target_os = "linux")]
    {
        println!("cargo:rustc-link-lib=pthread");
        println!("cargo:rustc-link-lib=dl");
    }

    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=ws2_32");
        println!("cargo:rustc-link-lib=advapi32");
    }
}

/// Locate the directory containing the VIX client library.
///
/// `VIX_SDK_DIR` takes priority; otherwise the standard install locations of
/// VMware Workstation / Player and the standalone VIX SDK are probed.
fn find_sdk_lib_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("VIX_SDK_DIR") {
        let dir = PathBuf::from(dir);
        if dir.exists() {
            return Some(dir);
        }
    }

    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &[
            r"C:\Program Files (x86)\VMware\VMware VIX",
            r"C:\Program Files\VMware\VMware VIX",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/Applications/VMware Fusion.app/Contents/Public",
            "/usr/local/lib/vmware-vix",
        ]
    } else {
        &["/usr/lib/vmware-vix", "/usr/lib64/vmware-vix", "/usr/lib"]
    };

    candidates.iter().map(PathBuf::from).find(|p| p.exists())
}

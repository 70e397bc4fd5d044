//! Rust bindings for the VMware VIX virtualization API.
//!
//! This crate wraps the VIX client library (libvixAllProducts) with safe
//! RAII types: connect to a VMware product, open virtual machines, drive
//! their power lifecycle, interact with the guest OS (programs, files,
//! variables, shared folders), and manage snapshot trees.
//!
//! Every asynchronous VIX operation is surfaced as a synchronous call: the
//! wrapper starts the native job, blocks until it completes, decodes the
//! typed result properties, and releases the job handle on every path.
//! Failures carry the library's error text and numeric code and can be
//! matched against the re-exported [`consts`] surface.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "vmware-sdk")]
//! # fn demo() -> vix::Result<()> {
//! use vix::{Host, ServiceProvider};
//! use vix::types::{power, snapshot};
//!
//! let host = Host::connect(ServiceProvider::Workstation, None)?;
//! let vm = host.open_vm("/vms/dev/dev.vmx")?;
//!
//! vm.power_on(power::NORMAL)?;
//! vm.wait_for_tools(300)?;
//! vm.login("user", "password", 0)?;
//!
//! let run = vm.run_program("/usr/bin/make", "-C /src check", 0)?;
//! println!("pid {} exited with {}", run.pid, run.exit_code);
//!
//! let snap = vm.create_snapshot("after-check", "", snapshot::INCLUDE_MEMORY)?;
//! println!("snapshot: {}", snap.display_name()?);
//! # Ok(())
//! # }
//! # fn main() {}
//! ```
//!
//! # Linking
//!
//! Driving real VMware products needs the `vmware-sdk` cargo feature and an
//! installed VIX SDK (point `VIX_SDK_DIR` at the directory containing
//! libvixAllProducts). Without the feature the crate still compiles and its
//! mock-backed test suite runs, which is what docs builds and CI use.
//!
//! # Threading
//!
//! [`Host`], [`Vm`] and [`Snapshot`] are `Send + Sync`; the library owns all
//! cross-thread safety for handle state. Blocking calls hold no crate-level
//! locks, so long-running operations (tool waits, guest programs, clones)
//! do not stall unrelated work on other threads.

pub mod consts;
pub mod error;
pub mod host;
pub mod props;
pub mod snapshot;
pub mod types;
pub mod vm;

mod ffi;
mod job;
#[cfg(test)]
mod mock;

pub use error::{Error, Result};
pub use host::Host;
pub use props::PropertyValue;
pub use snapshot::Snapshot;
pub use types::{
    CloneType, ConnectOptions, GuestFileInfo, GuestProcess, ProgramResult, ServiceProvider,
    SharedFolder, VariableScope,
};
pub use vm::Vm;

/// Look up the library's error text for a numeric error code.
///
/// Returns `None` when the library has no text for the code.
#[cfg(feature = "vmware-sdk")]
pub fn error_text(code: u64) -> Option<String> {
    use crate::ffi::VixApi;
    crate::ffi::sdk::SdkApi.error_text(code)
}

//! The boundary between the safe wrappers and the VIX client library.
//!
//! [`VixApi`] is the backend seam: one method per native entry point the
//! crate consumes, at `vix.h` granularity. The real implementation
//! ([`sdk::SdkApi`], behind the `vmware-sdk` feature) forwards to
//! libvixAllProducts; the test implementation (`crate::mock::MockApi`)
//! simulates the library in-process so the marshal/wait/release/translate
//! convention can be exercised without VMware installed.

pub(crate) mod error;
pub(crate) mod raw;
#[cfg(feature = "vmware-sdk")]
pub(crate) mod sdk;

use std::os::raw::c_void;

pub(crate) use error::check;
pub(crate) use raw::{VixError, VixEventProc};

use crate::consts::VIX_OK;

/// Opaque handle to library-owned state.
///
/// All VIX resources (hosts, VMs, snapshots, jobs, property lists) share one
/// integer handle space; zero is the invalid handle.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VixHandle(pub i32);

impl VixHandle {
    /// The invalid (null) handle.
    #[inline]
    pub const fn invalid() -> Self {
        Self(0)
    }

    /// Check if this handle is valid (non-zero).
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl Default for VixHandle {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Extract the numeric error category from a raw 64-bit error value.
#[inline]
pub(crate) fn error_code(err: VixError) -> u64 {
    err & 0xFFFF
}

/// A typed request for one result property, filled in by
/// [`VixApi::job_wait`], [`VixApi::job_get_nth_properties`] or
/// [`VixApi::get_properties`]. Each variant carries the property id and the
/// destination. String and blob results are copied into Rust-owned memory by
/// the backend; the native buffer never escapes the seam.
pub(crate) enum PropRequest<'a> {
    Int(i32, &'a mut i32),
    Str(i32, &'a mut String),
    Bool(i32, &'a mut bool),
    Int64(i32, &'a mut i64),
    Uint64(i32, &'a mut u64),
    Blob(i32, &'a mut Vec<u8>),
    Handle(i32, &'a mut VixHandle),
}

impl PropRequest<'_> {
    /// The property id this request targets.
    pub fn property(&self) -> i32 {
        match self {
            PropRequest::Int(id, _)
            | PropRequest::Str(id, _)
            | PropRequest::Bool(id, _)
            | PropRequest::Int64(id, _)
            | PropRequest::Uint64(id, _)
            | PropRequest::Blob(id, _)
            | PropRequest::Handle(id, _) => *id,
        }
    }
}

/// The native call surface.
///
/// Asynchronous entry points return the raw job handle issued by the
/// library; the caller owns it and must wait on and release it (the safe
/// layer does both through [`crate::job::Job`]). Synchronous entry points
/// return the raw error value directly.
pub(crate) trait VixApi: Send + Sync {
    // Handle and property introspection
    fn release(&self, handle: VixHandle);
    fn add_ref(&self, handle: VixHandle);
    fn handle_type(&self, handle: VixHandle) -> i32;
    fn get_property_type(&self, handle: VixHandle, property: i32, out: &mut i32) -> VixError;
    fn get_properties(&self, handle: VixHandle, request: &mut PropRequest<'_>) -> VixError;
    fn error_text(&self, code: u64) -> Option<String>;

    // Jobs
    fn job_wait(&self, job: VixHandle, results: &mut [PropRequest<'_>]) -> VixError;
    fn job_get_num_properties(&self, job: VixHandle, property: i32) -> i32;
    fn job_get_nth_properties(
        &self,
        job: VixHandle,
        index: i32,
        results: &mut [PropRequest<'_>],
    ) -> VixError;

    // Host
    #[allow(clippy::too_many_arguments)]
    fn host_connect(
        &self,
        api_version: i32,
        host_type: i32,
        host_name: Option<&std::ffi::CStr>,
        host_port: i32,
        user_name: Option<&std::ffi::CStr>,
        password: Option<&std::ffi::CStr>,
        options: i32,
    ) -> VixHandle;
    fn host_disconnect(&self, host: VixHandle);
    fn host_register_vm(&self, host: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn host_unregister_vm(&self, host: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    /// Start a find-items enumeration. The callback is invoked once per
    /// found item (and once for completion) before the returned job
    /// completes.
    ///
    /// # Safety
    ///
    /// `client_data` must stay valid for the duration of the call and match
    /// what `callback` expects.
    unsafe fn host_find_items(
        &self,
        host: VixHandle,
        search_type: i32,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixHandle;
    fn host_open_vm(&self, host: VixHandle, path: &std::ffi::CStr) -> VixHandle;

    // VM power lifecycle
    fn vm_power_on(&self, vm: VixHandle, options: i32) -> VixHandle;
    fn vm_power_off(&self, vm: VixHandle, options: i32) -> VixHandle;
    fn vm_reset(&self, vm: VixHandle, options: i32) -> VixHandle;
    fn vm_suspend(&self, vm: VixHandle) -> VixHandle;
    fn vm_pause(&self, vm: VixHandle) -> VixHandle;
    fn vm_unpause(&self, vm: VixHandle) -> VixHandle;
    fn vm_delete(&self, vm: VixHandle, options: i32) -> VixHandle;

    // Guest tools and login
    fn vm_wait_for_tools(&self, vm: VixHandle, timeout_seconds: i32) -> VixHandle;
    fn vm_login(
        &self,
        vm: VixHandle,
        user: &std::ffi::CStr,
        password: &std::ffi::CStr,
        options: i32,
    ) -> VixHandle;
    fn vm_logout(&self, vm: VixHandle) -> VixHandle;

    // Guest processes
    fn vm_run_program(
        &self,
        vm: VixHandle,
        program: &std::ffi::CStr,
        command_line: &std::ffi::CStr,
        options: i32,
    ) -> VixHandle;
    fn vm_run_script(
        &self,
        vm: VixHandle,
        interpreter: &std::ffi::CStr,
        script_text: &std::ffi::CStr,
        options: i32,
    ) -> VixHandle;
    fn vm_list_processes(&self, vm: VixHandle) -> VixHandle;
    fn vm_kill_process(&self, vm: VixHandle, pid: u64) -> VixHandle;

    // Guest files and directories
    fn vm_copy_file_to_guest(
        &self,
        vm: VixHandle,
        host_path: &std::ffi::CStr,
        guest_path: &std::ffi::CStr,
    ) -> VixHandle;
    fn vm_copy_file_from_guest(
        &self,
        vm: VixHandle,
        guest_path: &std::ffi::CStr,
        host_path: &std::ffi::CStr,
    ) -> VixHandle;
    fn vm_delete_file(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn vm_file_exists(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn vm_rename_file(
        &self,
        vm: VixHandle,
        old_name: &std::ffi::CStr,
        new_name: &std::ffi::CStr,
    ) -> VixHandle;
    fn vm_create_temp_file(&self, vm: VixHandle) -> VixHandle;
    fn vm_get_file_info(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn vm_list_directory(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn vm_create_directory(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn vm_delete_directory(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;
    fn vm_directory_exists(&self, vm: VixHandle, path: &std::ffi::CStr) -> VixHandle;

    // Variables
    fn vm_read_variable(&self, vm: VixHandle, scope: i32, name: &std::ffi::CStr) -> VixHandle;
    fn vm_write_variable(
        &self,
        vm: VixHandle,
        scope: i32,
        name: &std::ffi::CStr,
        value: &std::ffi::CStr,
    ) -> VixHandle;

    // Shared folders
    fn vm_enable_shared_folders(&self, vm: VixHandle, enabled: bool) -> VixHandle;
    fn vm_get_num_shared_folders(&self, vm: VixHandle) -> VixHandle;
    fn vm_get_shared_folder_state(&self, vm: VixHandle, index: i32) -> VixHandle;
    fn vm_set_shared_folder_state(
        &self,
        vm: VixHandle,
        name: &std::ffi::CStr,
        host_path: &std::ffi::CStr,
        flags: i32,
    ) -> VixHandle;
    fn vm_add_shared_folder(
        &self,
        vm: VixHandle,
        name: &std::ffi::CStr,
        host_path: &std::ffi::CStr,
        flags: i32,
    ) -> VixHandle;
    fn vm_remove_shared_folder(&self, vm: VixHandle, name: &std::ffi::CStr) -> VixHandle;

    // Snapshots (the Get* entry points are synchronous)
    fn vm_get_num_root_snapshots(&self, vm: VixHandle, out: &mut i32) -> VixError;
    fn vm_get_root_snapshot(&self, vm: VixHandle, index: i32, out: &mut VixHandle) -> VixError;
    fn vm_get_current_snapshot(&self, vm: VixHandle, out: &mut VixHandle) -> VixError;
    fn vm_get_named_snapshot(
        &self,
        vm: VixHandle,
        name: &std::ffi::CStr,
        out: &mut VixHandle,
    ) -> VixError;
    fn vm_remove_snapshot(&self, vm: VixHandle, snapshot: VixHandle, options: i32) -> VixHandle;
    fn vm_revert_to_snapshot(&self, vm: VixHandle, snapshot: VixHandle, options: i32)
        -> VixHandle;
    fn vm_create_snapshot(
        &self,
        vm: VixHandle,
        name: &std::ffi::CStr,
        description: &std::ffi::CStr,
        options: i32,
    ) -> VixHandle;
    fn snapshot_get_num_children(&self, snapshot: VixHandle, out: &mut i32) -> VixError;
    fn snapshot_get_child(
        &self,
        snapshot: VixHandle,
        index: i32,
        out: &mut VixHandle,
    ) -> VixError;
    fn snapshot_get_parent(&self, snapshot: VixHandle, out: &mut VixHandle) -> VixError;

    // Miscellaneous
    fn vm_capture_screen_image(&self, vm: VixHandle, format: i32) -> VixHandle;
    fn vm_upgrade_virtual_hardware(&self, vm: VixHandle) -> VixHandle;
    fn vm_install_tools(&self, vm: VixHandle, options: i32) -> VixHandle;
    fn vm_clone(
        &self,
        vm: VixHandle,
        snapshot: VixHandle,
        clone_type: i32,
        dest_config_path: &std::ffi::CStr,
    ) -> VixHandle;
}

/// Whether a raw error value means success.
#[inline]
pub(crate) fn succeeded(err: VixError) -> bool {
    error_code(err) == VIX_OK
}

/// Convert an argument string bound for the native layer, rejecting interior
/// NUL bytes before any native call is made or handle allocated.
pub(crate) fn cstr(field: &str, value: &str) -> crate::Result<std::ffi::CString> {
    std::ffi::CString::new(value).map_err(|_| {
        crate::Error::InvalidArgument(format!("{field} contains an interior NUL byte"))
    })
}

//! Virtual machine operations.

use std::sync::Arc;

use tracing::debug;

use crate::consts::{
    VIX_CAPTURESCREENFORMAT_PNG, VIX_PROPERTY_GUEST_SHAREDFOLDERS_SHARES_PATH,
    VIX_PROPERTY_JOB_RESULT_FILE_FLAGS, VIX_PROPERTY_JOB_RESULT_FILE_SIZE,
    VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS,
    VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE, VIX_PROPERTY_JOB_RESULT_HANDLE,
    VIX_PROPERTY_JOB_RESULT_ITEM_NAME, VIX_PROPERTY_JOB_RESULT_PROCESS_COMMAND,
    VIX_PROPERTY_JOB_RESULT_PROCESS_ID, VIX_PROPERTY_JOB_RESULT_PROCESS_OWNER,
    VIX_PROPERTY_JOB_RESULT_SCREEN_IMAGE_DATA, VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_COUNT,
    VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_FLAGS, VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_HOST,
    VIX_PROPERTY_JOB_RESULT_VM_VARIABLE_STRING, VIX_PROPERTY_VM_IS_RUNNING,
    VIX_PROPERTY_VM_MEMORY_SIZE, VIX_PROPERTY_VM_NUM_VCPUS, VIX_PROPERTY_VM_POWER_STATE,
    VIX_PROPERTY_VM_READ_ONLY, VIX_PROPERTY_VM_TOOLS_STATE, VIX_PROPERTY_VM_VMX_PATHNAME,
};
use crate::error::{Error, Result};
use crate::ffi::{cstr, PropRequest, VixApi, VixHandle};
use crate::job::Job;
use crate::props::{self, PropertyValue};
use crate::snapshot::Snapshot;
use crate::types::{
    CloneType, GuestFileInfo, GuestProcess, ProgramResult, SharedFolder, VariableScope,
};

/// An opened virtual machine.
///
/// Obtained from [`Host::open_vm`](crate::Host::open_vm). Owns its handle
/// and releases it on drop; `clone()` takes an additional reference on the
/// same underlying handle.
///
/// Guest operations (login, programs, files, variables) require the VM to be
/// powered on with VMware Tools running; see
/// [`wait_for_tools`](Self::wait_for_tools).
pub struct Vm {
    api: Arc<dyn VixApi>,
    handle: VixHandle,
}

impl std::fmt::Debug for Vm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vm").field("handle", &self.handle).finish()
    }
}

impl Vm {
    pub(crate) fn new(api: Arc<dyn VixApi>, handle: VixHandle) -> Self {
        Self { api, handle }
    }

    /// Raw handle value, for use with the generic introspection calls.
    pub fn handle(&self) -> i32 {
        self.handle.0
    }

    /// Handle type as reported by the library (`VIX_HANDLETYPE_*`).
    pub fn handle_type(&self) -> i32 {
        self.api.handle_type(self.handle)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.handle.is_valid() {
            Ok(())
        } else {
            Err(Error::AlreadyClosed)
        }
    }

    /// Run a job with no result properties.
    fn run_job(&self, job_handle: VixHandle) -> Result<()> {
        Job::new(self.api.clone(), job_handle).wait(&mut [])
    }

    // ========== Power lifecycle ==========

    /// Power the VM on. `options` takes [`power`](crate::types::power) bits.
    pub fn power_on(&self, options: i32) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, options, "power on");
        self.run_job(self.api.vm_power_on(self.handle, options))
    }

    /// Power the VM off. `options` takes [`power`](crate::types::power) bits.
    pub fn power_off(&self, options: i32) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, options, "power off");
        self.run_job(self.api.vm_power_off(self.handle, options))
    }

    /// Reset the VM.
    pub fn reset(&self, options: i32) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, options, "reset");
        self.run_job(self.api.vm_reset(self.handle, options))
    }

    /// Suspend the VM to disk.
    pub fn suspend(&self) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, "suspend");
        self.run_job(self.api.vm_suspend(self.handle))
    }

    /// Pause VM execution.
    pub fn pause(&self) -> Result<()> {
        self.ensure_open()?;
        self.run_job(self.api.vm_pause(self.handle))
    }

    /// Resume a paused VM.
    pub fn unpause(&self) -> Result<()> {
        self.ensure_open()?;
        self.run_job(self.api.vm_unpause(self.handle))
    }

    /// Delete the VM. `options` takes [`delete`](crate::types::delete) bits;
    /// the VM handle itself stays valid until dropped.
    pub fn delete(&self, options: i32) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, options, "delete");
        self.run_job(self.api.vm_delete(self.handle, options))
    }

    // ========== Recording and replay ==========
    //
    // The vendor removed record/replay from the supported products. These
    // always fail with the fixed unsupported error and never reach the
    // native library.

    /// Begin recording VM execution. Always fails with
    /// [`Error::Unsupported`].
    pub fn begin_recording(&self, _name: &str, _description: &str) -> Result<()> {
        Err(Error::Unsupported)
    }

    /// Stop recording. Always fails with [`Error::Unsupported`].
    pub fn end_recording(&self) -> Result<()> {
        Err(Error::Unsupported)
    }

    /// Begin replaying a recording. Always fails with
    /// [`Error::Unsupported`].
    pub fn begin_replay(&self, _snapshot: &Snapshot, _options: i32) -> Result<()> {
        Err(Error::Unsupported)
    }

    /// Stop replaying. Always fails with [`Error::Unsupported`].
    pub fn end_replay(&self) -> Result<()> {
        Err(Error::Unsupported)
    }

    // ========== Guest login and tools ==========

    /// Wait until VMware Tools is running in the guest.
    ///
    /// `timeout_seconds` of zero waits forever. A timeout surfaces through
    /// the same error path as any other failure; use
    /// [`Error::is_timeout`] to branch on the reported category.
    pub fn wait_for_tools(&self, timeout_seconds: i32) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, timeout_seconds, "waiting for tools");
        self.run_job(self.api.vm_wait_for_tools(self.handle, timeout_seconds))
    }

    /// Authenticate against the guest OS. `options` takes
    /// [`login`](crate::types::login) bits.
    pub fn login(&self, username: &str, password: &str, options: i32) -> Result<()> {
        self.ensure_open()?;
        let user_c = cstr("username", username)?;
        let pass_c = cstr("password", password)?;
        debug!(vm = self.handle.0, username, "guest login");
        self.run_job(self.api.vm_login(self.handle, &user_c, &pass_c, options))
    }

    /// End the guest session.
    pub fn logout(&self) -> Result<()> {
        self.ensure_open()?;
        self.run_job(self.api.vm_logout(self.handle))
    }

    // ========== Guest programs ==========

    /// Run a program in the guest and wait for it to exit.
    ///
    /// `args` is the single command-line string passed to the program.
    /// `options` takes [`run`](crate::types::run) bits; with
    /// `RETURN_IMMEDIATELY` the exit code is not meaningful.
    pub fn run_program(&self, program: &str, args: &str, options: i32) -> Result<ProgramResult> {
        self.ensure_open()?;
        let program_c = cstr("program", program)?;
        let args_c = cstr("args", args)?;

        debug!(vm = self.handle.0, program, "run program in guest");
        let job = Job::new(
            self.api.clone(),
            self.api
                .vm_run_program(self.handle, &program_c, &args_c, options),
        );

        let mut pid = 0u64;
        let mut exit_code = 0i32;
        job.wait(&mut [
            PropRequest::Uint64(VIX_PROPERTY_JOB_RESULT_PROCESS_ID, &mut pid),
            PropRequest::Int(VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE, &mut exit_code),
        ])?;

        Ok(ProgramResult { pid, exit_code })
    }

    /// Run script text through an interpreter in the guest.
    pub fn run_script(
        &self,
        interpreter: &str,
        script_text: &str,
        options: i32,
    ) -> Result<ProgramResult> {
        self.ensure_open()?;
        let interpreter_c = cstr("interpreter", interpreter)?;
        let text_c = cstr("script_text", script_text)?;

        debug!(vm = self.handle.0, interpreter, "run script in guest");
        let job = Job::new(
            self.api.clone(),
            self.api
                .vm_run_script(self.handle, &interpreter_c, &text_c, options),
        );

        let mut pid = 0u64;
        let mut exit_code = 0i32;
        job.wait(&mut [
            PropRequest::Uint64(VIX_PROPERTY_JOB_RESULT_PROCESS_ID, &mut pid),
            PropRequest::Int(VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE, &mut exit_code),
        ])?;

        Ok(ProgramResult { pid, exit_code })
    }

    /// List processes running in the guest.
    ///
    /// An item whose property retrieval fails is skipped; the listing
    /// itself only fails when the enumeration job fails.
    pub fn list_processes(&self) -> Result<Vec<GuestProcess>> {
        self.ensure_open()?;

        let job = Job::new(self.api.clone(), self.api.vm_list_processes(self.handle));
        job.wait_for_items()?;

        let num = job.num_items(VIX_PROPERTY_JOB_RESULT_ITEM_NAME);
        let mut processes = Vec::with_capacity(num.max(0) as usize);
        for i in 0..num {
            let mut name = String::new();
            let mut pid = 0u64;
            let mut owner = String::new();
            let mut command = String::new();
            let item = job.nth_item(
                i,
                &mut [
                    PropRequest::Str(VIX_PROPERTY_JOB_RESULT_ITEM_NAME, &mut name),
                    PropRequest::Uint64(VIX_PROPERTY_JOB_RESULT_PROCESS_ID, &mut pid),
                    PropRequest::Str(VIX_PROPERTY_JOB_RESULT_PROCESS_OWNER, &mut owner),
                    PropRequest::Str(VIX_PROPERTY_JOB_RESULT_PROCESS_COMMAND, &mut command),
                ],
            );
            if item.is_ok() {
                processes.push(GuestProcess {
                    name,
                    pid,
                    owner,
                    command,
                });
            }
        }

        Ok(processes)
    }

    /// Kill a process in the guest.
    pub fn kill_process(&self, pid: u64) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, pid, "kill process in guest");
        self.run_job(self.api.vm_kill_process(self.handle, pid))
    }

    // ========== Guest files and directories ==========

    /// Copy a file from the host into the guest.
    pub fn copy_file_to_guest(&self, host_path: &str, guest_path: &str) -> Result<()> {
        self.ensure_open()?;
        let host_c = cstr("host_path", host_path)?;
        let guest_c = cstr("guest_path", guest_path)?;
        self.run_job(self.api.vm_copy_file_to_guest(self.handle, &host_c, &guest_c))
    }

    /// Copy a file from the guest to the host.
    pub fn copy_file_from_guest(&self, guest_path: &str, host_path: &str) -> Result<()> {
        self.ensure_open()?;
        let guest_c = cstr("guest_path", guest_path)?;
        let host_c = cstr("host_path", host_path)?;
        self.run_job(
            self.api
                .vm_copy_file_from_guest(self.handle, &guest_c, &host_c),
        )
    }

    /// Delete a file in the guest.
    pub fn delete_file(&self, guest_path: &str) -> Result<()> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;
        self.run_job(self.api.vm_delete_file(self.handle, &path_c))
    }

    /// Check whether a file exists in the guest.
    pub fn file_exists(&self, guest_path: &str) -> Result<bool> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;

        let job = Job::new(self.api.clone(), self.api.vm_file_exists(self.handle, &path_c));
        let mut exists = 0i32;
        job.wait(&mut [PropRequest::Int(
            VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS,
            &mut exists,
        )])?;
        Ok(exists != 0)
    }

    /// Rename a file or directory in the guest.
    pub fn rename_file(&self, old_name: &str, new_name: &str) -> Result<()> {
        self.ensure_open()?;
        let old_c = cstr("old_name", old_name)?;
        let new_c = cstr("new_name", new_name)?;
        self.run_job(self.api.vm_rename_file(self.handle, &old_c, &new_c))
    }

    /// Create a temporary file in the guest and return its path.
    pub fn create_temp_file(&self) -> Result<String> {
        self.ensure_open()?;

        let job = Job::new(self.api.clone(), self.api.vm_create_temp_file(self.handle));
        let mut path = String::new();
        job.wait(&mut [PropRequest::Str(
            VIX_PROPERTY_JOB_RESULT_ITEM_NAME,
            &mut path,
        )])?;
        Ok(path)
    }

    /// Fetch attribute flags and size for a guest path.
    pub fn file_info(&self, guest_path: &str) -> Result<GuestFileInfo> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;

        let job = Job::new(self.api.clone(), self.api.vm_get_file_info(self.handle, &path_c));
        let mut flags = 0i32;
        let mut size = 0i64;
        job.wait(&mut [
            PropRequest::Int(VIX_PROPERTY_JOB_RESULT_FILE_FLAGS, &mut flags),
            PropRequest::Int64(VIX_PROPERTY_JOB_RESULT_FILE_SIZE, &mut size),
        ])?;
        Ok(GuestFileInfo { flags, size })
    }

    /// List entry names in a guest directory.
    ///
    /// An empty directory yields an empty vector. An item whose name
    /// retrieval fails is skipped.
    pub fn list_directory(&self, guest_path: &str) -> Result<Vec<String>> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;

        let job = Job::new(self.api.clone(), self.api.vm_list_directory(self.handle, &path_c));
        job.wait_for_items()?;

        let num = job.num_items(VIX_PROPERTY_JOB_RESULT_ITEM_NAME);
        let mut entries = Vec::with_capacity(num.max(0) as usize);
        for i in 0..num {
            let mut name = String::new();
            let item = job.nth_item(
                i,
                &mut [PropRequest::Str(VIX_PROPERTY_JOB_RESULT_ITEM_NAME, &mut name)],
            );
            if item.is_ok() {
                entries.push(name);
            }
        }

        Ok(entries)
    }

    /// Create a directory in the guest.
    pub fn create_directory(&self, guest_path: &str) -> Result<()> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;
        self.run_job(self.api.vm_create_directory(self.handle, &path_c))
    }

    /// Delete a directory in the guest.
    pub fn delete_directory(&self, guest_path: &str) -> Result<()> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;
        self.run_job(self.api.vm_delete_directory(self.handle, &path_c))
    }

    /// Check whether a directory exists in the guest.
    pub fn directory_exists(&self, guest_path: &str) -> Result<bool> {
        self.ensure_open()?;
        let path_c = cstr("guest_path", guest_path)?;

        let job = Job::new(
            self.api.clone(),
            self.api.vm_directory_exists(self.handle, &path_c),
        );
        let mut exists = 0i32;
        job.wait(&mut [PropRequest::Int(
            VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS,
            &mut exists,
        )])?;
        Ok(exists != 0)
    }

    // ========== Variables ==========

    /// Read a variable. Guest-environment reads need a logged-in guest.
    pub fn read_variable(&self, scope: VariableScope, name: &str) -> Result<String> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;

        let job = Job::new(
            self.api.clone(),
            self.api.vm_read_variable(self.handle, scope.into(), &name_c),
        );
        let mut value = String::new();
        job.wait(&mut [PropRequest::Str(
            VIX_PROPERTY_JOB_RESULT_VM_VARIABLE_STRING,
            &mut value,
        )])?;
        Ok(value)
    }

    /// Write a variable.
    pub fn write_variable(&self, scope: VariableScope, name: &str, value: &str) -> Result<()> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;
        let value_c = cstr("value", value)?;
        self.run_job(
            self.api
                .vm_write_variable(self.handle, scope.into(), &name_c, &value_c),
        )
    }

    // ========== Shared folders ==========

    /// Enable or disable shared folders for the guest.
    pub fn enable_shared_folders(&self, enabled: bool) -> Result<()> {
        self.ensure_open()?;
        self.run_job(self.api.vm_enable_shared_folders(self.handle, enabled))
    }

    /// Number of shared folders configured on the VM.
    pub fn shared_folder_count(&self) -> Result<i32> {
        self.ensure_open()?;

        let job = Job::new(
            self.api.clone(),
            self.api.vm_get_num_shared_folders(self.handle),
        );
        let mut count = 0i32;
        job.wait(&mut [PropRequest::Int(
            VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_COUNT,
            &mut count,
        )])?;
        Ok(count)
    }

    /// State of the shared folder at `index`.
    pub fn shared_folder(&self, index: i32) -> Result<SharedFolder> {
        self.ensure_open()?;

        let job = Job::new(
            self.api.clone(),
            self.api.vm_get_shared_folder_state(self.handle, index),
        );
        let mut name = String::new();
        let mut host_path = String::new();
        let mut flags = 0i32;
        job.wait(&mut [
            PropRequest::Str(VIX_PROPERTY_JOB_RESULT_ITEM_NAME, &mut name),
            PropRequest::Str(VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_HOST, &mut host_path),
            PropRequest::Int(VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_FLAGS, &mut flags),
        ])?;
        Ok(SharedFolder {
            name,
            host_path,
            flags,
        })
    }

    /// Change an existing shared folder. `flags` takes
    /// [`folder`](crate::types::folder) bits.
    pub fn set_shared_folder(&self, name: &str, host_path: &str, flags: i32) -> Result<()> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;
        let path_c = cstr("host_path", host_path)?;
        self.run_job(
            self.api
                .vm_set_shared_folder_state(self.handle, &name_c, &path_c, flags),
        )
    }

    /// Add a shared folder.
    pub fn add_shared_folder(&self, name: &str, host_path: &str, flags: i32) -> Result<()> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;
        let path_c = cstr("host_path", host_path)?;
        self.run_job(
            self.api
                .vm_add_shared_folder(self.handle, &name_c, &path_c, flags),
        )
    }

    /// Remove a shared folder by name.
    pub fn remove_shared_folder(&self, name: &str) -> Result<()> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;
        self.run_job(self.api.vm_remove_shared_folder(self.handle, &name_c))
    }

    // ========== Snapshots ==========

    /// Number of root snapshots.
    pub fn num_root_snapshots(&self) -> Result<i32> {
        self.ensure_open()?;
        let mut n = 0i32;
        crate::ffi::check(
            self.api.as_ref(),
            self.api.vm_get_num_root_snapshots(self.handle, &mut n),
        )?;
        Ok(n)
    }

    /// Root snapshot at `index`. The returned snapshot owns its handle.
    pub fn root_snapshot(&self, index: i32) -> Result<Snapshot> {
        self.ensure_open()?;
        let mut h = VixHandle::invalid();
        crate::ffi::check(
            self.api.as_ref(),
            self.api.vm_get_root_snapshot(self.handle, index, &mut h),
        )?;
        Ok(Snapshot::new(self.api.clone(), h))
    }

    /// The currently active snapshot.
    pub fn current_snapshot(&self) -> Result<Snapshot> {
        self.ensure_open()?;
        let mut h = VixHandle::invalid();
        crate::ffi::check(
            self.api.as_ref(),
            self.api.vm_get_current_snapshot(self.handle, &mut h),
        )?;
        Ok(Snapshot::new(self.api.clone(), h))
    }

    /// Look a snapshot up by display name.
    pub fn named_snapshot(&self, name: &str) -> Result<Snapshot> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;
        let mut h = VixHandle::invalid();
        crate::ffi::check(
            self.api.as_ref(),
            self.api.vm_get_named_snapshot(self.handle, &name_c, &mut h),
        )?;
        Ok(Snapshot::new(self.api.clone(), h))
    }

    /// Remove a snapshot. `options` takes
    /// [`snapshot`](crate::types::snapshot) bits.
    pub fn remove_snapshot(&self, snapshot: &Snapshot, options: i32) -> Result<()> {
        self.ensure_open()?;
        self.run_job(
            self.api
                .vm_remove_snapshot(self.handle, snapshot.raw_handle(), options),
        )
    }

    /// Revert the VM to a snapshot. `options` takes
    /// [`power`](crate::types::power) bits.
    pub fn revert_to_snapshot(&self, snapshot: &Snapshot, options: i32) -> Result<()> {
        self.ensure_open()?;
        debug!(vm = self.handle.0, snapshot = snapshot.handle(), "revert");
        self.run_job(
            self.api
                .vm_revert_to_snapshot(self.handle, snapshot.raw_handle(), options),
        )
    }

    /// Create a snapshot; include the memory image by passing
    /// [`snapshot::INCLUDE_MEMORY`](crate::types::snapshot::INCLUDE_MEMORY).
    ///
    /// The returned snapshot handle is caller-owned.
    pub fn create_snapshot(&self, name: &str, description: &str, options: i32) -> Result<Snapshot> {
        self.ensure_open()?;
        let name_c = cstr("name", name)?;
        let desc_c = cstr("description", description)?;

        debug!(vm = self.handle.0, name, options, "create snapshot");
        let job = Job::new(
            self.api.clone(),
            self.api
                .vm_create_snapshot(self.handle, &name_c, &desc_c, options),
        );
        let mut h = VixHandle::invalid();
        job.wait(&mut [PropRequest::Handle(VIX_PROPERTY_JOB_RESULT_HANDLE, &mut h)])?;
        Ok(Snapshot::new(self.api.clone(), h))
    }

    // ========== Miscellaneous ==========

    /// Capture the console screen as a PNG image.
    pub fn capture_screen_image(&self) -> Result<Vec<u8>> {
        self.ensure_open()?;

        let job = Job::new(
            self.api.clone(),
            self.api
                .vm_capture_screen_image(self.handle, VIX_CAPTURESCREENFORMAT_PNG),
        );
        let mut data = Vec::new();
        job.wait(&mut [PropRequest::Blob(
            VIX_PROPERTY_JOB_RESULT_SCREEN_IMAGE_DATA,
            &mut data,
        )])?;
        Ok(data)
    }

    /// Upgrade the virtual hardware to the installed product's version.
    pub fn upgrade_virtual_hardware(&self) -> Result<()> {
        self.ensure_open()?;
        self.run_job(self.api.vm_upgrade_virtual_hardware(self.handle))
    }

    /// Install or upgrade VMware Tools in the guest. `options` takes
    /// [`tools`](crate::types::tools) bits.
    pub fn install_tools(&self, options: i32) -> Result<()> {
        self.ensure_open()?;
        self.run_job(self.api.vm_install_tools(self.handle, options))
    }

    /// Clone the VM to `dest_vmx_path`.
    ///
    /// A linked clone shares disks with `snapshot`; a full clone copies
    /// everything. With no snapshot the current state is cloned.
    pub fn clone_to(
        &self,
        snapshot: Option<&Snapshot>,
        clone_type: CloneType,
        dest_vmx_path: &str,
    ) -> Result<()> {
        self.ensure_open()?;
        let dest_c = cstr("dest_vmx_path", dest_vmx_path)?;
        let snap = snapshot.map(Snapshot::raw_handle).unwrap_or_default();
        debug!(vm = self.handle.0, dest_vmx_path, ?clone_type, "clone");
        self.run_job(
            self.api
                .vm_clone(self.handle, snap, clone_type.into(), &dest_c),
        )
    }

    // ========== Properties ==========

    /// Decode an arbitrary property by its declared type.
    pub fn property(&self, property: i32) -> Result<PropertyValue> {
        self.ensure_open()?;
        props::get(self.api.as_ref(), self.handle, property)
    }

    /// Declared type of a property (`VIX_PROPERTYTYPE_*`).
    pub fn property_type(&self, property: i32) -> Result<i32> {
        self.ensure_open()?;
        props::get_type(self.api.as_ref(), self.handle, property)
    }

    /// Number of virtual CPUs.
    pub fn num_vcpus(&self) -> Result<i32> {
        self.ensure_open()?;
        props::int(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_NUM_VCPUS)
    }

    /// Path of the .vmx configuration file.
    pub fn vmx_path(&self) -> Result<String> {
        self.ensure_open()?;
        props::string(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_VMX_PATHNAME)
    }

    /// Configured memory size in megabytes.
    pub fn memory_size(&self) -> Result<i32> {
        self.ensure_open()?;
        props::int(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_MEMORY_SIZE)
    }

    /// Whether the VM is read-only.
    pub fn read_only(&self) -> Result<bool> {
        self.ensure_open()?;
        props::boolean(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_READ_ONLY)
    }

    /// Current power state (`VIX_POWERSTATE_*` bits).
    pub fn power_state(&self) -> Result<i32> {
        self.ensure_open()?;
        props::int(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_POWER_STATE)
    }

    /// Current tools state (`VIX_TOOLSSTATE_*`).
    pub fn tools_state(&self) -> Result<i32> {
        self.ensure_open()?;
        props::int(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_TOOLS_STATE)
    }

    /// Whether the VM is running.
    pub fn is_running(&self) -> Result<bool> {
        self.ensure_open()?;
        props::boolean(self.api.as_ref(), self.handle, VIX_PROPERTY_VM_IS_RUNNING)
    }

    /// Guest path under which shared folders are exposed.
    pub fn shares_path(&self) -> Result<String> {
        self.ensure_open()?;
        props::string(
            self.api.as_ref(),
            self.handle,
            VIX_PROPERTY_GUEST_SHAREDFOLDERS_SHARES_PATH,
        )
    }

    /// Release the VM handle.
    ///
    /// Called automatically on drop; explicit close makes the wrapper
    /// unusable immediately.
    pub fn close(&mut self) {
        if self.handle.is_valid() {
            self.api.release(self.handle);
            self.handle = VixHandle::invalid();
        }
    }
}

impl Clone for Vm {
    /// Take an additional reference on the same underlying handle.
    fn clone(&self) -> Self {
        if self.handle.is_valid() {
            self.api.add_ref(self.handle);
        }
        Self {
            api: self.api.clone(),
            handle: self.handle,
        }
    }
}

impl Drop for Vm {
    fn drop(&mut self) {
        self.close();
    }
}

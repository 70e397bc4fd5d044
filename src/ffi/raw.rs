//! Raw C declarations for the VIX client library.
//!
//! Signatures follow `vix.h`. These are only referenced by the SDK backend;
//! prefer the safe wrappers in the crate root. `VixJob_Wait`,
//! `Vix_GetProperties` and `VixJob_GetNthProperties` are C-variadic: the
//! trailing arguments are (property id, out pointer...) pairs terminated by
//! `VIX_PROPERTY_NONE`.

use std::os::raw::{c_char, c_int, c_void};

/// Raw handle value. All VIX resources share one integer handle space.
pub type VixRawHandle = c_int;

/// 64-bit error value; the low 16 bits carry the error category.
pub type VixError = u64;

/// Property identifier.
pub type VixPropertyID = c_int;

/// Event callback invoked by the library for job progress, completion and
/// found items. `client_data` is the pointer registered with the call.
pub type VixEventProc = Option<
    unsafe extern "C" fn(
        handle: VixRawHandle,
        event_type: c_int,
        more_event_info: VixRawHandle,
        client_data: *mut c_void,
    ),
>;

extern "C" {
    // Handle and property introspection
    pub fn Vix_ReleaseHandle(handle: VixRawHandle);
    pub fn Vix_AddRefHandle(handle: VixRawHandle);
    pub fn Vix_GetHandleType(handle: VixRawHandle) -> c_int;
    pub fn Vix_GetProperties(
        handle: VixRawHandle,
        first_property_id: VixPropertyID,
        ...
    ) -> VixError;
    pub fn Vix_GetPropertyType(
        handle: VixRawHandle,
        property_id: VixPropertyID,
        property_type: *mut c_int,
    ) -> VixError;

    // Buffers returned through property out-pointers stay owned by the
    // library until freed here.
    pub fn Vix_FreeBuffer(p: *mut c_void);

    // Error text lookup; returns a static string, never freed.
    pub fn Vix_GetErrorText(err: VixError, locale: *const c_char) -> *const c_char;

    // Jobs
    pub fn VixJob_Wait(job: VixRawHandle, first_property_id: VixPropertyID, ...) -> VixError;
    pub fn VixJob_GetNumProperties(job: VixRawHandle, result_property_id: VixPropertyID) -> c_int;
    pub fn VixJob_GetNthProperties(
        job: VixRawHandle,
        index: c_int,
        first_property_id: VixPropertyID,
        ...
    ) -> VixError;

    // Host
    pub fn VixHost_Connect(
        api_version: c_int,
        host_type: c_int,
        host_name: *const c_char,
        host_port: c_int,
        user_name: *const c_char,
        password: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixHost_Disconnect(host: VixRawHandle);
    pub fn VixHost_RegisterVM(
        host: VixRawHandle,
        vmx_file_path: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixHost_UnregisterVM(
        host: VixRawHandle,
        vmx_file_path: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixHost_FindItems(
        host: VixRawHandle,
        search_type: c_int,
        search_criteria: VixRawHandle,
        timeout: i32,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixHost_OpenVM(
        host: VixRawHandle,
        vmx_file_path: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // VM power lifecycle
    pub fn VixVM_PowerOn(
        vm: VixRawHandle,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_PowerOff(
        vm: VixRawHandle,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_Reset(
        vm: VixRawHandle,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_Suspend(
        vm: VixRawHandle,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_Pause(
        vm: VixRawHandle,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_Unpause(
        vm: VixRawHandle,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_Delete(
        vm: VixRawHandle,
        delete_options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // Guest tools and login
    pub fn VixVM_WaitForToolsInGuest(
        vm: VixRawHandle,
        timeout_seconds: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_LoginInGuest(
        vm: VixRawHandle,
        user_name: *const c_char,
        password: *const c_char,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_LogoutFromGuest(
        vm: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // Guest processes
    pub fn VixVM_RunProgramInGuest(
        vm: VixRawHandle,
        guest_program_name: *const c_char,
        command_line_args: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_RunScriptInGuest(
        vm: VixRawHandle,
        interpreter: *const c_char,
        script_text: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_ListProcessesInGuest(
        vm: VixRawHandle,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_KillProcessInGuest(
        vm: VixRawHandle,
        pid: u64,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // Guest files and directories
    pub fn VixVM_CopyFileFromHostToGuest(
        vm: VixRawHandle,
        host_path: *const c_char,
        guest_path: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_CopyFileFromGuestToHost(
        vm: VixRawHandle,
        guest_path: *const c_char,
        host_path: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_DeleteFileInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_FileExistsInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_RenameFileInGuest(
        vm: VixRawHandle,
        old_name: *const c_char,
        new_name: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_CreateTempFileInGuest(
        vm: VixRawHandle,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_GetFileInfoInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_ListDirectoryInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_CreateDirectoryInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_DeleteDirectoryInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_DirectoryExistsInGuest(
        vm: VixRawHandle,
        guest_path: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // Variables
    pub fn VixVM_ReadVariable(
        vm: VixRawHandle,
        variable_type: c_int,
        name: *const c_char,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_WriteVariable(
        vm: VixRawHandle,
        variable_type: c_int,
        name: *const c_char,
        value: *const c_char,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // Shared folders
    pub fn VixVM_EnableSharedFolders(
        vm: VixRawHandle,
        enabled: c_int,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_GetNumSharedFolders(
        vm: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_GetSharedFolderState(
        vm: VixRawHandle,
        index: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_SetSharedFolderState(
        vm: VixRawHandle,
        share_name: *const c_char,
        host_path_name: *const c_char,
        flags: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_AddSharedFolder(
        vm: VixRawHandle,
        share_name: *const c_char,
        host_path_name: *const c_char,
        flags: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_RemoveSharedFolder(
        vm: VixRawHandle,
        share_name: *const c_char,
        flags: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;

    // Snapshots. The `Get*` calls are synchronous and hand back a
    // caller-owned snapshot handle through the out parameter.
    pub fn VixVM_GetNumRootSnapshots(vm: VixRawHandle, result: *mut c_int) -> VixError;
    pub fn VixVM_GetRootSnapshot(
        vm: VixRawHandle,
        index: c_int,
        snapshot: *mut VixRawHandle,
    ) -> VixError;
    pub fn VixVM_GetCurrentSnapshot(vm: VixRawHandle, snapshot: *mut VixRawHandle) -> VixError;
    pub fn VixVM_GetNamedSnapshot(
        vm: VixRawHandle,
        name: *const c_char,
        snapshot: *mut VixRawHandle,
    ) -> VixError;
    pub fn VixVM_RemoveSnapshot(
        vm: VixRawHandle,
        snapshot: VixRawHandle,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_RevertToSnapshot(
        vm: VixRawHandle,
        snapshot: VixRawHandle,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_CreateSnapshot(
        vm: VixRawHandle,
        name: *const c_char,
        description: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixSnapshot_GetNumChildren(snapshot: VixRawHandle, result: *mut c_int) -> VixError;
    pub fn VixSnapshot_GetChild(
        snapshot: VixRawHandle,
        index: c_int,
        child: *mut VixRawHandle,
    ) -> VixError;
    pub fn VixSnapshot_GetParent(snapshot: VixRawHandle, parent: *mut VixRawHandle) -> VixError;

    // Miscellaneous
    pub fn VixVM_CaptureScreenImage(
        vm: VixRawHandle,
        capture_type: c_int,
        additional_properties: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_UpgradeVirtualHardware(
        vm: VixRawHandle,
        options: c_int,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_InstallTools(
        vm: VixRawHandle,
        options: c_int,
        command_line_args: *const c_char,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
    pub fn VixVM_Clone(
        vm: VixRawHandle,
        snapshot: VixRawHandle,
        clone_type: c_int,
        dest_config_path_name: *const c_char,
        options: c_int,
        property_list: VixRawHandle,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixRawHandle;
}

//! `VixApi` backed by the real VIX client library.
//!
//! Each method forwards to the corresponding `vix.h` entry point. The
//! variadic property calls (`VixJob_Wait`, `Vix_GetProperties`,
//! `VixJob_GetNthProperties`) are driven through the finite set of
//! property-request shapes the crate actually uses; string and blob results
//! are copied into Rust-owned memory and the native buffer is freed with
//! `Vix_FreeBuffer` before the call returns.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;

use crate::consts::{VIX_E_INVALID_ARG, VIX_INVALID_HANDLE, VIX_PROPERTY_NONE, VIX_VMOPEN_NORMAL};
use crate::ffi::{raw, succeeded, PropRequest, VixApi, VixError, VixEventProc, VixHandle};

/// The real backend. Stateless; all state lives in the library.
pub(crate) struct SdkApi;

/// Copy a library-owned C string and free the native buffer.
///
/// # Safety
///
/// `p` must be null or a buffer returned by the library.
unsafe fn take_string(p: *mut c_char) -> String {
    if p.is_null() {
        return String::new();
    }
    let s = CStr::from_ptr(p).to_string_lossy().into_owned();
    raw::Vix_FreeBuffer(p as *mut c_void);
    s
}

/// Copy a library-owned blob of explicit length and free the native buffer.
unsafe fn take_blob(p: *mut c_char, len: c_int) -> Vec<u8> {
    if p.is_null() {
        return Vec::new();
    }
    let data = if len > 0 {
        std::slice::from_raw_parts(p as *const u8, len as usize).to_vec()
    } else {
        Vec::new()
    };
    raw::Vix_FreeBuffer(p as *mut c_void);
    data
}

fn opt_ptr(s: Option<&CStr>) -> *const c_char {
    s.map(CStr::as_ptr).unwrap_or(ptr::null())
}

impl VixApi for SdkApi {
    fn release(&self, handle: VixHandle) {
        unsafe { raw::Vix_ReleaseHandle(handle.0) }
    }

    fn add_ref(&self, handle: VixHandle) {
        unsafe { raw::Vix_AddRefHandle(handle.0) }
    }

    fn handle_type(&self, handle: VixHandle) -> i32 {
        unsafe { raw::Vix_GetHandleType(handle.0) }
    }

    fn get_property_type(&self, handle: VixHandle, property: i32, out: &mut i32) -> VixError {
        let mut ptype: c_int = 0;
        let err = unsafe { raw::Vix_GetPropertyType(handle.0, property, &mut ptype) };
        *out = ptype;
        err
    }

    fn get_properties(&self, handle: VixHandle, request: &mut PropRequest<'_>) -> VixError {
        unsafe {
            match request {
                PropRequest::Int(id, out) => {
                    let mut val: c_int = 0;
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut val as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    **out = val;
                    err
                }
                PropRequest::Handle(id, out) => {
                    let mut val: c_int = 0;
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut val as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    **out = VixHandle(val);
                    err
                }
                PropRequest::Bool(id, out) => {
                    let mut val: c_int = 0;
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut val as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    **out = val != 0;
                    err
                }
                PropRequest::Int64(id, out) => {
                    let mut val: i64 = 0;
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut val as *mut i64,
                        VIX_PROPERTY_NONE,
                    );
                    **out = val;
                    err
                }
                PropRequest::Uint64(id, out) => {
                    let mut val: u64 = 0;
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut val as *mut u64,
                        VIX_PROPERTY_NONE,
                    );
                    **out = val;
                    err
                }
                PropRequest::Str(id, out) => {
                    let mut p: *mut c_char = ptr::null_mut();
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut p as *mut *mut c_char,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out = take_string(p);
                    } else if !p.is_null() {
                        raw::Vix_FreeBuffer(p as *mut c_void);
                    }
                    err
                }
                PropRequest::Blob(id, out) => {
                    let mut len: c_int = 0;
                    let mut p: *mut c_char = ptr::null_mut();
                    let err = raw::Vix_GetProperties(
                        handle.0,
                        *id,
                        &mut len as *mut c_int,
                        &mut p as *mut *mut c_char,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out = take_blob(p, len);
                    } else if !p.is_null() {
                        raw::Vix_FreeBuffer(p as *mut c_void);
                    }
                    err
                }
            }
        }
    }

    fn error_text(&self, code: u64) -> Option<String> {
        unsafe {
            let p = raw::Vix_GetErrorText(code, ptr::null());
            if p.is_null() {
                None
            } else {
                // Static library string; not freed.
                Some(CStr::from_ptr(p).to_string_lossy().into_owned())
            }
        }
    }

    fn job_wait(&self, job: VixHandle, results: &mut [PropRequest<'_>]) -> VixError {
        use PropRequest::*;
        unsafe {
            match results {
                [] => raw::VixJob_Wait(job.0, VIX_PROPERTY_NONE),
                [Handle(id, out)] => {
                    let mut h: c_int = 0;
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id,
                        &mut h as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    **out = VixHandle(h);
                    err
                }
                [Int(id, out)] => {
                    let mut v: c_int = 0;
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id,
                        &mut v as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    **out = v;
                    err
                }
                [Str(id, out)] => {
                    let mut p: *mut c_char = ptr::null_mut();
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id,
                        &mut p as *mut *mut c_char,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out = take_string(p);
                    } else if !p.is_null() {
                        raw::Vix_FreeBuffer(p as *mut c_void);
                    }
                    err
                }
                [Blob(id, out)] => {
                    let mut len: c_int = 0;
                    let mut p: *mut c_char = ptr::null_mut();
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id,
                        &mut len as *mut c_int,
                        &mut p as *mut *mut c_char,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out = take_blob(p, len);
                    } else if !p.is_null() {
                        raw::Vix_FreeBuffer(p as *mut c_void);
                    }
                    err
                }
                [Uint64(id1, out1), Int(id2, out2)] => {
                    let mut v1: u64 = 0;
                    let mut v2: c_int = 0;
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id1,
                        &mut v1 as *mut u64,
                        *id2,
                        &mut v2 as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    **out1 = v1;
                    **out2 = v2;
                    err
                }
                [Int(id1, out1), Int64(id2, out2)] => {
                    let mut v1: c_int = 0;
                    let mut v2: i64 = 0;
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id1,
                        &mut v1 as *mut c_int,
                        *id2,
                        &mut v2 as *mut i64,
                        VIX_PROPERTY_NONE,
                    );
                    **out1 = v1;
                    **out2 = v2;
                    err
                }
                [Str(id1, out1), Str(id2, out2), Int(id3, out3)] => {
                    let mut p1: *mut c_char = ptr::null_mut();
                    let mut p2: *mut c_char = ptr::null_mut();
                    let mut v3: c_int = 0;
                    let err = raw::VixJob_Wait(
                        job.0,
                        *id1,
                        &mut p1 as *mut *mut c_char,
                        *id2,
                        &mut p2 as *mut *mut c_char,
                        *id3,
                        &mut v3 as *mut c_int,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out1 = take_string(p1);
                        **out2 = take_string(p2);
                        **out3 = v3;
                    } else {
                        if !p1.is_null() {
                            raw::Vix_FreeBuffer(p1 as *mut c_void);
                        }
                        if !p2.is_null() {
                            raw::Vix_FreeBuffer(p2 as *mut c_void);
                        }
                    }
                    err
                }
                _ => {
                    debug_assert!(false, "unsupported job result shape");
                    VIX_E_INVALID_ARG
                }
            }
        }
    }

    fn job_get_num_properties(&self, job: VixHandle, property: i32) -> i32 {
        unsafe { raw::VixJob_GetNumProperties(job.0, property) }
    }

    fn job_get_nth_properties(
        &self,
        job: VixHandle,
        index: i32,
        results: &mut [PropRequest<'_>],
    ) -> VixError {
        use PropRequest::*;
        unsafe {
            match results {
                [Str(id, out)] => {
                    let mut p: *mut c_char = ptr::null_mut();
                    let err = raw::VixJob_GetNthProperties(
                        job.0,
                        index,
                        *id,
                        &mut p as *mut *mut c_char,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out = take_string(p);
                    } else if !p.is_null() {
                        raw::Vix_FreeBuffer(p as *mut c_void);
                    }
                    err
                }
                [Str(id1, out1), Uint64(id2, out2), Str(id3, out3), Str(id4, out4)] => {
                    let mut p1: *mut c_char = ptr::null_mut();
                    let mut v2: u64 = 0;
                    let mut p3: *mut c_char = ptr::null_mut();
                    let mut p4: *mut c_char = ptr::null_mut();
                    let err = raw::VixJob_GetNthProperties(
                        job.0,
                        index,
                        *id1,
                        &mut p1 as *mut *mut c_char,
                        *id2,
                        &mut v2 as *mut u64,
                        *id3,
                        &mut p3 as *mut *mut c_char,
                        *id4,
                        &mut p4 as *mut *mut c_char,
                        VIX_PROPERTY_NONE,
                    );
                    if succeeded(err) {
                        **out1 = take_string(p1);
                        **out2 = v2;
                        **out3 = take_string(p3);
                        **out4 = take_string(p4);
                    } else {
                        for p in [p1, p3, p4] {
                            if !p.is_null() {
                                raw::Vix_FreeBuffer(p as *mut c_void);
                            }
                        }
                    }
                    err
                }
                _ => {
                    debug_assert!(false, "unsupported per-item result shape");
                    VIX_E_INVALID_ARG
                }
            }
        }
    }

    fn host_connect(
        &self,
        api_version: i32,
        host_type: i32,
        host_name: Option<&CStr>,
        host_port: i32,
        user_name: Option<&CStr>,
        password: Option<&CStr>,
        options: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixHost_Connect(
                api_version,
                host_type,
                opt_ptr(host_name),
                host_port,
                opt_ptr(user_name),
                opt_ptr(password),
                options,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn host_disconnect(&self, host: VixHandle) {
        unsafe { raw::VixHost_Disconnect(host.0) }
    }

    fn host_register_vm(&self, host: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixHost_RegisterVM(
                host.0,
                path.as_ptr(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn host_unregister_vm(&self, host: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixHost_UnregisterVM(
                host.0,
                path.as_ptr(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    unsafe fn host_find_items(
        &self,
        host: VixHandle,
        search_type: i32,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixHandle {
        VixHandle(raw::VixHost_FindItems(
            host.0,
            search_type,
            VIX_INVALID_HANDLE,
            -1,
            callback,
            client_data,
        ))
    }

    fn host_open_vm(&self, host: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixHost_OpenVM(
                host.0,
                path.as_ptr(),
                VIX_VMOPEN_NORMAL,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_power_on(&self, vm: VixHandle, options: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_PowerOn(
                vm.0,
                options,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_power_off(&self, vm: VixHandle, options: i32) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_PowerOff(vm.0, options, None, ptr::null_mut())) }
    }

    fn vm_reset(&self, vm: VixHandle, options: i32) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_Reset(vm.0, options, None, ptr::null_mut())) }
    }

    fn vm_suspend(&self, vm: VixHandle) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_Suspend(vm.0, 0, None, ptr::null_mut())) }
    }

    fn vm_pause(&self, vm: VixHandle) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_Pause(
                vm.0,
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_unpause(&self, vm: VixHandle) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_Unpause(
                vm.0,
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_delete(&self, vm: VixHandle, options: i32) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_Delete(vm.0, options, None, ptr::null_mut())) }
    }

    fn vm_wait_for_tools(&self, vm: VixHandle, timeout_seconds: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_WaitForToolsInGuest(
                vm.0,
                timeout_seconds,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_login(&self, vm: VixHandle, user: &CStr, password: &CStr, options: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_LoginInGuest(
                vm.0,
                user.as_ptr(),
                password.as_ptr(),
                options,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_logout(&self, vm: VixHandle) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_LogoutFromGuest(vm.0, None, ptr::null_mut())) }
    }

    fn vm_run_program(
        &self,
        vm: VixHandle,
        program: &CStr,
        command_line: &CStr,
        options: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_RunProgramInGuest(
                vm.0,
                program.as_ptr(),
                command_line.as_ptr(),
                options,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_run_script(
        &self,
        vm: VixHandle,
        interpreter: &CStr,
        script_text: &CStr,
        options: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_RunScriptInGuest(
                vm.0,
                interpreter.as_ptr(),
                script_text.as_ptr(),
                options,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_list_processes(&self, vm: VixHandle) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_ListProcessesInGuest(vm.0, 0, None, ptr::null_mut())) }
    }

    fn vm_kill_process(&self, vm: VixHandle, pid: u64) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_KillProcessInGuest(
                vm.0,
                pid,
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_copy_file_to_guest(
        &self,
        vm: VixHandle,
        host_path: &CStr,
        guest_path: &CStr,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_CopyFileFromHostToGuest(
                vm.0,
                host_path.as_ptr(),
                guest_path.as_ptr(),
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_copy_file_from_guest(
        &self,
        vm: VixHandle,
        guest_path: &CStr,
        host_path: &CStr,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_CopyFileFromGuestToHost(
                vm.0,
                guest_path.as_ptr(),
                host_path.as_ptr(),
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_delete_file(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_DeleteFileInGuest(
                vm.0,
                path.as_ptr(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_file_exists(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_FileExistsInGuest(
                vm.0,
                path.as_ptr(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_rename_file(&self, vm: VixHandle, old_name: &CStr, new_name: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_RenameFileInGuest(
                vm.0,
                old_name.as_ptr(),
                new_name.as_ptr(),
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_create_temp_file(&self, vm: VixHandle) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_CreateTempFileInGuest(
                vm.0,
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_get_file_info(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_GetFileInfoInGuest(
                vm.0,
                path.as_ptr(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_list_directory(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_ListDirectoryInGuest(
                vm.0,
                path.as_ptr(),
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_create_directory(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_CreateDirectoryInGuest(
                vm.0,
                path.as_ptr(),
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_delete_directory(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_DeleteDirectoryInGuest(
                vm.0,
                path.as_ptr(),
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_directory_exists(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_DirectoryExistsInGuest(
                vm.0,
                path.as_ptr(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_read_variable(&self, vm: VixHandle, scope: i32, name: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_ReadVariable(
                vm.0,
                scope,
                name.as_ptr(),
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_write_variable(
        &self,
        vm: VixHandle,
        scope: i32,
        name: &CStr,
        value: &CStr,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_WriteVariable(
                vm.0,
                scope,
                name.as_ptr(),
                value.as_ptr(),
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_enable_shared_folders(&self, vm: VixHandle, enabled: bool) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_EnableSharedFolders(
                vm.0,
                enabled as c_int,
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_get_num_shared_folders(&self, vm: VixHandle) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_GetNumSharedFolders(vm.0, None, ptr::null_mut())) }
    }

    fn vm_get_shared_folder_state(&self, vm: VixHandle, index: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_GetSharedFolderState(
                vm.0,
                index,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_set_shared_folder_state(
        &self,
        vm: VixHandle,
        name: &CStr,
        host_path: &CStr,
        flags: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_SetSharedFolderState(
                vm.0,
                name.as_ptr(),
                host_path.as_ptr(),
                flags,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_add_shared_folder(
        &self,
        vm: VixHandle,
        name: &CStr,
        host_path: &CStr,
        flags: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_AddSharedFolder(
                vm.0,
                name.as_ptr(),
                host_path.as_ptr(),
                flags,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_remove_shared_folder(&self, vm: VixHandle, name: &CStr) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_RemoveSharedFolder(
                vm.0,
                name.as_ptr(),
                0,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_get_num_root_snapshots(&self, vm: VixHandle, out: &mut i32) -> VixError {
        let mut n: c_int = 0;
        let err = unsafe { raw::VixVM_GetNumRootSnapshots(vm.0, &mut n) };
        *out = n;
        err
    }

    fn vm_get_root_snapshot(&self, vm: VixHandle, index: i32, out: &mut VixHandle) -> VixError {
        let mut h: c_int = 0;
        let err = unsafe { raw::VixVM_GetRootSnapshot(vm.0, index, &mut h) };
        *out = VixHandle(h);
        err
    }

    fn vm_get_current_snapshot(&self, vm: VixHandle, out: &mut VixHandle) -> VixError {
        let mut h: c_int = 0;
        let err = unsafe { raw::VixVM_GetCurrentSnapshot(vm.0, &mut h) };
        *out = VixHandle(h);
        err
    }

    fn vm_get_named_snapshot(
        &self,
        vm: VixHandle,
        name: &CStr,
        out: &mut VixHandle,
    ) -> VixError {
        let mut h: c_int = 0;
        let err = unsafe { raw::VixVM_GetNamedSnapshot(vm.0, name.as_ptr(), &mut h) };
        *out = VixHandle(h);
        err
    }

    fn vm_remove_snapshot(&self, vm: VixHandle, snapshot: VixHandle, options: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_RemoveSnapshot(
                vm.0,
                snapshot.0,
                options,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_revert_to_snapshot(
        &self,
        vm: VixHandle,
        snapshot: VixHandle,
        options: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_RevertToSnapshot(
                vm.0,
                snapshot.0,
                options,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_create_snapshot(
        &self,
        vm: VixHandle,
        name: &CStr,
        description: &CStr,
        options: i32,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_CreateSnapshot(
                vm.0,
                name.as_ptr(),
                description.as_ptr(),
                options,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn snapshot_get_num_children(&self, snapshot: VixHandle, out: &mut i32) -> VixError {
        let mut n: c_int = 0;
        let err = unsafe { raw::VixSnapshot_GetNumChildren(snapshot.0, &mut n) };
        *out = n;
        err
    }

    fn snapshot_get_child(
        &self,
        snapshot: VixHandle,
        index: i32,
        out: &mut VixHandle,
    ) -> VixError {
        let mut h: c_int = 0;
        let err = unsafe { raw::VixSnapshot_GetChild(snapshot.0, index, &mut h) };
        *out = VixHandle(h);
        err
    }

    fn snapshot_get_parent(&self, snapshot: VixHandle, out: &mut VixHandle) -> VixError {
        let mut h: c_int = 0;
        let err = unsafe { raw::VixSnapshot_GetParent(snapshot.0, &mut h) };
        *out = VixHandle(h);
        err
    }

    fn vm_capture_screen_image(&self, vm: VixHandle, format: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_CaptureScreenImage(
                vm.0,
                format,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_upgrade_virtual_hardware(&self, vm: VixHandle) -> VixHandle {
        unsafe { VixHandle(raw::VixVM_UpgradeVirtualHardware(vm.0, 0, None, ptr::null_mut())) }
    }

    fn vm_install_tools(&self, vm: VixHandle, options: i32) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_InstallTools(
                vm.0,
                options,
                ptr::null(),
                None,
                ptr::null_mut(),
            ))
        }
    }

    fn vm_clone(
        &self,
        vm: VixHandle,
        snapshot: VixHandle,
        clone_type: i32,
        dest_config_path: &CStr,
    ) -> VixHandle {
        unsafe {
            VixHandle(raw::VixVM_Clone(
                vm.0,
                snapshot.0,
                clone_type,
                dest_config_path.as_ptr(),
                0,
                VIX_INVALID_HANDLE,
                None,
                ptr::null_mut(),
            ))
        }
    }
}

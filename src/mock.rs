//! In-process fake of the VIX client library, used by the unit tests.
//!
//! Implements [`VixApi`] over a handle table with the behavior the wrappers
//! rely on: jobs carrying typed result properties, a guest variable store, a
//! snapshot tree, shared folders, a small guest filesystem and process list.
//! Carries probes for the convention the safe layer must uphold: a
//! native-call counter, per-handle release and add-ref counts, and an
//! all-jobs-released check.

use std::collections::{BTreeSet, HashMap};
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::consts::{
    VIX_EVENTTYPE_FIND_ITEM, VIX_E_ALREADY_EXISTS, VIX_E_FILE_NOT_FOUND, VIX_E_INVALID_ARG,
    VIX_E_INVALID_HANDLE, VIX_E_NOT_A_DIRECTORY, VIX_E_NOT_FOUND, VIX_E_NO_SUCH_PROCESS,
    VIX_E_SNAPSHOT_NOTFOUND, VIX_E_TYPE_MISMATCH, VIX_E_UNRECOGNIZED_PROPERTY,
    VIX_E_VM_IS_RUNNING, VIX_E_VM_NOT_RUNNING, VIX_FILE_ATTRIBUTES_DIRECTORY,
    VIX_FIND_REGISTERED_VMS, VIX_FIND_RUNNING_VMS, VIX_HANDLETYPE_HOST, VIX_HANDLETYPE_JOB,
    VIX_HANDLETYPE_NONE, VIX_HANDLETYPE_PROPERTY_LIST, VIX_HANDLETYPE_SNAPSHOT,
    VIX_HANDLETYPE_VM, VIX_OK, VIX_POWERSTATE_PAUSED, VIX_POWERSTATE_POWERED_OFF,
    VIX_POWERSTATE_POWERED_ON, VIX_POWERSTATE_SUSPENDED, VIX_PROPERTY_FOUND_ITEM_LOCATION,
    VIX_PROPERTY_HOST_API_VERSION, VIX_PROPERTY_HOST_HOSTTYPE,
    VIX_PROPERTY_JOB_RESULT_FILE_FLAGS, VIX_PROPERTY_JOB_RESULT_FILE_SIZE,
    VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS,
    VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE, VIX_PROPERTY_JOB_RESULT_HANDLE,
    VIX_PROPERTY_JOB_RESULT_ITEM_NAME, VIX_PROPERTY_JOB_RESULT_PROCESS_COMMAND,
    VIX_PROPERTY_JOB_RESULT_PROCESS_ID, VIX_PROPERTY_JOB_RESULT_PROCESS_OWNER,
    VIX_PROPERTY_JOB_RESULT_SCREEN_IMAGE_DATA, VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_COUNT,
    VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_FLAGS, VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_HOST,
    VIX_PROPERTY_JOB_RESULT_VM_VARIABLE_STRING, VIX_PROPERTY_SNAPSHOT_DESCRIPTION,
    VIX_PROPERTY_SNAPSHOT_DISPLAYNAME, VIX_PROPERTY_SNAPSHOT_IS_REPLAYABLE,
    VIX_PROPERTY_VM_IS_RUNNING, VIX_PROPERTY_VM_MEMORY_SIZE, VIX_PROPERTY_VM_NUM_VCPUS,
    VIX_PROPERTY_VM_POWER_STATE, VIX_PROPERTY_VM_READ_ONLY, VIX_PROPERTY_VM_TOOLS_STATE,
    VIX_PROPERTY_VM_VMX_PATHNAME, VIX_TOOLSSTATE_NOT_INSTALLED, VIX_TOOLSSTATE_RUNNING,
};
use crate::ffi::{PropRequest, VixApi, VixError, VixEventProc, VixHandle};

/// A property value as stored by the fake library.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Int(i32),
    Str(String),
    Bool(bool),
    Int64(i64),
    Uint64(u64),
    Blob(Vec<u8>),
    Handle(i32),
    /// A value whose declared type is outside the decodable set.
    Opaque(i32),
}

impl Value {
    fn type_tag(&self) -> i32 {
        use crate::consts::{
            VIX_PROPERTYTYPE_BLOB, VIX_PROPERTYTYPE_BOOL, VIX_PROPERTYTYPE_HANDLE,
            VIX_PROPERTYTYPE_INT64, VIX_PROPERTYTYPE_INTEGER, VIX_PROPERTYTYPE_STRING,
        };
        match self {
            Value::Int(_) => VIX_PROPERTYTYPE_INTEGER,
            Value::Str(_) => VIX_PROPERTYTYPE_STRING,
            Value::Bool(_) => VIX_PROPERTYTYPE_BOOL,
            Value::Int64(_) | Value::Uint64(_) => VIX_PROPERTYTYPE_INT64,
            Value::Blob(_) => VIX_PROPERTYTYPE_BLOB,
            Value::Handle(_) => VIX_PROPERTYTYPE_HANDLE,
            Value::Opaque(tag) => *tag,
        }
    }

    /// Write this value into a request; type mismatches are an error, as in
    /// the real library.
    fn fill(&self, request: &mut PropRequest<'_>) -> VixError {
        match (request, self) {
            (PropRequest::Int(_, out), Value::Int(v)) => **out = *v,
            (PropRequest::Str(_, out), Value::Str(v)) => **out = v.clone(),
            (PropRequest::Bool(_, out), Value::Bool(v)) => **out = *v,
            (PropRequest::Int64(_, out), Value::Int64(v)) => **out = *v,
            (PropRequest::Uint64(_, out), Value::Uint64(v)) => **out = *v,
            (PropRequest::Blob(_, out), Value::Blob(v)) => **out = v.clone(),
            (PropRequest::Handle(_, out), Value::Handle(v)) => **out = VixHandle(*v),
            _ => return VIX_E_TYPE_MISMATCH,
        }
        VIX_OK
    }
}

#[derive(Default)]
struct HostState {
    registered: Vec<String>,
    running: Vec<String>,
    props: HashMap<i32, Value>,
}

struct VmState {
    powered: bool,
    paused: bool,
    suspended: bool,
    vars: HashMap<(i32, String), String>,
    files: HashMap<String, i64>,
    dirs: BTreeSet<String>,
    folders_enabled: bool,
    folders: Vec<(String, String, i32)>,
    processes: Vec<(String, u64, String, String)>,
    snapshots: Vec<i32>,
    root_snapshots: Vec<i32>,
    current_snapshot: i32,
    props: HashMap<i32, Value>,
}

impl VmState {
    fn new(vmx_path: &str) -> Self {
        let mut props = HashMap::new();
        props.insert(VIX_PROPERTY_VM_NUM_VCPUS, Value::Int(2));
        props.insert(VIX_PROPERTY_VM_VMX_PATHNAME, Value::Str(vmx_path.to_string()));
        props.insert(VIX_PROPERTY_VM_MEMORY_SIZE, Value::Int(512));
        props.insert(VIX_PROPERTY_VM_READ_ONLY, Value::Bool(false));

        let mut dirs = BTreeSet::new();
        dirs.insert("/".to_string());
        dirs.insert("/tmp".to_string());

        Self {
            powered: false,
            paused: false,
            suspended: false,
            vars: HashMap::new(),
            files: HashMap::new(),
            dirs,
            folders_enabled: false,
            folders: Vec::new(),
            processes: vec![("init".to_string(), 1, "root".to_string(), "/sbin/init".to_string())],
            snapshots: Vec::new(),
            root_snapshots: Vec::new(),
            current_snapshot: 0,
            props,
        }
    }

    fn power_state(&self) -> i32 {
        if self.paused {
            VIX_POWERSTATE_PAUSED
        } else if self.powered {
            VIX_POWERSTATE_POWERED_ON
        } else if self.suspended {
            VIX_POWERSTATE_SUSPENDED
        } else {
            VIX_POWERSTATE_POWERED_OFF
        }
    }
}

struct SnapState {
    name: String,
    description: String,
    parent: i32,
    children: Vec<i32>,
}

struct JobState {
    err: VixError,
    results: HashMap<i32, Value>,
    items: Vec<HashMap<i32, Value>>,
}

enum Object {
    Host(HostState),
    Vm(VmState),
    Snapshot(SnapState),
    Job(JobState),
    PropList(HashMap<i32, Value>),
}

#[derive(Default)]
struct State {
    next_handle: i32,
    next_pid: u64,
    next_temp: u32,
    objects: HashMap<i32, Object>,
    releases: HashMap<i32, usize>,
    add_refs: HashMap<i32, usize>,
    jobs_created: Vec<i32>,
}

impl State {
    fn alloc(&mut self, object: Object) -> VixHandle {
        self.next_handle += 1;
        let raw = self.next_handle;
        self.objects.insert(raw, object);
        VixHandle(raw)
    }

    fn job(&mut self, err: VixError, results: Vec<(i32, Value)>) -> VixHandle {
        self.job_with_items(err, results, Vec::new())
    }

    fn job_with_items(
        &mut self,
        err: VixError,
        results: Vec<(i32, Value)>,
        items: Vec<HashMap<i32, Value>>,
    ) -> VixHandle {
        let handle = self.alloc(Object::Job(JobState {
            err,
            results: results.into_iter().collect(),
            items,
        }));
        self.jobs_created.push(handle.0);
        handle
    }

    fn vm(&mut self, raw: i32) -> Option<&mut VmState> {
        match self.objects.get_mut(&raw) {
            Some(Object::Vm(vm)) => Some(vm),
            _ => None,
        }
    }

    fn host(&mut self, raw: i32) -> Option<&mut HostState> {
        match self.objects.get_mut(&raw) {
            Some(Object::Host(host)) => Some(host),
            _ => None,
        }
    }
}

/// The fake library.
pub(crate) struct MockApi {
    state: Mutex<State>,
    native_calls: AtomicUsize,
}

fn split_path(path: &str) -> (String, String) {
    match path.rsplit_once('/') {
        Some(("", name)) => ("/".to_string(), name.to_string()),
        Some((parent, name)) => (parent.to_string(), name.to_string()),
        None => ("/".to_string(), path.to_string()),
    }
}

impl MockApi {
    /// Item marker whose property lookup is made to fail, for the
    /// skip-per-item tests.
    pub const BROKEN_ITEM: &'static str = "<broken>";

    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                next_handle: 100,
                next_pid: 1000,
                ..State::default()
            }),
            native_calls: AtomicUsize::new(0),
        })
    }

    fn count(&self) {
        self.native_calls.fetch_add(1, Ordering::SeqCst);
    }

    // ---- probes ----

    /// Number of native calls made so far.
    pub fn native_calls(&self) -> usize {
        self.native_calls.load(Ordering::SeqCst)
    }

    /// How many times a handle has been released.
    pub fn release_count(&self, raw: i32) -> usize {
        *self.state.lock().unwrap().releases.get(&raw).unwrap_or(&0)
    }

    /// How many times a handle has been add-ref'd.
    pub fn add_ref_count(&self, raw: i32) -> usize {
        *self.state.lock().unwrap().add_refs.get(&raw).unwrap_or(&0)
    }

    /// Whether every job handle ever issued has been released exactly once.
    pub fn all_jobs_released(&self) -> bool {
        let state = self.state.lock().unwrap();
        state
            .jobs_created
            .iter()
            .all(|job| state.releases.get(job) == Some(&1))
    }

    /// The most recently issued job handle.
    pub fn last_job(&self) -> Option<i32> {
        self.state.lock().unwrap().jobs_created.last().copied()
    }

    // ---- test seeding ----

    /// Replace the running-VM list reported by find-items.
    pub fn set_running_vms(&self, host_raw: i32, paths: &[&str]) {
        let mut state = self.state.lock().unwrap();
        if let Some(host) = state.host(host_raw) {
            host.running = paths.iter().map(|s| s.to_string()).collect();
        }
    }

    /// Seed a guest process whose per-item property retrieval fails.
    pub fn seed_broken_process(&self, vm_raw: i32) {
        let mut state = self.state.lock().unwrap();
        if let Some(vm) = state.vm(vm_raw) {
            vm.processes.push((
                Self::BROKEN_ITEM.to_string(),
                99,
                "nobody".to_string(),
                "?".to_string(),
            ));
        }
    }

    /// Seed an arbitrary property on a handle.
    pub fn seed_property(&self, raw: i32, property: i32, value: Value) {
        let mut state = self.state.lock().unwrap();
        match state.objects.get_mut(&raw) {
            Some(Object::Vm(vm)) => {
                vm.props.insert(property, value);
            }
            Some(Object::Host(host)) => {
                host.props.insert(property, value);
            }
            Some(Object::PropList(props)) => {
                props.insert(property, value);
            }
            _ => {}
        }
    }

    // ---- shared lookups ----

    /// Resolve a property of any object to its stored (or computed) value.
    fn object_property(&self, raw: i32, property: i32) -> Option<Value> {
        let state = self.state.lock().unwrap();
        match state.objects.get(&raw)? {
            Object::Host(host) => host.props.get(&property).cloned(),
            Object::Vm(vm) => match property {
                VIX_PROPERTY_VM_POWER_STATE => Some(Value::Int(vm.power_state())),
                VIX_PROPERTY_VM_IS_RUNNING => Some(Value::Bool(vm.powered)),
                VIX_PROPERTY_VM_TOOLS_STATE => Some(Value::Int(if vm.powered {
                    VIX_TOOLSSTATE_RUNNING
                } else {
                    VIX_TOOLSSTATE_NOT_INSTALLED
                })),
                _ => vm.props.get(&property).cloned(),
            },
            Object::Snapshot(snap) => match property {
                VIX_PROPERTY_SNAPSHOT_DISPLAYNAME => Some(Value::Str(snap.name.clone())),
                VIX_PROPERTY_SNAPSHOT_DESCRIPTION => Some(Value::Str(snap.description.clone())),
                VIX_PROPERTY_SNAPSHOT_IS_REPLAYABLE => Some(Value::Bool(false)),
                _ => None,
            },
            Object::PropList(props) => props.get(&property).cloned(),
            Object::Job(_) => None,
        }
    }

    /// Run a guest operation against a powered-on VM, producing its job.
    fn guest_job<F>(&self, vm_raw: i32, op: F) -> VixHandle
    where
        F: FnOnce(&mut VmState, &mut u64, &mut u32) -> (VixError, Vec<(i32, Value)>, Vec<HashMap<i32, Value>>),
    {
        let mut state = self.state.lock().unwrap();
        let mut next_pid = state.next_pid;
        let mut next_temp = state.next_temp;
        let (err, results, items) = match state.vm(vm_raw) {
            Some(vm) if vm.powered => op(vm, &mut next_pid, &mut next_temp),
            Some(_) => (VIX_E_VM_NOT_RUNNING, Vec::new(), Vec::new()),
            None => (VIX_E_INVALID_HANDLE, Vec::new(), Vec::new()),
        };
        state.next_pid = next_pid;
        state.next_temp = next_temp;
        state.job_with_items(err, results, items)
    }

    /// Run an operation against a VM regardless of power state.
    fn vm_job<F>(&self, vm_raw: i32, op: F) -> VixHandle
    where
        F: FnOnce(&mut VmState) -> (VixError, Vec<(i32, Value)>),
    {
        let mut state = self.state.lock().unwrap();
        let (err, results) = match state.vm(vm_raw) {
            Some(vm) => op(vm),
            None => (VIX_E_INVALID_HANDLE, Vec::new()),
        };
        state.job(err, results)
    }
}

impl VixApi for MockApi {
    fn release(&self, handle: VixHandle) {
        self.count();
        let mut state = self.state.lock().unwrap();
        *state.releases.entry(handle.0).or_insert(0) += 1;
        if matches!(state.objects.get(&handle.0), Some(Object::Job(_))) {
            state.objects.remove(&handle.0);
        }
    }

    fn add_ref(&self, handle: VixHandle) {
        self.count();
        let mut state = self.state.lock().unwrap();
        *state.add_refs.entry(handle.0).or_insert(0) += 1;
    }

    fn handle_type(&self, handle: VixHandle) -> i32 {
        self.count();
        let state = self.state.lock().unwrap();
        match state.objects.get(&handle.0) {
            Some(Object::Host(_)) => VIX_HANDLETYPE_HOST,
            Some(Object::Vm(_)) => VIX_HANDLETYPE_VM,
            Some(Object::Snapshot(_)) => VIX_HANDLETYPE_SNAPSHOT,
            Some(Object::Job(_)) => VIX_HANDLETYPE_JOB,
            Some(Object::PropList(_)) => VIX_HANDLETYPE_PROPERTY_LIST,
            None => VIX_HANDLETYPE_NONE,
        }
    }

    fn get_property_type(&self, handle: VixHandle, property: i32, out: &mut i32) -> VixError {
        self.count();
        match self.object_property(handle.0, property) {
            Some(value) => {
                *out = value.type_tag();
                VIX_OK
            }
            None => VIX_E_UNRECOGNIZED_PROPERTY,
        }
    }

    fn get_properties(&self, handle: VixHandle, request: &mut PropRequest<'_>) -> VixError {
        self.count();
        match self.object_property(handle.0, request.property()) {
            Some(Value::Opaque(_)) => VIX_E_TYPE_MISMATCH,
            Some(value) => value.fill(request),
            None => VIX_E_UNRECOGNIZED_PROPERTY,
        }
    }

    fn error_text(&self, code: u64) -> Option<String> {
        self.count();
        let text = match code {
            VIX_OK => "The operation was successful",
            crate::consts::VIX_E_FAIL => "Unknown error",
            VIX_E_INVALID_ARG => "One of the parameters was invalid",
            VIX_E_INVALID_HANDLE => "The handle is not a valid VIX object",
            VIX_E_FILE_NOT_FOUND => "A file was not found",
            VIX_E_NOT_FOUND => "The object is not found",
            VIX_E_ALREADY_EXISTS => "The object already exists",
            VIX_E_VM_NOT_RUNNING => "The virtual machine needs to be powered on",
            VIX_E_VM_IS_RUNNING => "The virtual machine should not be powered on",
            VIX_E_NO_SUCH_PROCESS => "No such process",
            VIX_E_NOT_A_DIRECTORY => "Not a directory",
            VIX_E_SNAPSHOT_NOTFOUND => "The named snapshot was not found",
            VIX_E_TYPE_MISMATCH => "The type of one of the parameters was incorrect",
            VIX_E_UNRECOGNIZED_PROPERTY => "Unrecognized property",
            crate::consts::VIX_E_TIMEOUT_WAITING_FOR_TOOLS => {
                "A timeout occurred while waiting for VMware Tools"
            }
            _ => return None,
        };
        Some(text.to_string())
    }

    fn job_wait(&self, job: VixHandle, results: &mut [PropRequest<'_>]) -> VixError {
        self.count();
        let state = self.state.lock().unwrap();
        let job_state = match state.objects.get(&job.0) {
            Some(Object::Job(j)) => j,
            _ => return VIX_E_INVALID_HANDLE,
        };
        if job_state.err != VIX_OK {
            return job_state.err;
        }
        for request in results {
            match job_state.results.get(&request.property()) {
                Some(value) => {
                    let err = value.fill(request);
                    if err != VIX_OK {
                        return err;
                    }
                }
                None => return VIX_E_UNRECOGNIZED_PROPERTY,
            }
        }
        VIX_OK
    }

    fn job_get_num_properties(&self, job: VixHandle, _property: i32) -> i32 {
        self.count();
        let state = self.state.lock().unwrap();
        match state.objects.get(&job.0) {
            Some(Object::Job(j)) => j.items.len() as i32,
            _ => 0,
        }
    }

    fn job_get_nth_properties(
        &self,
        job: VixHandle,
        index: i32,
        results: &mut [PropRequest<'_>],
    ) -> VixError {
        self.count();
        let state = self.state.lock().unwrap();
        let job_state = match state.objects.get(&job.0) {
            Some(Object::Job(j)) => j,
            _ => return VIX_E_INVALID_HANDLE,
        };
        let item = match job_state.items.get(index as usize) {
            Some(item) => item,
            None => return VIX_E_INVALID_ARG,
        };
        for request in results {
            match item.get(&request.property()) {
                Some(value) => {
                    let err = value.fill(request);
                    if err != VIX_OK {
                        return err;
                    }
                }
                None => return VIX_E_UNRECOGNIZED_PROPERTY,
            }
        }
        VIX_OK
    }

    fn host_connect(
        &self,
        _api_version: i32,
        host_type: i32,
        _host_name: Option<&CStr>,
        _host_port: i32,
        _user_name: Option<&CStr>,
        _password: Option<&CStr>,
        _options: i32,
    ) -> VixHandle {
        self.count();
        let mut state = self.state.lock().unwrap();
        let mut props = HashMap::new();
        props.insert(VIX_PROPERTY_HOST_HOSTTYPE, Value::Int(host_type));
        props.insert(VIX_PROPERTY_HOST_API_VERSION, Value::Int(13));
        let host = state.alloc(Object::Host(HostState {
            props,
            ..HostState::default()
        }));
        state.job(
            VIX_OK,
            vec![(VIX_PROPERTY_JOB_RESULT_HANDLE, Value::Handle(host.0))],
        )
    }

    fn host_disconnect(&self, host: VixHandle) {
        self.count();
        let mut state = self.state.lock().unwrap();
        *state.releases.entry(host.0).or_insert(0) += 1;
        state.objects.remove(&host.0);
    }

    fn host_register_vm(&self, host: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        let mut state = self.state.lock().unwrap();
        let err = match state.host(host.0) {
            Some(h) if h.registered.contains(&path) => VIX_E_ALREADY_EXISTS,
            Some(h) => {
                h.registered.push(path);
                VIX_OK
            }
            None => VIX_E_INVALID_HANDLE,
        };
        state.job(err, Vec::new())
    }

    fn host_unregister_vm(&self, host: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        let mut state = self.state.lock().unwrap();
        let err = match state.host(host.0) {
            Some(h) => match h.registered.iter().position(|p| *p == path) {
                Some(i) => {
                    h.registered.remove(i);
                    VIX_OK
                }
                None => VIX_E_NOT_FOUND,
            },
            None => VIX_E_INVALID_HANDLE,
        };
        state.job(err, Vec::new())
    }

    unsafe fn host_find_items(
        &self,
        host: VixHandle,
        search_type: i32,
        callback: VixEventProc,
        client_data: *mut c_void,
    ) -> VixHandle {
        self.count();

        // Build one event property list per found item under the lock.
        let event_handles = {
            let mut state = self.state.lock().unwrap();
            let paths = match state.host(host.0) {
                Some(h) => match search_type {
                    VIX_FIND_RUNNING_VMS => h.running.clone(),
                    VIX_FIND_REGISTERED_VMS => h.registered.clone(),
                    _ => return state.job(VIX_E_INVALID_ARG, Vec::new()),
                },
                None => return state.job(VIX_E_INVALID_HANDLE, Vec::new()),
            };
            let handles: Vec<VixHandle> = paths
                .iter()
                .map(|p| {
                    let mut props = HashMap::new();
                    // the broken item carries no location property
                    if p != Self::BROKEN_ITEM {
                        props.insert(VIX_PROPERTY_FOUND_ITEM_LOCATION, Value::Str(p.clone()));
                    }
                    state.alloc(Object::PropList(props))
                })
                .collect();
            handles
        };

        // Deliver the events without holding the lock: the callback
        // re-enters get_properties.
        if let Some(cb) = callback {
            for info in &event_handles {
                cb(0, VIX_EVENTTYPE_FIND_ITEM, info.0, client_data);
            }
        }

        let mut state = self.state.lock().unwrap();
        for info in event_handles {
            state.objects.remove(&info.0);
        }
        state.job(VIX_OK, Vec::new())
    }

    fn host_open_vm(&self, host: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        let mut state = self.state.lock().unwrap();
        if state.host(host.0).is_none() {
            return state.job(VIX_E_INVALID_HANDLE, Vec::new());
        }
        let vm = state.alloc(Object::Vm(VmState::new(&path)));
        state.job(
            VIX_OK,
            vec![(VIX_PROPERTY_JOB_RESULT_HANDLE, Value::Handle(vm.0))],
        )
    }

    fn vm_power_on(&self, vm: VixHandle, _options: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                (VIX_E_VM_IS_RUNNING, Vec::new())
            } else {
                vm.powered = true;
                vm.suspended = false;
                (VIX_OK, Vec::new())
            }
        })
    }

    fn vm_power_off(&self, vm: VixHandle, _options: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                vm.powered = false;
                vm.paused = false;
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_reset(&self, vm: VixHandle, _options: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_suspend(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                vm.powered = false;
                vm.suspended = true;
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_pause(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                vm.paused = true;
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_unpause(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.paused {
                vm.paused = false;
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_delete(&self, vm: VixHandle, _options: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                (VIX_E_VM_IS_RUNNING, Vec::new())
            } else {
                (VIX_OK, Vec::new())
            }
        })
    }

    fn vm_wait_for_tools(&self, vm: VixHandle, _timeout_seconds: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_login(&self, vm: VixHandle, _user: &CStr, _password: &CStr, _options: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                (VIX_OK, Vec::new())
            } else {
                (VIX_E_VM_NOT_RUNNING, Vec::new())
            }
        })
    }

    fn vm_logout(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |_| (VIX_OK, Vec::new()))
    }

    fn vm_run_program(
        &self,
        vm: VixHandle,
        program: &CStr,
        command_line: &CStr,
        _options: i32,
    ) -> VixHandle {
        self.count();
        let program = program.to_string_lossy().into_owned();
        let command_line = command_line.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, next_pid, _| {
            *next_pid += 1;
            let pid = *next_pid;
            let exit_code = if program.ends_with("false") { 1 } else { 0 };
            let (_, name) = split_path(&program);
            vm.processes.push((
                name,
                pid,
                "root".to_string(),
                format!("{program} {command_line}").trim_end().to_string(),
            ));
            (
                VIX_OK,
                vec![
                    (VIX_PROPERTY_JOB_RESULT_PROCESS_ID, Value::Uint64(pid)),
                    (
                        VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE,
                        Value::Int(exit_code),
                    ),
                ],
                Vec::new(),
            )
        })
    }

    fn vm_run_script(
        &self,
        vm: VixHandle,
        _interpreter: &CStr,
        script_text: &CStr,
        _options: i32,
    ) -> VixHandle {
        self.count();
        let text = script_text.to_string_lossy().into_owned();
        self.guest_job(vm.0, |_, next_pid, _| {
            *next_pid += 1;
            let exit_code = if text.contains("exit 1") { 1 } else { 0 };
            (
                VIX_OK,
                vec![
                    (VIX_PROPERTY_JOB_RESULT_PROCESS_ID, Value::Uint64(*next_pid)),
                    (
                        VIX_PROPERTY_JOB_RESULT_GUEST_PROGRAM_EXIT_CODE,
                        Value::Int(exit_code),
                    ),
                ],
                Vec::new(),
            )
        })
    }

    fn vm_list_processes(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.guest_job(vm.0, |vm, _, _| {
            let items = vm
                .processes
                .iter()
                .map(|(name, pid, owner, command)| {
                    let mut item = HashMap::new();
                    item.insert(VIX_PROPERTY_JOB_RESULT_ITEM_NAME, Value::Str(name.clone()));
                    item.insert(VIX_PROPERTY_JOB_RESULT_PROCESS_ID, Value::Uint64(*pid));
                    // the broken item lacks its remaining properties
                    if name != MockApi::BROKEN_ITEM {
                        item.insert(
                            VIX_PROPERTY_JOB_RESULT_PROCESS_OWNER,
                            Value::Str(owner.clone()),
                        );
                        item.insert(
                            VIX_PROPERTY_JOB_RESULT_PROCESS_COMMAND,
                            Value::Str(command.clone()),
                        );
                    }
                    item
                })
                .collect();
            (VIX_OK, Vec::new(), items)
        })
    }

    fn vm_kill_process(&self, vm: VixHandle, pid: u64) -> VixHandle {
        self.count();
        self.guest_job(vm.0, |vm, _, _| {
            match vm.processes.iter().position(|(_, p, _, _)| *p == pid) {
                Some(i) => {
                    vm.processes.remove(i);
                    (VIX_OK, Vec::new(), Vec::new())
                }
                None => (VIX_E_NO_SUCH_PROCESS, Vec::new(), Vec::new()),
            }
        })
    }

    fn vm_copy_file_to_guest(
        &self,
        vm: VixHandle,
        _host_path: &CStr,
        guest_path: &CStr,
    ) -> VixHandle {
        self.count();
        let guest_path = guest_path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            vm.files.insert(guest_path.clone(), 4096);
            (VIX_OK, Vec::new(), Vec::new())
        })
    }

    fn vm_copy_file_from_guest(
        &self,
        vm: VixHandle,
        guest_path: &CStr,
        _host_path: &CStr,
    ) -> VixHandle {
        self.count();
        let guest_path = guest_path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if vm.files.contains_key(&guest_path) {
                (VIX_OK, Vec::new(), Vec::new())
            } else {
                (VIX_E_FILE_NOT_FOUND, Vec::new(), Vec::new())
            }
        })
    }

    fn vm_delete_file(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if vm.files.remove(&path).is_some() {
                (VIX_OK, Vec::new(), Vec::new())
            } else {
                (VIX_E_FILE_NOT_FOUND, Vec::new(), Vec::new())
            }
        })
    }

    fn vm_file_exists(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            let exists = vm.files.contains_key(&path);
            (
                VIX_OK,
                vec![(
                    VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS,
                    Value::Int(exists as i32),
                )],
                Vec::new(),
            )
        })
    }

    fn vm_rename_file(&self, vm: VixHandle, old_name: &CStr, new_name: &CStr) -> VixHandle {
        self.count();
        let old_name = old_name.to_string_lossy().into_owned();
        let new_name = new_name.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if let Some(size) = vm.files.remove(&old_name) {
                vm.files.insert(new_name.clone(), size);
                (VIX_OK, Vec::new(), Vec::new())
            } else if vm.dirs.remove(&old_name) {
                vm.dirs.insert(new_name.clone());
                (VIX_OK, Vec::new(), Vec::new())
            } else {
                (VIX_E_FILE_NOT_FOUND, Vec::new(), Vec::new())
            }
        })
    }

    fn vm_create_temp_file(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.guest_job(vm.0, |vm, _, next_temp| {
            *next_temp += 1;
            let path = format!("/tmp/vix-temp-{next_temp}");
            vm.files.insert(path.clone(), 0);
            (
                VIX_OK,
                vec![(VIX_PROPERTY_JOB_RESULT_ITEM_NAME, Value::Str(path))],
                Vec::new(),
            )
        })
    }

    fn vm_get_file_info(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if let Some(size) = vm.files.get(&path) {
                (
                    VIX_OK,
                    vec![
                        (VIX_PROPERTY_JOB_RESULT_FILE_FLAGS, Value::Int(0)),
                        (VIX_PROPERTY_JOB_RESULT_FILE_SIZE, Value::Int64(*size)),
                    ],
                    Vec::new(),
                )
            } else if vm.dirs.contains(&path) {
                (
                    VIX_OK,
                    vec![
                        (
                            VIX_PROPERTY_JOB_RESULT_FILE_FLAGS,
                            Value::Int(VIX_FILE_ATTRIBUTES_DIRECTORY),
                        ),
                        (VIX_PROPERTY_JOB_RESULT_FILE_SIZE, Value::Int64(0)),
                    ],
                    Vec::new(),
                )
            } else {
                (VIX_E_FILE_NOT_FOUND, Vec::new(), Vec::new())
            }
        })
    }

    fn vm_list_directory(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if !vm.dirs.contains(&path) {
                return (VIX_E_NOT_A_DIRECTORY, Vec::new(), Vec::new());
            }
            let items = vm
                .files
                .keys()
                .chain(vm.dirs.iter())
                .filter_map(|entry| {
                    let (parent, name) = split_path(entry);
                    (parent == path && !name.is_empty()).then(|| {
                        let mut item = HashMap::new();
                        item.insert(VIX_PROPERTY_JOB_RESULT_ITEM_NAME, Value::Str(name));
                        item
                    })
                })
                .collect();
            (VIX_OK, Vec::new(), items)
        })
    }

    fn vm_create_directory(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if vm.dirs.insert(path.clone()) {
                (VIX_OK, Vec::new(), Vec::new())
            } else {
                (VIX_E_ALREADY_EXISTS, Vec::new(), Vec::new())
            }
        })
    }

    fn vm_delete_directory(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            if vm.dirs.remove(&path) {
                (VIX_OK, Vec::new(), Vec::new())
            } else {
                (VIX_E_FILE_NOT_FOUND, Vec::new(), Vec::new())
            }
        })
    }

    fn vm_directory_exists(&self, vm: VixHandle, path: &CStr) -> VixHandle {
        self.count();
        let path = path.to_string_lossy().into_owned();
        self.guest_job(vm.0, |vm, _, _| {
            let exists = vm.dirs.contains(&path);
            (
                VIX_OK,
                vec![(
                    VIX_PROPERTY_JOB_RESULT_GUEST_OBJECT_EXISTS,
                    Value::Int(exists as i32),
                )],
                Vec::new(),
            )
        })
    }

    fn vm_read_variable(&self, vm: VixHandle, scope: i32, name: &CStr) -> VixHandle {
        self.count();
        let name = name.to_string_lossy().into_owned();
        self.vm_job(vm.0, |vm| {
            let value = vm
                .vars
                .get(&(scope, name.clone()))
                .cloned()
                .unwrap_or_default();
            (
                VIX_OK,
                vec![(
                    VIX_PROPERTY_JOB_RESULT_VM_VARIABLE_STRING,
                    Value::Str(value),
                )],
            )
        })
    }

    fn vm_write_variable(
        &self,
        vm: VixHandle,
        scope: i32,
        name: &CStr,
        value: &CStr,
    ) -> VixHandle {
        self.count();
        let name = name.to_string_lossy().into_owned();
        let value = value.to_string_lossy().into_owned();
        self.vm_job(vm.0, |vm| {
            vm.vars.insert((scope, name.clone()), value.clone());
            (VIX_OK, Vec::new())
        })
    }

    fn vm_enable_shared_folders(&self, vm: VixHandle, enabled: bool) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            vm.folders_enabled = enabled;
            (VIX_OK, Vec::new())
        })
    }

    fn vm_get_num_shared_folders(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            (
                VIX_OK,
                vec![(
                    VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_COUNT,
                    Value::Int(vm.folders.len() as i32),
                )],
            )
        })
    }

    fn vm_get_shared_folder_state(&self, vm: VixHandle, index: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| match vm.folders.get(index as usize) {
            Some((name, host_path, flags)) => (
                VIX_OK,
                vec![
                    (VIX_PROPERTY_JOB_RESULT_ITEM_NAME, Value::Str(name.clone())),
                    (
                        VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_HOST,
                        Value::Str(host_path.clone()),
                    ),
                    (VIX_PROPERTY_JOB_RESULT_SHARED_FOLDER_FLAGS, Value::Int(*flags)),
                ],
            ),
            None => (VIX_E_INVALID_ARG, Vec::new()),
        })
    }

    fn vm_set_shared_folder_state(
        &self,
        vm: VixHandle,
        name: &CStr,
        host_path: &CStr,
        flags: i32,
    ) -> VixHandle {
        self.count();
        let name = name.to_string_lossy().into_owned();
        let host_path = host_path.to_string_lossy().into_owned();
        self.vm_job(vm.0, |vm| {
            match vm.folders.iter_mut().find(|(n, _, _)| *n == name) {
                Some(folder) => {
                    folder.1 = host_path.clone();
                    folder.2 = flags;
                    (VIX_OK, Vec::new())
                }
                None => (VIX_E_NOT_FOUND, Vec::new()),
            }
        })
    }

    fn vm_add_shared_folder(
        &self,
        vm: VixHandle,
        name: &CStr,
        host_path: &CStr,
        flags: i32,
    ) -> VixHandle {
        self.count();
        let name = name.to_string_lossy().into_owned();
        let host_path = host_path.to_string_lossy().into_owned();
        self.vm_job(vm.0, |vm| {
            if vm.folders.iter().any(|(n, _, _)| *n == name) {
                (VIX_E_ALREADY_EXISTS, Vec::new())
            } else {
                vm.folders.push((name.clone(), host_path.clone(), flags));
                (VIX_OK, Vec::new())
            }
        })
    }

    fn vm_remove_shared_folder(&self, vm: VixHandle, name: &CStr) -> VixHandle {
        self.count();
        let name = name.to_string_lossy().into_owned();
        self.vm_job(vm.0, |vm| {
            match vm.folders.iter().position(|(n, _, _)| *n == name) {
                Some(i) => {
                    vm.folders.remove(i);
                    (VIX_OK, Vec::new())
                }
                None => (VIX_E_NOT_FOUND, Vec::new()),
            }
        })
    }

    fn vm_get_num_root_snapshots(&self, vm: VixHandle, out: &mut i32) -> VixError {
        self.count();
        let mut state = self.state.lock().unwrap();
        match state.vm(vm.0) {
            Some(vm) => {
                *out = vm.root_snapshots.len() as i32;
                VIX_OK
            }
            None => VIX_E_INVALID_HANDLE,
        }
    }

    fn vm_get_root_snapshot(&self, vm: VixHandle, index: i32, out: &mut VixHandle) -> VixError {
        self.count();
        let mut state = self.state.lock().unwrap();
        match state.vm(vm.0) {
            Some(vm) => match vm.root_snapshots.get(index as usize) {
                Some(snap) => {
                    *out = VixHandle(*snap);
                    VIX_OK
                }
                None => VIX_E_INVALID_ARG,
            },
            None => VIX_E_INVALID_HANDLE,
        }
    }

    fn vm_get_current_snapshot(&self, vm: VixHandle, out: &mut VixHandle) -> VixError {
        self.count();
        let mut state = self.state.lock().unwrap();
        match state.vm(vm.0) {
            Some(vm) if vm.current_snapshot != 0 => {
                *out = VixHandle(vm.current_snapshot);
                VIX_OK
            }
            Some(_) => VIX_E_SNAPSHOT_NOTFOUND,
            None => VIX_E_INVALID_HANDLE,
        }
    }

    fn vm_get_named_snapshot(&self, vm: VixHandle, name: &CStr, out: &mut VixHandle) -> VixError {
        self.count();
        let name = name.to_string_lossy().into_owned();
        let mut state = self.state.lock().unwrap();
        let snapshots = match state.vm(vm.0) {
            Some(vm) => vm.snapshots.clone(),
            None => return VIX_E_INVALID_HANDLE,
        };
        for raw in snapshots {
            if let Some(Object::Snapshot(snap)) = state.objects.get(&raw) {
                if snap.name == name {
                    *out = VixHandle(raw);
                    return VIX_OK;
                }
            }
        }
        VIX_E_SNAPSHOT_NOTFOUND
    }

    fn vm_remove_snapshot(&self, vm: VixHandle, snapshot: VixHandle, _options: i32) -> VixHandle {
        self.count();
        let mut state = self.state.lock().unwrap();

        let parent = match state.objects.get(&snapshot.0) {
            Some(Object::Snapshot(snap)) => snap.parent,
            _ => {
                return state.job(VIX_E_INVALID_HANDLE, Vec::new());
            }
        };

        if let Some(Object::Snapshot(parent_snap)) = state.objects.get_mut(&parent) {
            parent_snap.children.retain(|c| *c != snapshot.0);
        }
        let err = match state.vm(vm.0) {
            Some(vm) => {
                vm.snapshots.retain(|s| *s != snapshot.0);
                vm.root_snapshots.retain(|s| *s != snapshot.0);
                if vm.current_snapshot == snapshot.0 {
                    vm.current_snapshot = parent;
                }
                VIX_OK
            }
            None => VIX_E_INVALID_HANDLE,
        };
        state.objects.remove(&snapshot.0);
        state.job(err, Vec::new())
    }

    fn vm_revert_to_snapshot(
        &self,
        vm: VixHandle,
        snapshot: VixHandle,
        _options: i32,
    ) -> VixHandle {
        self.count();
        let mut state = self.state.lock().unwrap();
        if !matches!(state.objects.get(&snapshot.0), Some(Object::Snapshot(_))) {
            return state.job(VIX_E_INVALID_HANDLE, Vec::new());
        }
        let err = match state.vm(vm.0) {
            Some(vm) => {
                vm.current_snapshot = snapshot.0;
                VIX_OK
            }
            None => VIX_E_INVALID_HANDLE,
        };
        state.job(err, Vec::new())
    }

    fn vm_create_snapshot(
        &self,
        vm: VixHandle,
        name: &CStr,
        description: &CStr,
        _options: i32,
    ) -> VixHandle {
        self.count();
        let name = name.to_string_lossy().into_owned();
        let description = description.to_string_lossy().into_owned();
        let mut state = self.state.lock().unwrap();

        let parent = match state.vm(vm.0) {
            Some(vm) => vm.current_snapshot,
            None => return state.job(VIX_E_INVALID_HANDLE, Vec::new()),
        };

        let snap = state.alloc(Object::Snapshot(SnapState {
            name,
            description,
            parent,
            children: Vec::new(),
        }));

        if let Some(Object::Snapshot(parent_snap)) = state.objects.get_mut(&parent) {
            parent_snap.children.push(snap.0);
        }
        if let Some(vm) = state.vm(vm.0) {
            vm.snapshots.push(snap.0);
            if parent == 0 {
                vm.root_snapshots.push(snap.0);
            }
            vm.current_snapshot = snap.0;
        }

        state.job(
            VIX_OK,
            vec![(VIX_PROPERTY_JOB_RESULT_HANDLE, Value::Handle(snap.0))],
        )
    }

    fn snapshot_get_num_children(&self, snapshot: VixHandle, out: &mut i32) -> VixError {
        self.count();
        let state = self.state.lock().unwrap();
        match state.objects.get(&snapshot.0) {
            Some(Object::Snapshot(snap)) => {
                *out = snap.children.len() as i32;
                VIX_OK
            }
            _ => VIX_E_INVALID_HANDLE,
        }
    }

    fn snapshot_get_child(&self, snapshot: VixHandle, index: i32, out: &mut VixHandle) -> VixError {
        self.count();
        let state = self.state.lock().unwrap();
        match state.objects.get(&snapshot.0) {
            Some(Object::Snapshot(snap)) => match snap.children.get(index as usize) {
                Some(child) => {
                    *out = VixHandle(*child);
                    VIX_OK
                }
                None => VIX_E_INVALID_ARG,
            },
            _ => VIX_E_INVALID_HANDLE,
        }
    }

    fn snapshot_get_parent(&self, snapshot: VixHandle, out: &mut VixHandle) -> VixError {
        self.count();
        let state = self.state.lock().unwrap();
        match state.objects.get(&snapshot.0) {
            Some(Object::Snapshot(snap)) if snap.parent != 0 => {
                *out = VixHandle(snap.parent);
                VIX_OK
            }
            Some(Object::Snapshot(_)) => VIX_E_SNAPSHOT_NOTFOUND,
            _ => VIX_E_INVALID_HANDLE,
        }
    }

    fn vm_capture_screen_image(&self, vm: VixHandle, _format: i32) -> VixHandle {
        self.count();
        self.guest_job(vm.0, |_, _, _| {
            (
                VIX_OK,
                vec![(
                    VIX_PROPERTY_JOB_RESULT_SCREEN_IMAGE_DATA,
                    Value::Blob(b"\x89PNG\r\n\x1a\nmock-frame".to_vec()),
                )],
                Vec::new(),
            )
        })
    }

    fn vm_upgrade_virtual_hardware(&self, vm: VixHandle) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |vm| {
            if vm.powered {
                (VIX_E_VM_IS_RUNNING, Vec::new())
            } else {
                (VIX_OK, Vec::new())
            }
        })
    }

    fn vm_install_tools(&self, vm: VixHandle, _options: i32) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |_| (VIX_OK, Vec::new()))
    }

    fn vm_clone(
        &self,
        vm: VixHandle,
        _snapshot: VixHandle,
        _clone_type: i32,
        _dest_config_path: &CStr,
    ) -> VixHandle {
        self.count();
        self.vm_job(vm.0, |_| (VIX_OK, Vec::new()))
    }
}

//! Host connections.

use std::os::raw::c_void;
use std::sync::Arc;

use tracing::debug;

use crate::consts::{
    VIX_API_VERSION, VIX_EVENTTYPE_FIND_ITEM, VIX_FIND_REGISTERED_VMS, VIX_FIND_RUNNING_VMS,
    VIX_PROPERTY_FOUND_ITEM_LOCATION, VIX_PROPERTY_HOST_API_VERSION, VIX_PROPERTY_HOST_HOSTTYPE,
    VIX_PROPERTY_JOB_RESULT_HANDLE,
};
use crate::error::{Error, Result};
use crate::ffi::{cstr, succeeded, PropRequest, VixApi, VixHandle};
use crate::job::Job;
use crate::props::{self, PropertyValue};
use crate::types::{ConnectOptions, ServiceProvider};
use crate::vm::Vm;

/// A connection to a VMware product.
///
/// The connection is closed on drop. Opening a VM hands back a caller-owned
/// [`Vm`]; the host can be dropped before the VMs opened through it.
///
/// # Example
///
/// ```no_run
/// # #[cfg(feature = "vmware-sdk")]
/// # fn example() -> vix::Result<()> {
/// use vix::{Host, ServiceProvider};
///
/// let host = Host::connect(ServiceProvider::Workstation, None)?;
/// for url in host.running_vms()? {
///     println!("running: {url}");
/// }
/// let vm = host.open_vm("/vms/dev/dev.vmx")?;
/// # Ok(())
/// # }
/// ```
pub struct Host {
    api: Arc<dyn VixApi>,
    handle: VixHandle,
}

/// Accumulator threaded through the find-items callback as client data.
struct FindAccumulator<'a> {
    api: &'a dyn VixApi,
    items: Vec<String>,
}

/// Per-item callback invoked by the library during a find-items job.
///
/// A failed location lookup skips that one item; nothing may unwind or
/// propagate an error across the native call boundary.
unsafe extern "C" fn find_items_proc(
    _job: i32,
    event_type: i32,
    more_event_info: i32,
    client_data: *mut c_void,
) {
    if event_type != VIX_EVENTTYPE_FIND_ITEM {
        return;
    }

    let acc = &mut *(client_data as *mut FindAccumulator<'_>);
    let mut location = String::new();
    let err = acc.api.get_properties(
        VixHandle(more_event_info),
        &mut PropRequest::Str(VIX_PROPERTY_FOUND_ITEM_LOCATION, &mut location),
    );
    if succeeded(err) {
        acc.items.push(location);
    }
}

impl Host {
    /// Connect to a VMware product.
    ///
    /// Local products need only the provider; remote providers take the
    /// host/credentials through [`ConnectOptions`]. Returns a connected
    /// host whose handle the caller owns.
    #[cfg(feature = "vmware-sdk")]
    pub fn connect(provider: ServiceProvider, options: Option<ConnectOptions>) -> Result<Self> {
        Self::connect_with(Arc::new(crate::ffi::sdk::SdkApi), provider, options)
    }

    pub(crate) fn connect_with(
        api: Arc<dyn VixApi>,
        provider: ServiceProvider,
        options: Option<ConnectOptions>,
    ) -> Result<Self> {
        let opts = options.unwrap_or_default();
        let host_c = opts
            .host
            .as_deref()
            .map(|s| cstr("host", s))
            .transpose()?;
        let user_c = opts
            .username
            .as_deref()
            .map(|s| cstr("username", s))
            .transpose()?;
        let pass_c = opts
            .password
            .as_deref()
            .map(|s| cstr("password", s))
            .transpose()?;

        let job = Job::new(
            api.clone(),
            api.host_connect(
                VIX_API_VERSION,
                provider.into(),
                host_c.as_deref(),
                opts.port,
                user_c.as_deref(),
                pass_c.as_deref(),
                0,
            ),
        );

        let mut handle = VixHandle::invalid();
        job.wait(&mut [PropRequest::Handle(
            VIX_PROPERTY_JOB_RESULT_HANDLE,
            &mut handle,
        )])?;

        debug!(host = handle.0, ?provider, "connected");
        Ok(Self { api, handle })
    }

    /// Raw handle value, for use with the generic introspection calls.
    pub fn handle(&self) -> i32 {
        self.handle.0
    }

    /// Handle type as reported by the library (`VIX_HANDLETYPE_*`).
    pub fn handle_type(&self) -> i32 {
        self.api.handle_type(self.handle)
    }

    /// Open a virtual machine by its .vmx path.
    ///
    /// The returned [`Vm`] owns its handle and releases it on drop.
    pub fn open_vm(&self, vmx_path: &str) -> Result<Vm> {
        self.ensure_open()?;
        let path_c = cstr("vmx_path", vmx_path)?;

        let job = Job::new(self.api.clone(), self.api.host_open_vm(self.handle, &path_c));
        let mut vm = VixHandle::invalid();
        job.wait(&mut [PropRequest::Handle(VIX_PROPERTY_JOB_RESULT_HANDLE, &mut vm)])?;

        debug!(vm = vm.0, vmx_path, "opened VM");
        Ok(Vm::new(self.api.clone(), vm))
    }

    /// Register a VM with the host inventory (server products only).
    pub fn register_vm(&self, vmx_path: &str) -> Result<()> {
        self.ensure_open()?;
        let path_c = cstr("vmx_path", vmx_path)?;
        Job::new(
            self.api.clone(),
            self.api.host_register_vm(self.handle, &path_c),
        )
        .wait(&mut [])
    }

    /// Remove a VM from the host inventory (server products only).
    pub fn unregister_vm(&self, vmx_path: &str) -> Result<()> {
        self.ensure_open()?;
        let path_c = cstr("vmx_path", vmx_path)?;
        Job::new(
            self.api.clone(),
            self.api.host_unregister_vm(self.handle, &path_c),
        )
        .wait(&mut [])
    }

    /// List the .vmx paths of running VMs.
    pub fn running_vms(&self) -> Result<Vec<String>> {
        self.find_items(VIX_FIND_RUNNING_VMS)
    }

    /// List the .vmx paths of registered VMs (server products only).
    pub fn registered_vms(&self) -> Result<Vec<String>> {
        self.find_items(VIX_FIND_REGISTERED_VMS)
    }

    /// Run a find-items enumeration, accumulating found-item locations
    /// across the per-item callback invocations.
    fn find_items(&self, search_type: i32) -> Result<Vec<String>> {
        self.ensure_open()?;

        let mut acc = FindAccumulator {
            api: self.api.as_ref(),
            items: Vec::new(),
        };

        // The accumulator outlives the job: the library only invokes the
        // callback before the find job completes.
        let job = Job::new(self.api.clone(), unsafe {
            self.api.host_find_items(
                self.handle,
                search_type,
                Some(find_items_proc),
                &mut acc as *mut FindAccumulator<'_> as *mut c_void,
            )
        });
        job.wait(&mut [])?;

        Ok(acc.items)
    }

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

    /// API version of the connected product.
    pub fn api_version(&self) -> Result<i32> {
        self.ensure_open()?;
        props::int(self.api.as_ref(), self.handle, VIX_PROPERTY_HOST_API_VERSION)
    }

    /// Host type of the connected product.
    pub fn host_type(&self) -> Result<i32> {
        self.ensure_open()?;
        props::int(self.api.as_ref(), self.handle, VIX_PROPERTY_HOST_HOSTTYPE)
    }

    /// Disconnect from the host.
    ///
    /// Called automatically on drop. After disconnecting, VMs opened through
    /// this host keep their own handles but guest operations will fail.
    pub fn disconnect(&mut self) {
        if self.handle.is_valid() {
            debug!(host = self.handle.0, "disconnecting");
            self.api.host_disconnect(self.handle);
            self.handle = VixHandle::invalid();
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.handle.is_valid() {
            Ok(())
        } else {
            Err(Error::AlreadyClosed)
        }
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.disconnect();
    }
}

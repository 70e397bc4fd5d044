//! Snapshot tree navigation.

use std::sync::Arc;

use crate::consts::{
    VIX_PROPERTY_SNAPSHOT_DESCRIPTION, VIX_PROPERTY_SNAPSHOT_DISPLAYNAME,
    VIX_PROPERTY_SNAPSHOT_IS_REPLAYABLE,
};
use crate::error::{Error, Result};
use crate::ffi::{check, VixApi, VixHandle};
use crate::props::{self, PropertyValue};

/// A snapshot of a virtual machine.
///
/// Obtained from the snapshot accessors on [`Vm`](crate::Vm). Owns its
/// handle and releases it on drop; `clone()` takes an additional reference
/// on the same underlying handle. Snapshots form a tree navigated with
/// [`parent`](Self::parent) and [`child`](Self::child).
pub struct Snapshot {
    api: Arc<dyn VixApi>,
    handle: VixHandle,
}

impl Snapshot {
    pub(crate) fn new(api: Arc<dyn VixApi>, handle: VixHandle) -> Self {
        Self { api, handle }
    }

    pub(crate) fn raw_handle(&self) -> VixHandle {
        self.handle
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

    /// Number of child snapshots.
    pub fn num_children(&self) -> Result<i32> {
        self.ensure_open()?;
        let mut n = 0i32;
        check(
            self.api.as_ref(),
            self.api.snapshot_get_num_children(self.handle, &mut n),
        )?;
        Ok(n)
    }

    /// Child snapshot at `index`. The returned snapshot owns its handle.
    pub fn child(&self, index: i32) -> Result<Snapshot> {
        self.ensure_open()?;
        let mut h = VixHandle::invalid();
        check(
            self.api.as_ref(),
            self.api.snapshot_get_child(self.handle, index, &mut h),
        )?;
        Ok(Snapshot::new(self.api.clone(), h))
    }

    /// Parent snapshot. Fails for a root snapshot.
    pub fn parent(&self) -> Result<Snapshot> {
        self.ensure_open()?;
        let mut h = VixHandle::invalid();
        check(
            self.api.as_ref(),
            self.api.snapshot_get_parent(self.handle, &mut h),
        )?;
        Ok(Snapshot::new(self.api.clone(), h))
    }

    /// Display name given at creation time.
    pub fn display_name(&self) -> Result<String> {
        self.ensure_open()?;
        props::string(self.api.as_ref(), self.handle, VIX_PROPERTY_SNAPSHOT_DISPLAYNAME)
    }

    /// Description given at creation time.
    pub fn description(&self) -> Result<String> {
        self.ensure_open()?;
        props::string(self.api.as_ref(), self.handle, VIX_PROPERTY_SNAPSHOT_DESCRIPTION)
    }

    /// Whether the snapshot can seed a replay.
    pub fn is_replayable(&self) -> Result<bool> {
        self.ensure_open()?;
        props::boolean(
            self.api.as_ref(),
            self.handle,
            VIX_PROPERTY_SNAPSHOT_IS_REPLAYABLE,
        )
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
}

impl Clone for Snapshot {
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

impl Drop for Snapshot {
    fn drop(&mut self) {
        if self.handle.is_valid() {
            self.api.release(self.handle);
            self.handle = VixHandle::invalid();
        }
    }
}

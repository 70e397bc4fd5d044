//! Asynchronous job handling.
//!
//! Every asynchronous VIX entry point hands back a job handle that must be
//! waited on to retrieve typed result properties and must be released
//! exactly once afterwards, on success and failure alike. [`Job`] encodes
//! that contract: `wait` consumes the job so it cannot be waited twice, and
//! `Drop` performs the release on every exit path.

use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::ffi::{check, PropRequest, VixApi, VixHandle};

pub(crate) struct Job {
    api: Arc<dyn VixApi>,
    handle: VixHandle,
}

impl Job {
    pub fn new(api: Arc<dyn VixApi>, handle: VixHandle) -> Self {
        Self { api, handle }
    }

    /// Block until the job completes, fetching the requested result
    /// properties in the same wait call.
    pub fn wait(self, results: &mut [PropRequest<'_>]) -> Result<()> {
        let err = self.api.job_wait(self.handle, results);
        trace!(job = self.handle.0, code = err, "job completed");
        check(self.api.as_ref(), err)
        // the handle is released by Drop
    }

    /// Block until completion, keeping the job alive so per-item results can
    /// be read with [`num_items`](Self::num_items) /
    /// [`nth_item`](Self::nth_item).
    pub fn wait_for_items(&self) -> Result<()> {
        let err = self.api.job_wait(self.handle, &mut []);
        trace!(job = self.handle.0, code = err, "enumeration job completed");
        check(self.api.as_ref(), err)
    }

    /// Number of per-item results carrying the given property.
    pub fn num_items(&self, property: i32) -> i32 {
        self.api.job_get_num_properties(self.handle, property)
    }

    /// Fetch one item's properties from a completed enumeration job.
    pub fn nth_item(&self, index: i32, results: &mut [PropRequest<'_>]) -> Result<()> {
        let err = self.api.job_get_nth_properties(self.handle, index, results);
        check(self.api.as_ref(), err)
    }
}

impl Drop for Job {
    fn drop(&mut self) {
        if self.handle.is_valid() {
            self.api.release(self.handle);
            self.handle = VixHandle::invalid();
        }
    }
}

//! Error types for the vix crate.

use thiserror::Error;

use crate::consts;

/// Result type alias for vix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vix operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A native VIX operation failed. `code` is the numeric error category
    /// (the low bits of the 64-bit error value) and `message` is the
    /// library's error text, falling back to "Unknown". Rendered as
    /// `"<message> : (<code>)"`.
    #[error("{message} : ({code})")]
    Vix {
        /// Numeric error category; compare against the `VIX_E_*` constants.
        code: u64,
        /// Error text from the library.
        message: String,
    },

    /// The operation was removed from the underlying product and always
    /// fails, without any native call being made.
    #[error("Unsupported API")]
    Unsupported,

    /// An argument could not be passed to the native layer. Raised before
    /// any native call or handle allocation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A property's declared type is none of the decodable property types.
    #[error("property {property} has undecodable type {property_type}")]
    PropertyType {
        /// Property id that was queried.
        property: i32,
        /// Declared type reported by the library.
        property_type: i32,
    },

    /// Operation on a wrapper that was explicitly closed.
    #[error("already closed")]
    AlreadyClosed,
}

impl Error {
    /// The native error category, if this error originated in the library.
    pub fn code(&self) -> Option<u64> {
        match self {
            Error::Vix { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if this is the tools-wait timeout category.
    ///
    /// The wait-for-tools operation reports timeout and genuine failure
    /// through the same error path; this helper only distinguishes the
    /// category the library reported.
    pub fn is_timeout(&self) -> bool {
        self.code() == Some(consts::VIX_E_TIMEOUT_WAITING_FOR_TOOLS)
    }

    /// Check if this is an object-not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.code(),
            Some(consts::VIX_E_NOT_FOUND)
                | Some(consts::VIX_E_FILE_NOT_FOUND)
                | Some(consts::VIX_E_OBJECT_NOT_FOUND)
                | Some(consts::VIX_E_VM_NOT_FOUND)
                | Some(consts::VIX_E_SNAPSHOT_NOTFOUND)
        )
    }

    /// Check if this is the fixed unsupported-operation error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported)
    }

    /// Check if this is a guest authentication failure.
    pub fn is_authentication_failure(&self) -> bool {
        self.code() == Some(consts::VIX_E_AUTHENTICATION_FAIL)
    }
}

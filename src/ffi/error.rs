//! Translation of native error values into [`Error`].

use crate::error::Error;
use crate::ffi::{error_code, succeeded, VixApi, VixError};

/// Convert a non-zero native error value into an [`Error::Vix`].
///
/// The message comes from the library's error-text lookup; "Unknown" when
/// the lookup yields nothing. Stateless: a pure function of the error value.
pub(crate) fn error_from_vix(api: &dyn VixApi, err: VixError) -> Error {
    let code = error_code(err);
    let message = api
        .error_text(code)
        .unwrap_or_else(|| "Unknown".to_string());
    Error::Vix { code, message }
}

/// Check a native result and convert failure into an error.
pub(crate) fn check(api: &dyn VixApi, err: VixError) -> crate::Result<()> {
    if succeeded(err) {
        Ok(())
    } else {
        Err(error_from_vix(api, err))
    }
}

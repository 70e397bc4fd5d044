//! Generic property decoding.
//!
//! Properties are typed named values attached to a handle. The declared type
//! is queried first, then the value is decoded per type; a declared type
//! outside the known set is an error, never a silent default.

use crate::consts::{
    VIX_PROPERTYTYPE_ANY, VIX_PROPERTYTYPE_BLOB, VIX_PROPERTYTYPE_BOOL, VIX_PROPERTYTYPE_HANDLE,
    VIX_PROPERTYTYPE_INT64, VIX_PROPERTYTYPE_INTEGER, VIX_PROPERTYTYPE_STRING,
};
use crate::error::{Error, Result};
use crate::ffi::{check, PropRequest, VixApi, VixHandle};

/// A decoded property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Native-width signed integer.
    Integer(i32),
    /// Text, copied out of the library buffer.
    Str(String),
    /// Two-valued result.
    Bool(bool),
    /// Wide integer.
    Int64(i64),
    /// Byte sequence of explicit length.
    Blob(Vec<u8>),
    /// Nested handle value.
    Handle(i32),
}

impl PropertyValue {
    /// The `VIX_PROPERTYTYPE_*` tag matching this value.
    pub fn property_type(&self) -> i32 {
        match self {
            PropertyValue::Integer(_) => VIX_PROPERTYTYPE_INTEGER,
            PropertyValue::Str(_) => VIX_PROPERTYTYPE_STRING,
            PropertyValue::Bool(_) => VIX_PROPERTYTYPE_BOOL,
            PropertyValue::Int64(_) => VIX_PROPERTYTYPE_INT64,
            PropertyValue::Blob(_) => VIX_PROPERTYTYPE_BLOB,
            PropertyValue::Handle(_) => VIX_PROPERTYTYPE_HANDLE,
        }
    }
}

/// Query the declared type of a property.
pub(crate) fn get_type(api: &dyn VixApi, handle: VixHandle, property: i32) -> Result<i32> {
    let mut ptype = VIX_PROPERTYTYPE_ANY;
    check(api, api.get_property_type(handle, property, &mut ptype))?;
    Ok(ptype)
}

/// Decode a property by its declared type.
pub(crate) fn get(api: &dyn VixApi, handle: VixHandle, property: i32) -> Result<PropertyValue> {
    let ptype = get_type(api, handle, property)?;
    match ptype {
        VIX_PROPERTYTYPE_INTEGER => {
            let mut v = 0i32;
            check(api, api.get_properties(handle, &mut PropRequest::Int(property, &mut v)))?;
            Ok(PropertyValue::Integer(v))
        }
        VIX_PROPERTYTYPE_STRING => {
            let mut v = String::new();
            check(api, api.get_properties(handle, &mut PropRequest::Str(property, &mut v)))?;
            Ok(PropertyValue::Str(v))
        }
        VIX_PROPERTYTYPE_BOOL => {
            let mut v = false;
            check(api, api.get_properties(handle, &mut PropRequest::Bool(property, &mut v)))?;
            Ok(PropertyValue::Bool(v))
        }
        VIX_PROPERTYTYPE_INT64 => {
            let mut v = 0i64;
            check(
                api,
                api.get_properties(handle, &mut PropRequest::Int64(property, &mut v)),
            )?;
            Ok(PropertyValue::Int64(v))
        }
        VIX_PROPERTYTYPE_BLOB => {
            let mut v = Vec::new();
            check(
                api,
                api.get_properties(handle, &mut PropRequest::Blob(property, &mut v)),
            )?;
            Ok(PropertyValue::Blob(v))
        }
        VIX_PROPERTYTYPE_HANDLE => {
            let mut v = VixHandle::invalid();
            check(
                api,
                api.get_properties(handle, &mut PropRequest::Handle(property, &mut v)),
            )?;
            Ok(PropertyValue::Handle(v.0))
        }
        other => Err(Error::PropertyType {
            property,
            property_type: other,
        }),
    }
}

/// Decode a property expected to be an integer.
pub(crate) fn int(api: &dyn VixApi, handle: VixHandle, property: i32) -> Result<i32> {
    match get(api, handle, property)? {
        PropertyValue::Integer(v) => Ok(v),
        other => Err(Error::PropertyType {
            property,
            property_type: other.property_type(),
        }),
    }
}

/// Decode a property expected to be a string.
pub(crate) fn string(api: &dyn VixApi, handle: VixHandle, property: i32) -> Result<String> {
    match get(api, handle, property)? {
        PropertyValue::Str(v) => Ok(v),
        other => Err(Error::PropertyType {
            property,
            property_type: other.property_type(),
        }),
    }
}

/// Decode a property expected to be a bool.
pub(crate) fn boolean(api: &dyn VixApi, handle: VixHandle, property: i32) -> Result<bool> {
    match get(api, handle, property)? {
        PropertyValue::Bool(v) => Ok(v),
        other => Err(Error::PropertyType {
            property,
            property_type: other.property_type(),
        }),
    }
}

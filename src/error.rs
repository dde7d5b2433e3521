//! Error handling stuff
use displaydoc::Display;
use std::io;
use thiserror::Error;

/// Error type for [`crate::sysfs::Attributes`]
#[derive(Debug, Display, Error)]
pub enum AttributeError {
    /// IO Failed
    Io(#[from] io::Error),

    /// Attribute `{0}` was not valid UTF-8
    Encoding(String),
}

/// Result alias for sysfs attribute access.
pub type Result<T, E = AttributeError> = std::result::Result<T, E>;

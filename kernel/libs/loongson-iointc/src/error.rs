// SPDX-License-Identifier: MPL-2.0

use iointc_map::ConfigurationError;

/// The error type of the IOINTC driver.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// None of the parent interrupt lines is wired up.
    NoParent,
    /// The platform did not describe the parent routing of the lines.
    NoParentIntMap,
    /// The boot core cannot be encoded in a routing byte.
    InvalidCore,
    /// The trigger type is not supported by the hardware.
    InvalidTriggerType,
    /// The line index is out of range.
    InvalidLine,
    /// The operation is not supported by the controller.
    NotSupported,
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        match err {
            ConfigurationError::NoAvailableParent => Self::NoParent,
        }
    }
}

/// The result type of the IOINTC driver.
pub type Result<T> = core::result::Result<T, Error>;

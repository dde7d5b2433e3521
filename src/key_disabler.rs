//! Disabling capacitive keys
//!
//! This is intended for devices where the capacitive navigation keys can be
//! fully disabled, to be replaced by an on-screen navigation bar. It should
//! not be used on devices with mechanical or otherwise visible-when-inactive
//! keys.
//!
//! The keys are driven by the `atmel_mxt_ts` touchscreen driver, which
//! exposes a `keys_off` attribute on the touchscreen device. Devices without
//! that touchscreen have nothing to disable, so every query reports success.
use crate::{
    sysfs::{Attributes, SysFs},
    util::{DRIVER_DEVICE_PATH, KEYS_OFF_PATH},
};
use log::{debug, trace, warn};
use std::path::Path;

/// Value of the `keys_off` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Keys work normally, `0`
    Enabled,

    /// Keys are off, `1`
    Disabled,
}

impl KeyState {
    /// Attribute value for this state
    pub fn as_str(self) -> &'static str {
        match self {
            KeyState::Enabled => "0",
            KeyState::Disabled => "1",
        }
    }
}

/// `true` means the keys are disabled.
impl From<bool> for KeyState {
    fn from(disabled: bool) -> Self {
        if disabled {
            KeyState::Disabled
        } else {
            KeyState::Enabled
        }
    }
}

/// Capacitive key control for the `atmel_mxt_ts` touchscreen.
///
/// "Active" here means the key disabler is active, ie the keys are *off*.
///
/// None of these operations fail. Filesystem errors are folded into the same
/// answers as missing files.
#[derive(Debug, Clone)]
pub struct KeyDisabler<A = SysFs> {
    attrs: A,
}

impl KeyDisabler<SysFs> {
    /// Key control through the real sysfs at `/sys`
    pub fn new() -> Self {
        Self::with_attributes(SysFs::new())
    }

    /// Key control through a sysfs mounted at `root`
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self::with_attributes(SysFs::with_root(root))
    }
}

impl Default for KeyDisabler<SysFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Attributes> KeyDisabler<A> {
    /// Key control through `attrs`
    pub fn with_attributes(attrs: A) -> Self {
        Self { attrs }
    }

    /// Attribute access used by this [`KeyDisabler`]
    pub fn attributes(&self) -> &A {
        &self.attrs
    }

    fn has_touchscreen(&self) -> bool {
        let present = self.attrs.exists(Path::new(DRIVER_DEVICE_PATH));
        if !present {
            debug!("No atmel_mxt_ts touchscreen at {}", DRIVER_DEVICE_PATH);
        }
        present
    }

    /// Whether the keys can be disabled.
    ///
    /// Always `true` without the touchscreen, since there are no keys to
    /// disable.
    pub fn is_supported(&self) -> bool {
        !self.has_touchscreen() || self.attrs.exists(Path::new(KEYS_OFF_PATH))
    }

    /// Whether the keys are currently disabled.
    ///
    /// Always `true` without the touchscreen. Otherwise only an attribute
    /// reading exactly `1` counts, anything else, including a failed read,
    /// is `false`.
    pub fn is_active(&self) -> bool {
        if !self.has_touchscreen() {
            return true;
        }
        match self.attrs.read_one_line(Path::new(KEYS_OFF_PATH)) {
            Ok(line) => line == KeyState::Disabled.as_str(),
            Err(e) => {
                warn!("Couldn't read {}: {}", KEYS_OFF_PATH, e);
                false
            }
        }
    }

    /// Disable the keys if `active`, enable them otherwise.
    ///
    /// Returns whether the attribute was written. Without the touchscreen
    /// nothing is written and `active` is returned as is.
    pub fn set_active(&self, active: bool) -> bool {
        if !self.has_touchscreen() {
            return active;
        }
        let state = KeyState::from(active);
        trace!("Setting capacitive keys to {:?}", state);
        match self
            .attrs
            .write_line(Path::new(KEYS_OFF_PATH), state.as_str())
        {
            Ok(()) => true,
            Err(e) => {
                warn!("Couldn't write {}: {}", KEYS_OFF_PATH, e);
                false
            }
        }
    }
}

/// [`KeyDisabler::is_supported`] on the real sysfs
pub fn is_supported() -> bool {
    KeyDisabler::new().is_supported()
}

/// [`KeyDisabler::is_active`] on the real sysfs
pub fn is_active() -> bool {
    KeyDisabler::new().is_active()
}

/// [`KeyDisabler::set_active`] on the real sysfs
pub fn set_active(active: bool) -> bool {
    KeyDisabler::new().set_active(active)
}

//! Capacitive navigation key control for Atmel maXTouch touchscreens
//!
//! Some devices have capacitive navigation keys driven by the `atmel_mxt_ts`
//! touchscreen driver, which can turn them off through a sysfs attribute so
//! an on-screen navigation bar can replace them.
//!
//! ```no_run
//! use keydisabler::KeyDisabler;
//!
//! let keys = KeyDisabler::new();
//! if keys.is_supported() && !keys.is_active() {
//!     keys.set_active(true);
//! }
//! ```
//!
//! # Implementation details
//!
//! The keys are controlled through files in `/sys`, so this library requires
//! it to exist. Devices without the touchscreen report the keys as supported
//! and already disabled.
//!
//! The `keys_off` attribute is not part of the mainline driver and is
//! undocumented.
#![doc(html_root_url = "https://docs.rs/keydisabler/0.1.0")]

pub mod error;
pub mod key_disabler;
pub mod sysfs;
pub mod util;

pub use self::{
    key_disabler::{is_active, is_supported, set_active, KeyDisabler, KeyState},
    sysfs::{Attributes, SysFs},
};

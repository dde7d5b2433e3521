//! Utility functions

/// Technically Linux requires sysfs to be at `/sys`, calling it a system
/// configuration error otherwise.
///
/// Everything in this crate is relative to it, so [`crate::sysfs::SysFs`] can
/// be re-rooted for other layouts.
pub const SYSFS_PATH: &str = "/sys";

/// Device directory the `atmel_mxt_ts` driver creates for the touchscreen at
/// i2c bus 1, address `0x4a`. Relative to [`SYSFS_PATH`].
pub const DRIVER_DEVICE_PATH: &str = "bus/i2c/drivers/atmel_mxt_ts/1-004a";

/// Capacitive key control attribute. Relative to [`SYSFS_PATH`].
///
/// `1` means the keys are off, `0` means they work.
pub const KEYS_OFF_PATH: &str = "bus/i2c/drivers/atmel_mxt_ts/1-004a/keys_off";

#[cfg(test)]
pub(crate) mod scratch {
    use std::{
        fs, io,
        path::{Path, PathBuf},
        process,
        sync::atomic::{AtomicUsize, Ordering},
    };

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Throwaway directory standing in for `/sys`, removed on drop.
    #[derive(Debug)]
    pub struct Scratch {
        root: PathBuf,
    }

    impl Scratch {
        pub fn new(name: &str) -> io::Result<Self> {
            let n = COUNTER.fetch_add(1, Ordering::Relaxed);
            let root = std::env::temp_dir().join(format!(
                "keydisabler-{}-{}-{}",
                name,
                process::id(),
                n
            ));
            if root.exists() {
                fs::remove_dir_all(&root)?;
            }
            fs::create_dir_all(&root)?;
            Ok(Self { root })
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        pub fn mkdir(&self, rel: &str) -> io::Result<PathBuf> {
            let path = self.root.join(rel);
            fs::create_dir_all(&path)?;
            Ok(path)
        }

        pub fn write(&self, rel: &str, content: &[u8]) -> io::Result<PathBuf> {
            let path = self.root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            Ok(path)
        }

        pub fn read(&self, rel: &str) -> io::Result<String> {
            fs::read_to_string(self.root.join(rel))
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }
}

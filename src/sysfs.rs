//! Reading and writing sysfs attributes.
//!
//! Attributes are small kernel-backed text files, usually holding a single
//! value on a single line. This module provides the [`Attributes`] trait,
//! which is all [`crate::KeyDisabler`] needs from the filesystem, and
//! [`SysFs`], the implementation backed by the real `/sys`.
//!
//! # Implementation Details
//!
//! Attribute files are created and removed by the kernel, never by userspace.
//! Writing to an attribute that does not exist is therefore an error, not a
//! request to create it.
//!
//! See the [sysfs rules][1] for details.
//!
//! [1]: https://www.kernel.org/doc/html/latest/admin-guide/sysfs-rules.html
use crate::{
    error::{AttributeError, Result},
    util::SYSFS_PATH,
};
use log::trace;
use std::{
    fs,
    io::prelude::*,
    path::{Path, PathBuf},
};

/// Access to sysfs attribute files.
///
/// All paths are relative to the root of the implementation, ie
/// `bus/i2c/drivers`, not `/sys/bus/i2c/drivers`.
pub trait Attributes {
    /// Whether `path` exists.
    ///
    /// Errors, such as missing permissions on a parent directory, are treated
    /// as the path not existing.
    fn exists(&self, path: &Path) -> bool;

    /// First line of the attribute at `path`, with surrounding whitespace
    /// removed.
    ///
    /// An empty attribute is an empty string.
    ///
    /// # Errors
    ///
    /// - If the attribute can't be read
    /// - If the attribute isn't valid UTF-8
    fn read_one_line(&self, path: &Path) -> Result<String>;

    /// Write `content` to the attribute at `path`, as is.
    ///
    /// This is a single write attempt.
    ///
    /// # Errors
    ///
    /// - If the attribute doesn't exist or can't be written
    fn write_line(&self, path: &Path, content: &str) -> Result<()>;
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_one_line(&self, path: &Path) -> Result<String> {
        (**self).read_one_line(path)
    }

    fn write_line(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_line(path, content)
    }
}

impl<T: Attributes + ?Sized> Attributes for Box<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_one_line(&self, path: &Path) -> Result<String> {
        (**self).read_one_line(path)
    }

    fn write_line(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write_line(path, content)
    }
}

/// The sysfs filesystem, mounted at `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysFs {
    root: PathBuf,
}

impl SysFs {
    /// sysfs at [`SYSFS_PATH`]
    pub fn new() -> Self {
        Self::with_root(SYSFS_PATH)
    }

    /// sysfs mounted somewhere other than [`SYSFS_PATH`]
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Where this sysfs is mounted
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SysFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes for SysFs {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).try_exists().unwrap_or(false)
    }

    fn read_one_line(&self, path: &Path) -> Result<String> {
        let path = self.root.join(path);
        let data = fs::read(&path)?;
        let data = String::from_utf8(data)
            .map_err(|_| AttributeError::Encoding(path.display().to_string()))?;
        let line = data.lines().next().unwrap_or_default().trim();
        trace!("Read `{}` from {}", line, path.display());
        Ok(line.to_owned())
    }

    fn write_line(&self, path: &Path, content: &str) -> Result<()> {
        let path = self.root.join(path);
        trace!("Writing `{}` to {}", content, path.display());
        let mut f = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)?;
        f.write_all(content.as_bytes())?;
        Ok(())
    }
}

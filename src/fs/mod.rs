//! File System Module
//!
//! Read-only virtual file system backing `ls` and `cd`. File contents are
//! not stored here; `cat` reads them from the flat content store.

pub mod types;
pub mod virtual_fs;

pub use types::*;
pub use virtual_fs::{join, normalize, VirtualFs, VirtualFsBuilder};

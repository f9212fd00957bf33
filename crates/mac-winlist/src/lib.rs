#![warn(missing_docs)]

//! Enumeration of on-screen macOS windows for the winscout workspace.
//!
//! The crate exposes two seams:
//! - [`WindowQuery`]: a one-shot enumeration of current windows, backed in
//!   production by a fixed Swift program run through the system toolchain
//!   ([`SwiftWindowQuery`]). Filter criteria never reach the Swift side; the
//!   program dumps every window and callers filter the typed records.
//! - [`BundleLookup`]: a best-effort bundle-identifier lookup keyed by the
//!   owning process id ([`LsAppInfoLookup`] in production).
//!
//! Both are traits so higher layers can be tested without touching the OS.

mod bundle;
mod error;
mod query;
mod record;

pub use bundle::{BundleLookup, LsAppInfoLookup};
pub use error::{Error, Result};
pub use query::{SwiftWindowQuery, WindowQuery};
pub use record::{Bounds, WindowId, WindowRecord};

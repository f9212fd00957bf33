//! Candidate filtering against user-supplied search criteria.

use mac_winlist::{BundleLookup, WindowRecord};

use crate::error::{Error, Result};

/// Applications matched when no criteria are supplied.
///
/// Keeps a bare `winscout find` from latching onto an arbitrary window.
const DEFAULT_APPS: &[&str] = &["MetalShaderStudio", "ShaderStudio"];

/// User-supplied window filter.
///
/// All fields are optional; when every field is absent the fixed
/// [`DEFAULT_APPS`] set applies instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Exact bundle identifier of the owning app.
    pub bundle_id: Option<String>,
    /// Case-sensitive substring of the window title.
    pub title: Option<String>,
    /// Case-sensitive substring of the owning app name.
    pub app_name: Option<String>,
}

impl SearchCriteria {
    /// Build criteria from optional CLI fields, rejecting blank values
    /// before any query attempt runs.
    pub fn new(
        bundle_id: Option<String>,
        title: Option<String>,
        app_name: Option<String>,
    ) -> Result<Self> {
        for (name, value) in [
            ("bundle id", &bundle_id),
            ("window title", &title),
            ("app name", &app_name),
        ] {
            if let Some(v) = value
                && v.trim().is_empty()
            {
                return Err(Error::InvalidCriteria(format!("{name} must not be blank")));
            }
        }
        Ok(Self {
            bundle_id,
            title,
            app_name,
        })
    }

    /// True when no field was supplied and the default app set applies.
    pub fn is_empty(&self) -> bool {
        self.bundle_id.is_none() && self.title.is_none() && self.app_name.is_none()
    }
}

/// Keep the on-screen records matching `criteria`, preserving query order.
///
/// An empty result is an ordinary value ("no window yet"), never an error.
pub fn matching(
    records: &[WindowRecord],
    criteria: &SearchCriteria,
    lookup: &dyn BundleLookup,
) -> Vec<WindowRecord> {
    records
        .iter()
        .filter(|w| w.is_on_screen && matches(w, criteria, lookup))
        .cloned()
        .collect()
}

/// True when at least one supplied criterion matches `window`.
fn matches(window: &WindowRecord, criteria: &SearchCriteria, lookup: &dyn BundleLookup) -> bool {
    if criteria.is_empty() {
        return DEFAULT_APPS
            .iter()
            .any(|app| window.owner_name.contains(app));
    }
    if let Some(bundle) = &criteria.bundle_id
        && lookup.bundle_id(window.owner_pid).as_deref() == Some(bundle)
    {
        return true;
    }
    if let Some(title) = &criteria.title
        && window.title.contains(title)
    {
        return true;
    }
    if let Some(app) = &criteria.app_name
        && window.owner_name.contains(app)
    {
        return true;
    }
    false
}

//! Breadcrumb trail entries.

use serde::{Deserialize, Serialize};

use crate::nav::NavLink;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One entry of a breadcrumb trail.
pub struct Crumb {
    /// Visible label.
    pub label: String,
    /// Optional destination; crumbs without one render as plain text.
    pub link: Option<NavLink>,
    /// Optional leading icon name.
    pub icon: Option<String>,
    /// Marks the current page.
    pub current: bool,
}

impl Crumb {
    /// Plain-text crumb.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the destination.
    pub fn link(mut self, link: NavLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Marks the crumb as the current page.
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A crumb positioned in its trail.
pub struct CrumbEntry {
    /// Source crumb.
    pub crumb: Crumb,
    /// Whether a separator precedes this crumb.
    pub separated: bool,
}

impl CrumbEntry {
    /// `aria-current` value for the crumb.
    pub fn aria_current(&self) -> Option<&'static str> {
        self.crumb.current.then_some("page")
    }

    /// Whether the crumb renders as a link. The current crumb never does.
    pub fn is_link(&self) -> bool {
        self.crumb.link.is_some() && !self.crumb.current
    }
}

/// Positions crumbs and validates the trail.
///
/// # Errors
///
/// Returns [`ConfigError::MultipleCurrentCrumbs`] when more than one crumb is marked current.
pub fn crumb_trail(crumbs: &[Crumb]) -> Result<Vec<CrumbEntry>, ConfigError> {
    let current = crumbs.iter().filter(|crumb| crumb.current).count();
    if current > 1 {
        return Err(ConfigError::MultipleCurrentCrumbs(current));
    }
    Ok(crumbs
        .iter()
        .enumerate()
        .map(|(index, crumb)| CrumbEntry {
            crumb: crumb.clone(),
            separated: index > 0,
        })
        .collect())
}

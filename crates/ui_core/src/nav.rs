//! Navigation destinations and active-item resolution.
//!
//! A destination is rendered in one of three modes depending on which fields the caller set:
//! client-side `navigate`, plain `href`, or `href` submitted with an HTTP method. Routing itself
//! belongs to the host application.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// HTTP methods a link may submit with.
pub enum HttpMethod {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PUT.
    Put,
    /// PATCH.
    Patch,
    /// DELETE.
    Delete,
}

impl HttpMethod {
    /// All methods.
    pub const ALL: [Self; 5] = [Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete];

    /// Lowercase token used in `data-method`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.token().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConfigError::UnknownVariant {
                kind: "http method",
                value: raw.to_string(),
                expected: "get, post, put, patch, delete".to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
/// A resolved link destination.
pub enum NavLink {
    /// Client-side navigation handled by the host router.
    Navigate {
        /// Target path.
        to: String,
    },
    /// Full page load.
    Href {
        /// Target URL.
        href: String,
    },
    /// Link that submits with a non-GET method.
    Method {
        /// Target URL.
        href: String,
        /// HTTP method.
        method: HttpMethod,
    },
}

impl NavLink {
    /// Client-side navigation destination.
    pub fn navigate(to: impl Into<String>) -> Self {
        Self::Navigate { to: to.into() }
    }

    /// Plain URL destination.
    pub fn href(href: impl Into<String>) -> Self {
        Self::Href { href: href.into() }
    }

    /// Picks the link mode from optional fields. `navigate` wins over `href`; a GET method is the
    /// same as a plain `href`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MethodWithoutHref`] when `method` is set without `href`.
    pub fn from_fields(
        navigate: Option<String>,
        href: Option<String>,
        method: Option<HttpMethod>,
    ) -> Result<Option<Self>, ConfigError> {
        if method.is_some() && href.is_none() {
            return Err(ConfigError::MethodWithoutHref);
        }
        if let Some(to) = navigate {
            return Ok(Some(Self::Navigate { to }));
        }
        Ok(match (href, method) {
            (Some(href), Some(method)) if method != HttpMethod::Get => {
                Some(Self::Method { href, method })
            }
            (Some(href), _) => Some(Self::Href { href }),
            (None, _) => None,
        })
    }

    /// URL written into the `href` attribute.
    pub fn url(&self) -> &str {
        match self {
            Self::Navigate { to } => to,
            Self::Href { href } | Self::Method { href, .. } => href,
        }
    }

    /// Token written into `data-ui-link`.
    pub fn mode_token(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::Href { .. } => "href",
            Self::Method { .. } => "method",
        }
    }

    /// Method token written into `data-method`, for method links only.
    pub fn method_token(&self) -> Option<&'static str> {
        match self {
            Self::Method { method, .. } => Some(method.token()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One navigation entry shared by the sidebar and navbar.
pub struct NavItem {
    /// Identifier compared against the current item.
    pub key: String,
    /// Visible label.
    pub label: String,
    /// Optional icon name.
    pub icon: Option<String>,
    /// Destination.
    pub link: NavLink,
    /// Optional trailing badge text, such as a count.
    pub badge: Option<String>,
}

impl NavItem {
    /// Builds an entry with a resolved destination.
    pub fn new(key: impl Into<String>, label: impl Into<String>, link: NavLink) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            link,
            badge: None,
        }
    }

    /// Builds an entry from raw link fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingLinkTarget`] when neither `navigate` nor `href` is set, and
    /// propagates [`NavLink::from_fields`] errors.
    pub fn from_fields(
        key: impl Into<String>,
        label: impl Into<String>,
        navigate: Option<String>,
        href: Option<String>,
        method: Option<HttpMethod>,
    ) -> Result<Self, ConfigError> {
        let label = label.into();
        let link = NavLink::from_fields(navigate, href, method)?.ok_or_else(|| {
            ConfigError::MissingLinkTarget {
                label: label.clone(),
            }
        })?;
        Ok(Self::new(key, label, link))
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the trailing badge.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A navigation entry with its active flag already decided.
pub struct ResolvedNavItem {
    /// Source entry.
    pub item: NavItem,
    /// Whether this entry is the current page.
    pub active: bool,
}

impl ResolvedNavItem {
    /// `aria-current` value for the entry.
    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("page")
    }

    /// Stable token used in `data-ui-state`.
    pub fn state_token(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "idle"
        }
    }
}

/// Marks which entries match `current`. Called once per render; every rendering of the list
/// reads the same result.
///
/// Keys end up in DOM ids, so they follow the component id rules and must be unique.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyId`] or [`ConfigError::InvalidId`] for a blank key or one with
/// whitespace, and [`ConfigError::DuplicateNavKey`] when two entries share a key.
pub fn resolve_nav(
    items: &[NavItem],
    current: Option<&str>,
) -> Result<Vec<ResolvedNavItem>, ConfigError> {
    let mut seen = BTreeSet::new();
    items
        .iter()
        .map(|item| {
            validate_key(&item.key)?;
            if !seen.insert(item.key.as_str()) {
                return Err(ConfigError::DuplicateNavKey(item.key.clone()));
            }
            Ok(ResolvedNavItem {
                active: current.is_some_and(|current| current == item.key),
                item: item.clone(),
            })
        })
        .collect()
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::EmptyId);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidId(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn link_mode_follows_the_fields_present() {
        assert_eq!(
            NavLink::from_fields(Some("/home".into()), Some("/ignored".into()), None),
            Ok(Some(NavLink::navigate("/home")))
        );
        assert_eq!(
            NavLink::from_fields(None, Some("/docs".into()), None),
            Ok(Some(NavLink::href("/docs")))
        );
        assert_eq!(
            NavLink::from_fields(None, Some("/logout".into()), Some(HttpMethod::Delete)),
            Ok(Some(NavLink::Method {
                href: "/logout".into(),
                method: HttpMethod::Delete
            }))
        );
        assert_eq!(
            NavLink::from_fields(None, Some("/q".into()), Some(HttpMethod::Get)),
            Ok(Some(NavLink::href("/q")))
        );
        assert_eq!(NavLink::from_fields(None, None, None), Ok(None));
    }

    #[test]
    fn method_without_href_is_rejected() {
        assert_eq!(
            NavLink::from_fields(Some("/x".into()), None, Some(HttpMethod::Post)),
            Err(ConfigError::MethodWithoutHref)
        );
        assert!("TRACE".parse::<HttpMethod>().is_err());
        assert_eq!("Post".parse::<HttpMethod>(), Ok(HttpMethod::Post));
    }

    #[test]
    fn nav_items_require_a_destination() {
        assert_eq!(
            NavItem::from_fields("home", "Home", None, None, None),
            Err(ConfigError::MissingLinkTarget {
                label: "Home".to_string()
            })
        );
    }

    #[test]
    fn exactly_the_matching_entry_is_active() {
        let items = vec![
            NavItem::new("home", "Home", NavLink::navigate("/")),
            NavItem::new("reports", "Reports", NavLink::navigate("/reports")),
        ];
        let resolved = resolve_nav(&items, Some("reports")).expect("resolve");
        assert_eq!(
            resolved
                .iter()
                .map(ResolvedNavItem::aria_current)
                .collect::<Vec<_>>(),
            vec![None, Some("page")]
        );
        assert!(resolve_nav(&items, None)
            .expect("resolve")
            .iter()
            .all(|entry| !entry.active));
    }

    #[test]
    fn duplicate_keys_are_rejected_instead_of_marking_two_entries_active() {
        let items = vec![
            NavItem::new("team", "Team", NavLink::navigate("/team")),
            NavItem::new("team", "Team again", NavLink::navigate("/team/2")),
        ];
        assert_eq!(
            resolve_nav(&items, Some("team")),
            Err(ConfigError::DuplicateNavKey("team".to_string()))
        );
    }

    #[test]
    fn keys_must_be_usable_in_element_ids() {
        let blank = vec![NavItem::new("  ", "Blank", NavLink::navigate("/"))];
        assert_eq!(resolve_nav(&blank, None), Err(ConfigError::EmptyId));

        let spaced = vec![NavItem::new("my reports", "Reports", NavLink::navigate("/r"))];
        assert_eq!(
            resolve_nav(&spaced, None),
            Err(ConfigError::InvalidId("my reports".to_string()))
        );
    }

    #[test]
    fn link_attributes_expose_mode_and_method() {
        let link = NavLink::Method {
            href: "/session".into(),
            method: HttpMethod::Delete,
        };
        assert_eq!(link.url(), "/session");
        assert_eq!(link.mode_token(), "method");
        assert_eq!(link.method_token(), Some("delete"));
        assert_eq!(NavLink::navigate("/a").method_token(), None);
    }
}

//! Error types for component configuration and panel mounting.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Caller configuration errors. These are development-time mistakes and are surfaced loudly by
/// the rendering layer instead of producing degraded markup.
pub enum ConfigError {
    /// A panel-backed component was given an empty id.
    #[error("component id must not be empty")]
    EmptyId,
    /// A panel-backed component id contains characters that break the `{id}-suffix` convention.
    #[error("component id `{0}` must not contain whitespace")]
    InvalidId(String),
    /// A string value did not match any member of an enumerated option.
    #[error("unknown {kind} `{value}`; expected one of: {expected}")]
    UnknownVariant {
        /// Option family, for example `button variant`.
        kind: &'static str,
        /// Rejected input.
        value: String,
        /// Comma-separated accepted tokens.
        expected: String,
    },
    /// An avatar was rendered without alternative text.
    #[error("avatar `alt` text is required")]
    MissingAlt,
    /// A navigation entry has neither `navigate` nor `href`.
    #[error("navigation item `{label}` needs a `navigate` or `href` destination")]
    MissingLinkTarget {
        /// Label of the offending entry.
        label: String,
    },
    /// An HTTP method was supplied without an `href` to submit to.
    #[error("link `method` requires an `href`")]
    MethodWithoutHref,
    /// Two navigation entries share a key.
    #[error("navigation key `{0}` is used by more than one item")]
    DuplicateNavKey(String),
    /// More than one breadcrumb was marked as the current page.
    #[error("only one breadcrumb may be marked current, found {0}")]
    MultipleCurrentCrumbs(usize),
    /// Serialized configuration could not be parsed.
    #[error("invalid ui configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while assembling a [`crate::PanelHandle`] against a rendered page.
pub enum PanelError {
    /// The required content element for a panel is not present in the page.
    #[error("panel content element `{element}` not found")]
    MissingContent {
        /// Expected element id.
        element: String,
    },
}

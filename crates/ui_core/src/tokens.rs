//! Shared variant, size, and shape vocabularies with their class tables.
//!
//! Every component that speaks the same vocabulary (for example [`Size`]) reads its classes from
//! the table on the enum itself, so button, badge, avatar, and icon sizing cannot drift apart.
//! String parsing rejects unknown values with [`ConfigError::UnknownVariant`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn parse_token<T: Copy>(
    kind: &'static str,
    raw: &str,
    all: &[T],
    token: fn(T) -> &'static str,
) -> Result<T, ConfigError> {
    let needle = raw.trim();
    all.iter()
        .copied()
        .find(|candidate| token(*candidate).eq_ignore_ascii_case(needle))
        .ok_or_else(|| ConfigError::UnknownVariant {
            kind,
            value: raw.to_string(),
            expected: all
                .iter()
                .map(|candidate| token(*candidate))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Size scale shared by buttons, badges, avatars, and icons.
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for Size {
    fn default() -> Self {
        Self::Md
    }
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Stable token used in `data-ui-size`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Padding and type scale for buttons.
    pub fn button_classes(self) -> &'static str {
        match self {
            Self::Xs => "px-2 py-1 text-xs gap-1",
            Self::Sm => "px-2.5 py-1.5 text-sm gap-1.5",
            Self::Md => "px-3 py-2 text-sm gap-2",
            Self::Lg => "px-4 py-2.5 text-base gap-2",
            Self::Xl => "px-5 py-3 text-base gap-2.5",
        }
    }

    /// Padding and type scale for badges.
    pub fn badge_classes(self) -> &'static str {
        match self {
            Self::Xs => "px-1.5 py-0.5 text-[10px] gap-0.5",
            Self::Sm => "px-2 py-0.5 text-xs gap-1",
            Self::Md => "px-2.5 py-0.5 text-xs gap-1",
            Self::Lg => "px-3 py-1 text-sm gap-1.5",
            Self::Xl => "px-3.5 py-1 text-base gap-1.5",
        }
    }

    /// Box and initials scale for avatars.
    pub fn avatar_classes(self) -> &'static str {
        match self {
            Self::Xs => "size-6 text-[10px]",
            Self::Sm => "size-8 text-xs",
            Self::Md => "size-10 text-sm",
            Self::Lg => "size-12 text-base",
            Self::Xl => "size-16 text-lg",
        }
    }

    /// Glyph box for icons.
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Xs => "size-3",
            Self::Sm => "size-4",
            Self::Md => "size-5",
            Self::Lg => "size-6",
            Self::Xl => "size-8",
        }
    }

    /// Icon size that pairs with text rendered at this size.
    pub fn inline_icon(self) -> Self {
        match self {
            Self::Xs | Self::Sm => Self::Xs,
            Self::Md | Self::Lg => Self::Sm,
            Self::Xl => Self::Md,
        }
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("size", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Filled primary action.
    Primary,
    /// Neutral filled action.
    Secondary,
    /// Bordered action.
    Outline,
    /// Borderless low-emphasis action.
    Ghost,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// All button variants.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
    ];

    /// Stable token used in `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }

    /// Color classes for the variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Secondary => "bg-muted text-foreground hover:bg-muted/80",
            Self::Outline => "border border-border bg-transparent text-foreground hover:bg-muted",
            Self::Ghost => "bg-transparent text-foreground hover:bg-muted",
            Self::Danger => "bg-danger text-danger-foreground hover:bg-danger/90",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("button variant", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button corner shapes.
pub enum ButtonShape {
    /// Rounded rectangle.
    Rounded,
    /// Fully rounded pill.
    Pill,
    /// Square corners; icon-only buttons use this with equal padding.
    Square,
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::Rounded
    }
}

impl ButtonShape {
    /// All button shapes.
    pub const ALL: [Self; 3] = [Self::Rounded, Self::Pill, Self::Square];

    /// Stable token used in `data-ui-shape`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Pill => "pill",
            Self::Square => "square",
        }
    }

    /// Corner classes for the shape.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Rounded => "rounded-md",
            Self::Pill => "rounded-full",
            Self::Square => "rounded-none aspect-square",
        }
    }
}

impl FromStr for ButtonShape {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("button shape", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Badge color variants.
pub enum BadgeVariant {
    /// Neutral badge.
    Default,
    /// Brand badge.
    Primary,
    /// Positive status.
    Success,
    /// Cautionary status.
    Warning,
    /// Error or destructive status.
    Danger,
    /// Informational status.
    Info,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl BadgeVariant {
    /// All badge variants.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
    ];

    /// Stable token used in `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    /// Color classes for the variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-muted text-foreground ring-border",
            Self::Primary => "bg-primary/10 text-primary ring-primary/20",
            Self::Success => "bg-success/10 text-success ring-success/20",
            Self::Warning => "bg-warning/10 text-warning ring-warning/20",
            Self::Danger => "bg-danger/10 text-danger ring-danger/20",
            Self::Info => "bg-info/10 text-info ring-info/20",
        }
    }

    /// Fill class for the optional status dot.
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Default => "bg-foreground/60",
            Self::Primary => "bg-primary",
            Self::Success => "bg-success",
            Self::Warning => "bg-warning",
            Self::Danger => "bg-danger",
            Self::Info => "bg-info",
        }
    }
}

impl FromStr for BadgeVariant {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("badge variant", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Badge corner shapes.
pub enum BadgeShape {
    /// Slightly rounded corners.
    Rounded,
    /// Fully rounded pill.
    Pill,
}

impl Default for BadgeShape {
    fn default() -> Self {
        Self::Rounded
    }
}

impl BadgeShape {
    /// All badge shapes.
    pub const ALL: [Self; 2] = [Self::Rounded, Self::Pill];

    /// Stable token used in `data-ui-shape`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Pill => "pill",
        }
    }

    /// Corner classes for the shape.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Rounded => "rounded-md",
            Self::Pill => "rounded-full",
        }
    }
}

impl FromStr for BadgeShape {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("badge shape", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Avatar frame shapes.
pub enum AvatarShape {
    /// Circular frame.
    Circle,
    /// Rounded square frame.
    Square,
}

impl Default for AvatarShape {
    fn default() -> Self {
        Self::Circle
    }
}

impl AvatarShape {
    /// All avatar shapes.
    pub const ALL: [Self; 2] = [Self::Circle, Self::Square];

    /// Stable token used in `data-ui-shape`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// Corner classes for the shape.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Circle => "rounded-full",
            Self::Square => "rounded-md",
        }
    }
}

impl FromStr for AvatarShape {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("avatar shape", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Presence indicator rendered on an avatar corner.
pub enum AvatarStatus {
    /// Available.
    Online,
    /// Idle.
    Away,
    /// Do not disturb.
    Busy,
    /// Not connected.
    Offline,
}

impl AvatarStatus {
    /// All presence states.
    pub const ALL: [Self; 4] = [Self::Online, Self::Away, Self::Busy, Self::Offline];

    /// Stable token used in `data-ui-status`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Busy => "busy",
            Self::Offline => "offline",
        }
    }

    /// Indicator fill class.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Online => "bg-success",
            Self::Away => "bg-warning",
            Self::Busy => "bg-danger",
            Self::Offline => "bg-muted-foreground",
        }
    }

    /// Untranslated accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Away => "Away",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }
}

impl FromStr for AvatarStatus {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("avatar status", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Dropdown menu item variants.
pub enum MenuItemVariant {
    /// Neutral item.
    Default,
    /// Destructive item.
    Danger,
    /// Cautionary item.
    Warning,
}

impl Default for MenuItemVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl MenuItemVariant {
    /// All menu item variants.
    pub const ALL: [Self; 3] = [Self::Default, Self::Danger, Self::Warning];

    /// Stable token used in `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }

    /// Color classes for the variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "text-foreground hover:bg-muted focus:bg-muted",
            Self::Danger => "text-danger hover:bg-danger/10 focus:bg-danger/10",
            Self::Warning => "text-warning hover:bg-warning/10 focus:bg-warning/10",
        }
    }
}

impl FromStr for MenuItemVariant {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("menu item variant", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal anchoring of a dropdown panel relative to its trigger.
pub enum Align {
    /// Panel grows from the trigger's start edge.
    Start,
    /// Panel grows from the trigger's end edge.
    End,
}

impl Default for Align {
    fn default() -> Self {
        Self::End
    }
}

impl Align {
    /// All alignments.
    pub const ALL: [Self; 2] = [Self::Start, Self::End];

    /// Stable token used in `data-ui-align`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    /// Positioning classes for the panel.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Start => "left-0 origin-top-left",
            Self::End => "right-0 origin-top-right",
        }
    }
}

impl FromStr for Align {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("alignment", raw, &Self::ALL, Self::token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Separator orientation.
pub enum Orientation {
    /// Rule across the inline axis.
    Horizontal,
    /// Rule across the block axis.
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl Orientation {
    /// All orientations.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Stable token, also used as the `aria-orientation` value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Rule classes for the orientation.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Horizontal => "h-px w-full bg-border",
            Self::Vertical => "w-px self-stretch bg-border",
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("orientation", raw, &Self::ALL, Self::token)
    }
}

/// Joins non-empty class fragments with single spaces.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a boolean as the `"true"`/`"false"` attribute token.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

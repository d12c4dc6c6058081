//! Typed property setters, policy enums, and ready-made style presets.
//!
//! [`StyleRule`] stores opaque strings; the setters here are sugar over
//! [`StyleRule::set`] for the properties the built-in controls style most
//! often. The preset constructors mirror the stock text/padding/radius
//! styles the demo screens use.

use crate::style::rule::StyleRule;

// ---------------------------------------------------------------------------
// Policy enums
// ---------------------------------------------------------------------------

/// Font weight / emphasis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Italic,
    Bold,
    BoldItalic,
    Underline,
    Overline,
    StrikeOut,
}

impl FontWeight {
    /// The wire value written into the style text.
    pub fn value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Bold => "bold",
            Self::BoldItalic => "bold italic",
            Self::Underline => "underline",
            Self::Overline => "overline",
            Self::StrikeOut => "strikeout",
        }
    }
}

/// Text alignment values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
    Top,
    Bottom,
}

impl TextAlign {
    /// The wire value written into the style text.
    pub fn value(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Mouse cursor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Arrow,
    UpArrow,
    Cross,
    Wait,
    IBeam,
    SizeVer,
    SizeHor,
    SizeAll,
    PointingHand,
    Forbidden,
    OpenHand,
    ClosedHand,
    Busy,
}

impl Cursor {
    /// The wire value written into the style text.
    pub fn value(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::UpArrow => "uparrow",
            Self::Cross => "cross",
            Self::Wait => "wait",
            Self::IBeam => "ibeam",
            Self::SizeVer => "sizever",
            Self::SizeHor => "sizehor",
            Self::SizeAll => "sizeall",
            Self::PointingHand => "pointinghand",
            Self::Forbidden => "forbidden",
            Self::OpenHand => "openhand",
            Self::ClosedHand => "closedhand",
            Self::Busy => "busy",
        }
    }
}

/// Word wrapping toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWrap {
    Enabled,
    Disabled,
}

impl WordWrap {
    /// The wire value written into the style text.
    pub fn value(self) -> &'static str {
        match self {
            Self::Enabled => "true",
            Self::Disabled => "false",
        }
    }
}

/// Display policy values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Inline,
    Block,
    InlineBlock,
    Flex,
    Grid,
    Hidden,
    Visible,
    Inherit,
    Initial,
    Unset,
}

impl Display {
    /// The wire value written into the style text.
    pub fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Inline => "inline",
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
            Self::Flex => "flex",
            Self::Grid => "grid",
            Self::Hidden => "hidden",
            Self::Visible => "visible",
            Self::Inherit => "inherit",
            Self::Initial => "initial",
            Self::Unset => "unset",
        }
    }
}

// ---------------------------------------------------------------------------
// Typed setters
// ---------------------------------------------------------------------------

impl StyleRule {
    /// Set `font-size`.
    pub fn font_size(self, size: impl Into<String>) -> Self {
        self.set("font-size", size)
    }

    /// Set `font-family`.
    pub fn font_family(self, family: impl Into<String>) -> Self {
        self.set("font-family", family)
    }

    /// Set `font-weight`.
    pub fn font_weight(self, weight: FontWeight) -> Self {
        self.set("font-weight", weight.value())
    }

    /// Set the text `color`.
    pub fn color(self, color: impl Into<String>) -> Self {
        self.set("color", color)
    }

    /// Set the `background`.
    pub fn background(self, color: impl Into<String>) -> Self {
        self.set("background", color)
    }

    /// Set the `border` shorthand.
    pub fn border(self, border: impl Into<String>) -> Self {
        self.set("border", border)
    }

    /// Set `border-radius`.
    pub fn border_radius(self, radius: impl Into<String>) -> Self {
        self.set("border-radius", radius)
    }

    /// Set `padding`.
    pub fn padding(self, padding: impl Into<String>) -> Self {
        self.set("padding", padding)
    }

    /// Set `margin`.
    pub fn margin(self, margin: impl Into<String>) -> Self {
        self.set("margin", margin)
    }

    /// Set `opacity`.
    pub fn opacity(self, opacity: impl Into<String>) -> Self {
        self.set("opacity", opacity)
    }

    /// Set `outline`.
    pub fn outline(self, outline: impl Into<String>) -> Self {
        self.set("outline", outline)
    }

    /// Set `cursor`.
    pub fn cursor(self, cursor: Cursor) -> Self {
        self.set("cursor", cursor.value())
    }

    /// Set `text-align`.
    pub fn text_align(self, align: TextAlign) -> Self {
        self.set("text-align", align.value())
    }

    /// Set `letter-spacing`.
    pub fn letter_spacing(self, spacing: impl Into<String>) -> Self {
        self.set("letter-spacing", spacing)
    }

    /// Set `text-decoration`.
    pub fn text_decoration(self, decoration: impl Into<String>) -> Self {
        self.set("text-decoration", decoration)
    }

    /// Set `word-wrap`.
    pub fn word_wrap(self, wrap: WordWrap) -> Self {
        self.set("word-wrap", wrap.value())
    }

    /// Set `display`.
    pub fn display(self, display: Display) -> Self {
        self.set("display", display.value())
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Stock text styles, largest to smallest.
pub mod text {
    use super::{FontWeight, StyleRule};

    /// 40px bold.
    pub fn title() -> StyleRule {
        StyleRule::new().font_size("40px").font_weight(FontWeight::Bold)
    }

    /// 28px bold.
    pub fn subtitle() -> StyleRule {
        StyleRule::new().font_size("28px").font_weight(FontWeight::Bold)
    }

    /// 24px.
    pub fn heading() -> StyleRule {
        StyleRule::new().font_size("24px")
    }

    /// 20px.
    pub fn small_heading() -> StyleRule {
        StyleRule::new().font_size("20px")
    }

    /// 16px.
    pub fn body() -> StyleRule {
        StyleRule::new().font_size("16px")
    }

    /// 14px.
    pub fn caption() -> StyleRule {
        StyleRule::new().font_size("14px")
    }

    /// 16px bold.
    pub fn label() -> StyleRule {
        StyleRule::new().font_size("16px").font_weight(FontWeight::Bold)
    }

    /// 16px bold at half opacity.
    pub fn darkened_label() -> StyleRule {
        label().opacity("0.5")
    }
}

/// Stock uniform padding sizes.
pub mod pad {
    use super::StyleRule;

    pub fn none() -> StyleRule {
        StyleRule::new().padding("0px")
    }

    pub fn small() -> StyleRule {
        StyleRule::new().padding("5px")
    }

    pub fn medium() -> StyleRule {
        StyleRule::new().padding("10px")
    }

    pub fn large() -> StyleRule {
        StyleRule::new().padding("15px")
    }
}

/// Stock border radii.
pub mod radius {
    use super::StyleRule;

    pub fn none() -> StyleRule {
        StyleRule::new().border_radius("0px")
    }

    pub fn small() -> StyleRule {
        StyleRule::new().border_radius("5px")
    }

    pub fn medium() -> StyleRule {
        StyleRule::new().border_radius("10px")
    }

    pub fn circle() -> StyleRule {
        StyleRule::new().border_radius("50%")
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Thin control constructors.
//!
//! Each constructor is a pass-through wrapper with no logic of its own: it
//! produces [`ElementData`] with the class tag named after the control and
//! exactly the capability flags its role needs. Rendering is the host
//! toolkit's business; this crate only composes, styles, and links these
//! handles.

use crate::tree::element::{Caps, ContainerKind, ElementData, RangeState};

// ---------------------------------------------------------------------------
// Display controls
// ---------------------------------------------------------------------------

/// A caption label.
pub fn label(text: impl Into<String>) -> ElementData {
    ElementData::new("Label", Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE).with_text(text)
}

/// A small paragraph-style text literal, as produced by composing a plain
/// string.
pub fn text(content: impl Into<String>) -> ElementData {
    ElementData::new("Text", Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE).with_text(content)
}

/// A flexible spacer that consumes available space along its container's
/// main axis.
pub fn spacer() -> ElementData {
    ElementData::new("Spacer", Caps::empty())
}

// ---------------------------------------------------------------------------
// Interactive controls
// ---------------------------------------------------------------------------

/// A push button.
pub fn button(text: impl Into<String>) -> ElementData {
    ElementData::new(
        "Button",
        Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE | Caps::CLICKABLE,
    )
    .with_text(text)
}

/// A labelled check box. Boolean-state source for reactive links.
pub fn check_box(text: impl Into<String>) -> ElementData {
    ElementData::new(
        "CheckBox",
        Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE | Caps::CLICKABLE | Caps::CHECKABLE,
    )
    .with_text(text)
}

/// An on/off switch. Boolean-state source for reactive links.
pub fn toggle() -> ElementData {
    ElementData::new(
        "Toggle",
        Caps::STYLEABLE | Caps::LINKABLE | Caps::CLICKABLE | Caps::CHECKABLE,
    )
}

/// A labelled radio button.
pub fn radio_button(text: impl Into<String>) -> ElementData {
    ElementData::new(
        "RadioButton",
        Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE | Caps::CLICKABLE | Caps::CHECKABLE,
    )
    .with_text(text)
}

/// A single-line input field.
pub fn field(placeholder: impl Into<String>) -> ElementData {
    ElementData::new("Field", Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE)
        .with_placeholder(placeholder)
}

/// A multi-line input field.
pub fn multiline_field() -> ElementData {
    ElementData::new(
        "MultilineField",
        Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE,
    )
}

/// A drop-down of string choices.
pub fn combo_box(items: impl IntoIterator<Item = impl Into<String>>) -> ElementData {
    ElementData::new("ComboBox", Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE).with_items(items)
}

// ---------------------------------------------------------------------------
// Rangeable controls
// ---------------------------------------------------------------------------

fn rangeable(tag: &str, extra: Caps) -> ElementData {
    let mut data = ElementData::new(tag, Caps::RANGEABLE | Caps::STYLEABLE | Caps::LINKABLE | extra);
    data.range = Some(RangeState::default());
    data
}

/// A horizontal value slider.
pub fn slider() -> ElementData {
    rangeable("Slider", Caps::empty())
}

/// A progress bar.
pub fn progress_bar() -> ElementData {
    rangeable("ProgressBar", Caps::empty())
}

/// A numeric spin box.
pub fn spin_box() -> ElementData {
    rangeable("SpinBox", Caps::TEXTUAL)
}

/// A rotary dial.
pub fn dial() -> ElementData {
    rangeable("Dial", Caps::empty())
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

fn container(tag: &str, kind: ContainerKind) -> ElementData {
    ElementData::new(tag, Caps::CONTAINING | Caps::STYLEABLE | Caps::LINKABLE).with_kind(kind)
}

/// A vertical group.
pub fn column() -> ElementData {
    container("Column", ContainerKind::Column)
}

/// A horizontal group.
pub fn row() -> ElementData {
    container("Row", ContainerKind::Row)
}

/// A grid group.
pub fn grid() -> ElementData {
    container("Grid", ContainerKind::Grid)
}

/// A stacked group showing exactly one child at a time.
pub fn stack() -> ElementData {
    container("Stack", ContainerKind::Stack)
}

/// A titled box framing a vertical group of children.
pub fn group_box(title: impl Into<String>) -> ElementData {
    ElementData::new(
        "GroupBox",
        Caps::CONTAINING | Caps::TEXTUAL | Caps::STYLEABLE | Caps::LINKABLE,
    )
    .with_kind(ContainerKind::Column)
    .with_text(title)
}

// ===========================================================================
// Tests
// ===========================================================================

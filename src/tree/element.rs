//! Element data: ids, class tags, capability flags, state.

use bitflags::bitflags;
use slotmap::new_key_type;

new_key_type! {
    /// Unique handle for an element in the [`Tree`](crate::tree::arena::Tree)
    /// arena. Copy, lightweight (u64).
    pub struct ElementId;
}

bitflags! {
    /// What an element supports.
    ///
    /// A control constructor grants exactly the flags its role needs, and
    /// fallible operations check them up front instead of relying on
    /// inheritance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Caps: u8 {
        /// Carries a text value.
        const TEXTUAL    = 1 << 0;
        /// Exposes a boolean checked state with change notification.
        const CHECKABLE  = 1 << 1;
        /// Carries a bounded numeric value.
        const RANGEABLE  = 1 << 2;
        /// Accepts attached style text.
        const STYLEABLE  = 1 << 3;
        /// Can be the target of a reactive binding.
        const LINKABLE   = 1 << 4;
        /// Responds to click activation.
        const CLICKABLE  = 1 << 5;
        /// Holds child elements.
        const CONTAINING = 1 << 6;
    }
}

/// Layout discipline of a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Children stacked top to bottom.
    Column,
    /// Children laid out left to right.
    Row,
    /// Children placed on a grid.
    Grid,
    /// Exactly one child visible at a time, selected by index.
    Stack,
}

impl ContainerKind {
    /// Whether this kind has a single inner-spacing value.
    ///
    /// Grid and stacked containers have no linear spacing concept; `gap`
    /// skips the spacing part for them.
    pub fn is_linear(self) -> bool {
        matches!(self, Self::Column | Self::Row)
    }
}

/// Bounded numeric state for rangeable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    pub min: i32,
    pub max: i32,
    pub value: i32,
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            value: 0,
        }
    }
}

/// Data for a single element in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Class tag, the default style selector. Defaults to the constructing
    /// control's type name (e.g. "Button").
    pub class_tag: String,
    /// Unique id. Empty until assigned.
    pub id: String,
    /// Capability flags.
    pub caps: Caps,
    /// Whether the element accepts input.
    pub enabled: bool,
    /// Whether the element is shown.
    pub visible: bool,
    /// Boolean state of checkable controls.
    pub checked: bool,
    /// Text value of textual controls (label caption, field contents).
    pub text: Option<String>,
    /// Placeholder shown by empty input fields.
    pub placeholder: Option<String>,
    /// Choice entries of list-like controls.
    pub items: Vec<String>,
    /// Numeric state of rangeable controls.
    pub range: Option<RangeState>,
    /// Layout discipline; `Some` only for containers.
    pub kind: Option<ContainerKind>,
    /// Uniform outer margin on all four sides.
    pub margin: u16,
    /// Inner spacing between successive children. Meaningful only for
    /// linear container kinds.
    pub spacing: u16,
    /// Index of the visible child of a stacked container.
    pub active_child: usize,
    /// Accumulated style text handed opaquely to the renderer.
    pub style: String,
}

impl ElementData {
    /// Create element data with the given class tag and capabilities.
    pub fn new(class_tag: impl Into<String>, caps: Caps) -> Self {
        Self {
            class_tag: class_tag.into(),
            id: String::new(),
            caps,
            enabled: true,
            visible: true,
            checked: false,
            text: None,
            placeholder: None,
            items: Vec::new(),
            range: None,
            kind: None,
            margin: 0,
            spacing: 0,
            active_child: 0,
            style: String::new(),
        }
    }

    /// Set the text value (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the placeholder text (builder).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the container kind (builder).
    pub fn with_kind(mut self, kind: ContainerKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the choice entries (builder).
    pub fn with_items(mut self, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the element supports every flag in `caps`.
    pub fn supports(&self, caps: Caps) -> bool {
        self.caps.contains(caps)
    }

    /// Whether the element can hold children.
    pub fn is_container(&self) -> bool {
        self.supports(Caps::CONTAINING)
    }

    /// The element's style selector: `tag#id` when the id is non-empty,
    /// the bare class tag otherwise.
    pub fn selector(&self) -> String {
        if self.id.is_empty() {
            self.class_tag.clone()
        } else {
            format!("{}#{}", self.class_tag, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = ElementData::new("Button", Caps::CLICKABLE | Caps::TEXTUAL);
        assert_eq!(data.class_tag, "Button");
        assert!(data.id.is_empty());
        assert!(data.enabled);
        assert!(data.visible);
        assert!(!data.checked);
        assert!(data.text.is_none());
        assert!(data.kind.is_none());
        assert_eq!(data.margin, 0);
        assert_eq!(data.spacing, 0);
    }

    #[test]
    fn supports() {
        let data = ElementData::new("CheckBox", Caps::CHECKABLE | Caps::LINKABLE);
        assert!(data.supports(Caps::CHECKABLE));
        assert!(data.supports(Caps::CHECKABLE | Caps::LINKABLE));
        assert!(!data.supports(Caps::CONTAINING));
    }

    #[test]
    fn selector_bare_tag() {
        let data = ElementData::new("Button", Caps::CLICKABLE);
        assert_eq!(data.selector(), "Button");
    }

    #[test]
    fn selector_with_id() {
        let mut data = ElementData::new("Button", Caps::CLICKABLE);
        data.id = "save".to_owned();
        assert_eq!(data.selector(), "Button#save");
    }

    #[test]
    fn container_kind_linearity() {
        assert!(ContainerKind::Column.is_linear());
        assert!(ContainerKind::Row.is_linear());
        assert!(!ContainerKind::Grid.is_linear());
        assert!(!ContainerKind::Stack.is_linear());
    }

    #[test]
    fn range_state_default() {
        let range = RangeState::default();
        assert_eq!(range.min, 0);
        assert_eq!(range.max, 100);
        assert_eq!(range.value, 0);
    }

    #[test]
    fn builders() {
        let data = ElementData::new("ComboBox", Caps::TEXTUAL)
            .with_text("pick one")
            .with_items(["a", "b"]);
        assert_eq!(data.text.as_deref(), Some("pick one"));
        assert_eq!(data.items, vec!["a", "b"]);

        let group = ElementData::new("Column", Caps::CONTAINING).with_kind(ContainerKind::Column);
        assert_eq!(group.kind, Some(ContainerKind::Column));
        assert!(group.is_container());
    }

    #[test]
    fn element_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<ElementId>();
    }
}

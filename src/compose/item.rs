//! Composition items: the tagged shapes a container accepts.
//!
//! Composition input is an explicit tagged union rather than runtime shape
//! inspection: the caller picks the constructor at compile time, and
//! unrecognized shapes cannot exist.

use crate::tree::element::ElementId;

/// One item passed to a container's [`add`](crate::ui::Ui::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// An existing element, attached as a child. An element with the
    /// containing capability becomes a nested sub-container leaf, subtree
    /// intact.
    Node(ElementId),
    /// A fresh vertical group composed from the nested items.
    Column(Vec<Item>),
    /// A fresh horizontal group composed from the nested items.
    Row(Vec<Item>),
    /// A fresh grid group composed from the nested items.
    Grid(Vec<Item>),
    /// A plain string, wrapped as a small paragraph-style text leaf.
    Text(String),
    /// A flexible spacer consuming available main-axis space.
    Stretch,
    /// Ignored; produces no child.
    Skip,
}

impl Item {
    /// A vertical group of items.
    pub fn column<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self::Column(items.into_iter().map(Into::into).collect())
    }

    /// A horizontal group of items.
    pub fn row<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self::Row(items.into_iter().map(Into::into).collect())
    }

    /// A grid group of items.
    pub fn grid<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Self::Grid(items.into_iter().map(Into::into).collect())
    }

    /// Whether this item produces no child.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

impl From<ElementId> for Item {
    fn from(element: ElementId) -> Self {
        Self::Node(element)
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// `None` composes to nothing, mirroring optional sections in builders.
impl<T: Into<Item>> From<Option<T>> for Item {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Skip,
        }
    }
}

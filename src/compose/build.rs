//! Composition: building the element tree from nested items.
//!
//! `add` dispatches on the [`Item`] shape: existing elements attach as
//! children (containers become nested sub-container leaves), `Column`/`Row`/
//! `Grid` recurse into fresh groups, strings become paragraph text leaves,
//! `Stretch` becomes a spacer, and `Skip` produces nothing. Children append
//! in call order and are never reordered.

use crate::compose::item::Item;
use crate::controls;
use crate::error::{Error, Result};
use crate::tree::element::{Caps, ElementData, ElementId};
use crate::ui::Ui;

impl Ui {
    /// Compose one item into a container.
    ///
    /// Returns the id of the produced child, or `None` for [`Item::Skip`].
    /// Fails with [`Error::MissingCapability`] if the container cannot hold
    /// children, or [`Error::NotFound`] if a referenced element is stale.
    pub fn add(&mut self, container: ElementId, item: impl Into<Item>) -> Result<Option<ElementId>> {
        self.require(container, Caps::CONTAINING)?;
        self.add_item(container, item.into())
    }

    /// Compose a sequence of items into a container, in order.
    pub fn add_all<I, T>(&mut self, container: ElementId, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        for item in items {
            self.add(container, item)?;
        }
        Ok(())
    }

    fn add_item(&mut self, parent: ElementId, item: Item) -> Result<Option<ElementId>> {
        match item {
            Item::Skip => Ok(None),
            Item::Node(element) => {
                if !self.tree.contains(element) {
                    return Err(Error::not_found("tree", format!("{element:?}")));
                }
                self.tree.attach(parent, element);
                Ok(Some(element))
            }
            Item::Column(items) => self.add_group(parent, controls::column(), items).map(Some),
            Item::Row(items) => self.add_group(parent, controls::row(), items).map(Some),
            Item::Grid(items) => self.add_group(parent, controls::grid(), items).map(Some),
            Item::Text(content) => Ok(Some(self.tree.insert_child(parent, controls::text(content)))),
            Item::Stretch => Ok(Some(self.tree.insert_child(parent, controls::spacer()))),
        }
    }

    fn add_group(
        &mut self,
        parent: ElementId,
        group: ElementData,
        items: Vec<Item>,
    ) -> Result<ElementId> {
        let group = self.tree.insert_child(parent, group);
        for item in items {
            self.add_item(group, item)?;
        }
        Ok(group)
    }

    // -- layout knobs --------------------------------------------------------

    /// Set the uniform outer margin on all four sides.
    pub fn padding(&mut self, element: ElementId, margin: u16) -> Result<()> {
        self.data_mut(element)?.margin = margin;
        Ok(())
    }

    /// Set the outer margin to `gap` and, best-effort, the inner spacing
    /// too.
    ///
    /// Only linear containers (columns and rows) have a single spacing
    /// value; for anything else the spacing part is silently skipped rather
    /// than failing — the outer margin still applies.
    pub fn gap(&mut self, element: ElementId, gap: u16) -> Result<()> {
        let data = self.data_mut(element)?;
        data.margin = gap;
        match data.kind {
            Some(kind) if kind.is_linear() => data.spacing = gap,
            _ => log::debug!(
                "gap: `{}` has no linear spacing concept, set margin only",
                data.class_tag
            ),
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Navigation switcher: a sidebar of links driving a stacked content area.
//!
//! A [`NavSwitcher`] owns an ordered sidebar of link entries and a single
//! stacked container showing exactly one child at a time. Activating a link
//! is a direct O(1) index set on the stacked area — there is no history and
//! no "back"; switching is always absolute.

use crate::compose::Item;
use crate::controls;
use crate::error::{Error, Result};
use crate::link::ClickAction;
use crate::tree::element::{Caps, ContainerKind, ElementData, ElementId};
use crate::ui::Ui;

/// One sidebar entry: a label, optionally carrying destination content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    label: String,
    destination: Option<Item>,
}

impl NavEntry {
    /// A link without a destination (a plain sidebar label).
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destination: None,
        }
    }

    /// Set the destination content node (builder).
    pub fn target(mut self, destination: impl Into<Item>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

/// Sidebar-plus-stack navigation, switched by direct index set.
#[derive(Debug)]
pub struct NavSwitcher {
    root: ElementId,
    sidebar: ElementId,
    stack: ElementId,
    links: Vec<ElementId>,
}

impl NavSwitcher {
    /// Build the switcher: a row holding the sidebar column of links and
    /// the stacked content area.
    ///
    /// Every entry with a destination is composed into the stacked area, in
    /// encounter order; the first-added child is the initially visible one.
    pub fn new(ui: &mut Ui, entries: impl IntoIterator<Item = NavEntry>) -> Result<Self> {
        let root = ui.insert(
            ElementData::new("NavSwitcher", Caps::CONTAINING | Caps::STYLEABLE | Caps::LINKABLE)
                .with_kind(ContainerKind::Row),
        );
        let sidebar = ui.tree.insert_child(
            root,
            ElementData::new("NavBar", Caps::CONTAINING | Caps::STYLEABLE | Caps::LINKABLE)
                .with_kind(ContainerKind::Column),
        );
        let stack = ui.tree.insert_child(root, controls::stack());

        let mut switcher = Self {
            root,
            sidebar,
            stack,
            links: Vec::new(),
        };
        switcher.extend(ui, entries)?;
        Ok(switcher)
    }

    /// Append more links and stacked children in the same manner as
    /// construction.
    ///
    /// The currently visible child is not disturbed; a newly added link
    /// shows its content only when explicitly activated.
    pub fn extend(&mut self, ui: &mut Ui, entries: impl IntoIterator<Item = NavEntry>) -> Result<()> {
        for entry in entries {
            let mut link_data = controls::button(entry.label);
            link_data.class_tag = "NavLink".to_owned();
            let link = ui.tree.insert_child(self.sidebar, link_data);

            if let Some(destination) = entry.destination {
                if ui.add(self.stack, destination)?.is_some() {
                    let index = ui.tree.children(self.stack).len() - 1;
                    ui.on_click(
                        link,
                        ClickAction::ShowStackChild {
                            stack: self.stack,
                            index,
                        },
                    )?;
                }
            }
            self.links.push(link);
        }
        Ok(())
    }

    /// Activate the link at `index`, as a click would.
    pub fn activate(&self, ui: &mut Ui, index: usize) -> Result<()> {
        let link = self
            .links
            .get(index)
            .copied()
            .ok_or_else(|| Error::not_found("nav links", index.to_string()))?;
        ui.click(link)?;
        Ok(())
    }

    /// The switcher's root element, for composing it into a screen.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// The sidebar column holding the link elements.
    pub fn sidebar(&self) -> ElementId {
        self.sidebar
    }

    /// The stacked content area.
    pub fn stack(&self) -> ElementId {
        self.stack
    }

    /// The link elements, in sidebar order.
    pub fn links(&self) -> &[ElementId] {
        &self.links
    }

    /// The currently visible stacked child, if the stack has any children.
    pub fn visible_child(&self, ui: &Ui) -> Option<ElementId> {
        let index = ui.get(self.stack)?.active_child;
        ui.tree.children(self.stack).get(index).copied()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

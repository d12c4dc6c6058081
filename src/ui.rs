//! Ui composition root: tree + registry + reactive links.
//!
//! [`Ui`] is instantiated once per application root and owns the element
//! arena, the id registry, the binding table, and the click-action table.
//! Composition ([`Ui::add`](crate::compose)), linkage
//! ([`Ui::link`](crate::link)), and navigation ([`crate::nav`]) are all
//! expressed as operations on this one struct, so every mutation happens on
//! the single UI thread that owns it.

use slotmap::SecondaryMap;

use crate::error::{Error, Result};
use crate::link::{ClickAction, Links};
use crate::registry::Registry;
use crate::style::{StyleRule, StyleSheet};
use crate::tree::element::{Caps, ElementData, ElementId, RangeState};
use crate::tree::Tree;

/// The application root.
pub struct Ui {
    /// The element tree.
    pub tree: Tree,
    /// The id registry.
    pub registry: Registry,
    /// Reactive bindings, keyed by source element.
    pub(crate) links: Links,
    /// Click actions attached to clickable elements.
    pub(crate) actions: SecondaryMap<ElementId, ClickAction>,
}

impl Ui {
    /// Create an empty root.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            registry: Registry::new(),
            links: Links::new(),
            actions: SecondaryMap::new(),
        }
    }

    // -- element lifecycle ---------------------------------------------------

    /// Insert a detached element into the tree.
    pub fn insert(&mut self, data: ElementData) -> ElementId {
        self.tree.insert(data)
    }

    /// Set the tree's root element.
    pub fn set_root(&mut self, element: ElementId) {
        self.tree.set_root(element);
    }

    /// The tree's root element, if set.
    pub fn root(&self) -> Option<ElementId> {
        self.tree.root()
    }

    /// Immutable access to an element's data.
    pub fn get(&self, element: ElementId) -> Option<&ElementData> {
        self.tree.get(element)
    }

    /// Detach an element from its parent, keeping it alive.
    pub fn detach(&mut self, element: ElementId) {
        self.tree.detach(element);
    }

    /// Destroy an element and its whole subtree.
    ///
    /// Registry entries under the destroyed elements' ids are NOT removed
    /// automatically; callers that registered ids must
    /// [`unregister`](Self::unregister) them no later than this call.
    pub fn remove(&mut self, element: ElementId) -> Option<ElementData> {
        self.tree.remove(element)
    }

    pub(crate) fn data(&self, element: ElementId) -> Result<&ElementData> {
        self.tree
            .get(element)
            .ok_or_else(|| Error::not_found("tree", format!("{element:?}")))
    }

    pub(crate) fn data_mut(&mut self, element: ElementId) -> Result<&mut ElementData> {
        self.tree
            .get_mut(element)
            .ok_or_else(|| Error::not_found("tree", format!("{element:?}")))
    }

    pub(crate) fn require(&self, element: ElementId, caps: Caps) -> Result<()> {
        let data = self.data(element)?;
        if data.supports(caps) {
            Ok(())
        } else {
            Err(Error::missing(data.class_tag.clone(), caps))
        }
    }

    // -- identification ------------------------------------------------------

    /// Assign an element's id, keeping the registry in sync.
    ///
    /// The old mapping is removed before the new one is installed, and only
    /// if it still points at this element — another element that has since
    /// taken the old id is unaffected.
    pub fn assign_id(&mut self, element: ElementId, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        let old = self.data(element)?.id.clone();
        if self.registry.lookup(&old) == Ok(element) {
            self.registry.unregister(&old);
        }
        self.data_mut(element)?.id = id.clone();
        self.registry.register(id, element);
        Ok(())
    }

    /// Register an element under its current id (possibly empty),
    /// overwriting any existing entry under that id.
    pub fn register(&mut self, element: ElementId) -> Result<()> {
        let id = self.data(element)?.id.clone();
        self.registry.register(id, element);
        Ok(())
    }

    /// Remove the registry entry for an element's current id, if it still
    /// points at this element. A no-op otherwise.
    pub fn unregister(&mut self, element: ElementId) -> Result<()> {
        let id = self.data(element)?.id.clone();
        if self.registry.lookup(&id) == Ok(element) {
            self.registry.unregister(&id);
        }
        Ok(())
    }

    /// The element registered under an id.
    pub fn lookup(&self, id: &str) -> Result<ElementId> {
        self.registry.lookup(id)
    }

    // -- state setters -------------------------------------------------------

    /// Enable or disable an element.
    pub fn set_enabled(&mut self, element: ElementId, enabled: bool) -> Result<()> {
        self.data_mut(element)?.enabled = enabled;
        Ok(())
    }

    /// Show or hide an element.
    pub fn set_visible(&mut self, element: ElementId, visible: bool) -> Result<()> {
        self.data_mut(element)?.visible = visible;
        Ok(())
    }

    /// Set the text value of a textual element.
    pub fn set_text(&mut self, element: ElementId, text: impl Into<String>) -> Result<()> {
        self.require(element, Caps::TEXTUAL)?;
        self.data_mut(element)?.text = Some(text.into());
        Ok(())
    }

    /// Set the bounds of a rangeable element, clamping its value.
    pub fn set_range(&mut self, element: ElementId, min: i32, max: i32) -> Result<()> {
        self.require(element, Caps::RANGEABLE)?;
        let range = self.data_mut(element)?.range.get_or_insert_with(RangeState::default);
        range.min = min;
        range.max = max;
        range.value = range.value.clamp(min, max);
        Ok(())
    }

    /// Set the value of a rangeable element, clamped to its bounds.
    pub fn set_value(&mut self, element: ElementId, value: i32) -> Result<()> {
        self.require(element, Caps::RANGEABLE)?;
        let range = self.data_mut(element)?.range.get_or_insert_with(RangeState::default);
        range.value = value.clamp(range.min, range.max);
        Ok(())
    }

    // -- styling -------------------------------------------------------------

    /// Replace an element's style text with a rule scoped to its selector
    /// (`tag#id` when the id is non-empty, the bare class tag otherwise).
    pub fn set_style(&mut self, element: ElementId, rule: &StyleRule) -> Result<()> {
        self.require(element, Caps::STYLEABLE)?;
        let data = self.data_mut(element)?;
        data.style = StyleSheet::new().rule(data.selector(), rule.clone()).to_text();
        Ok(())
    }

    /// Append a rule scoped to the element's selector, keeping prior style
    /// text.
    pub fn add_style(&mut self, element: ElementId, rule: &StyleRule) -> Result<()> {
        self.require(element, Caps::STYLEABLE)?;
        let data = self.data_mut(element)?;
        let scoped = StyleSheet::new().rule(data.selector(), rule.clone()).to_text();
        if !data.style.is_empty() {
            data.style.push('\n');
        }
        data.style.push_str(&scoped);
        Ok(())
    }

    /// Replace an element's style text with a whole sheet's text.
    pub fn set_sheet(&mut self, element: ElementId, sheet: &StyleSheet) -> Result<()> {
        self.require(element, Caps::STYLEABLE)?;
        self.data_mut(element)?.style = sheet.to_text();
        Ok(())
    }

    /// Append raw style text verbatim.
    pub fn add_style_text(&mut self, element: ElementId, text: &str) -> Result<()> {
        self.require(element, Caps::STYLEABLE)?;
        let data = self.data_mut(element)?;
        if !data.style.is_empty() {
            data.style.push('\n');
        }
        data.style.push_str(text);
        Ok(())
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

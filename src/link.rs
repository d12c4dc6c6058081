//! Reactive linkage: boolean-state propagation between controls.
//!
//! A binding couples a checkable source control to a dependent target.
//! Establishing one applies the mapped effect immediately (synchronous
//! initial sync) and re-applies it on every subsequent change of the
//! source's checked state, within the same event-processing step — no
//! batching, no deferral. Bindings are plain data, not closures: subscriber
//! lists are snapshotted before iteration, so a handler that unlinks or
//! removes elements mid-propagation cannot invalidate the iteration.
//!
//! Every [`Ui::link`] returns a [`LinkHandle`] disposer. Nothing tears a
//! binding down automatically; an undisposed binding simply stops firing
//! once its source element is destroyed.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::error::Result;
use crate::tree::element::{Caps, ElementId};
use crate::ui::Ui;

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// How a source's boolean state `b` maps onto a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `target.enabled = b`.
    Enable,
    /// `target.visible = b`.
    Visible,
    /// `target.visible = !b`.
    InvertedVisible,
    /// `target.checked = b` — one-way state mirroring onto a checkable
    /// target, which then notifies its own dependents.
    MirrorCheck,
}

// ---------------------------------------------------------------------------
// Binding table
// ---------------------------------------------------------------------------

new_key_type! {
    /// Disposer handle for an installed binding.
    pub struct LinkHandle;
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Binding {
    pub source: ElementId,
    pub target: ElementId,
    pub relation: Relation,
}

/// The binding table, indexed by source element for propagation.
#[derive(Default)]
pub(crate) struct Links {
    table: SlotMap<LinkHandle, Binding>,
    by_source: SecondaryMap<ElementId, Vec<LinkHandle>>,
}

impl Links {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, binding: Binding) -> LinkHandle {
        let source = binding.source;
        let handle = self.table.insert(binding);
        self.by_source
            .entry(source)
            .expect("source key must not be null")
            .or_insert_with(Vec::new)
            .push(handle);
        handle
    }

    fn remove(&mut self, handle: LinkHandle) -> Option<Binding> {
        let binding = self.table.remove(handle)?;
        if let Some(handles) = self.by_source.get_mut(binding.source) {
            handles.retain(|&h| h != handle);
        }
        Some(binding)
    }

    fn get(&self, handle: LinkHandle) -> Option<Binding> {
        self.table.get(handle).copied()
    }

    /// Snapshot the handles subscribed to a source.
    fn of_source(&self, source: ElementId) -> Vec<LinkHandle> {
        self.by_source.get(source).cloned().unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}

// ---------------------------------------------------------------------------
// Click actions
// ---------------------------------------------------------------------------

/// What happens when a clickable element is activated, beyond toggling its
/// own checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Make a stacked container show the child at `index`.
    ShowStackChild { stack: ElementId, index: usize },
    /// A named action surfaced to the caller of [`Ui::click`].
    Named(String),
}

// ---------------------------------------------------------------------------
// Ui operations
// ---------------------------------------------------------------------------

impl Ui {
    /// Bind a target's state to a checkable source.
    ///
    /// The source must be `CHECKABLE` (it exposes boolean state with change
    /// notification) and the target `LINKABLE`; [`Relation::MirrorCheck`]
    /// additionally needs a `CHECKABLE` target. The mapped effect is applied
    /// to the target immediately, then on every change of the source's
    /// checked state until the returned handle is passed to
    /// [`unlink`](Self::unlink). Later bindings never cancel earlier ones;
    /// when several target the same element, the one that fired most
    /// recently wins.
    pub fn link(
        &mut self,
        source: ElementId,
        target: ElementId,
        relation: Relation,
    ) -> Result<LinkHandle> {
        self.require(source, Caps::CHECKABLE)?;
        self.require(target, Caps::LINKABLE)?;
        if relation == Relation::MirrorCheck {
            self.require(target, Caps::CHECKABLE)?;
        }

        let binding = Binding {
            source,
            target,
            relation,
        };
        // Synchronous initial sync before the subscription is installed.
        let checked = self.data(source)?.checked;
        self.apply(binding, checked);
        Ok(self.links.insert(binding))
    }

    /// Bind a target to the source registered under `source_id`.
    pub fn link_by_id(
        &mut self,
        source_id: &str,
        target: ElementId,
        relation: Relation,
    ) -> Result<LinkHandle> {
        let source = self.lookup(source_id)?;
        self.link(source, target, relation)
    }

    /// Dispose a binding. Returns whether it was still installed.
    pub fn unlink(&mut self, handle: LinkHandle) -> bool {
        self.links.remove(handle).is_some()
    }

    /// Number of installed bindings.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Set a checkable element's boolean state, propagating to its
    /// dependents.
    ///
    /// A write that does not change the state notifies nobody, which bounds
    /// the depth of mirror chains and breaks mirror cycles.
    pub fn set_checked(&mut self, element: ElementId, checked: bool) -> Result<()> {
        self.require(element, Caps::CHECKABLE)?;
        let data = self.data_mut(element)?;
        if data.checked == checked {
            return Ok(());
        }
        data.checked = checked;
        self.propagate(element);
        Ok(())
    }

    /// Flip a checkable element's boolean state. Returns the new state.
    pub fn toggle(&mut self, element: ElementId) -> Result<bool> {
        let checked = !self.data(element)?.checked;
        self.set_checked(element, checked)?;
        Ok(checked)
    }

    /// Re-apply every binding whose source is `element`, synchronously.
    fn propagate(&mut self, element: ElementId) {
        // Snapshot: a binding applied here may unlink others or remove
        // elements; stale handles are skipped below.
        let snapshot = self.links.of_source(element);
        for handle in snapshot {
            let Some(binding) = self.links.get(handle) else {
                continue;
            };
            let Some(checked) = self.tree.get(binding.source).map(|d| d.checked) else {
                continue;
            };
            self.apply(binding, checked);
        }
    }

    /// Apply one binding's effect for source state `checked`.
    fn apply(&mut self, binding: Binding, checked: bool) {
        let Some(target) = self.tree.get_mut(binding.target) else {
            return;
        };
        match binding.relation {
            Relation::Enable => target.enabled = checked,
            Relation::Visible => target.visible = checked,
            Relation::InvertedVisible => target.visible = !checked,
            Relation::MirrorCheck => {
                if target.checked != checked {
                    target.checked = checked;
                    self.propagate(binding.target);
                }
            }
        }
    }

    // -- clicks --------------------------------------------------------------

    /// Attach a click action to a clickable element, replacing any previous
    /// one.
    pub fn on_click(&mut self, element: ElementId, action: ClickAction) -> Result<()> {
        self.require(element, Caps::CLICKABLE)?;
        self.actions.insert(element, action);
        Ok(())
    }

    /// Activate a clickable element, as user input would.
    ///
    /// Disabled elements swallow the click. A checkable element toggles its
    /// state first (driving its bindings); then the element's click action
    /// runs. A [`ClickAction::Named`] action is returned to the caller.
    pub fn click(&mut self, element: ElementId) -> Result<Option<String>> {
        self.require(element, Caps::CLICKABLE)?;
        if !self.data(element)?.enabled {
            return Ok(None);
        }

        if self.data(element)?.supports(Caps::CHECKABLE) {
            self.toggle(element)?;
        }

        match self.actions.get(element).cloned() {
            Some(ClickAction::ShowStackChild { stack, index }) => {
                self.show_stack_child(stack, index)?;
                Ok(None)
            }
            Some(ClickAction::Named(name)) => Ok(Some(name)),
            None => Ok(None),
        }
    }

    /// Make a stacked container show the child at `index` — a direct O(1)
    /// index set with no history.
    pub fn show_stack_child(&mut self, stack: ElementId, index: usize) -> Result<()> {
        let count = self.tree.children(stack).len();
        if index >= count {
            log::debug!("stack child index {index} out of range ({count} children)");
            return Ok(());
        }
        self.data_mut(stack)?.active_child = index;
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

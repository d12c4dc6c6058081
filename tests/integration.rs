//! Integration tests for weft.
//!
//! These tests exercise the public API from outside the crate, composing a
//! realistic settings screen: a navigation switcher, styled headings, and
//! checkbox-driven sections.

use weft::compose::Item;
use weft::controls;
use weft::error::Error;
use weft::link::Relation;
use weft::nav::{NavEntry, NavSwitcher};
use weft::style::{presets, FontWeight, StyleRule, StyleSheet};
use weft::tree::{Caps, ElementId};
use weft::ui::Ui;

// ---------------------------------------------------------------------------
// Composing a screen
// ---------------------------------------------------------------------------

/// Build the "connection" settings section: a checkbox gating a form.
fn connection_section(ui: &mut Ui) -> ElementId {
    let section = ui.insert(controls::column());

    let enable = ui.insert(controls::check_box("Use a proxy"));
    ui.assign_id(enable, "enableproxy").unwrap();

    let host = ui.insert(controls::field("Host"));
    let port = ui.insert(controls::field("Port"));
    let auth = ui.insert(controls::toggle());
    let username = ui.insert(controls::field("Username"));
    let password = ui.insert(controls::field("Password"));

    ui.add_all(
        section,
        vec![
            Item::from(enable),
            Item::row([host, port]),
            Item::row([auth, username, password]),
            Item::Stretch,
        ],
    )
    .unwrap();

    for target in [host, port, auth] {
        ui.link_by_id("enableproxy", target, Relation::Enable).unwrap();
    }
    for target in [username, password] {
        ui.link(auth, target, Relation::Enable).unwrap();
    }

    section
}

#[test]
fn settings_screen_composes_and_reacts() {
    let mut ui = Ui::new();
    let section = connection_section(&mut ui);
    ui.set_root(section);

    // Checkbox + two rows + spacer.
    assert_eq!(ui.tree.children(section).len(), 4);

    let enable = ui.lookup("enableproxy").unwrap();
    let rows = ui.tree.children(section).to_vec();
    let host = ui.tree.children(rows[1])[0];
    let username = ui.tree.children(rows[2])[1];

    // Everything starts disabled: both gates are unchecked.
    assert!(!ui.get(host).unwrap().enabled);
    assert!(!ui.get(username).unwrap().enabled);

    // Checking the proxy gate enables the host row and the auth toggle,
    // but the credential fields wait for the auth toggle.
    ui.click(enable).unwrap();
    assert!(ui.get(host).unwrap().enabled);
    assert!(!ui.get(username).unwrap().enabled);

    let auth = ui.tree.children(rows[2])[0];
    ui.click(auth).unwrap();
    assert!(ui.get(username).unwrap().enabled);
}

#[test]
fn nested_literal_structures_expand() {
    let mut ui = Ui::new();
    let root = ui.insert(controls::column());
    ui.set_root(root);

    let save = ui.insert(controls::button("Save"));
    ui.add(
        root,
        Item::column([
            Item::Text("Heading".into()),
            Item::row(vec![Item::from(save), Item::Stretch, Item::Skip]),
            Item::grid(["a", "b", "c", "d"]),
        ]),
    )
    .unwrap();

    let outer = ui.tree.children(root)[0];
    let kids = ui.tree.children(outer).to_vec();
    assert_eq!(kids.len(), 3);
    // The row holds the button and a spacer; the Skip produced nothing.
    assert_eq!(ui.tree.children(kids[1]).len(), 2);
    assert_eq!(ui.tree.children(kids[2]).len(), 4);
}

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

#[test]
fn styled_heading_produces_exact_text() {
    let mut ui = Ui::new();
    let heading = ui.insert(controls::label("Settings"));
    ui.assign_id(heading, "settings-header").unwrap();
    ui.set_style(
        heading,
        &StyleRule::new()
            .font_size("24px")
            .font_weight(FontWeight::Bold),
    )
    .unwrap();

    assert_eq!(
        ui.get(heading).unwrap().style,
        "Label#settings-header { font-size:24px;\nfont-weight:bold; };"
    );
}

#[test]
fn button_sheet_with_states() {
    let mut ui = Ui::new();
    let button = ui.insert(controls::button("OK"));
    let sheet = StyleSheet::new()
        .rule(
            "Button",
            StyleRule::new()
                .background("#4CAF50")
                .color("white")
                .border_radius("10px"),
        )
        .rule("Button:hover", StyleRule::new().background("#45a049"))
        .rule(
            "Button:focus",
            StyleRule::new().border("2px solid #4CAF50").outline("none"),
        );
    ui.set_sheet(button, &sheet).unwrap();

    let text = ui.get(button).unwrap().style.clone();
    assert!(text.starts_with("Button { background:#4CAF50;"));
    assert!(text.contains("Button:hover { background:#45a049; };"));
    assert!(text.ends_with("Button:focus { border:2px solid #4CAF50;\noutline:none; };"));
}

#[test]
fn presets_apply_to_controls() {
    let mut ui = Ui::new();
    let caption = ui.insert(controls::label("hint"));
    ui.set_style(caption, &presets::text::caption()).unwrap();
    assert_eq!(ui.get(caption).unwrap().style, "Label { font-size:14px; };");
}

// ---------------------------------------------------------------------------
// Registry across a screen
// ---------------------------------------------------------------------------

#[test]
fn registry_spans_the_whole_tree() {
    let mut ui = Ui::new();
    let section = connection_section(&mut ui);
    ui.set_root(section);

    let status = ui.insert(controls::label("None"));
    ui.assign_id(status, "current-list").unwrap();
    ui.add(section, status).unwrap();

    let found = ui.lookup("current-list").unwrap();
    ui.set_text(found, "/tmp/users.txt").unwrap();
    assert_eq!(
        ui.get(status).unwrap().text.as_deref(),
        Some("/tmp/users.txt")
    );
}

#[test]
fn reassigning_ids_keeps_selector_in_sync() {
    let mut ui = Ui::new();
    let label = ui.insert(controls::label("x"));
    ui.assign_id(label, "old").unwrap();
    ui.assign_id(label, "new").unwrap();

    assert!(matches!(ui.lookup("old"), Err(Error::NotFound { .. })));
    assert_eq!(ui.lookup("new").unwrap(), label);
    assert_eq!(ui.get(label).unwrap().selector(), "Label#new");
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn full_screen_with_navigation() {
    let mut ui = Ui::new();
    let root = ui.insert(controls::column());
    ui.set_root(root);

    let configure = connection_section(&mut ui);
    let nav = NavSwitcher::new(
        &mut ui,
        [
            NavEntry::new("HOME").target(Item::column(["Welcome!"])),
            NavEntry::new("CONFIGURE").target(configure),
            NavEntry::new("RUN").target(Item::column(["Select a script", "No script loaded"])),
        ],
    )
    .unwrap();
    ui.add(root, nav.root()).unwrap();
    ui.gap(root, 5).unwrap();

    // Initially on HOME.
    let children = ui.tree.children(nav.stack()).to_vec();
    assert_eq!(nav.visible_child(&ui), Some(children[0]));

    // Clicking CONFIGURE shows the wired section; its bindings still work.
    ui.click(nav.links()[1]).unwrap();
    assert_eq!(nav.visible_child(&ui), Some(configure));
    let enable = ui.lookup("enableproxy").unwrap();
    ui.click(enable).unwrap();
    assert!(ui.get(enable).unwrap().checked);

    // B -> A -> B lands on exactly the same child.
    ui.click(nav.links()[2]).unwrap();
    let after_run = nav.visible_child(&ui);
    ui.click(nav.links()[0]).unwrap();
    ui.click(nav.links()[2]).unwrap();
    assert_eq!(nav.visible_child(&ui), after_run);
}

// ---------------------------------------------------------------------------
// Capability boundaries
// ---------------------------------------------------------------------------

#[test]
fn capability_errors_surface() {
    let mut ui = Ui::new();
    let label = ui.insert(controls::label("x"));
    let button = ui.insert(controls::button("y"));

    // A label cannot hold children.
    assert!(matches!(
        ui.add(label, "child"),
        Err(Error::MissingCapability { .. })
    ));
    // A button has no boolean state to act as a binding source.
    assert!(matches!(
        ui.link(button, label, Relation::Enable),
        Err(Error::MissingCapability { required, .. }) if required == Caps::CHECKABLE
    ));
}

#[test]
fn link_disposal_is_clean_teardown() {
    let mut ui = Ui::new();
    let gate = ui.insert(controls::toggle());
    let field = ui.insert(controls::field("value"));
    let handle = ui.link(gate, field, Relation::Visible).unwrap();

    ui.set_checked(gate, true).unwrap();
    assert!(ui.get(field).unwrap().visible);

    assert!(ui.unlink(handle));
    ui.set_checked(gate, false).unwrap();
    assert!(ui.get(field).unwrap().visible);
}

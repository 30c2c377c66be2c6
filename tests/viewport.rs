use leptos::*;
use quickcheck_macros::quickcheck;
use radbot_dashboard::application::{NavigationStore, ViewportStore};
use radbot_dashboard::domain::navigation::Tab;
use radbot_dashboard::domain::viewport::{Breakpoint, classify, classify_css_width};
use std::cell::Cell;
use std::rc::Rc;

#[quickcheck]
fn exactly_one_class_is_set(width: u32) -> bool {
    let state = classify(width);
    [state.is_mobile, state.is_tablet, state.is_desktop]
        .iter()
        .filter(|flag| **flag)
        .count()
        == 1
}

#[quickcheck]
fn css_width_never_panics(width: f64) -> bool {
    let state = classify_css_width(width);
    state.is_mobile || state.is_tablet || state.is_desktop
}

#[test]
fn tablet_state_serializes_in_camel_case() {
    insta::assert_json_snapshot!(classify(800), @r###"
    {
      "isMobile": false,
      "isTablet": true,
      "isDesktop": false,
      "width": 800
    }
    "###);
}

#[test]
fn breakpoint_follows_width() {
    assert_eq!(classify(320).breakpoint(), Breakpoint::Mobile);
    assert_eq!(classify(900).breakpoint(), Breakpoint::Tablet);
    assert_eq!(classify(1440).breakpoint(), Breakpoint::Desktop);
}

#[test]
fn navigation_store_starts_on_trade() {
    let runtime = create_runtime();

    let store = NavigationStore::new();
    assert_eq!(store.active_tab(), Tab::Trade);
    store.set_active_tab(Tab::Dashboard);
    assert_eq!(store.active_tab(), Tab::Dashboard);

    runtime.dispose();
}

#[test]
fn reselecting_the_active_tab_keeps_the_view() {
    let runtime = create_runtime();

    let store = NavigationStore::new();
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    create_effect(move |_| {
        store.active_tab();
        counter.set(counter.get() + 1);
    });
    let initial_runs = runs.get();

    store.set_active_tab(Tab::Trade);
    store.set_active_tab(Tab::Trade);
    assert_eq!(runs.get(), initial_runs);

    store.set_active_tab(Tab::Dashboard);
    assert_eq!(runs.get(), initial_runs + 1);
    store.set_active_tab(Tab::Dashboard);
    assert_eq!(runs.get(), initial_runs + 1);

    runtime.dispose();
}

#[test]
fn viewport_store_only_notifies_on_change() {
    let runtime = create_runtime();

    let store = ViewportStore::new();
    assert!(store.state().is_desktop);

    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    create_effect(move |_| {
        store.state();
        counter.set(counter.get() + 1);
    });
    let initial_runs = runs.get();

    store.update_width(500.7);
    assert!(store.is_mobile());
    assert_eq!(runs.get(), initial_runs + 1);

    // Same whole-pixel width: no write, no rerun.
    store.update_width(500.2);
    assert_eq!(runs.get(), initial_runs + 1);

    store.update_width(1024.0);
    assert!(store.state().is_desktop);
    assert_eq!(runs.get(), initial_runs + 2);

    runtime.dispose();
}

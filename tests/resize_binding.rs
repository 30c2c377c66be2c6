#![cfg(target_arch = "wasm32")]

use leptos::*;
use radbot_dashboard::application::ViewportStore;
use radbot_dashboard::infrastructure::browser::{
    EventOptions, window_event_listener_with_options, window_inner_width,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fire_resize() {
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn removed_listener_stops_firing() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let handle = window_event_listener_with_options(ev::resize, &EventOptions::default(), move |_| {
        counter.set(counter.get() + 1);
    });
    assert_eq!(handle.event_name(), "resize");

    fire_resize();
    assert_eq!(calls.get(), 1);

    handle.remove();
    fire_resize();
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn binding_classifies_the_current_window() {
    let runtime = create_runtime();

    let store = ViewportStore::new();
    let mut binding = store.bind_to_window();
    assert!(binding.is_attached());

    let width = window_inner_width().unwrap() as u32;
    assert_eq!(store.state().width, width);

    fire_resize();
    assert_eq!(store.state().width, width);

    binding.detach();
    assert!(!binding.is_attached());

    runtime.dispose();
}

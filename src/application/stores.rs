//! View-facing state containers. Created once by the page shell and handed to
//! descendants through Leptos context; setters are the only write path.

use leptos::*;

use crate::domain::{
    logging::{LogComponent, get_logger},
    navigation::{NavigationState, Tab},
    viewport::{ViewportState, classify_css_width},
};
use crate::infrastructure::browser::{EventOptions, WindowEventListenerHandle, window_event_listener_with_options, window_inner_width};

#[derive(Debug, Clone, Copy)]
pub struct NavigationStore {
    state: RwSignal<NavigationState>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStore {
    pub fn new() -> Self {
        Self { state: create_rw_signal(NavigationState::default()) }
    }

    /// Reactive read.
    pub fn active_tab(&self) -> Tab {
        self.state.with(|s| s.active_tab())
    }

    /// Re-selecting the active tab does not notify, so the current view is kept.
    pub fn set_active_tab(&self, tab: Tab) {
        if self.state.with_untracked(|s| s.active_tab() == tab) {
            return;
        }
        get_logger().debug(LogComponent::Application("Navigation"), &format!("Switching to {} tab", tab));
        self.state.update(|s| s.set_active_tab(tab));
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn from_context() -> Self {
        expect_context::<Self>()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ViewportStore {
    state: RwSignal<ViewportState>,
}

impl Default for ViewportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportStore {
    pub fn new() -> Self {
        Self { state: create_rw_signal(ViewportState::default()) }
    }

    pub fn state(&self) -> ViewportState {
        self.state.get()
    }

    pub fn is_mobile(&self) -> bool {
        self.state.with(|s| s.is_mobile)
    }

    /// Reclassify from a raw CSS width. Identical results do not notify.
    pub fn update_width(&self, css_width: f64) {
        let next = classify_css_width(css_width);
        if self.state.with_untracked(|current| *current != next) {
            self.state.set(next);
        }
    }

    /// Classify now, then again on every window resize.
    pub fn bind_to_window(&self) -> ResizeBinding {
        let store = *self;
        if let Some(width) = window_inner_width() {
            store.update_width(width);
        }
        let handle = window_event_listener_with_options(ev::resize, &EventOptions::default(), move |_| {
            if let Some(width) = window_inner_width() {
                store.update_width(width);
            }
        });
        ResizeBinding { handle: Some(handle) }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn from_context() -> Self {
        expect_context::<Self>()
    }
}

/// Live resize subscription; detaches on drop.
pub struct ResizeBinding {
    handle: Option<WindowEventListenerHandle>,
}

impl ResizeBinding {
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    pub fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

use gloo_timers::callback::Timeout;
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Blob, BlobPropertyBag, Event, HtmlAnchorElement, Url};

use crate::domain::errors::{DashboardImageError, ImageResult};

/// How long a download's object URL outlives the link click.
pub const REVOKE_DELAY_MS: u32 = 1_000;

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

/// Registered window listener. The listener stays attached until `remove`.
pub struct WindowEventListenerHandle {
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl WindowEventListenerHandle {
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn remove(self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                self.callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

pub fn window_event_listener_with_options<E>(
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
    }

    WindowEventListenerHandle { event_name, callback, capture: options.capture }
}

/// `window.innerWidth` in CSS pixels, `None` outside a browser.
pub fn window_inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Save `bytes` through a temporary object URL and a synthetic link click.
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> ImageResult<()> {
    let browser_err = |what: &str| DashboardImageError::Browser(what.to_string());

    let window = web_sys::window().ok_or_else(|| browser_err("Window not available"))?;
    let document = window.document().ok_or_else(|| browser_err("Document not available"))?;
    let body = document.body().ok_or_else(|| browser_err("Document body not available"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let props = BlobPropertyBag::new();
    props.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|_| browser_err("Failed to create blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| browser_err("Failed to create object URL"))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| browser_err("Failed to create link"))?
        .dyn_into()
        .map_err(|_| browser_err("Created element is not a link"))?;
    link.set_href(&url);
    link.set_download(filename);

    let appended = body.append_child(&link).is_ok();
    link.click();
    if appended {
        let _ = body.remove_child(&link);
    }
    // Revoking in the same task can cancel the download in some browsers.
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use js_sys::{Function, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};

use crate::domain::{
    errors::{DashboardImageError, ImageResult},
    portfolio::PortfolioSnapshot,
};
use crate::format_utils::format_short_date;
use crate::infrastructure::dashboard_image::{
    ApiResponse, CaptureViewport, DashboardImageEndpoint, PngRasterizer, attachment_filename,
    render_dashboard_html,
};

/// Rasterizer backed by a JS callback `(html, width, height) => Promise<Uint8Array>`,
/// typically a headless-browser page screenshot.
struct JsRasterizer {
    callback: Function,
}

impl PngRasterizer for JsRasterizer {
    fn rasterize<'a>(&'a self, html: &'a str, viewport: CaptureViewport) -> LocalBoxFuture<'a, ImageResult<Vec<u8>>> {
        async move {
            let render_err = |e: JsValue| DashboardImageError::Render(format!("{:?}", e));

            let returned = self
                .callback
                .call3(
                    &JsValue::NULL,
                    &JsValue::from_str(html),
                    &JsValue::from(viewport.width),
                    &JsValue::from(viewport.height),
                )
                .map_err(render_err)?;

            let resolved = JsFuture::from(Promise::resolve(&returned)).await.map_err(render_err)?;
            if !resolved.is_instance_of::<Uint8Array>() {
                return Err(DashboardImageError::Render("rasterizer did not return a Uint8Array".to_string()));
            }
            Ok(Uint8Array::new(&resolved).to_vec())
        }
        .boxed_local()
    }
}

fn response_to_js(response: ApiResponse) -> Result<JsValue, JsValue> {
    let headers = Object::new();
    for (name, value) in &response.headers {
        Reflect::set(&headers, &JsValue::from_str(name), &JsValue::from_str(value))?;
    }

    let out = Object::new();
    Reflect::set(&out, &"status".into(), &JsValue::from(response.status))?;
    Reflect::set(&out, &"headers".into(), &headers)?;
    Reflect::set(&out, &"body".into(), &Uint8Array::from(response.body.as_slice()))?;
    Ok(out.into())
}

/// Entry point for the host that serves `POST /api/generate-dashboard-image`.
#[wasm_bindgen]
pub struct DashboardImageApi {
    rasterize: Function,
}

#[wasm_bindgen]
impl DashboardImageApi {
    /// `rasterize(html, width, height)` must resolve to PNG bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(rasterize: Function) -> Self {
        Self { rasterize }
    }

    /// Resolves to `{ status, headers, body }`; never rejects for render failures.
    #[wasm_bindgen(js_name = handleRequest)]
    pub fn handle_request(&self, body: String) -> Promise {
        let rasterizer = JsRasterizer { callback: self.rasterize.clone() };
        future_to_promise(async move {
            let endpoint = DashboardImageEndpoint::new(rasterizer);
            let generated_on = format_short_date(js_sys::Date::now() as u64);
            let response = endpoint.handle(body.as_bytes(), &generated_on).await;
            response_to_js(response)
        })
    }
}

/// HTML of the share card for a JSON snapshot.
#[wasm_bindgen(js_name = renderDashboardHtml)]
pub fn render_dashboard_html_js(body: &str) -> Result<String, JsValue> {
    let snapshot = PortfolioSnapshot::from_json(body.as_bytes())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let generated_on = format_short_date(js_sys::Date::now() as u64);
    Ok(render_dashboard_html(&snapshot, &generated_on, CaptureViewport::default()))
}

#[wasm_bindgen(js_name = dashboardAttachmentFilename)]
pub fn dashboard_attachment_filename(name: &str) -> String {
    attachment_filename(name)
}

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use radbot_dashboard::domain::errors::{DashboardImageError, ImageResult};
use radbot_dashboard::domain::portfolio::{PortfolioSnapshot, UserPortfolio};
use radbot_dashboard::infrastructure::dashboard_image::{
    CaptureViewport, DashboardImageEndpoint, PngRasterizer, attachment_filename,
    render_dashboard_html,
};
use std::cell::RefCell;
use std::rc::Rc;

const PNG_STUB: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', 0, 0, 0, 13];

/// Records what it was asked to rasterize and returns a canned PNG.
#[derive(Default)]
struct RecordingRasterizer {
    seen: Rc<RefCell<Vec<(String, CaptureViewport)>>>,
}

impl PngRasterizer for RecordingRasterizer {
    fn rasterize<'a>(&'a self, html: &'a str, viewport: CaptureViewport) -> LocalBoxFuture<'a, ImageResult<Vec<u8>>> {
        self.seen.borrow_mut().push((html.to_string(), viewport));
        async { Ok(PNG_STUB.to_vec()) }.boxed_local()
    }
}

struct CrashingRasterizer;

impl PngRasterizer for CrashingRasterizer {
    fn rasterize<'a>(&'a self, _html: &'a str, _viewport: CaptureViewport) -> LocalBoxFuture<'a, ImageResult<Vec<u8>>> {
        async { Err(DashboardImageError::Browser("page crashed".to_string())) }.boxed_local()
    }
}

fn john_doe_body() -> Vec<u8> {
    serde_json::to_vec(&UserPortfolio::mock().snapshot()).unwrap()
}

#[test]
fn john_doe_gets_a_png_attachment() {
    let endpoint = DashboardImageEndpoint::new(RecordingRasterizer::default());

    let response = block_on(endpoint.handle(&john_doe_body(), "1/15/2025"));

    assert_eq!(response.status, 200);
    assert_eq!(response.header("content-type"), Some("image/png"));
    assert_eq!(
        response.header("Content-Disposition"),
        Some("attachment; filename=\"radbot-dashboard-john-doe.png\"")
    );
    assert_eq!(response.body, PNG_STUB);
}

#[test]
fn card_is_captured_at_800_by_600() {
    let rasterizer = RecordingRasterizer::default();
    let seen = Rc::clone(&rasterizer.seen);
    let endpoint = DashboardImageEndpoint::new(rasterizer);

    let image = block_on(endpoint.render(&john_doe_body(), "1/15/2025")).unwrap();

    assert_eq!(image.filename, "radbot-dashboard-john-doe.png");
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].1, CaptureViewport { width: 800, height: 600 });
    assert!(seen[0].0.contains("John Doe"));
}

#[test]
fn rendered_card_carries_the_snapshot_figures() {
    let snapshot = UserPortfolio::mock().snapshot();
    let html = render_dashboard_html(&snapshot, "1/15/2025", CaptureViewport::default());

    assert!(html.contains("John Doe"));
    assert!(html.contains("1/15/2025"));
    assert!(html.contains("Jan"));
    assert!(html.contains("Jun"));
}

#[test]
fn malformed_body_is_a_generic_500() {
    let endpoint = DashboardImageEndpoint::new(RecordingRasterizer::default());

    let response = block_on(endpoint.handle(b"{\"name\": 42", "1/15/2025"));

    assert_eq!(response.status, 500);
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    insta::assert_json_snapshot!(body, @r###"
    {
      "error": "Failed to generate image"
    }
    "###);
}

#[test]
fn rasterizer_failure_is_a_generic_500() {
    let endpoint = DashboardImageEndpoint::new(CrashingRasterizer);

    let response = block_on(endpoint.handle(&john_doe_body(), "1/15/2025"));

    assert_eq!(response.status, 500);
    assert!(!String::from_utf8_lossy(&response.body).contains("page crashed"));
}

#[test]
fn blank_name_is_rejected_before_rendering() {
    let mut snapshot = UserPortfolio::mock().snapshot();
    snapshot.name = "   ".to_string();
    let body = serde_json::to_vec(&snapshot).unwrap();

    assert!(matches!(
        PortfolioSnapshot::from_json(&body),
        Err(DashboardImageError::InvalidPayload(_))
    ));
}

#[test]
fn quoted_name_keeps_the_disposition_header_well_formed() {
    let mut snapshot = UserPortfolio::mock().snapshot();
    snapshot.name = "Eve \"; filename=evil.exe".to_string();
    let body = serde_json::to_vec(&snapshot).unwrap();
    let endpoint = DashboardImageEndpoint::new(RecordingRasterizer::default());

    let response = block_on(endpoint.handle(&body, "1/15/2025"));

    assert_eq!(response.status, 200);
    assert_eq!(
        response.header("Content-Disposition"),
        Some("attachment; filename=\"radbot-dashboard-eve-filename=evil.exe.png\"")
    );
}

#[test]
fn filename_lowercases_and_hyphenates() {
    assert_eq!(attachment_filename("Mary Jane  Watson"), "radbot-dashboard-mary-jane-watson.png");
}

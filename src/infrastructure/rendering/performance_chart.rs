use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    logging::{LogComponent, get_logger},
    portfolio::PerformancePoint,
};

/// Pixel rectangle of one bar plus its label anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

/// Layout parameters shared by every bar.
#[derive(Debug, Clone, Copy)]
struct ScaleParams {
    padding: f64,
    label_space: f64,
    chart_width: f64,
    chart_height: f64,
    max_value: f64,
    slot_width: f64,
}

/// Canvas 2D bar chart of monthly portfolio value.
pub struct PerformanceChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl PerformanceChartRenderer {
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.to_string(), width, height }
    }

    fn scale_params(&self, points: &[PerformancePoint]) -> ScaleParams {
        let padding = 16.0;
        let label_space = 24.0;
        let chart_width = (self.width as f64 - padding * 2.0).max(0.0);
        let chart_height = (self.height as f64 - padding * 2.0 - label_space).max(0.0);
        let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        let slot_width = if points.is_empty() { 0.0 } else { chart_width / points.len() as f64 };

        ScaleParams { padding, label_space, chart_width, chart_height, max_value, slot_width }
    }

    /// Bars scaled against the largest value; each bar fills 60% of its slot.
    pub fn layout(&self, points: &[PerformancePoint]) -> Vec<BarRect> {
        let params = self.scale_params(points);
        if params.max_value <= 0.0 {
            return Vec::new();
        }

        let base_y = params.padding + params.chart_height;
        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let ratio = (point.value / params.max_value).clamp(0.0, 1.0);
                let height = ratio * params.chart_height;
                let width = params.slot_width * 0.6;
                let x = params.padding + i as f64 * params.slot_width + (params.slot_width - width) / 2.0;
                BarRect { x, y: base_y - height, width, height, label: point.month.clone() }
            })
            .collect()
    }

    fn get_canvas_context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("Document not available"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to get canvas element"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Failed to get 2D context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    pub fn render(&self, points: &[PerformancePoint]) -> Result<(), JsValue> {
        let context = self.get_canvas_context()?;
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let bars = self.layout(points);
        if bars.is_empty() {
            context.set_fill_style_str("#9ca3af");
            context.set_font("14px sans-serif");
            context.fill_text("No performance data", 16.0, self.height as f64 / 2.0)?;
            return Ok(());
        }

        let params = self.scale_params(points);
        let label_y = params.padding + params.chart_height + params.label_space - 6.0;
        context.set_font("12px sans-serif");
        context.set_text_align("center");

        for bar in &bars {
            context.set_fill_style_str("rgba(217, 70, 239, 0.8)");
            context.fill_rect(bar.x, bar.y, bar.width, bar.height);
            context.set_fill_style_str("#9ca3af");
            context.fill_text(&bar.label, bar.x + bar.width / 2.0, label_y)?;
        }

        get_logger().debug(
            LogComponent::Infrastructure("PerformanceChart"),
            &format!("Rendered {} bars on #{}", bars.len(), self.canvas_id),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_chart_height() {
        let renderer = PerformanceChartRenderer::new("c", 332, 200);
        let bars = renderer.layout(&[PerformancePoint::new("Jan", 50.0), PerformancePoint::new("Feb", 100.0)]);
        assert_eq!(bars.len(), 2);
        // 200 - 2*16 - 24
        assert!((bars[1].height - 144.0).abs() < 1e-9);
        assert!((bars[0].height - 72.0).abs() < 1e-9);
        assert_eq!(bars[0].y + bars[0].height, bars[1].y + bars[1].height);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn empty_or_zero_series_has_no_bars() {
        let renderer = PerformanceChartRenderer::new("c", 300, 200);
        assert!(renderer.layout(&[]).is_empty());
        assert!(renderer.layout(&[PerformancePoint::new("Jan", 0.0)]).is_empty());
    }
}

use std::fmt::Write;

use crate::domain::portfolio::{PerformancePoint, PortfolioSnapshot};
use crate::format_utils::format_grouped;
use crate::infrastructure::dashboard_image::CaptureViewport;

/// Performance value drawn as a full-height bar.
pub const PERFORMANCE_SCALE_MAX: f64 = 20_000.0;

const CARD_STYLE: &str = r#"
    body { margin: 0; padding: 0; background: #000; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; }
    * { box-sizing: border-box; }
    .card { position: relative; overflow: hidden; padding: 32px; background: #000; color: #fff; }
    .glow { position: absolute; border-radius: 9999px; opacity: 0.1; filter: blur(48px); }
    .header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 40px; }
    .brand { display: flex; gap: 24px; align-items: center; }
    .logo { width: 64px; height: 64px; border-radius: 16px; border: 1px solid rgba(255,255,255,0.2);
            background: rgba(31,41,55,0.5); display: flex; align-items: center; justify-content: center;
            font-size: 32px; font-weight: 800; }
    .muted { color: #9ca3af; }
    .panel { background: rgba(31,41,55,0.5); border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; padding: 24px; }
    .grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; margin-bottom: 40px; }
    .grid-3 { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 24px; text-align: center; }
    .big { font-size: 30px; font-weight: 700; margin: 8px 0; }
    .mid { font-size: 24px; font-weight: 700; margin: 4px 0; }
    .green { color: #4ade80; } .fuchsia { color: #e879f9; } .purple { color: #c084fc; } .blue { color: #60a5fa; }
    .bars { height: 128px; display: flex; align-items: flex-end; justify-content: space-between; gap: 8px; }
    .bar-col { flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: flex-end; height: 100%; }
    .bar { width: 100%; min-height: 12px; border-radius: 8px 8px 0 0;
           background: linear-gradient(to top, rgba(217,70,239,0.8), rgba(217,70,239,0.2)); }
    .badge { position: absolute; right: 24px; bottom: 24px; padding: 12px 16px; border-radius: 12px;
             border: 1px solid rgba(255,255,255,0.2); background: rgba(31,41,55,0.5); font-weight: 700; }
"#;

/// Minimal HTML escaping for text nodes and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Bar height as a percentage of the chart area.
pub fn bar_height_percent(value: f64) -> f64 {
    (value / PERFORMANCE_SCALE_MAX * 100.0).clamp(0.0, 100.0)
}

fn render_bars(points: &[PerformancePoint]) -> String {
    let mut bars = String::new();
    for point in points {
        let _ = write!(
            bars,
            r#"<div class="bar-col"><div class="bar" style="height: {:.2}%;"></div><span class="muted" style="font-size: 12px; margin-top: 12px;">{}</span></div>"#,
            bar_height_percent(point.value),
            escape_html(&point.month)
        );
    }
    bars
}

/// Self-contained share card; no external assets so the capture does not
/// wait on the network.
pub fn render_dashboard_html(snapshot: &PortfolioSnapshot, generated_on: &str, viewport: CaptureViewport) -> String {
    let name = escape_html(&snapshot.name);
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>RADBOT Dashboard</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="card" style="width: {width}px; height: {height}px;">
      <div class="glow" style="top: 0; right: 0; width: 256px; height: 256px; background: #d946ef;"></div>
      <div class="glow" style="bottom: 0; left: 0; width: 192px; height: 192px; background: #a855f7;"></div>
      <div class="header">
        <div class="brand">
          <div class="logo">R</div>
          <div>
            <h1 style="font-size: 30px; margin: 0 0 4px 0;">{name}</h1>
            <p class="muted" style="font-size: 18px; margin: 0;">RADBOT Portfolio Dashboard</p>
          </div>
        </div>
        <div style="text-align: right;">
          <p class="muted" style="font-size: 14px; margin: 0 0 4px 0;">Generated on</p>
          <p style="font-size: 18px; font-weight: 600; margin: 0;">{generated_on}</p>
        </div>
      </div>
      <div class="grid-2">
        <div class="panel">
          <p class="muted">Portfolio Value</p>
          <p class="big">${current_value}</p>
          <p class="green">+{profit_percentage}% total return</p>
        </div>
        <div class="panel">
          <p class="muted">sRADB Shares</p>
          <p class="big">{share_count}</p>
          <p class="fuchsia">+2.5% this week</p>
        </div>
      </div>
      <div class="panel" style="margin-bottom: 40px;">
        <div style="display: flex; justify-content: space-between; margin-bottom: 24px;">
          <h3 style="margin: 0; font-size: 20px;">Portfolio Performance</h3>
          <span class="muted">{months} Month Growth</span>
        </div>
        <div class="bars">{bars}</div>
      </div>
      <div class="grid-3">
        <div class="panel"><p class="muted">Total Profit</p><p class="mid green">${profit_amount}</p></div>
        <div class="panel"><p class="muted">Referral Earnings</p><p class="mid purple">${referral_earnings}</p></div>
        <div class="panel"><p class="muted">Total Referrals</p><p class="mid blue">{referral_count}</p></div>
      </div>
      <div class="badge">RADBOT</div>
    </div>
  </body>
</html>"#,
        style = CARD_STYLE,
        width = viewport.width,
        height = viewport.height,
        name = name,
        generated_on = escape_html(generated_on),
        current_value = format_grouped(snapshot.current_value),
        profit_percentage = snapshot.profit_percentage,
        share_count = format_grouped(snapshot.share_count),
        months = snapshot.performance_data.len(),
        bars = render_bars(&snapshot.performance_data),
        profit_amount = format_grouped(snapshot.profit_amount),
        referral_earnings = format_grouped(snapshot.referral_earnings),
        referral_count = snapshot.referral_count,
    )
}

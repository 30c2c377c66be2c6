pub mod performance_chart;

pub use performance_chart::{BarRect, PerformanceChartRenderer};

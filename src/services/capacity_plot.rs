use plotters::prelude::*;
use thiserror::Error;

use crate::services::metrics_types::CapacityMetrics;

#[derive(Error, Debug)]
pub enum CapacityPlotError {
    #[error("scenario has no stages to plot")]
    NoStages,
    #[error("failed to render capacity chart: {0}")]
    Plot(String),
}

/// Renders weekly capacity per configured stage as a PNG bar chart. The
/// binding stage is drawn in a contrasting colour.
pub fn plot_capacity_png(
    output_path: &str,
    metrics: &CapacityMetrics,
) -> Result<(), CapacityPlotError> {
    if metrics.stages.is_empty() {
        return Err(CapacityPlotError::NoStages);
    }

    let max_capacity = metrics
        .stages
        .iter()
        .map(|stage| stage.weekly_capacity)
        .fold(0.0_f64, f64::max);
    let max_y = if max_capacity > 0.0 {
        max_capacity * 1.1
    } else {
        1.0
    };
    let max_x = metrics.stages.len() as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CapacityPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Weekly Capacity by Stage", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| CapacityPlotError::Plot(e.to_string()))?;

    let stages = &metrics.stages;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Stage")
        .y_desc("Units per week")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(stages.len())
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            stages
                .get(*index as usize)
                .map(|stage| stage.stage.label().to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| CapacityPlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let binding_color = RGBColor(220, 38, 38);
    let binding_stage = metrics.ceiling.binding_stage;
    chart
        .draw_series(stages.iter().enumerate().map(|(idx, stage)| {
            let color = if Some(stage.stage) == binding_stage {
                binding_color
            } else {
                bar_color
            };
            Rectangle::new(
                [(idx as i32, 0.0), (idx as i32 + 1, stage.weekly_capacity)],
                ShapeStyle::from(&color).filled().stroke_width(1),
            )
        }))
        .map_err(|e| CapacityPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| CapacityPlotError::Plot(e.to_string()))?;
    Ok(())
}

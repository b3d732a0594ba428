//! Composition chart generation for gas analysis runs.

use anyhow::Result;
use gaslab_schemas::{component::Component, sample::CompositionSample};
use plotters::prelude::*;
use std::path::Path;

/// Draws the molar composition bar chart for one gas sample. Callers run
/// this only after a successful analysis, so the sample total is positive.
pub fn plot_composition(output_dir: &Path, sample: &CompositionSample) -> Result<()> {
    let path = output_dir.join("composition.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let total = sample.total();
    let percentages: Vec<f64> = Component::ALL
        .iter()
        .map(|&c| sample.amount(c) / total * 100.0)
        .collect();
    let max_pct = percentages.iter().fold(0.0_f64, |a, &b| a.max(b));

    let mut chart = ChartBuilder::on(&root)
        .caption("Molar Composition", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..Component::ALL.len() as f64, 0f64..max_pct * 1.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(Component::ALL.len())
        .x_label_formatter(&|x| {
            Component::ALL
                .get(*x as usize)
                .map(|c| c.symbol().to_string())
                .unwrap_or_default()
        })
        .y_desc("% molar")
        .draw()?;

    chart.draw_series(percentages.iter().enumerate().map(|(i, &pct)| {
        Rectangle::new(
            [(i as f64 + 0.1, 0.0), (i as f64 + 0.9, pct)],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    println!("[Plotting] Composition chart saved to '{}'.", path.display());
    Ok(())
}

use crate::error::{NNError, Result};
use plotters::prelude::*;

fn plot_err<E: std::fmt::Display>(err: E) -> NNError {
    NNError::PlotError(err.to_string())
}

/// Renders the training error per epoch on a log scale, with `min_error` as a target line.
pub fn plot_errors_over_epochs(errors: &[f64], min_error: f64, filename: &str) -> Result<()> {
    if errors.is_empty() {
        return Err(NNError::PlotError("no errors to plot".to_string()));
    }
    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let epochs = errors.len();

    // Adjust errors to avoid log of zero or negative numbers
    let log_errors: Vec<f64> = errors
        .iter()
        .map(|&e| (if e <= 0.0 { 1e-10 } else { e }).log10())
        .collect();
    let log_target = min_error.max(1e-10).log10();

    let y_min = log_errors
        .iter()
        .cloned()
        .fold(log_target, f64::min)
        .floor();
    let y_max = log_errors
        .iter()
        .cloned()
        .fold(log_target, f64::max)
        .ceil()
        .max(y_min + 1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Training Error over Epochs (Log Scale)", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(1..epochs.max(2), y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc("MSE (Log Scale)")
        .y_label_formatter(&|y| format!("1e{:.0}", y))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            log_errors.iter().enumerate().map(|(epoch, &log_error)| (epoch + 1, log_error)),
            &BLUE,
        ))
        .map_err(plot_err)?
        .label("Mean squared error")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            [(1, log_target), (epochs.max(2), log_target)],
            &RED,
        ))
        .map_err(plot_err)?
        .label("Minimum error")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    log::info!("Error plot has been saved as '{}'", filename);

    Ok(())
}

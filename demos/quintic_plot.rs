use std::error::Error;
use quintic_motion;
use gnuplot::*;
fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up parameters
    // -----------------------
    // Coefficients fitted for a 100 mm move in 5 s, constant term first.
    let coefficients = [0.0, 0.0, 0.0, 2.68, 1.45, 0.12];
    let duration = 5.0;

    // -------------------------
    // 2. Create the trajectory
    // -------------------------
    let trajectory = quintic_motion::QuinticTrajectory::new(&coefficients, duration)?;

    // -------------------------
    // 3. Set up data sampling
    // -------------------------
    // Reuse the exporter's 100 Hz grid so the plot matches the CSV export.
    let exporter = quintic_motion::TabularExporter::default();
    let num_points = exporter.row_count(duration)?;

    let mut time_axis = Vec::with_capacity(num_points);
    let mut positions = Vec::with_capacity(num_points);
    let mut velocities = Vec::with_capacity(num_points);
    let mut accelerations = Vec::with_capacity(num_points);
    let mut jerks = Vec::with_capacity(num_points);

    for i in 0..num_points {
        let sample = trajectory.sample(i as f64 * exporter.step());
        time_axis.push(sample.time);
        positions.push(sample.pos);
        velocities.push(sample.vel);
        accelerations.push(sample.acc);
        jerks.push(sample.jrk);
    }

    // --------------
    // 4. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Position, Velocity, Acceleration, Jerk vs. Time", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Position derivatives", &[]);
        axes.lines(&time_axis, &positions, &[Color("blue"), Caption("Position (mm)")]);
        axes.lines(&time_axis, &velocities, &[Color("red"), Caption("Velocity (mm/s)")]);
        axes.lines(&time_axis, &accelerations, &[Color("green"), Caption("Acceleration (mm/s²)")]);
        axes.lines(&time_axis, &jerks, &[Color("black"), Caption("Jerk (mm/s³)")]);
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. End position: {:.3} mm after {:.3} seconds.",
        trajectory.position(duration),
        duration
    );
    Ok(())
}

//! Terminal chain plot.
//!
//! A fixed-size character grid, small on purpose: the output is
//! deterministic (golden tests can pin it down) and gives just enough
//! geometry to eyeball a chain in a terminal.
//!
//! Plot elements:
//! - actual rise delays: `r`
//! - actual fall delays: `f`
//! - positions where rise and fall share a cell: `x`
//! - target progressions: `-` lines

use crate::domain::SequenceStep;

/// Render a chain as a fixed-size character grid.
///
/// The x axis is the chain position (1-based in the header), the y axis is
/// delay in ps. Targets are drawn first so the measured markers overlay them.
pub fn render_ascii_chain(steps: &[SequenceStep], width: usize, height: usize) -> String {
    if steps.is_empty() {
        return "No sequence to plot\n".to_string();
    }

    let width = width.max(10);
    let height = height.max(5);
    let (y_min, y_max) = padded_delay_range(steps);

    let mut grid = vec![vec![' '; width]; height];

    // Target lines go in first so the markers can overlay them.
    draw_target_line(&mut grid, steps, |s| s.target_rise, y_min, y_max);
    draw_target_line(&mut grid, steps, |s| s.target_fall, y_min, y_max);

    let n = steps.len();
    for (i, s) in steps.iter().enumerate() {
        let col = col_for(i, n, width);
        grid[row_for(s.actual_rise as f64, y_min, y_max, height)][col] = 'r';
    }
    for (i, s) in steps.iter().enumerate() {
        let col = col_for(i, n, width);
        let cell = &mut grid[row_for(s.actual_fall as f64, y_min, y_max, height)][col];
        *cell = if *cell == 'r' { 'x' } else { 'f' };
    }

    let mut out = format!("Plot: position=[1, {n}] | delay=[{y_min:.1}, {y_max:.1}] ps\n");
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Delay range over every target and actual value, padded by 5% so extreme
/// points do not sit on the border. A single-value range still gets a hair of
/// padding to keep the row mapping well defined.
fn padded_delay_range(steps: &[SequenceStep]) -> (f64, f64) {
    let mut lo = i64::MAX;
    let mut hi = i64::MIN;
    for s in steps {
        for v in [s.target_rise, s.target_fall, s.actual_rise, s.actual_fall] {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    let (lo, hi) = (lo as f64, hi as f64);
    let pad = ((hi - lo).abs() * 0.05).max(1e-12);
    (lo - pad, hi + pad)
}

fn col_for(i: usize, n: usize, width: usize) -> usize {
    let cols = width.max(2) as f64 - 1.0;
    let span = n.saturating_sub(1).max(1) as f64;
    ((i as f64 / span).clamp(0.0, 1.0) * cols).round() as usize
}

fn row_for(delay: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let rows = height.max(2) as f64 - 1.0;
    let t = ((delay - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Row 0 is the top of the grid, which is the maximum delay.
    (rows - t * rows).round() as usize
}

fn draw_target_line(
    grid: &mut [Vec<char>],
    steps: &[SequenceStep],
    value: impl Fn(&SequenceStep) -> i64,
    y_min: f64,
    y_max: f64,
) {
    if steps.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();
    let n = steps.len();

    let mut prev: Option<(usize, usize)> = None;
    for (i, s) in steps.iter().enumerate() {
        let point = (
            col_for(i, n, width),
            row_for(value(s) as f64, y_min, y_max, height),
        );
        if let Some(from) = prev {
            trace_segment(grid, from, point);
        }
        prev = Some(point);
    }
}

/// Integer segment tracing (Bresenham). Fills blank cells only, so earlier
/// strokes and markers stay visible.
fn trace_segment(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (mut x, mut y) = (from.0 as i64, from.1 as i64);
    let (x_end, y_end) = (to.0 as i64, to.1 as i64);

    let dx = (x_end - x).abs();
    let dy = -(y_end - y).abs();
    let step_x = if x < x_end { 1 } else { -1 };
    let step_y = if y < y_end { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        paint_blank(grid, x, y, '-');
        if x == x_end && y == y_end {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}

fn paint_blank(grid: &mut [Vec<char>], x: i64, y: i64, ch: char) {
    let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
        return;
    };
    if y < grid.len() && x < grid[0].len() && grid[y][x] == ' ' {
        grid[y][x] = ch;
    }
}

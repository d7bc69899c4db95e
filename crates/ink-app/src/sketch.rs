// ABOUTME: ASCII sketch of a page layout for terminal output.
// ABOUTME: Draws leaf panel boxes labeled with their frame numbers.

use ink_grid::GridLayout;
use ink_render::{frame_numbers, leaf_rects};

const WIDTH: usize = 48;
const HEIGHT: usize = 16;

/// Render the page as a character grid, one box per frame.
pub fn render(grid: &GridLayout) -> String {
    let mut canvas = vec![vec![' '; WIDTH + 1]; HEIGHT + 1];
    let frames = frame_numbers(grid);

    for ((_, rect), (_, number)) in leaf_rects(grid).iter().zip(&frames) {
        let x0 = scale(rect.x, WIDTH);
        let y0 = scale(rect.y, HEIGHT);
        let x1 = scale(rect.x + rect.width, WIDTH);
        let y1 = scale(rect.y + rect.height, HEIGHT);

        for x in x0..=x1 {
            canvas[y0][x] = '-';
            canvas[y1][x] = '-';
        }
        for row in canvas.iter_mut().take(y1 + 1).skip(y0) {
            row[x0] = '|';
            row[x1] = '|';
        }
        for &(x, y) in &[(x0, y0), (x1, y0), (x0, y1), (x1, y1)] {
            canvas[y][x] = '+';
        }

        let label = number.to_string();
        if y0 + 1 < y1 && x0 + label.len() < x1 {
            for (i, c) in label.chars().enumerate() {
                canvas[y0 + 1][x0 + 1 + i] = c;
            }
        }
    }

    let mut out = String::new();
    for row in &canvas {
        let line: String = row.iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn scale(fraction: f32, extent: usize) -> usize {
    ((fraction * extent as f32).round() as usize).min(extent)
}

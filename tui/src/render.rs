//! Frame rendering for the board.

use ratatui::Frame;
use ratatui::layout::Size;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::Themes;

/// Terminal columns per board cell; two columns make cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Board dimensions that fill a terminal of the given size.
#[must_use]
pub fn board_size(terminal: Size) -> (usize, usize) {
    (
        usize::from(terminal.width / CELL_WIDTH),
        usize::from(terminal.height),
    )
}

/// Draw the counter matrix and an optional text overlay.
///
/// Each cell paints `CELL_WIDTH` columns with the theme color for its
/// counter; overlay lines are painted over the board in theme foreground on
/// background. Anything outside the frame is clipped.
pub fn draw(frame: &mut Frame, rows: &[Vec<i64>], themes: &Themes, overlay: &[(u16, String)]) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(themes.background())),
        area,
    );

    let buf = frame.buffer_mut();
    for (y, row) in rows.iter().enumerate() {
        let py = y as u16;
        if py >= area.height {
            break;
        }
        for (x, &cycle) in row.iter().enumerate() {
            let color = themes.color(cycle);
            for dx in 0..CELL_WIDTH {
                let px = x as u16 * CELL_WIDTH + dx;
                if px >= area.width {
                    break;
                }
                if let Some(cell) = buf.cell_mut((area.x + px, area.y + py)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
    }

    let style = Style::default()
        .bg(themes.background())
        .fg(themes.foreground());
    for (y, text) in overlay {
        if *y < area.height {
            buf.set_string(area.x, area.y + y, text, style);
        }
    }
}

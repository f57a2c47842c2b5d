//! The Easter-egg page filter: while party mode is on, every frame gets a
//! cycling per-row hue wash. Purely cosmetic; symbols are untouched.

use ratatui::buffer::Buffer;
use ratatui::style::Color;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Recolor the whole frame, shifting the palette by `tick` so consecutive
/// frames animate.
pub fn apply(buf: &mut Buffer, tick: usize) {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let color = PALETTE[(y as usize + tick) % PALETTE.len()];
        for x in area.left()..area.right() {
            buf[(x, y)].set_fg(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn filter_recolors_without_touching_symbols() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::with_lines(["abcd", "efgh"]);
        apply(&mut buf, 0);
        assert_eq!(buf.area, area);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(3, 1)].symbol(), "h");
        assert_eq!(buf[(0, 0)].fg, PALETTE[0]);
        assert_eq!(buf[(0, 1)].fg, PALETTE[1]);
    }

    #[test]
    fn tick_shifts_the_palette() {
        let mut buf = Buffer::with_lines(["abcd", "efgh"]);
        apply(&mut buf, 1);
        assert_eq!(buf[(0, 0)].fg, PALETTE[1]);
        assert_eq!(buf[(0, 1)].fg, PALETTE[2]);
    }
}

use crate::game::Cell;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// What the board needs to know about each tile beyond its state.
pub struct TileView<'a> {
    pub tiles: &'a [Cell],
    pub width: usize,
    pub cursor: usize,
    /// Indices where the side to move may place, if highlighting is on
    pub legal: Option<&'a [usize]>,
}

/// Build one line per board row, three columns per tile.
pub fn board_lines(view: &TileView) -> Vec<Line<'static>> {
    view.tiles
        .chunks(view.width)
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| tile_span(view, row * view.width + col, cell))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn tile_span(view: &TileView, index: usize, cell: Cell) -> Span<'static> {
    let legal = view.legal.is_some_and(|l| l.binary_search(&index).is_ok());
    let (symbol, mut style) = match cell {
        Cell::Empty if legal => (" + ", Style::default().fg(Color::Green)),
        Cell::Empty => (" \u{00b7} ", Style::default().fg(Color::DarkGray)),
        Cell::White => (" \u{25cb} ", Style::default().fg(Color::White)),
        Cell::Black => (" \u{25cf} ", Style::default().fg(Color::LightRed)),
    };
    if index == view.cursor {
        style = style.bg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_row() {
        let tiles = vec![Cell::Empty; 6];
        let view = TileView {
            tiles: &tiles,
            width: 3,
            cursor: 0,
            legal: None,
        };
        let lines = board_lines(&view);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 3);
    }

    #[test]
    fn test_legal_and_cursor_styles() {
        let tiles = vec![Cell::White, Cell::Empty, Cell::Empty, Cell::Black];
        let legal = [1];
        let view = TileView {
            tiles: &tiles,
            width: 2,
            cursor: 3,
            legal: Some(&legal),
        };
        let lines = board_lines(&view);
        assert_eq!(lines[0].spans[1].content, " + ");
        assert_eq!(lines[1].spans[0].content, " \u{00b7} ");
        assert_eq!(lines[1].spans[1].style.bg, Some(Color::Cyan));
    }
}

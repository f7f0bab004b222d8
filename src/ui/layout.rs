use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + theme
            Constraint::Min(8),    // Active view
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// Row-major grid of fixed-size cells centered in `area`. Cells that do not
/// fit are clipped to the area.
pub fn grid(area: Rect, count: usize, cols: usize, cell_width: u16, cell_height: u16) -> Vec<Rect> {
    if cols == 0 || count == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(cols);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .constraints(vec![Constraint::Length(cell_height); rows])
        .split(area);

    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .flex(Flex::Center)
            .spacing(1)
            .constraints(vec![Constraint::Length(cell_width); cols])
            .split(*row);
        for col in col_areas.iter() {
            if cells.len() == count {
                break;
            }
            cells.push(*col);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_sections() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.footer.y, 22);
        assert_eq!(layout.body.height, 24 - 5);
    }

    #[test]
    fn test_grid_cell_count() {
        let area = Rect::new(0, 0, 80, 20);
        assert_eq!(grid(area, 9, 3, 7, 3).len(), 9);
        let cards = grid(area, 10, 4, 8, 3);
        assert_eq!(cards.len(), 10);
        assert!(cards.iter().all(|c| c.width == 8 && c.height == 3));
        assert!(grid(area, 0, 4, 8, 3).is_empty());
    }
}

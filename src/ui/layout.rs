use ratatui::layout::Rect;

/// Rows reserved for the header (borders included).
const HEADER_HEIGHT: u16 = 3;
/// Rows reserved for the footer: indicator line + hints line + borders.
const FOOTER_HEIGHT: u16 = 4;

/// Splits the frame into header, body and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Footer band for a terminal of `cols` x `rows`, used for mouse
/// hit-testing outside the draw pass.
pub fn footer_rect(cols: u16, rows: u16) -> Rect {
    layout_regions(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    })
    .2
}

/// Centers a fixed-size popup inside `area`, clamping to its bounds.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub arrow: Color,        // Cursor arrows under bars and beside cells
    pub changed: Color,      // Bars and cells touched by the last step
    pub empty_cell: Color,   // Unoccupied structure cells
    pub output_value: Color, // Key returned by remove/pop/peek
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    arrow: Color::Rgb(249, 226, 175),          // Yellow
    changed: Color::Rgb(245, 194, 231),        // Pink
    empty_cell: Color::Rgb(69, 71, 90),
    output_value: Color::Rgb(148, 226, 213), // Cyan/teal
};

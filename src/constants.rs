pub const WINDOW_WIDTH: i32 = 960;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 640;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DOT_RADIUS: f32 = 8.0;              // Indicator dot radius (pixels)
pub const DOT_SPACING: f32 = 28.0;            // Center-to-center distance between dots
pub const DOT_MARGIN_BOTTOM: f32 = 28.0;      // Distance from the dot row to the bottom edge

pub const ARROW_MARGIN: f32 = 16.0;           // Arrow button distance from the side edges
pub const ARROW_HALF_HEIGHT: f32 = 24.0;      // Half height of the arrow triangles
pub const ARROW_WIDTH: f32 = 20.0;            // Horizontal extent of the arrow triangles
pub const ARROW_HIT_PADDING: f32 = 12.0;      // Extra clickable area around each arrow

pub const COUNTER_MARGIN: i32 = 16;           // Counter text offset from the top-left corner
pub const COUNTER_FONT_SIZE: i32 = 24;

pub const DIALOG_WIDTH: f32 = 380.0;          // Quit confirmation dialog size
pub const DIALOG_HEIGHT: f32 = 130.0;
pub const DIALOG_FONT_SIZE: i32 = 20;

pub const SLIDE_FIT: f32 = 0.9;               // Slide occupies at most this fraction of the window

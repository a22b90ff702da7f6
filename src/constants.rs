pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const CONTENT_WIDTH: f32 = 1600.0;        // Width of the centered content column
pub const MARGIN: f32 = 40.0;                 // Minimum distance from the top edge
pub const BLOCK_GAP: f32 = 30.0;              // Vertical space between blocks
pub const LINE_SPACING: f32 = 1.2;            // Line height as a multiple of font size

pub const HEADING_SIZES: [i32; 6] = [170, 140, 118, 92, 76, 64];
pub const TEXT_SIZE: i32 = 64;                // List items and links
pub const CODE_SIZE: i32 = 30;                // Preferred code pane font size
pub const MIN_CODE_SIZE: i32 = 14;
pub const CODE_PADDING: f32 = 24.0;
pub const BULLET_RADIUS: f32 = 8.0;
pub const BULLET_INDENT: f32 = 48.0;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_DEBOUNCE_MS: u64 = 600;     // Transition lock after a slide change (milliseconds)
pub const KEN_BURNS_DURATION: f32 = 8.0;      // Slow pan/zoom over the active slide (seconds)
pub const FADE_DURATION: f32 = 0.6;           // Fade-in of a newly activated slide (seconds)

pub const PROGRESS_BAR_HEIGHT: i32 = 12;      // Height of the progress bar at the top edge
pub const CONTROL_SIZE: i32 = 96;             // Prev/next button square size
pub const CONTROL_MARGIN: i32 = 32;           // Distance of the controls from the screen edges
pub const DOT_RADIUS: f32 = 9.0;              // Slide indicator dots at the bottom edge
pub const DOT_SPACING: f32 = 32.0;

pub const DEFAULT_THEME: &str = "default";    // Theme for slides whose file name carries none
pub const MANIFEST_FILE: &str = "deck.toml";
pub const DEFAULT_SCRIPT: &str = "next,wait:600,next,wait:600,replay";

// Module docs live on `mod constants` in lib.rs; host tests include! this file.

// Minimum time between two accepted contact-form submissions
pub const SUBMISSION_COOLDOWN_MS: u64 = 30_000;

// Contact form field limits (characters, measured on trimmed input)
pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 5;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

// Message character counter colour thresholds
pub const CHAR_COUNT_WARN_ABOVE: usize = 800;
pub const CHAR_COUNT_DANGER_ABOVE: usize = 900;

// Notification banners
pub const NOTIFY_ERROR_MS: u32 = 5_000;
pub const NOTIFY_DEFAULT_MS: u32 = 3_000;
pub const NOTIFY_SLIDE_IN_DELAY_MS: u32 = 100;
pub const NOTIFY_SLIDE_OUT_MS: u32 = 300;

// Typed-text hero effect (milliseconds per step)
pub const TYPE_CHAR_MS: u32 = 100;
pub const DELETE_CHAR_MS: u32 = 50;
pub const TYPE_HOLD_FULL_MS: u32 = 2_000;
pub const TYPE_HOLD_EMPTY_MS: u32 = 500;

// Stat counters: a counter reaches its target in roughly this many steps
pub const COUNTER_STEPS: f64 = 200.0;
pub const COUNTER_TICK_MS: u32 = 1;

// Navigation
pub const NAVBAR_OFFSET_PX: f64 = 80.0;
pub const PARALLAX_SPEED: f64 = 0.5;

// Terminal
pub const RESUME_OPEN_DELAY_MS: u32 = 1_000;

// Konami easter egg
pub const KONAMI_HIGHLIGHT_MS: u32 = 3_000;
pub const MATRIX_RAIN_IDLE_OPACITY: &str = "0.1";
pub const MATRIX_RAIN_LIT_OPACITY: &str = "0.3";

// Hero decorations
pub const HEX_SIZE: f32 = 40.0;
pub const CODE_SNIPPET_COUNT: usize = 8;
pub const CODE_SNIPPET_FONT: &str = "12px JetBrains Mono";

pub mod keyboard;
pub mod viewport;

pub mod colors;
pub mod display;
pub mod prompt;
pub mod spinner;

pub use colors::Theme;
pub use display::*;
pub use prompt::*;
pub use spinner::Spinner;

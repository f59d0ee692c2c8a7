// UI Components

pub mod icons;
pub mod live_clock;
pub mod chat_preview;
pub mod reference_input;
pub mod copy_mode_toggle;
pub mod external_links;
pub mod emoji_grid;

pub use live_clock::LiveClock;
pub use chat_preview::{ChatPreview, PreviewTheme};
pub use reference_input::ReferenceInput;
pub use copy_mode_toggle::CopyModeToggle;
pub use external_links::ExternalLinks;
pub use emoji_grid::CategorySection;

// Utility functions
// Helper functions for common operations

pub mod clipboard;
pub mod clock;
pub mod emoji_reference;
pub mod format;

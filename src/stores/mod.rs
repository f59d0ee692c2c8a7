// Page state

pub mod preview;

//! Feed assembly: the date-window filter and the view-model assembler.

pub mod assemble;
pub mod date;

pub use assemble::assemble_feed;
pub use date::DayWindow;

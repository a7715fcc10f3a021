//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, Message, MessageStyle, Statistics, run_tui};

//! # Rendering
//!
//! Turns a `CmdResult` into terminal text. The `render_*` functions build strings so
//! they can be tested without a terminal; `print_*` writes them to stdout.

use colored::Colorize;
use tankobon::api::{CmdMessage, MessageLevel};
use tankobon::transform::{MoveRecord, MoveStatus};

pub fn render_report(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// Shell commands for the renames that were planned or done.
pub fn render_moves(moves: &[MoveRecord]) -> String {
    moves
        .iter()
        .filter(|m| m.status != MoveStatus::Unchanged)
        .map(|m| format!("{}\n", m.command()))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let content = message.content.as_str();
            let styled = if !use_color {
                content.to_string()
            } else {
                match message.level {
                    MessageLevel::Info => content.dimmed().to_string(),
                    MessageLevel::Success => content.green().to_string(),
                    MessageLevel::Warning => content.yellow().to_string(),
                    MessageLevel::Error => content.red().to_string(),
                }
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_report(lines: &[String]) {
    print!("{}", render_report(lines));
}

pub fn print_moves(moves: &[MoveRecord]) {
    print!("{}", render_moves(moves));
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages, true));
}

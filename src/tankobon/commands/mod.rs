use crate::transform::MoveRecord;
use crate::tree::Series;
use num_bigint::BigUint;

pub mod apply;
pub mod plan;
pub mod report;

pub use plan::Plan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Aligned `old ==> new` lines
    pub report: Vec<String>,
    pub moves: Vec<MoveRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_report(mut self, lines: Vec<String>) -> Self {
        self.report = lines;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveRecord>) -> Self {
        self.moves = moves;
        self
    }
}

/// Warnings for the gaps found while reading the series.
pub(crate) fn diagnostic_messages(series: &Series) -> Vec<CmdMessage> {
    let diagnostics = series.diagnostics();
    let mut messages = Vec::new();
    if !diagnostics.missing_volumes.is_empty() {
        messages.push(CmdMessage::warning(format!(
            "Missing volumes: {}",
            join(&diagnostics.missing_volumes)
        )));
    }
    for missing in &diagnostics.missing_chapters {
        messages.push(CmdMessage::warning(format!(
            "Missing chapters in {}: {}",
            missing.volume,
            join(&missing.numbers)
        )));
    }
    for name in &diagnostics.skipped_volumes {
        messages.push(CmdMessage::warning(format!(
            "Skipped volume {} (unreadable chapter number)",
            name
        )));
    }
    messages
}

fn join(numbers: &[BigUint]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

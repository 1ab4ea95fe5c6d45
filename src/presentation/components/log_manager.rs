use chrono::{DateTime, Local};
use std::collections::{HashSet, VecDeque};

const MAX_LOG_SIZE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => LogLevel::Error,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::INFO => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message,
        }
    }

    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Bounded history of captured log events; the oldest entry is dropped once
/// full.
pub struct LogManager {
    logs: VecDeque<LogEntry>,
    visible_levels: HashSet<LogLevel>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
            visible_levels: [LogLevel::Info, LogLevel::Warn, LogLevel::Error]
                .into_iter()
                .collect(),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn filtered_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .filter(|entry| self.visible_levels.contains(&entry.level))
    }

    pub fn is_level_visible(&self, level: LogLevel) -> bool {
        self.visible_levels.contains(&level)
    }

    pub fn set_level_visible(&mut self, level: LogLevel, visible: bool) {
        if visible {
            self.visible_levels.insert(level);
        } else {
            self.visible_levels.remove(&level);
        }
    }

    pub fn export_text(&self) -> String {
        self.all_logs()
            .map(|entry| format!("[{}] {}", entry.format_timestamp(), entry.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

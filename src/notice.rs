//! User-facing notices
//!
//! Collection operations report progress and per-file failures as
//! [`Notice`]s appended to a caller-supplied [`NoticeSink`]. The CLI drains a
//! [`NoticeQueue`] after each command; a [`crossbeam_channel::Sender`] can be
//! used to hand notices to another thread.

use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message meant for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Destination for notices
#[cfg_attr(test, mockall::automock)]
pub trait NoticeSink {
    fn append(&mut self, notice: Notice);
}

/// FIFO buffer of notices
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest notice
    pub fn extract(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    /// Take every pending notice, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = Notice> + '_ {
        self.notices.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }
}

impl NoticeSink for NoticeQueue {
    fn append(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }
}

impl NoticeSink for Sender<Notice> {
    fn append(&mut self, notice: Notice) {
        if let Err(e) = self.send(notice) {
            tracing::debug!("Notice receiver dropped: {}", e.into_inner());
        }
    }
}

/// Forwards notices to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn append(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!("{}", notice.message),
            NoticeLevel::Warning => tracing::warn!("{}", notice.message),
            NoticeLevel::Error => tracing::error!("{}", notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = NoticeQueue::new();
        assert!(queue.is_empty());
        queue.append(Notice::info("first"));
        queue.append(Notice::error("second"));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.extract(), Some(Notice::info("first")));
        let rest: Vec<Notice> = queue.drain().collect();
        assert_eq!(rest, vec![Notice::error("second")]);
        assert!(queue.is_empty());
        assert_eq!(queue.extract(), None);
    }

    #[test]
    fn test_channel_sink() {
        let (mut tx, rx) = crossbeam_channel::unbounded();
        tx.append(Notice::warning("over there"));
        assert_eq!(rx.try_recv().unwrap(), Notice::warning("over there"));

        drop(rx);
        // Sending to a closed channel is not an error for the producer
        tx.append(Notice::info("nobody listening"));
    }

    #[test]
    fn test_mock_sink() {
        let mut sink = MockNoticeSink::new();
        sink.expect_append()
            .withf(|n| n.level == NoticeLevel::Info && n.message == "hello")
            .times(1)
            .return_const(());
        sink.append(Notice::info("hello"));
    }

    #[test]
    fn test_tracing_sink_accepts_all_levels() {
        let mut sink = TracingSink;
        sink.append(Notice::info("i"));
        sink.append(Notice::warning("w"));
        sink.append(Notice::error("e"));
    }
}

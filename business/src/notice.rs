//! User-facing notices (the toast collaborator's state).
//!
//! Commands push here on completion; the UI shows the queue in a bottom bar.
//! Presentation stays minimal on purpose.

use std::collections::VecDeque;

use campusdesk_states::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Bounded FIFO of notices; old entries fall off the front.
#[derive(Debug, Default)]
pub struct Notices {
    entries: VecDeque<Notice>,
}

impl Notices {
    const MAX: usize = 8;

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        });
    }

    pub fn push(&mut self, notice: Notice) {
        if self.entries.len() == Self::MAX {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl State for Notices {}

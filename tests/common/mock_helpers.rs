//! Notice sink helpers

use bins_analyzer::{Notice, NoticeLevel, NoticeQueue};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Create a channel that can be used as a notice sink
pub fn create_notice_channel() -> (Sender<Notice>, Receiver<Notice>) {
    unbounded()
}

/// Messages of one level, in order
pub fn messages(queue: &mut NoticeQueue, level: NoticeLevel) -> Vec<String> {
    queue
        .drain()
        .filter(|n| n.level == level)
        .map(|n| n.message)
        .collect()
}

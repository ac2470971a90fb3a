//! Process-wide free list of text buffers
//!
//! Rendering a record needs a scratch `String`. Buffers are handed out from
//! an unbounded channel used as a lock-free free list: acquiring never
//! blocks (an empty list just allocates) and releasing never blocks.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::LazyLock;

/// Capacity given to freshly allocated buffers
const INITIAL_CAPACITY: usize = 256;

/// Buffers that grew past this are dropped instead of being kept alive
const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

struct FreeList {
    sender: Sender<String>,
    receiver: Receiver<String>,
}

static FREE_LIST: LazyLock<FreeList> = LazyLock::new(|| {
    let (sender, receiver) = unbounded();
    FreeList { sender, receiver }
});

/// Take an empty buffer from the free list, allocating if none is available
pub(crate) fn acquire() -> String {
    FREE_LIST
        .receiver
        .try_recv()
        .unwrap_or_else(|_| String::with_capacity(INITIAL_CAPACITY))
}

/// Clear `buf` and return it to the free list
pub(crate) fn release(mut buf: String) {
    if buf.capacity() > MAX_RETAINED_CAPACITY {
        return;
    }
    buf.clear();
    // The list owns its receiver, so the channel is never disconnected
    let _ = FREE_LIST.sender.send(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_buffers_come_back_empty() {
        let mut buf = acquire();
        buf.push_str("left over");
        release(buf);

        for _ in 0..8 {
            let buf = acquire();
            assert!(buf.is_empty());
            release(buf);
        }
    }

    #[test]
    fn test_oversized_buffers_are_not_retained() {
        let mut buf = acquire();
        buf.reserve(MAX_RETAINED_CAPACITY * 2);
        release(buf);

        let buf = acquire();
        assert!(buf.capacity() <= MAX_RETAINED_CAPACITY);
        release(buf);
    }
}

use std::sync::Mutex;

use crate::models::Notice;

/// Holds at most the current transient notice. Expiry is keyed to the
/// notice id so a late timer for a superseded notice never clears the
/// one currently shown.
pub struct NoticeBoard {
    current: Mutex<Option<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        NoticeBoard {
            current: Mutex::new(None),
        }
    }

    pub fn publish(&self, message: &str) -> Notice {
        let notice = Notice {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.to_string(),
        };
        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(notice.clone());
        }
        notice
    }

    /// Clears the board only when `id` still names the current notice.
    /// Returns whether anything was cleared.
    pub fn expire(&self, id: &str) -> bool {
        let Ok(mut guard) = self.current.lock() else {
            return false;
        };
        match guard.as_ref() {
            Some(current) if current.id == id => {
                *guard = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

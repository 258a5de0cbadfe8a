//! Toast notification model
//!
//! The page shows at most one notification. A new one replaces the current
//! one; each carries an id so a dismissal timer started for a replaced
//! notification cannot remove its successor.

/// Time a notification stays up before dismissing itself
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Duration of the slide-out animation played before removal
pub const EXIT_ANIMATION_MS: u32 = 300;

/// Notification kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// Background color of the banner
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#b87333",
            NotificationKind::Error => "#e53935",
            NotificationKind::Info => "#495057",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    /// Exit animation in progress
    pub exiting: bool,
}

/// Holder for the single visible notification
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Show a notification, replacing whatever was visible. Returns its id.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            kind,
            message: message.into(),
            exiting: false,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Error, message)
    }

    /// Start the exit animation of notification `id`.
    ///
    /// Returns `false` when `id` is no longer shown or is already leaving, in
    /// which case the caller must not schedule a removal.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && !n.exiting => {
                n.exiting = true;
                true
            }
            _ => false,
        }
    }

    /// Remove notification `id` once its exit animation is over
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

//! Transient notification lifecycle.
//!
//! Each `show` bumps a generation and hands back a ticket. The deferred hide
//! presents its ticket; only the ticket of the current notification hides it,
//! so a stale timer can never dismiss a newer message.

use crate::types::NotificationKind;

/// A visible (or last shown) notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Identifies one `show` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    visible: bool,
    generation: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, preempting any pending hide.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationTicket {
        self.generation += 1;
        self.current = Some(Notification {
            message: message.into(),
            kind,
        });
        self.visible = true;
        NotificationTicket(self.generation)
    }

    /// Hide the notification `ticket` belongs to. Returns false for a stale
    /// ticket, leaving the newer notification visible.
    pub fn expire(&mut self, ticket: NotificationTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The last shown notification, visible or not.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut state = NotificationState::new();
        assert!(!state.is_visible());

        let ticket = state.show("File loaded!", NotificationKind::Success);
        assert!(state.is_visible());
        assert!(state.expire(ticket));
        assert!(!state.is_visible());
        // Already hidden.
        assert!(!state.expire(ticket));
        assert_eq!(state.current().map(|n| n.message.as_str()), Some("File loaded!"));
    }

    #[test]
    fn test_stale_ticket_does_not_hide_newer() {
        let mut state = NotificationState::new();
        let first = state.show("Code copied to clipboard!", NotificationKind::Success);
        let second = state.show("Only HTML files are supported.", NotificationKind::Error);

        assert!(!state.expire(first));
        assert!(state.is_visible());
        assert_eq!(state.current().map(|n| n.kind), Some(NotificationKind::Error));

        assert!(state.expire(second));
        assert!(!state.is_visible());
    }
}

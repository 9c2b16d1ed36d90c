use dioxus::prelude::*;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Host heartbeats left before auto-dismiss.
    pub ticks_left: u8,
}

/// How many host heartbeats a toast survives.
const TOAST_TICKS: u8 = 5;

/// Toast store shared through context.
///
/// Push from any handler via [`use_toasts`]; the
/// [`ToastHost`](crate::ToastHost) renders the stack and expires entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            level,
            message: message.into(),
            ticks_left: TOAST_TICKS,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    /// One host heartbeat: age every entry, drop the expired.
    pub fn tick(&mut self) {
        for toast in &mut self.entries {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
        }
        self.entries.retain(|t| t.ticks_left > 0);
    }
}

/// Get the shared toast store.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_toasts_get_distinct_ids() {
        let mut toasts = Toasts::default();
        toasts.success("one");
        toasts.error("two");

        assert_eq!(toasts.entries.len(), 2);
        assert_ne!(toasts.entries[0].id, toasts.entries[1].id);
        assert_eq!(toasts.entries[0].level, ToastLevel::Success);
        assert_eq!(toasts.entries[1].level, ToastLevel::Error);
    }

    #[test]
    fn entries_expire_after_their_ticks() {
        let mut toasts = Toasts::default();
        toasts.success("fleeting");

        for _ in 0..TOAST_TICKS - 1 {
            toasts.tick();
        }
        assert_eq!(toasts.entries.len(), 1);

        toasts.tick();
        assert!(toasts.entries.is_empty());
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let mut toasts = Toasts::default();
        toasts.success("keep");
        toasts.success("drop");
        let drop_id = toasts.entries[1].id;

        toasts.dismiss(drop_id);

        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].message, "keep");
    }
}

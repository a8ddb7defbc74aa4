//! Transient notifications shown over every page.
//!
//! DESIGN
//! ======
//! Failures are reported here and the operation is dropped. The queue is
//! bounded so a burst of failing requests cannot bury the page.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;

/// How long a toast stays before auto-dismiss.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id. Identical consecutive messages
    /// collapse into the existing toast.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        if let Some(last) = self.items.last()
            && last.kind == kind
            && last.message == message
        {
            return last.id;
        }

        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

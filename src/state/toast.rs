#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// Most toasts shown at once; older ones are dropped first.
const MAX_TOASTS: usize = 4;

/// Transient notification queue, provided as an `RwSignal` context.
///
/// Every session transition and request failure pushes exactly one
/// toast. Auto-dismiss timers live in the `ToastHost` component.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

/// A single notification banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub detail: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Info => "toast toast--info",
            Self::Error => "toast toast--error",
        }
    }
}

impl ToastState {
    pub fn success(&mut self, title: &str, detail: impl Into<String>) {
        self.push(ToastKind::Success, title, detail.into());
    }

    pub fn info(&mut self, title: &str, detail: impl Into<String>) {
        self.push(ToastKind::Info, title, detail.into());
    }

    pub fn error(&mut self, title: &str, detail: impl Into<String>) {
        self.push(ToastKind::Error, title, detail.into());
    }

    fn push(&mut self, kind: ToastKind, title: &str, detail: String) {
        self.toasts.push(Toast {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            detail,
            kind,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    /// Remove a toast; unknown ids are ignored (dismiss can race the
    /// auto-dismiss timer).
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}

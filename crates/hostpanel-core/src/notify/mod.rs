//! Confirmation prompts and toast notifications.
//!
//! Toasts are fire-and-forget: delivery failures are logged but never
//! propagate. Confirmation is a blocking yes/no question.

pub mod console;
pub mod desktop;
pub mod messages;

use std::fmt;

pub use console::{ConsoleNotifier, StdinConfirmer, is_confirmation_accepted};
pub use desktop::DesktopNotifier;
pub use messages::{Locale, Messages};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Warning => write!(f, "warning"),
        }
    }
}

/// A titled, iconed notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub text: String,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A yes/no question guarding a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Sink for toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}

/// Blocking confirmation dialog.
pub trait Confirmer: Send + Sync {
    /// Returns `true` only if the user explicitly confirmed.
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// A confirmer with a fixed answer (`--yes`, scripted runs).
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmer(pub bool);

impl Confirmer for StaticConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        tracing::debug!(
            event = "core.notify.confirm_preanswered",
            title = %prompt.title,
            answer = self.0
        );
        self.0
    }
}

/// Forwards each toast to several notifiers in order.
#[derive(Default)]
pub struct MultiNotifier {
    sinks: Vec<Box<dyn Notifier>>,
}

impl MultiNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl Notifier + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

impl Notifier for MultiNotifier {
    fn notify(&self, toast: &Toast) {
        for sink in &self.sinks {
            sink.notify(toast);
        }
    }
}

/// Test doubles for notification traits.
///
/// Public so the CLI crate can use them in its tests.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Records every toast it receives.
    #[derive(Default)]
    pub struct RecordingNotifier {
        toasts: Mutex<Vec<Toast>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn toasts(&self) -> Vec<Toast> {
            self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
        }

        pub fn kinds(&self) -> Vec<ToastKind> {
            self.toasts().iter().map(|t| t.kind).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: &Toast) {
            if let Ok(mut toasts) = self.toasts.lock() {
                toasts.push(toast.clone());
            }
        }
    }

    /// Fixed answer that also counts how often it was asked.
    pub struct CountingConfirmer {
        answer: bool,
        asked: AtomicUsize,
    }

    impl CountingConfirmer {
        pub fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: AtomicUsize::new(0),
            }
        }

        pub fn times_asked(&self) -> usize {
            self.asked.load(Ordering::SeqCst)
        }
    }

    impl Confirmer for CountingConfirmer {
        fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
            self.asked.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use std::sync::Arc;

    struct Shared(Arc<RecordingNotifier>);

    impl Notifier for Shared {
        fn notify(&self, toast: &Toast) {
            self.0.notify(toast);
        }
    }

    #[test]
    fn test_toast_kind_icons_distinct() {
        assert_ne!(ToastKind::Success.icon(), ToastKind::Error.icon());
        assert_ne!(ToastKind::Error.icon(), ToastKind::Warning.icon());
    }

    #[test]
    fn test_static_confirmer() {
        let prompt = Messages::default().confirm_delete();
        assert!(StaticConfirmer(true).confirm(&prompt));
        assert!(!StaticConfirmer(false).confirm(&prompt));
    }

    #[test]
    fn test_multi_notifier_fans_out() {
        let a = Arc::new(RecordingNotifier::new());
        let b = Arc::new(RecordingNotifier::new());
        let multi = MultiNotifier::new()
            .with(Shared(a.clone()))
            .with(Shared(b.clone()));

        multi.notify(&Toast::new(ToastKind::Warning, "Heads up", "something"));

        assert_eq!(a.kinds(), vec![ToastKind::Warning]);
        assert_eq!(b.toasts().len(), 1);
    }

    #[test]
    fn test_counting_confirmer_counts() {
        let confirmer = CountingConfirmer::new(false);
        let prompt = Messages::default().confirm_delete();
        assert!(!confirmer.confirm(&prompt));
        assert!(!confirmer.confirm(&prompt));
        assert_eq!(confirmer.times_asked(), 2);
    }
}

//! Terminal toasts and a stdin-backed confirmation prompt.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use super::{ConfirmPrompt, Confirmer, Notifier, Toast, ToastKind};

/// Prints toasts to the terminal: successes to stdout, everything else
/// to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Render a toast as a single terminal line.
pub fn format_toast(toast: &Toast) -> String {
    format!("{} {}: {}", toast.kind.icon(), toast.title, toast.text)
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: &Toast) {
        info!(
            event = "core.notify.toast_shown",
            kind = %toast.kind,
            title = %toast.title
        );
        match toast.kind {
            ToastKind::Success => println!("{}", format_toast(toast)),
            ToastKind::Error | ToastKind::Warning => eprintln!("{}", format_toast(toast)),
        }
    }
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

/// Render the question line shown before reading an answer.
pub fn format_prompt(prompt: &ConfirmPrompt) -> String {
    format!(
        "{} {} [y = {}, N = {}] ",
        prompt.title, prompt.text, prompt.confirm_label, prompt.cancel_label
    )
}

/// Asks on stdout and reads one line from stdin. Anything other than an
/// explicit yes, including EOF and read errors, counts as "cancel".
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmer;

impl StdinConfirmer {
    pub fn new() -> Self {
        Self
    }

    fn ask(prompt: &ConfirmPrompt, input: &mut impl BufRead) -> io::Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", format_prompt(prompt))?;
        stdout.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        Ok(is_confirmation_accepted(&answer))
    }
}

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let stdin = io::stdin();
        match Self::ask(prompt, &mut stdin.lock()) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(event = "core.notify.confirm_read_failed", error = %e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Messages;
    use std::io::Cursor;

    #[test]
    fn test_is_confirmation_accepted() {
        assert!(is_confirmation_accepted("y"));
        assert!(is_confirmation_accepted("YES\n"));
        assert!(is_confirmation_accepted("  Yes  "));
        assert!(!is_confirmation_accepted(""));
        assert!(!is_confirmation_accepted("n"));
        assert!(!is_confirmation_accepted("yep"));
    }

    #[test]
    fn test_format_toast() {
        let toast = Toast::new(ToastKind::Error, "Error", "Failed to update storage!");
        assert_eq!(format_toast(&toast), "❌ Error: Failed to update storage!");
    }

    #[test]
    fn test_format_prompt_includes_labels() {
        let line = format_prompt(&Messages::default().confirm_delete());
        assert!(line.starts_with("Are you sure? This data will be permanently deleted!"));
        assert!(line.contains("Yes, delete!"));
        assert!(line.contains("Cancel"));
    }

    #[test]
    fn test_ask_reads_answer() {
        let prompt = Messages::default().confirm_delete();
        assert!(StdinConfirmer::ask(&prompt, &mut Cursor::new("y\n")).unwrap());
        assert!(!StdinConfirmer::ask(&prompt, &mut Cursor::new("no\n")).unwrap());
    }

    #[test]
    fn test_ask_eof_is_cancel() {
        let prompt = Messages::default().confirm_delete();
        assert!(!StdinConfirmer::ask(&prompt, &mut Cursor::new("")).unwrap());
    }
}

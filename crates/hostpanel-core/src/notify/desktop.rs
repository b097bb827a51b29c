//! Platform-native desktop notification dispatch.
//!
//! Best-effort: failures are logged but never propagate.

use tracing::{info, warn};

#[cfg(not(target_os = "macos"))]
use tracing::debug;

use super::{Notifier, Toast};

/// Sends each toast as a desktop notification.
///
/// - macOS: `osascript` (Notification Center)
/// - Linux: `notify-send` (requires libnotify)
/// - Other: no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, toast: &Toast) {
        let title = format!("{} {}", toast.kind.icon(), toast.title);
        info!(
            event = "core.notify.send_started",
            title = %title,
            kind = %toast.kind
        );
        send_platform_notification(&title, &toast.text);
    }
}

/// Escape a string for embedding inside an AppleScript string literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

#[cfg(target_os = "macos")]
fn send_platform_notification(title: &str, message: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        applescript_escape(message),
        applescript_escape(title)
    );

    match std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(target_os = "linux")]
fn send_platform_notification(title: &str, message: &str) {
    match which::which("notify-send") {
        Ok(_) => {}
        Err(which::Error::CannotFindBinaryPath) => {
            debug!(
                event = "core.notify.send_skipped",
                reason = "notify-send not found",
            );
            return;
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
            return;
        }
    }

    match std::process::Command::new("notify-send")
        .arg(title)
        .arg(message)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn send_platform_notification(_title: &str, _message: &str) {
    debug!(
        event = "core.notify.send_skipped",
        reason = "unsupported platform",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;

    #[test]
    fn test_applescript_escape() {
        assert_eq!(applescript_escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(applescript_escape("a\nb"), "a\\nb");
        assert_eq!(applescript_escape(r"C:\x"), r"C:\\x");
    }

    #[test]
    fn test_notify_does_not_panic() {
        // Should never panic regardless of platform or tool availability
        DesktopNotifier::new().notify(&Toast::new(
            ToastKind::Success,
            r#"Title with "quotes""#,
            "Message with \n newline",
        ));
    }
}

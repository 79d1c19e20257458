use crate::screen::Point;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Executes taps and clipboard reads on the target device.
///
/// The session loop only ever talks to this trait, so tests can drive it
/// with a scripted fake instead of a phone.
pub trait Device {
    /// Simulate a touch at the given screen pixel.
    fn tap(&self, point: Point) -> Result<()>;
    /// Start the clipboard-sharing background service on the device.
    fn start_clipboard_service(&self) -> Result<()>;
    /// Ask the clipboard service for the current clipboard contents.
    /// Returns the raw broadcast output, wrapper and all.
    fn read_clipboard(&self) -> Result<String>;
}

/// adb-backed device: taps via `input tap`, clipboard via the Clipper app
/// (`ca.zgrs.clipper`).
pub struct AdbDevice {
    adb: String,
}

impl AdbDevice {
    pub fn new(adb: impl Into<String>) -> Self {
        AdbDevice { adb: adb.into() }
    }

    fn shell(&self, args: &[&str]) -> Result<std::process::Output> {
        debug!(?args, "adb shell");
        Command::new(&self.adb)
            .arg("shell")
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to run '{} shell {}'", self.adb, args.join(" ")))
    }
}

impl Device for AdbDevice {
    fn tap(&self, point: Point) -> Result<()> {
        self.shell(&["input", "tap", &point.x.to_string(), &point.y.to_string()])?;
        Ok(())
    }

    fn start_clipboard_service(&self) -> Result<()> {
        self.shell(&["am", "startservice", "ca.zgrs.clipper/.ClipboardService"])?;
        Ok(())
    }

    fn read_clipboard(&self) -> Result<String> {
        let output = self.shell(&["am", "broadcast", "-a", "clipper.get"])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Pull the clipboard text out of `am broadcast` output, which looks like
/// `Broadcast completed: result=-1, data="1. e4 e5 *"`. Output without the
/// wrapper is passed through trimmed.
pub fn broadcast_payload(raw: &str) -> String {
    if let Some(start) = raw.find("data=\"") {
        let rest = &raw[start + "data=\"".len()..];
        if let Some(end) = rest.rfind('"') {
            return rest[..end].to_string();
        }
    }
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::broadcast_payload;

    #[test]
    fn extracts_quoted_data_field() {
        let raw = "Broadcasting: Intent { act=clipper.get flg=0x400000 }\n\
                   Broadcast completed: result=-1, data=\"1. e4 e5 2. Nf3 *\"\n";
        assert_eq!(broadcast_payload(raw), "1. e4 e5 2. Nf3 *");
    }

    #[test]
    fn passes_through_unwrapped_output() {
        assert_eq!(broadcast_payload("  1. e4 e5 *\n"), "1. e4 e5 *");
    }

    #[test]
    fn keeps_inner_quotes_up_to_the_last_one() {
        let raw = "Broadcast completed: result=-1, data=\"a \"b\" c\"";
        assert_eq!(broadcast_payload(raw), "a \"b\" c");
    }
}

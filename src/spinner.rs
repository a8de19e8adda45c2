//! A minimal terminal spinner shown while a submission is outstanding.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Trailing-dots animation. Plain ASCII so it renders everywhere.
const FRAMES: &[&str] = &["   ", ".  ", ".. ", "..."];

const INTERVAL: Duration = Duration::from_millis(120);

/// Animates `message` on stderr in a background task until stopped.
///
/// Stderr so the greeting itself, which goes to stdout, is never mixed
/// into the animation line.
pub struct Spinner {
    handle: JoinHandle<()>,
    stop: Arc<Notify>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let stop = Arc::new(Notify::new());
        let stopped = Arc::clone(&stop);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            loop {
                // \r returns to column 0, \x1b[2K wipes the old frame
                eprint!("\x1b[2K\r{message}{}", FRAMES[frame % FRAMES.len()]);
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => frame += 1,
                    _ = stopped.notified() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self { handle, stop }
    }

    /// Stop the animation and wait for the line to be wiped, so whatever
    /// prints next starts on a clean line.
    pub async fn stop(self) {
        self.stop.notify_one();
        let _ = self.handle.await;
    }
}

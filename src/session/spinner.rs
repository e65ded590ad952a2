use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

const FRAMES: [&str; 4] = ["loading   ", "loading.  ", "loading.. ", "loading..."];
const DONE_LINE: &str = "done!     ";

/// Set-once completion flag shared between a spinner and its owner.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Animated `loading` line redrawn in place until its signal is raised.
///
/// Dropping the spinner raises the signal, so the task always winds down.
pub struct Spinner {
    signal: StopSignal,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start<W>(signal: StopSignal, interval: Duration, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let task_signal = signal.clone();
        let handle = tokio::spawn(animate(task_signal, interval, writer));
        Self {
            signal,
            interval,
            handle: Some(handle),
        }
    }

    /// Raises the signal and waits for the final line, allowing one extra interval of grace.
    pub async fn finish(mut self) {
        self.signal.raise();
        let Some(handle) = self.handle.take() else {
            return;
        };

        match tokio::time::timeout(self.interval * 2, handle).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::warn!(error = %err, "progress indicator task failed"),
            Err(_) => tracing::warn!("progress indicator did not stop in time"),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.signal.raise();
    }
}

async fn animate<W: Write>(signal: StopSignal, interval: Duration, mut writer: W) {
    let mut frame = 0;
    while !signal.is_raised() {
        // Cosmetic output; a broken terminal must not disturb generation.
        let _ = write!(writer, "\r{}", FRAMES[frame % FRAMES.len()]);
        let _ = writer.flush();
        frame += 1;
        tokio::time::sleep(interval).await;
    }
    let _ = writeln!(writer, "\r{DONE_LINE}");
    let _ = writer.flush();
}

/// How long-running steps are presented while they are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Spinner(Duration),
    Hidden,
}

impl Progress {
    /// Awaits `work`, animating a spinner on `writer` meanwhile.
    pub async fn track_with<W, F>(self, writer: W, work: F) -> F::Output
    where
        W: Write + Send + 'static,
        F: Future,
    {
        match self {
            Progress::Hidden => work.await,
            Progress::Spinner(interval) => {
                let spinner = Spinner::start(StopSignal::new(), interval, writer);
                let output = work.await;
                spinner.finish().await;
                output
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Instant;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn stop_signal_is_shared_and_stays_raised() {
        let signal = StopSignal::new();
        let clone = signal.clone();
        assert!(!clone.is_raised());

        signal.raise();
        signal.raise();
        assert!(clone.is_raised());
    }

    #[tokio::test]
    async fn spinner_animates_then_prints_done() {
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start(StopSignal::new(), Duration::from_millis(10), buffer.clone());

        tokio::time::sleep(Duration::from_millis(45)).await;
        spinner.finish().await;

        let output = buffer.contents();
        assert!(output.starts_with("\rloading   "));
        assert!(output.contains("\rloading.  "));
        assert!(output.ends_with("\rdone!     \n"));
    }

    #[tokio::test]
    async fn finish_returns_within_one_interval() {
        let interval = Duration::from_millis(200);
        let buffer = SharedBuffer::default();
        let spinner = Spinner::start(StopSignal::new(), interval, buffer.clone());
        tokio::task::yield_now().await;

        let started = Instant::now();
        spinner.finish().await;

        assert!(started.elapsed() < interval * 2);
        assert!(buffer.contents().ends_with("done!     \n"));
    }

    #[tokio::test]
    async fn tracked_work_that_fails_still_finishes_spinner() {
        let buffer = SharedBuffer::default();

        let result: Result<(), &str> = Progress::Spinner(Duration::from_millis(5))
            .track_with(buffer.clone(), async {
                tokio::time::sleep(Duration::from_millis(12)).await;
                Err("generation failed")
            })
            .await;

        assert!(result.is_err());
        let output = buffer.contents();
        assert!(output.starts_with("\rloading"));
        assert!(output.ends_with("\rdone!     \n"));
    }

    #[tokio::test]
    async fn dropping_spinner_raises_signal() {
        let buffer = SharedBuffer::default();
        let signal = StopSignal::new();

        {
            let _spinner = Spinner::start(signal.clone(), Duration::from_millis(5), buffer.clone());
            tokio::task::yield_now().await;
        }
        assert!(signal.is_raised());

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(buffer.contents().ends_with("done!     \n"));
    }

    #[tokio::test]
    async fn hidden_progress_just_awaits() {
        let buffer = SharedBuffer::default();
        let value = Progress::Hidden
            .track_with(buffer.clone(), async { 41 + 1 })
            .await;
        assert_eq!(value, 42);
        assert!(buffer.contents().is_empty());
    }
}

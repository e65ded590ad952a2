use tracing::subscriber::NoSubscriber;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "learnpath=warn";
const VERBOSE_FILTER: &str = "learnpath=debug";

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs `f` with all diagnostics on the current thread discarded.
///
/// Used around third-party initialization that logs noise we never want to show.
/// The previous dispatcher is restored when `f` returns or unwinds.
pub fn silenced<T>(f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(NoSubscriber::default(), f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::{Arc, Mutex};
    use tracing::dispatcher;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capturing_subscriber(capture: Capture) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_writer(capture)
            .without_time()
            .with_ansi(false)
            .finish()
    }

    #[test]
    fn silenced_discards_events_and_restores_dispatcher() {
        let capture = Capture::default();

        tracing::subscriber::with_default(capturing_subscriber(capture.clone()), || {
            tracing::warn!("before");
            let value = silenced(|| {
                tracing::warn!("hidden");
                dispatcher::get_default(|current| current.is::<NoSubscriber>())
            });
            assert!(value);
            tracing::warn!("after");
        });

        let output = capture.contents();
        assert!(output.contains("before"));
        assert!(output.contains("after"));
        assert!(!output.contains("hidden"));
    }

    #[test]
    fn silenced_restores_dispatcher_after_panic() {
        let capture = Capture::default();

        tracing::subscriber::with_default(capturing_subscriber(capture.clone()), || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                silenced::<()>(|| panic!("initialization failed"));
            }));
            assert!(result.is_err());
            assert!(!dispatcher::get_default(|current| current.is::<NoSubscriber>()));
            tracing::warn!("still visible");
        });

        assert!(capture.contents().contains("still visible"));
    }
}

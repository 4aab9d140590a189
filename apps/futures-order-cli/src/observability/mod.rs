//! Observability
//!
//! Log sink setup. Components log through `tracing` macros and never touch
//! the sinks directly.

mod logging;

pub use logging::{LoggingConfig, LoggingError, PipeFormat, build_subscriber, init_logging};

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    //! In-memory log capture for tests.

    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::fmt::MakeWriter;

    use super::PipeFormat;

    /// Shared buffer receiving formatted log lines.
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        /// Empty buffer.
        pub fn new() -> Self {
            Self::default()
        }

        /// Route this thread's events into the buffer until the guard drops.
        pub fn set_default(&self) -> DefaultGuard {
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .event_format(PipeFormat)
                .with_max_level(tracing::Level::TRACE)
                .with_writer(self.clone())
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        /// Everything captured so far.
        pub fn contents(&self) -> String {
            let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }

    /// Writer handed out per event by [`CapturedLogs`].
    pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedWriter;

        fn make_writer(&'a self) -> Self::Writer {
            CapturedWriter(Arc::clone(&self.0))
        }
    }
}

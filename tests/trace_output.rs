// ==============================================================================
// `trace` feature output
// ==============================================================================
//
// Only compiled when the `trace` feature is enabled; otherwise the
// crate emits no tracing events at all and there is nothing to assert.
#![cfg(feature = "trace")]

#[allow(clippy::expect_used)] // Tests panic on failure by design.
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use strprefix::{ScanOptions, SeparatorScanner};
    use tracing_subscriber::fmt::MakeWriter;

    /// An in-memory [`io::Write`] sink shared between the subscriber and
    /// the assertion below it.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuf {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn scan_emits_a_separator_accepted_trace_event() {
        let buf = SharedBuf::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buf.clone())
            .with_max_level(tracing::Level::TRACE)
            .without_time()
            .with_target(false)
            .finish();

        let scanner = SeparatorScanner::build([";".to_owned()], ScanOptions::default());
        tracing::subscriber::with_default(subscriber, || {
            let outcome = scanner.scan("foo;bar");
            assert!(outcome.found);
        });

        let output = String::from_utf8(buf.0.lock().expect("buffer lock poisoned").clone()).expect("trace output is utf8");
        assert!(
            output.contains("separator accepted"),
            "expected a `separator accepted` trace event, got: {output}"
        );
    }

    #[test]
    fn building_a_trie_emits_a_building_prefix_trie_event() {
        let buf = SharedBuf::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buf.clone())
            .with_max_level(tracing::Level::TRACE)
            .without_time()
            .with_target(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = strprefix::PrefixIndex::build(["GET", "POST"]);
        });

        let output = String::from_utf8(buf.0.lock().expect("buffer lock poisoned").clone()).expect("trace output is utf8");
        assert!(
            output.contains("building prefix trie"),
            "expected a `building prefix trie` trace event, got: {output}"
        );
    }
}

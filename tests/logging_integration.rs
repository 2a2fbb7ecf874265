use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use fskit::{rename, ExistPolicy};
use tempfile::tempdir;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// A simple writer that appends written bytes into an in-memory Vec<u8>.
/// We wrap the Vec in an Arc<Mutex<...>> so the MakeWriter closure can clone it.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(env_filter: &str, json: bool, f: impl FnOnce()) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));

    // MakeWriter closure: each call returns a fresh BufferWriter that clones the Arc
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };

    // Construct a subscriber but don't call `.init()` to avoid setting a global.
    // Run scoped with dispatcher::with_default so the test does not change the
    // global subscriber for other tests.
    let env_filter = EnvFilter::new(env_filter);
    let dispatch = if json {
        let layer = tsfmt::layer()
            .with_writer(make_writer)
            .with_target(false)
            .json();
        tracing::Dispatch::new(registry().with(env_filter).with(layer))
    } else {
        let layer = tsfmt::layer()
            .with_writer(make_writer)
            .with_target(false)
            .compact();
        tracing::Dispatch::new(registry().with(env_filter).with(layer))
    };
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).to_string()
}

#[test]
fn atomic_rename_logs_both_paths() {
    let td = tempdir().unwrap();
    let src = td.path().join("a.txt");
    let dst = td.path().join("b.txt");
    std::fs::write(&src, b"payload").unwrap();

    let contents = capture_logs("info", false, || {
        rename(&src, &dst, ExistPolicy::Overwrite).expect("rename");
    });

    assert!(
        contents.contains("renamed atomically"),
        "logged output did not contain expected text; contents={}",
        contents
    );
    assert!(
        contents.contains(&src.display().to_string()),
        "source path missing from log; contents={}",
        contents
    );
    assert!(
        contents.contains(&dst.display().to_string()),
        "destination path missing from log; contents={}",
        contents
    );
}

#[test]
fn json_logs_carry_structured_fields() {
    let td = tempdir().unwrap();
    let src = td.path().join("a.txt");
    let dst = td.path().join("b.txt");
    std::fs::write(&src, b"payload").unwrap();

    let contents = capture_logs("info", true, || {
        rename(&src, &dst, ExistPolicy::Overwrite).expect("rename");
    });

    let line = contents
        .lines()
        .find(|l| l.contains("renamed atomically"))
        .expect("no rename event in captured json logs");
    let value: serde_json::Value = serde_json::from_str(line).expect("parse json log line");

    assert_eq!(value["fields"]["message"], "renamed atomically");
    assert_eq!(value["fields"]["src"], src.display().to_string());
    assert_eq!(value["fields"]["dst"], dst.display().to_string());
    assert_eq!(value["level"], "INFO");
}

#[test]
fn quiet_filter_suppresses_info_events() {
    let td = tempdir().unwrap();
    let src = td.path().join("a.txt");
    let dst = td.path().join("b.txt");
    std::fs::write(&src, b"payload").unwrap();

    let contents = capture_logs("error", false, || {
        rename(&src, &dst, ExistPolicy::Overwrite).expect("rename");
    });

    assert!(
        contents.is_empty(),
        "error-only filter should drop info events; contents={}",
        contents
    );
}

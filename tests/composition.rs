// Composition tests: text in, rendered word clouds out.
//
// These exercise the whole chain without touching stdin or stdout:
//   lines -> TokenFilter -> SlidingWindow -> UpdateSchedule -> OutputSink
// Ignore lists and input files go through temp files.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use wordcloud::config::{build_ignore_set, RunConfig, WindowConfig};
use wordcloud::input::LineSource;
use wordcloud::output::plain::PlainSink;
use wordcloud::output::traits::MemorySink;
use wordcloud::output::OutputFormat;
use wordcloud::pipeline::Pipeline;
use wordcloud::WordCount;

fn run_config(window: WindowConfig, update_frequency: usize) -> RunConfig {
    RunConfig {
        window,
        update_frequency,
        input: LineSource::Stdin,
        output: OutputFormat::Plain,
    }
}

// ============================================================
// Chain: text -> window -> plain output
// ============================================================

#[tokio::test]
async fn plain_output_for_a_small_stream() {
    let config = run_config(
        WindowConfig {
            cloud_size: 2,
            min_length: 3,
            window_size: 4,
            ignore: Default::default(),
            min_frequency: 1,
        },
        1,
    );
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = PlainSink::new(Vec::new());

    let text = b"Sea, sea and more SEA!\nSky sea\n";
    let summary = pipeline.run(&text[..], &mut sink).await.unwrap();

    // accepted: sea sea and more sea sky sea
    assert_eq!(summary.accepted, 7);
    assert_eq!(summary.updates, 4);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "sea: 2 and: 1",
            "sea: 2 and: 1",
            "and: 1 more: 1",
            "sea: 2 more: 1",
        ]
    );
}

#[tokio::test]
async fn min_frequency_filters_the_cloud() {
    let config = run_config(
        WindowConfig {
            cloud_size: 10,
            min_length: 1,
            window_size: 6,
            ignore: Default::default(),
            min_frequency: 2,
        },
        1,
    );
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = MemorySink::default();

    pipeline
        .run(&b"one two two three three three\n"[..], &mut sink)
        .await
        .unwrap();

    assert_eq!(
        sink.updates,
        vec![vec![WordCount::new("three", 3), WordCount::new("two", 2)]]
    );
}

#[tokio::test]
async fn stream_shorter_than_window_emits_nothing() {
    let mut pipeline = Pipeline::new(&run_config(WindowConfig::default(), 1)).unwrap();
    let mut sink = MemorySink::default();

    let summary = pipeline
        .run(&b"a handful of perfectly ordinary sentences\n"[..], &mut sink)
        .await
        .unwrap();

    assert_eq!(summary.updates, 0);
    assert!(sink.updates.is_empty());
    assert!(!pipeline.window().is_full());
}

// ============================================================
// Chain: ignore-list file -> config -> pipeline
// ============================================================

#[tokio::test]
async fn ignore_list_file_removes_words() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Whale").unwrap();

    let ignore = build_ignore_set(Some(file.path()), false);
    let config = run_config(
        WindowConfig {
            cloud_size: 5,
            min_length: 1,
            window_size: 2,
            ignore,
            min_frequency: 1,
        },
        1,
    );
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = MemorySink::default();

    pipeline
        .run(&b"whale boat WHALE boat\n"[..], &mut sink)
        .await
        .unwrap();

    assert_eq!(sink.updates, vec![vec![WordCount::new("boat", 2)]]);
}

#[tokio::test]
async fn missing_ignore_list_is_not_fatal() {
    let ignore = build_ignore_set(Some(Path::new("/no/such/list.txt")), false);
    assert!(ignore.is_empty());

    let config = run_config(
        WindowConfig {
            cloud_size: 5,
            min_length: 1,
            window_size: 1,
            ignore,
            min_frequency: 1,
        },
        1,
    );
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = MemorySink::default();
    pipeline.run(&b"still works\n"[..], &mut sink).await.unwrap();
    assert_eq!(sink.updates.len(), 2);
}

#[tokio::test]
async fn stop_words_are_ignored_when_enabled() {
    let config = run_config(
        WindowConfig {
            cloud_size: 5,
            min_length: 1,
            window_size: 1,
            ignore: build_ignore_set(None, true),
            min_frequency: 1,
        },
        1,
    );
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = MemorySink::default();

    pipeline
        .run(&b"the lighthouse\n"[..], &mut sink)
        .await
        .unwrap();

    assert_eq!(sink.updates, vec![vec![WordCount::new("lighthouse", 1)]]);
}

// ============================================================
// Chain: input file -> pipeline
// ============================================================

#[tokio::test]
async fn reads_from_a_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tide tide").unwrap();
    writeln!(file, "moon").unwrap();

    let mut config = run_config(
        WindowConfig {
            cloud_size: 5,
            min_length: 1,
            window_size: 3,
            ignore: Default::default(),
            min_frequency: 1,
        },
        1,
    );
    config.input = LineSource::File(file.path().to_path_buf());

    let reader = config.input.open().await.unwrap();
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = MemorySink::default();
    let summary = pipeline.run(reader, &mut sink).await.unwrap();

    assert_eq!(summary.lines, 2);
    assert_eq!(
        sink.updates,
        vec![vec![WordCount::new("tide", 2), WordCount::new("moon", 1)]]
    );
}

// ============================================================
// Output failures
// ============================================================

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn broken_pipe_surfaces_as_output_error() {
    let config = run_config(
        WindowConfig {
            cloud_size: 5,
            min_length: 1,
            window_size: 1,
            ignore: Default::default(),
            min_frequency: 1,
        },
        1,
    );
    let mut pipeline = Pipeline::new(&config).unwrap();
    let mut sink = PlainSink::new(ClosedPipe);

    let err = pipeline
        .run(&b"anything\n"[..], &mut sink)
        .await
        .unwrap_err();
    assert!(err.is_broken_pipe());
}

// ============================================================
// Binary: exit status
// ============================================================

fn wordcloud() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordcloud"));
    // keep WORDCLOUD_* / RUST_LOG from the caller's shell out of the run
    cmd.env_clear().stderr(Stdio::null());
    cmd
}

#[test]
fn bad_arguments_exit_nonzero_without_output() {
    for args in [
        &["-c", "0"][..],
        &["-w", "0"][..],
        &["-l", "-1"][..],
        &["-f", "lots"][..],
    ] {
        let out = wordcloud().args(args).stdin(Stdio::null()).output().unwrap();
        assert!(!out.status.success(), "{args:?} should fail");
        assert!(out.stdout.is_empty(), "{args:?} printed to stdout");
    }
}

#[test]
fn missing_input_file_exits_nonzero_without_output() {
    let out = wordcloud()
        .arg("/no/such/input.txt")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn prints_updates_from_stdin() {
    let mut child = wordcloud()
        .args(["-c", "2", "-l", "1", "-w", "3", "-f", "1", "-u", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"tide tide moon\n")
        .unwrap();

    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "tide: 2 moon: 1\n");
}

#[test]
fn closed_downstream_pipe_exits_zero() {
    let mut child = wordcloud()
        .args(["-l", "1", "-w", "2", "-f", "1", "-u", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    let writer = std::thread::spawn(move || {
        let line = b"tide moon harbor tide gull\n";
        for _ in 0..200_000 {
            // the child stops reading once its output is gone
            if stdin.write_all(line).is_err() {
                break;
            }
        }
    });

    let mut first = String::new();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    stdout.read_line(&mut first).unwrap();
    assert!(!first.trim().is_empty());
    drop(stdout);

    let status = child.wait().unwrap();
    writer.join().unwrap();
    assert!(status.success(), "exited with {status}");
}

use GenericQueueMini::core::buildcore::TracedQueue;
use GenericQueueMini::core::log::{append_logs, read_logs, LogEntry, LogError, Logger, Op, Outcome};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_append_then_read_back() {
    let mut queue = TracedQueue::new();
    queue.enqueue("a".to_string());
    queue.enqueue("b".to_string());
    queue.dequeue();
    queue.is_homogeneous();

    let file = NamedTempFile::new().unwrap();
    append_logs(queue.logs(), file.path()).unwrap();

    let loaded: Vec<LogEntry<String>> = read_logs(file.path()).unwrap();
    assert_eq!(loaded, queue.logs());
}

#[test]
fn test_append_accumulates_across_calls() {
    let mut logger = Logger::new();
    logger.log(Op::Enqueue, Some(1u32), Outcome::Present, 1);
    logger.log(Op::Peek, None, Outcome::Absent, 0);

    let file = NamedTempFile::new().unwrap();
    append_logs(logger.entries(), file.path()).unwrap();
    append_logs(logger.entries(), file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(contents.lines().count(), 4);
    let loaded: Vec<LogEntry<u32>> = read_logs(file.path()).unwrap();
    assert_eq!(loaded.len(), 4);
}

#[test]
fn test_ndjson_line_shape() {
    let mut logger = Logger::new();
    logger.log(Op::HomogeneityCheck, None::<i32>, Outcome::Verdict(false), 3);

    let file = NamedTempFile::new().unwrap();
    append_logs(logger.entries(), file.path()).unwrap();
    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(
        contents,
        "{\"local_log_id\":1,\"op\":\"HomogeneityCheck\",\"item\":null,\"outcome\":{\"Verdict\":false},\"len_after\":3}\n"
    );
}

#[test]
fn test_malformed_line_reports_line_number() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\"local_log_id\":1,\"op\":\"Enqueue\",\"item\":5,\"outcome\":\"Present\",\"len_after\":1}}").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "not json").unwrap();

    match read_logs::<i32>(file.path()) {
        Err(LogError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_logs::<i32>(dir.path().join("absent.ndjson"));
    assert!(matches!(result, Err(LogError::Io(_))));
}

#[test]
fn test_entries_since_and_display() {
    let mut logger = Logger::new();
    let first = logger.log(Op::Enqueue, Some('x'), Outcome::Present, 1);
    logger.log(Op::Dequeue, Some('x'), Outcome::Present, 0);
    logger.log(Op::Dequeue, None, Outcome::Absent, 0);

    let later = logger.entries_since(first);
    assert_eq!(later.len(), 2);
    assert!(later.iter().all(|e| e.op == Op::Dequeue));
    assert_eq!(
        later[1].to_string(),
        "LogEntry { local_log_id: 3, op: Dequeue, item: None, outcome: Absent, len_after: 0 }"
    );
}

#[test]
#[should_panic(expected = "Enqueue must record a present item")]
fn test_logger_rejects_absent_enqueue() {
    let mut logger: Logger<i32> = Logger::new();
    logger.log(Op::Enqueue, None, Outcome::Absent, 0);
}

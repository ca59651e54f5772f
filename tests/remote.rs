// tests/remote.rs
//
// Snapshot loading over the LeagueSource seam.
use challenge_tracker::Error;
use challenge_tracker::progress::{NullProgress, Progress};
use challenge_tracker::remote::load_snapshot;

mod common;
use common::{FakeSource, entry, tasks};

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, what: &str) { self.done.push(what.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn loads_tasks_then_entries() {
    let src = FakeSource::new(tasks(), vec![entry("A", "1", 3.0)]);
    let mut rec = Recorder::default();
    let snap = load_snapshot(&src, Some(&mut rec)).unwrap();

    assert_eq!(snap.tasks.len(), 2);
    assert_eq!(snap.entries.len(), 1);
    assert_eq!(rec.total, 2);
    assert_eq!(rec.done, ["tasks", "entries"]);
    assert!(rec.finished);
}

#[test]
fn task_failure_fails_the_load_but_still_finishes() {
    let mut src = FakeSource::new(tasks(), vec![]);
    src.fail_tasks = true;
    let mut rec = Recorder::default();
    let err = load_snapshot(&src, Some(&mut rec)).unwrap_err();

    assert!(matches!(err, Error::Metadata(_)));
    assert!(rec.done.is_empty());
    assert!(rec.finished);
}

#[test]
fn empty_task_sheet_is_not_an_error() {
    let src = FakeSource::new(Default::default(), vec![]);
    let snap = load_snapshot(&src, Some(&mut NullProgress)).unwrap();
    assert!(snap.tasks.is_empty());
    assert!(load_snapshot(&src, None).is_ok());
}

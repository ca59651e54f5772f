// src/remote.rs
//
// The three remote sources behind one trait, so pages and tests don't care
// whether data comes from the live sheet or from memory.

use std::thread;

use crate::config::options::SourceOptions;
use crate::core::net;
use crate::error::Result;
use crate::league::entry::{self, Entry, NormalizedRow};
use crate::league::{Payload, TaskTable};
use crate::progress::Progress;

pub trait LeagueSource {
    /// Task sheet (CSV).
    fn tasks(&self) -> Result<TaskTable>;

    /// All submitted entries (JSON).
    fn entries(&self) -> Result<Vec<Entry>>;

    /// The single pending draft row, if any.
    fn draft(&self) -> Result<Option<NormalizedRow>>;

    /// Save or submit. Returns once the write is assumed to have landed.
    fn write(&self, payload: &Payload) -> Result<()>;
}

/// Live sheet + script endpoint.
pub struct HttpSource {
    opts: SourceOptions,
}

impl HttpSource {
    pub fn new(opts: SourceOptions) -> Self {
        Self { opts }
    }
}

impl LeagueSource for HttpSource {
    fn tasks(&self) -> Result<TaskTable> {
        let t = std::time::Instant::now();
        let csv = net::http_get(&self.opts.tasks_url)?;
        let table = TaskTable::from_csv(&csv)?;
        logd!("Remote: tasks in {:?}", t.elapsed());
        Ok(table)
    }

    fn entries(&self) -> Result<Vec<Entry>> {
        let t = std::time::Instant::now();
        let body = net::http_get(&self.opts.entries_url)?;
        let entries = entry::parse_entries(&body)?;
        logd!("Remote: entries in {:?}", t.elapsed());
        Ok(entries)
    }

    fn draft(&self) -> Result<Option<NormalizedRow>> {
        let body = net::http_get(&self.opts.drafts_url())?;
        Ok(entry::parse_rows(&body)?.into_iter().next())
    }

    fn write(&self, payload: &Payload) -> Result<()> {
        logf!("Remote: POST mode={} team={}", payload.mode().unwrap_or("?"), payload.get("Team").unwrap_or(""));
        net::http_post_form(&self.opts.entries_url, payload.fields())?;
        // No readable result from the script; give the sheet time to commit.
        thread::sleep(self.opts.settle_delay());
        Ok(())
    }
}

/// Everything the read-only pages need.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub tasks: TaskTable,
    pub entries: Vec<Entry>,
}

/// Fetch tasks, then entries. Task sheet failure is fatal to the load;
/// an empty task sheet is only logged.
pub fn load_snapshot(source: &dyn LeagueSource, mut progress: Option<&mut dyn Progress>) -> Result<Snapshot> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
        p.log("Loading tasks…");
    }

    let result = (|| -> Result<Snapshot> {
        let tasks = source.tasks()?;
        if tasks.is_empty() {
            logw!("Remote: task sheet has no rows");
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done("tasks");
            p.log("Loading entries…");
        }

        let entries = source.entries()?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done("entries");
        }
        Ok(Snapshot { tasks, entries })
    })();

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match &result {
        Ok(s) => logf!("Remote: loaded {} task(s), {} entr(ies)", s.tasks.len(), s.entries.len()),
        Err(e) => loge!("Remote: load failed: {e}"),
    }
    result
}

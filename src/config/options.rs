// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::league::standings::RankPolicy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub view: ViewOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            view: ViewOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, then whatever the process environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = get(ENV_TASKS_URL) { opts.source.tasks_url = v; }
        if let Some(v) = get(ENV_ENTRIES_URL) { opts.source.entries_url = v; }
        if let Some(v) = get(ENV_ROUND_ID) { opts.source.round_id = v; }
        if let Some(v) = get(ENV_WRITE_KEY) { opts.source.write_key = v; }
        if let Some(v) = get(ENV_RANK_POLICY) {
            match RankPolicy::parse(&v) {
                Some(p) => opts.view.rank_policy = p,
                None => logw!("Config: unknown {} value {:?}, keeping {:?}", ENV_RANK_POLICY, v, opts.view.rank_policy),
            }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub tasks_url: String,
    pub entries_url: String,
    pub drafts_sheet: String,
    pub round_id: String,
    /// Shared write key the script endpoint checks. Empty unless configured.
    pub write_key: String,
    pub settle_ms: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            tasks_url: s!(TASKS_META_URL),
            entries_url: s!(ENTRIES_URL),
            drafts_sheet: s!(DRAFTS_SHEET),
            round_id: s!(CURRENT_ROUND_ID),
            write_key: s!(),
            settle_ms: WRITE_SETTLE_MS,
        }
    }
}

impl SourceOptions {
    pub fn drafts_url(&self) -> String {
        let sep = if self.entries_url.contains('?') { '&' } else { '?' };
        format!("{}{}sheet={}", self.entries_url, sep, self.drafts_sheet)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub rank_policy: RankPolicy,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { rank_policy: RankPolicy::default() }
    }
}

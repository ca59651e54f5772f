// src/config/consts.rs

// Remote sources
pub const TASKS_META_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRXcCLM3cYAIQGlGdsjlBVW2g8qjnYpUsl0Nn3ESq-0AkIfr54WrHp_JeaYZfA4cpYdr-ebnLPyPkCN/pub?gid=971568410&single=true&output=csv";
pub const ENTRIES_URL: &str = "https://script.google.com/macros/s/AKfycbzKLcGk1-gq19BW74v6Dw8uIvJ3EHSwWJ99OkHESa2DU1WFbJQM8HM5oZmmB9NB7_dR/exec";
pub const DRAFTS_SHEET: &str = "AHbL_Drafts";
pub const USER_AGENT: &str = "challenge_tracker/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Writes can't be confirmed by the sheet; wait this long before trusting them
pub const WRITE_SETTLE_MS: u64 = 1600;

// Round
pub const CURRENT_ROUND_ID: &str = "1";
pub const DEFAULT_SHORT_WEEK: u8 = 7;
// Input ceiling for tasks whose sheet row has no Max
pub const DEFAULT_SCORE_MAX: f64 = 100.0;

// Env overrides
pub const ENV_TASKS_URL: &str = "CHALLENGE_TASKS_URL";
pub const ENV_ENTRIES_URL: &str = "CHALLENGE_ENTRIES_URL";
pub const ENV_ROUND_ID: &str = "CHALLENGE_ROUND_ID";
pub const ENV_WRITE_KEY: &str = "CHALLENGE_WRITE_KEY";
pub const ENV_RANK_POLICY: &str = "CHALLENGE_RANK_POLICY";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 720.0;

// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use crate::config::options::AppOptions;
use crate::core::dates::parse_date;
use crate::csv::{self, Delim};
use crate::error::{Error, Result};
use crate::league::{
    EntryForm, Mode, RankPolicy, history,
    scoring::{max_points, target_points},
    standings::{self, SUMMARY_HEADERS, TABLE_HEADERS},
    team_detail::team_detail,
};
use crate::progress::StderrProgress;
use crate::remote::{HttpSource, LeagueSource, load_snapshot};

#[derive(Clone, Debug, PartialEq)]
pub struct ExportTarget {
    pub path: PathBuf,
    pub delim: Delim,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormArgs {
    pub team: Option<String>,
    pub date: Option<String>,
    pub short_week: Option<u8>,
    pub comments: Option<String>,
    /// (task key, score)
    pub scores: Vec<(String, f64)>,
    pub from_draft: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Standings { policy: Option<RankPolicy>, json: bool, export: Option<ExportTarget> },
    Teams { export: Option<ExportTarget> },
    Team { name: String, json: bool },
    History,
    Tasks,
    Write { mode: Mode, form: FormArgs, confirmed: bool },
    Help,
}

/// Entry point for the `cli` binary.
pub fn run_from_env() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = parse_args(&args)?;
    let opts = AppOptions::from_env();
    let source = HttpSource::new(opts.source.clone());
    let stdout = std::io::stdout();
    run(&cmd, &opts, &source, &mut stdout.lock())
}

/// `T1`, `1` and `T1_Score` all name task 1.
pub fn parse_task_key(s: &str) -> Option<String> {
    let t = s.trim();
    let t = t.strip_suffix("_Score").or_else(|| t.strip_suffix("_score")).unwrap_or(t);
    let t = t.strip_prefix('T').or_else(|| t.strip_prefix('t')).unwrap_or(t);
    t.parse::<u32>().ok().map(|id| task_key!(id))
}

fn parse_score(s: &str) -> Result<(String, f64)> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| Error::validation(format!("Score must look like T1=5, got {s:?}")))?;
    let key = parse_task_key(k).ok_or_else(|| Error::validation(format!("Bad task id: {k:?}")))?;
    let val: f64 = v
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("Bad score for {key}: {v:?}")))?;
    Ok((key, val))
}

fn export_target(out: Option<PathBuf>, format: Option<Delim>) -> Option<ExportTarget> {
    out.map(|path| {
        let delim = format.unwrap_or_else(|| Delim::from_path(&path));
        ExportTarget { path, delim }
    })
}

fn need(it: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String> {
    it.next().cloned().ok_or_else(|| Error::validation(format!("Missing value for {flag}")))
}

pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut it = args.iter();
    let Some(sub) = it.next() else { return Ok(Command::Help) };

    let mut policy = None;
    let mut json = false;
    let mut out: Option<PathBuf> = None;
    let mut format: Option<Delim> = None;
    let mut form = FormArgs::default();
    let mut confirmed = false;
    let mut positional: Vec<String> = Vec::new();

    while let Some(a) = it.next() {
        match a.as_str() {
            "--policy" => {
                let v = need(&mut it, "--policy")?;
                policy = Some(RankPolicy::parse(&v).ok_or_else(|| Error::validation(format!("Unknown policy: {v}")))?);
            }
            "--json" => json = true,
            "-o" | "--out" => out = Some(PathBuf::from(need(&mut it, "--out")?)),
            "--format" => {
                let v = need(&mut it, "--format")?;
                format = Some(Delim::parse(&v).ok_or_else(|| Error::validation(format!("Unknown format: {v}")))?);
            }
            "--team" => form.team = Some(need(&mut it, "--team")?),
            "--date" => {
                let v = need(&mut it, "--date")?;
                if parse_date(&v).is_none() {
                    return Err(Error::validation(format!("Bad date: {v}")));
                }
                form.date = Some(v);
            }
            "--short-week" => {
                let v = need(&mut it, "--short-week")?;
                match v.parse::<u8>() {
                    Ok(n) if (4..=7).contains(&n) => form.short_week = Some(n),
                    _ => return Err(Error::validation(format!("Short week must be 4..7, got {v}"))),
                }
            }
            "--comments" => form.comments = Some(need(&mut it, "--comments")?),
            "--score" => form.scores.push(parse_score(&need(&mut it, "--score")?)?),
            "--from-draft" => form.from_draft = true,
            "--yes" | "-y" => confirmed = true,
            "-h" | "--help" => return Ok(Command::Help),
            other if other.starts_with('-') => return Err(Error::validation(format!("Unknown arg: {other}"))),
            other => positional.push(s!(other)),
        }
    }

    let cmd = match sub.as_str() {
        "standings" => Command::Standings { policy, json, export: export_target(out, format) },
        "teams" => Command::Teams { export: export_target(out, format) },
        "team" => {
            let name = positional
                .first()
                .cloned()
                .ok_or_else(|| Error::validation("team needs a team name"))?;
            Command::Team { name, json }
        }
        "history" => Command::History,
        "tasks" => Command::Tasks,
        "save" | "submit" => {
            if form.team.is_none() && !form.from_draft {
                return Err(Error::validation("--team is required"));
            }
            let mode = if sub == "save" { Mode::Save } else { Mode::Submit };
            Command::Write { mode, form, confirmed }
        }
        "help" | "-h" | "--help" => Command::Help,
        other => return Err(Error::validation(format!("Unknown command: {other}"))),
    };
    Ok(cmd)
}

/// Run a parsed command against `source`, printing to `out`.
pub fn run(cmd: &Command, opts: &AppOptions, source: &dyn LeagueSource, out: &mut dyn Write) -> Result<()> {
    match cmd {
        Command::Help => {
            writeln!(out, "{}", include_str!("cli_help.txt"))?;
        }
        Command::Tasks => {
            let tasks = source.tasks()?;
            let headers = ["Key", "Task", "Target", "Max", "Avoid", "Target pts", "Max pts"];
            let rows: Vec<Vec<String>> = tasks
                .iter()
                .map(|t| vec![
                    t.key(),
                    t.name.clone(),
                    opt_num(t.target),
                    opt_num(t.max),
                    if t.is_avoidance { s!("yes") } else { s!() },
                    format!("{:.2}", target_points(t)),
                    format!("{:.2}", max_points(t)),
                ])
                .collect();
            print_table(out, &headers, &rows)?;
        }
        Command::Standings { policy, json, export } => {
            let snap = load_snapshot(source, Some(&mut StderrProgress::new()))?;
            let policy = policy.unwrap_or(opts.view.rank_policy);
            let ranked = standings::standings(&snap.entries, &snap.tasks, policy);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&ranked)?)?;
            } else {
                writeln!(out, "Ranked by: {}", policy.label())?;
                print_table(out, &TABLE_HEADERS, &standings::table_rows(&ranked))?;
            }
            if let Some(t) = export {
                let headers = standings::headers(&TABLE_HEADERS);
                csv::write_file(&t.path, Some(headers.as_slice()), &standings::table_rows(&ranked), t.delim)?;
                eprintln!("Wrote {}", t.path.display());
            }
        }
        Command::Teams { export } => {
            let snap = load_snapshot(source, Some(&mut StderrProgress::new()))?;
            let ranked = standings::standings(&snap.entries, &snap.tasks, RankPolicy::FewestGames);
            let rows = standings::summary_rows(&ranked);
            print_table(out, &SUMMARY_HEADERS, &rows)?;
            if let Some(t) = export {
                let headers = standings::headers(&SUMMARY_HEADERS);
                csv::write_file(&t.path, Some(headers.as_slice()), &rows, t.delim)?;
                eprintln!("Wrote {}", t.path.display());
            }
        }
        Command::Team { name, json } => {
            let snap = load_snapshot(source, Some(&mut StderrProgress::new()))?;
            let detail = team_detail(name, &snap.entries, &snap.tasks, opts.view.rank_policy);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
                return Ok(());
            }
            let rank = detail.rank.map(|r| format!("#{r}")).unwrap_or_else(|| s!("-"));
            writeln!(out, "{}  rank {}  points {:.2}  rounds {}", detail.team, rank, detail.total_points, detail.rounds)?;
            let headers = ["Task", "Completions", "Maxes", "Earned", "Target", "Max"];
            let rows: Vec<Vec<String>> = detail
                .tasks
                .iter()
                .map(|t| vec![
                    t.name.clone(),
                    format!("{}/{}", t.completed, t.total),
                    format!("{}/{}", t.maxed, t.total),
                    format!("{:.2}", t.earned),
                    format!("{:.2}", t.target_available),
                    format!("{:.2}", t.max_available),
                ])
                .collect();
            print_table(out, &headers, &rows)?;
        }
        Command::History => {
            let entries = source.entries()?;
            let h = history::build(&entries);
            if h.is_empty() {
                writeln!(out, "No fully completed rounds yet.")?;
                return Ok(());
            }
            let mut headers: Vec<&str> = vec!["Team"];
            headers.extend(h.labels.iter().map(|l| l.as_str()));
            let rows: Vec<Vec<String>> = h
                .teams
                .iter()
                .zip(&h.positions)
                .map(|(t, ps)| {
                    let mut r = vec![t.clone()];
                    r.extend(ps.iter().map(|p| p.to_string()));
                    r
                })
                .collect();
            print_table(out, &headers, &rows)?;
        }
        Command::Write { mode, form, confirmed } => {
            run_write(*mode, form, *confirmed, opts, source, out)?;
        }
    }
    Ok(())
}

fn run_write(
    mode: Mode,
    args: &FormArgs,
    confirmed: bool,
    opts: &AppOptions,
    source: &dyn LeagueSource,
    out: &mut dyn Write,
) -> Result<()> {
    let tasks = source.tasks()?;
    let mut form = EntryForm::today(&opts.source.round_id);

    if args.from_draft {
        match source.draft()? {
            Some(row) => form.restore(&row, &tasks),
            None => eprintln!("No pending draft; starting empty."),
        }
    }
    if let Some(t) = &args.team { form.set_team(t); }
    if let Some(d) = &args.date { form.set_starting_date(d); }
    if let Some(n) = args.short_week { form.set_short_week(n); }
    if let Some(c) = &args.comments { form.set_comments(c); }
    for (key, v) in &args.scores {
        if tasks.get(key).is_none() {
            return Err(Error::validation(format!("Unknown task {key}")));
        }
        form.set_score(&tasks, key, Some(*v));
    }

    let key = opts.source.write_key.as_str();
    let payload = match mode {
        Mode::Save => form.save(&tasks, key)?,
        Mode::Submit => match form.submit(&tasks, key, confirmed) {
            Some(p) => p,
            None => return Err(Error::validation("Submit not confirmed (pass --yes).")),
        },
    };

    source.write(&payload)?;
    let total = payload.get("TotalPoints").unwrap_or("0.00");
    match mode {
        Mode::Save => writeln!(out, "Draft saved. {} {} total {}", form.team, form.starting_date, total)?,
        Mode::Submit => writeln!(out, "Submitted! {} {} total {}", form.team, form.starting_date, total)?,
    }
    Ok(())
}

fn opt_num(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

/// Left-aligned text table with two-space gutters.
pub fn print_table(out: &mut dyn Write, headers: &[&str], rows: &[Vec<String>]) -> std::io::Result<()> {
    let cols = headers.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = h.chars().count();
    }
    for r in rows {
        for (i, c) in r.iter().enumerate() {
            widths[i] = widths[i].max(c.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<w$}", c, w = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(out, "{}", line(headers.to_vec()))?;
    for r in rows {
        writeln!(out, "{}", line(r.iter().map(|s| s.as_str()).collect()))?;
    }
    Ok(())
}

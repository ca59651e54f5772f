// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lookup key for loosely named sheet columns: no whitespace at all, lowercase.
/// `"Starting Date"`, `"StartingDate\r"` and `"startingdate"` all match.
pub fn normalize_key(k: &str) -> String {
    k.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lenient number parse: reads the longest numeric prefix after leading
/// whitespace (`"12.5 pts"` → 12.5). `None` when there is no number at all.
pub fn parse_num(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0usize;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') { i += 1; }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() { i += 1; }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() { i += 1; }
        digits += i - frac_start;
    }
    if digits == 0 { return None; }

    // Exponent only counts if it is complete
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') { j += 1; }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() { j += 1; }
        if j > exp_start { i = j; }
    }

    t[..i].parse::<f64>().ok()
}

/// Like `parse_num`, but only finite values survive.
pub fn parse_finite(s: &str) -> Option<f64> {
    parse_num(s).filter(|v| v.is_finite())
}

/// Case-insensitive `"true"` check used by sheet boolean columns.
pub fn is_true(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true")
}

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    document::types::Table,
    parsing::source::{argument_at, find_command_argument, group_end},
};

use super::figure::strip_comments;

/// Horizontal rules between rows.
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:hline|toprule|midrule|bottomrule)\b|\\c(?:mid)?rule(?:\([^)]*\))?\{[^}]*\}")
        .unwrap()
});

/// Rows, caption and label of a `table` body.
pub struct TableBody;

impl TableBody {
    pub const BEGIN_TABULAR: &'static str = "\\begin{tabular";
    pub const END_TABULAR: &'static str = "\\end{tabular";
    pub const ROW_END: &'static str = "\\\\";
    pub const CELL_SEPARATOR: u8 = b'&';

    /// Reads rows from the `tabular` inside the body plus optional caption
    /// and label. A body without a `tabular` has no rows.
    pub fn parse(lines: &[String], number: usize) -> Table {
        let body = strip_comments(lines);
        let find = |name| find_command_argument(&body, name).map(|arg| arg.value.trim().to_string());
        Table {
            number,
            rows: Self::rows(&body),
            caption: find("caption"),
            label: find("label"),
        }
    }

    fn rows(body: &str) -> Vec<Vec<String>> {
        let Some(tabular) = Self::tabular_content(body) else {
            return vec![];
        };
        tabular
            .split(Self::ROW_END)
            .filter_map(|row| {
                let row = RULE_RE.replace_all(row, "");
                let row = strip_spacing(row.trim());
                if row.is_empty() {
                    return None;
                }
                Some(split_cells(row))
            })
            .collect()
    }

    /// Text between the column specification and `\end{tabular...}`.
    fn tabular_content(body: &str) -> Option<&str> {
        let begin = body.find(Self::BEGIN_TABULAR)?;
        // end of the environment name group, e.g. `\begin{tabular*}`
        let name_end = group_end(body, begin + "\\begin".len())?;
        let env_name = &body[begin + "\\begin{".len()..name_end - 1];
        let mut at = name_end;
        // `tabular*` and `tabularx` take a width before the column spec
        if env_name != "tabular" {
            at = argument_at(body, at)?.end;
        }
        let spec = argument_at(body, at)?;
        let end = spec.end + body[spec.end..].find(Self::END_TABULAR)?;
        Some(&body[spec.end..end])
    }
}

/// Drops the `[2pt]` spacing that may follow a row terminator.
fn strip_spacing(row: &str) -> &str {
    if row.starts_with('[')
        && let Some(close) = row.find(']')
    {
        return row[close + 1..].trim();
    }
    row
}

/// Splits a row on unescaped `&`.
fn split_cells(row: &str) -> Vec<String> {
    let b = row.as_bytes();
    let mut cells = vec![];
    let mut start = 0usize;
    let mut i = 0usize;
    while i < b.len() {
        match b[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            TableBody::CELL_SEPARATOR => {
                cells.push(row[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    cells.push(row[start.min(row.len())..].trim().to_string());
    cells
}

//! Clipboard table parser.
//!
//! Turns raw tab-separated clipboard text (as copied from a spreadsheet
//! or an SSMS result grid) into validated [`UpdateRecord`]s plus an
//! ordered list of rejected lines with reasons. An optional header line
//! is recognized and skipped; the literal token `NULL` in any field is
//! normalized to the empty string.

use crate::record::UpdateRecord;

/// Number of tab-separated columns a data line must have:
/// `code, chinese, english, vietnamese, group_title, id`.
pub const REQUIRED_COLUMNS: usize = 6;

/// Why an input line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than [`REQUIRED_COLUMNS`] tab-separated columns.
    MissingColumns,
    /// The normalized `code` column is empty.
    EmptyCode,
    /// The normalized `group_title` or `id` column is empty.
    MissingGroupKey,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingColumns => "missing_columns",
            Self::EmptyCode => "empty_code",
            Self::MissingGroupKey => "missing_group_key",
        }
    }

    /// Human-readable explanation used in rejection reports.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingColumns => "needs 6 tab-separated columns",
            Self::EmptyCode => "code is empty",
            Self::MissingGroupKey => "group title or id is empty",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input line that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRejection {
    /// 1-based index within the non-blank trimmed lines, header included.
    pub line: usize,
    pub reason: RejectReason,
    /// The offending line as it appeared after trimming.
    pub raw: String,
}

/// Parser result: records and rejections, both in input order.
#[derive(Debug, Default)]
pub struct ParseOutput {
    pub records: Vec<UpdateRecord>,
    pub rejections: Vec<ParseRejection>,
}

/// Trim a field and map the literal `NULL` token (any case) to empty.
fn normalize_value(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("null") {
        String::new()
    } else {
        trimmed.to_string()
    }
}

fn split_columns(line: &str) -> Vec<String> {
    line.split('\t').map(|c| c.trim().to_string()).collect()
}

/// A line is a header iff its first cell lower-cases to `ui_code` and the
/// cell set also contains `ui_tittle` and `ui_id`. A data line that merely
/// starts with `ui_code` is data, not a header.
fn is_header(columns: &[String]) -> bool {
    let lower: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();
    lower.first().is_some_and(|c| c == "ui_code")
        && lower.iter().any(|c| c == "ui_tittle")
        && lower.iter().any(|c| c == "ui_id")
}

/// Parse raw clipboard text into records and rejections.
///
/// Line endings are normalized, lines trimmed, and blank lines dropped
/// before any other processing. Valid lines become records in input
/// order; invalid lines are rejected with the first failing check and
/// parsing continues. Duplicate business keys are passed through
/// unchanged.
pub fn parse_clipboard(raw: &str) -> ParseOutput {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = ParseOutput::default();

    let start = match lines.first() {
        Some(first) if is_header(&split_columns(first)) => 1,
        Some(_) => 0,
        None => return output,
    };

    for (index, line) in lines.iter().enumerate().skip(start) {
        let number = index + 1;
        let columns = split_columns(line);

        if columns.len() < REQUIRED_COLUMNS {
            output.rejections.push(ParseRejection {
                line: number,
                reason: RejectReason::MissingColumns,
                raw: (*line).to_string(),
            });
            continue;
        }

        let code = normalize_value(&columns[0]);
        let chinese = normalize_value(&columns[1]);
        let english = normalize_value(&columns[2]);
        let vietnamese = normalize_value(&columns[3]);
        let group_title = normalize_value(&columns[4]);
        let id = normalize_value(&columns[5]);

        if code.is_empty() {
            output.rejections.push(ParseRejection {
                line: number,
                reason: RejectReason::EmptyCode,
                raw: (*line).to_string(),
            });
            continue;
        }

        if group_title.is_empty() || id.is_empty() {
            output.rejections.push(ParseRejection {
                line: number,
                reason: RejectReason::MissingGroupKey,
                raw: (*line).to_string(),
            });
            continue;
        }

        output.records.push(UpdateRecord {
            code,
            group_title,
            id,
            chinese,
            english,
            vietnamese,
        });
    }

    output
}

//! Text and JSON rendering for command output.

use std::io::{self, Write};

use crate::task::domain::{Task, TaskStatus};

/// Width of the dash rule under the table header.
const RULE_WIDTH: usize = 70;
/// Maximum title characters shown in the table before truncation.
const TITLE_WIDTH: usize = 17;
/// Maximum description characters shown in the table before truncation.
const DESCRIPTION_WIDTH: usize = 27;

/// Human-readable status label used in confirmation blocks.
pub(super) const fn status_label(status: TaskStatus) -> &'static str {
    if status.is_complete() {
        "Complete"
    } else {
        "Incomplete"
    }
}

/// Writes all tasks as fixed-width columns.
pub(super) fn write_table(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    writeln!(
        out,
        "{:<4} {:<8} {:<20} {:<30}",
        "ID", "Status", "Title", "Description"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for task in tasks {
        let status = if task.status().is_complete() {
            "Done"
        } else {
            "Todo"
        };
        writeln!(
            out,
            "{:<4} {:<8} {:<20} {:<30}",
            task.id(),
            status,
            truncate(task.title(), TITLE_WIDTH),
            truncate(task.description(), DESCRIPTION_WIDTH),
        )?;
    }
    Ok(())
}

/// Writes all tasks as a pretty-printed JSON array.
pub(super) fn write_json(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(tasks).map_err(io::Error::other)?;
    writeln!(out, "{rendered}")
}

/// Shortens text to at most `max` characters, marking the cut with an
/// ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max).collect();
        format!("{kept}...")
    } else {
        text.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;
    use rstest::rstest;

    #[rstest]
    #[case("short", 17, "short")]
    #[case("exactly seventeen", 17, "exactly seventeen")]
    #[case("a title that runs long", 17, "a title that runs...")]
    #[case("", 27, "")]
    fn truncate_cuts_only_past_the_limit(
        #[case] text: &str,
        #[case] max: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate(text, max), expected);
    }
}

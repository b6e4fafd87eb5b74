use std::fmt::Write;

const EMPTY_ACTIVITY: &str = "No recent activity found for this user.";
const HEADER: &str = "Recent GitHub Activity:";

const RULE_WIDTH: usize = 40;

/// Renders display lines as the final report, one event per line.
pub fn render<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.is_empty() {
        return format!("{}\n", EMPTY_ACTIVITY);
    }

    let mut output = format!("{}\n{}\n", HEADER, "-".repeat(RULE_WIDTH));
    for line in lines {
        // Writing into a String cannot fail.
        let _ = writeln!(output, "- {}", line.as_ref());
    }

    output
}

use std::path::Path;

use html::debug::outline_from_dom;

pub mod navigator;
pub mod outline;
pub mod scenario;

pub use navigator::{NavCall, RecordingNavigator};
pub use outline::{Labels, ParsedOutline, parse_outline};
pub use scenario::{Scenario, load_scenario, run_scenario};

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    use std::fmt::Write;
    let mut mismatch = None;
    let missing = "<missing>";
    for i in 0..max {
        let left = expected.get(i).map(String::as_str).unwrap_or(missing);
        let right = actual.get(i).map(String::as_str).unwrap_or(missing);
        if left != right {
            mismatch = Some(i);
            break;
        }
    }
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    if expected.len() != actual.len() && mismatch.is_none() {
        let _ = writeln!(
            &mut out,
            "prefix matched but lengths differ (expected {} lines, actual {} lines)",
            expected.len(),
            actual.len()
        );
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Load and run a scenario fixture, panicking with a line diff on mismatch.
pub fn assert_scenario(path: &Path) {
    let scenario = load_scenario(path);
    let (expected, actual) = run_scenario(&scenario);
    if expected != actual {
        let outline = parse_outline(&scenario.document)
            .map(|parsed| outline_from_dom(parsed.dom.root(), 64).join("\n"))
            .unwrap_or_default();
        panic!(
            "scenario {path:?} failed\n{}\ndocument:\n{outline}",
            diff_lines(&expected, &actual)
        );
    }
}

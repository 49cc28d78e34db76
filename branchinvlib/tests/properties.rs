//! Property-based tests for diff analysis and report rendering.

use proptest::prelude::*;

use branchinvlib::{analyze, render_markdown, BranchReport, DiffSummary, Inventory, Keyword};

// ============================================================================
// Strategies
// ============================================================================

/// Strategy to generate relative file paths
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[a-z][a-z0-9_]{0,10}").expect("valid regex"),
        1..4,
    )
    .prop_map(|parts| parts.join("/") + ".rs")
}

/// Strategy to generate any single diff-ish line (no line terminators)
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("\\+[ -~]{0,40}").expect("valid regex"),
        prop::string::string_regex("-[ -~]{0,40}").expect("valid regex"),
        prop::string::string_regex(" [ -~]{0,40}").expect("valid regex"),
        path_strategy().prop_map(|p| format!("+++ b/{p}")),
        path_strategy().prop_map(|p| format!("--- a/{p}")),
        Just("@@ -1,3 +1,4 @@".to_string()),
        Just(String::new()),
    ]
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..60)
}

proptest! {
    #[test]
    fn added_plus_removed_never_exceeds_line_count(lines in lines_strategy()) {
        let text = lines.join("\n");
        let summary = analyze(&text);

        prop_assert!(summary.added_lines + summary.removed_lines <= lines.len() as u64);
    }

    #[test]
    fn counts_match_prefix_rules(lines in lines_strategy()) {
        let text = lines.join("\n");
        let summary = analyze(&text);

        let added = lines.iter().filter(|l| l.starts_with('+') && !l.starts_with("+++")).count();
        let removed = lines.iter().filter(|l| l.starts_with('-') && !l.starts_with("---")).count();

        prop_assert_eq!(summary.added_lines, added as u64);
        prop_assert_eq!(summary.removed_lines, removed as u64);
    }

    #[test]
    fn headers_are_collected_in_order(paths in prop::collection::vec(path_strategy(), 0..20)) {
        let text: String = paths.iter().map(|p| format!("+++ b/{p}\n+line\n")).collect();
        let summary = analyze(&text);

        prop_assert_eq!(&summary.files, &paths);
        prop_assert_eq!(summary.added_lines, paths.len() as u64);
    }

    #[test]
    fn keyword_count_never_exceeds_added_lines(lines in lines_strategy()) {
        let summary = analyze(&lines.join("\n"));

        for (_, count) in summary.keyword_counts.iter() {
            prop_assert!(count <= summary.added_lines);
        }
        prop_assert_eq!(summary.keyword_counts.iter().count(), Keyword::COUNT);
    }

    #[test]
    fn analyze_is_deterministic(lines in lines_strategy()) {
        let text = lines.join("\n");
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn crlf_matches_lf(lines in lines_strategy()) {
        let lf = analyze(&lines.join("\n"));
        let crlf = analyze(&lines.join("\r\n"));
        prop_assert_eq!(lf, crlf);
    }

    #[test]
    fn rendered_file_bullets_capped_at_ten(n in 0usize..40) {
        let summary = DiffSummary {
            files: (0..n).map(|i| format!("dir/file_{i}.rs")).collect(),
            ..DiffSummary::new()
        };
        let mut inventory = Inventory::new();
        inventory.push(BranchReport::new("b", "b.diff", summary));
        let out = render_markdown(&inventory);

        let bullets = out.lines().filter(|l| l.starts_with("- dir/")).count();
        prop_assert_eq!(bullets, n.min(10));

        let more = format!("- ... and {} more", n.saturating_sub(10));
        prop_assert_eq!(out.contains(&more), n > 10);
    }
}

#[test]
fn empty_text_yields_all_zero_summary() {
    let summary = analyze("");
    assert_eq!(summary, DiffSummary::new());
    assert!(summary.keyword_counts.iter().all(|(_, c)| c == 0));
}

#[test]
fn added_header_lookalike_is_not_added() {
    let summary = analyze("+++ b/foo.txt\n");
    assert_eq!(summary.added_lines, 0);
    assert_eq!(summary.files, vec!["foo.txt"]);
}

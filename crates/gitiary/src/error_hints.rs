use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to read snapshot") || haystack.contains("no such file or directory")
    {
        push_hint(&mut out, "Verify the `--input` snapshot path exists and is readable.");
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("snapshot json") {
        push_hint(
            &mut out,
            "The snapshot must be one JSON object with optional `combinedDaily`, `repos`, `heatDaily`, and `heatMonthly` arrays.",
        );
        push_hint(&mut out, "Days are `YYYY-MM-DD` and months are `YYYY-MM`.");
    }

    if haystack.contains("config file") {
        push_hint(
            &mut out,
            "Check `gitiary.toml` syntax. Supported keys: `default_range`, `min_heat_year`, `period_days`, `pretty`.",
        );
    }

    if haystack.contains("reference_day") || haystack.contains("invalid day") {
        push_hint(
            &mut out,
            "Reference days use the `YYYY-MM-DD` form, for example `2026-01-10`.",
        );
    }

    if haystack.contains("unknown repository id") {
        push_hint(
            &mut out,
            "Run `gitiary summary --input <snapshot>` to list repository ids.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

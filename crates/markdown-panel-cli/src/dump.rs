use anyhow::Result;
use markdown_panel_config::OutputFormat;
use markdown_panel_engine::parsing::{ParsedDoc, snapshot};

/// Renders a parsed document for `dump`, ready to print as-is.
pub fn dump(doc: &ParsedDoc, format: OutputFormat, show_spans: bool) -> Result<String> {
    let mut snap = snapshot::normalize(doc);
    if !show_spans {
        snap = snap.without_spans();
    }

    Ok(match format {
        OutputFormat::Text => snap.to_text(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&snap)?;
            json.push('\n');
            json
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_dump_lists_spans_under_their_line() {
        let doc = ParsedDoc::from_markdown("- a **b**");
        let out = dump(&doc, OutputFormat::Text, true).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert!(lines[0].starts_with("   1 UNORDERED_LIST depth=0"));
        assert!(lines[0].ends_with("| a **b**"));
        assert_eq!(lines.len(), 3);
        assert!(lines[2].trim_start().starts_with("BOLD 2..7"));
    }

    #[test]
    fn no_spans_drops_span_lines() {
        let doc = ParsedDoc::from_markdown("a **b**\n\nc");
        let out = dump(&doc, OutputFormat::Text, false).unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn json_dump_is_valid_json() {
        let doc = ParsedDoc::from_markdown("# Title\n![x](y.png)");
        let out = dump(&doc, OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["lines"][0]["kind"], "HEADING(1)");
        assert_eq!(value["lines"][1]["meta"]["image_url"], "y.png");
        assert!(value["lines"][1].get("spans").is_none());
    }
}

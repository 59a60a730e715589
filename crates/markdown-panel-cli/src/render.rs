//! Maps a parsed document onto styled ratatui text.
//!
//! One rendering strategy per line kind, one style per span kind. No
//! terminal involved, so everything here is testable with plain asserts.

use std::path::{Path, PathBuf};

use markdown_panel_engine::{
    ClassifiedLine, LineKind, ParsedLine, Span, SpanKind,
    io::{ImageSource, resolve_image},
    parsing::ParsedDoc,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span as StyledSpan, Text},
};

const LIST_INDENT: &str = "  ";
const SEPARATOR_WIDTH: usize = 40;

/// What the renderer needs to know beyond the document itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Directory of the rendered file; relative image urls resolve here.
    pub document_dir: PathBuf,
    pub image_fallback: Option<PathBuf>,
}

pub fn render_document(doc: &ParsedDoc, ctx: &RenderContext) -> Text<'static> {
    doc.lines
        .iter()
        .map(|parsed| render_line(parsed, ctx))
        .collect::<Vec<_>>()
        .into()
}

fn render_line(parsed: &ParsedLine, ctx: &RenderContext) -> Line<'static> {
    let line = &parsed.line;
    match line.kind {
        LineKind::Blank => Line::default(),
        LineKind::Heading { level } => {
            let style = heading_style(level);
            let mut spans = vec![StyledSpan::styled(
                format!("{} ", "#".repeat(level as usize)),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(
                styled_spans(&parsed.spans)
                    .into_iter()
                    .map(|s| s.patch_style(style)),
            );
            Line::from(spans)
        }
        LineKind::Separator => Line::styled(
            "─".repeat(SEPARATOR_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        LineKind::OrderedList
        | LineKind::UnorderedList
        | LineKind::NestedOrderedList
        | LineKind::NestedUnorderedList => {
            let mut spans = vec![StyledSpan::raw(list_marker(line))];
            spans.extend(styled_spans(&parsed.spans));
            Line::from(spans)
        }
        LineKind::CodeLine { .. } => {
            Line::styled(line.content.clone(), Style::default().fg(Color::Yellow))
        }
        LineKind::CodeFence { .. } => Line::styled(
            format!("─── {}", line.content).trim_end().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        LineKind::HighlightedWord => Line::from(
            styled_spans(&parsed.spans)
                .into_iter()
                .map(|s| s.patch_style(highlight_style()))
                .collect::<Vec<_>>(),
        ),
        LineKind::ImageLine => render_image_line(line, ctx),
        LineKind::LinkLine => render_link_line(line),
        LineKind::Paragraph => Line::from(styled_spans(&parsed.spans)),
    }
}

fn list_marker(line: &ClassifiedLine) -> String {
    let indent = LIST_INDENT.repeat(line.depth().unwrap_or(0));
    let marker = match line.kind {
        LineKind::OrderedList => line.prefix.as_deref().unwrap_or("1."),
        LineKind::NestedOrderedList => line.postfix.as_deref().unwrap_or("1."),
        _ => "•",
    };
    format!("{indent}{marker} ")
}

fn render_image_line(line: &ClassifiedLine, ctx: &RenderContext) -> Line<'static> {
    let meta = line.inline_meta.clone().unwrap_or_default();
    let url = meta.image_url.unwrap_or_default();
    let source = match resolve_image(&url, &ctx.document_dir) {
        ImageSource::Remote(url) => url,
        ImageSource::Local(path) => path.display().to_string(),
        ImageSource::Missing(path) => missing_image(&path, ctx.image_fallback.as_deref()),
    };

    Line::from(vec![
        StyledSpan::styled(image_placeholder(&line.content), image_style()),
        StyledSpan::styled(format!(" ({source})"), Style::default().fg(Color::DarkGray)),
    ])
}

fn missing_image(path: &Path, fallback: Option<&Path>) -> String {
    match fallback {
        Some(fallback) => format!("missing {}, showing {}", path.display(), fallback.display()),
        None => format!("missing {}", path.display()),
    }
}

fn render_link_line(line: &ClassifiedLine) -> Line<'static> {
    let url = line
        .inline_meta
        .as_ref()
        .and_then(|m| m.link_url.clone())
        .unwrap_or_default();

    let mut spans = vec![StyledSpan::styled(line.content.clone(), link_style())];
    if url != line.content {
        spans.push(StyledSpan::styled(
            format!(" <{url}>"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn styled_spans(spans: &[Span]) -> Vec<StyledSpan<'static>> {
    spans.iter().map(styled_span).collect()
}

fn styled_span(span: &Span) -> StyledSpan<'static> {
    // Angle links carry only a url.
    let text = span
        .text
        .clone()
        .or_else(|| span.url.clone())
        .unwrap_or_default();
    match span.kind {
        SpanKind::Text => StyledSpan::raw(text),
        SpanKind::Bold => StyledSpan::styled(text, Style::default().add_modifier(Modifier::BOLD)),
        SpanKind::Italics => {
            StyledSpan::styled(text, Style::default().add_modifier(Modifier::ITALIC))
        }
        SpanKind::BoldItalics => StyledSpan::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        SpanKind::Highlight => StyledSpan::styled(text, highlight_style()),
        SpanKind::Link => StyledSpan::styled(text, link_style()),
        SpanKind::Image => StyledSpan::styled(image_placeholder(&text), image_style()),
    }
}

fn image_placeholder(alt: &str) -> String {
    format!("[image: {alt}]")
}

fn heading_style(level: u8) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    if level <= 2 {
        style.fg(Color::Cyan)
    } else {
        style
    }
}

fn highlight_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::DarkGray)
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

fn image_style() -> Style {
    Style::default().fg(Color::Magenta)
}

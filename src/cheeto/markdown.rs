//! # Markdown Rendering
//!
//! Markdown sheets are passed through a [`MarkdownRenderer`] before being shown.
//! Renderers are registered in a fixed, ordered table of `(name, factory)` pairs:
//!
//! | Name         | Renderer                                         |
//! |--------------|--------------------------------------------------|
//! | `plain`      | Markdown source as-is                            |
//! | `term`       | In-process terminal rendering (the default)      |
//! | `mdcat`      | The external `mdcat` tool                        |
//! | `glow`       | The external `glow` tool, dark style             |
//! | `glow-light` | The external `glow` tool, light style            |
//!
//! External renderers are only available when their executable is on `PATH`;
//! lookups filter out unavailable renderers.

use crate::error::{CheetoError, Result};
use crate::paths::is_executable_in_path;
use console::{Style, Term};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

pub const DEFAULT_RENDERER: &str = "term";

const FALLBACK_WIDTH: usize = 80;
const MAX_RULE_WIDTH: usize = 80;

pub trait MarkdownRenderer {
    fn name(&self) -> &'static str;

    /// One-line description shown in help and in `cheeto renderers`.
    fn description(&self) -> &'static str;

    fn render(&self, src: &str) -> Result<String>;

    fn is_available(&self) -> bool {
        true
    }
}

type Factory = fn() -> Box<dyn MarkdownRenderer>;

const REGISTRY: &[(&str, Factory)] = &[
    ("plain", plain_renderer as Factory),
    ("term", term_renderer as Factory),
    ("mdcat", mdcat_renderer as Factory),
    ("glow", glow_renderer as Factory),
    ("glow-light", glow_light_renderer as Factory),
];

fn plain_renderer() -> Box<dyn MarkdownRenderer> {
    Box::new(PlainRenderer)
}

fn term_renderer() -> Box<dyn MarkdownRenderer> {
    Box::new(TermRenderer::new())
}

fn mdcat_renderer() -> Box<dyn MarkdownRenderer> {
    Box::new(ExternalRenderer::new(
        "mdcat",
        "Render markdown using the mdcat tool",
        "mdcat",
        vec!["-".to_string()],
    ))
}

fn glow_renderer() -> Box<dyn MarkdownRenderer> {
    Box::new(ExternalRenderer::glow("glow", "dark"))
}

fn glow_light_renderer() -> Box<dyn MarkdownRenderer> {
    Box::new(ExternalRenderer::glow("glow-light", "light"))
}

/// Names of every registered renderer, in registry order.
pub fn renderer_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

pub fn is_registered(name: &str) -> bool {
    REGISTRY.iter().any(|(registered, _)| *registered == name)
}

/// Every registered renderer, available or not.
pub fn all_renderers() -> Vec<Box<dyn MarkdownRenderer>> {
    REGISTRY.iter().map(|(_, factory)| factory()).collect()
}

pub fn available_renderers() -> Vec<Box<dyn MarkdownRenderer>> {
    all_renderers()
        .into_iter()
        .filter(|renderer| renderer.is_available())
        .collect()
}

/// Looks up an available renderer by name.
pub fn renderer_named(name: &str) -> Result<Box<dyn MarkdownRenderer>> {
    let (_, factory) = REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .ok_or_else(|| {
            CheetoError::Render(format!(
                "Unknown markdown renderer '{}' (expected one of: {})",
                name,
                renderer_names().join(", ")
            ))
        })?;

    let renderer = factory();
    if !renderer.is_available() {
        return Err(CheetoError::Render(format!(
            "Markdown renderer '{}' is not available",
            name
        )));
    }
    Ok(renderer)
}

fn terminal_width() -> usize {
    match Term::stdout().size_checked() {
        Some((_, cols)) if cols > 0 => cols as usize,
        _ => FALLBACK_WIDTH,
    }
}

pub struct PlainRenderer;

impl MarkdownRenderer for PlainRenderer {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn description(&self) -> &'static str {
        "Render markdown source as plain text"
    }

    fn render(&self, src: &str) -> Result<String> {
        Ok(src.to_string())
    }
}

/// Renders markdown to styled terminal text using pulldown-cmark.
pub struct TermRenderer {
    use_color: bool,
    width: usize,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self::with_color(console::colors_enabled(), terminal_width())
    }

    pub fn with_color(use_color: bool, width: usize) -> Self {
        Self { use_color, width }
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for TermRenderer {
    fn name(&self) -> &'static str {
        "term"
    }

    fn description(&self) -> &'static str {
        "Render markdown with terminal styles; this is the default"
    }

    fn render(&self, src: &str) -> Result<String> {
        let mut writer = TermWriter::new(self.use_color, self.width);
        let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        for event in Parser::new_ext(src, options) {
            writer.event(event);
        }
        Ok(writer.finish())
    }
}

#[derive(Default, Clone, Copy)]
struct Inline {
    strong: bool,
    emphasis: bool,
    strike: bool,
    link: bool,
    heading: Option<HeadingLevel>,
}

struct TermWriter {
    out: String,
    use_color: bool,
    width: usize,
    inline: Inline,
    // None for bullet lists, Some(next number) for ordered lists.
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    at_line_start: bool,
    link_urls: Vec<String>,
}

impl TermWriter {
    fn new(use_color: bool, width: usize) -> Self {
        Self {
            out: String::new(),
            use_color,
            width,
            inline: Inline::default(),
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            at_line_start: true,
            link_urls: Vec::new(),
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_block_text(&text);
                } else {
                    let styled = self.styled_inline(&text);
                    self.write(&styled);
                }
            }
            Event::Code(code) => {
                let styled = self.paint(&code, Style::new().yellow());
                self.write(&styled);
            }
            Event::Html(html) | Event::InlineHtml(html) => self.write(&html),
            Event::SoftBreak | Event::HardBreak => self.newline(),
            Event::Rule => {
                self.block_gap();
                let rule = "─".repeat(self.width.clamp(1, MAX_RULE_WIDTH));
                let styled = self.paint(&rule, Style::new().dim());
                self.write(&styled);
                self.newline();
                self.newline();
            }
            Event::TaskListMarker(checked) => {
                self.write(if checked { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.block_gap();
                self.inline.heading = Some(level);
            }
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.block_gap();
                }
            }
            Tag::BlockQuote { .. } => {
                self.block_gap();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.block_gap();
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        let label = self.paint(&lang, Style::new().dim().italic());
                        self.write(&label);
                        self.newline();
                    }
                }
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.block_gap();
                } else if !self.at_line_start {
                    self.newline();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                if !self.at_line_start {
                    self.newline();
                }
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                let indent = "  ".repeat(depth);
                let marker = self.paint(&marker, Style::new().cyan());
                self.write(&format!("{}{}", indent, marker));
            }
            Tag::Emphasis => self.inline.emphasis = true,
            Tag::Strong => self.inline.strong = true,
            Tag::Strikethrough => self.inline.strike = true,
            Tag::Link { dest_url, .. } => {
                self.inline.link = true;
                self.link_urls.push(dest_url.to_string());
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading { .. } => {
                self.inline.heading = None;
                self.newline();
            }
            TagEnd::Paragraph => self.newline(),
            TagEnd::BlockQuote { .. } => {
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => self.in_code_block = false,
            TagEnd::List { .. } => {
                self.lists.pop();
                if !self.at_line_start {
                    self.newline();
                }
            }
            TagEnd::Item => {
                if !self.at_line_start {
                    self.newline();
                }
            }
            TagEnd::Emphasis => self.inline.emphasis = false,
            TagEnd::Strong => self.inline.strong = false,
            TagEnd::Strikethrough => self.inline.strike = false,
            TagEnd::Link => {
                self.inline.link = false;
                if let Some(url) = self.link_urls.pop() {
                    let styled = self.paint(&format!(" <{}>", url), Style::new().dim());
                    self.write(&styled);
                }
            }
            _ => {}
        }
    }

    fn code_block_text(&mut self, text: &str) {
        for line in text.lines() {
            let styled = self.paint(line, Style::new().green());
            self.write(&format!("    {}", styled));
            self.newline();
        }
    }

    fn styled_inline(&self, text: &str) -> String {
        let inline = self.inline;
        let mut style = Style::new();
        match inline.heading {
            Some(HeadingLevel::H1) => style = style.bold().underlined().magenta(),
            Some(HeadingLevel::H2) => style = style.bold().cyan(),
            Some(_) => style = style.bold(),
            None => {}
        }
        if inline.strong {
            style = style.bold();
        }
        if inline.emphasis {
            style = style.italic();
        }
        if inline.strike {
            style = style.strikethrough();
        }
        if inline.link {
            style = style.blue().underlined();
        }
        self.paint(text, style)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start && self.quote_depth > 0 {
            let bar = self.paint(&"│ ".repeat(self.quote_depth), Style::new().dim());
            self.out.push_str(&bar);
        }
        self.out.push_str(text);
        self.at_line_start = false;
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    /// Separates blocks with exactly one blank line.
    fn block_gap(&mut self) {
        if self.out.is_empty() {
            return;
        }
        if !self.at_line_start {
            self.newline();
        }
        if !self.out.ends_with("\n\n") {
            self.newline();
        }
    }

    fn finish(self) -> String {
        let mut out = self.out.trim_end().to_string();
        out.push('\n');
        out
    }
}

/// Pipes markdown through an external program and returns its stdout.
pub struct ExternalRenderer {
    name: &'static str,
    description: &'static str,
    program: String,
    args: Vec<String>,
}

impl ExternalRenderer {
    pub fn new(
        name: &'static str,
        description: &'static str,
        program: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            name,
            description,
            program: program.into(),
            args,
        }
    }

    fn glow(name: &'static str, style: &str) -> Self {
        let description = if style == "light" {
            "Render markdown using the glow tool (light mode)"
        } else {
            "Render markdown using the glow tool"
        };
        Self::new(
            name,
            description,
            "glow",
            vec![
                "-s".to_string(),
                style.to_string(),
                "-w".to_string(),
                terminal_width().to_string(),
                "-".to_string(),
            ],
        )
    }

    pub fn command_line(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl MarkdownRenderer for ExternalRenderer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn is_available(&self) -> bool {
        is_executable_in_path(&self.program)
    }

    fn render(&self, src: &str) -> Result<String> {
        debug!(command = ?self.command_line(), "running external markdown renderer");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CheetoError::Render(format!("Failed to spawn {}: {}", self.program, e)))?;

        // stdin is written while wait_with_output drains stdout and stderr.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = src.to_string();
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output().map_err(|e| {
            CheetoError::Render(format!("Failed to wait for {}: {}", self.program, e))
        })?;

        let written = match writer {
            Some(writer) => writer.join().map_err(|_| {
                CheetoError::Render(format!("Writer thread for {} panicked", self.program))
            })?,
            None => Ok(()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CheetoError::Render(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written.map_err(|e| {
            CheetoError::Render(format!("Failed to write to {}: {}", self.program, e))
        })?;

        String::from_utf8(output.stdout).map_err(|e| {
            CheetoError::Render(format!("{} produced invalid UTF-8: {}", self.program, e))
        })
    }
}

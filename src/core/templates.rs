//! Template system for consistent report formatting.
//!
//! Templates are plain strings with `{placeholder}` slots filled from a
//! [`TemplateContext`] in a single pass. Values are colored by the caller
//! before rendering, so the renderer itself is color agnostic.
//!
//! # Public API
//! - [`Templates`]: Template definitions for every report line
//! - [`TemplateContext`]: Values for the placeholders
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Fill a template
//! - [`strip_ansi_codes`]: Utility for removing color codes

use std::fmt::Write;

/// Template definitions for all report lines
pub struct Templates {
    pub scanning: &'static str,
    pub rule: &'static str,
    pub repositories_header: &'static str,
    pub repository_line: &'static str,
    pub repository_detail: &'static str,
    pub uninitialized_header: &'static str,
    pub uninitialized_line: &'static str,
    pub summary: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    scanning: "Scanning {path}...",
    rule: "============================================================",
    repositories_header: "GIT REPOSITORIES FOUND: {count}",
    repository_line: "{icon} {path}  =>  {status}",
    repository_detail: "      {path} ({vcs})",
    uninitialized_header: "UNINITIALIZED CODE DIRECTORIES (Potential Projects): {count}",
    uninitialized_line: "[?] {path}",
    summary: "{count} repositories ({attention} need attention), {uninitialized} uninitialized directories",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub path: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub status: Option<&'a str>,
    pub vcs: Option<&'a str>,
    pub count: Option<usize>,
    pub attention: Option<usize>,
    pub uninitialized: Option<usize>,
}

/// Render a template, replacing known placeholders with context values.
///
/// Unknown placeholders are kept as-is; known ones without a value render
/// empty.
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut output = String::with_capacity(template.len() + 64);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            // no closing brace, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        match placeholder.as_str() {
            "path" => output.push_str(context.path.unwrap_or_default()),
            "icon" => output.push_str(context.icon.unwrap_or_default()),
            "status" => output.push_str(context.status.unwrap_or_default()),
            "vcs" => output.push_str(context.vcs.unwrap_or_default()),
            "count" => write_number(&mut output, context.count),
            "attention" => write_number(&mut output, context.attention),
            "uninitialized" => write_number(&mut output, context.uninitialized),
            _ => {
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }

    output
}

fn write_number(output: &mut String, value: Option<usize>) {
    if let Some(value) = value {
        let _ = write!(output, "{value}");
    }
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

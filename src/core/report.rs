//! Scan report rendering.
//!
//! Two renderings of a [`ScanResult`]:
//! - [`render_report`]: colored text for humans, repositories grouped by status
//! - [`render_json`]: pretty JSON for scripts
//!
//! Both display paths relative to the scan root.

use crate::core::{
    colors::{get_status_color_style, get_status_icon, get_status_label, get_uninitialized_color},
    error::Result,
    record::{relative_path, RepositoryRecord, ScanResult},
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::fmt::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Add absolute paths, detector names and a summary line
    pub verbose: bool,
}

/// Render the text report for a scan of `root`
pub fn render_report(result: &ScanResult, root: &Path, options: &ReportOptions) -> String {
    let mut out = String::new();

    let root_display = root.display().to_string();
    let scanning = TemplateContext {
        path: Some(&root_display),
        ..Default::default()
    };
    let _ = writeln!(out, "{}\n", render_template(TEMPLATES.scanning, &scanning));

    write_section_header(
        &mut out,
        TEMPLATES.repositories_header,
        result.repositories.len(),
    );
    for record in grouped_by_status(&result.repositories) {
        write_repository(&mut out, record, root, options);
    }

    if !result.uninitialized.is_empty() {
        out.push('\n');
        write_section_header(
            &mut out,
            TEMPLATES.uninitialized_header,
            result.uninitialized.len(),
        );
        for dir in &result.uninitialized {
            let display = relative_path(dir, root).display().to_string();
            let context = TemplateContext {
                path: Some(&display),
                ..Default::default()
            };
            let line = render_template(TEMPLATES.uninitialized_line, &context);
            let _ = writeln!(out, "{}", get_uninitialized_color(&line));
        }
    }

    if options.verbose {
        let attention = result
            .repositories
            .iter()
            .filter(|r| r.status.needs_attention())
            .count();
        let context = TemplateContext {
            count: Some(result.repositories.len()),
            attention: Some(attention),
            uninitialized: Some(result.uninitialized.len()),
            ..Default::default()
        };
        let _ = writeln!(out, "\n{}", render_template(TEMPLATES.summary, &context));
    }

    out
}

/// Render the scan as pretty JSON with root-relative paths
pub fn render_json(result: &ScanResult, root: &Path) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result.relative_to(root))?)
}

/// Repositories ordered by status group, then by path
fn grouped_by_status(repositories: &[RepositoryRecord]) -> Vec<&RepositoryRecord> {
    let mut ordered: Vec<&RepositoryRecord> = repositories.iter().collect();
    ordered.sort_by(|a, b| {
        a.status
            .kind()
            .sort_priority()
            .cmp(&b.status.kind().sort_priority())
            .then_with(|| a.path.cmp(&b.path))
    });
    ordered
}

fn write_section_header(out: &mut String, template: &str, count: usize) {
    let context = TemplateContext {
        count: Some(count),
        ..Default::default()
    };
    let _ = writeln!(out, "{}", TEMPLATES.rule);
    let _ = writeln!(out, "{}", render_template(template, &context));
    let _ = writeln!(out, "{}", TEMPLATES.rule);
}

fn write_repository(
    out: &mut String,
    record: &RepositoryRecord,
    root: &Path,
    options: &ReportOptions,
) {
    let kind = record.status.kind();
    let color = get_status_color_style(&kind);

    let display = relative_path(&record.path, root).display().to_string();
    let icon = color(get_status_icon(&kind)).to_string();
    let status = color(get_status_label(&kind).as_str()).to_string();
    let context = TemplateContext {
        icon: Some(&icon),
        path: Some(&display),
        status: Some(&status),
        ..Default::default()
    };
    let _ = writeln!(out, "{}", render_template(TEMPLATES.repository_line, &context));

    if options.verbose {
        let absolute = record.path.display().to_string();
        let context = TemplateContext {
            path: Some(&absolute),
            vcs: Some(&record.vcs),
            ..Default::default()
        };
        let _ = writeln!(
            out,
            "{}",
            render_template(TEMPLATES.repository_detail, &context)
        );
    }
}

//! Output formatters for parse reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeParserError};
use crate::output::report::ParseReport;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering a parse report
pub trait OutputFormatter {
    fn format_report(&self, report: &ParseReport) -> Result<String>;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON for scripting and API use
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_field(&self, label: &str, value: Option<&str>) -> String {
        match value {
            Some(value) => format!("{:<8} {}\n", label, self.colorize(value, Color::Cyan)),
            None => format!("{:<8} {}\n", label, self.colorize("not found", Color::BrightBlack)),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ParseReport) -> Result<String> {
        let resume = &report.resume;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME PARSE RESULT", 1));
        let (found, total) = report.coverage();
        output.push_str(&format!(
            "Source: {} | {} chars | {}ms | {}/{} fields found\n",
            report.metadata.source_file,
            report.metadata.text_chars,
            report.metadata.processing_time_ms,
            found,
            total
        ));

        output.push_str(&self.format_header("Contact", 2));
        output.push_str(&self.format_field("Name:", resume.name.as_deref()));
        output.push_str(&self.format_field("Email:", resume.email.as_deref()));
        output.push_str(&self.format_field("Phone:", resume.phone.as_deref()));

        output.push_str(&self.format_header("Skills", 2));
        let technical = if resume.skills.technical.is_empty() {
            "-".to_string()
        } else {
            resume.skills.technical.join(", ")
        };
        let soft = if resume.skills.soft.is_empty() {
            "-".to_string()
        } else {
            resume.skills.soft.join(", ")
        };
        output.push_str(&format!("Technical: {}\n", self.colorize(&technical, Color::Green)));
        output.push_str(&format!("Soft:      {}\n", self.colorize(&soft, Color::Green)));

        output.push_str(&self.format_header("Experience", 2));
        if resume.experience.is_empty() {
            output.push_str("  (none detected)\n");
        }
        for (i, entry) in resume.experience.iter().enumerate() {
            output.push_str(&format!(
                "  {}. [{}]\n",
                i + 1,
                self.colorize(&entry.dates.join(", "), Color::Yellow)
            ));
            let description = if self.detailed {
                entry.description.clone()
            } else {
                shorten(&entry.description, 120)
            };
            output.push_str(&format!("     {}\n", description));
        }

        output.push_str(&self.format_header("Achievements", 2));
        if resume.achievements.is_empty() {
            output.push_str("  (none detected)\n");
        }
        for achievement in &resume.achievements {
            output.push_str(&format!("  • {}\n", achievement));
        }

        if self.detailed {
            output.push_str(&self.format_header("Raw Text Preview", 3));
            output.push_str(&resume.raw_text);
            output.push('\n');
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ParseReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn or_dash(value: Option<&str>) -> &str {
        value.unwrap_or("—")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ParseReport) -> Result<String> {
        let resume = &report.resume;
        let mut md = String::new();
        let title = resume.name.as_deref().unwrap_or("Unknown candidate");

        writeln!(md, "# {}\n", title).map_err(fmt_error)?;

        if self.include_metadata {
            writeln!(
                md,
                "_Parsed from `{}` on {} (resume-parser {})_\n",
                report.metadata.source_file,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.parser_version
            )
            .map_err(fmt_error)?;
        }

        writeln!(md, "## Contact\n").map_err(fmt_error)?;
        writeln!(md, "| Field | Value |\n|-------|-------|").map_err(fmt_error)?;
        writeln!(md, "| Email | {} |", Self::or_dash(resume.email.as_deref())).map_err(fmt_error)?;
        writeln!(md, "| Phone | {} |\n", Self::or_dash(resume.phone.as_deref())).map_err(fmt_error)?;

        writeln!(md, "## Skills\n").map_err(fmt_error)?;
        writeln!(md, "- **Technical:** {}", resume.skills.technical.join(", ")).map_err(fmt_error)?;
        writeln!(md, "- **Soft:** {}\n", resume.skills.soft.join(", ")).map_err(fmt_error)?;

        if !resume.experience.is_empty() {
            writeln!(md, "## Experience\n").map_err(fmt_error)?;
            for entry in &resume.experience {
                writeln!(md, "### {}\n\n{}\n", entry.dates.join(" – "), entry.description)
                    .map_err(fmt_error)?;
            }
        }

        if !resume.achievements.is_empty() {
            writeln!(md, "## Achievements\n").map_err(fmt_error)?;
            for achievement in &resume.achievements {
                writeln!(md, "- {}", achievement).map_err(fmt_error)?;
            }
        }

        Ok(md)
    }
}

fn fmt_error(e: std::fmt::Error) -> ResumeParserError {
    ResumeParserError::OutputFormatting(e.to_string())
}

/// Cut `text` to at most `max_chars` characters on a word boundary, adding `...`.
fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut = crate::extraction::truncate_chars(text, max_chars);
    let end = cut.rfind(' ').unwrap_or(cut.len());
    format!("{}...", &cut[..end])
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(config.pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &ParseReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_parsed{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_parsed{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_parsed{}.md", base_name, timestamp_suffix),
    }
}

//! Renderers for a finished curriculum: terminal text, Markdown, CSV, JSON and PDF.

use crate::domain::model::{Bucket, CurriculumDocument, OutputFormat};
use crate::utils::error::{CurriculumError, Result};
use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use serde::Serialize;
use std::fmt::Write;

pub fn render(document: &CurriculumDocument, format: OutputFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Markdown => render_markdown(document)?.into_bytes(),
        OutputFormat::Text => render_text(document)?.into_bytes(),
        OutputFormat::Csv => render_csv(document)?,
        OutputFormat::Json => render_json(document, Utc::now())?.into_bytes(),
        OutputFormat::Pdf => render_pdf(document)?,
    };
    Ok(bytes)
}

/// Display layout used by `--print`.
pub fn render_text(document: &CurriculumDocument) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Curriculum Generated for {}", document.course).map_err(fmt_error)?;

    for (period, topics) in document.plan.iter() {
        writeln!(out).map_err(fmt_error)?;
        writeln!(out, "== {} ==", period).map_err(fmt_error)?;
        for topic in topics {
            writeln!(out, "{}", topic.title).map_err(fmt_error)?;
            for subtopic in &topic.subtopics {
                writeln!(out, "  • {}", subtopic).map_err(fmt_error)?;
            }
            writeln!(out, "  🔗 Reference: {}", topic.reference).map_err(fmt_error)?;
        }
    }

    Ok(out)
}

/// Printable document export: one section per period, one subsection per topic.
pub fn render_markdown(document: &CurriculumDocument) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# {} Curriculum", document.course).map_err(fmt_error)?;

    for (period, topics) in document.plan.iter() {
        writeln!(out).map_err(fmt_error)?;
        writeln!(out, "## {}", period).map_err(fmt_error)?;
        for topic in topics {
            writeln!(out).map_err(fmt_error)?;
            writeln!(out, "### {}", topic.title).map_err(fmt_error)?;
            writeln!(out).map_err(fmt_error)?;
            for subtopic in &topic.subtopics {
                writeln!(out, "- {}", subtopic).map_err(fmt_error)?;
            }
            writeln!(out).map_err(fmt_error)?;
            writeln!(out, "Reference: {}", topic.reference).map_err(fmt_error)?;
        }
    }

    Ok(out)
}

pub fn render_csv(document: &CurriculumDocument) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "period",
        "title",
        "subtopic_1",
        "subtopic_2",
        "subtopic_3",
        "reference",
    ])?;

    for (period, topics) in document.plan.iter() {
        for topic in topics {
            let [first, second, third] = &topic.subtopics;
            writer.write_record([
                period,
                topic.title.as_str(),
                first.as_str(),
                second.as_str(),
                third.as_str(),
                topic.reference.as_str(),
            ])?;
        }
    }

    writer.into_inner().map_err(|e| CurriculumError::RenderError {
        message: format!("Failed to flush CSV output: {}", e),
    })
}

#[derive(Serialize)]
struct JsonExport<'a> {
    course: &'a str,
    domain: String,
    plan_type: String,
    generated_at: String,
    buckets: &'a [Bucket],
}

pub fn render_json(document: &CurriculumDocument, generated_at: DateTime<Utc>) -> Result<String> {
    let export = JsonExport {
        course: &document.course,
        domain: document.domain.to_string(),
        plan_type: document.plan.mode.to_string(),
        generated_at: generated_at.to_rfc3339(),
        buckets: &document.plan.buckets,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_MM: f32 = 20.0;

#[derive(Clone, Copy)]
enum PdfStyle {
    Title,
    Period,
    Topic,
    Subtopic,
    Reference,
}

impl PdfStyle {
    /// (font size in pt, indent in mm, line advance in mm, bold)
    fn metrics(self) -> (f32, f32, f32, bool) {
        match self {
            PdfStyle::Title => (18.0, 0.0, 12.0, true),
            PdfStyle::Period => (15.0, 0.0, 12.0, true),
            PdfStyle::Topic => (12.0, 0.0, 9.0, true),
            PdfStyle::Subtopic => (11.0, 6.0, 6.0, false),
            PdfStyle::Reference => (10.0, 6.0, 7.0, false),
        }
    }
}

/// Line-by-line A4 writer that breaks onto a new page at the bottom margin.
struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT.0 - MARGIN_MM,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT.0 - MARGIN_MM;
    }

    fn line(&mut self, text: &str, style: PdfStyle) {
        let (size, indent, advance, bold) = style.metrics();
        if self.y - advance < MARGIN_MM {
            self.new_page();
        }
        self.y -= advance;

        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM + indent), Mm(self.y), font);
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc.save_to_bytes().map_err(pdf_error)
    }
}

/// Paginated A4 export with the Markdown layout. Every period starts on a new
/// page and long periods continue onto further pages.
pub fn render_pdf(document: &CurriculumDocument) -> Result<Vec<u8>> {
    let title = format!("{} Curriculum", document.course);
    let mut writer = PdfWriter::new(&title)?;
    writer.line(&title, PdfStyle::Title);

    for (index, (period, topics)) in document.plan.iter().enumerate() {
        if index > 0 {
            writer.new_page();
        }
        writer.line(period, PdfStyle::Period);
        for topic in topics {
            writer.line(&topic.title, PdfStyle::Topic);
            for subtopic in &topic.subtopics {
                writer.line(&format!("- {}", subtopic), PdfStyle::Subtopic);
            }
            writer.line(&format!("Reference: {}", topic.reference), PdfStyle::Reference);
        }
    }

    writer.finish()
}

/// `"CI/CD Pipelines"` -> `"CI-CD_Pipelines_Curriculum"`
pub fn file_stem(course: &str) -> String {
    let safe: String = course
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' => '-',
            other => other,
        })
        .collect();
    format!("{}_Curriculum", safe)
}

pub fn file_name(course: &str, format: OutputFormat) -> String {
    format!("{}.{}", file_stem(course), format.extension())
}

fn pdf_error(e: printpdf::Error) -> CurriculumError {
    CurriculumError::RenderError {
        message: format!("PDF generation failed: {}", e),
    }
}

fn fmt_error(e: std::fmt::Error) -> CurriculumError {
    CurriculumError::RenderError {
        message: e.to_string(),
    }
}

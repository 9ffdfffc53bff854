//! Text extraction from resume documents
//!
//! Supported containers: PDF, plain text, Markdown. Any extraction failure
//! is fatal for that document only; the caller decides what else proceeds.

use crate::error::{Result, SkillGapError};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SkillGapError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;
        Ok(Self::from_extension(extension))
    }
}

/// Extract plain text from a document, routed by file type.
pub async fn extract_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SkillGapError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    match FileType::detect(path)? {
        FileType::Pdf => extract_pdf(path).await,
        FileType::Text => Ok(fs::read_to_string(path).await?),
        FileType::Markdown => extract_markdown(path).await,
        FileType::Unknown => Err(SkillGapError::UnsupportedFormat(format!(
            "Unsupported file type for: {}",
            path.display()
        ))),
    }
}

async fn extract_pdf(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        SkillGapError::PdfExtraction(format!(
            "Failed to extract text from PDF '{}': {}",
            path.display(),
            e
        ))
    })
}

async fn extract_markdown(path: &Path) -> Result<String> {
    let markdown = fs::read_to_string(path).await?;

    let parser = Parser::new(&markdown);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    Ok(strip_html(&rendered))
}

fn strip_html(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let re = regex::Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex");
    let clean = re.replace_all(&text, "");

    clean
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_extension("pdf"), FileType::Pdf);
        assert_eq!(FileType::from_extension("TXT"), FileType::Text);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }

    #[test]
    fn test_strip_html() {
        let html = "<h1>Skills</h1><p>Python &amp; SQL</p>";
        let text = strip_html(html);
        assert!(text.contains("Skills"));
        assert!(text.contains("Python & SQL"));
        assert!(!text.contains('<'));
    }
}

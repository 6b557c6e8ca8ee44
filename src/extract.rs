use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::error::{KwscanError, Result};

/// Document kinds the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Infer the kind from the file name suffix. Anything that is not
    /// a PDF is scanned as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Position of a line within its source document, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Line number in a plain-text file.
    Line(usize),
    /// Page and intra-page line in a paginated document.
    Page { page: usize, line: usize },
}

/// Opens `path` and returns a stream of (location, line) pairs for its
/// document kind. Open and parse failures map to the file-scoped error
/// variants; the search engine turns all of them into a skip.
pub fn extract_lines(path: &Path, kind: DocumentKind) -> Result<LineStream> {
    match kind {
        DocumentKind::PlainText => {
            let file = File::open(path).map_err(|source| KwscanError::Access {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(LineStream::Text(TextLines {
                path: path.to_path_buf(),
                lines: BufReader::new(file).lines(),
                next_line: 1,
            }))
        }
        DocumentKind::Pdf => {
            let pages = extract_pdf_pages(path)?;
            Ok(LineStream::Pdf(PdfLines::new(pages)))
        }
    }
}

/// Lines of one document, tagged by kind. New document kinds add a
/// variant here and an arm in [`extract_lines`]; the engine only sees
/// the (location, line) shape.
pub enum LineStream {
    Text(TextLines),
    Pdf(PdfLines),
}

impl Iterator for LineStream {
    type Item = Result<(Location, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            LineStream::Text(lines) => lines.next(),
            LineStream::Pdf(lines) => lines.next(),
        }
    }
}

pub struct TextLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    next_line: usize,
}

impl Iterator for TextLines {
    type Item = Result<(Location, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lines.next()?;
        let location = Location::Line(self.next_line);
        self.next_line += 1;
        Some(match result {
            Ok(line) => Ok((location, line)),
            Err(err) if err.kind() == ErrorKind::InvalidData => Err(KwscanError::Decode {
                path: self.path.clone(),
            }),
            Err(source) => Err(KwscanError::Access {
                path: self.path.clone(),
                source,
            }),
        })
    }
}

pub struct PdfLines {
    entries: std::vec::IntoIter<(Location, String)>,
}

impl PdfLines {
    fn new(pages: Vec<String>) -> Self {
        let mut entries = Vec::new();
        for (page_idx, page) in pages.iter().enumerate() {
            for (line_idx, line) in page.lines().enumerate() {
                let location = Location::Page {
                    page: page_idx + 1,
                    line: line_idx + 1,
                };
                entries.push((location, line.to_string()));
            }
        }
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl Iterator for PdfLines {
    type Item = Result<(Location, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(Ok)
    }
}

/// Page texts of a PDF document, in page order. pdf-extract can panic
/// on malformed documents, so the call runs under `catch_unwind`.
fn extract_pdf_pages(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| KwscanError::Access {
        path: path.to_path_buf(),
        source,
    })?;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    }));
    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(err)) => Err(KwscanError::Format {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
        Err(_) => Err(KwscanError::Format {
            path: path.to_path_buf(),
            message: "panicked while parsing document".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_path() {
        assert_eq!(DocumentKind::from_path(Path::new("a.txt")), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_path(Path::new("b.pdf")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("c.PDF")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("noext")), DocumentKind::PlainText);
    }

    #[test]
    fn test_pdf_lines_enumerates_pages_then_lines() {
        let pages = vec!["alpha\nbeta".to_string(), "beta\ngamma".to_string()];
        let entries: Vec<_> = PdfLines::new(pages).map(Result::unwrap).collect();
        assert_eq!(
            entries,
            vec![
                (Location::Page { page: 1, line: 1 }, "alpha".to_string()),
                (Location::Page { page: 1, line: 2 }, "beta".to_string()),
                (Location::Page { page: 2, line: 1 }, "beta".to_string()),
                (Location::Page { page: 2, line: 2 }, "gamma".to_string()),
            ]
        );
    }
}

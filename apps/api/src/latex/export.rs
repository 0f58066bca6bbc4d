//! Export targets for a composed document.

use thiserror::Error;

pub const TEX_FILENAME: &str = "resu.mk_resume.tex";
pub const TEX_MIME: &str = "application/x-tex";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// PDF output needs a LaTeX toolchain; this service only emits source.
    #[error("PDF generation requires an external LaTeX compiler; download the .tex source instead")]
    PdfUnsupported,
}

/// A composed document ready to be handed to the client as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexExport {
    pub filename: &'static str,
    pub mime: &'static str,
    pub source: String,
}

pub fn export_tex(source: String) -> TexExport {
    TexExport {
        filename: TEX_FILENAME,
        mime: TEX_MIME,
        source,
    }
}

/// Always fails: compiling to PDF is out of scope.
pub fn export_pdf(_export: &TexExport) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::PdfUnsupported)
}

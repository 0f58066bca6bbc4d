// LaTeX résumé generation: escaping, template preambles, composition and export.
// Output is source only; compiling to PDF is left to an external toolchain.

pub mod composer;
pub mod escape;
pub mod export;
pub mod handlers;
pub mod template;

pub use composer::compose;
pub use export::{export_pdf, export_tex, ExportError, TexExport};
pub use template::TemplateKind;

//! Document templates. A template only changes the preamble (class options, margins,
//! fonts); the document body is identical across templates.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Cosmetic layout choice for the generated LaTeX.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Compact,
}

impl TemplateKind {
    /// Resolves a UI selector value. Unknown or absent selectors fall back to `Classic`.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("modern") => TemplateKind::Modern,
            Some("compact") => TemplateKind::Compact,
            _ => TemplateKind::Classic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Compact => "compact",
        }
    }

    pub fn preamble(&self) -> &'static str {
        match self {
            TemplateKind::Classic => CLASSIC_PREAMBLE,
            TemplateKind::Modern => MODERN_PREAMBLE,
            TemplateKind::Compact => COMPACT_PREAMBLE,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Lenient on input: any string deserializes, unknown values become Classic.
impl<'de> Deserialize<'de> for TemplateKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(TemplateKind::from_selector(raw.as_deref()))
    }
}

// Each preamble defines `\entry{date}{title}{company}{description}`.
const CLASSIC_PREAMBLE: &str = r"\documentclass[10pt,a4paper]{article}
\usepackage[margin=1.6cm]{geometry}
\usepackage{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\titleformat*{\section}{\large\bfseries}
\newcommand{\entry}[4]{\noindent\textbf{#2} \hfill {\small #1}\\\textit{#3}\\#4\vspace{6pt}}";

const MODERN_PREAMBLE: &str = r"\documentclass[10pt,a4paper]{article}
\usepackage[margin=1.4cm]{geometry}
\usepackage{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\usepackage{fontspec}
\setmainfont{Helvetica Neue}
\titleformat*{\section}{\large\bfseries}
\newcommand{\entry}[4]{\noindent\textbf{#2} \hfill {\small #1}\\\textit{#3}\\#4\vspace{6pt}}";

const COMPACT_PREAMBLE: &str = r"\documentclass[9pt,a4paper]{article}
\usepackage[margin=1.2cm]{geometry}
\usepackage{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\titleformat*{\section}{\normalsize\bfseries}
\newcommand{\entry}[4]{\noindent\textbf{#2} \hfill {\small #1}\\\textit{#3}\\#4\vspace{4pt}}";

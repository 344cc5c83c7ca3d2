//! Built-in content templates offered when writing reading notes.

use serde::Serialize;

/// Category of a content template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Business,
    Novel,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Business, TemplateKind::Novel];

    /// Human-readable label shown in the template picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Business => "Business book",
            Self::Novel => "Novel",
        }
    }

    /// HTML skeleton inserted into the editor, one heading per prompt.
    pub fn content(self) -> &'static str {
        match self {
            Self::Business => BUSINESS_TEMPLATE,
            Self::Novel => NOVEL_TEMPLATE,
        }
    }
}

const BUSINESS_TEMPLATE: &str = "\
<h1>Why I chose this book</h1>
<h1>What I wanted to get out of it</h1>
<h1>What stood out</h1>
<h1>How I will put it to use</h1>
<h1>What changed after reading</h1>
";

const NOVEL_TEMPLATE: &str = "\
<h1>Synopsis</h1>
<h1>Memorable characters</h1>
<h1>Impressions</h1>
<h1>A line that stayed with me</h1>
";

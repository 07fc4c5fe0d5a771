//! Placeholder templates for the digest document.
//!
//! Templates are plain text with `{{ name }}` placeholders. A template
//! directory may override either part of the digest:
//!
//! - `digest.md`: the document (`date`, `topics`, `level`, `guidance`, `papers`)
//! - `paper.md`: one paper section (`index`, `title`, `authors`, `published`,
//!   `category`, `abstract`, `why_it_matters`, `link`, `pdf_line`)
//!
//! Missing files fall back to the built-in templates below.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{DigestError, DigestResult};

/// File name of the document template inside a template directory.
pub const DOCUMENT_FILE: &str = "digest.md";

/// File name of the per-paper template inside a template directory.
pub const PAPER_FILE: &str = "paper.md";

/// Built-in document template.
pub const BUILTIN_DOCUMENT: &str = "# Academic Paper Digest — {{ date }}

**Topics:** {{ topics }}
**Reading Level:** {{ level }}

## Reading Guidance
{{ guidance }}

---

{{ papers }}";

/// Built-in per-paper template.
pub const BUILTIN_PAPER: &str = "## {{ index }}. {{ title }}

**Authors:** {{ authors }}
**Published:** {{ published }}
**Category:** {{ category }}

### Abstract
{{ abstract }}

### Why It Matters
{{ why_it_matters }}

**Links:**
- [arXiv page]({{ link }})
{{ pdf_line }}
---

";

/// A text template with `{{ name }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap template source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitute every placeholder. Unknown names render as empty text;
    /// an unterminated `{{` is copied through unchanged.
    pub fn render(&self, vars: &HashMap<&str, String>) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let Some(close) = after.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            let name = after[..close].trim();
            match vars.get(name) {
                Some(value) => out.push_str(value),
                None => tracing::debug!(name, "template placeholder has no value"),
            }
            rest = &after[close + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// The two templates that make up a digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Whole-document template.
    pub document: Template,
    /// Template repeated once per paper.
    pub paper: Template,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    /// The built-in templates.
    pub fn builtin() -> Self {
        Self {
            document: Template::new(BUILTIN_DOCUMENT),
            paper: Template::new(BUILTIN_PAPER),
        }
    }

    /// Load templates from `dir`, each falling back to its built-in version
    /// when the file does not exist.
    pub fn resolve(dir: &Path) -> DigestResult<Self> {
        Ok(Self {
            document: load_or(dir.join(DOCUMENT_FILE).as_path(), BUILTIN_DOCUMENT)?,
            paper: load_or(dir.join(PAPER_FILE).as_path(), BUILTIN_PAPER)?,
        })
    }
}

fn load_or(path: &Path, builtin: &str) -> DigestResult<Template> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "template not found, using built-in");
        return Ok(Template::new(builtin));
    }

    tracing::info!(path = %path.display(), "using template file");
    std::fs::read_to_string(path)
        .map(Template::new)
        .map_err(|source| DigestError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect()
    }

    #[test]
    fn substitutes_placeholders() {
        let t = Template::new("Hello {{ name }}, {{name}}!");
        assert_eq!(t.render(&vars(&[("name", "Ada")])), "Hello Ada, Ada!");
    }

    #[test]
    fn unknown_placeholder_is_empty() {
        let t = Template::new("[{{ missing }}]");
        assert_eq!(t.render(&HashMap::new()), "[]");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let t = Template::new("a {{ b");
        assert_eq!(t.render(&vars(&[("b", "x")])), "a {{ b");
    }

    #[test]
    fn values_are_not_reexpanded() {
        let t = Template::new("{{ a }}");
        assert_eq!(t.render(&vars(&[("a", "{{ a }}")])), "{{ a }}");
    }

    #[test]
    fn missing_dir_uses_builtins() {
        let set = TemplateSet::resolve(Path::new("/no/such/template/dir")).unwrap();
        assert_eq!(set, TemplateSet::builtin());
    }

    #[test]
    fn template_files_override_builtins_independently() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DOCUMENT_FILE), "DIGEST {{ date }}\n{{ papers }}").unwrap();

        let set = TemplateSet::resolve(dir.path()).unwrap();
        assert_eq!(set.document, Template::new("DIGEST {{ date }}\n{{ papers }}"));
        assert_eq!(set.paper, Template::new(BUILTIN_PAPER));
    }
}

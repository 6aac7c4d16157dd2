//! Component documentation loading
//!
//! Docs are a collaborator of the index: anything implementing
//! [`DocsSource`] can feed it. [`MdxDocsLoader`] reads one MDX (or plain
//! markdown) file per component:
//!
//! ```mdx
//! ---
//! title: Components/Button
//! category: Actions
//! status: stable
//! ---
//!
//! # Button
//!
//! Buttons trigger an action.
//!
//! ## Examples
//!
//! ### Primary
//!
//! ```tsx
//! <Button variant="primary">Save</Button>
//! ```
//!
//! ## Best Practices
//!
//! - Use one primary button per view
//!
//! ## Accessibility
//!
//! - Icon-only buttons need an `aria-label`
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::{CodeExample, ComponentDocs};

/// Source of per-component documentation, keyed by component name
pub trait DocsSource: Send + Sync {
    /// All documented components, in a stable order
    fn load(&self) -> Result<Vec<(String, ComponentDocs)>>;
}

/// Reads `*.mdx` / `*.md` files from a single directory
#[derive(Clone, Debug)]
pub struct MdxDocsLoader {
    dir: PathBuf,
}

impl MdxDocsLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn doc_files(&self) -> Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read docs directory: {}", self.dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e == "mdx" || e == "md")
            })
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl DocsSource for MdxDocsLoader {
    fn load(&self) -> Result<Vec<(String, ComponentDocs)>> {
        if !self.dir.exists() {
            debug!("Docs directory {} not found, no docs loaded", self.dir.display());
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();
        let mut seen = HashSet::new();

        for path in self.doc_files()? {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable docs file {}: {}", path.display(), e);
                    continue;
                }
            };

            match parse_mdx(stem, &content) {
                Ok((name, component_docs)) => {
                    if seen.insert(name.clone()) {
                        docs.push((name, component_docs));
                    } else {
                        warn!(
                            "Docs for '{}' already loaded, ignoring {}",
                            name,
                            path.display()
                        );
                    }
                }
                Err(e) => warn!("Skipping docs file {}: {:#}", path.display(), e),
            }
        }

        debug!("Loaded docs for {} components", docs.len());
        Ok(docs)
    }
}

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    component: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Parse one docs file. `stem` names the component when the frontmatter doesn't.
pub fn parse_mdx(stem: &str, source: &str) -> Result<(String, ComponentDocs)> {
    let (frontmatter, body) = split_frontmatter(source);

    let frontmatter: Frontmatter = match frontmatter {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).context("Invalid frontmatter")?
        }
        _ => Frontmatter::default(),
    };

    // Storybook titles look like "Components/Forms/Button"
    let name = frontmatter
        .component
        .clone()
        .or_else(|| {
            frontmatter
                .title
                .as_deref()
                .and_then(|t| t.rsplit('/').next())
                .map(|t| t.trim().to_string())
        })
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| stem.to_string());

    let mut docs = parse_body(body);
    docs.category = frontmatter.category;
    docs.status = frontmatter.status;
    if frontmatter.description.is_some() {
        docs.description = frontmatter.description;
    }

    Ok((name, docs))
}

fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    // Unterminated block: treat the whole file as body
    (None, source)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Other,
    Examples,
    BestPractices,
    Accessibility,
}

fn classify(heading: &str) -> Option<Section> {
    let heading = heading.trim().to_lowercase();
    if heading.starts_with("example") || heading == "usage" {
        Some(Section::Examples)
    } else if heading.contains("best practice") || heading == "guidelines" {
        Some(Section::BestPractices)
    } else if heading.contains("accessibility") || heading == "a11y" {
        Some(Section::Accessibility)
    } else {
        None
    }
}

#[derive(Default)]
struct BodyState {
    section: Option<Section>,
    section_level: usize,
    subheading: Option<String>,
    /// Set once a level-2+ heading has been seen
    past_intro: bool,
    heading: Option<String>,
    code: Option<(String, String)>,
    item_depth: usize,
    item: String,
    paragraph: Option<String>,
}

impl BodyState {
    fn push_text(&mut self, text: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.push_str(text);
        } else if let Some((_, code)) = self.code.as_mut() {
            code.push_str(text);
        } else if self.item_depth > 0 {
            self.item.push_str(text);
        } else if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.push_str(text);
        }
    }
}

fn parse_body(body: &str) -> ComponentDocs {
    let mut docs = ComponentDocs::default();
    let mut state = BodyState::default();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading { .. }) => state.heading = Some(String::new()),
            Event::End(TagEnd::Heading(level)) => {
                let text = state.heading.take().unwrap_or_default();
                let level = level as usize;
                if level >= 2 {
                    state.past_intro = true;
                }
                let nested = state.section.is_some_and(|s| s != Section::Other)
                    && level > state.section_level;
                if nested {
                    state.subheading = Some(text.trim().to_string());
                } else {
                    state.section = Some(classify(&text).unwrap_or(Section::Other));
                    state.section_level = level;
                    state.subheading = None;
                }
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
                    CodeBlockKind::Indented => None,
                }
                .unwrap_or_else(|| "tsx".to_string());
                state.code = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = state.code.take() {
                    if state.section == Some(Section::Examples) {
                        let title = state
                            .subheading
                            .clone()
                            .unwrap_or_else(|| format!("Example {}", docs.examples.len() + 1));
                        docs.examples.push(CodeExample {
                            title,
                            language,
                            code: code.trim_end().to_string(),
                        });
                    }
                }
            }
            Event::Start(Tag::Item) => {
                state.item_depth += 1;
                if state.item_depth == 1 {
                    state.item.clear();
                }
            }
            Event::End(TagEnd::Item) => {
                state.item_depth = state.item_depth.saturating_sub(1);
                if state.item_depth == 0 {
                    let text = collapse_whitespace(&state.item);
                    if !text.is_empty() {
                        match state.section {
                            Some(Section::BestPractices) => docs.best_practices.push(text),
                            Some(Section::Accessibility) => docs.accessibility.push(text),
                            _ => {}
                        }
                    }
                }
            }
            Event::Start(Tag::Paragraph)
                if !state.past_intro && state.item_depth == 0 && docs.description.is_none() =>
            {
                state.paragraph = Some(String::new());
            }
            Event::End(TagEnd::Paragraph) => {
                if let Some(paragraph) = state.paragraph.take() {
                    let text = collapse_whitespace(&paragraph);
                    // MDX import/export lines parse as paragraphs
                    if !text.is_empty() && !text.starts_with("import ") && !text.starts_with("export ")
                    {
                        docs.description = Some(text);
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => state.push_text(&text),
            Event::SoftBreak | Event::HardBreak => state.push_text(" "),
            _ => {}
        }
    }

    docs
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON_MDX: &str = r#"---
title: Components/Actions/Button
category: Actions
status: stable
---

import { Meta } from '@storybook/blocks';

# Button

Buttons trigger an action.

## Examples

### Primary

```tsx
<Button variant="primary">Save</Button>
```

```jsx title="ghost"
<Button variant="ghost">Cancel</Button>
```

## Best Practices

- Use one primary button per view
- Keep labels short,
  ideally one verb

## Accessibility

- Icon-only buttons need an `aria-label`

## Props

- This list is not collected
"#;

    #[test]
    fn test_parse_full_document() {
        let (name, docs) = parse_mdx("button", BUTTON_MDX).unwrap();

        assert_eq!(name, "Button");
        assert_eq!(docs.category.as_deref(), Some("Actions"));
        assert_eq!(docs.status.as_deref(), Some("stable"));
        assert_eq!(docs.description.as_deref(), Some("Buttons trigger an action."));

        assert_eq!(docs.examples.len(), 2);
        assert_eq!(docs.examples[0].title, "Primary");
        assert_eq!(docs.examples[0].language, "tsx");
        assert_eq!(docs.examples[0].code, r#"<Button variant="primary">Save</Button>"#);
        assert_eq!(docs.examples[1].title, "Primary");
        assert_eq!(docs.examples[1].language, "jsx");

        assert_eq!(
            docs.best_practices,
            vec![
                "Use one primary button per view".to_string(),
                "Keep labels short, ideally one verb".to_string(),
            ]
        );
        assert_eq!(
            docs.accessibility,
            vec!["Icon-only buttons need an aria-label".to_string()]
        );
    }

    #[test]
    fn test_name_falls_back_to_file_stem() {
        let (name, docs) = parse_mdx("Card", "## Examples\n\n```\n<Card />\n```\n").unwrap();
        assert_eq!(name, "Card");
        assert_eq!(docs.examples[0].title, "Example 1");
        assert_eq!(docs.examples[0].language, "tsx");
        assert!(docs.category.is_none());
    }

    #[test]
    fn test_component_key_wins_over_title() {
        let source = "---\ncomponent: DatePicker\ntitle: Forms/Date\n---\n";
        let (name, _) = parse_mdx("date", source).unwrap();
        assert_eq!(name, "DatePicker");
    }

    #[test]
    fn test_frontmatter_description_overrides_body() {
        let source = "---\ndescription: From frontmatter\n---\n\nFrom body.\n";
        let (_, docs) = parse_mdx("Badge", source).unwrap();
        assert_eq!(docs.description.as_deref(), Some("From frontmatter"));
    }

    #[test]
    fn test_code_outside_examples_ignored() {
        let source = "## Installation\n\n```bash\nnpm i pkg\n```\n";
        let (_, docs) = parse_mdx("Modal", source).unwrap();
        assert!(docs.examples.is_empty());
    }

    #[test]
    fn test_example_like_subheadings_stay_titles() {
        let source = "## Examples\n\n### Example with icon\n\n```tsx\n<A />\n```\n\n\
                      ### Disabled\n\n```tsx\n<B />\n```\n\n### Usage\n\n```tsx\n<C />\n```\n";
        let (_, docs) = parse_mdx("Button", source).unwrap();

        let titles: Vec<&str> = docs.examples.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Example with icon", "Disabled", "Usage"]);
        assert_eq!(docs.examples[1].code, "<B />");
    }

    #[test]
    fn test_section_heading_after_examples_closes_them() {
        let source = "## Examples\n\n```tsx\n<A />\n```\n\n## Installation\n\n```bash\nnpm i pkg\n```\n";
        let (_, docs) = parse_mdx("Button", source).unwrap();
        assert_eq!(docs.examples.len(), 1);
    }

    #[test]
    fn test_unterminated_frontmatter_is_body() {
        let (frontmatter, body) = split_frontmatter("---\ntitle: x\n");
        assert!(frontmatter.is_none());
        assert_eq!(body, "---\ntitle: x\n");
    }

    #[test]
    fn test_invalid_frontmatter_errors() {
        assert!(parse_mdx("Bad", "---\ntitle: [unclosed\n---\n").is_err());
    }

    #[test]
    fn test_loader_reads_sorted_and_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b-tabs.mdx"), "---\ncomponent: Tabs\n---\n").unwrap();
        std::fs::write(dir.path().join("a-alert.md"), "# Alert\n\nHeads up.\n").unwrap();
        std::fs::write(dir.path().join("c-broken.mdx"), "---\ntitle: [oops\n---\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let docs = MdxDocsLoader::new(dir.path()).load().unwrap();
        let names: Vec<&str> = docs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["a-alert", "Tabs"]);
        assert_eq!(docs[0].1.description.as_deref(), Some("Heads up."));
    }

    #[test]
    fn test_loader_duplicate_names_keep_first() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1.mdx"), "---\ncomponent: Tag\nstatus: beta\n---\n").unwrap();
        std::fs::write(dir.path().join("2.mdx"), "---\ncomponent: Tag\nstatus: stable\n---\n").unwrap();

        let docs = MdxDocsLoader::new(dir.path()).load().unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].1.status.as_deref(), Some("beta"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let docs = MdxDocsLoader::new("/no/such/docs/dir").load().unwrap();
        assert!(docs.is_empty());
    }
}

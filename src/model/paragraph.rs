//! Paragraph and run-level types.
//!
//! Runs keep the original XML bytes they were parsed from. A run that is
//! never mutated re-serializes from those bytes, so formatting the model
//! does not understand (fonts, colors, revision marks) survives untouched.
//! Mutation marks the run dirty and re-serialization rebuilds it from the
//! retained run properties plus the new text.

/// A run of text with consistent formatting.
#[derive(Debug, Clone)]
pub struct Run {
    /// Original `<w:r>` XML, empty for runs created in memory.
    raw: String,
    /// Original `<w:rPr>` properties XML, carried into rebuilds.
    props: Option<String>,
    /// Text content. Breaks read as `\n`, tabs as `\t`.
    text: String,
    dirty: bool,
}

impl Run {
    /// Create a new run holding plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            raw: String::new(),
            props: None,
            text: text.into(),
            dirty: true,
        }
    }

    pub(crate) fn from_parsed(raw: String, props: Option<String>, text: String) -> Self {
        Self {
            raw,
            props,
            text,
            dirty: false,
        }
    }

    /// The run's text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the run's text, preserving its formatting properties.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the run was mutated since parsing.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn raw_xml(&self) -> &str {
        &self.raw
    }

    pub(crate) fn props_xml(&self) -> Option<&str> {
        self.props.as_deref()
    }
}

/// An ordered child of a paragraph.
///
/// Anything that is not a plain run (hyperlinks, fields, drawings) is kept
/// as an opaque XML block and emitted verbatim on save.
#[derive(Debug, Clone)]
pub enum ParaChild {
    /// A text run.
    Run(Run),
    /// Uninterpreted XML, preserved byte-for-byte.
    Raw(String),
}

/// A paragraph: ordered runs plus preserved formatting properties.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Original `<w:p>` XML, empty for paragraphs created in memory.
    raw: String,
    /// Original `<w:pPr>` properties XML.
    props: Option<String>,
    children: Vec<ParaChild>,
    dirty: bool,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            raw: String::new(),
            props: None,
            children: Vec::new(),
            dirty: true,
        }
    }

    /// Create a paragraph holding plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.children.push(ParaChild::Run(Run::new(text)));
        p
    }

    pub(crate) fn from_parsed(
        raw: String,
        props: Option<String>,
        children: Vec<ParaChild>,
    ) -> Self {
        Self {
            raw,
            props,
            children,
            dirty: false,
        }
    }

    /// Plain text of the paragraph: the concatenation of its run texts.
    ///
    /// Opaque children contribute nothing, matching how the fill heuristics
    /// are meant to see heading and body paragraphs.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .map(|c| match c {
                ParaChild::Run(run) => run.text(),
                ParaChild::Raw(_) => "",
            })
            .collect()
    }

    /// Replace the whole paragraph content with a single run of text.
    ///
    /// Paragraph-level properties are kept; run-level formatting is not.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![ParaChild::Run(Run::new(text))];
        self.dirty = true;
    }

    /// Replace a literal substring inside every run that contains it.
    ///
    /// Formatting is preserved because only the matching runs are rewritten.
    /// Returns the number of runs changed. A needle spanning run boundaries
    /// is not found by this pass; see the paragraph-level substitution in
    /// the fill module.
    pub fn replace_in_runs(&mut self, needle: &str, replacement: &str) -> usize {
        let mut changed = 0;
        for child in &mut self.children {
            if let ParaChild::Run(run) = child {
                if run.text().contains(needle) {
                    let replaced = run.text().replace(needle, replacement);
                    run.set_text(replaced);
                    changed += 1;
                }
            }
        }
        if changed > 0 {
            self.dirty = true;
        }
        changed
    }

    /// Iterate the paragraph's runs.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.children.iter().filter_map(|c| match c {
            ParaChild::Run(run) => Some(run),
            ParaChild::Raw(_) => None,
        })
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Whether the paragraph or any of its runs was mutated since parsing.
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.runs().any(Run::is_dirty)
    }

    pub(crate) fn raw_xml(&self) -> &str {
        &self.raw
    }

    pub(crate) fn props_xml(&self) -> Option<&str> {
        self.props.as_deref()
    }

    pub(crate) fn children(&self) -> &[ParaChild] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let mut p = Paragraph::new();
        p.children.push(ParaChild::Run(Run::new("Hello ")));
        p.children.push(ParaChild::Raw("<w:proofErr/>".to_string()));
        p.children.push(ParaChild::Run(Run::new("world")));
        assert_eq!(p.text(), "Hello world");
    }

    #[test]
    fn test_set_text_collapses_runs() {
        let mut p = Paragraph::with_text("old");
        p.set_text("new content");
        assert_eq!(p.text(), "new content");
        assert_eq!(p.runs().count(), 1);
        assert!(p.is_dirty());
    }

    #[test]
    fn test_replace_in_runs_only_touches_matches() {
        let mut p = Paragraph::from_parsed(
            "<w:p/>".to_string(),
            None,
            vec![
                ParaChild::Run(Run::from_parsed(String::new(), None, "keep me".into())),
                ParaChild::Run(Run::from_parsed(String::new(), None, "change XXXX".into())),
            ],
        );
        assert!(!p.is_dirty());
        let changed = p.replace_in_runs("XXXX", "Title");
        assert_eq!(changed, 1);
        assert_eq!(p.text(), "keep mechange Title");
        assert!(!p.runs().next().unwrap().is_dirty());
        assert!(p.is_dirty());
    }

    #[test]
    fn test_replace_in_runs_no_match_stays_clean() {
        let mut p = Paragraph::from_parsed(
            "<w:p/>".to_string(),
            None,
            vec![ParaChild::Run(Run::from_parsed(
                String::new(),
                None,
                "nothing here".into(),
            ))],
        );
        assert_eq!(p.replace_in_runs("XXXX", "Title"), 0);
        assert!(!p.is_dirty());
    }

    #[test]
    fn test_is_empty_on_whitespace() {
        let p = Paragraph::with_text("   ");
        assert!(p.is_empty());
        assert!(Paragraph::new().is_empty());
    }
}

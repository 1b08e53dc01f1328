//! Markdown structure of a journal entry.
//!
//! The entry is parsed with `pulldown-cmark` and folded, in one pass over the
//! event stream, into a flat list of segments in reading order. The only
//! nesting kept is a heap stack of open containers. Adjacent text and line
//! breaks inside one container become a single text run with `\n`
//! separators, so multi-line paragraphs reach the annotation extractor
//! intact. Code blocks and raw HTML blocks are opaque: their content is kept
//! as the segment's literal and never scanned.

use pulldown_cmark::{Event, Parser, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Unrecognized { kind: String, literal: String },
}

impl Piece {
    fn as_segment(&self) -> Segment<'_> {
        match self {
            Piece::Text(run) => Segment::Text(run),
            Piece::Unrecognized { kind, literal } => Segment::Unrecognized { kind, literal },
        }
    }
}

/// A parsed journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pieces: Vec<Piece>,
}

/// One item of the flattened document, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of prose to hand to the annotation extractor.
    Text(&'a str),
    /// An element that is neither a known container nor text, labelled by
    /// its kind (`List`, `Item`, `Emphasis`, `Code`, `CodeBlock`, ...).
    Unrecognized { kind: &'a str, literal: &'a str },
}

impl Document {
    pub fn parse(markdown: &str) -> Self {
        let mut fold = Fold::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(tag) => fold.start(&tag),
                Event::End(_) => fold.end(),
                Event::Text(text) => fold.text(&text),
                Event::SoftBreak | Event::HardBreak => fold.text("\n"),
                Event::Code(code) => fold.leaf("Code", &code),
                Event::Html(html) | Event::InlineHtml(html) => fold.leaf("Html", &html),
                other => fold.leaf(&debug_label(&other), ""),
            }
        }

        Document {
            pieces: fold.pieces,
        }
    }

    /// Segments in reading order.
    ///
    /// Document, heading and paragraph containers are entered silently.
    /// Other elements appear as [`Segment::Unrecognized`] ahead of their
    /// content, which is still reported.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            pieces: self.pieces.iter(),
        }
    }
}

/// Iterator returned by [`Document::segments`].
pub struct Segments<'a> {
    pieces: std::slice::Iter<'a, Piece>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pieces.next().map(Piece::as_segment)
    }
}

/// An open container.
#[derive(Debug, Default, Clone, Copy)]
struct Frame {
    /// The text run that still accepts text in this container.
    open_text: Option<usize>,
    /// The opaque piece that swallows everything inside this container.
    opaque: Option<usize>,
}

/// State of one `Document::parse` call.
struct Fold {
    pieces: Vec<Piece>,
    /// Open containers, innermost last. The document frame is never popped.
    frames: Vec<Frame>,
}

impl Fold {
    fn new() -> Self {
        Fold {
            pieces: Vec::new(),
            frames: vec![Frame::default()],
        }
    }

    fn top(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn start(&mut self, tag: &Tag<'_>) {
        let opaque = self.top().opaque;
        if opaque.is_some() {
            self.frames.push(Frame {
                open_text: None,
                opaque,
            });
            return;
        }

        self.top().open_text = None;
        let frame = match tag {
            Tag::Paragraph | Tag::Heading { .. } => Frame::default(),
            other => {
                let index = self.pieces.len();
                self.pieces.push(Piece::Unrecognized {
                    kind: debug_label(other),
                    literal: String::new(),
                });
                Frame {
                    open_text: None,
                    opaque: matches!(tag, Tag::CodeBlock(_) | Tag::HtmlBlock).then_some(index),
                }
            }
        };
        self.frames.push(frame);
    }

    fn end(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(index) = self.top().opaque {
            self.append_literal(index, text);
            return;
        }
        match self.top().open_text {
            Some(index) => {
                if let Some(Piece::Text(run)) = self.pieces.get_mut(index) {
                    run.push_str(text);
                }
            }
            None => {
                let index = self.pieces.len();
                self.pieces.push(Piece::Text(text.to_string()));
                self.top().open_text = Some(index);
            }
        }
    }

    fn leaf(&mut self, label: &str, literal: &str) {
        if let Some(index) = self.top().opaque {
            self.append_literal(index, literal);
            return;
        }
        self.top().open_text = None;
        self.pieces.push(Piece::Unrecognized {
            kind: label.to_string(),
            literal: literal.to_string(),
        });
    }

    fn append_literal(&mut self, index: usize, text: &str) {
        if let Some(Piece::Unrecognized { literal, .. }) = self.pieces.get_mut(index) {
            literal.push_str(text);
        }
    }
}

/// `List(None)` -> `List`, `Link { .. }` -> `Link`.
fn debug_label<T: std::fmt::Debug>(value: &T) -> String {
    let debug = format!("{:?}", value);
    debug
        .split(|c: char| !c.is_ascii_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(doc: &Document) -> Vec<Segment<'_>> {
        doc.segments().collect()
    }

    #[test]
    fn test_paragraph_lines_merge_into_one_run() {
        assert_eq!(
            segments(&Document::parse("foo: bar\nbaz\n")),
            vec![Segment::Text("foo: bar\nbaz")]
        );
    }

    #[test]
    fn test_headings_and_paragraphs_are_silent_containers() {
        assert_eq!(
            segments(&Document::parse("# Monday\n\nin 5 days: buy milk\n\ntomorrow: call Bob\n")),
            vec![
                Segment::Text("Monday"),
                Segment::Text("in 5 days: buy milk"),
                Segment::Text("tomorrow: call Bob"),
            ]
        );
    }

    #[test]
    fn test_lists_are_reported_and_entered() {
        assert_eq!(
            segments(&Document::parse("- tomorrow: call Bob\n")),
            vec![
                Segment::Unrecognized {
                    kind: "List",
                    literal: ""
                },
                Segment::Unrecognized {
                    kind: "Item",
                    literal: ""
                },
                Segment::Text("tomorrow: call Bob"),
            ]
        );
    }

    #[test]
    fn test_inline_code_is_a_leaf() {
        assert_eq!(
            segments(&Document::parse("run `make`: now\n")),
            vec![
                Segment::Text("run "),
                Segment::Unrecognized {
                    kind: "Code",
                    literal: "make"
                },
                Segment::Text(": now"),
            ]
        );
    }

    #[test]
    fn test_code_blocks_are_opaque() {
        let doc = Document::parse("```\nin 5 days: never scanned\n```\n");
        assert_eq!(
            segments(&doc),
            vec![Segment::Unrecognized {
                kind: "CodeBlock",
                literal: "in 5 days: never scanned\n"
            }]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(segments(&Document::parse("")).is_empty());
    }

    #[test]
    fn test_text_after_nested_container_starts_new_run() {
        assert_eq!(
            segments(&Document::parse("a *b* c
")),
            vec![
                Segment::Text("a "),
                Segment::Unrecognized {
                    kind: "Emphasis",
                    literal: ""
                },
                Segment::Text("b"),
                Segment::Text(" c"),
            ]
        );
    }

    #[test]
    fn test_deeply_nested_quotes_parse_and_drop() {
        let depth = 20_000;
        let doc = Document::parse(&format!("{} tomorrow: x
", ">".repeat(depth)));

        let found = segments(&doc);
        assert_eq!(found.len(), depth + 1);
        assert_eq!(found.last(), Some(&Segment::Text("tomorrow: x")));

        let copy = doc.clone();
        assert_eq!(copy, doc);
        drop(copy);
        drop(doc);
    }

    #[test]
    fn test_debug_label() {
        assert_eq!(debug_label(&Some(3)), "Some");
        assert_eq!(debug_label(&"x"), "");
    }
}

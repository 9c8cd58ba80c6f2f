//! Tolerant fragment parser.
//!
//! Two passes: tokens are first assembled into a loose element tree
//! (closing whatever the markup forgot to close), then the tree is
//! coerced into the schema. Unknown elements are unwrapped, stray inline
//! content becomes a paragraph, and anything the schema cannot hold is
//! dropped.

use super::tokenizer::{decode_entities, tokenize, HtmlToken};
use crate::document::{Block, Document, ListItem, Mark, Marks, Paragraph, TextRun, MAX_LIST_DEPTH};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "template", "title"];

const TEXTBLOCK_ELEMENTS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "pre", "address"];

const LIST_ELEMENTS: &[&str] = &["ul", "ol"];

const CONTAINER_ELEMENTS: &[&str] = &[
    "article", "aside", "blockquote", "body", "dd", "details", "div", "dl", "dt", "fieldset",
    "figure", "footer", "form", "header", "html", "main", "nav", "section", "summary", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Open elements allowed below the fragment root. A list level takes two
/// (`ul` and `li`), so this also bounds list depth. Start tags past the
/// limit are ignored and their content lands in the deepest open element.
const MAX_OPEN_ELEMENTS: usize = 2 * MAX_LIST_DEPTH;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Element { name: String, children: Vec<Node> },
    Text(String),
}

impl Node {
    fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            Node::Text(_) => None,
        }
    }

    fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(text) if text.chars().all(is_collapsible_space))
    }
}

fn is_block_level(name: &str) -> bool {
    TEXTBLOCK_ELEMENTS.contains(&name)
        || LIST_ELEMENTS.contains(&name)
        || CONTAINER_ELEMENTS.contains(&name)
        || name == "li"
        || name == "hr"
}

fn is_collapsible_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{c}')
}

/// Parse an HTML fragment into a document. Never fails; an empty or
/// unusable fragment yields the empty document.
pub fn parse(html: &str) -> Document {
    let tree = build_tree(html);
    let mut blocks = Vec::new();
    convert_blocks(&tree, &mut blocks);
    Document::from_blocks(blocks)
}

struct OpenElement {
    name: String,
    children: Vec<Node>,
}

fn build_tree(html: &str) -> Vec<Node> {
    let mut stack = vec![OpenElement {
        name: String::new(),
        children: Vec::new(),
    }];

    for token in tokenize(html) {
        match &token {
            HtmlToken::Declaration(_) => {}
            HtmlToken::Text(text) => push_node(&mut stack, Node::Text(decode_entities(text).into_owned())),
            HtmlToken::Lt => push_node(&mut stack, Node::Text("<".to_string())),
            HtmlToken::StartTag(_) => {
                let Some(name) = token.tag_name() else { continue };

                if is_block_level(&name) && top_name(&stack) == Some("p") {
                    close_top(&mut stack);
                }
                if name == "li" && top_name(&stack) == Some("li") {
                    close_top(&mut stack);
                }

                if VOID_ELEMENTS.contains(&name.as_str()) || token.is_self_closing() {
                    push_node(
                        &mut stack,
                        Node::Element {
                            name,
                            children: Vec::new(),
                        },
                    );
                } else if stack.len() > MAX_OPEN_ELEMENTS {
                    continue;
                } else {
                    stack.push(OpenElement {
                        name,
                        children: Vec::new(),
                    });
                }
            }
            HtmlToken::EndTag(_) => {
                let Some(name) = token.tag_name() else { continue };
                // Index 0 is the fragment root and never matches a tag.
                if let Some(depth) = stack.iter().rposition(|open| open.name == name) {
                    if depth > 0 {
                        while stack.len() > depth {
                            close_top(&mut stack);
                        }
                    }
                }
            }
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().map(|root| root.children).unwrap_or_default()
}

fn top_name(stack: &[OpenElement]) -> Option<&str> {
    if stack.len() > 1 {
        stack.last().map(|open| open.name.as_str())
    } else {
        None
    }
}

fn push_node(stack: &mut [OpenElement], node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

fn close_top(stack: &mut Vec<OpenElement>) {
    if stack.len() <= 1 {
        return;
    }
    if let Some(open) = stack.pop() {
        push_node(
            stack,
            Node::Element {
                name: open.name,
                children: open.children,
            },
        );
    }
}

fn convert_blocks(nodes: &[Node], out: &mut Vec<Block>) {
    let mut inline = Vec::new();

    for node in nodes {
        let Some(name) = node.name().filter(|name| is_block_level(name)) else {
            collect_inline(std::slice::from_ref(node), Marks::default(), &mut inline);
            continue;
        };
        flush_inline(&mut inline, out);

        let Node::Element { children, .. } = node else { continue };
        if TEXTBLOCK_ELEMENTS.contains(&name) {
            let mut runs = Vec::new();
            collect_inline(children, Marks::default(), &mut runs);
            out.push(Block::Paragraph(finish_paragraph(runs)));
        } else if LIST_ELEMENTS.contains(&name) {
            let items = convert_list(children);
            if !items.is_empty() {
                out.push(Block::BulletList(items));
            }
        } else if name == "li" {
            out.push(Block::BulletList(vec![convert_item(children)]));
        } else if name != "hr" {
            convert_blocks(children, out);
        }
    }

    flush_inline(&mut inline, out);
}

/// Stray inline content between blocks becomes its own paragraph, unless
/// it is only whitespace.
fn flush_inline(inline: &mut Vec<TextRun>, out: &mut Vec<Block>) {
    let runs = std::mem::take(inline);
    let has_content = runs
        .iter()
        .any(|run| run.text.chars().any(|c| !is_collapsible_space(c)));
    if has_content {
        out.push(Block::Paragraph(finish_paragraph(runs)));
    }
}

fn convert_list(nodes: &[Node]) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = Vec::new();

    for node in nodes {
        if node.is_blank_text() {
            continue;
        }
        match node {
            Node::Element { name, children } if name == "li" => items.push(convert_item(children)),
            Node::Element { name, children } if LIST_ELEMENTS.contains(&name.as_str()) => {
                let nested = convert_list(children);
                match items.last_mut() {
                    Some(last) => last.children.extend(nested),
                    None => items.extend(nested),
                }
            }
            other => items.push(convert_item(std::slice::from_ref(other))),
        }
    }

    items
}

fn convert_item(nodes: &[Node]) -> ListItem {
    let mut paragraph: Option<Paragraph> = None;
    let mut children = Vec::new();
    let mut inline = Vec::new();

    for node in nodes {
        match node {
            Node::Element { name, children: nested } if LIST_ELEMENTS.contains(&name.as_str()) => {
                merge_paragraph(&mut inline, &mut paragraph);
                children.extend(convert_list(nested));
            }
            Node::Element { name, children: nested } if name == "li" => {
                merge_paragraph(&mut inline, &mut paragraph);
                children.push(convert_item(nested));
            }
            Node::Element { name, children: nested } if TEXTBLOCK_ELEMENTS.contains(&name.as_str()) => {
                merge_paragraph(&mut inline, &mut paragraph);
                collect_inline(nested, Marks::default(), &mut inline);
                merge_paragraph(&mut inline, &mut paragraph);
                paragraph.get_or_insert_with(Paragraph::default);
            }
            other => collect_inline(std::slice::from_ref(other), Marks::default(), &mut inline),
        }
    }
    merge_paragraph(&mut inline, &mut paragraph);

    ListItem {
        paragraph: paragraph.unwrap_or_default(),
        children,
    }
}

/// Fold pending inline runs into the item's paragraph. The schema allows
/// one paragraph per item, so later paragraphs are joined with a space.
fn merge_paragraph(inline: &mut Vec<TextRun>, paragraph: &mut Option<Paragraph>) {
    if inline.is_empty() {
        return;
    }
    let next = finish_paragraph(std::mem::take(inline));
    match paragraph {
        None => *paragraph = Some(next),
        Some(existing) if !next.is_empty() => {
            if !existing.is_empty() {
                existing.append(Paragraph::plain(" "));
            }
            existing.append(next);
        }
        Some(_) => {}
    }
}

fn collect_inline(nodes: &[Node], marks: Marks, out: &mut Vec<TextRun>) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push(TextRun::new(text.clone(), marks)),
            Node::Element { name, children } => {
                let marks = match name.as_str() {
                    "strong" | "b" => marks.with(Mark::Bold, true),
                    "em" | "i" => marks.with(Mark::Italic, true),
                    "s" | "strike" | "del" => marks.with(Mark::Strike, true),
                    "br" => {
                        out.push(TextRun::new(" ", marks));
                        continue;
                    }
                    skipped if SKIPPED_ELEMENTS.contains(&skipped) => continue,
                    _ => marks,
                };
                collect_inline(children, marks, out);
            }
        }
    }
}

/// Collapse whitespace runs to one space and trim both ends, the way a
/// browser renders non-preformatted text.
fn finish_paragraph(runs: Vec<TextRun>) -> Paragraph {
    let mut collapsed: Vec<TextRun> = Vec::with_capacity(runs.len());
    let mut last_was_space = true;

    for run in runs {
        let mut text = String::with_capacity(run.text.len());
        for c in run.text.chars() {
            if is_collapsible_space(c) {
                if !last_was_space {
                    text.push(' ');
                }
                last_was_space = true;
            } else {
                text.push(c);
                last_was_space = false;
            }
        }
        collapsed.push(TextRun::new(text, run.marks));
    }

    if let Some(last) = collapsed.iter_mut().rev().find(|run| !run.text.is_empty()) {
        if last.text.ends_with(' ') {
            last.text.pop();
        }
    }

    Paragraph::new(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextblockPath;
    use crate::html::serialize;

    fn bold() -> Marks {
        Marks::default().with(Mark::Bold, true)
    }

    #[test]
    fn test_empty_input_is_empty_document() {
        assert_eq!(parse(""), Document::empty());
        assert_eq!(parse("   \n "), Document::empty());
        assert_eq!(parse("<p></p>"), Document::empty());
    }

    #[test]
    fn test_bare_text_becomes_paragraph() {
        let doc = parse("just text");
        assert_eq!(doc.blocks, vec![Block::Paragraph(Paragraph::plain("just text"))]);
    }

    #[test]
    fn test_marks_from_aliases() {
        let doc = parse("<p><b>a</b><i>b</i><del>c</del></p>");
        let Block::Paragraph(paragraph) = &doc.blocks[0] else { panic!("expected paragraph") };
        assert_eq!(paragraph.runs[0], TextRun::new("a", bold()));
        assert!(paragraph.runs[1].marks.italic);
        assert!(paragraph.runs[2].marks.strike);
    }

    #[test]
    fn test_unclosed_tags_are_closed() {
        let doc = parse("<p>one<p>two <strong>bold");
        assert_eq!(doc.blocks.len(), 2);
        let Block::Paragraph(second) = &doc.blocks[1] else { panic!("expected paragraph") };
        assert_eq!(second.runs, vec![TextRun::plain("two "), TextRun::new("bold", bold())]);
    }

    #[test]
    fn test_stray_end_tags_are_ignored() {
        let doc = parse("</div><p>ok</p></span>");
        assert_eq!(doc.blocks, vec![Block::Paragraph(Paragraph::plain("ok"))]);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let doc = parse("<p>  a \n\t b  <em> c </em> </p>");
        assert_eq!(doc.textblock(0).unwrap().text(), "a b c");
    }

    #[test]
    fn test_nested_lists() {
        let doc = parse("<ul><li><p>a</p><ul><li>a.1</li></ul></li><li>b</li></ul>");
        let Block::BulletList(items) = &doc.blocks[0] else { panic!("expected list") };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].paragraph.text(), "a");
        assert_eq!(items[0].children[0].paragraph.text(), "a.1");
        assert_eq!(items[1].paragraph.text(), "b");
    }

    #[test]
    fn test_ordered_list_and_implicit_item_close() {
        let doc = parse("<ol><li>one<li>two</ol>");
        let Block::BulletList(items) = &doc.blocks[0] else { panic!("expected list") };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_containers_are_unwrapped() {
        let doc = parse("<div><h1>Title</h1><blockquote>quote</blockquote></div>");
        assert_eq!(doc.text(), "Title\nquote");
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_scripts_are_dropped() {
        let doc = parse("<p>a<script>alert(1)</script>b</p>");
        assert_eq!(doc.text(), "ab");
    }

    #[test]
    fn test_entities_are_decoded() {
        let doc = parse("<p>a &amp; b &lt;c&gt;</p>");
        assert_eq!(doc.text(), "a & b <c>");
    }

    fn list_depth(doc: &Document) -> usize {
        doc.textblocks()
            .iter()
            .map(|path| match path {
                TextblockPath::Item { items, .. } => items.len(),
                TextblockPath::Top(_) => 0,
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_deeply_nested_lists_are_flattened() {
        let source = "<ul><li>a".repeat(2_000);
        let doc = parse(&source);

        assert!(list_depth(&doc) <= MAX_LIST_DEPTH);
        assert_eq!(doc.text().chars().filter(|c| *c == 'a').count(), 2_000);
        assert!(serialize(&doc).starts_with("<ul><li><p>a</p><ul>"));
    }

    #[test]
    fn test_deeply_nested_marks_are_flattened() {
        let source = format!("<p>{}x</p>", "<b>".repeat(100_000));
        assert_eq!(serialize(&parse(&source)), "<p><strong>x</strong></p>");
    }
}

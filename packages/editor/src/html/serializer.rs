use crate::document::{Block, Document, ListItem, Mark, Paragraph, TextRun};

/// Canonical HTML for a document.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph(paragraph) => write_paragraph(paragraph, &mut out),
            Block::BulletList(items) => write_list(items, &mut out),
        }
    }
    out
}

fn write_list(items: &[ListItem], out: &mut String) {
    out.push_str("<ul>");
    for item in items {
        out.push_str("<li>");
        write_paragraph(&item.paragraph, out);
        if !item.children.is_empty() {
            write_list(&item.children, out);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn write_paragraph(paragraph: &Paragraph, out: &mut String) {
    out.push_str("<p>");
    write_runs(&paragraph.runs, out);
    out.push_str("</p>");
}

/// Marks stay open across runs while they form a common prefix of the
/// next run's marks, so `<strong>a<em>b</em></strong>` is emitted rather
/// than two separate `<strong>` elements.
fn write_runs(runs: &[TextRun], out: &mut String) {
    let mut open: Vec<Mark> = Vec::new();

    for run in runs {
        let wanted: Vec<Mark> = run.marks.iter().collect();
        let keep = open
            .iter()
            .zip(&wanted)
            .take_while(|(open, wanted)| open == wanted)
            .count();

        for mark in open.drain(keep..).rev() {
            close_tag(mark, out);
        }
        for mark in &wanted[keep..] {
            open_tag(*mark, out);
            open.push(*mark);
        }
        escape_text(&run.text, out);
    }

    for mark in open.drain(..).rev() {
        close_tag(mark, out);
    }
}

fn open_tag(mark: Mark, out: &mut String) {
    out.push('<');
    out.push_str(mark.tag());
    out.push('>');
}

fn close_tag(mark: Mark, out: &mut String) {
    out.push_str("</");
    out.push_str(mark.tag());
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

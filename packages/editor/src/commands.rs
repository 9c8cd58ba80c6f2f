//! # Editing Commands
//!
//! Structural and inline operations on a [`Document`].
//!
//! ## Semantics
//!
//! ### Marks
//! - A range gets the mark removed if every selected char already has
//!   it, otherwise added everywhere in the range
//! - Empty ranges are handled by the engine through stored marks
//!
//! ### Sink
//! - Moves a list item to the end of its previous sibling's nested list
//! - Fails on the first item of a list, and at `MAX_LIST_DEPTH`
//!
//! ### Lift
//! - A nested item moves after its parent item; the siblings that
//!   followed it become its children
//! - A top-level item turns into a paragraph and splits its list
//!
//! ### Wrap
//! - Top-level blocks touched by the range become one bullet list,
//!   merged with bullet lists directly before and after
//!
//! None of these reorder textblocks, so positions stay valid across them.

use crate::document::{Block, Document, ListItem, Mark, TextblockPath, MAX_LIST_DEPTH};
use crate::errors::{CommandError, CommandResult};
use crate::selection::Position;

fn path_at(doc: &Document, textblock: usize) -> CommandResult<TextblockPath> {
    doc.textblocks()
        .into_iter()
        .nth(textblock)
        .ok_or(CommandError::NoSuchTextblock(textblock))
}

/// Char range of textblock `index` that falls inside `from..to`.
fn span_in(doc: &Document, index: usize, from: Position, to: Position) -> (usize, usize) {
    let len = doc.textblock(index).map(|p| p.len()).unwrap_or(0);
    let start = if index == from.block { from.offset } else { 0 };
    let end = if index == to.block { to.offset } else { len };
    (start.min(len), end.min(len))
}

/// Whether every char in `from..to` has `mark`. `None` if the range
/// holds no chars.
pub fn range_has_mark(doc: &Document, from: Position, to: Position, mark: Mark) -> Option<bool> {
    let mut seen = false;
    for index in from.block..=to.block {
        let (start, end) = span_in(doc, index, from, to);
        match doc.textblock(index).and_then(|p| p.range_has_mark(start, end, mark)) {
            Some(false) => return Some(false),
            Some(true) => seen = true,
            None => {}
        }
    }
    seen.then_some(true)
}

/// Add or remove `mark` across `from..to`. Returns whether the document changed.
pub fn set_mark(doc: &mut Document, from: Position, to: Position, mark: Mark, on: bool) -> bool {
    let paths = doc.textblocks();
    let mut changed = false;
    for index in from.block..=to.block {
        let (start, end) = span_in(doc, index, from, to);
        let Some(paragraph) = paths.get(index).and_then(|path| doc.paragraph_mut(path)) else {
            continue;
        };
        changed |= paragraph.set_mark(start, end, mark, on);
    }
    changed
}

/// Flip `mark` over a non-empty range.
pub fn toggle_mark(doc: &mut Document, from: Position, to: Position, mark: Mark) -> bool {
    let active = range_has_mark(doc, from, to, mark).unwrap_or(false);
    set_mark(doc, from, to, mark, !active)
}

pub fn is_in_list(doc: &Document, textblock: usize) -> bool {
    path_at(doc, textblock).map(|path| path.is_in_list()).unwrap_or(false)
}

pub fn can_sink_list_item(doc: &Document, textblock: usize) -> bool {
    check_sink(doc, textblock).is_ok()
}

pub fn can_lift_list_item(doc: &Document, textblock: usize) -> bool {
    is_in_list(doc, textblock)
}

fn check_sink(doc: &Document, textblock: usize) -> CommandResult<(usize, Vec<usize>)> {
    match path_at(doc, textblock)? {
        TextblockPath::Top(_) => Err(CommandError::NotInList),
        TextblockPath::Item { items, .. } if items.last() == Some(&0) => Err(CommandError::NoPreviousItem),
        TextblockPath::Item { items, .. } if items.len() >= MAX_LIST_DEPTH => Err(CommandError::TooDeep(items.len())),
        TextblockPath::Item { block, items } => Ok((block, items)),
    }
}

pub fn sink_list_item(doc: &mut Document, textblock: usize) -> CommandResult<()> {
    let (block, items) = check_sink(doc, textblock)?;
    let (index, parents) = items.split_last().ok_or(CommandError::BrokenPath)?;

    let list = doc.list_mut(block, parents).ok_or(CommandError::BrokenPath)?;
    if *index >= list.len() {
        return Err(CommandError::BrokenPath);
    }
    let item = list.remove(*index);
    list[*index - 1].children.push(item);
    Ok(())
}

pub fn lift_list_item(doc: &mut Document, textblock: usize) -> CommandResult<()> {
    let TextblockPath::Item { block, items } = path_at(doc, textblock)? else {
        return Err(CommandError::NotInList);
    };

    match items.as_slice() {
        [index] => lift_out_of_list(doc, block, *index),
        [outer @ .., parent, index] => {
            let mut chain = outer.to_vec();
            chain.push(*parent);

            let siblings = doc.list_mut(block, &chain).ok_or(CommandError::BrokenPath)?;
            if *index >= siblings.len() {
                return Err(CommandError::BrokenPath);
            }
            let mut item = siblings.remove(*index);
            item.children.extend(siblings.drain(*index..));

            let outer_list = doc.list_mut(block, outer).ok_or(CommandError::BrokenPath)?;
            outer_list.insert(parent + 1, item);
            Ok(())
        }
        [] => Err(CommandError::BrokenPath),
    }
}

/// Turn a top-level item into a paragraph, splitting its list around it.
fn lift_out_of_list(doc: &mut Document, block: usize, index: usize) -> CommandResult<()> {
    let Some(Block::BulletList(list)) = doc.blocks.get(block) else {
        return Err(CommandError::BrokenPath);
    };
    if index >= list.len() {
        return Err(CommandError::BrokenPath);
    }

    let Block::BulletList(mut list) = doc.blocks.remove(block) else {
        return Err(CommandError::BrokenPath);
    };
    let after: Vec<ListItem> = list.split_off(index + 1);
    let Some(item) = list.pop() else {
        return Err(CommandError::BrokenPath);
    };
    let before = list;

    let mut rest = item.children;
    rest.extend(after);

    let mut replacement = Vec::with_capacity(3);
    if !before.is_empty() {
        replacement.push(Block::BulletList(before));
    }
    replacement.push(Block::Paragraph(item.paragraph));
    if !rest.is_empty() {
        replacement.push(Block::BulletList(rest));
    }

    doc.blocks.splice(block..block, replacement);
    Ok(())
}

/// Wrap the top-level blocks holding textblocks `from..=to` in one list.
pub fn wrap_in_list(doc: &mut Document, from: usize, to: usize) -> CommandResult<()> {
    let first = path_at(doc, from)?.block();
    let last = path_at(doc, to)?.block().max(first);

    let mut items = Vec::new();
    for block in doc.blocks.drain(first..=last) {
        match block {
            Block::Paragraph(paragraph) => items.push(ListItem::new(paragraph)),
            Block::BulletList(list) => items.extend(list),
        }
    }
    doc.blocks.insert(first, Block::BulletList(items));

    let mut at = first;
    if at > 0 && join_lists(doc, at - 1) {
        at -= 1;
    }
    join_lists(doc, at);
    Ok(())
}

/// Merge the list at `index + 1` into the list at `index` when both are lists.
fn join_lists(doc: &mut Document, index: usize) -> bool {
    let both_lists = matches!(
        (doc.blocks.get(index), doc.blocks.get(index + 1)),
        (Some(Block::BulletList(_)), Some(Block::BulletList(_)))
    );
    if !both_lists {
        return false;
    }
    if let Block::BulletList(next) = doc.blocks.remove(index + 1) {
        if let Some(Block::BulletList(list)) = doc.blocks.get_mut(index) {
            list.extend(next);
        }
    }
    true
}

/// Lift the item at `from` all the way out of its list, or wrap the
/// range in a list when `from` is not in one.
pub fn toggle_bullet_list(doc: &mut Document, from: usize, to: usize) -> CommandResult<()> {
    if !is_in_list(doc, from) {
        return wrap_in_list(doc, from, to);
    }
    while is_in_list(doc, from) {
        lift_list_item(doc, from)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Paragraph;
    use crate::html::{parse, serialize};

    fn html(doc: &Document) -> String {
        serialize(doc)
    }

    /// A chain of single items `depth` levels deep ending in items `a`, `b`.
    fn nested(depth: usize) -> Vec<ListItem> {
        if depth == 1 {
            return vec![
                ListItem::new(Paragraph::plain("a")),
                ListItem::new(Paragraph::plain("b")),
            ];
        }
        vec![ListItem {
            paragraph: Paragraph::plain("x"),
            children: nested(depth - 1),
        }]
    }

    #[test]
    fn test_sink_stops_at_max_depth() {
        let mut doc = Document::from_blocks(vec![Block::BulletList(nested(MAX_LIST_DEPTH))]);
        let last = doc.textblock_count() - 1;

        assert!(!can_sink_list_item(&doc, last));
        assert_eq!(sink_list_item(&mut doc, last), Err(CommandError::TooDeep(MAX_LIST_DEPTH)));

        let mut shallower = Document::from_blocks(vec![Block::BulletList(nested(MAX_LIST_DEPTH - 1))]);
        let last = shallower.textblock_count() - 1;
        assert_eq!(sink_list_item(&mut shallower, last), Ok(()));
    }

    #[test]
    fn test_toggle_mark_across_blocks() {
        let mut doc = parse("<p>abc</p><p>def</p>");
        let from = Position::new(0, 1);
        let to = Position::new(1, 2);

        assert!(toggle_mark(&mut doc, from, to, Mark::Bold));
        assert_eq!(html(&doc), "<p>a<strong>bc</strong></p><p><strong>de</strong>f</p>");
        assert_eq!(range_has_mark(&doc, from, to, Mark::Bold), Some(true));

        assert!(toggle_mark(&mut doc, from, to, Mark::Bold));
        assert_eq!(html(&doc), "<p>abc</p><p>def</p>");
    }

    #[test]
    fn test_partially_marked_range_gets_mark_everywhere() {
        let mut doc = parse("<p><em>ab</em>cd</p>");
        assert!(toggle_mark(&mut doc, Position::new(0, 0), Position::new(0, 4), Mark::Italic));
        assert_eq!(html(&doc), "<p><em>abcd</em></p>");
    }

    #[test]
    fn test_sink_requires_previous_item() {
        let mut doc = parse("<ul><li>a</li><li>b</li></ul>");
        assert!(!can_sink_list_item(&doc, 0));
        assert_eq!(sink_list_item(&mut doc, 0), Err(CommandError::NoPreviousItem));

        assert!(can_sink_list_item(&doc, 1));
        sink_list_item(&mut doc, 1).unwrap();
        assert_eq!(html(&doc), "<ul><li><p>a</p><ul><li><p>b</p></li></ul></li></ul>");
    }

    #[test]
    fn test_sink_outside_list() {
        let mut doc = parse("<p>a</p>");
        assert_eq!(sink_list_item(&mut doc, 0), Err(CommandError::NotInList));
        assert_eq!(sink_list_item(&mut doc, 5), Err(CommandError::NoSuchTextblock(5)));
    }

    #[test]
    fn test_lift_nested_item_adopts_following_siblings() {
        let mut doc = parse("<ul><li>a<ul><li>b</li><li>c</li></ul></li></ul>");
        lift_list_item(&mut doc, 1).unwrap();
        assert_eq!(
            html(&doc),
            "<ul><li><p>a</p></li><li><p>b</p><ul><li><p>c</p></li></ul></li></ul>"
        );
    }

    #[test]
    fn test_lift_top_level_item_splits_list() {
        let mut doc = parse("<ul><li>a</li><li>b</li><li>c</li></ul>");
        lift_list_item(&mut doc, 1).unwrap();
        assert_eq!(
            html(&doc),
            "<ul><li><p>a</p></li></ul><p>b</p><ul><li><p>c</p></li></ul>"
        );
    }

    #[test]
    fn test_lift_outside_list_fails() {
        let mut doc = parse("<p>a</p>");
        assert!(!can_lift_list_item(&doc, 0));
        assert_eq!(lift_list_item(&mut doc, 0), Err(CommandError::NotInList));
    }

    #[test]
    fn test_wrap_joins_neighbouring_lists() {
        let mut doc = parse("<ul><li>a</li></ul><p>b</p><ul><li>c</li></ul>");
        wrap_in_list(&mut doc, 1, 1).unwrap();
        assert_eq!(
            html(&doc),
            "<ul><li><p>a</p></li><li><p>b</p></li><li><p>c</p></li></ul>"
        );
    }

    #[test]
    fn test_toggle_bullet_list_round_trip() {
        let original = parse("<p>one</p><p>two</p>");
        let mut doc = original.clone();

        toggle_bullet_list(&mut doc, 0, 1).unwrap();
        assert_eq!(html(&doc), "<ul><li><p>one</p></li><li><p>two</p></li></ul>");
        assert!(is_in_list(&doc, 0));

        toggle_bullet_list(&mut doc, 0, 0).unwrap();
        assert_eq!(html(&doc), "<p>one</p><ul><li><p>two</p></li></ul>");
        assert!(!is_in_list(&doc, 0));
        assert!(is_in_list(&doc, 1));
    }

    #[test]
    fn test_toggle_bullet_list_lifts_deeply_nested_item() {
        let mut doc = parse("<ul><li>a<ul><li>b</li></ul></li></ul>");
        toggle_bullet_list(&mut doc, 1, 1).unwrap();
        assert_eq!(html(&doc), "<ul><li><p>a</p></li></ul><p>b</p>");
    }

    #[test]
    fn test_commands_keep_textblock_order() {
        let mut doc = parse("<ul><li>a<ul><li>b</li><li>c</li></ul></li><li>d</li></ul><p>e</p>");
        let text = doc.text();

        sink_list_item(&mut doc, 4).unwrap_err();
        sink_list_item(&mut doc, 3).unwrap();
        assert_eq!(doc.text(), text);
        lift_list_item(&mut doc, 1).unwrap();
        assert_eq!(doc.text(), text);
        toggle_bullet_list(&mut doc, 4, 4).unwrap();
        assert_eq!(doc.text(), text);
    }
}

//! # Document Model
//!
//! Starter-kit subset of a rich-text schema:
//!
//! ```text
//! doc        := block+
//! block      := paragraph | bulletList
//! bulletList := listItem+
//! listItem   := paragraph bulletList?
//! paragraph  := text*            (marks: bold, italic, strike)
//! ```
//!
//! Paragraphs are the only textblocks. They are addressed by their index
//! in document order, which every list command preserves: wrapping,
//! sinking and lifting move textblocks between containers without
//! reordering them.

use std::fmt;

/// Deepest bullet-list nesting a document may hold. Parsing flattens
/// anything deeper and sinking refuses to go past it.
pub const MAX_LIST_DEPTH: usize = 128;

/// Inline formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Strike,
}

impl Mark {
    /// Serialization order, outermost first.
    pub const ALL: [Mark; 3] = [Mark::Bold, Mark::Italic, Mark::Strike];

    pub fn tag(&self) -> &'static str {
        match self {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Strike => "s",
        }
    }
}

/// Set of marks carried by a text run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
}

impl Marks {
    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Strike => self.strike,
        }
    }

    pub fn with(mut self, mark: Mark, on: bool) -> Self {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Strike => self.strike = on,
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(|mark| self.has(*mark))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub marks: Marks,
}

impl TextRun {
    pub fn new(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Marks::default())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// The only textblock in the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>) -> Self {
        let mut paragraph = Self { runs };
        paragraph.normalize();
        paragraph
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![TextRun::plain(text)])
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.runs.iter().map(TextRun::char_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Drop empty runs and merge neighbours with identical marks.
    pub fn normalize(&mut self) {
        let mut merged: Vec<TextRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.marks == run.marks => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }

    /// Marks a caret at `offset` would pick up: those of the char before
    /// it, or of the first char when at the start.
    pub fn marks_at(&self, offset: usize) -> Marks {
        let index = if offset == 0 { 0 } else { offset - 1 };
        self.marks_of_char(index).unwrap_or_default()
    }

    fn marks_of_char(&self, index: usize) -> Option<Marks> {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.char_len();
            if index < end {
                return Some(run.marks);
            }
            start = end;
        }
        None
    }

    /// Whether every char in `start..end` carries `mark`. `None` when the
    /// range holds no chars.
    pub fn range_has_mark(&self, start: usize, end: usize, mark: Mark) -> Option<bool> {
        let mut seen = false;
        let mut pos = 0;
        for run in &self.runs {
            let run_end = pos + run.char_len();
            if run_end > start && pos < end {
                seen = true;
                if !run.marks.has(mark) {
                    return Some(false);
                }
            }
            pos = run_end;
        }
        seen.then_some(true)
    }

    /// Add or remove `mark` on `start..end`. Returns whether anything changed.
    pub fn set_mark(&mut self, start: usize, end: usize, mark: Mark, on: bool) -> bool {
        if start >= end {
            return false;
        }
        let before = self.runs.clone();
        let mut runs = Vec::with_capacity(self.runs.len() + 2);
        let mut pos = 0;
        for run in self.runs.drain(..) {
            let len = run.char_len();
            let run_start = pos;
            let run_end = pos + len;
            pos = run_end;

            if run_end <= start || run_start >= end {
                runs.push(run);
                continue;
            }

            let cut_a = start.saturating_sub(run_start).min(len);
            let cut_b = end.saturating_sub(run_start).min(len);
            let (head, rest) = split_chars(&run.text, cut_a);
            let (middle, tail) = split_chars(rest, cut_b - cut_a);

            runs.push(TextRun::new(head, run.marks));
            runs.push(TextRun::new(middle, run.marks.with(mark, on)));
            runs.push(TextRun::new(tail, run.marks));
        }
        self.runs = runs;
        self.normalize();
        self.runs != before
    }

    /// Insert `text` at char `offset` carrying `marks`.
    pub fn insert(&mut self, offset: usize, text: &str, marks: Marks) {
        let (mut left, right) = self.split_off(offset);
        left.runs.push(TextRun::new(text, marks));
        left.runs.extend(right.runs);
        left.normalize();
        *self = left;
    }

    /// Remove chars in `start..end`.
    pub fn delete(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let (mut left, rest) = self.split_off(start);
        let (_, right) = rest.split_off(end - start);
        left.runs.extend(right.runs);
        left.normalize();
        *self = left;
    }

    /// Split into the chars before and from `offset`.
    pub fn split_off(&self, offset: usize) -> (Paragraph, Paragraph) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut pos = 0;
        for run in &self.runs {
            let len = run.char_len();
            if pos + len <= offset {
                left.push(run.clone());
            } else if pos >= offset {
                right.push(run.clone());
            } else {
                let (a, b) = split_chars(&run.text, offset - pos);
                left.push(TextRun::new(a, run.marks));
                right.push(TextRun::new(b, run.marks));
            }
            pos += len;
        }
        (Paragraph::new(left), Paragraph::new(right))
    }

    /// Append another paragraph's runs, e.g. when a list item had more
    /// than one paragraph in the source HTML.
    pub fn append(&mut self, other: Paragraph) {
        self.runs.extend(other.runs);
        self.normalize();
    }
}

fn split_chars(text: &str, at: usize) -> (&str, &str) {
    match text.char_indices().nth(at) {
        Some((byte, _)) => text.split_at(byte),
        None => (text, ""),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub paragraph: Paragraph,
    /// Nested bullet list; empty when the item has none.
    pub children: Vec<ListItem>,
}

impl ListItem {
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraph,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    BulletList(Vec<ListItem>),
}

/// Location of a textblock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextblockPath {
    /// Top-level paragraph at this block index.
    Top(usize),
    /// Paragraph of a list item. `items` walks from the top-level list at
    /// `block` through nested lists; its length is the nesting depth.
    Item { block: usize, items: Vec<usize> },
}

impl TextblockPath {
    pub fn block(&self) -> usize {
        match self {
            TextblockPath::Top(block) => *block,
            TextblockPath::Item { block, .. } => *block,
        }
    }

    pub fn is_in_list(&self) -> bool {
        matches!(self, TextblockPath::Item { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// A document always holds at least one block.
    pub fn empty() -> Self {
        Self {
            blocks: vec![Block::Paragraph(Paragraph::default())],
        }
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut doc = Self { blocks };
        doc.normalize();
        doc
    }

    /// Enforce the schema: no empty lists, at least one block.
    pub fn normalize(&mut self) {
        self.blocks
            .retain(|block| !matches!(block, Block::BulletList(items) if items.is_empty()));
        if self.blocks.is_empty() {
            self.blocks.push(Block::Paragraph(Paragraph::default()));
        }
    }

    /// Every textblock in document order.
    pub fn textblocks(&self) -> Vec<TextblockPath> {
        let mut paths = Vec::new();
        for (index, block) in self.blocks.iter().enumerate() {
            match block {
                Block::Paragraph(_) => paths.push(TextblockPath::Top(index)),
                Block::BulletList(items) => collect_item_paths(index, items, &mut Vec::new(), &mut paths),
            }
        }
        paths
    }

    pub fn textblock_count(&self) -> usize {
        self.textblocks().len()
    }

    pub fn paragraph(&self, path: &TextblockPath) -> Option<&Paragraph> {
        match path {
            TextblockPath::Top(block) => match self.blocks.get(*block)? {
                Block::Paragraph(paragraph) => Some(paragraph),
                Block::BulletList(_) => None,
            },
            TextblockPath::Item { .. } => self.item(path).map(|item| &item.paragraph),
        }
    }

    pub fn paragraph_mut(&mut self, path: &TextblockPath) -> Option<&mut Paragraph> {
        match path {
            TextblockPath::Top(block) => match self.blocks.get_mut(*block)? {
                Block::Paragraph(paragraph) => Some(paragraph),
                Block::BulletList(_) => None,
            },
            TextblockPath::Item { .. } => self.item_mut(path).map(|item| &mut item.paragraph),
        }
    }

    /// Paragraph at textblock index `index`.
    pub fn textblock(&self, index: usize) -> Option<&Paragraph> {
        let path = self.textblocks().into_iter().nth(index)?;
        self.paragraph(&path)
    }

    pub fn item(&self, path: &TextblockPath) -> Option<&ListItem> {
        let TextblockPath::Item { block, items } = path else {
            return None;
        };
        let Block::BulletList(list) = self.blocks.get(*block)? else {
            return None;
        };
        let (first, rest) = items.split_first()?;
        let mut item = list.get(*first)?;
        for index in rest {
            item = item.children.get(*index)?;
        }
        Some(item)
    }

    pub fn item_mut(&mut self, path: &TextblockPath) -> Option<&mut ListItem> {
        let TextblockPath::Item { block, items } = path else {
            return None;
        };
        let (first, rest) = items.split_first()?;
        let list = self.list_mut(*block, &[])?;
        let mut item = list.get_mut(*first)?;
        for index in rest {
            item = item.children.get_mut(*index)?;
        }
        Some(item)
    }

    /// The list holding items under `parents`: the top-level list at
    /// `block` when `parents` is empty, else the children of that item.
    pub fn list_mut(&mut self, block: usize, parents: &[usize]) -> Option<&mut Vec<ListItem>> {
        let Block::BulletList(list) = self.blocks.get_mut(block)? else {
            return None;
        };
        let mut list = list;
        for index in parents {
            list = &mut list.get_mut(*index)?.children;
        }
        Some(list)
    }

    /// Plain text, one line per textblock.
    pub fn text(&self) -> String {
        self.textblocks()
            .iter()
            .filter_map(|path| self.paragraph(path))
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn collect_item_paths(
    block: usize,
    items: &[ListItem],
    prefix: &mut Vec<usize>,
    out: &mut Vec<TextblockPath>,
) {
    for (index, item) in items.iter().enumerate() {
        prefix.push(index);
        out.push(TextblockPath::Item {
            block,
            items: prefix.clone(),
        });
        collect_item_paths(block, &item.children, prefix, out);
        prefix.pop();
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::html::serialize(self))
    }
}

//! Caret and range selections over textblocks.

use crate::document::Document;

/// A caret position: textblock index in document order, then char offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub block: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }

    /// Nearest valid position in `doc`.
    pub fn clamp(self, doc: &Document) -> Self {
        let count = doc.textblock_count();
        let block = self.block.min(count.saturating_sub(1));
        let len = doc.textblock(block).map(|p| p.len()).unwrap_or(0);
        Self {
            block,
            offset: self.offset.min(len),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn cursor(at: Position) -> Self {
        Self { anchor: at, head: at }
    }

    pub fn range(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Start of the selection in document order.
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// End of the selection in document order.
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn clamp(self, doc: &Document) -> Self {
        Self {
            anchor: self.anchor.clamp(doc),
            head: self.head.clamp(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse;

    #[test]
    fn test_from_and_to_order_backwards_selections() {
        let selection = Selection::range(Position::new(2, 1), Position::new(0, 4));
        assert_eq!(selection.from(), Position::new(0, 4));
        assert_eq!(selection.to(), Position::new(2, 1));
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_clamp_to_document() {
        let doc = parse("<p>abc</p><p>de</p>");
        assert_eq!(Position::new(9, 9).clamp(&doc), Position::new(1, 2));
        assert_eq!(Position::new(0, 7).clamp(&doc), Position::new(0, 3));
        assert_eq!(Position::new(3, 3).clamp(&Document::empty()), Position::new(0, 0));
    }
}

//! Section cursor
//!
//! Tracks which section content lines are currently added to. It only moves on control lines:
//!
//! ```text
//!   InHeader --Start--> Open(i) --End--> Closed(i) --Start--> Open(i + 1) ...
//! ```
//!
//! Closing a section does not advance the cursor. Until the next Start line the cursor stays
//! on the closed section, so stray content in between is attributed to it and rejected.

/// Position of the analyzer relative to the sections built so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Before the first Start line; only meta tags are accepted
    #[default]
    InHeader,
    /// Inside the section at this index, whose End line has not been seen yet
    Open(usize),
    /// After the End line of the section at this index
    Closed(usize),
}

impl Cursor {
    /// Index of the section the cursor points at. The header is always index 0.
    pub fn index(&self) -> usize {
        match self {
            Cursor::InHeader => 0,
            Cursor::Open(index) | Cursor::Closed(index) => *index,
        }
    }

    /// Whether a new section may start here. The header has no End line and never blocks.
    pub fn accepts_start(&self) -> bool {
        !matches!(self, Cursor::Open(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Cursor::Closed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(Cursor::InHeader.index(), 0);
        assert_eq!(Cursor::Open(3).index(), 3);
        assert_eq!(Cursor::Closed(2).index(), 2);
    }

    #[test]
    fn test_only_open_sections_block_a_start() {
        assert!(Cursor::InHeader.accepts_start());
        assert!(Cursor::Closed(1).accepts_start());
        assert!(!Cursor::Open(1).accepts_start());
    }

    #[test]
    fn test_header_is_never_closed() {
        assert!(!Cursor::default().is_closed());
        assert!(Cursor::Closed(4).is_closed());
    }
}

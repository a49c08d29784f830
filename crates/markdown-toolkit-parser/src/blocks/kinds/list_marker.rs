use crate::{blocks::types::ListStyle, source::indentation};

/// The marker kind of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `-`, `*` or `+`.
    Bullet(u8),
    /// `1.` or `1)`.
    Ordered { start: u64, delimiter: u8 },
}

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: MarkerKind,
    /// Bytes taken by the marker itself.
    pub len: usize,
    /// Columns of spacing between the marker and the item content.
    pub spacing: usize,
    /// The marker is the whole line.
    pub is_empty: bool,
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMITERS: [u8; 2] = [b'.', b')'];
    pub const MAX_DIGITS: usize = 9;
    /// More spacing than this after a marker means the item starts with
    /// indented code, and only one column counts as spacing.
    pub const MAX_SPACING: usize = 4;

    /// Parses a marker at the start of `rest` (indentation already removed).
    pub fn parse(rest: &str, tab_width: usize) -> Option<ListMarker> {
        let b = rest.as_bytes();
        let (kind, len) = match *b.first()? {
            c if Self::BULLETS.contains(&c) => (MarkerKind::Bullet(c), 1),
            c if c.is_ascii_digit() => {
                let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
                if digits > Self::MAX_DIGITS {
                    return None;
                }
                let delimiter = *b.get(digits)?;
                if !Self::ORDERED_DELIMITERS.contains(&delimiter) {
                    return None;
                }
                let start = rest[..digits].parse().ok()?;
                (MarkerKind::Ordered { start, delimiter }, digits + 1)
            }
            _ => return None,
        };

        let after = &rest[len..];
        if after.trim().is_empty() {
            return Some(ListMarker {
                kind,
                len,
                spacing: 1,
                is_empty: true,
            });
        }
        if !after.starts_with([' ', '\t']) {
            return None;
        }
        let (cols, _) = indentation(after, tab_width);
        Some(ListMarker {
            kind,
            len,
            spacing: if cols > Self::MAX_SPACING { 1 } else { cols },
            is_empty: false,
        })
    }

    pub fn style(&self) -> ListStyle {
        match self.kind {
            MarkerKind::Bullet(_) => ListStyle::Bulleted,
            MarkerKind::Ordered { start, .. } => ListStyle::Numbered { start },
        }
    }

    /// Whether another item with this marker belongs to the same list.
    pub fn continues(&self, other: &ListMarker) -> bool {
        matches!(
            (self.kind, other.kind),
            (MarkerKind::Bullet(_), MarkerKind::Bullet(_))
                | (MarkerKind::Ordered { .. }, MarkerKind::Ordered { .. })
        )
    }

    /// Columns from the marker's first column to the item content.
    pub fn width(&self) -> usize {
        self.len + self.spacing
    }

    /// Only bullets and lists numbered from 1 may interrupt a paragraph.
    pub fn may_interrupt_paragraph(&self) -> bool {
        !self.is_empty
            && match self.kind {
                MarkerKind::Bullet(_) => true,
                MarkerKind::Ordered { start, .. } => start == 1,
            }
    }
}

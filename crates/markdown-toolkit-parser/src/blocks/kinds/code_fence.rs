use serde::Serialize;

/// Which character a fence is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// An opening or closing fence: its character and run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence at the start of `rest` (indentation already removed).
    ///
    /// A backtick fence's info string may not itself contain a backtick.
    pub fn sig(rest: &str) -> Option<FenceSig> {
        let (kind, ch) = if rest.starts_with(Self::BACKTICKS) {
            (FenceKind::Backticks, b'`')
        } else if rest.starts_with(Self::TILDES) {
            (FenceKind::Tildes, b'~')
        } else {
            return None;
        };
        let len = rest.bytes().take_while(|&b| b == ch).count();
        if kind == FenceKind::Backticks && rest[len..].contains('`') {
            return None;
        }
        Some(FenceSig { kind, len })
    }

    /// The info string after an opening fence, if any.
    pub fn info(rest: &str, sig: FenceSig) -> Option<String> {
        let info = rest[sig.len..].trim();
        (!info.is_empty()).then(|| info.to_string())
    }

    /// Whether `rest` closes a fence opened with `open`: same character, at
    /// least as long, nothing but whitespace after.
    pub fn closes(open: FenceSig, rest: &str) -> bool {
        match Self::sig(rest) {
            Some(sig) => {
                sig.kind == open.kind && sig.len >= open.len && rest[sig.len..].trim().is_empty()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig {
                kind: FenceKind::Backticks,
                len: 3
            })
        );
    }

    #[test]
    fn detect_tilde_fence() {
        assert_eq!(
            CodeFence::sig("~~~~"),
            Some(FenceSig {
                kind: FenceKind::Tildes,
                len: 4
            })
        );
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``"), None);
        assert_eq!(CodeFence::sig("``` a`b"), None);
    }

    #[test]
    fn info_string() {
        let sig = CodeFence::sig("```  rust ").unwrap();
        assert_eq!(CodeFence::info("```  rust ", sig).as_deref(), Some("rust"));
        assert_eq!(CodeFence::info("```", CodeFence::sig("```").unwrap()), None);
    }

    #[test]
    fn closes_matching_fence() {
        let open = CodeFence::sig("````").unwrap();
        assert!(CodeFence::closes(open, "`````"));
        assert!(CodeFence::closes(open, "````  "));
    }

    #[test]
    fn does_not_close_mismatched_fence() {
        let open = CodeFence::sig("````").unwrap();
        assert!(!CodeFence::closes(open, "```"));
        assert!(!CodeFence::closes(open, "~~~~"));
        assert!(!CodeFence::closes(open, "```` rust"));
    }
}

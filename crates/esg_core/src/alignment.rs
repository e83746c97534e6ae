//! crates/esg_core/src/alignment.rs
//! Framework alignment status by position in `TopicProfile::frameworks`.
//!
//! The thresholds are fixed presentation constants: the first three frameworks
//! are "ready", the fourth "partial", the rest "pending".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of leading frameworks shown as ready.
pub const READY_SLOTS: usize = 3;
/// Position shown as partial.
pub const PARTIAL_INDEX: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrameworkStatus {
    Ready,
    Partial,
    Pending,
}

impl FrameworkStatus {
    /// Status of the framework at position `index`.
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index < READY_SLOTS {
            FrameworkStatus::Ready
        } else if index == PARTIAL_INDEX {
            FrameworkStatus::Partial
        } else {
            FrameworkStatus::Pending
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrameworkStatus::Ready => "ready",
            FrameworkStatus::Partial => "partial",
            FrameworkStatus::Pending => "pending",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FrameworkStatus::Ready => "✓",
            FrameworkStatus::Partial => "◐",
            FrameworkStatus::Pending => "○",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            FrameworkStatus::Ready => "Ready",
            FrameworkStatus::Partial => "Partial",
            FrameworkStatus::Pending => "Pending",
        }
    }

    /// Sidebar label: glyph + text, e.g. `✓ Ready`.
    pub fn label(self) -> String {
        format!("{} {}", self.glyph(), self.text())
    }
}

/// Pair each framework with its positional status, preserving order.
pub fn alignment_for(frameworks: &[String]) -> Vec<(&str, FrameworkStatus)> {
    frameworks
        .iter()
        .enumerate()
        .map(|(i, f)| (f.as_str(), FrameworkStatus::for_index(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("FW{i}")).collect()
    }

    fn statuses(n: usize) -> Vec<FrameworkStatus> {
        alignment_for(&names(n)).into_iter().map(|(_, s)| s).collect()
    }

    #[test]
    fn status_for_reference_lengths() {
        use FrameworkStatus::*;
        assert!(statuses(0).is_empty());
        assert_eq!(statuses(1), vec![Ready]);
        assert_eq!(statuses(3), vec![Ready, Ready, Ready]);
        assert_eq!(statuses(4), vec![Ready, Ready, Ready, Partial]);
        assert_eq!(statuses(5), vec![Ready, Ready, Ready, Partial, Pending]);
    }

    #[test]
    fn labels_carry_glyph_and_text() {
        assert_eq!(FrameworkStatus::Ready.label(), "✓ Ready");
        assert_eq!(FrameworkStatus::Partial.label(), "◐ Partial");
        assert_eq!(FrameworkStatus::Pending.label(), "○ Pending");
    }

    #[test]
    fn alignment_preserves_framework_order() {
        let fws = vec!["GRI".to_string(), "SASB".to_string()];
        let a = alignment_for(&fws);
        assert_eq!(a[0].0, "GRI");
        assert_eq!(a[1].0, "SASB");
    }

    proptest! {
        #[test]
        fn status_is_pure_function_of_index(i in 0usize..10_000) {
            let expected = if i < 3 {
                FrameworkStatus::Ready
            } else if i == 3 {
                FrameworkStatus::Partial
            } else {
                FrameworkStatus::Pending
            };
            prop_assert_eq!(FrameworkStatus::for_index(i), expected);
        }

        #[test]
        fn alignment_len_matches_input(n in 0usize..64) {
            prop_assert_eq!(alignment_for(&names(n)).len(), n);
        }
    }
}

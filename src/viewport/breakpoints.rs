//! Viewport width breakpoints.
//!
//! Wider screens fetch bigger batches and need a different distance kept
//! below freshly loaded content when auto-scrolling. Ranges overlap
//! (`>= 768` vs `<= 768`), so rows are evaluated top to bottom and the
//! first match wins.

use crate::model::PageSize;

/// Page size and scroll offset derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportPolicy {
    /// Batch size for the next fetch.
    pub page_size: PageSize,
    /// Pixels kept between the scroll target and the document bottom.
    pub scroll_offset: u32,
}

impl Default for ViewportPolicy {
    /// Policy in effect before the first viewport measurement.
    fn default() -> Self {
        Self {
            page_size: PageSize::from_static(9),
            scroll_offset: 120,
        }
    }
}

/// Width predicate of one breakpoint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthCondition {
    /// `width >= n`
    AtLeast(u32),
    /// `width <= n`
    AtMost(u32),
    /// Matches any width.
    Any,
}

impl WidthCondition {
    /// Whether `width` satisfies this condition.
    pub fn matches(self, width: u32) -> bool {
        match self {
            Self::AtLeast(n) => width >= n,
            Self::AtMost(n) => width <= n,
            Self::Any => true,
        }
    }
}

/// How a breakpoint row treats the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetRule {
    /// Keep whatever offset was in effect before.
    Keep,
    /// Use this offset.
    Set(u32),
}

/// One row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Width predicate.
    pub condition: WidthCondition,
    /// Page size when matched.
    pub page_size: PageSize,
    /// Scroll offset when matched.
    pub offset: OffsetRule,
}

/// The breakpoint table, in evaluation order.
pub const BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint {
        condition: WidthCondition::AtLeast(1980),
        page_size: PageSize::from_static(16),
        offset: OffsetRule::Keep,
    },
    Breakpoint {
        condition: WidthCondition::AtLeast(1480),
        page_size: PageSize::from_static(12),
        offset: OffsetRule::Set(145),
    },
    Breakpoint {
        condition: WidthCondition::AtMost(768),
        page_size: PageSize::from_static(10),
        offset: OffsetRule::Set(640),
    },
    Breakpoint {
        condition: WidthCondition::AtLeast(768),
        page_size: PageSize::from_static(12),
        offset: OffsetRule::Set(395),
    },
    // Unreachable for integer widths; kept so the table is total.
    Breakpoint {
        condition: WidthCondition::Any,
        page_size: PageSize::from_static(9),
        offset: OffsetRule::Set(120),
    },
];

/// Derive the policy for `width`, first match wins.
///
/// `previous_offset` is carried over by rows that keep the offset.
pub fn derive_policy(width: u32, previous_offset: u32) -> ViewportPolicy {
    BREAKPOINTS
        .iter()
        .find(|row| row.condition.matches(width))
        .map(|row| ViewportPolicy {
            page_size: row.page_size,
            scroll_offset: match row.offset {
                OffsetRule::Keep => previous_offset,
                OffsetRule::Set(offset) => offset,
            },
        })
        .unwrap_or(ViewportPolicy {
            scroll_offset: previous_offset,
            ..ViewportPolicy::default()
        })
}

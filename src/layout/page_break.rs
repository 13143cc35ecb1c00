//! # Page Break Decisions
//!
//! The paginator only ever breaks a page *between* blocks, never inside one.
//! Which block boundaries are checked is a policy choice; whether a checked
//! boundary actually breaks depends only on where the cursor is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kinds of block the paginator opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A top-level section: title, overview, duration, or a section heading.
    Section,
    /// One topic with its resources.
    Topic,
    /// One week of the weekly schedule.
    Week,
    /// A single list entry (resource, goal, tip, ...).
    Item,
}

/// Which block boundaries are page-break candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakPolicy {
    /// Only before each week of the weekly schedule. Anything else that runs
    /// past the bottom margin stays on its page.
    #[default]
    WeekBlocks,
    /// Before every block.
    EveryBlock,
}

impl BreakPolicy {
    /// Is the boundary before a block of this kind a break candidate?
    pub fn checks(&self, block: BlockKind) -> bool {
        match self {
            BreakPolicy::WeekBlocks => block == BlockKind::Week,
            BreakPolicy::EveryBlock => true,
        }
    }
}

impl FromStr for BreakPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "week-blocks" => Ok(BreakPolicy::WeekBlocks),
            "every-block" => Ok(BreakPolicy::EveryBlock),
            other => Err(format!(
                "unknown break policy '{}', expected week-blocks or every-block",
                other
            )),
        }
    }
}

impl fmt::Display for BreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BreakPolicy::WeekBlocks => "week-blocks",
            BreakPolicy::EveryBlock => "every-block",
        })
    }
}

/// What to do at a checked block boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakDecision {
    /// Keep emitting on the current page.
    Place,
    /// Start a new page, then emit the block.
    MoveToNextPage,
}

/// Decide whether a block starting at `cursor_y` goes on a new page.
///
/// The page is exhausted once the cursor has moved strictly past
/// `bottom_limit`. A page with nothing on it is never abandoned.
pub fn decide_break(cursor_y: f64, bottom_limit: f64, page_is_empty: bool) -> BreakDecision {
    if cursor_y > bottom_limit && !page_is_empty {
        BreakDecision::MoveToNextPage
    } else {
        BreakDecision::Place
    }
}

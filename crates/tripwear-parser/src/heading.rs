//! First parsing pass: locating day headings.
//!
//! Generated text marks days inconsistently, so matchers are tried in
//! priority order and the first one that finds anything wins:
//!
//! 1. [`HeadingStyle::Strong`]: an emphasized heading line such as
//!    `**Day 2 (Jul 21): Museum Day**` or `### Day 1: San Francisco`.
//!    The whole line is the heading; its tail becomes part of the label.
//! 2. [`HeadingStyle::Weak`]: a bare `Day 3:` token at line start. The
//!    whole line is the heading; any title after the colon joins the label.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static STRONG_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*(?:#{1,6}[ \t]*(?:\*\*|__)?|\*\*|__)[ \t]*day[ \t]+([0-9]+)([^0-9A-Za-z\n][^\n]*)?$")
        .expect("valid strong heading regex")
});

static WEAK_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*day[ \t]+([0-9]+)[ \t]*(:[^\n]*)").expect("valid weak heading regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    Strong,
    Weak,
}

impl HeadingStyle {
    /// Matchers in the order they are attempted.
    pub const PRIORITY: [HeadingStyle; 2] = [HeadingStyle::Strong, HeadingStyle::Weak];

    fn regex(self) -> &'static Regex {
        match self {
            HeadingStyle::Strong => &STRONG_HEADING,
            HeadingStyle::Weak => &WEAK_HEADING,
        }
    }
}

/// A located day heading. `start..end` is the byte span of the heading
/// itself; the day's content begins at `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub start: usize,
    pub end: usize,
    /// Day number exactly as written, e.g. `"3"` or `"03"`.
    pub number_text: String,
    /// Inline date/title tail with emphasis removed, e.g. `" (Jul 21): Museum Day"`.
    pub fragment: String,
}

impl Heading {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let whole = caps.get(0)?;
        let number_text = caps.get(1)?.as_str().to_string();
        let fragment = caps
            .get(2)
            .map(|m| clean_fragment(m.as_str()))
            .unwrap_or_default();
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            number_text,
            fragment,
        })
    }

    /// The number written in the heading, if it is a usable 1-based day.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.number_text.parse::<u32>().ok().filter(|n| *n > 0)
    }

    /// Display label, e.g. `"Day 2 (Jul 21): Museum Day"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Day {}{}", self.number_text, self.fragment)
    }
}

/// Strips emphasis markers and a dangling colon from a heading tail while
/// keeping the rest verbatim.
fn clean_fragment(raw: &str) -> String {
    let cleaned = raw.replace("**", "").replace("__", "");
    let cleaned = cleaned.trim_end();
    let cleaned = cleaned.strip_suffix(':').unwrap_or(cleaned).trim_end();
    if cleaned.trim().is_empty() {
        String::new()
    } else {
        cleaned.to_string()
    }
}

/// Runs the heading matchers in priority order and returns the first
/// style that matched at least once, with its headings in source order.
///
/// Returns `None` when no matcher finds a heading.
#[must_use]
pub fn find_headings(text: &str) -> Option<(HeadingStyle, Vec<Heading>)> {
    HeadingStyle::PRIORITY.into_iter().find_map(|style| {
        let headings: Vec<Heading> = style
            .regex()
            .captures_iter(text)
            .filter_map(|caps| Heading::from_captures(&caps))
            .collect();
        (!headings.is_empty()).then_some((style, headings))
    })
}

#[cfg(test)]
#[path = "heading_test.rs"]
mod tests;

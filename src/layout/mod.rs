//! # Plan Paginator
//!
//! Walks a [`LearningPlan`] and lays it out as fixed-size pages of
//! positioned, styled text lines. This is the single layout pass every
//! backend draws from: the PDF export and the HTML view see exactly the same
//! lines at exactly the same positions.
//!
//! The algorithm is a cursor moving down the page:
//!
//! 1. `y` starts at the top margin, and goes back there on every new page.
//! 2. Sections are emitted in a fixed order: title, overview, duration,
//!    topics, weekly schedule, assessment methods, additional tips.
//!    Sections the plan doesn't have produce no lines at all.
//! 3. Every line advances `y` by one line height. Nesting only changes `x`:
//!    `x = margin × level`, levels 1 (section) to 4 (task).
//! 4. Text is word-wrapped to the space between its `x` and the right margin.
//! 5. Pages break only at block boundaries the [`BreakPolicy`] checks. With
//!    the default policy that is before each week of the schedule, so other
//!    content can run past the bottom margin.
//!
//! Pagination is pure: the plan is only read, and the same plan always
//! produces the same pages.

pub mod page_break;

use serde::Serialize;
use tracing::{debug, trace};

use crate::locale::{Labels, Locale};
use crate::model::{non_blank, LearningPlan, PageGeometry, Topic, WeekPlan};
use crate::style::TextStyle;
use crate::text::wrap;

pub use page_break::{BlockKind, BreakDecision, BreakPolicy};

/// A plan laid out into pages, ready for a backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    /// Document title (also the first line of the first page).
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub locale: Locale,
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

/// One page of draw instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub width: f64,
    pub height: f64,
    pub lines: Vec<DrawInstruction>,
}

/// A single line of text at a fixed position.
///
/// `y` is the top of the line's box, measured down from the top edge of the
/// page; the box is one line height tall.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawInstruction {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub style: TextStyle,
    /// Link target, for lines that are URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Horizontal nesting levels, in multiples of the page margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Section = 1,
    SubItem = 2,
    Resource = 3,
    Task = 4,
}

impl Indent {
    pub fn x(self, geometry: &PageGeometry) -> f64 {
        geometry.margin * self as u8 as f64
    }
}

impl PlanDocument {
    /// Baseline of a line, measured down from the top edge: the text's cap
    /// height is centred in the line box.
    pub fn baseline(&self, line: &DrawInstruction) -> f64 {
        let cap_height = 0.72 * line.style.font().size;
        line.y + (self.geometry.line_height + cap_height) / 2.0
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Lays plans out into pages of a fixed geometry.
#[derive(Debug, Clone)]
pub struct Paginator {
    geometry: PageGeometry,
    labels: &'static Labels,
    policy: BreakPolicy,
}

impl Paginator {
    pub fn new(geometry: PageGeometry, locale: Locale, policy: BreakPolicy) -> Self {
        Self {
            geometry,
            labels: locale.labels(),
            policy,
        }
    }

    /// Lay out a plan. Never fails: missing fields are skipped.
    pub fn paginate(&self, plan: &LearningPlan) -> Vec<Page> {
        let labels = self.labels;
        let mut out = PageBuilder::new(&self.geometry, self.policy);

        out.open_block(BlockKind::Section);
        let title = document_title(plan, labels);
        out.wrapped(Indent::Section, TextStyle::Title, &title);

        if let Some(overview) = non_blank(plan.overview.as_deref()) {
            out.open_block(BlockKind::Section);
            out.wrapped(Indent::Section, TextStyle::Body, overview);
        }

        if let Some(duration) = duration_line(plan, labels) {
            out.open_block(BlockKind::Section);
            out.wrapped(Indent::Section, TextStyle::Body, &duration);
        }

        if !plan.topics.is_empty() {
            trace!(count = plan.topics.len(), "emitting topics");
            out.open_block_with_next(BlockKind::Section);
            out.line(Indent::Section, TextStyle::Heading, labels.topics);
            for topic in &plan.topics {
                self.topic(&mut out, topic);
            }
        }

        if !plan.weekly_schedule.is_empty() {
            trace!(count = plan.weekly_schedule.len(), "emitting weekly schedule");
            out.open_block_with_next(BlockKind::Section);
            out.line(Indent::Section, TextStyle::Heading, labels.weekly_schedule);
            for (index, week) in plan.weekly_schedule.iter().enumerate() {
                self.week(&mut out, index, week);
            }
        }

        bullet_section(&mut out, labels.assessment_methods, &plan.assessment_methods);
        bullet_section(&mut out, labels.additional_tips, &plan.additional_tips);

        out.finish()
    }

    fn topic(&self, out: &mut PageBuilder<'_>, topic: &Topic) {
        out.open_block(BlockKind::Topic);

        if let Some(name) = non_blank(topic.name.as_deref()) {
            out.wrapped(Indent::SubItem, TextStyle::Subheading, name);
        }
        if let Some(description) = non_blank(topic.description.as_deref()) {
            out.wrapped(Indent::SubItem, TextStyle::Body, description);
        }
        if let Some(time) = non_blank(topic.estimated_time_to_master.as_deref()) {
            let text = format!("{}: {}", self.labels.time_to_master, time);
            out.wrapped(Indent::SubItem, TextStyle::Body, &text);
        }

        for resource in &topic.resources {
            out.open_block(BlockKind::Item);
            let kind = non_blank(resource.kind.as_deref());
            let name = non_blank(resource.name.as_deref());
            let heading = match (kind, name) {
                (Some(kind), Some(name)) => Some(format!("{}: {}", kind, name)),
                (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
                (None, None) => None,
            };
            if let Some(heading) = heading {
                out.wrapped(Indent::Resource, TextStyle::Body, &heading);
            }
            if let Some(description) = non_blank(resource.description.as_deref()) {
                out.wrapped(Indent::Resource, TextStyle::Body, description);
            }
            if let Some(link) = non_blank(resource.link.as_deref()) {
                out.link(Indent::Resource, link);
            }
        }
    }

    fn week(&self, out: &mut PageBuilder<'_>, index: usize, week: &WeekPlan) {
        let labels = self.labels;
        out.open_block(BlockKind::Week);

        let ordinal = match &week.week {
            Some(n) => n.to_string(),
            None => (index + 1).to_string(),
        };
        let header = match non_blank(week.focus.as_deref()) {
            Some(focus) => format!("{} {}: {}", labels.week, ordinal, focus),
            None => format!("{} {}", labels.week, ordinal),
        };
        out.wrapped(Indent::SubItem, TextStyle::Subheading, &header);

        bullet_list(out, labels.goals, &week.goals);

        let has_days = week.daily_breakdown.iter().any(|d| {
            non_blank(Some(d.day.as_str())).is_some()
                || d.tasks.iter().any(|t| non_blank(Some(t.as_str())).is_some())
        });
        if has_days {
            out.open_block_with_next(BlockKind::Item);
            out.line(Indent::SubItem, TextStyle::Body, labels.daily_breakdown);
            for day in week.daily_breakdown.iter() {
                out.open_block(BlockKind::Item);
                if let Some(label) = non_blank(Some(day.day.as_str())) {
                    out.wrapped(Indent::Resource, TextStyle::Body, label);
                }
                for task in day.tasks.iter().filter_map(|t| non_blank(Some(t.as_str()))) {
                    out.wrapped(Indent::Task, TextStyle::Body, &format!("- {}", task));
                }
            }
        }

        bullet_list(out, labels.milestones, &week.milestones);
    }
}

/// Whether a link target may be made clickable: `http`, `https` and
/// `mailto` only. Plan links come from a remote service.
pub fn is_safe_link(href: &str) -> bool {
    match href.trim().split_once(':') {
        Some((scheme, _)) => matches!(
            scheme.to_ascii_lowercase().as_str(),
            "http" | "https" | "mailto"
        ),
        None => false,
    }
}

/// "Learning Plan: <subject>", or just the label without a subject.
pub(crate) fn document_title(plan: &LearningPlan, labels: &Labels) -> String {
    match plan.subject_text() {
        Some(subject) => format!("{}: {}", labels.learning_plan, subject),
        None => labels.learning_plan.to_string(),
    }
}

/// "Duration: 8 weeks, 5 hours per week", with absent halves left out.
fn duration_line(plan: &LearningPlan, labels: &Labels) -> Option<String> {
    let duration = plan.duration.as_ref()?;
    let weeks = duration
        .estimated_weeks
        .as_ref()
        .map(|w| format!("{} {}", w, labels.weeks));
    let hours = duration
        .hours_per_week
        .as_ref()
        .map(|h| format!("{} {}", h, labels.hours_per_week));
    let summary = match (weeks, hours) {
        (Some(w), Some(h)) => format!("{}, {}", w, h),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => return None,
    };
    Some(format!("{}: {}", labels.duration, summary))
}

/// A labelled list inside a week: label at sub-item level, "• item" below.
fn bullet_list(out: &mut PageBuilder<'_>, label: &str, items: &[String]) {
    let mut items = items.iter().filter_map(|i| non_blank(Some(i.as_str()))).peekable();
    if items.peek().is_none() {
        return;
    }
    out.open_block_with_next(BlockKind::Item);
    out.line(Indent::SubItem, TextStyle::Body, label);
    for item in items {
        out.open_block(BlockKind::Item);
        out.wrapped(Indent::Resource, TextStyle::Body, &format!("\u{2022} {}", item));
    }
}

/// A top-level list section: heading, then "• item" lines.
fn bullet_section(out: &mut PageBuilder<'_>, heading: &str, items: &[String]) {
    let mut items = items.iter().filter_map(|i| non_blank(Some(i.as_str()))).peekable();
    if items.peek().is_none() {
        return;
    }
    out.open_block_with_next(BlockKind::Section);
    out.line(Indent::Section, TextStyle::Heading, heading);
    for item in items {
        out.open_block(BlockKind::Item);
        out.wrapped(Indent::SubItem, TextStyle::Body, &format!("\u{2022} {}", item));
    }
}

/// The cursor and the pages emitted so far. Local to one `paginate` call.
struct PageBuilder<'a> {
    geometry: &'a PageGeometry,
    policy: BreakPolicy,
    pages: Vec<Page>,
    current: Vec<DrawInstruction>,
    y: f64,
}

impl<'a> PageBuilder<'a> {
    fn new(geometry: &'a PageGeometry, policy: BreakPolicy) -> Self {
        Self {
            geometry,
            policy,
            pages: Vec::new(),
            current: Vec::new(),
            y: geometry.margin,
        }
    }

    /// Mark the start of a block, breaking the page first if the policy
    /// checks this kind of block and the page is used up.
    fn open_block(&mut self, kind: BlockKind) {
        self.check_break(kind, self.y);
    }

    /// Like [`open_block`](Self::open_block) for a label line that must
    /// stay on the same page as the line after it.
    fn open_block_with_next(&mut self, kind: BlockKind) {
        self.check_break(kind, self.y + self.geometry.line_height);
    }

    fn check_break(&mut self, kind: BlockKind, cursor_y: f64) {
        if !self.policy.checks(kind) {
            return;
        }
        let decision =
            page_break::decide_break(cursor_y, self.geometry.bottom_limit(), self.current.is_empty());
        if decision == BreakDecision::MoveToNextPage {
            debug!(
                page = self.pages.len() + 2,
                cursor_y = self.y,
                block = ?kind,
                "starting new page"
            );
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        let lines = std::mem::take(&mut self.current);
        self.pages.push(Page {
            width: self.geometry.width(),
            height: self.geometry.height(),
            lines,
        });
        self.y = self.geometry.margin;
    }

    fn push(&mut self, indent: Indent, style: TextStyle, text: String, href: Option<String>) {
        self.current.push(DrawInstruction {
            x: indent.x(self.geometry),
            y: self.y,
            text,
            style,
            href,
        });
        self.y += self.geometry.line_height;
    }

    /// One unwrapped line.
    fn line(&mut self, indent: Indent, style: TextStyle, text: &str) {
        self.push(indent, style, text.to_string(), None);
    }

    /// A URL line that links to itself. Targets that aren't safe to click
    /// are set as plain text.
    fn link(&mut self, indent: Indent, url: &str) {
        if is_safe_link(url) {
            self.push(indent, TextStyle::Link, url.to_string(), Some(url.to_string()));
        } else {
            self.wrapped(indent, TextStyle::Body, url);
        }
    }

    /// `text` wrapped to the width between `indent` and the right margin.
    fn wrapped(&mut self, indent: Indent, style: TextStyle, text: &str) {
        let max_width = self.geometry.width() - self.geometry.margin - indent.x(self.geometry);
        for line in wrap(text, max_width, style.font()) {
            self.push(indent, style, line, None);
        }
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DailyBreakdown, DayTasks, PageSize, PlanDuration, Resource};

    fn paginator() -> Paginator {
        Paginator::new(PageGeometry::default(), Locale::English, BreakPolicy::WeekBlocks)
    }

    fn texts(pages: &[Page]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|p| p.lines.iter().map(|l| l.text.clone()))
            .collect()
    }

    fn plan() -> LearningPlan {
        LearningPlan {
            is_learning_related: true,
            subject: Some("Rust".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_plan_has_title_only() {
        let pages = paginator().paginate(&LearningPlan::default());
        assert_eq!(pages.len(), 1);
        assert_eq!(texts(&pages), vec!["Learning Plan"]);
    }

    #[test]
    fn test_first_line_at_top_margin() {
        let geometry = PageGeometry::default();
        let pages = paginator().paginate(&plan());
        let first = &pages[0].lines[0];
        assert_eq!(first.y, geometry.margin);
        assert_eq!(first.x, geometry.margin);
        assert_eq!(first.style, TextStyle::Title);
        assert_eq!(first.text, "Learning Plan: Rust");
    }

    #[test]
    fn test_lines_advance_by_line_height() {
        let geometry = PageGeometry::default();
        let mut p = plan();
        p.assessment_methods = vec!["Quiz".to_string(), "Project".to_string()];
        let pages = paginator().paginate(&p);
        let ys: Vec<f64> = pages[0].lines.iter().map(|l| l.y).collect();
        for pair in ys.windows(2) {
            assert!((pair[1] - pair[0] - geometry.line_height).abs() < 1e-9);
        }
    }

    #[test]
    fn test_duration_line() {
        let mut p = plan();
        p.duration = Some(PlanDuration {
            estimated_weeks: Some(8u64.into()),
            hours_per_week: Some(5u64.into()),
        });
        assert!(texts(&paginator().paginate(&p)).contains(&"Duration: 8 weeks, 5 hours per week".to_string()));

        p.duration = Some(PlanDuration {
            estimated_weeks: None,
            hours_per_week: Some(5u64.into()),
        });
        assert!(texts(&paginator().paginate(&p)).contains(&"Duration: 5 hours per week".to_string()));

        p.duration = Some(PlanDuration::default());
        assert_eq!(texts(&paginator().paginate(&p)).len(), 1);
    }

    #[test]
    fn test_indent_levels() {
        let geometry = PageGeometry::default();
        let mut p = plan();
        p.topics = vec![Topic {
            name: Some("Ownership".to_string()),
            resources: vec![Resource {
                kind: Some("book".to_string()),
                name: Some("The Book".to_string()),
                link: Some("https://doc.rust-lang.org/book/".to_string()),
                description: None,
            }],
            ..Default::default()
        }];
        p.weekly_schedule = vec![WeekPlan {
            week: Some(1u64.into()),
            daily_breakdown: DailyBreakdown(vec![DayTasks {
                day: "Monday".to_string(),
                tasks: vec!["Read chapter 4".to_string()],
            }]),
            ..Default::default()
        }];
        let pages = paginator().paginate(&p);
        let find = |text: &str| {
            pages[0]
                .lines
                .iter()
                .find(|l| l.text == text)
                .unwrap_or_else(|| panic!("missing line {:?}", text))
                .clone()
        };
        assert_eq!(find("Topics").x, geometry.margin);
        assert_eq!(find("Ownership").x, 2.0 * geometry.margin);
        assert_eq!(find("book: The Book").x, 3.0 * geometry.margin);
        assert_eq!(find("- Read chapter 4").x, 4.0 * geometry.margin);

        let link = find("https://doc.rust-lang.org/book/");
        assert_eq!(link.style, TextStyle::Link);
        assert_eq!(link.href.as_deref(), Some("https://doc.rust-lang.org/book/"));
    }

    #[test]
    fn test_week_header_falls_back_to_position() {
        let mut p = plan();
        p.weekly_schedule = vec![
            WeekPlan {
                focus: Some("Basics".to_string()),
                ..Default::default()
            },
            WeekPlan::default(),
        ];
        let lines = texts(&paginator().paginate(&p));
        assert!(lines.contains(&"Week 1: Basics".to_string()));
        assert!(lines.contains(&"Week 2".to_string()));
    }

    #[test]
    fn test_blank_items_are_skipped() {
        let mut p = plan();
        p.additional_tips = vec!["  ".to_string(), String::new()];
        assert_eq!(texts(&paginator().paginate(&p)), vec!["Learning Plan: Rust"]);
    }

    #[test]
    fn test_locale_changes_labels() {
        let mut p = plan();
        p.additional_tips = vec!["Übung macht den Meister".to_string()];
        let pages = Paginator::new(PageGeometry::default(), Locale::German, BreakPolicy::WeekBlocks)
            .paginate(&p);
        let lines = texts(&pages);
        assert_eq!(lines[0], "Lernplan: Rust");
        assert_eq!(lines[1], "Zusätzliche Tipps");
    }

    #[test]
    fn test_overflow_outside_weeks_stays_on_page() {
        let geometry = PageGeometry {
            size: PageSize::Custom { width: 400.0, height: 200.0 },
            margin: 20.0,
            line_height: 20.0,
        };
        let mut p = plan();
        p.additional_tips = (0..20).map(|i| format!("tip {}", i)).collect();
        let pages = Paginator::new(geometry, Locale::English, BreakPolicy::WeekBlocks).paginate(&p);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.last().unwrap().y > geometry.bottom_limit());
    }

    #[test]
    fn test_every_block_policy_breaks_lists() {
        let geometry = PageGeometry {
            size: PageSize::Custom { width: 400.0, height: 200.0 },
            margin: 20.0,
            line_height: 20.0,
        };
        let mut p = plan();
        p.additional_tips = (0..20).map(|i| format!("tip {}", i)).collect();
        let pages = Paginator::new(geometry, Locale::English, BreakPolicy::EveryBlock).paginate(&p);
        assert!(pages.len() > 1);
        for page in &pages {
            for line in &page.lines {
                // The check fires once y passes the limit, so one line may
                // start just past it.
                assert!(line.y <= geometry.bottom_limit() + geometry.line_height);
            }
            assert_eq!(page.lines[0].y, geometry.margin);
        }
        assert_eq!(texts(&pages).len(), 22);
    }

    #[test]
    fn test_blank_daily_breakdown_has_no_label() {
        let mut p = plan();
        p.weekly_schedule = vec![WeekPlan {
            week: Some(1u64.into()),
            daily_breakdown: DailyBreakdown(vec![DayTasks {
                day: String::new(),
                tasks: vec!["  ".to_string()],
            }]),
            ..Default::default()
        }];
        assert_eq!(
            texts(&paginator().paginate(&p)),
            vec!["Learning Plan: Rust", "Weekly Schedule", "Week 1"]
        );
    }

    #[test]
    fn test_tasks_under_blank_day_keep_label() {
        let mut p = plan();
        p.weekly_schedule = vec![WeekPlan {
            week: Some(1u64.into()),
            daily_breakdown: DailyBreakdown(vec![DayTasks {
                day: " ".to_string(),
                tasks: vec!["Practice".to_string()],
            }]),
            ..Default::default()
        }];
        let lines = texts(&paginator().paginate(&p));
        assert_eq!(&lines[3..], &["Daily Breakdown", "- Practice"]);
    }

    #[test]
    fn test_unsafe_links_are_plain_text() {
        let mut p = plan();
        p.topics = vec![Topic {
            name: Some("Web".to_string()),
            resources: vec![
                Resource {
                    link: Some("javascript:alert(document.cookie)".to_string()),
                    ..Default::default()
                },
                Resource {
                    link: Some("mailto:mentor@example.com".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }];
        let pages = paginator().paginate(&p);
        let script = pages[0]
            .lines
            .iter()
            .find(|l| l.text.starts_with("javascript:"))
            .unwrap();
        assert_eq!(script.href, None);
        assert_eq!(script.style, TextStyle::Body);
        let mail = pages[0].lines.iter().find(|l| l.text.starts_with("mailto:")).unwrap();
        assert_eq!(mail.href.as_deref(), Some("mailto:mentor@example.com"));
    }

    #[test]
    fn test_safe_link_schemes() {
        assert!(is_safe_link("https://example.com"));
        assert!(is_safe_link("HTTP://example.com"));
        assert!(is_safe_link("mailto:a@b.c"));
        assert!(!is_safe_link("javascript:alert(1)"));
        assert!(!is_safe_link(" JavaScript:alert(1)"));
        assert!(!is_safe_link("data:text/html,<b>x</b>"));
        assert!(!is_safe_link("example.com/page"));
    }

    #[test]
    fn test_every_block_keeps_heading_with_first_item() {
        let geometry = PageGeometry {
            size: PageSize::Custom { width: 300.0, height: 200.0 },
            margin: 20.0,
            line_height: 20.0,
        };
        // Title at 20, assessment heading at 40, six items at 60..=160, so
        // the tips heading would land on the last line that fits.
        let p = LearningPlan {
            is_learning_related: true,
            assessment_methods: (0..6).map(|i| format!("method {}", i)).collect(),
            additional_tips: vec!["Rest".to_string()],
            ..Default::default()
        };
        let pages = Paginator::new(geometry, Locale::English, BreakPolicy::EveryBlock).paginate(&p);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.last().unwrap().text, "\u{2022} method 5");
        let second: Vec<&str> = pages[1].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(second, vec!["Additional Tips", "\u{2022} Rest"]);
        assert_eq!(pages[1].lines[0].y, geometry.margin);
    }

    #[test]
    fn test_every_block_keeps_week_label_with_first_goal() {
        let geometry = PageGeometry {
            size: PageSize::Custom { width: 300.0, height: 200.0 },
            margin: 20.0,
            line_height: 20.0,
        };
        // Title, schedule heading, then the week header at 60; its goals
        // push the milestones label onto the last line that fits.
        let p = LearningPlan {
            is_learning_related: true,
            weekly_schedule: vec![WeekPlan {
                week: Some(1u64.into()),
                goals: (0..4).map(|i| format!("goal {}", i)).collect(),
                milestones: vec!["Done".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let pages = Paginator::new(geometry, Locale::English, BreakPolicy::EveryBlock).paginate(&p);
        let second: Vec<&str> = pages[1].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(second, vec!["Milestones", "\u{2022} Done"]);
    }

    #[test]
    fn test_paginate_is_repeatable() {
        let mut p = plan();
        p.overview = Some("A long overview ".repeat(30));
        p.weekly_schedule = (1..=12u64)
            .map(|n| WeekPlan {
                week: Some(n.into()),
                goals: vec!["goal".to_string(); 4],
                ..Default::default()
            })
            .collect();
        let paginator = paginator();
        assert_eq!(paginator.paginate(&p), paginator.paginate(&p));
    }
}

//! # Plan Model
//!
//! The input representation for the exporter: a learning plan exactly as the
//! plan-generation service returns it. Field names follow the service's
//! camelCase JSON so a response body deserializes straight into
//! [`LearningPlan`].
//!
//! Every field except the `isLearningRelated` discriminator is optional. The
//! service is loose about types and nulls, so lists accept `null`, and
//! numeric fields accept either numbers or strings.

pub mod page;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use page::{PageGeometry, PageSize};

/// A generated learning plan, or the service's refusal when the submitted
/// goal was not about learning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    /// Whether the submitted goal was recognised as a learning goal. When
    /// false only `message` and `suggestion` are meaningful.
    pub is_learning_related: bool,

    /// Language the service answered in, as free text ("en", "Spanish", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<PlanDuration>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub topics: Vec<Topic>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub weekly_schedule: Vec<WeekPlan>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub assessment_methods: Vec<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional_tips: Vec<String>,

    /// Explanation sent instead of a plan when the goal was not learning related.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Suggested rephrasing sent alongside `message`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Overall time commitment of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_weeks: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<Quantity>,
}

/// One subject area to study, with the material to study it from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free text such as "2 weeks".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_to_master: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resources: Vec<Resource>,
}

/// A book, course, video or other study resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The plan for one week of study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    /// Ordinal of the week, usually 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "DailyBreakdown::is_empty")]
    pub daily_breakdown: DailyBreakdown,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub milestones: Vec<String>,
}

/// Day label → tasks for that day, in the order the days appear in the
/// source JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBreakdown(pub Vec<DayTasks>);

/// The tasks scheduled for one day of a week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTasks {
    pub day: String,
    pub tasks: Vec<String>,
}

impl DailyBreakdown {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayTasks> {
        self.0.iter()
    }
}

impl Serialize for DailyBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.day, &entry.tasks)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DailyBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = DailyBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of day labels to task lists")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(DailyBreakdown::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut days = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((day, tasks)) = access.next_entry::<String, TaskList>()? {
                    days.push(DayTasks {
                        day,
                        tasks: tasks.into_vec(),
                    });
                }
                Ok(DailyBreakdown(days))
            }
        }

        deserializer.deserialize_any(BreakdownVisitor)
    }
}

/// A day's tasks as the service sends them: usually a list, sometimes a
/// single sentence.
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskList {
    Many(Vec<String>),
    One(String),
    Nothing(()),
}

impl TaskList {
    fn into_vec(self) -> Vec<String> {
        match self {
            TaskList::Many(tasks) => tasks,
            TaskList::One(task) => vec![task],
            TaskList::Nothing(()) => Vec::new(),
        }
    }
}

/// A count the service may send as a JSON number or as a string.
/// Kept as display text; the exporter never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s.trim()),
        }
    }
}

impl From<u64> for Quantity {
    fn from(n: u64) -> Self {
        Quantity::Number(n.into())
    }
}

/// Request body for the plan-generation service, the request side of the
/// contract whose response is a [`LearningPlan`]. The exporter never sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// The learner's goal in their own words.
    pub goal: String,
    /// Language the plan should be written in.
    pub language: String,
}

impl LearningPlan {
    /// Title of the exported document: the subject, trimmed, if any.
    pub fn subject_text(&self) -> Option<&str> {
        non_blank(self.subject.as_deref())
    }
}

/// `Some(trimmed)` unless the string is absent or blank.
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

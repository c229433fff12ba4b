use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Task priority. Generated plans front-load urgency on the first steps.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Where a task sits in its lifecycle. The cycle is one-directional:
/// todo -> doing -> done -> todo. There is no terminal state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Doing,
    Done,
}

impl Status {
    /// The cyclic successor. Applying this three times returns the
    /// original status.
    pub fn next(self) -> Status {
        match self {
            Status::Todo => Status::Doing,
            Status::Doing => Status::Done,
            Status::Done => Status::Todo,
        }
    }
}

/// The five fixed life areas a goal or task can belong to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Study,
    Health,
    Money,
    Personal,
}

impl Category {
    /// All categories in their fixed display/aggregation order.
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Study,
        Category::Health,
        Category::Money,
        Category::Personal,
    ];
}

/// Granularity label used to pace generated plans. Informational only;
/// it is never enforced against `due_date`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Year,
    Quarter,
    Month,
    Week,
    Day,
}

impl Timeframe {
    /// Coarse-to-fine ordering used when a plan zooms in step by step.
    pub const ZOOM: [Timeframe; 5] = [
        Timeframe::Year,
        Timeframe::Quarter,
        Timeframe::Month,
        Timeframe::Week,
        Timeframe::Day,
    ];

    /// Position of this timeframe within [`Timeframe::ZOOM`].
    pub fn position(self) -> usize {
        match self {
            Timeframe::Year => 0,
            Timeframe::Quarter => 1,
            Timeframe::Month => 2,
            Timeframe::Week => 3,
            Timeframe::Day => 4,
        }
    }
}

/// An atomic unit of work, always owned by exactly one [`Goal`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier, stable for the task's lifetime.
    pub id: String,
    /// Short label shown on the timeline.
    pub title: String,
    /// Free-text details, may be empty.
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// Estimated effort in hours; may be fractional (half-hour steps).
    pub estimated_time: f64,
    pub timeframe: Timeframe,
    pub category: Category,
    /// Calendar date the task is scheduled against (no time component).
    pub due_date: NaiveDate,
    /// True only for tasks produced by the plan generator.
    #[serde(default)]
    pub ai_generated: bool,
    /// RFC 3339 timestamp, present iff `status == Done`.
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl Task {
    /// Steps the task to the next status in the todo -> doing -> done cycle.
    ///
    /// Entering `done` stamps `completed_at` with the current time; moving
    /// to any other status clears it. This is the only mutator of `status`;
    /// there is no shortcut that skips `doing`.
    pub fn advance(&mut self) {
        self.status = self.status.next();
        self.completed_at = match self.status {
            Status::Done => Some(Local::now().to_rfc3339()),
            _ => None,
        };
    }
}

/// A user-declared objective owning an ordered list of tasks.
///
/// Insertion order is generation/creation order. Tasks are never
/// re-parented to another goal. A task's category may differ from its
/// goal's category: quick tasks land in whichever goal is first and keep
/// whatever category they were created with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub timeframe: Timeframe,
    /// RFC 3339 timestamp, immutable once set.
    pub created_at: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Per-date completion summary, derived from the task collection.
///
/// Never authoritative: rebuilt wholesale whenever tasks change, never
/// updated incrementally.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyStat {
    pub date: NaiveDate,
    /// Tasks due on `date` with status done.
    pub completed: usize,
    /// All tasks due on `date`.
    pub total: usize,
    /// Sum of `estimated_time` over the completed tasks due on `date`.
    pub hours_spent: f64,
}

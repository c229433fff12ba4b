use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::models::{Category, DailyStat, Goal, Priority, Status, Task, Timeframe};
use crate::planner::generate_plan;
use crate::stats;

/// Title given to the goal synthesized for the first quick task.
const DEFAULT_GOAL_TITLE: &str = "My Tasks";

/// The full in-memory collection: goals (each owning its tasks) plus the
/// derived rolling-week stats.
///
/// The state is the single source of truth. Every mutator takes `&self`
/// and returns a fresh snapshot together with a success flag, so callers
/// always hold a consistent view and can persist `goals` and
/// `daily_stats` after each successful mutation. Nothing here performs
/// I/O; see [`crate::storage`] for the file-backed snapshot store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub goals: Vec<Goal>,
    pub daily_stats: Vec<DailyStat>,
}

/// Builds the initial state from a previously persisted snapshot.
///
/// Both documents are optional. Absent or malformed input degrades to an
/// empty collection; loading never fails.
pub fn load_initial_state(goals_json: Option<&str>, stats_json: Option<&str>) -> State {
    let goals = goals_json.map_or_else(Vec::new, |raw| match serde_json::from_str(raw) {
        Ok(goals) => goals,
        Err(e) => {
            warn!("discarding malformed goal snapshot: {}", e);
            Vec::new()
        }
    });
    let daily_stats = stats_json.map_or_else(Vec::new, |raw| match serde_json::from_str(raw) {
        Ok(stats) => stats,
        Err(e) => {
            warn!("discarding malformed stats snapshot: {}", e);
            Vec::new()
        }
    });
    State { goals, daily_stats }
}

impl State {
    /// Creates a goal and its generated five-step plan.
    ///
    /// No-op when the title is empty or whitespace-only.
    pub fn create_goal(&self, title: &str, category: Category, timeframe: Timeframe) -> (State, bool) {
        if title.trim().is_empty() {
            debug!("rejecting goal with blank title");
            return (self.clone(), false);
        }
        let now = Local::now();
        let goal = Goal {
            id: format!("goal-{}", now.timestamp_millis()),
            title: title.to_string(),
            category,
            timeframe,
            created_at: now.to_rfc3339(),
            tasks: generate_plan(title, category, timeframe),
        };
        let mut next = self.clone();
        next.goals.push(goal);
        next.refresh_stats();
        (next, true)
    }

    /// Creates a single hand-written task with status todo.
    ///
    /// When no goal exists yet a default goal titled "My Tasks" is
    /// synthesized to hold it (category taken from the task, timeframe
    /// month). Otherwise the task joins the *first* goal in the
    /// collection. The rule is positional, not a lookup by name: delete
    /// the first goal and later quick tasks land in whichever goal is
    /// first afterwards.
    pub fn create_quick_task(
        &self,
        title: &str,
        description: &str,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
        estimated_time: f64,
    ) -> (State, bool) {
        if title.trim().is_empty() {
            debug!("rejecting quick task with blank title");
            return (self.clone(), false);
        }
        let now = Local::now();
        let task = Task {
            id: format!("task-{}", now.timestamp_millis()),
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status: Status::Todo,
            estimated_time,
            timeframe: Timeframe::Day,
            category,
            due_date,
            ai_generated: false,
            completed_at: None,
        };
        let mut next = self.clone();
        match next.goals.first_mut() {
            Some(first) => first.tasks.push(task),
            None => next.goals.push(Goal {
                id: format!("goal-{}", now.timestamp_millis()),
                title: DEFAULT_GOAL_TITLE.to_string(),
                category,
                timeframe: Timeframe::Month,
                created_at: now.to_rfc3339(),
                tasks: vec![task],
            }),
        }
        next.refresh_stats();
        (next, true)
    }

    /// Cycles the status of one task (todo -> doing -> done -> todo),
    /// stamping or clearing its completion time.
    ///
    /// No-op when either id is unknown.
    pub fn advance_task_status(&self, goal_id: &str, task_id: &str) -> (State, bool) {
        let mut next = self.clone();
        let mut advanced = false;
        if let Some(task) = next
            .goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .and_then(|g| g.tasks.iter_mut().find(|t| t.id == task_id))
        {
            task.advance();
            advanced = true;
        }
        if !advanced {
            debug!("task {} not found in goal {}", task_id, goal_id);
            return (next, false);
        }
        next.refresh_stats();
        (next, true)
    }

    /// Removes one task from its goal. No-op when either id is unknown.
    pub fn delete_task(&self, goal_id: &str, task_id: &str) -> (State, bool) {
        let mut next = self.clone();
        let mut removed = false;
        if let Some(goal) = next.goals.iter_mut().find(|g| g.id == goal_id) {
            let len_before = goal.tasks.len();
            goal.tasks.retain(|t| t.id != task_id);
            removed = goal.tasks.len() != len_before;
        }
        if !removed {
            debug!("task {} not found in goal {}", task_id, goal_id);
            return (next, false);
        }
        next.refresh_stats();
        (next, true)
    }

    /// Removes a goal and every task it owns. No-op when the id is unknown.
    pub fn delete_goal(&self, goal_id: &str) -> (State, bool) {
        let mut next = self.clone();
        let len_before = next.goals.len();
        next.goals.retain(|g| g.id != goal_id);
        if next.goals.len() == len_before {
            debug!("goal {} not found", goal_id);
            return (next, false);
        }
        next.refresh_stats();
        (next, true)
    }

    /// Rebuilds the rolling-week stats from the current task collection.
    ///
    /// Always a full recomputation over the window starting today; stats
    /// are derived data and are never patched incrementally.
    fn refresh_stats(&mut self) {
        self.daily_stats = stats::daily_stats(self, Local::now().date_naive(), stats::STAT_WINDOW_DAYS);
    }
}

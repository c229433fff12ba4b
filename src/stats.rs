use chrono::{Duration, NaiveDate};

use crate::models::{Category, DailyStat, Goal, Priority, Status, Task};
use crate::store::State;

/// Length of the rolling daily-stats window, in calendar days.
pub const STAT_WINDOW_DAYS: usize = 7;

/// A task together with the goal that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TaskView<'a> {
    pub goal_id: &'a str,
    pub goal_title: &'a str,
    pub task: &'a Task,
}

/// Optional category/priority narrowing applied conjunctively;
/// `None` leaves that dimension unfiltered.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub category: Option<Category>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.category.map_or(true, |c| task.category == c)
            && self.priority.map_or(true, |p| task.priority == p)
    }
}

/// Flattens every goal's tasks into one stream, each annotated with its
/// owning goal.
pub fn all_tasks<'a>(state: &'a State) -> impl Iterator<Item = TaskView<'a>> + 'a {
    state.goals.iter().flat_map(|goal| {
        goal.tasks.iter().map(move |task| TaskView {
            goal_id: &goal.id,
            goal_title: &goal.title,
            task,
        })
    })
}

/// Tasks due exactly on `date`, narrowed by `filter`.
pub fn tasks_on_date(state: &State, date: NaiveDate, filter: TaskFilter) -> Vec<TaskView<'_>> {
    all_tasks(state)
        .filter(|v| v.task.due_date == date && filter.matches(v.task))
        .collect()
}

/// Per-day completion summary for `window_len` days starting at
/// `window_start` (inclusive).
///
/// A full O(days x tasks) recomputation. Callers rebuild this after every
/// mutation that can change task counts or statuses; there is no
/// incremental update path.
pub fn daily_stats(state: &State, window_start: NaiveDate, window_len: usize) -> Vec<DailyStat> {
    (0..window_len)
        .map(|offset| {
            let date = window_start + Duration::days(offset as i64);
            let mut stat = DailyStat { date, completed: 0, total: 0, hours_spent: 0.0 };
            for view in all_tasks(state) {
                if view.task.due_date != date {
                    continue;
                }
                stat.total += 1;
                if view.task.status == Status::Done {
                    stat.completed += 1;
                    stat.hours_spent += view.task.estimated_time;
                }
            }
            stat
        })
        .collect()
}

/// Percentage of all tasks that are done, `0.0` for an empty collection.
pub fn completion_rate(state: &State) -> f64 {
    let total = all_tasks(state).count();
    if total == 0 {
        return 0.0;
    }
    let completed = all_tasks(state).filter(|v| v.task.status == Status::Done).count();
    completed as f64 / total as f64 * 100.0
}

/// Completed/total counts for one category, across all due dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStat {
    pub category: Category,
    pub completed: usize,
    pub total: usize,
}

/// Counts per category in the fixed [`Category::ALL`] order, regardless of
/// due date.
pub fn category_breakdown(state: &State) -> Vec<CategoryStat> {
    Category::ALL
        .iter()
        .map(|&category| {
            let mut completed = 0;
            let mut total = 0;
            for view in all_tasks(state) {
                if view.task.category != category {
                    continue;
                }
                total += 1;
                if view.task.status == Status::Done {
                    completed += 1;
                }
            }
            CategoryStat { category, completed, total }
        })
        .collect()
}

/// Number of days in the window with at least one completed task.
///
/// Days do not need to be consecutive: one productive day followed by six
/// idle ones still counts 1. A run-based streak would behave differently;
/// this is deliberately the active-day count.
pub fn streak(daily_stats: &[DailyStat]) -> usize {
    daily_stats.iter().filter(|s| s.completed > 0).count()
}

/// Headline numbers for a dashboard header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub today_completed: usize,
    pub today_total: usize,
    pub completion_rate: f64,
    /// Sum of `estimated_time` over every completed task.
    pub hours_completed: f64,
    pub active_goals: usize,
    pub streak: usize,
}

/// Summarizes today's load and overall progress in one pass-friendly
/// struct. The streak comes from the state's stored window.
pub fn overview(state: &State, today: NaiveDate) -> Overview {
    let today_tasks = tasks_on_date(state, today, TaskFilter::default());
    Overview {
        today_completed: today_tasks.iter().filter(|v| v.task.status == Status::Done).count(),
        today_total: today_tasks.len(),
        completion_rate: completion_rate(state),
        hours_completed: all_tasks(state)
            .filter(|v| v.task.status == Status::Done)
            .map(|v| v.task.estimated_time)
            .sum(),
        active_goals: state.goals.len(),
        streak: streak(&state.daily_stats),
    }
}

/// Completion summary for a single goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub percent: f64,
}

pub fn goal_progress(goal: &Goal) -> GoalProgress {
    let total = goal.tasks.len();
    let completed = goal.tasks.iter().filter(|t| t.status == Status::Done).count();
    let in_progress = goal.tasks.iter().filter(|t| t.status == Status::Doing).count();
    let percent = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };
    GoalProgress { total, completed, in_progress, percent }
}

/// The `count` calendar days starting at `start` (inclusive), in order.
pub fn next_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count).map(|i| start + Duration::days(i as i64)).collect()
}

/// Human label for a timeline date: "Today", "Tomorrow", "Yesterday", or
/// a short weekday form like "Fri, Jan 5".
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

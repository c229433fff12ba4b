use chrono::{Duration, Local};

use crate::models::{Category, Priority, Status, Task, Timeframe};

/// Ordered five-step breakdown used for each goal category.
///
/// This lookup table is the entire "intelligence" of the decomposition:
/// plans are deterministic template substitution, not an adaptive planner.
fn step_names(category: Category) -> [&'static str; 5] {
    match category {
        Category::Work => [
            "Research and planning",
            "Build MVP",
            "Test with users",
            "Iterate and improve",
            "Launch",
        ],
        Category::Study => [
            "Create learning roadmap",
            "Study fundamentals",
            "Practice exercises",
            "Build project",
            "Review and test",
        ],
        Category::Health => [
            "Set baseline metrics",
            "Create routine",
            "Track daily progress",
            "Adjust plan",
            "Celebrate milestones",
        ],
        Category::Money => [
            "Analyze current state",
            "Set budget",
            "Track expenses",
            "Optimize spending",
            "Review monthly",
        ],
        Category::Personal => [
            "Define clear objective",
            "Break into steps",
            "Schedule time",
            "Execute consistently",
            "Reflect and adjust",
        ],
    }
}

/// Days between consecutive steps, sized to the nominal horizon of the
/// goal's timeframe.
fn spread_days(timeframe: Timeframe) -> i64 {
    match timeframe {
        Timeframe::Year => 60,
        Timeframe::Quarter => 20,
        Timeframe::Month => 7,
        Timeframe::Week | Timeframe::Day => 2,
    }
}

/// Decomposes a goal into its five-step plan.
///
/// For step index `i`, the task's timeframe starts at the goal's own
/// timeframe and zooms in by `i mod 3` positions, clamped at day-level;
/// due dates spread by [`spread_days`] per step; priority is high for the
/// first step, medium for the second, low after that; estimated effort
/// ramps from 2 to 6 hours.
///
/// The caller is responsible for a non-empty title. Ids combine the
/// generation timestamp with the step index; uniqueness per call is the
/// only contract, so two calls with identical arguments may produce
/// different ids and due dates.
pub fn generate_plan(goal_title: &str, category: Category, timeframe: Timeframe) -> Vec<Task> {
    let now = Local::now();
    let today = now.date_naive();
    let stamp = now.timestamp_millis();
    let start = timeframe.position();

    step_names(category)
        .iter()
        .enumerate()
        .map(|(i, step)| Task {
            id: format!("task-{}-{}", stamp, i),
            title: format!("{}: {}", goal_title, step),
            description: format!("AI-generated task for {}", goal_title),
            priority: if i == 0 {
                Priority::High
            } else if i < 2 {
                Priority::Medium
            } else {
                Priority::Low
            },
            status: Status::Todo,
            estimated_time: (2 + i) as f64,
            timeframe: Timeframe::ZOOM[(start + i % 3).min(Timeframe::ZOOM.len() - 1)],
            category,
            due_date: today + Duration::days(i as i64 * spread_days(timeframe)),
            ai_generated: true,
            completed_at: None,
        })
        .collect()
}

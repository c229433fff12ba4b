use std::collections::HashSet;

use chrono::{Duration, Local};
use smartgoals::models::{Category, Priority, Status, Timeframe};
use smartgoals::planner::generate_plan;

#[test]
fn test_plan_has_five_ai_todo_tasks() {
    let plan = generate_plan("Build my SaaS", Category::Work, Timeframe::Month);

    assert_eq!(plan.len(), 5);
    for task in &plan {
        assert!(task.ai_generated);
        assert_eq!(task.status, Status::Todo);
        assert!(task.completed_at.is_none());
        assert_eq!(task.category, Category::Work);
    }
}

#[test]
fn test_effort_ramps_from_two_to_six_hours() {
    let plan = generate_plan("Learn Next.js", Category::Study, Timeframe::Week);

    let hours: Vec<f64> = plan.iter().map(|t| t.estimated_time).collect();
    assert_eq!(hours, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_priority_front_loads_the_first_steps() {
    let plan = generate_plan("Save for a house", Category::Money, Timeframe::Year);

    let priorities: Vec<Priority> = plan.iter().map(|t| t.priority).collect();
    assert_eq!(
        priorities,
        vec![
            Priority::High,
            Priority::Medium,
            Priority::Low,
            Priority::Low,
            Priority::Low,
        ]
    );
}

#[test]
fn test_timeframes_zoom_in_and_wrap_every_three_steps() {
    let plan = generate_plan("Get fit", Category::Health, Timeframe::Month);

    let timeframes: Vec<Timeframe> = plan.iter().map(|t| t.timeframe).collect();
    assert_eq!(
        timeframes,
        vec![
            Timeframe::Month,
            Timeframe::Week,
            Timeframe::Day,
            Timeframe::Month,
            Timeframe::Week,
        ]
    );
}

#[test]
fn test_timeframes_clamp_at_day() {
    let plan = generate_plan("Daily review", Category::Personal, Timeframe::Day);

    assert!(plan.iter().all(|t| t.timeframe == Timeframe::Day));
}

#[test]
fn test_due_dates_spread_by_timeframe_unit() {
    let today = Local::now().date_naive();

    // month -> 7-day spacing
    let plan = generate_plan("Get fit", Category::Health, Timeframe::Month);
    for (i, task) in plan.iter().enumerate() {
        assert_eq!(task.due_date, today + Duration::days(i as i64 * 7));
    }

    // year -> 60-day spacing
    let plan = generate_plan("Get fit", Category::Health, Timeframe::Year);
    for (i, task) in plan.iter().enumerate() {
        assert_eq!(task.due_date, today + Duration::days(i as i64 * 60));
    }

    // week -> 2-day spacing
    let plan = generate_plan("Get fit", Category::Health, Timeframe::Week);
    for (i, task) in plan.iter().enumerate() {
        assert_eq!(task.due_date, today + Duration::days(i as i64 * 2));
    }
}

#[test]
fn test_titles_and_descriptions_reference_the_goal() {
    let plan = generate_plan("Get fit", Category::Health, Timeframe::Month);

    assert_eq!(plan[0].title, "Get fit: Set baseline metrics");
    assert_eq!(plan[4].title, "Get fit: Celebrate milestones");
    for task in &plan {
        assert!(task.title.starts_with("Get fit: "));
        assert_eq!(task.description, "AI-generated task for Get fit");
    }
}

#[test]
fn test_ids_are_unique_within_a_plan() {
    let plan = generate_plan("Get fit", Category::Health, Timeframe::Month);

    let ids: HashSet<&str> = plan.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 5);
}

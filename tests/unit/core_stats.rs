/// Unit tests for the statistics core through the public API
use chrono::NaiveDate;

use habit_board::dates::{day_id, days_before, last_n_days_from, parse_day_id};
use habit_board::{
    current_streak, Category, CompletionWindow, DashboardStats, Habit, HabitId, HabitLog,
    ProgressSeries, UserId,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn habit(owner: &UserId, title: &str) -> Habit {
    Habit::new(
        owner.clone(),
        title.to_string(),
        None,
        Category::Health,
        "daily".to_string(),
        "green".to_string(),
        "activity".to_string(),
    )
    .unwrap()
}

fn log_on(habit_id: &HabitId, owner: &UserId, d: NaiveDate) -> HabitLog {
    HabitLog::new(habit_id.clone(), owner.clone(), d, None).unwrap()
}

#[test]
fn day_identifiers_round_trip_and_sort() {
    for d in [day(2024, 1, 1), day(2024, 2, 29), day(2023, 12, 31)] {
        assert_eq!(parse_day_id(&day_id(d)).unwrap(), d);
    }
    assert!(day_id(day(2023, 12, 31)) < day_id(day(2024, 1, 1)));
}

#[test]
fn days_before_walks_the_calendar() {
    let d = day(2024, 3, 1);
    assert_eq!(days_before(d, 0), d);
    assert_eq!(days_before(d, 1), day(2024, 2, 29));

    let window = last_n_days_from(d, 30);
    assert_eq!(window.len(), 30);
    assert_eq!(*window.last().unwrap(), d);
    for pair in window.windows(2) {
        assert_eq!(days_before(pair[1], 1), pair[0]);
    }
}

#[test]
fn streak_requires_a_completion_today() {
    let owner = UserId::new();
    let h = habit(&owner, "Read");
    let today = day(2024, 6, 15);

    // Every day except today: the gap at the most recent end caps at 0.
    let logs: Vec<HabitLog> = (1..=30)
        .map(|i| log_on(&h.id, &owner, days_before(today, i)))
        .collect();
    let window = CompletionWindow::new(logs);
    assert_eq!(current_streak(&h.id, &window, today), 0);

    // Last 4 days including today, nothing 5 days ago.
    let logs: Vec<HabitLog> = (0..4)
        .map(|i| log_on(&h.id, &owner, days_before(today, i)))
        .collect();
    let window = CompletionWindow::new(logs);
    assert_eq!(current_streak(&h.id, &window, today), 4);
}

#[test]
fn two_habit_scenario_matches_reference() {
    // habits = [A, B], A completed today, B not.
    let owner = UserId::new();
    let today = day(2024, 6, 15);
    let a = habit(&owner, "A");
    let b = habit(&owner, "B");
    let window = CompletionWindow::new(vec![log_on(&a.id, &owner, today)]);

    let stats = DashboardStats::compute(&[a, b], &window, today);
    assert_eq!(stats.today_completed, 1);
    assert_eq!(stats.completion_rate, 50);
}

#[test]
fn series_scenario_matches_reference() {
    // 2 active habits, 1 completion 3 days ago: that day 50, others 0.
    let owner = UserId::new();
    let today = day(2024, 6, 15);
    let a = habit(&owner, "A");
    let b = habit(&owner, "B");
    let target_day = days_before(today, 3);
    let window = CompletionWindow::new(vec![log_on(&a.id, &owner, target_day)]);

    let series = ProgressSeries::build(&[a, b], &window, today);
    assert_eq!(series.points.len(), 7);
    for point in &series.points {
        let expected = if point.day == target_day { 50 } else { 0 };
        assert_eq!(point.percent, expected, "day {}", point.day);
    }
}

#[test]
fn completion_rate_covers_all_ratios() {
    let owner = UserId::new();
    let today = day(2024, 6, 15);

    for n in 1..=8usize {
        let habits: Vec<Habit> = (0..n).map(|i| habit(&owner, &format!("h{i}"))).collect();
        for k in 0..=n {
            let logs: Vec<HabitLog> = habits[..k]
                .iter()
                .map(|h| log_on(&h.id, &owner, today))
                .collect();
            let stats =
                DashboardStats::compute(&habits, &CompletionWindow::new(logs), today);
            let expected = (k as f64 / n as f64 * 100.0).round() as u32;
            assert_eq!(stats.completion_rate, expected, "k={k} n={n}");
        }
    }
}

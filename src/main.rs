/// Main entry point for the habit-board CLI
///
/// Sets up logging, resolves the data directory and session identity, opens
/// the SQLite store, and dispatches the subcommand against the dashboard.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use habit_board::domain::{palette_for, Category, HabitPatch};
use habit_board::{Dashboard, NewHabit, Session, SqliteStore};

/// Get the default data directory with a fallback strategy
fn default_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_dirs = [
        dirs::data_dir().map(|mut p| {
            p.push("habit-board");
            p
        }),
        dirs::home_dir().map(|mut p| {
            p.push(".habit-board");
            p
        }),
    ];

    for dir in potential_dirs.iter().flatten() {
        if std::fs::create_dir_all(dir).is_ok() {
            return Ok(dir.clone());
        }
    }

    // Last resort: a temporary directory
    let mut temp = std::env::temp_dir();
    temp.push("habit-board");
    std::fs::create_dir_all(&temp)?;
    tracing::warn!("Using temporary directory for data: {}", temp.display());
    Ok(temp)
}

/// Command line arguments for habit-board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the dashboard (default)
    Show {
        /// Emit the dashboard as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Create a new habit
    Add {
        /// Habit title
        title: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
        /// Category (Health, Productivity, Learning, Social, Finance, Mindfulness, Other)
        #[arg(short, long, default_value = "Health")]
        category: String,
        /// Free-form target frequency text
        #[arg(short, long, default_value = "daily")]
        frequency: String,
        /// Color tag (unknown tags fall back to blue)
        #[arg(long, default_value = "blue")]
        color: String,
        /// Icon tag
        #[arg(long, default_value = "target")]
        icon: String,
    },
    /// Toggle today's completion for a habit
    Done {
        /// Habit ID or unique prefix
        habit: String,
    },
    /// Edit a habit's fields
    Edit {
        /// Habit ID or unique prefix
        habit: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        frequency: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete a habit (it stays in the store, marked inactive)
    Remove {
        /// Habit ID or unique prefix
        habit: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_board={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let data_dir = default_data_dir()?;
    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => data_dir.join("habits.db"),
    };

    info!("Using database at: {}", db_path.display());

    let session = Session::resolve(&data_dir)?;
    let store = Arc::new(SqliteStore::new(db_path)?);
    let mut dashboard = Dashboard::new(store, session.user_id);
    dashboard.reload().await?;

    match args.command.unwrap_or(Command::Show { json: false }) {
        Command::Show { json } => {
            if json {
                print_json(&dashboard)?;
            } else {
                render_dashboard(&dashboard);
            }
        }
        Command::Add {
            title,
            description,
            category,
            frequency,
            color,
            icon,
        } => {
            let id = dashboard
                .add_habit(NewHabit {
                    title,
                    description,
                    category: Category::parse(&category),
                    target_frequency: frequency,
                    // Normalize through the palette so unknown tags persist
                    // as the default rather than an arbitrary string.
                    color: palette_for(&color).tag.to_string(),
                    icon,
                })
                .await?;
            println!("Created habit {}", short_id(&id.to_string()));
            render_dashboard(&dashboard);
        }
        Command::Done { habit } => {
            let id = resolve_habit(&dashboard, &habit)?;
            let completed = dashboard.toggle_today(&id).await?;
            if completed {
                println!("Marked complete for today.");
            } else {
                println!("Unmarked today's completion.");
            }
            render_dashboard(&dashboard);
        }
        Command::Edit {
            habit,
            title,
            description,
            category,
            frequency,
            color,
            icon,
        } => {
            let id = resolve_habit(&dashboard, &habit)?;
            let patch = HabitPatch {
                title,
                description: description.map(Some),
                category: category.as_deref().map(Category::parse),
                target_frequency: frequency,
                color: color.map(|c| palette_for(&c).tag.to_string()),
                icon,
                is_active: None,
            };
            if patch.is_empty() {
                println!("Nothing to change.");
            } else {
                dashboard.edit_habit(&id, patch).await?;
                println!("Updated.");
                render_dashboard(&dashboard);
            }
        }
        Command::Remove { habit } => {
            let id = resolve_habit(&dashboard, &habit)?;
            dashboard.archive_habit(&id).await?;
            println!("Removed.");
            render_dashboard(&dashboard);
        }
    }

    Ok(())
}

/// Resolve a habit argument (full ID or unique prefix) against the snapshot
fn resolve_habit(
    dashboard: &Dashboard,
    arg: &str,
) -> Result<habit_board::HabitId, Box<dyn std::error::Error>> {
    dashboard
        .find_by_prefix(arg)
        .map(|h| h.id.clone())
        .ok_or_else(|| format!("no unique habit matches '{}'", arg).into())
}

fn short_id(id: &str) -> &str {
    &id[..8.min(id.len())]
}

/// Emit the dashboard as a JSON document for scripting
fn print_json(dashboard: &Dashboard) -> Result<(), Box<dyn std::error::Error>> {
    let habits: Vec<serde_json::Value> = dashboard
        .habits()
        .iter()
        .map(|habit| {
            serde_json::json!({
                "id": habit.id.to_string(),
                "title": habit.title,
                "category": habit.category.display_name(),
                "color": habit.color,
                "icon": habit.icon,
                "completed_today": dashboard.is_completed_today(&habit.id),
                "streak": dashboard.streak_for(&habit.id),
            })
        })
        .collect();

    let doc = serde_json::json!({
        "stats": dashboard.stats(),
        "progress": dashboard.progress(),
        "habits": habits,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Print the dashboard: aggregate stats, the 7-day chart, and habit cards
fn render_dashboard(dashboard: &Dashboard) {
    let stats = dashboard.stats();

    println!();
    println!(
        "  Today: {}/{}   Rate: {}%   Longest streak: {} days",
        stats.today_completed, stats.total_active, stats.completion_rate, stats.longest_streak
    );
    println!();

    // 7-day progress, one bar per day
    for point in &dashboard.progress().points {
        let filled = (point.percent as usize) / 5; // 20 cells = 100%
        println!(
            "  {} {:>3}% {}",
            point.label,
            point.percent,
            "█".repeat(filled)
        );
    }
    println!();

    if dashboard.habits().is_empty() {
        println!("  No habits yet. Add one with: habit-board add <title>");
        return;
    }

    for habit in dashboard.habits() {
        let mark = if dashboard.is_completed_today(&habit.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let streak = dashboard.streak_for(&habit.id);
        let palette = palette_for(&habit.color);

        print!(
            "  {} \x1b[38;5;{}m{}\x1b[0m ({})",
            mark,
            palette.ansi,
            habit.title,
            short_id(&habit.id.to_string())
        );
        if streak > 0 {
            print!("  🔥{}", streak);
        }
        println!();
        if let Some(ref description) = habit.description {
            println!("      {}", description);
        }
        println!(
            "      {} · {}",
            habit.category.display_name(),
            habit.target_frequency
        );
    }
    println!();
}

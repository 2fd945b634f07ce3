//! Terminal views over the event store.
//!
//! Every view is a pure function of the store (plus config), returning the
//! text to print. Colors come from owo_colors.

use calgrid_core::cursor::{month_name, MONTH_NAMES};
use calgrid_core::form::FormErrors;
use calgrid_core::query::{self, WeekStart};
use calgrid_core::{CalendarStore, Event};
use chrono::Datelike;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    /// Day panel card
    fn render(&self) -> String {
        let mut lines = vec![format!("  {}", self.title.bold())];
        if let Some(time) = &self.time {
            if self.is_all_day() {
                lines.push(format!("    {}", time.magenta()));
            } else {
                lines.push(format!("    {}", time.cyan()));
            }
        }
        if let Some(description) = &self.description {
            lines.push(format!("    {}", description.dimmed()));
        }
        lines.join("\n")
    }
}

impl Render for FormErrors {
    fn render(&self) -> String {
        self.messages()
            .into_iter()
            .map(|(field, message)| format!("  {} {}", format!("{}:", field).dimmed(), message.red()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Event dots shown per grid cell before collapsing into "+"
const MAX_DOTS: usize = 3;

/// Width of one grid cell
const CELL_WIDTH: usize = 6;

pub fn render_header(user_name: &str) -> String {
    format!("{} {}   {}", " C ".reversed(), "Calendar".bold(), user_name.dimmed())
}

/// Year with its twelve months and event count badges.
pub fn render_sidebar(store: &CalendarStore) -> String {
    let viewed = store.viewed_month();
    let counts = query::month_event_counts(store.events(), viewed.year());

    let mut lines = vec![format!("  {} {} {}", "‹".dimmed(), viewed.year().bold(), "›".dimmed())];

    for (index, name) in MONTH_NAMES.iter().enumerate() {
        let badge = match counts[index] {
            0 => String::new(),
            n => n.to_string(),
        };
        let row = format!("{:<12}{:>5}", name, badge);

        if index as u32 == viewed.month0() {
            lines.push(format!("{} {}", "▸".green(), row.green().bold()));
        } else {
            lines.push(format!("  {}", row));
        }
    }

    lines.join("\n")
}

/// Six-week grid for the viewed month.
pub fn render_grid(store: &CalendarStore, week_start: WeekStart) -> String {
    let viewed = store.viewed_month();
    let title = format!(
        "{} {}",
        month_name(viewed.month0()).unwrap_or_default(),
        viewed.year()
    );

    let mut lines = vec![title.bold().to_string()];

    lines.push(
        query::weekday_labels(week_start)
            .iter()
            .map(|label| format!("{:<width$}", label, width = CELL_WIDTH))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    let days = query::month_grid_days_with(viewed, week_start);
    for week in days.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| {
                let count = query::events_on_day(store.events(), cell.date).len();
                let text = format!("{:>2}{:<width$}", cell.date.day(), dots(count), width = CELL_WIDTH - 2);

                if cell.date == store.selected_day() {
                    text.reversed().to_string()
                } else if !cell.in_viewed_month {
                    text.dimmed().to_string()
                } else {
                    text
                }
            })
            .collect();
        lines.push(row);
    }

    lines.join("\n")
}

fn dots(count: usize) -> String {
    if count > MAX_DOTS {
        format!("{}+", "•".repeat(MAX_DOTS - 1))
    } else {
        "•".repeat(count)
    }
}

/// Selected day title and its events.
pub fn render_day_panel(store: &CalendarStore) -> String {
    let day = store.selected_day();
    let mut lines = vec![
        day.format("%-d of %B").to_string().bold().to_string(),
        day.format("%A").to_string().dimmed().to_string(),
        String::new(),
    ];

    let events = store.selected_day_events();
    if events.is_empty() {
        lines.push(format!("  {}", "No events for this day.".dimmed()));
    } else {
        lines.extend(events.iter().map(|e| e.render()));
    }

    lines.join("\n")
}

/// Full screen: header, sidebar, grid and day panel.
pub fn render_screen(store: &CalendarStore, user_name: &str, week_start: WeekStart) -> String {
    [
        render_header(user_name),
        render_sidebar(store),
        render_grid(store, week_start),
        render_day_panel(store),
    ]
    .join("\n\n")
}

/// Title and message of the delete confirmation.
pub fn render_delete_prompt(event: &Event) -> String {
    format!(
        "{}\n  Are you sure you want to delete \"{}\"? This cannot be undone.",
        "Delete Event".red().bold(),
        event.title
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> CalendarStore {
        let events = vec![
            Event::with_id("1", "Meeting", date(2026, 6, 15)).with_time("10:00"),
            Event::with_id("2", "Dinner", date(2026, 6, 15)).with_description("Bring wine"),
            Event::with_id("3", "Trip", date(2026, 3, 2)),
        ];
        CalendarStore::new(events, date(2026, 6, 15))
    }

    #[test]
    fn day_panel_lists_events() {
        let panel = render_day_panel(&store());

        assert!(panel.contains("15 of June"));
        assert!(panel.contains("Monday"));
        assert!(panel.contains("Meeting"));
        assert!(panel.contains("10:00"));
        assert!(panel.contains("Bring wine"));
    }

    #[test]
    fn all_day_time_is_styled_apart() {
        let trip = Event::with_id("4", "Ski Trip", date(2026, 2, 15)).with_time("All Day");
        let meeting = Event::with_id("5", "Meeting", date(2026, 2, 15)).with_time("10:00");

        assert!(trip.render().contains(&"All Day".magenta().to_string()));
        assert!(meeting.render().contains(&"10:00".cyan().to_string()));
    }

    #[test]
    fn day_panel_empty_state() {
        let mut store = store();
        store.set_selected_day(date(2026, 6, 16));

        assert!(render_day_panel(&store).contains("No events for this day."));
    }

    #[test]
    fn sidebar_shows_year_months_and_badges() {
        let sidebar = render_sidebar(&store());

        assert!(sidebar.contains("2026"));
        assert!(sidebar.contains("January"));
        assert!(sidebar.contains("December"));
        assert_eq!(sidebar.lines().count(), 13);

        let june = sidebar.lines().find(|l| l.contains("June")).unwrap();
        assert!(june.contains(&format!("{:<12}{:>5}", "June", 2)));
        assert!(june.contains('▸'));
    }

    #[test]
    fn grid_has_title_header_and_six_weeks() {
        let grid = render_grid(&store(), WeekStart::Monday);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("June 2026"));
        assert!(lines[1].contains("MON"));
        assert!(grid.contains("••"));
    }

    #[test]
    fn dots_collapse() {
        assert_eq!(dots(0), "");
        assert_eq!(dots(3), "•••");
        assert_eq!(dots(9), "••+");
    }

    #[test]
    fn form_errors_render_per_field() {
        let errors = FormErrors {
            title: Some("Title is required".into()),
            time: Some("End time must be after start time".into()),
            ..FormErrors::default()
        };

        let text = errors.render();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Title is required"));
    }

    #[test]
    fn delete_prompt_names_event() {
        let event = Event::with_id("1", "Meeting", date(2026, 6, 15));
        assert!(render_delete_prompt(&event).contains("\"Meeting\""));
    }
}

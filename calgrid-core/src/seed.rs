//! Seed data providers.
//!
//! A seed provider is consulted exactly once, when the store is built, and
//! hands over the initial event collection.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::ALL_DAY;
use crate::event::Event;

/// Produces the event collection present at session start.
pub trait SeedProvider {
    fn events(&self) -> Vec<Event>;
}

/// A fixed collection
impl SeedProvider for Vec<Event> {
    fn events(&self) -> Vec<Event> {
        self.clone()
    }
}

/// Which provider a session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedKind {
    /// A generated year of daily routines
    #[default]
    YearPlan,
    /// Four events around today
    Sample,
    Empty,
}

impl FromStr for SeedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year-plan" => Ok(SeedKind::YearPlan),
            "sample" => Ok(SeedKind::Sample),
            "empty" => Ok(SeedKind::Empty),
            other => Err(format!(
                "Unknown seed kind '{}'. Expected one of: year-plan, sample, empty",
                other
            )),
        }
    }
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedKind::YearPlan => write!(f, "year-plan"),
            SeedKind::Sample => write!(f, "sample"),
            SeedKind::Empty => write!(f, "empty"),
        }
    }
}

/// Build the provider for `kind`.
pub fn provider_for(
    kind: SeedKind,
    year: i32,
    rng_seed: Option<u64>,
    today: NaiveDate,
) -> Box<dyn SeedProvider> {
    match kind {
        SeedKind::YearPlan => Box::new(YearPlanSeed { year, rng_seed }),
        SeedKind::Sample => Box::new(SampleSeed { today }),
        SeedKind::Empty => Box::new(Vec::<Event>::new()),
    }
}

// =============================================================================
// Sample: a handful of events around today
// =============================================================================

pub struct SampleSeed {
    pub today: NaiveDate,
}

impl SeedProvider for SampleSeed {
    fn events(&self) -> Vec<Event> {
        let sample = [
            (0, "Work Time", "09:00 - 15:30"),
            (1, "Coffee Time at Frozen Coffee Shop", "19:00 - 20:00"),
            (3, "Product Design Congress", "12:00 - 14:00"),
            (15, "Fishing with family", "06:00 - 10:00"),
        ];

        sample
            .iter()
            .enumerate()
            .filter_map(|(i, (offset, title, time))| {
                let date = self.today.checked_add_days(Days::new(*offset))?;
                Some(Event::with_id((i + 1).to_string(), *title, date).with_time(*time))
            })
            .collect()
    }
}

// =============================================================================
// Year plan: generated daily routines
// =============================================================================

const MORNING_SPORTS: [&str; 5] = [
    "Tennis Match",
    "Swimming Session",
    "Bike Ride",
    "Gym Workout",
    "Yoga Morning",
];

/// A year of plausible daily routines. With `rng_seed` set the output is
/// reproducible.
pub struct YearPlanSeed {
    pub year: i32,
    pub rng_seed: Option<u64>,
}

impl SeedProvider for YearPlanSeed {
    fn events(&self) -> Vec<Event> {
        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let Some(first_day) = NaiveDate::from_ymd_opt(self.year, 1, 1) else {
            return Vec::new();
        };

        let mut plan = YearPlan::default();
        for day in first_day.iter_days().take_while(|d| d.year() == self.year) {
            plan.fill_day(day, &mut rng);
        }
        plan.events
    }
}

#[derive(Default)]
struct YearPlan {
    events: Vec<Event>,
    next_id: u64,
}

impl YearPlan {
    fn push(&mut self, title: &str, date: NaiveDate, time: &str) {
        self.next_id += 1;
        self.events
            .push(Event::with_id(self.next_id.to_string(), title, date).with_time(time));
    }

    fn fill_day(&mut self, day: NaiveDate, rng: &mut StdRng) {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);

        if rng.gen_bool(0.7) {
            let sport = MORNING_SPORTS[rng.gen_range(0..MORNING_SPORTS.len())];
            self.push(sport, day, "07:00 - 08:30");
        }

        self.push("Breakfast", day, "08:30 - 09:00");
        if weekend {
            self.push("Family Lunch", day, "13:00 - 14:30");
        } else {
            self.push("Lunch with Team", day, "12:30 - 13:30");
        }
        if rng.gen_bool(0.6) {
            let dinner = if weekend { "Family Dinner" } else { "Dinner with Wife" };
            self.push(dinner, day, "19:30 - 21:00");
        }

        if !weekend {
            self.push("Daily Stand-up", day, "10:00 - 10:30");
            if rng.gen_bool(0.5) {
                self.push("Client Meeting", day, "14:00 - 15:00");
            }
            if rng.gen_bool(0.4) {
                self.push("Project Review", day, "16:00 - 17:00");
            }
        }

        if weekend {
            if rng.gen_bool(0.6) {
                self.push("Meeting with Parents", day, "11:00 - 13:00");
            }
            self.push("Evening with Wife", day, "19:00 - 22:00");
        } else if rng.gen_bool(0.4) {
            self.push("Drinks with Friends", day, "19:30 - 21:30");
        }

        if day.month() == 7 && (10..=17).contains(&day.day()) {
            self.push("Summer Vacation", day, ALL_DAY);
        }
        if day.month() == 2 && (15..=20).contains(&day.day()) {
            self.push("Ski Trip", day, ALL_DAY);
        }
    }
}

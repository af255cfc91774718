use std::path::Path;

use crate::dataset::{
    aggregate::{choropleth, win_counts, winning_countries},
    load_dataset, ChoroplethEntry, CountryWinCount, DatasetError, MatchRecord,
};

pub const DASHBOARD_TITLE: &str = "FIFA World Cup Dashboard";
pub const MAP_TITLE: &str = "World Cup Wins by Country";
pub const MAP_COLOR_SCALE: &str = "Reds";

/*
 * Dashboard
 * ---------
 * The finals and their win counts, built once at start-up and only ever read
 * afterwards. Every panel of the dashboard is answered from here.
 */
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<MatchRecord>,
    win_counts: Vec<CountryWinCount>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum WinsLookup {
    NotSelected,
    Found { country: String, wins: u32 },
    Unknown(String),
}

impl WinsLookup {
    /// User-facing panel text. A single title reads "1 time" rather than
    /// "1 times".
    pub fn message(&self) -> String {
        match self {
            WinsLookup::NotSelected => {
                "Please select a country to see the number of wins.".to_string()
            }
            WinsLookup::Found { country, wins: 1 } => {
                format!("{} has won the World Cup 1 time.", country)
            }
            WinsLookup::Found { country, wins } => {
                format!("{} has won the World Cup {} times.", country, wins)
            }
            WinsLookup::Unknown(_) => "No data available for this country.".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum YearLookup<'a> {
    NotSelected,
    Found(&'a MatchRecord),
    NotFound(i64),
}

impl YearLookup<'_> {
    pub fn message(&self) -> String {
        match self {
            YearLookup::NotSelected => {
                "Please select a year to see the World Cup final details.".to_string()
            }
            YearLookup::Found(record) => detail_lines(record).join("\n"),
            YearLookup::NotFound(_) => "No data available for this year.".to_string(),
        }
    }
}

impl Dashboard {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        let win_counts = win_counts(&records);
        Dashboard {
            records,
            win_counts,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Ok(Dashboard::new(load_dataset(path)?))
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn win_counts(&self) -> &[CountryWinCount] {
        &self.win_counts
    }

    /// Exact, case-sensitive lookup. An empty name counts as no selection.
    pub fn wins_for_country(&self, country: Option<&str>) -> WinsLookup {
        let country = match country {
            Some(country) if !country.is_empty() => country,
            _ => return WinsLookup::NotSelected,
        };
        match self.win_counts.iter().find(|c| c.country == country) {
            Some(count) => WinsLookup::Found {
                country: count.country.clone(),
                wins: count.wins,
            },
            None => WinsLookup::Unknown(country.to_string()),
        }
    }

    /// Any integer is a valid query; years no final was played in, including
    /// ones no record could hold, are `NotFound`.
    pub fn details_for_year(&self, year: Option<i64>) -> YearLookup<'_> {
        let year = match year {
            Some(year) => year,
            None => return YearLookup::NotSelected,
        };
        match self.records.iter().find(|r| i64::from(r.year) == year) {
            Some(record) => YearLookup::Found(record),
            None => YearLookup::NotFound(year),
        }
    }

    /// Country dropdown, most titles first.
    pub fn country_options(&self) -> Vec<&str> {
        self.win_counts.iter().map(|c| c.country.as_str()).collect()
    }

    /// Year dropdown, in dataset order.
    pub fn year_options(&self) -> Vec<u16> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn winning_countries(&self) -> Vec<String> {
        winning_countries(&self.win_counts)
    }

    pub fn choropleth(&self) -> Vec<ChoroplethEntry> {
        choropleth(&self.win_counts)
    }
}

pub fn detail_lines(record: &MatchRecord) -> Vec<String> {
    vec![
        format!("Winner: {}", record.winner),
        format!("Runner-up: {}", record.runner_up),
        format!("Score: {}", record.score),
        format!("Venue: {}", record.venue),
        format!("Location: {}", record.location),
        format!("Attendance: {}", with_thousands_separators(record.attendance)),
    ]
}

pub fn with_thousands_separators(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

use serde::{Deserialize, Serialize};

use crate::dataset::{countries::iso_code_for, loader::MatchRecord};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryWinCount {
    pub country: String,
    pub wins: u32,
    pub iso_code: Option<String>,
}

/// One shaded region of the wins map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChoroplethEntry {
    pub iso_code: String,
    pub country: String,
    pub wins: u32,
}

/// Counts titles per winning country, most titles first. Countries with the
/// same number of titles keep the order in which they first won.
pub fn win_counts(records: &[MatchRecord]) -> Vec<CountryWinCount> {
    let mut counts: Vec<CountryWinCount> = vec![];
    for record in records {
        match counts.iter_mut().find(|c| c.country == record.winner) {
            Some(count) => count.wins += 1,
            None => counts.push(CountryWinCount {
                country: record.winner.clone(),
                wins: 1,
                iso_code: iso_code_for(&record.winner).map(str::to_string),
            }),
        }
    }
    // Stable sort keeps first-win order for ties.
    counts.sort_by(|a, b| b.wins.cmp(&a.wins));
    counts
}

pub fn winning_countries(counts: &[CountryWinCount]) -> Vec<String> {
    let mut countries: Vec<String> = counts.iter().map(|c| c.country.clone()).collect();
    countries.sort();
    countries
}

pub fn choropleth(counts: &[CountryWinCount]) -> Vec<ChoroplethEntry> {
    counts
        .iter()
        .filter_map(|c| {
            c.iso_code.as_ref().map(|iso_code| ChoroplethEntry {
                iso_code: iso_code.clone(),
                country: c.country.clone(),
                wins: c.wins,
            })
        })
        .collect()
}

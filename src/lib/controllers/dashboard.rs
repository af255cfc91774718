use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    dashboard::{
        detail_lines, Dashboard, WinsLookup, YearLookup, DASHBOARD_TITLE, MAP_COLOR_SCALE,
        MAP_TITLE,
    },
    dataset::{ChoroplethEntry, MatchRecord},
    telemetry::{info, LogKey, StatsD},
};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MapResponse {
    pub title: String,
    pub location_mode: String,
    pub color_scale: String,
    pub entries: Vec<ChoroplethEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OverviewResponse {
    pub title: String,
    pub map: MapResponse,
    pub winners: Vec<String>,
    pub country_options: Vec<String>,
    pub year_options: Vec<u16>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WinnersResponse {
    pub winners: Vec<String>,
}

#[derive(Deserialize)]
pub struct WinsQuery {
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WinsResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
}

// Year stays a string here so a non-numeric value gets our own 400 body.
#[derive(Deserialize)]
pub struct FinalsQuery {
    pub year: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FinalsResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MatchRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
}

fn map_response(dashboard: &Dashboard) -> MapResponse {
    MapResponse {
        title: MAP_TITLE.to_string(),
        location_mode: "ISO-3".to_string(),
        color_scale: MAP_COLOR_SCALE.to_string(),
        entries: dashboard.choropleth(),
    }
}

#[tracing::instrument(name = "request-index", skip(dashboard))]
pub async fn index(dashboard: web::Data<Dashboard>) -> HttpResponse {
    info(&LogKey::RequestIndexSuccess, "");
    HttpResponse::Ok().json(OverviewResponse {
        title: DASHBOARD_TITLE.to_string(),
        map: map_response(&dashboard),
        winners: dashboard.winning_countries(),
        country_options: dashboard
            .country_options()
            .into_iter()
            .map(str::to_string)
            .collect(),
        year_options: dashboard.year_options(),
    })
}

pub async fn map(dashboard: web::Data<Dashboard>) -> HttpResponse {
    HttpResponse::Ok().json(map_response(&dashboard))
}

pub async fn winners(dashboard: web::Data<Dashboard>) -> HttpResponse {
    HttpResponse::Ok().json(WinnersResponse {
        winners: dashboard.winning_countries(),
    })
}

#[tracing::instrument(name = "wins-for-country", skip(query, dashboard, statsd))]
pub async fn wins(
    query: web::Query<WinsQuery>,
    dashboard: web::Data<Dashboard>,
    statsd: web::Data<StatsD>,
) -> HttpResponse {
    let lookup = dashboard.wins_for_country(query.country.as_deref());
    let message = lookup.message();
    match lookup {
        WinsLookup::NotSelected => {
            statsd.incr(&LogKey::WinsLookup, "not-selected");
            HttpResponse::Ok().json(WinsResponse {
                message,
                wins: None,
            })
        }
        WinsLookup::Found { wins, .. } => {
            statsd.incr(&LogKey::WinsLookup, "found");
            HttpResponse::Ok().json(WinsResponse {
                message,
                wins: Some(wins),
            })
        }
        WinsLookup::Unknown(country) => {
            tracing::info!(
                r#type = LogKey::WinsLookup.to_string().as_str(),
                country = country.as_str(),
                "No wins recorded for country"
            );
            statsd.incr(&LogKey::WinsLookup, "unknown");
            HttpResponse::NotFound().json(WinsResponse {
                message,
                wins: None,
            })
        }
    }
}

#[tracing::instrument(name = "details-for-year", skip(query, dashboard, statsd))]
pub async fn finals(
    query: web::Query<FinalsQuery>,
    dashboard: web::Data<Dashboard>,
    statsd: web::Data<StatsD>,
) -> HttpResponse {
    let year = match query.year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(year) => Some(year),
            Err(_) => {
                statsd.incr(&LogKey::YearLookup, "invalid");
                return HttpResponse::BadRequest().json(FinalsResponse {
                    message: "Year must be a number.".to_string(),
                    details: None,
                    lines: vec![],
                });
            }
        },
    };
    let lookup = dashboard.details_for_year(year);
    let message = lookup.message();
    match lookup {
        YearLookup::NotSelected => {
            statsd.incr(&LogKey::YearLookup, "not-selected");
            HttpResponse::Ok().json(FinalsResponse {
                message,
                details: None,
                lines: vec![],
            })
        }
        YearLookup::Found(record) => {
            statsd.incr(&LogKey::YearLookup, "found");
            HttpResponse::Ok().json(FinalsResponse {
                message,
                details: Some(record.clone()),
                lines: detail_lines(record),
            })
        }
        YearLookup::NotFound(_) => {
            statsd.incr(&LogKey::YearLookup, "not-found");
            HttpResponse::NotFound().json(FinalsResponse {
                message,
                details: None,
                lines: vec![],
            })
        }
    }
}

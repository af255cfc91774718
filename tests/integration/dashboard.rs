use crate::integration::utils::{random_simple_ascii_string, send_get_request, spawn_app};
use lib::controllers::dashboard::{
    FinalsResponse, MapResponse, OverviewResponse, WinnersResponse, WinsResponse,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn index_get() {
    let app = spawn_app().await;
    let r = send_get_request(&app, "/").await;
    assert_eq!(r.status(), 200);
    let body: OverviewResponse = r.json().await.expect("Couldn't get JSON.");
    assert_eq!(body.title, "FIFA World Cup Dashboard");
    assert_eq!(
        body.country_options,
        vec![
            "Brazil",
            "Italy",
            "Germany",
            "Argentina",
            "Uruguay",
            "France",
            "England",
            "Spain"
        ]
    );
    assert_eq!(body.year_options.first(), Some(&1930));
    assert_eq!(body.map.entries.len(), body.winners.len());
}

#[tokio::test]
async fn map_get() {
    let app = spawn_app().await;
    let r = send_get_request(&app, "/map").await;
    assert_eq!(r.status(), 200);
    let body: MapResponse = r.json().await.expect("Couldn't get JSON.");
    let total: u32 = body.entries.iter().map(|e| e.wins).sum();
    assert_eq!(total, 22);
    let germany = body
        .entries
        .iter()
        .find(|e| e.iso_code == "DEU")
        .expect("Germany missing from map.");
    assert_eq!(germany.wins, 4);
}

#[tokio::test]
async fn winners_get() {
    let app = spawn_app().await;
    let r = send_get_request(&app, "/winners").await;
    assert_eq!(r.status(), 200);
    let body: WinnersResponse = r.json().await.expect("Couldn't get JSON.");
    assert_eq!(
        body.winners,
        vec![
            "Argentina",
            "Brazil",
            "England",
            "France",
            "Germany",
            "Italy",
            "Spain",
            "Uruguay"
        ]
    );
}

#[tokio::test]
async fn wins_get() {
    let app = spawn_app().await;
    let test_cases = [
        ("Brazil", 5),
        ("Germany", 4),
        ("Italy", 4),
        ("Argentina", 3),
        ("England", 1),
    ];
    for (country, expected) in test_cases {
        let r = send_get_request(&app, &format!("/wins?country={}", country)).await;
        assert_eq!(r.status(), 200, "Failed on {}", country);
        let body: WinsResponse = r.json().await.expect("Couldn't get JSON.");
        assert_eq!(body.wins, Some(expected), "Failed on {}", country);
    }
}

#[tokio::test]
async fn wins_get_for_countries_without_titles() {
    let app = spawn_app().await;
    for country in [random_simple_ascii_string(), "brazil".to_string()] {
        let r = send_get_request(&app, &format!("/wins?country={}", country)).await;
        assert_eq!(r.status(), 404, "Failed on {}", country);
        let body: WinsResponse = r.json().await.expect("Couldn't get JSON.");
        assert_eq!(body.message, "No data available for this country.");
        assert_eq!(body.wins, None);
    }
}

#[tokio::test]
async fn finals_get() {
    let app = spawn_app().await;
    let r = send_get_request(&app, "/finals?year=1950").await;
    assert_eq!(r.status(), 200);
    let body: FinalsResponse = r.json().await.expect("Couldn't get JSON.");
    let details = body.details.expect("Missing details.");
    assert_eq!(details.winner, "Uruguay");
    assert_eq!(details.runner_up, "Brazil");
    assert_eq!(details.attendance, 173850);
    assert_eq!(
        body.lines,
        vec![
            "Winner: Uruguay",
            "Runner-up: Brazil",
            "Score: 2–1",
            "Venue: Maracanã Stadium",
            "Location: Rio de Janeiro, Brazil",
            "Attendance: 173,850"
        ]
    );
}

#[tokio::test]
async fn finals_get_for_west_german_final() {
    let app = spawn_app().await;
    let r = send_get_request(&app, "/finals?year=1966").await;
    let body: FinalsResponse = r.json().await.expect("Couldn't get JSON.");
    let details = body.details.expect("Missing details.");
    assert_eq!(details.winner, "England");
    assert_eq!(details.runner_up, "Germany");
}

#[tokio::test]
async fn finals_get_without_a_world_cup() {
    let app = spawn_app().await;
    for year in [1942, 1946, 2026] {
        let r = send_get_request(&app, &format!("/finals?year={}", year)).await;
        assert_eq!(r.status(), 404, "Failed on {}", year);
        let body: FinalsResponse = r.json().await.expect("Couldn't get JSON.");
        assert_eq!(body.message, "No data available for this year.");
    }
}

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    http,
    web::{get, resource, Data, ServiceConfig},
    App, HttpServer,
};
use std::io::{Error, ErrorKind};
use std::net::TcpListener;
use tracing_actix_web_mozlog::MozLog;

use crate::{
    controllers,
    dashboard::Dashboard,
    settings::Settings,
    telemetry::{error, LogKey, StatsD},
};

/// Loads the configured dataset. Any row that fails to clean is fatal, so the
/// server never starts on partial data.
pub fn load_dashboard(settings: &Settings) -> Result<Dashboard, Error> {
    Dashboard::load(&settings.dataset_path).map_err(|e| {
        let message = format!("Could not load dataset {}: {}", settings.dataset_path, e);
        error(&LogKey::DatasetLoadFailed, &message, Some(Box::new(e)));
        Error::new(ErrorKind::InvalidData, message)
    })
}

pub fn run_server(
    settings: Settings,
    listener: TcpListener,
    dashboard: Dashboard,
    statsd: StatsD,
) -> Result<Server, std::io::Error> {
    // Shared, read-only, across all workers
    let dashboard = Data::new(dashboard);
    let statsd = Data::new(statsd);
    let settings_data = Data::new(settings.clone());
    let server = HttpServer::new(move || {
        let cors = get_cors(&settings);
        let moz_log = MozLog::default();
        App::new()
            .wrap(moz_log)
            .wrap(cors)
            .app_data(dashboard.clone())
            .app_data(statsd.clone())
            .app_data(settings_data.clone())
            .configure(configure_routes)
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg
        // Custodial
        .service(resource("/__heartbeat__").route(get().to(controllers::custodial::heartbeat)))
        .service(resource("/__lbheartbeat__").route(get().to(controllers::custodial::heartbeat)))
        .service(resource("/__version__").route(get().to(controllers::custodial::version)))
        // Dashboard
        .service(resource("/").route(get().to(controllers::dashboard::index)))
        .service(resource("/map").route(get().to(controllers::dashboard::map)))
        .service(resource("/winners").route(get().to(controllers::dashboard::winners)))
        .service(resource("/wins").route(get().to(controllers::dashboard::wins)))
        .service(resource("/finals").route(get().to(controllers::dashboard::finals)));
}

fn get_cors(settings: &Settings) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE]);
    match allowed_origins(settings) {
        // Public, read-only data.
        None => cors.allow_any_origin(),
        Some(origins) => origins
            .into_iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

fn allowed_origins(settings: &Settings) -> Option<Vec<&'static str>> {
    match settings.environment.as_str() {
        "prod" => None,
        "local" | "dev" | "stage" => Some(vec![
            "http://localhost:8000",
            "http://localhost:8050",
            "http://127.0.0.1:8050",
        ]),
        _ => panic!("Invalid settings value"),
    }
}

use lib::{
    appconfig::{load_dashboard, run_server},
    settings::get_settings,
    telemetry::{init_sentry, init_tracing, LogKey, StatsD},
};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = get_settings();

    init_tracing("wcdash-web", &settings.log_level, std::io::stdout);
    let _guard = init_sentry(&settings);

    // Refuse to serve partial data.
    let dashboard = load_dashboard(&settings)?;
    let statsd = StatsD::new(&settings);

    let addr = settings.server_address();
    tracing::info!(
        r#type = LogKey::ServerInit.to_string().as_str(),
        "Server running at http://{}",
        addr
    );
    run_server(settings, TcpListener::bind(addr)?, dashboard, statsd)?.await?;

    Ok(())
}

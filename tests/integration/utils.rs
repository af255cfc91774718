use fake::{Fake, StringFaker};
use lib::appconfig::{load_dashboard, run_server};
use lib::settings::Settings;
use lib::telemetry::{init_tracing, StatsD};
use once_cell::sync::Lazy;
use std::net::TcpListener;

// Tracing can only be initialised once per test binary. Set TEST_LOG to see
// the output.
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_tracing("wcdash", "info", std::io::stdout);
    } else {
        init_tracing("wcdash", "info", std::io::sink);
    };
});

pub struct TestApp {
    pub settings: Settings,
}
impl TestApp {
    pub fn build_url(&self, path: &str) -> String {
        format!("http://{}{}", self.settings.server_address(), path)
    }
}

pub fn bundled_dataset_path() -> String {
    format!("{}/data/WorldCupData.csv", env!("CARGO_MANIFEST_DIR"))
}

pub fn test_settings() -> Settings {
    Settings {
        host: "127.0.0.1".to_string(),
        port: "0".to_string(),
        environment: "local".to_string(),
        log_level: "info".to_string(),
        dataset_path: bundled_dataset_path(),
        sentry_dsn: "".to_string(),
        statsd_host: "127.0.0.1".to_string(),
        statsd_port: 8125,
        version_file: "version.yaml".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_settings(test_settings()).await
}

pub async fn spawn_app_with_settings(mut settings: Settings) -> TestApp {
    Lazy::force(&TRACING);

    let listener =
        TcpListener::bind(format!("{}:0", settings.host)).expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let dashboard = load_dashboard(&settings).expect("Failed to load dataset.");
    let server = run_server(settings.clone(), listener, dashboard, StatsD::nop())
        .expect("Failed to start server");
    let _ = tokio::spawn(server);
    settings.port = format!("{}", port);
    TestApp { settings }
}

pub fn random_simple_ascii_string() -> String {
    const ASCII: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ._-";
    let f = StringFaker::with(Vec::from(ASCII), 8..90);
    f.fake()
}

pub async fn send_get_request(app: &TestApp, path: &str) -> reqwest::Response {
    let path = app.build_url(path);
    reqwest::get(&path).await.expect("Failed to GET")
}

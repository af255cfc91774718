use actix_web::{web, HttpResponse};

use crate::{
    settings::Settings,
    telemetry::{error, LogKey},
    version::read_version,
};

/*
 * Custodial Helpers
 * -----------------
 * Any small helpers that are for general maintenance purposes
 */

pub async fn heartbeat() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

pub async fn version(settings: web::Data<Settings>) -> HttpResponse {
    match read_version(&settings.version_file) {
        Ok(version_data) => HttpResponse::Ok().json(version_data),
        Err(e) => {
            error(
                &LogKey::VersionUnavailable,
                "Could not serve version file",
                Some(Box::new(e)),
            );
            HttpResponse::InternalServerError().finish()
        }
    }
}

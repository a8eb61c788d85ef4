/* This file is part of the Download Master project - https://github.com/download-master/download-master
*
*  Copyright (C) 2025 Download Master contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::{fs, os::unix::fs::PermissionsExt, path::Path};

use actix_files::{Files, NamedFile};
use actix_web::{dev::{fn_service, Server, ServiceRequest, ServiceResponse}, middleware::{Logger, NormalizePath}, web, App, HttpServer};
use cloneable_errors::{ErrorContext, ResContext};
use env_logger::Env;
use log::{info, warn};

mod constants;
mod errors;
mod routes;
mod state;
mod ytdlp;
use state::*;

const CONFIG_PATH: &str = "config.toml";

/// Serves `index.html` for any path without a static file, leaving routing to the front-end
async fn spa_fallback(config: web::Data<AppConfig>, req: ServiceRequest) -> actix_web::Result<ServiceResponse> {
    let (req, _) = req.into_parts();
    let file = NamedFile::open_async(config.static_content_path.join("index.html")).await?;
    let resp = file.into_response(&req);
    Ok(ServiceResponse::new(req, resp))
}

/// Builds the HTTP server and binds every configured listener
fn start_server(config: web::Data<AppConfig>) -> Result<Server, ErrorContext> {
    let listen_config = &config.listen;
    let app_config = config.clone();
    let mut server = HttpServer::new(move || {
        let fallback_config = app_config.clone();
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(app_config.clone())
            .service(web::scope("/api").configure(routes::configure))
            .service(
                Files::new("/", app_config.static_content_path.as_path())
                    .index_file("index.html")
                    .default_handler(fn_service(move |req| spa_fallback(fallback_config.clone(), req)))
            )
    });

    if let Some((host, port)) = &listen_config.tcp {
        server = server.bind((host.as_str(), *port)).with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Listening on {host}:{port}");
    }
    if let Some(socket) = &listen_config.unix {
        server = server.bind_uds(socket).with_context(|| format!("Failed to bind to unix socket {socket}"))?;
        if let Some(mode) = listen_config.unix_mode {
            fs::set_permissions(socket, fs::Permissions::from_mode(mode))
                .with_context(|| format!("Failed to change mode of unix socket {socket} to {mode:o}"))?;
        }
        info!("Listening on {socket}");
    }
    Ok(server.run())
}

#[actix_web::main]
async fn main() -> Result<(), ErrorContext> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = web::Data::new(AppConfig::load_or_create(Path::new(CONFIG_PATH))?);

    fs::create_dir_all(&config.tmp_path).with_context(|| format!("Failed to create the temporary directory {}", config.tmp_path.display()))?;
    match config.ytdlp.version().await {
        Ok(version) => info!("Using yt-dlp {version}"),
        Err(e) => warn!("yt-dlp does not seem to work, all fetch and download requests will fail: {e:?}"),
    }

    start_server(config)?
        .await
        .context("Error while running the server")
}

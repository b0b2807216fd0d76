//! Application entry point: configuration, database pool and HTTP server.

use actix_web::{App, HttpServer, web};

use resource_api::db::establish_connection_pool;
use resource_api::models::config::ServerConfig;
use resource_api::repository::DieselRepository;
use resource_api::routes::{json_error_handler, resources};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(std::io::Error::other)?;
    let server_config: ServerConfig = settings.try_deserialize().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!(
        "Starting resource API at {}:{}",
        server_config.bind_address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(resources::create_resource)
            .service(resources::list_resources)
            .service(resources::get_resource)
    })
    .bind((server_config.bind_address.as_str(), server_config.port))?
    .run()
    .await
}

use std::sync::Arc;

use actix_multipart::form::MultipartFormConfig;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use pushkind_products::config::ServerConfig;
use pushkind_products::db::SharedPool;
use pushkind_products::repository::DieselRepository;
use pushkind_products::routes::products::{create_product, multipart_error_handler};
use pushkind_products::uploader::{AssetUploader, CloudinaryUploader};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // The pool is opened by the first request that needs it.
    let pool = Arc::new(SharedPool::new(server_config.database_url.clone()));
    let repo = DieselRepository::new(pool);

    let uploader: Arc<dyn AssetUploader> =
        match CloudinaryUploader::new(server_config.cloudinary.clone()) {
            Ok(uploader) => Arc::new(uploader),
            Err(e) => {
                log::error!("Failed to build asset uploader: {e}");
                std::process::exit(1);
            }
        };

    let address = server_config.address.clone();
    let port = server_config.port;
    let max_upload_bytes = server_config.max_upload_bytes;
    log::info!("Listening on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(max_upload_bytes)
                    .error_handler(multipart_error_handler),
            )
            .service(create_product)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::from(uploader.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}

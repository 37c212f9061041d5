use std::path::{Path, PathBuf};

use clap::Parser;
use dotenvy::dotenv;

use pushkind_products::client::{
    HttpProductApi, LogNotifier, SubmissionController, SubmitOutcome, TempFilePreviews,
};
use pushkind_products::domain::asset::AssetFile;

#[derive(Parser, Debug)]
#[command(name = "submit-product")]
#[command(about = "Create a product through the product service")]
struct Args {
    /// Base URL of the product service
    #[arg(long, env = "PRODUCT_API_URL", default_value = "http://127.0.0.1:8080")]
    endpoint: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long)]
    description: String,

    /// Product price
    #[arg(long, allow_negative_numbers = true)]
    price: f64,

    /// Image to attach
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

fn load_file(path: &Path) -> std::io::Result<AssetFile> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    let mut file = AssetFile::new(file_name, bytes);
    if let Some(content_type) = content_type_for(path) {
        file = file.with_content_type(content_type);
    }
    Ok(file)
}

#[actix_web::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let args = Args::parse();

    let file = match args.file.as_deref().map(load_file).transpose() {
        Ok(file) => file,
        Err(e) => {
            log::error!("Failed to read product file: {e}");
            std::process::exit(1);
        }
    };

    let api = match HttpProductApi::new(args.endpoint) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let mut controller = SubmissionController::new(api, LogNotifier, TempFilePreviews);
    controller.set_name_product(args.name);
    controller.set_description(args.description);
    controller.set_price(args.price);
    controller.select_file(file);

    match controller.submit().await {
        SubmitOutcome::Created(Some(product)) => {
            println!("{} {}", product.id, product.file_url);
        }
        SubmitOutcome::Created(None) => {}
        _ => std::process::exit(1),
    }
}

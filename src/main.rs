use msisdn_lookup::{config::ServiceConfig, web};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = match ServiceConfig::from_env() {
        Ok(config) => web::run(config).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

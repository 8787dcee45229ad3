use tentertain_config::Config;
use tracing::{info, warn};

use crate::environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if config.mailer.is_none() {
        warn!("No mail provider configured, contact submissions will fail");
    }

    let server = environment::build_rest_server(&config);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

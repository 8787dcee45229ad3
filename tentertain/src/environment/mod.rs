use tentertain_config::Config;
use tentertain_core_contact_impl::ContactFeatureServiceImpl;
use tentertain_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use tentertain_extern_impl::emailjs::{
    EmailJsApiServiceConfig, EmailJsApiServiceImpl, EmailJsCredentials,
};

use types::{ContactFeature, HealthFeature, MailerApi, RestServer};

pub mod types;

/// Builds the mail provider client from the optional `[mailer]` section.
pub fn mailer_api(config: &Config) -> MailerApi {
    let credentials = config.mailer.as_ref().map(|mailer| EmailJsCredentials {
        service_id: mailer.service_id.clone(),
        template_id: mailer.template_id.clone(),
        public_key: mailer.public_key.clone(),
    });
    let send_endpoint_override = config
        .mailer
        .as_ref()
        .and_then(|mailer| mailer.send_endpoint_override.clone());

    EmailJsApiServiceImpl::new(EmailJsApiServiceConfig::new(
        credentials,
        send_endpoint_override,
    ))
}

pub fn build_rest_server(config: &Config) -> RestServer {
    let mailer = mailer_api(config);

    let health: HealthFeature = HealthFeatureServiceImpl::new(
        mailer.clone(),
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );
    let contact: ContactFeature = ContactFeatureServiceImpl::new(mailer);

    RestServer::new(health, contact)
}

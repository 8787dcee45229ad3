use tentertain_core_contact_impl::ContactFeatureServiceImpl;
use tentertain_core_health_impl::HealthFeatureServiceImpl;
use tentertain_extern_impl::emailjs::EmailJsApiServiceImpl;

// Extern
pub type MailerApi = EmailJsApiServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<MailerApi>;
pub type HealthFeature = HealthFeatureServiceImpl<MailerApi>;

// API
pub type RestServer = tentertain_api_rest::RestServer<HealthFeature, ContactFeature>;

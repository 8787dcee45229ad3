use clap::Subcommand;
use tentertain_config::Config;
use tentertain_core_contact_contracts::ContactFeatureService;
use tentertain_core_contact_impl::ContactFeatureServiceImpl;
use tentertain_models::contact::ContactRequest;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum MailerCommand {
    /// Send a fixture contact message through the provider
    Test,
}

impl MailerCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            MailerCommand::Test => test(config).await,
        }
    }
}

async fn test(config: Config) -> anyhow::Result<()> {
    let contact = ContactFeatureServiceImpl::new(environment::mailer_api(&config));

    contact
        .send_message(ContactRequest {
            name: "Tentertain Backend".into(),
            email: "backend@tentertain.in".into(),
            subject: "Mail deliverability test".into(),
            message: "Mail deliverability seems to be working!".into(),
        })
        .await?;

    println!("Message sent.");

    Ok(())
}

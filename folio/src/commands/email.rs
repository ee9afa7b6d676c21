use clap::Subcommand;
use email_address::EmailAddress;
use folio_config::Config;
use folio_email_contracts::{Email, EmailService};

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = email::build(&config.email);

    let id = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            reply_to: None,
        })
        .await?;

    println!("Email sent, the provider assigned id {id}");

    Ok(())
}

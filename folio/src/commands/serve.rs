use std::sync::Arc;

use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_pages_impl::{PageServiceConfig, PageServiceImpl};
use folio_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::build(&config.email);
    let templates = TemplateServiceImpl::new();

    let contact = ContactServiceImpl::new(
        templates.clone(),
        email,
        ContactServiceConfig {
            recipient: Arc::new(config.contact.recipient),
        },
    );

    let pages = PageServiceImpl::new(
        templates,
        PageServiceConfig {
            linkedin_url: config.site.linkedin_url.map(Arc::new),
            github_url: config.site.github_url.map(Arc::new),
        },
    );

    let server = RestServer::new(contact, pages);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

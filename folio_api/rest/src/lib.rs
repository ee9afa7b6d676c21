use std::net::IpAddr;

use axum::Router;
use folio_core_contact_contracts::ContactService;
use folio_core_pages_contracts::PageService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Pages> {
    contact: Contact,
    pages: Pages,
}

impl<Contact, Pages> RestServer<Contact, Pages>
where
    Contact: ContactService,
    Pages: PageService,
{
    pub fn new(contact: Contact, pages: Pages) -> Self {
        Self { contact, pages }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::pages::router(self.pages.into()));

        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

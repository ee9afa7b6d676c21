use std::sync::Arc;

use folio_core_pages_contracts::PageService;
use folio_templates_contracts::{HomeTemplate, NotFoundTemplate, TemplateService};
use url::Url;

#[derive(Debug, Clone)]
pub struct PageServiceImpl<Templates> {
    templates: Templates,
    config: PageServiceConfig,
}

#[derive(Debug, Clone)]
pub struct PageServiceConfig {
    pub linkedin_url: Option<Arc<Url>>,
    pub github_url: Option<Arc<Url>>,
}

impl<Templates> PageServiceImpl<Templates> {
    pub fn new(templates: Templates, config: PageServiceConfig) -> Self {
        Self { templates, config }
    }
}

impl<Templates> PageService for PageServiceImpl<Templates>
where
    Templates: TemplateService,
{
    fn render_home(&self) -> anyhow::Result<String> {
        self.templates.render(&HomeTemplate {
            profile: folio_content::profile(),
            linkedin_url: self.config.linkedin_url.as_ref().map(|url| url.to_string()),
            github_url: self.config.github_url.as_ref().map(|url| url.to_string()),
        })
    }

    fn render_not_found(&self) -> anyhow::Result<String> {
        self.templates.render(&NotFoundTemplate {})
    }
}

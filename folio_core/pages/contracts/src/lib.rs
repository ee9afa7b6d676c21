#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PageService: Send + Sync + 'static {
    /// Render the portfolio page.
    fn render_home(&self) -> anyhow::Result<String>;

    /// Render the 404 page.
    fn render_not_found(&self) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockPageService {
    pub fn with_render_home(mut self, result: String) -> Self {
        self.expect_render_home()
            .once()
            .return_once(|| Ok(result));
        self
    }

    pub fn with_render_not_found(mut self, result: String) -> Self {
        self.expect_render_not_found()
            .once()
            .return_once(|| Ok(result));
        self
    }
}

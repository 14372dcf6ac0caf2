use crate::application::errors::AppError;
use crate::domain::traits::{MessageProvider, OutputSink};
use crate::infrastructure::config::LayoutConfig;
use crate::planets::{PlanetA, PlanetB};

/// Composes message providers into a single banner-prefixed output
pub struct Aggregator {
    banner: String,
    separator: String,
    providers: Vec<Box<dyn MessageProvider>>,
}

impl Aggregator {
    pub fn new(layout: &LayoutConfig) -> Self {
        Self {
            banner: layout.banner.clone(),
            separator: layout.separator.clone(),
            providers: Vec::new(),
        }
    }

    /// Planet A followed by planet B under the given layout
    pub fn standard(layout: &LayoutConfig) -> Self {
        Self::new(layout)
            .with_provider(PlanetA)
            .with_provider(PlanetB)
    }

    /// Append a provider; output follows registration order
    pub fn with_provider<P: MessageProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn MessageProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    /// Every line `run` writes, in order
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.providers.len() + 2);
        lines.push(self.banner.clone());
        lines.push(self.separator.clone());
        lines.extend(self.providers.iter().map(|p| p.message().to_string()));
        lines
    }

    pub fn run(&self, sink: &mut dyn OutputSink) -> Result<(), AppError> {
        tracing::info!("Aggregating {} providers", self.providers.len());

        for line in self.lines() {
            tracing::debug!("Writing line: {}", line);
            sink.write_line(&line)?;
        }
        sink.flush()?;
        Ok(())
    }
}

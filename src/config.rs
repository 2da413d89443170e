#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Skip classification and treat the whole root as one service
    pub monolith: bool,
    /// Name of the monolith service (defaults to the root's base name)
    pub service_name: Option<String>,
    /// Fail a service on any file whose syntax tree contains error nodes,
    /// instead of keeping the declarations tree-sitter recovered
    pub strict_syntax: bool,
    /// Extract services on the rayon pool
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            monolith: false,
            service_name: None,
            strict_syntax: false,
            parallel: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_monolith(mut self, monolith: bool) -> Self {
        self.monolith = monolith;
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_strict_syntax(mut self, strict: bool) -> Self {
        self.strict_syntax = strict;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert!(!config.monolith);
        assert!(config.service_name.is_none());
        assert!(!config.strict_syntax);
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyzerConfig::new()
            .with_monolith(true)
            .with_service_name("shop")
            .with_strict_syntax(true)
            .with_parallel(false);

        assert!(config.monolith);
        assert_eq!(config.service_name.as_deref(), Some("shop"));
        assert!(config.strict_syntax);
        assert!(!config.parallel);
    }
}

use std::fmt;

/// One of the four sibling processes built from this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    ApiGateway,
    GptClient,
    ShortStories,
    Quiz,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::ApiGateway,
        ServiceKind::GptClient,
        ServiceKind::ShortStories,
        ServiceKind::Quiz,
    ];

    /// Binary name, also used for the per-service config file
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApiGateway => "api-gateway",
            Self::GptClient => "gptclient-service",
            Self::ShortStories => "shortstories-service",
            Self::Quiz => "quiz-service",
        }
    }

    /// Name used in the startup log line
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ApiGateway => "API",
            Self::GptClient => "GPTClient",
            Self::ShortStories => "Shortstories",
            Self::Quiz => "quiz",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::ApiGateway => 8080,
            Self::GptClient => 8081,
            Self::ShortStories => 8082,
            Self::Quiz => 8083,
        }
    }

    /// Environment variable prefix, e.g. `QUIZ_SERVICE__SERVER__PORT`
    pub fn env_prefix(&self) -> String {
        self.name().replace('-', "_").to_uppercase()
    }

    pub fn startup_message(&self, port: u16) -> String {
        format!("{} Service running on port {}", self.display_name(), port)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

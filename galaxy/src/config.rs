use crate::ResourceLimits;

/// Answer given to any question the engine cannot resolve
pub const FALLBACK_ANSWER: &str = "I have no idea what you are talking about";

/// Metals recognised in declaration lines unless configured otherwise
pub const DEFAULT_METALS: [&str; 3] = ["Gold", "Silver", "Iron"];

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub limits: ResourceLimits,
    /// Metal names accepted in declaration lines, matched ignoring case
    pub metals: Vec<String>,
    pub fallback_answer: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limits: ResourceLimits::default(),
            metals: DEFAULT_METALS.iter().map(|m| m.to_string()).collect(),
            fallback_answer: FALLBACK_ANSWER.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Recognise an additional metal. Names already known are ignored.
    pub fn with_metal(mut self, metal: impl Into<String>) -> Self {
        let metal = metal.into();
        if !self.is_metal(&metal) {
            self.metals.push(metal);
        }
        self
    }

    /// The configured spelling of `name`, if it is a recognised metal
    pub fn metal(&self, name: &str) -> Option<&str> {
        self.metals
            .iter()
            .find(|m| m.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    pub fn is_metal(&self, name: &str) -> bool {
        self.metal(name).is_some()
    }
}

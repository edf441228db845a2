/// Log categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    Api,
    Config,
    System,
}

impl LogTag {
    /// Key used by `--debug-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::Api => "api",
            LogTag::Config => "config",
            LogTag::System => "system",
        }
        .to_string()
    }

    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::Api => "API",
            LogTag::Config => "CONFIG",
            LogTag::System => "SYSTEM",
        }
    }
}

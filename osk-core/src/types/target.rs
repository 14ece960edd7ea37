//! Per-trigger configuration

/// Option token disabling symbol keys
pub const DISABLE_SYMBOLS: &str = "disableSymbols";
/// Option token disabling the tab key
pub const DISABLE_TAB: &str = "disableTab";
/// Option token disabling the return key
pub const DISABLE_RETURN: &str = "disableReturn";

/// Which key categories a trigger disables while it is active.
///
/// Recomputed from the trigger's option string on every activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetConfig {
    pub symbols_disabled: bool,
    pub tab_disabled: bool,
    pub return_disabled: bool,
}

impl TargetConfig {
    /// Parses a space-separated token list like `"disableTab disableReturn"`.
    ///
    /// A missing string enables everything. Unknown tokens are ignored.
    pub fn parse(options: Option<&str>) -> Self {
        let mut config = TargetConfig::default();
        let Some(options) = options else {
            return config;
        };

        for token in options.split_whitespace() {
            match token {
                DISABLE_SYMBOLS => config.symbols_disabled = true,
                DISABLE_TAB => config.tab_disabled = true,
                DISABLE_RETURN => config.return_disabled = true,
                _ => {}
            }
        }

        config
    }
}

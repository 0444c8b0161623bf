//! Configuration defaults

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "htmlify.config.json";

/// Extension of source documents and fragments
pub const DEFAULT_INPUT_EXTENSION: &str = "comp";

/// Extension of written output documents
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

/// Dotenv file name used when `envDir` is `true` or names a directory
pub const DOTENV_FILE_NAME: &str = ".env";

/// Fragment file name prefix; such files are never compiled on their own
pub const FRAGMENT_PREFIX: char = '_';

/// Watch-mode debounce window in milliseconds
pub const WATCH_DEBOUNCE_MS: u64 = 200;

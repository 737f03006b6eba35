/// Port the HTTP entry process listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 5000;

/// Host the HTTP entry process binds to unless configured otherwise
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Fixed greeting returned by `GET /`
pub const ROOT_MESSAGE: &str = "Bita shop API";

/// Directory and file name used by the rolling log appender
pub const LOG_DIRECTORY: &str = "logs";
pub const LOG_FILE_NAME: &str = "bita-shop.log";

pub mod shell;
pub mod validate;

pub use shell::{double_quote, escape_clipboard, escape_double_quoted, unescape_clipboard};
pub use validate::{
    PLACEHOLDER_HOST, REDACTED_PASSWORD, extract_host_from_url, is_unconfigured_endpoint,
    redact_url_password,
};

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "PLUGINYML_LOG";

pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

pub fn format_error_chain<E: std::error::Error + ?Sized>(error: &E) -> String {
    let mut chain = vec![error.to_string()];
    let mut source = error.source();

    while let Some(err) = source {
        chain.push(format!("  caused by: {}", err));
        source = err.source();
    }

    chain.join("\n")
}

#[cfg(test)]
mod tests {
    use super::format_error_chain;
    use crate::error::CoreError;

    #[test]
    fn chain_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CoreError::from(io);
        let chain = format_error_chain(&err);
        assert!(chain.starts_with("io error: missing"));
    }

    #[test]
    fn init_twice_is_harmless() {
        super::init_logging("debug");
        super::init_logging("info");
    }
}

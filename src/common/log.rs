//! Logging utilities
//!
//! This module provides helper functions for the logging system.

/// Initialize the logging system
///
/// # Parameters
///
/// * `level` - Log level used when `RUST_LOG` is not set
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default()
        .filter_or("RUST_LOG", level);

    env_logger::init_from_env(env);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger() {
        // Initializes the global logger; later calls elsewhere become
        // no-ops, so this only checks the function does not panic.
        init_logger("debug");
    }
}

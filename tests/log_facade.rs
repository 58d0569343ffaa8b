// SPDX-License-Identifier: MIT OR Apache-2.0

// The `log` facade's logger can be installed once per process, so this binary
// holds a single test.

#[cfg(test)]
mod tests {
    use prefixlog::{Error, InMemorySink, PRINT_STACK_ENV, logger_for, reset_outputs, set_outputs};
    use std::sync::Arc;

    #[test]
    fn install_routes_log_records_and_rejects_a_second_logger() {
        // SAFETY: the only test in this binary
        unsafe { std::env::remove_var(PRINT_STACK_ENV) };
        let error = Arc::new(InMemorySink::new());
        let debug = Arc::new(InMemorySink::new());
        set_outputs(error.clone(), debug.clone());

        logger_for("p")
            .as_std_logger()
            .install(log::LevelFilter::Warn)
            .unwrap();

        let line = line!() + 1;
        log::warn!("disk {}", "full");
        log::info!("below the filter");
        assert_eq!(
            error.contents(),
            format!("ERROR p: log_facade.rs:{line} disk full\n")
        );
        assert_eq!(debug.contents(), "");

        let err = logger_for("q")
            .as_std_logger()
            .install(log::LevelFilter::Trace)
            .unwrap_err();
        assert!(matches!(err, Error::SetLogger(_)), "{err:?}");
        // the first logger stays installed
        log::error!("still here");
        assert!(error.contents().ends_with(" still here\n"));
        assert!(error.contents().starts_with("ERROR p: "));

        reset_outputs();
    }
}

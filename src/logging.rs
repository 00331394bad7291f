use log::{debug, LevelFilter};

/// Sets up `env_logger` for the CLI.
///
/// `--debug` turns on the solver traces. Filters in `RUST_LOG` are applied
/// on top, so `RUST_LOG=maze_solver::results=warn` still works.
pub fn init_logger(debug_enabled: bool) {
    let default_level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // messages go to a terminal next to the rendered maze; keep them short
    builder
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false);

    // Err means a logger is already installed, e.g. by an earlier test
    if builder.try_init().is_ok() {
        debug!("maze_solver logging at {default_level}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init_logger(false);
        init_logger(true);
        debug!("still logging after a repeated init");
    }
}

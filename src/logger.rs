//! Logger initialization for console diagnostics.

/// Sets up logging; verbose mode enables debug-level output.
///
/// Diagnostics are formatted bare, without timestamps or module targets,
/// since they interleave with the tool's own console reporting. File
/// creation messages go through plain stdout, not the logger.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

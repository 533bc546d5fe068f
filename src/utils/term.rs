pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time()
        // keep diagnostics on stderr so they do not interleave with the menu
        .with_writer(std::io::stderr)
        .init();
}

// ANSI clear plus cursor home, matching the classic cls/clear behavior
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

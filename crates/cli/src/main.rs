const DEFAULT_ID_LEN: usize = 16;

fn main() -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
    app_core::ids::init();

    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "data-dir" => cmd_data_dir(),
        "id" => cmd_id(&args),
        other => anyhow::bail!("unknown command: {other} (run `cli help`)"),
    }
}

fn print_help() {
    eprintln!(
        r#"bark-server cli

USAGE:
  cli data-dir
  cli id [length]
"#
    );
}

fn cmd_data_dir() -> anyhow::Result<()> {
    let platform = storage::Platform::current();
    let dir = storage::data_dir();
    tracing::info!(%platform, "resolved data directory");
    println!("{}", dir.display());
    Ok(())
}

fn cmd_id(args: &[String]) -> anyhow::Result<()> {
    let len = match args.get(2) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("invalid length {raw:?}: {e}"))?,
        None => DEFAULT_ID_LEN,
    };
    println!("{}", app_core::ids::random_id(len));
    Ok(())
}

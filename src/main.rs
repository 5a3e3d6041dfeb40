use minibank::{operation, Limits, Registry, Shell};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let limits = Limits::from_env().unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to default withdrawal limits");
        Limits::default()
    });
    let mut registry = Registry::new(limits);

    match std::env::args().nth(1) {
        Some(filename) => {
            operation::replay(&mut registry, filename)?;
            operation::write_accounts(&registry, std::io::stdout())?;
        }
        None => {
            let stdin = std::io::stdin();
            Shell::new(registry, stdin.lock(), std::io::stdout()).run()?;
        }
    }

    Ok(())
}

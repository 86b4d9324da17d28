use anyhow::bail;

fn main() -> anyhow::Result<()> {
    sgc_observability::init();

    let locations: Vec<String> = std::env::args().skip(1).collect();
    if locations.is_empty() {
        bail!("usage: sgc-guard <location>...");
    }

    let config = sgc_cli::GuardConfig::from_env();
    let policy = config.load_policy()?;
    let session = config.load_session()?;

    sgc_cli::run(&policy, &session, &locations, std::io::stdout().lock())
}

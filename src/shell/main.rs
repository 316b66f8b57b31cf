use anyhow::Context;
use chrono::Utc;

use college_registration::modules::registration::core::registry::CollegeRegistrationSystem;
use college_registration::modules::registration::projection::snapshot::RegistrySnapshot;
use college_registration::shell::config::Config;
use college_registration::shell::logging::init_tracing;
use college_registration::shell::session::{Session, replay};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_filter);

    let raw = std::fs::read_to_string(&config.session_path)
        .with_context(|| format!("reading session file {}", config.session_path.display()))?;
    let session = Session::from_json(&raw)?;

    let mut registry = CollegeRegistrationSystem::new();
    let outcomes = replay(&session, &mut registry, Utc::now().date_naive())
        .with_context(|| format!("replaying {}", config.session_path.display()))?;
    let refused = outcomes.iter().filter(|o| !o.accepted).count();
    tracing::info!(steps = outcomes.len(), refused, "session replayed");

    let snapshot = RegistrySnapshot::from(&registry);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

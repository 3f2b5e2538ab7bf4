use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use manager_core::config::SimulationSettings;
use manager_core::simulator::{SeasonOrchestrator, WeekReport};
use manager_core::storage::MemoryStorage;
use manager_core::utils::TimeEstimation;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::sync::Arc;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seasons: u16 = env::var("SEASONS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(1);

    let seed: u64 = env::var("SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(rand::random);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let mut rng = StdRng::seed_from_u64(seed);
    let (data, estimated) =
        TimeEstimation::estimate(|| DatabaseGenerator::generate(&database, &mut rng));
    let data = data?;

    info!("world generated: {} ms", estimated);

    let start = DatabaseGenerator::start_date(&database);
    let settings = SimulationSettings::default().with_seed(seed);

    let config = Arc::new(database.stats_config);
    let mut orchestrator = SeasonOrchestrator::new(data, config, settings, start)?
        .with_storage(Box::new(MemoryStorage::new()));

    while orchestrator.season() <= seasons {
        let report = orchestrator.advance_week()?;

        if let WeekReport::Played(_) = report {
            if orchestrator.week_index() == orchestrator.data().season_length() {
                log_standings(&orchestrator)?;
            }
        }
    }

    info!("simulation finished on {} after {} seasons", orchestrator.date(), seasons);

    Ok(())
}

fn log_standings(orchestrator: &SeasonOrchestrator) -> color_eyre::Result<()> {
    for league in orchestrator.data().leagues.values() {
        info!("{} - season {} final table", league.name, orchestrator.season());

        for (position, row) in orchestrator.standings(league.id)?.iter().enumerate() {
            let name = orchestrator
                .data()
                .team(row.team_id)
                .map(|team| team.name.as_str())
                .unwrap_or("?");

            info!(
                "{:>2}. {:<24} P{:>3} W{:>3} D{:>3} L{:>3} {:>3}:{:<3} {:>3} pts",
                position + 1,
                name,
                row.played,
                row.won,
                row.drawn,
                row.lost,
                row.goals_for,
                row.goals_against,
                row.points
            );
        }
    }

    Ok(())
}

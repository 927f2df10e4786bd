use clap::Parser;
use lifelink::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;

/// A CLI tool to generate sample diagram state for lifelink
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The store directory to write the generated state to
    #[arg(short, long, default_value = "generated_store")]
    output: PathBuf,

    /// The minimum number of connections to draw
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of connections to draw
    #[arg(long, default_value_t = 8)]
    max: usize,

    /// Probability that a stage is marked as completed
    #[arg(long, default_value_t = 0.5)]
    done_ratio: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.done_ratio) {
        eprintln!("Error: --done-ratio must be between 0 and 1");
        std::process::exit(1);
    }

    println!(
        "Generating new diagram state ({} to {} connections)...",
        cli.min, cli.max
    );

    let catalog = StageCatalog::integration();
    let connections = generate_connections(&mut rng, &catalog, cli.min, cli.max);
    let completed = generate_completion(&mut rng, cli.done_ratio);

    let mut state = AppState::load(JsonFileStore::new(&cli.output));
    state.set_connections(connections)?;
    for flow in Flow::ALL {
        state.reset_completed(flow)?;
        state.mark_completed(flow, completed.set(flow).iter().cloned())?;
    }

    let evaluation = evaluate(state.connections(), &RuleTable::standard());
    println!(
        "Successfully generated {} connections into '{}' (integration score {}%)",
        state.connections().len(),
        cli.output.display(),
        evaluation.score
    );

    Ok(())
}

/// Draws random SDLC -> STLC links. Duplicates are allowed, as on the diagram.
fn generate_connections(
    rng: &mut impl Rng,
    catalog: &StageCatalog,
    min: usize,
    max: usize,
) -> Vec<Connection> {
    let sdlc: Vec<&Stage> = catalog.stages_in(Flow::Sdlc).collect();
    let stlc: Vec<&Stage> = catalog.stages_in(Flow::Stlc).collect();
    let count = rng.random_range(min..=max);

    (0..count)
        .filter_map(|_| {
            let source = sdlc.choose(rng)?;
            let target = stlc.choose(rng)?;
            // Sometimes draw the link backwards; rules ignore direction.
            Some(if rng.random_bool(0.25) {
                Connection::new(&target.id, &source.id)
            } else {
                Connection::new(&source.id, &target.id)
            })
        })
        .collect()
}

fn generate_completion(rng: &mut impl Rng, done_ratio: f64) -> CompletionRecord {
    let mut record = CompletionRecord::default();
    for flow in Flow::ALL {
        let done: Vec<&str> = flow
            .local_ids()
            .filter(|_| rng.random_bool(done_ratio))
            .collect();
        record.mark(flow, done);
    }
    record
}

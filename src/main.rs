use std::{
    fs::File,
    io::{BufWriter, Write}
};

use clap::Parser;
use placement_elo::{
    args::Args,
    data::{export::write_history, loader::load_scores, player_names},
    error::DataError,
    model::{elo_model::EloModel, structures::score_table::ScoreTable, summary::RankSummary},
    report
};
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: &Args) -> Result<(), DataError> {
    let loaded = load_scores(args.input.as_deref(), args.header)?;
    let table = ScoreTable::new(loaded.rows)?;
    let names = player_names(&args.names, loaded.names, table.num_players())?;

    let config = args.elo_config();
    let history = EloModel::new(config, table.num_players())?
        .with_progress(true)
        .process(&table)?;

    let summary = RankSummary::from_table(&table);
    println!("{}", report::rank_table(&summary, &names));
    print!("{}", report::final_ratings(&history, &names));

    if let Some(path) = &args.output {
        let mut file = BufWriter::new(File::create(path)?);
        write_history(&mut file, args.format, &history, &names, &config)?;
        file.flush()?;
        info!("Rating history saved to {}", path.display());
    }

    Ok(())
}

//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlc_stats::{
    cli::{Cli, Commands},
    commands::{
        load::{handle_load, LoadParams},
        lookup::handle_lookup,
        query::handle_query,
        schema::handle_schema,
    },
    logging::init_logging,
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Cli::parse();
    init_logging(app.verbose)?;

    match app.command {
        Commands::Load {
            sources,
            store,
            skip_verify,
            json,
        } => handle_load(LoadParams {
            data_dir: sources.data_dir,
            batting: sources.batting,
            bowling: sources.bowling,
            matches: sources.matches,
            teams: sources.teams,
            db: store.db,
            skip_verify,
            as_json: json,
        })?,

        Commands::Lookup {
            store,
            entity,
            column,
            value,
            json,
        } => handle_lookup(store.db, entity, column, value, json)?,

        Commands::Query {
            store,
            entity,
            sql,
            json,
        } => handle_query(store.db, entity, sql, json)?,

        Commands::Schema { store, json } => handle_schema(store.db, json)?,
    }

    Ok(())
}

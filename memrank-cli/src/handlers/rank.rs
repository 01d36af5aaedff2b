//! Rank command handler

use crate::args::RankArgs;
use crate::context::MemrankCliContext;
use crate::output::print_ranked_list;
use crate::utils::{build_query, read_json_input};
use memrank::marshal::{Ranked, records_to_value};

/// Read the records, rank them, and return the typed result.
pub fn run_rank(ctx: &MemrankCliContext, args: &RankArgs) -> memrank::Result<Ranked> {
    let marshaller = ctx.marshaller(args.strict, args.tie_break);
    let records = read_json_input(args.records.as_deref())?;
    let query = build_query(args);

    tracing::debug!(
        policy = %marshaller.policy(),
        tie_break = %marshaller.ranker().tie_break(),
        "Ranking records"
    );

    marshaller.rank_values(&records, &query)
}

pub fn handle_rank_command(
    args: RankArgs,
    ctx: &MemrankCliContext,
    output_format: &str,
) -> memrank::Result<()> {
    let ranked = run_rank(ctx, &args)?;

    if output_format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&records_to_value(&ranked.records))?
        );
    } else {
        print_ranked_list(&ranked);
    }

    Ok(())
}

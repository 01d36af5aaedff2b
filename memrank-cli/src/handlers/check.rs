//! Check command handler

use crate::args::CheckArgs;
use crate::context::MemrankCliContext;
use crate::output::print_check_report;
use crate::utils::read_json_input;
use memrank::marshal::Decoded;
use serde_json::json;

pub fn run_check(ctx: &MemrankCliContext, args: &CheckArgs) -> memrank::Result<Decoded> {
    let marshaller = ctx.marshaller(args.strict, None);
    let records = read_json_input(args.records.as_deref())?;
    marshaller.decode_records(&records)
}

pub fn handle_check_command(
    args: CheckArgs,
    ctx: &MemrankCliContext,
    output_format: &str,
) -> memrank::Result<()> {
    let decoded = run_check(ctx, &args)?;

    if output_format == "json" {
        let report = json!({
            "total": decoded.records.len() + decoded.skipped,
            "valid": decoded.records.len(),
            "skipped": decoded.skipped,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_check_report(&decoded);
    }

    Ok(())
}

use nestrace::{ScanConfig, ScanOutcome, TracePair};
use tracing::{debug, info};

use crate::cli::{CompareArgs, EXIT_DIVERGENCE, EXIT_ERROR, EXIT_SUCCESS};
use crate::terminal;

/// Compare a candidate trace against a reference trace.
pub fn cmd_compare(args: &CompareArgs) -> i32 {
    let pair = match TracePair::load(&args.candidate, &args.reference) {
        Ok(pair) => pair,
        Err(e) => {
            terminal::error(&format!("Failed to load traces: {e}"));
            return EXIT_ERROR;
        }
    };

    let config = ScanConfig {
        context: args.context,
        ..Default::default()
    };
    debug!(
        context = config.context,
        layout_version = config.layout.version,
        "scanning"
    );

    let outcome = match pair.scan(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            terminal::error(&format!("Comparison aborted: {e}"));
            return EXIT_ERROR;
        }
    };

    match outcome {
        ScanOutcome::DivergenceFound(divergence) => {
            let fields: Vec<String> = divergence
                .mismatched_fields()
                .iter()
                .map(ToString::to_string)
                .collect();
            info!(
                line = divergence.index + 1,
                fields = %fields.join(","),
                "divergence found"
            );
            terminal::report(&divergence);
            terminal::output_path("candidate", pair.candidate.source());
            terminal::output_path("reference", pair.reference.source());
            EXIT_DIVERGENCE
        }
        ScanOutcome::AllMatched(summary) => {
            terminal::report(&summary);
            if !summary.length_mismatch() {
                terminal::success("No divergence");
                return EXIT_SUCCESS;
            }

            let message = format!(
                "Trace lengths differ (candidate {}, reference {}); only the first {} lines were compared",
                summary.candidate_len, summary.reference_len, summary.compared
            );
            if args.strict_length {
                terminal::error(&message);
                EXIT_DIVERGENCE
            } else {
                terminal::warning(&message);
                terminal::info("Pass --strict-length to treat this as a divergence");
                EXIT_SUCCESS
            }
        }
    }
}

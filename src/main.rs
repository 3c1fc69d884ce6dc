/*!
 * Resource Banker - Driver
 *
 * Runs a scenario through the banker:
 * - Safety check of the initial state
 * - Each scripted request, in order
 *
 * Usage: banker [scenario.json]   (defaults to the textbook scenario)
 */

use resource_banker::{init_tracing, Bank, BankConfig, RequestOutcome, Scenario};
use tracing::{info, warn};

fn main() -> miette::Result<()> {
    let config = BankConfig::from_env()?;
    init_tracing(&config);

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading scenario file");
            Scenario::load(&path)?
        }
        None => Scenario::textbook(),
    };

    let mut bank = Bank::from_scenario(&scenario, &config)?;

    info!("Test case 1: safety check");
    let report = bank.check_safe();
    match report.sequence() {
        Some(sequence) => info!(sequence = ?sequence, "System is in a safe state"),
        None => warn!(blocked = ?report.blocked(), "System is in an unsafe state"),
    }

    for (index, scripted) in scenario.requests.iter().enumerate() {
        info!(
            case = index + 2,
            process = scripted.process,
            request = ?scripted.request,
            "Test case {}: process requests resources",
            index + 2
        );
        match bank.request(scripted.process, &scripted.request) {
            Ok(RequestOutcome::Granted(sequence)) => {
                info!(sequence = ?sequence, "Request granted, system is in a safe state")
            }
            Ok(RequestOutcome::Unsafe) => {
                warn!("Request cannot be granted: system would become unsafe")
            }
            Err(err) => warn!(error = %err, "Request cannot be granted"),
        }
    }

    let stats = bank.stats();
    info!(
        granted = stats.granted,
        rejected = stats.rejected(),
        available = ?bank.state().available(),
        "Scenario complete"
    );

    Ok(())
}

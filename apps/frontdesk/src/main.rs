//! # Front Desk Entry Point
//!
//! Runs one scripted guest through the desk against the in-memory
//! collaborators and prints the hand-off summary as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults → frontdesk.toml → FRONTDESK_* env)
//! 3. Create state objects (CatalogState, AuthState, DeskState)
//! 4. Serve the demo guest
//! 5. Print the summary, exit non-zero on failure

use tracing::error;

#[tokio::main]
async fn main() {
    frontdesk_lib::init_tracing();

    match frontdesk_lib::run().await {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to render summary: {}", e),
        },
        Err(e) => {
            error!(code = ?e.code, "Desk session failed: {}", e.message);
            std::process::exit(1);
        }
    }
}

//! Signup form - Entry Point
//!
//! Reads field edits and submissions from stdin and stores accepted
//! signups in a local JSON key-value file.

use log::info;
use tokio::io::BufReader;

use signup_form::SignupConfig;
use signup_form::error::SignupError;
use signup_form::error::handlers::{error_to_exit_code, handle_error};
use signup_form::form::SignupForm;
use signup_form::session::run_session;
use signup_form::storage::{FileStore, StoreRepository};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching signup form...");

    if let Err(err) = run().await {
        handle_error(&err);
        std::process::exit(error_to_exit_code(&err));
    }
}

async fn run() -> Result<(), SignupError> {
    let config = SignupConfig::load()?;

    let store = FileStore::new(config.storage_path());
    let repository = StoreRepository::with_key(store, config.storage_key.clone());
    info!(
        "Storing signups under '{}' in {}",
        repository.key(),
        repository.store().path().display()
    );
    let mut form = SignupForm::new(config.rules(), repository);

    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    run_session(reader, &mut writer, &mut form).await?;

    Ok(())
}

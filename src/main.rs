use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use complaint_form::{ComplaintClient, ComplaintForm, Field, FORM_TITLE};

// Exit code when the form could not be completed (bad config, closed stdin)
const EXIT_ABORTED: u8 = 2;

// Prompt for one field; `None` means stdin was closed
fn prompt<I>(lines: &mut I, field: Field) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{} ({}): ", field.label(), field.placeholder());
    io::stdout().flush()?;
    lines.next().transpose()
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they don't interleave with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let client = match ComplaintClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return ExitCode::from(EXIT_ABORTED);
        }
    };
    info!("Complaint service endpoint: {}", client.config().endpoint());

    let mut form = ComplaintForm::new(client);
    let mut lines = io::stdin().lock().lines();

    println!("{}", FORM_TITLE);
    let mut pending = Field::ALL.to_vec();

    loop {
        for field in &pending {
            if let Some(message) = form.model().error_for(*field) {
                println!("  {}", message);
            }

            match prompt(&mut lines, *field) {
                Ok(Some(value)) => form.set_field(*field, value),
                Ok(None) => {
                    warn!("Input closed before the complaint was submitted");
                    return ExitCode::from(EXIT_ABORTED);
                }
                Err(err) => {
                    error!("Failed to read input: {}", err);
                    return ExitCode::from(EXIT_ABORTED);
                }
            }
        }

        match form.submit().await.cloned() {
            Some(status) if status.is_error() => {
                println!("Error: {}", status);
                return ExitCode::FAILURE;
            }
            Some(status) => {
                println!("{}", status);
                return ExitCode::SUCCESS;
            }
            None if form.model().errors.is_empty() => return ExitCode::SUCCESS,
            // Only ask again for the fields that failed validation
            None => pending = form.model().errors.fields().collect(),
        }
    }
}

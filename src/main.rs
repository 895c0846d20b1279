//! Terminal front end for the intake flow.
//!
//! Reads configuration from the environment, then runs one session over
//! stdin/stdout. Logs go to stderr so they never interleave with the
//! conversation.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qa_intake::adapters::{ConsoleCommand, ConsolePresenter, HttpAnswerSink, HttpQuestionSource};
use qa_intake::application::IntakeSession;
use qa_intake::config::{AppConfig, LoggingConfig};
use qa_intake::domain::intake::{FlowController, ViewPosition};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let gateway = config.endpoints.gateway_config()?;
    let source = Arc::new(HttpQuestionSource::new(&gateway)?);
    let sink = Arc::new(HttpAnswerSink::new(&gateway)?);

    let controller = FlowController::new(
        config.session.document_id(),
        config.flow.to_settings(),
        Arc::new(ConsolePresenter::new()),
    );
    info!(session_id = %controller.session_id(), "Intake starting");

    let mut session = IntakeSession::new(controller, source, sink);
    session.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !session.is_finished() {
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let result = match ConsoleCommand::parse(&line) {
            ConsoleCommand::Acknowledge => session.acknowledge_pending().await,
            ConsoleCommand::Back => session.go_back().await,
            ConsoleCommand::Edit(index) => session.request_edit(index, ViewPosition::default()).await,
            ConsoleCommand::Unlock => session.reenable_edits().await,
            ConsoleCommand::Submit => session.submit_all().await,
            ConsoleCommand::Quit => break,
            ConsoleCommand::Text(text) => session.submit_text(&text).await,
            ConsoleCommand::Unknown(command) => {
                println!("Unknown command: {}\n", command);
                Ok(())
            }
        };

        if let Err(err) = result {
            warn!(code = %err.code(), error = %err, "Action rejected");
            // User-facing failures were already shown by the controller.
            if !err.is_user_facing() {
                println!("({})\n", err);
            }
        }
    }

    info!(phase = ?session.phase(), "Intake stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let json = logging.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let plain = (!logging.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(logging.env_filter())
        .with(json)
        .with(plain)
        .init();
}

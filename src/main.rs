//! Replays a form interaction from the command line.
//!
//! ```text
//! chat-multiselect <trace.json> [interactions.txt]
//! ```
//!
//! The trace file holds one chat engine trace. Interactions are read one
//! per line from the second file, or from stdin when it is omitted:
//!
//! ```text
//! toggle Marchés | Retail
//! text Marchés | Autre | Agroalimentaire
//! submit 0
//! ```

use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use chat_multiselect::adapters::{
    HttpChatTransport, HttpChatTransportConfig, StdoutChatTransport, TracingEventPublisher,
};
use chat_multiselect::application::{FormSession, RenderFormCommand, Trace};
use chat_multiselect::config::{AppConfig, ConfigError, TransportConfig};
use chat_multiselect::domain::form::{FormError, ToggleOutcome};
use chat_multiselect::domain::foundation::{DomainError, OptionId};
use chat_multiselect::ports::ChatTransport;

#[derive(Debug, Error)]
enum ReplayError {
    #[error("usage: chat-multiselect <trace.json> [interactions.txt]")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("invalid trace: {0}")]
    Trace(#[from] serde_json::Error),

    #[error("trace is not a multi_select trace with a payload")]
    NotMultiSelect,

    #[error("line {line}: {message}")]
    Script { line: usize, message: String },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Transport(#[from] DomainError),
}

/// One scripted user action.
#[derive(Debug, PartialEq, Eq)]
enum Interaction {
    Toggle { section: String, option: String },
    Text { section: String, option: String, value: String },
    Submit(usize),
}

impl Interaction {
    fn parse(raw: &str) -> Result<Option<Self>, String> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = raw.trim_start().split_once(' ').unwrap_or((line, ""));
        if verb == "text" {
            return Self::parse_text(rest).ok_or_else(|| format!("cannot parse '{}'", line));
        }
        let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
        match (verb, fields.as_slice()) {
            ("toggle", [section, option]) => Ok(Some(Self::Toggle {
                section: section.to_string(),
                option: option.to_string(),
            })),
            ("submit", [index]) => index
                .parse()
                .map(|i| Some(Self::Submit(i)))
                .map_err(|_| format!("invalid button index '{}'", index)),
            _ => Err(format!("cannot parse '{}'", line)),
        }
    }

    /// `section | option | value`: the value is everything after the
    /// second separator and its following space, `|` and blanks included.
    fn parse_text(rest: &str) -> Option<Option<Self>> {
        let mut fields = rest.splitn(3, '|');
        let section = fields.next()?.trim();
        let option = fields.next()?.trim();
        let value = fields.next()?;
        Some(Some(Self::Text {
            section: section.to_string(),
            option: option.to_string(),
            value: value.strip_prefix(' ').unwrap_or(value).to_string(),
        }))
    }
}

fn read_to_string(path: &Path) -> Result<String, ReplayError> {
    std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn build_transport(config: &TransportConfig) -> Result<Arc<dyn ChatTransport>, ReplayError> {
    if !config.is_http() {
        return Ok(Arc::new(StdoutChatTransport::new()));
    }
    let mut http = HttpChatTransportConfig::new(
        config.api_key.clone().unwrap_or_default(),
        config.user_id.clone().unwrap_or_default(),
    )
    .with_base_url(config.base_url.clone())
    .with_timeout(config.timeout());
    if let Some(version) = &config.version_id {
        http = http.with_version_id(version.clone());
    }
    Ok(Arc::new(HttpChatTransport::new(http)?))
}

fn locate(
    session: &FormSession,
    line: usize,
    section: &str,
    option: &str,
) -> Result<OptionId, ReplayError> {
    session
        .model()
        .layout()
        .find_option(section, option)
        .ok_or_else(|| ReplayError::Script {
            line,
            message: format!("no option '{}' in section '{}'", option, section),
        })
}

async fn replay(session: &mut FormSession, script: impl BufRead) -> Result<(), ReplayError> {
    for (index, line) in script.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| ReplayError::Io {
            path: "interactions".to_string(),
            source,
        })?;
        let interaction = Interaction::parse(&line)
            .map_err(|message| ReplayError::Script { line: number, message })?;

        match interaction {
            None => {}
            Some(Interaction::Toggle { section, option }) => {
                let id = locate(session, number, &section, &option)?;
                match session.toggle(id).await? {
                    ToggleOutcome::Ignored(reason) => {
                        tracing::warn!(line = number, option = %id, ?reason, "Toggle ignored");
                    }
                    ToggleOutcome::Chosen(_) => return Ok(()),
                    ToggleOutcome::Applied { .. } => {}
                }
            }
            Some(Interaction::Text { section, option, value }) => {
                let id = locate(session, number, &section, &option)?;
                if !session.set_free_text(id, value) {
                    tracing::warn!(line = number, option = %id, "Free text refused");
                }
            }
            Some(Interaction::Submit(button)) => {
                session.submit(button).await?;
                return Ok(());
            }
        }
    }
    Ok(())
}

async fn run() -> Result<(), ReplayError> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let trace_path = args.next().ok_or(ReplayError::Usage)?;
    let script_path = args.next();

    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    config.logging.init_subscriber()?;

    let trace: Trace = serde_json::from_str(&read_to_string(&trace_path)?)?;
    let mut cmd = RenderFormCommand::from_trace(trace).ok_or(ReplayError::NotMultiSelect)?;
    if let Some(user_id) = &config.transport.user_id {
        cmd = cmd.with_correlation_id(user_id.clone());
    }

    let transport = build_transport(&config.transport)?;
    let mut session = FormSession::render(
        cmd,
        &config.form.layout_defaults(),
        transport,
        Arc::new(TracingEventPublisher::new()),
    )
    .await?;

    match script_path {
        Some(path) => {
            let file = std::fs::File::open(&path).map_err(|source| ReplayError::Io {
                path: path.display().to_string(),
                source,
            })?;
            replay(&mut session, BufReader::new(file)).await
        }
        None => replay(&mut session, io::stdin().lock()).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

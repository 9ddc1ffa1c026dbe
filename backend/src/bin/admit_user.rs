//! Run one admission decision against the configured adapters.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_admission::config::{AdmissionSettings, CreditSource};
use user_admission::domain::ports::{CreditPolicyService, UserAdmission};
use user_admission::domain::{AdmissionOutcome, CandidateInput, ClientId, UserAdmissionService};
use user_admission::outbound::credit::{FixedCreditPolicyService, HttpCreditPolicyService};
use user_admission::outbound::directory::StaticClientDirectory;
use user_admission::outbound::persistence::JsonLinesUserStore;

/// `admit-user` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "admit-user",
    about = "Decide whether a candidate becomes a user of a client organisation",
    version
)]
struct CliArgs {
    /// Candidate given name.
    #[arg(long = "first-name", value_name = "name")]
    first_name: String,
    /// Candidate family name.
    #[arg(long = "last-name", value_name = "name")]
    last_name: String,
    /// Candidate email address.
    #[arg(long = "email", value_name = "address")]
    email: String,
    /// Date of birth as `YYYY-MM-DD`.
    #[arg(long = "date-of-birth", value_name = "YYYY-MM-DD", value_parser = parse_date_of_birth)]
    date_of_birth: NaiveDate,
    /// Identifier of the client organisation.
    #[arg(long = "client-id", value_name = "id")]
    client_id: u64,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    // Settings come from files and the environment; the flags belong to clap.
    let settings = AdmissionSettings::load_from_iter([OsString::from("admit-user")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    let candidate = CandidateInput::new(
        args.first_name,
        args.last_name,
        args.email,
        args.date_of_birth,
        ClientId::new(args.client_id),
    );

    let outcome = match settings.credit_source().map_err(io::Error::other)? {
        CreditSource::Http { url, timeout } => {
            let credit = HttpCreditPolicyService::new(url, timeout)
                .map_err(|error| io::Error::other(format!("build credit client: {error}")))?;
            admit(&settings, credit, candidate).await?
        }
        CreditSource::Fixed(limit) => {
            admit(&settings, FixedCreditPolicyService::new(limit), candidate).await?
        }
    };

    for line in render_outcome(&outcome) {
        println!("{line}");
    }
    Ok(())
}

async fn admit<C>(
    settings: &AdmissionSettings,
    credit: C,
    candidate: CandidateInput,
) -> io::Result<AdmissionOutcome>
where
    C: CreditPolicyService + 'static,
{
    let directory = StaticClientDirectory::load(&settings.clients_path())
        .map_err(|error| io::Error::other(format!("load client directory: {error}")))?;
    let store = JsonLinesUserStore::new(settings.users_path());
    let service = UserAdmissionService::new(
        Arc::new(directory),
        Arc::new(credit),
        Arc::new(store),
        Arc::new(DefaultClock),
    );

    service
        .admit(candidate)
        .await
        .map_err(|error| io::Error::other(format!("admission failed: {error}")))
}

fn parse_date_of_birth(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| format!("date of birth must be YYYY-MM-DD: {error}"))
}

fn render_outcome(outcome: &AdmissionOutcome) -> Vec<String> {
    let mut lines = vec![format!("admitted={}", outcome.is_admitted())];
    if let Some(reason) = outcome.rejection() {
        lines.push(format!("reason={}", reason.code()));
    }
    lines
}

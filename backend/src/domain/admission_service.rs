//! User admission domain service.
//!
//! Validates a candidate, gates on age, classifies the client, applies the
//! tier credit policy and persists admitted users. Rejections are returned as
//! values; only collaborator failures surface as [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ClientDirectory, ClientDirectoryError, CreditPolicyError, CreditPolicyService, UserAdmission,
    UserStore, UserStoreError,
};
use crate::domain::{
    AdmissionOutcome, CandidateInput, ClientId, Error, MINIMUM_AGE, RejectionReason, UserRecord,
    age_on,
};

/// Stateless admission service implementing the [`UserAdmission`] port.
#[derive(Clone)]
pub struct UserAdmissionService<D, C, S> {
    client_directory: Arc<D>,
    credit_policy: Arc<C>,
    user_store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<D, C, S> UserAdmissionService<D, C, S> {
    /// Create a new service from its collaborators.
    pub fn new(
        client_directory: Arc<D>,
        credit_policy: Arc<C>,
        user_store: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client_directory,
            credit_policy,
            user_store,
            clock,
        }
    }
}

impl<D, C, S> UserAdmissionService<D, C, S>
where
    D: ClientDirectory,
    C: CreditPolicyService,
    S: UserStore,
{
    /// Admit a user from raw fields, reporting only whether they were
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when a collaborator fails; business rejections yield
    /// `Ok(false)`.
    pub async fn add_user(
        &self,
        first_name: impl Into<String> + Send,
        last_name: impl Into<String> + Send,
        email: impl Into<String> + Send,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> Result<bool, Error> {
        let candidate =
            CandidateInput::new(first_name, last_name, email, date_of_birth, client_id);
        let outcome = self.evaluate(candidate).await?;
        Ok(outcome.is_admitted())
    }

    async fn evaluate(&self, candidate: CandidateInput) -> Result<AdmissionOutcome, Error> {
        if let Err(reason) = candidate.validate() {
            return Ok(Self::reject(candidate.client_id, reason));
        }

        let today = self.clock.local().date_naive();
        let age = age_on(candidate.date_of_birth, today);
        if age < MINIMUM_AGE {
            return Ok(Self::reject(
                candidate.client_id,
                RejectionReason::Underage { age },
            ));
        }

        let Some(client) = self
            .client_directory
            .find_by_id(candidate.client_id)
            .await
            .map_err(map_directory_error)?
        else {
            return Ok(Self::reject(
                candidate.client_id,
                RejectionReason::UnknownClient {
                    client_id: candidate.client_id,
                },
            ));
        };

        let base_limit = self
            .credit_policy
            .credit_limit(
                &candidate.first_name,
                &candidate.last_name,
                candidate.date_of_birth,
            )
            .await
            .map_err(map_credit_error)?;

        let tier = client.tier();
        let assessment = tier.assess(base_limit);
        if !assessment.passes_minimum() {
            return Ok(Self::reject(
                candidate.client_id,
                RejectionReason::InsufficientCredit {
                    credit_limit: assessment.credit_limit(),
                },
            ));
        }

        let user = UserRecord::admit(candidate, assessment);
        self.user_store.add(&user).await.map_err(map_store_error)?;
        info!(
            client_id = %user.client_id(),
            ?tier,
            credit_limit = user.credit_limit(),
            has_credit_limit = user.has_credit_limit(),
            "user admitted"
        );
        Ok(AdmissionOutcome::Admitted(user))
    }

    fn reject(client_id: ClientId, reason: RejectionReason) -> AdmissionOutcome {
        debug!(%client_id, code = reason.code(), %reason, "candidate rejected");
        AdmissionOutcome::Rejected(reason)
    }
}

#[async_trait]
impl<D, C, S> UserAdmission for UserAdmissionService<D, C, S>
where
    D: ClientDirectory,
    C: CreditPolicyService,
    S: UserStore,
{
    async fn admit(&self, candidate: CandidateInput) -> Result<AdmissionOutcome, Error> {
        self.evaluate(candidate).await
    }
}

fn map_directory_error(error: ClientDirectoryError) -> Error {
    warn!(%error, "client directory lookup failed");
    match error {
        ClientDirectoryError::Connection { message } => {
            Error::service_unavailable(format!("client directory unavailable: {message}"))
        }
        ClientDirectoryError::Query { message } => {
            Error::internal(format!("client directory error: {message}"))
        }
    }
}

fn map_credit_error(error: CreditPolicyError) -> Error {
    warn!(%error, "credit policy lookup failed");
    match error {
        CreditPolicyError::Transport { message } => {
            Error::service_unavailable(format!("credit policy service unavailable: {message}"))
        }
        CreditPolicyError::Timeout { message } => {
            Error::service_unavailable(format!("credit policy service timed out: {message}"))
        }
        CreditPolicyError::Decode { message } => {
            Error::internal(format!("credit policy response invalid: {message}"))
        }
        CreditPolicyError::InvalidRequest { message } => {
            Error::internal(format!("credit policy request rejected: {message}"))
        }
    }
}

fn map_store_error(error: UserStoreError) -> Error {
    warn!(%error, "user store write failed");
    match error {
        UserStoreError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserStoreError::Write { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

#[cfg(test)]
#[path = "admission_service_tests.rs"]
mod tests;

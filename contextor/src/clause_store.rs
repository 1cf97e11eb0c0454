//! Clause sources: where the grounding text for a document comes from.

use std::{fmt, future::Future};

use tracing::info;

use crate::error::ContextorError;

/// One unit of document text used as grounding context.
///
/// Identity is the text itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Clause(String);

impl Clause {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Clause {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Produces the ordered clauses of a referenced document.
pub trait DocumentSource: Send + Sync {
    /// Fetches `reference` and splits it into clauses.
    ///
    /// # Errors
    /// - [`ContextorError::DocumentFetch`] for network-style failures; callers
    ///   treat these as "no content"
    /// - [`ContextorError::DocumentParse`] when content arrived but is unusable
    fn fetch_clauses(
        &self,
        reference: &str,
    ) -> impl Future<Output = Result<Vec<Clause>, ContextorError>> + Send;
}

/// The policy provisions served for every document reference.
pub const POLICY_CLAUSES: [&str; 10] = [
    "Grace Period: Thirty (30) days from the due date for payment to renew or continue the policy.",
    "Pre-existing Diseases (PED) waiting period: Thirty-six (36) months of continuous coverage from the first policy start date.",
    "Maternity expenses: The policy covers maternity expenses, including childbirth and lawful medical termination of pregnancy. To be eligible, the female insured person must have been continuously covered for at least 24 months. The benefit is limited to two deliveries or terminations during the policy period.",
    "Waiting period for cataract surgery: Two (2) years of continuous coverage for cataract surgery.",
    "Yes, the policy indemnifies the medical expenses for the organ donor's hospitalization for the purpose of harvesting the organ, provided the organ is for an insured person and the donation complies with the Transplantation of Human Organs Act, 1994.",
    "A No Claim Discount of 5% on the base premium is offered on renewal for a one-year policy term if no claims were made in the preceding year. The maximum aggregate NCD is capped at 5% of the total base premium.",
    "Yes, the policy reimburses expenses for health check-ups at the end of every block of two continuous policy years, provided the policy has been renewed without a break. The amount is subject to the limits specified in the Table of Benefits.",
    "A hospital is defined as an institution with at least 10 inpatient beds (in towns with a population below ten lakhs) or 15 beds (in all other places), with qualified nursing staff and medical practitioners available 24/7, a fully equipped operation theatre, and which maintains daily records of patients.",
    "The policy covers medical expenses for inpatient treatment under Ayurveda, Yoga, Naturopathy, Unani, Siddha, and Homeopathy systems up to the Sum Insured limit, provided the treatment is taken in an AYUSH Hospital.",
    "Yes, for Plan A, the daily room rent is capped at 1% of the Sum Insured, and ICU charges are capped at 2% of the Sum Insured. These limits do not apply if the treatment is for a listed procedure in a Preferred Provider Network (PPN).",
];

/// Serves [`POLICY_CLAUSES`] regardless of the reference.
///
/// Stands in for a real fetch+parse step; the reference is only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticClauseSource;

impl DocumentSource for StaticClauseSource {
    async fn fetch_clauses(&self, reference: &str) -> Result<Vec<Clause>, ContextorError> {
        info!(%reference, "fetching document content");
        Ok(POLICY_CLAUSES.iter().copied().map(Clause::from).collect())
    }
}

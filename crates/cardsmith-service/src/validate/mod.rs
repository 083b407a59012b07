//! Validation collaborators used by the record builder.
//!
//! The builder only relies on the [`PhoneValidator`] and [`EmailValidator`]
//! contracts. Default adapters are provided: [`LibPhoneValidator`] on top of
//! the `phonenumber` crate and [`StandardEmailValidator`] with an optional DNS
//! lookup through `hickory-resolver`.

mod email;
mod phone;

use std::sync::Arc;

use cardsmith_core::constants::DEFAULT_CARRIER_LOCALE;

pub use email::{DomainLookup, EmailValidator, HickoryLookup, StandardEmailValidator};
pub use phone::{
    CarrierTable, LibPhoneValidator, PhoneNumber, PhoneParseError, PhoneValidator,
};

/// The validators a record consults, shared between records.
#[derive(Clone)]
pub struct Validators {
    pub phone: Arc<dyn PhoneValidator>,
    pub email: Arc<dyn EmailValidator>,
    /// Whether email domains must resolve.
    pub check_dns: bool,
    /// Locale for carrier name lookups.
    pub carrier_locale: String,
}

impl Validators {
    /// Creates a validator set with DNS checks on and the default locale.
    #[must_use]
    pub fn new(phone: Arc<dyn PhoneValidator>, email: Arc<dyn EmailValidator>) -> Self {
        Self {
            phone,
            email,
            check_dns: true,
            carrier_locale: DEFAULT_CARRIER_LOCALE.to_string(),
        }
    }

    /// Sets whether email domains must resolve.
    #[must_use]
    pub fn with_dns_check(mut self, check_dns: bool) -> Self {
        self.check_dns = check_dns;
        self
    }

    /// Sets the locale for carrier lookups.
    #[must_use]
    pub fn with_carrier_locale(mut self, locale: impl Into<String>) -> Self {
        self.carrier_locale = locale.into();
        self
    }
}

impl std::fmt::Debug for Validators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validators")
            .field("check_dns", &self.check_dns)
            .field("carrier_locale", &self.carrier_locale)
            .finish_non_exhaustive()
    }
}

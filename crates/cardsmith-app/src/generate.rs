//! The `generate` command: one record per CSV row, all appended to a single
//! destination in row order.

use std::sync::Arc;

use anyhow::{Context, Result};

use cardsmith_core::config::Settings;
use cardsmith_core::error::CoreError;
use cardsmith_rfc::rfc::vcard::{NameOrder, StructuredName, VCardVersion};
use cardsmith_service::validate::{
    CarrierTable, HickoryLookup, LibPhoneValidator, StandardEmailValidator, Validators,
};
use cardsmith_service::{BuilderResult, ContactRecord, FileSink};

use crate::cli::GenerateArgs;
use crate::ingest::{ContactRow, read_rows_from_path};

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub destination: String,
    pub records: usize,
    pub diagnostics: usize,
}

/// Per-run record settings taken from [`Settings`].
#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub version: VCardVersion,
    pub order: NameOrder,
    pub mobile_carriers: Vec<String>,
}

impl RecordOptions {
    /// ## Errors
    /// Returns an error if `card.version` is not a supported version tag.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let version = settings
            .card
            .version
            .parse::<VCardVersion>()
            .map_err(CoreError::ConfigError)
            .context("Invalid card.version setting")?;

        Ok(Self {
            version,
            order: NameOrder::from_eastern(settings.card.eastern_order),
            mobile_carriers: settings
                .validation
                .mobile_carriers()
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        })
    }
}

/// Builds the validator set described by the validation settings.
///
/// When the system resolver cannot be configured, email domains are only
/// checked for syntax.
#[must_use]
pub fn build_validators(settings: &Settings) -> Validators {
    let carriers: CarrierTable = settings.validation.carrier_prefixes.iter().collect();
    let phone = LibPhoneValidator::new(carriers);

    let email = if settings.validation.check_dns {
        match HickoryLookup::from_system_conf() {
            Ok(lookup) => StandardEmailValidator::with_lookup(Arc::new(lookup)),
            Err(e) => {
                tracing::warn!(error = %e, "System resolver unavailable, email domains will not be resolved");
                StandardEmailValidator::new()
            }
        }
    } else {
        StandardEmailValidator::new()
    };

    Validators::new(Arc::new(phone), Arc::new(email))
        .with_dns_check(settings.validation.check_dns)
        .with_carrier_locale(settings.validation.locale.clone())
}

/// ## Summary
/// Builds the record for one CSV row.
///
/// Phones are added as home, cell and work; emails as home and work. The
/// relationship becomes CATEGORIES and the comment becomes NOTE.
///
/// ## Errors
/// Returns a [`cardsmith_service::BuilderError`] for a missing last name or an
/// unparseable birthday or nameday.
pub fn build_record(
    row: &ContactRow,
    options: &RecordOptions,
    validators: &Validators,
) -> BuilderResult<ContactRecord> {
    let mut record = ContactRecord::new(options.version, validators.clone());

    let mut name = StructuredName::new(row.last_name.clone().unwrap_or_default());
    name.given.clone_from(&row.first_name);
    name.additional.clone_from(&row.middle_name);
    name.prefix.clone_from(&row.title);
    record.set_name(name, options.order)?;

    if let Some(birthday) = &row.birthday {
        record.set_birthday(birthday)?;
    }
    if let Some(nameday) = &row.nameday {
        record.set_nameday(nameday)?;
    }

    let carriers: Vec<&str> = options.mobile_carriers.iter().map(String::as_str).collect();
    for (number, kind) in [
        (&row.tel_home, "home"),
        (&row.tel_cell, "cell"),
        (&row.tel_work, "work"),
    ] {
        if let Some(number) = number {
            record.add_phone(number, &carriers, kind)?;
        }
    }

    for (address, kind) in [(&row.email_home, "home"), (&row.email_work, "work")] {
        if let Some(address) = address {
            record.add_email(address, kind)?;
        }
    }

    if let Some(relationship) = &row.relationship {
        record.set_categories(relationship)?;
    }
    if let Some(comment) = &row.comment {
        record.set_note(comment)?;
    }

    Ok(record)
}

/// ## Summary
/// Runs the `generate` command.
///
/// The destination is replaced unless `--keep-existing` is given.
///
/// ## Errors
/// Returns an error if the CSV cannot be read, a row has a structural
/// problem, or the destination cannot be written.
#[tracing::instrument(skip(settings), fields(input = %args.input.display()))]
pub fn run(settings: &Settings, args: &GenerateArgs) -> Result<GenerateSummary> {
    let options = RecordOptions::from_settings(settings)?;
    let validators = build_validators(settings);

    let destination = match &args.output {
        Some(name) => name.clone(),
        None => args
            .input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .context("Cannot derive a destination name from the input path")?,
    };

    let rows = read_rows_from_path(&args.input)?;

    let mut sink = FileSink::new(&settings.output.directory)
        .with_extension(settings.output.extension.clone());
    let path = sink.path_for(&destination)?;
    if !args.keep_existing {
        sink.reset(&destination)?;
    }

    let mut summary = GenerateSummary {
        destination: destination.clone(),
        ..GenerateSummary::default()
    };

    for (i, row) in rows.iter().enumerate() {
        let mut record = build_record(row, &options, &validators)
            .with_context(|| format!("Failed to build card for CSV row {}", i + 1))?;

        if args.view {
            for line in record.render() {
                println!("{line}");
            }
        }

        record
            .emit(&mut sink, &destination)
            .with_context(|| format!("Failed to write card for CSV row {}", i + 1))?;

        summary.records += 1;
        summary.diagnostics += record.diagnostics().len();
    }

    tracing::info!(
        path = %path.display(),
        records = summary.records,
        diagnostics = summary.diagnostics,
        "Contacts generated"
    );

    Ok(summary)
}

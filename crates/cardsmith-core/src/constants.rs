/// Record framing shared by the encoder and the sinks
pub const VCARD_COMPONENT: &str = "VCARD";
pub const BEGIN_LINE: &str = const_str::concat!("BEGIN:", VCARD_COMPONENT);
pub const END_LINE: &str = const_str::concat!("END:", VCARD_COMPONENT);
pub const VERSION_PREFIX: &str = "VERSION:";

/// Line terminator mandated by the vCard format.
pub const CRLF: &str = "\r\n";

/// Default file extension for file-backed destinations.
pub const VCF_EXTENSION: &str = "vcf";

/// Default TYPE tag for EMAIL and TEL properties.
pub const DEFAULT_CONTACT_TYPE: &str = "home";

/// TYPE qualifier prepended to phones whose carrier is a mobile operator.
pub const MOBILE_TYPE: &str = "cell";

/// Locale passed to carrier lookups unless configured otherwise.
pub const DEFAULT_CARRIER_LOCALE: &str = "en";

/// Prefix for environment variable overrides of settings.
pub const ENV_PREFIX: &str = "CARDSMITH";
pub const CONFIG_FILE_STEM: &str = "cardsmith";

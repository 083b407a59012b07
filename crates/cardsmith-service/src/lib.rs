//! Contact record generation: the record builder, its validation
//! collaborators and the sinks records are emitted to.

pub mod builder;
pub mod diagnostics;
pub mod error;
pub mod sink;
pub mod validate;

pub use builder::ContactRecord;
pub use diagnostics::Diagnostic;
pub use error::{BuilderError, BuilderResult, SinkError};
pub use sink::{FileSink, MemorySink, Sink};
pub use validate::{EmailValidator, PhoneValidator, Validators};

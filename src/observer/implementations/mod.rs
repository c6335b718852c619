// Observer implementations organized by rings
// Each ring handles a specific phase of payload processing

use crate::observer::pipeline::ObserverPipeline;

// Ring 0: Preparation - normalize blanks, strip read-only fields
#[path = "0/preparation.rs"]
pub mod preparation;

// Ring 1: Input Validation - required fields, formats, dates, value types
#[path = "1/field_validation.rs"]
pub mod field_validation;

// Ring 2: Business - conditional rules per resource
#[path = "2/contact_ways.rs"]
pub mod contact_ways;
#[path = "2/case_rules.rs"]
pub mod case_rules;

// Ring 3: Enrichment - derived defaults
#[path = "3/quarantine_defaults.rs"]
pub mod quarantine_defaults;

pub use case_rules::*;
pub use contact_ways::*;
pub use field_validation::*;
pub use preparation::*;
pub use quarantine_defaults::*;

/// Registers every built-in observer
pub fn register_all(pipeline: &mut ObserverPipeline) {
    pipeline.register_observer(Box::new(ReadOnlyFieldFilter));
    pipeline.register_observer(Box::new(BlankFieldNormalizer));

    pipeline.register_observer(Box::new(RequiredFieldsValidator));
    pipeline.register_observer(Box::new(FieldFormatValidator));
    pipeline.register_observer(Box::new(DateFieldValidator));
    pipeline.register_observer(Box::new(FieldTypeValidator));

    pipeline.register_observer(Box::new(ContactWaysRule));
    pipeline.register_observer(Box::new(CasePhoneRule));
    pipeline.register_observer(Box::new(QuarantineOrderRule));
    pipeline.register_observer(Box::new(EnrollmentCompletenessRule));

    pipeline.register_observer(Box::new(QuarantineEndDefaulter));
}

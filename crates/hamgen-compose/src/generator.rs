//! Top-level generation pipeline.

use hamgen_core::GeneratorConfig;
use hamgen_extract::{classify, RequestFields};
use serde::Serialize;
use tracing::debug;

use crate::filename::compose_filenames;
use crate::summary::RequestSummary;

/// Everything derived from one raw request form.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRequest {
    /// The extracted labeled fields.
    pub fields: RequestFields,
    /// Ordered filename list for display.
    pub filenames: Vec<String>,
    /// Summary record for the clipboard.
    pub summary: RequestSummary,
}

/// Derives map filenames and a summary record from raw request-form text.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline on one raw request form.
    ///
    /// Never fails: missing fields extract as empty strings and unknown
    /// hazard names drop out of classification, yielding fewer (possibly
    /// zero) filenames.
    pub fn generate(&self, text: &str) -> GeneratedRequest {
        let fields = RequestFields::parse(text);
        let codes = classify(&fields.hazard_types_raw);
        debug!(
            "classified request {:?}: {} hazard code(s)",
            fields.request_id,
            codes.len()
        );

        let filenames = compose_filenames(&fields, &codes, &self.config.suffix);
        debug!("composed {} filename(s)", filenames.len());

        let summary = RequestSummary::build(&fields, filenames.clone());
        GeneratedRequest {
            fields,
            filenames,
            summary,
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FORM: &str = "Request\t2024-001\n\
        Hazard Type\tActive Fault, Liquefaction\n\
        Requested For\tExample Development Corporation\n\
        Requested By\tJuan Dela Cruz\n\
        Province, City, Barangay\tSan Roque, Quezon City, Metro Manila";

    #[test]
    fn test_end_to_end() {
        let result = Generator::default().generate(SAMPLE_FORM);
        assert_eq!(
            result.filenames,
            vec![
                "2024-001_AF_MetroManila-QuezonCity-BrgySanRoque_ExampleDevtCorp-JDCruz_ArP",
                "2024-001_AF-LIQN_MetroManila-QuezonCity-BrgySanRoque_ExampleDevtCorp-JDCruz_ArP",
            ]
        );
        assert_eq!(result.summary.filenames, result.filenames);
        assert_eq!(
            result.summary.hazard_types,
            vec!["Active Fault", "Liquefaction"]
        );
    }

    #[test]
    fn test_hazard_order_in_input_does_not_matter() {
        let swapped = SAMPLE_FORM.replace(
            "Active Fault, Liquefaction",
            "Liquefaction, Active Fault",
        );
        let a = Generator::default().generate(SAMPLE_FORM);
        let b = Generator::default().generate(&swapped);
        assert_eq!(a.filenames, b.filenames);
    }

    #[test]
    fn test_custom_suffix() {
        let config = GeneratorConfig::new("JdlC").unwrap();
        let result = Generator::new(config).generate(SAMPLE_FORM);
        assert!(result.filenames.iter().all(|f| f.ends_with("_JdlC")));
    }

    #[test]
    fn test_unrecognized_hazards_generate_no_filenames() {
        let text = "Request\t2024-002\nHazard Type\tFlooding, Storm Surge";
        let result = Generator::default().generate(text);
        assert_eq!(result.filenames, Vec::<String>::new());
        // The raw names still show up in the summary.
        assert_eq!(
            result.summary.hazard_types,
            vec!["Flooding", "Storm Surge"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_everything() {
        for text in ["", "   \n\t "] {
            let result = Generator::default().generate(text);
            assert_eq!(result.fields, RequestFields::default());
            assert_eq!(result.filenames, Vec::<String>::new());
            assert_eq!(result.summary, RequestSummary::default());
        }
    }

    #[test]
    fn test_volcanic_only_request() {
        let text = "Request\t2024-003\n\
            Hazard Type\tLahar, Pyroclastic Flow\n\
            Requested For\tSample Homeowners Association\n\
            Requested By\tMaria Santos\n\
            Province, City, Barangay\tBuhangin, Santo Tomas, Batangas";
        let result = Generator::default().generate(text);
        assert_eq!(
            result.filenames,
            vec![
                "2024-003_VOL_Batangas-SantoTomas-BrgyBuhangin_SampleHomeownersAssn-MSantos_ArP",
                "2024-003_VOL-LHR_Batangas-SantoTomas-BrgyBuhangin_SampleHomeownersAssn-MSantos_ArP",
                "2024-003_VOL-PF_Batangas-SantoTomas-BrgyBuhangin_SampleHomeownersAssn-MSantos_ArP",
            ]
        );
    }
}

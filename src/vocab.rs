//! Vocabulary terms used by the NIDM-Results query
//!
//! Only the handful of IRIs the extractor and threshold descriptor need.
//! The `NIDM_*` identifiers follow the NIDM-Results 1.1.0 term releases.

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const PROV: &str = "http://www.w3.org/ns/prov#";
pub const NIDM: &str = "http://purl.org/nidash/nidm#";
pub const OBO: &str = "http://purl.obolibrary.org/obo/";
pub const NIIRI: &str = "http://iri.nidash.org/";
pub const SPM: &str = "http://purl.org/nidash/spm#";
pub const FSL: &str = "http://purl.org/nidash/fsl#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

pub const PROV_ENTITY: &str = "http://www.w3.org/ns/prov#Entity";
pub const PROV_AGENT: &str = "http://www.w3.org/ns/prov#Agent";
pub const PROV_SOFTWARE_AGENT: &str = "http://www.w3.org/ns/prov#SoftwareAgent";
pub const PROV_USED: &str = "http://www.w3.org/ns/prov#used";
pub const PROV_WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";
pub const PROV_WAS_ASSOCIATED_WITH: &str = "http://www.w3.org/ns/prov#wasAssociatedWith";
pub const PROV_VALUE: &str = "http://www.w3.org/ns/prov#value";

/// Classes
pub const MODEL_PARAM_ESTIMATION: &str = "http://purl.org/nidash/nidm#NIDM_0000056";
pub const STATISTIC_MAP: &str = "http://purl.org/nidash/nidm#NIDM_0000076";
pub const SEARCH_SPACE_MASK_MAP: &str = "http://purl.org/nidash/nidm#NIDM_0000068";
pub const EXTENT_THRESHOLD: &str = "http://purl.org/nidash/nidm#NIDM_0000026";
pub const HEIGHT_THRESHOLD: &str = "http://purl.org/nidash/nidm#NIDM_0000034";
pub const EXCURSION_SET_MAP: &str = "http://purl.org/nidash/nidm#NIDM_0000025";

/// Properties
pub const WITH_ESTIMATION_METHOD: &str = "http://purl.org/nidash/nidm#NIDM_0000134";
pub const ERROR_VARIANCE_HOMOGENEOUS: &str = "http://purl.org/nidash/nidm#NIDM_0000094";
pub const CONTRAST_NAME: &str = "http://purl.org/nidash/nidm#NIDM_0000085";
pub const STATISTIC_TYPE: &str = "http://purl.org/nidash/nidm#NIDM_0000123";
pub const SEARCH_VOLUME_IN_VOXELS: &str = "http://purl.org/nidash/nidm#NIDM_0000121";
pub const SEARCH_VOLUME_IN_UNITS: &str = "http://purl.org/nidash/nidm#NIDM_0000136";
pub const SOFTWARE_VERSION: &str = "http://purl.org/nidash/nidm#NIDM_0000122";
pub const CLUSTER_SIZE_IN_VOXELS: &str = "http://purl.org/nidash/nidm#NIDM_0000084";

/// Threshold kinds
pub const Q_VALUE_FDR: &str = "http://purl.obolibrary.org/obo/OBI_0001442";
pub const P_VALUE_FWER: &str = "http://purl.obolibrary.org/obo/OBI_0001265";
pub const P_VALUE_UNCORRECTED: &str = "http://purl.org/nidash/nidm#NIDM_0000160";
pub const STATISTIC: &str = "http://purl.obolibrary.org/obo/STATO_0000039";

/// Prefixes every triple document may use without declaring them.
pub const BUILTIN_PREFIXES: &[(&str, &str)] = &[
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("prov", PROV),
    ("nidm", NIDM),
    ("obo", OBO),
    ("niiri", NIIRI),
    ("spm", SPM),
    ("fsl", FSL),
];

/// Expand `prefix:local` against the built-in prefix table.
///
/// Absolute IRIs (anything whose prefix is not in the table, e.g. `http:`)
/// are returned unchanged.
pub fn expand_curie(term: &str) -> String {
    if let Some((prefix, local)) = term.split_once(':') {
        if let Some((_, ns)) = BUILTIN_PREFIXES.iter().find(|(p, _)| *p == prefix) {
            return format!("{ns}{local}");
        }
    }
    term.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_prefix() {
        assert_eq!(expand_curie("obo:OBI_0001265"), P_VALUE_FWER);
        assert_eq!(expand_curie("nidm:NIDM_0000160"), P_VALUE_UNCORRECTED);
    }

    #[test]
    fn test_absolute_iri_unchanged() {
        assert_eq!(expand_curie(STATISTIC), STATISTIC);
        assert_eq!(expand_curie("urn:x:y"), "urn:x:y");
    }
}

//! Inference record extraction
//!
//! Joins, for every inference activity in a NIDM-Results graph, the model
//! estimation, statistic map, search volume, both thresholds, software agent
//! and excursion set into one [`InferenceRecord`].
//!
//! The join is evaluated the way a SPARQL `SELECT DISTINCT` would be: every
//! combination of bindings yields a row, rows are collapsed on the projected
//! terms, and an activity with any missing piece yields nothing.

use crate::graph::{GraphQuery, Term};
use crate::models::{InferenceRecord, Threshold};
use crate::vocab;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Terms the query refers to, looked up once per graph
struct QueryTerms {
    rdf_type: Term,
    used: Term,
    generated_by: Term,
    associated_with: Term,
    prov_value: Option<Term>,

    model_param_estimation: Term,
    statistic_map: Term,
    search_space_mask_map: Term,
    extent_threshold: Term,
    height_threshold: Term,
    excursion_set_map: Term,

    estimation_method: Term,
    variance_homogeneous: Term,
    contrast_name: Term,
    statistic_type: Term,
    search_volume_voxels: Term,
    search_volume_units: Term,
    software_version: Term,
    cluster_size_voxels: Option<Term>,

    // Filter-only terms; absent means nothing to exclude
    entity: Option<Term>,
    agent: Option<Term>,
    software_agent: Option<Term>,
}

impl QueryTerms {
    /// `None` when a term every row needs is missing from the graph
    fn resolve<G: GraphQuery + ?Sized>(graph: &G) -> Option<Self> {
        let required = |iri: &str| {
            let term = graph.iri(iri);
            if term.is_none() {
                debug!("Provenance graph never mentions <{}>", iri);
            }
            term
        };
        Some(Self {
            rdf_type: required(vocab::RDF_TYPE)?,
            used: required(vocab::PROV_USED)?,
            generated_by: required(vocab::PROV_WAS_GENERATED_BY)?,
            associated_with: required(vocab::PROV_WAS_ASSOCIATED_WITH)?,
            prov_value: graph.iri(vocab::PROV_VALUE),
            model_param_estimation: required(vocab::MODEL_PARAM_ESTIMATION)?,
            statistic_map: required(vocab::STATISTIC_MAP)?,
            search_space_mask_map: required(vocab::SEARCH_SPACE_MASK_MAP)?,
            extent_threshold: required(vocab::EXTENT_THRESHOLD)?,
            height_threshold: required(vocab::HEIGHT_THRESHOLD)?,
            excursion_set_map: required(vocab::EXCURSION_SET_MAP)?,
            estimation_method: required(vocab::WITH_ESTIMATION_METHOD)?,
            variance_homogeneous: required(vocab::ERROR_VARIANCE_HOMOGENEOUS)?,
            contrast_name: required(vocab::CONTRAST_NAME)?,
            statistic_type: required(vocab::STATISTIC_TYPE)?,
            search_volume_voxels: required(vocab::SEARCH_VOLUME_IN_VOXELS)?,
            search_volume_units: required(vocab::SEARCH_VOLUME_IN_UNITS)?,
            software_version: required(vocab::SOFTWARE_VERSION)?,
            cluster_size_voxels: graph.iri(vocab::CLUSTER_SIZE_IN_VOXELS),
            entity: graph.iri(vocab::PROV_ENTITY),
            agent: graph.iri(vocab::PROV_AGENT),
            software_agent: graph.iri(vocab::PROV_SOFTWARE_AGENT),
        })
    }
}

/// Projected bindings of one result row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Row {
    estimation_method: Term,
    homoscedasticity: Term,
    contrast_name: Term,
    statistic_type: Term,
    search_volume_voxels: Term,
    search_volume_units: Term,
    extent_value: Term,
    extent_type: Term,
    height_value: Term,
    height_type: Term,
    software: Term,
    software_version: Term,
    excursion_set: Term,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StatisticBinding {
    statistic_type: Term,
    contrast_name: Term,
    estimation_method: Term,
    homoscedasticity: Term,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Pair(Term, Term);

struct Join<'g, G: GraphQuery + ?Sized> {
    graph: &'g G,
    terms: QueryTerms,
}

impl<'g, G: GraphQuery + ?Sized> Join<'g, G> {
    fn has_type(&self, subject: Term, class: Term) -> bool {
        self.graph.contains(subject, self.terms.rdf_type, class)
    }

    fn objects(&self, subject: Term, predicate: Term) -> &'g [Term] {
        self.graph.objects(subject, predicate)
    }

    fn subjects(&self, predicate: Term, object: Term) -> &'g [Term] {
        self.graph.subjects(predicate, object)
    }

    /// Activities that generated at least one excursion set map
    fn inference_candidates(&self) -> Vec<Term> {
        let t = &self.terms;
        let mut seen = FxHashSet::default();
        self.subjects(t.rdf_type, t.excursion_set_map)
            .iter()
            .flat_map(|&set| self.objects(set, t.generated_by))
            .copied()
            .filter(|&activity| seen.insert(activity))
            .collect()
    }

    /// (estimation method, homoscedasticity) reachable from a statistic map
    /// through `wasGeneratedBy/used/wasGeneratedBy`
    fn estimation_bindings(&self, statistic_map: Term) -> FxHashSet<Pair> {
        let t = &self.terms;
        let mut bindings = FxHashSet::default();
        for &activity in self.objects(statistic_map, t.generated_by) {
            for &input in self.objects(activity, t.used) {
                for &mpe in self.objects(input, t.generated_by) {
                    if !self.has_type(mpe, t.model_param_estimation) {
                        continue;
                    }
                    for &method in self.objects(mpe, t.estimation_method) {
                        for &error_model in self.objects(mpe, t.used) {
                            for &homo in self.objects(error_model, t.variance_homogeneous) {
                                bindings.insert(Pair(method, homo));
                            }
                        }
                    }
                }
            }
        }
        bindings
    }

    fn statistic_bindings(&self, inference: Term) -> Vec<StatisticBinding> {
        let t = &self.terms;
        let mut bindings = Vec::new();
        for &map in self.objects(inference, t.used) {
            if !self.has_type(map, t.statistic_map) {
                continue;
            }
            let estimations = self.estimation_bindings(map);
            for &statistic_type in self.objects(map, t.statistic_type) {
                for &contrast_name in self.objects(map, t.contrast_name) {
                    for &Pair(estimation_method, homoscedasticity) in &estimations {
                        bindings.push(StatisticBinding {
                            statistic_type,
                            contrast_name,
                            estimation_method,
                            homoscedasticity,
                        });
                    }
                }
            }
        }
        bindings
    }

    /// (voxels, units) of the search space mask generated by the inference
    fn search_volumes(&self, inference: Term) -> Vec<Pair> {
        let t = &self.terms;
        let mut volumes = Vec::new();
        for &mask in self.subjects(t.generated_by, inference) {
            if !self.has_type(mask, t.search_space_mask_map) {
                continue;
            }
            for &voxels in self.objects(mask, t.search_volume_voxels) {
                for &units in self.objects(mask, t.search_volume_units) {
                    volumes.push(Pair(voxels, units));
                }
            }
        }
        volumes
    }

    /// (concrete type, value) of thresholds of `class` used by the inference.
    /// Each predicate in `value_predicates` is an alternative source for the
    /// value; a threshold matching several contributes one row per match.
    fn thresholds(&self, inference: Term, class: Term, value_predicates: &[Term]) -> Vec<Pair> {
        let t = &self.terms;
        let mut thresholds = Vec::new();
        for &threshold in self.objects(inference, t.used) {
            if !self.has_type(threshold, class) {
                continue;
            }
            for &kind in self.objects(threshold, t.rdf_type) {
                if kind == class || Some(kind) == t.entity {
                    continue;
                }
                for &predicate in value_predicates {
                    for &value in self.objects(threshold, predicate) {
                        thresholds.push(Pair(kind, value));
                    }
                }
            }
        }
        thresholds
    }

    /// (software type, version) of agents associated with the inference
    fn software(&self, inference: Term) -> Vec<Pair> {
        let t = &self.terms;
        let mut software = Vec::new();
        for &agent in self.objects(inference, t.associated_with) {
            for &kind in self.objects(agent, t.rdf_type) {
                if Some(kind) == t.software_agent || Some(kind) == t.agent {
                    continue;
                }
                for &version in self.objects(agent, t.software_version) {
                    software.push(Pair(kind, version));
                }
            }
        }
        software
    }

    fn excursion_sets(&self, inference: Term) -> Vec<Term> {
        let t = &self.terms;
        self.subjects(t.generated_by, inference)
            .iter()
            .copied()
            .filter(|&set| self.has_type(set, t.excursion_set_map))
            .collect()
    }

    fn rows_for(&self, inference: Term, rows: &mut FxHashSet<Row>) {
        let t = &self.terms;
        let extent_predicates: Vec<Term> =
            [t.prov_value, t.cluster_size_voxels].into_iter().flatten().collect();
        let height_predicates: Vec<Term> = t.prov_value.into_iter().collect();

        let statistics = self.statistic_bindings(inference);
        let volumes = self.search_volumes(inference);
        let extents = self.thresholds(inference, t.extent_threshold, &extent_predicates);
        let heights = self.thresholds(inference, t.height_threshold, &height_predicates);
        let agents = self.software(inference);
        let sets = self.excursion_sets(inference);

        if statistics.is_empty()
            || volumes.is_empty()
            || extents.is_empty()
            || heights.is_empty()
            || agents.is_empty()
            || sets.is_empty()
        {
            debug!(
                "Inference <{}> is incomplete (statistic maps: {}, search volumes: {}, extent: {}, height: {}, software: {}, excursion sets: {})",
                self.graph.display(inference),
                statistics.len(),
                volumes.len(),
                extents.len(),
                heights.len(),
                agents.len(),
                sets.len()
            );
            return;
        }

        for s in &statistics {
            for &Pair(search_volume_voxels, search_volume_units) in &volumes {
                for &Pair(extent_type, extent_value) in &extents {
                    for &Pair(height_type, height_value) in &heights {
                        for &Pair(software, software_version) in &agents {
                            for &excursion_set in &sets {
                                rows.insert(Row {
                                    estimation_method: s.estimation_method,
                                    homoscedasticity: s.homoscedasticity,
                                    contrast_name: s.contrast_name,
                                    statistic_type: s.statistic_type,
                                    search_volume_voxels,
                                    search_volume_units,
                                    extent_value,
                                    extent_type,
                                    height_value,
                                    height_type,
                                    software,
                                    software_version,
                                    excursion_set,
                                });
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Literal that could not be read as the kind a record field needs
#[derive(Debug)]
struct LiteralError {
    field: &'static str,
    lexical: String,
}

fn parse_float<G: GraphQuery + ?Sized>(graph: &G, term: Term, field: &'static str) -> Result<f64, LiteralError> {
    let lexical = graph.lexical(term).trim();
    lexical.parse::<f64>().map_err(|_| LiteralError {
        field,
        lexical: lexical.to_string(),
    })
}

/// Integers written as decimals (`191169.0`) are truncated
fn parse_integer<G: GraphQuery + ?Sized>(graph: &G, term: Term, field: &'static str) -> Result<i64, LiteralError> {
    let lexical = graph.lexical(term).trim();
    if let Ok(n) = lexical.parse::<i64>() {
        return Ok(n);
    }
    parse_float(graph, term, field).map(|x| x.trunc() as i64)
}

fn parse_bool<G: GraphQuery + ?Sized>(graph: &G, term: Term, field: &'static str) -> Result<bool, LiteralError> {
    match graph.lexical(term).trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(LiteralError {
            field,
            lexical: other.to_string(),
        }),
    }
}

impl Row {
    fn into_record<G: GraphQuery + ?Sized>(self, graph: &G) -> Result<InferenceRecord, LiteralError> {
        Ok(InferenceRecord {
            estimation_method: graph.display(self.estimation_method),
            variance_homogeneous: parse_bool(graph, self.homoscedasticity, "variance homogeneity")?,
            contrast_name: graph.lexical(self.contrast_name).to_string(),
            statistic_type: graph.display(self.statistic_type),
            search_volume_voxels: parse_integer(graph, self.search_volume_voxels, "search volume in voxels")?,
            search_volume_units: parse_float(graph, self.search_volume_units, "search volume in units")?,
            extent_threshold: Threshold {
                threshold_type: graph.display(self.extent_type),
                value: parse_float(graph, self.extent_value, "extent threshold value")?,
            },
            height_threshold: Threshold {
                threshold_type: graph.display(self.height_type),
                value: parse_float(graph, self.height_value, "height threshold value")?,
            },
            software: graph.display(self.software),
            software_version: graph.lexical(self.software_version).to_string(),
            excursion_set: graph.display(self.excursion_set),
        })
    }
}

/// Extract one record per distinct inference result row.
///
/// Records come back sorted by excursion set, then contrast name. An empty
/// result is a normal outcome (no complete inference in the graph).
pub fn extract<G: GraphQuery + ?Sized>(graph: &G) -> Vec<InferenceRecord> {
    let Some(terms) = QueryTerms::resolve(graph) else {
        return Vec::new();
    };
    let join = Join { graph, terms };

    let mut rows = FxHashSet::default();
    let candidates = join.inference_candidates();
    for &inference in &candidates {
        join.rows_for(inference, &mut rows);
    }

    let mut records: Vec<InferenceRecord> = rows
        .into_iter()
        .filter_map(|row| match row.into_record(graph) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    "Skipping inference result for {}: {} '{}' is not a valid value",
                    graph.display(row.excursion_set),
                    e.field,
                    e.lexical
                );
                None
            }
        })
        .collect();

    records.sort_by(|a, b| {
        a.excursion_set
            .cmp(&b.excursion_set)
            .then_with(|| a.contrast_name.cmp(&b.contrast_name))
            .then_with(|| a.extent_threshold.threshold_type.cmp(&b.extent_threshold.threshold_type))
            .then_with(|| a.height_threshold.threshold_type.cmp(&b.height_threshold.threshold_type))
            .then_with(|| a.software.cmp(&b.software))
            .then_with(|| a.extent_threshold.value.total_cmp(&b.extent_threshold.value))
            .then_with(|| a.height_threshold.value.total_cmp(&b.height_threshold.value))
    });

    debug!(
        "Extracted {} inference records from {} candidate activities",
        records.len(),
        candidates.len()
    );
    records
}

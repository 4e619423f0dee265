use std::collections::HashSet;

use tracing::{debug, info};

use crate::constants::units::USD;
use crate::data::CleanedRecord;
use crate::graph::vocab::{self, PropertySpec};
use crate::graph::{Graph, Literal, Statement, Term};
use crate::links::LinkTable;
use crate::types::Iri;

/// Entity and statement counts of one build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Product entities emitted.
    pub products: usize,
    /// Organization entities emitted.
    pub brands: usize,
    /// Architecture entities emitted.
    pub architectures: usize,
    /// Total statements in the graph.
    pub statements: usize,
}

/// Builds the statement graph from a complete set of identified records.
///
/// The graph is assembled in a local buffer and only returned once every
/// record has been processed. Emission order is fixed: class declarations,
/// property metadata, organizations, architectures, then products, each in
/// first-seen record order.
pub struct GraphBuilder<'a> {
    links: &'a dyn LinkTable,
}

impl<'a> GraphBuilder<'a> {
    /// Builder resolving same-as links through `links`.
    pub fn new(links: &'a dyn LinkTable) -> Self {
        Self { links }
    }

    /// Build the graph for `records`.
    pub fn build(&self, records: &[CleanedRecord]) -> (Graph, BuildStats) {
        let mut out = Emitter::default();
        let mut stats = BuildStats::default();

        emit_schema(&mut out);

        let mut brands: HashSet<(&str, &str)> = HashSet::new();
        for record in records {
            if record.brand.is_empty() || record.brand_uri_id.is_empty() {
                continue;
            }
            if brands.insert((record.brand.as_str(), record.brand_uri_id.as_str())) {
                let subject = vocab::entity_iri(&record.brand_uri_id);
                out.push(&subject, vocab::RDF_TYPE, Term::iri(vocab::SCHEMA_ORGANIZATION));
                out.push(&subject, vocab::SCHEMA_NAME, Term::string(&record.brand));
                if let Some(link) = self.links.brand_link(&record.brand) {
                    out.push(&subject, vocab::OWL_SAME_AS, Term::iri(link));
                }
                stats.brands += 1;
            }
        }

        let mut architectures: HashSet<(&str, &str)> = HashSet::new();
        for record in records {
            let Some(arch_id) = record.arch_uri_id.as_deref() else {
                continue;
            };
            if record.architecture.is_empty() {
                continue;
            }
            if architectures.insert((record.architecture.as_str(), arch_id)) {
                let subject = vocab::entity_iri(arch_id);
                out.push(&subject, vocab::RDF_TYPE, Term::iri(vocab::EX_GPU_ARCHITECTURE));
                out.push(&subject, vocab::SCHEMA_NAME, Term::string(&record.architecture));
                if let Some(link) = self.links.architecture_link(&record.architecture) {
                    out.push(&subject, vocab::OWL_SAME_AS, Term::iri(link));
                }
                stats.architectures += 1;
            }
        }

        for record in records {
            emit_product(&mut out, record);
            stats.products += 1;
        }

        let graph = Graph::from_statements(out.statements);
        stats.statements = graph.len();
        info!(
            "[gpu_graph:graph] built {} statements ({} products, {} brands, {} architectures)",
            stats.statements, stats.products, stats.brands, stats.architectures
        );
        (graph, stats)
    }
}

#[derive(Default)]
struct Emitter {
    statements: Vec<Statement>,
}

impl Emitter {
    fn push(&mut self, subject: &str, predicate: &str, object: Term) {
        self.statements.push(Statement {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object,
        });
    }

    fn literal(&mut self, subject: &str, property: &PropertySpec, value: Literal) {
        self.push(subject, &property.iri(), Term::Literal(value));
    }
}

fn emit_schema(out: &mut Emitter) {
    out.push(vocab::EX_GPU_ARCHITECTURE, vocab::RDF_TYPE, Term::iri(vocab::RDFS_CLASS));
    out.push(vocab::EX_GPU_ARCHITECTURE, vocab::RDFS_LABEL, Term::string("GPU Architecture"));

    out.push(vocab::EX_GPU, vocab::RDF_TYPE, Term::iri(vocab::RDFS_CLASS));
    out.push(vocab::EX_GPU, vocab::RDFS_LABEL, Term::string("GPU"));
    out.push(vocab::EX_GPU, vocab::RDFS_SUB_CLASS_OF, Term::iri(vocab::SCHEMA_PRODUCT));

    for property in &vocab::CUSTOM_PROPERTIES {
        let subject = property.iri();
        out.push(&subject, vocab::RDF_TYPE, Term::iri(vocab::RDF_PROPERTY));
        out.push(&subject, vocab::RDFS_LABEL, Term::string(property.label));
        out.push(&subject, vocab::RDFS_RANGE, Term::iri(property.range.iri()));
        out.push(&subject, vocab::RDFS_COMMENT, Term::string(property.comment));
    }
}

fn emit_product(out: &mut Emitter, record: &CleanedRecord) {
    let subject: Iri = vocab::entity_iri(&record.product_uri_id);
    out.push(&subject, vocab::RDF_TYPE, Term::iri(vocab::SCHEMA_PRODUCT));
    out.push(&subject, vocab::RDF_TYPE, Term::iri(vocab::EX_GPU));
    out.push(&subject, vocab::SCHEMA_NAME, Term::string(&record.product_name));
    if !record.brand_uri_id.is_empty() {
        out.push(
            &subject,
            vocab::SCHEMA_MANUFACTURER,
            Term::iri(vocab::entity_iri(&record.brand_uri_id)),
        );
    }
    let arch_id = record
        .arch_uri_id
        .as_ref()
        .filter(|_| !record.architecture.is_empty());
    if let Some(arch_id) = arch_id {
        out.push(
            &subject,
            &vocab::HAS_ARCHITECTURE.iri(),
            Term::iri(vocab::entity_iri(arch_id)),
        );
    }

    text(out, &subject, &vocab::GPU_NAME, &record.gpu_name);
    text(out, &subject, &vocab::CODENAME, &record.gpu_codename);
    text(out, &subject, &vocab::MEMORY_TYPE, &record.mem_type);

    integer(out, &subject, &vocab::RELEASE_YEAR, record.release_year.map(i64::from));
    integer(out, &subject, &vocab::RELEASE_MONTH, record.release_month.map(i64::from));
    if let Some(date) = record.release_date {
        out.push(&subject, vocab::SCHEMA_RELEASE_DATE, Term::Literal(Literal::Date(date)));
    }

    integer(out, &subject, &vocab::SHADING_UNITS, record.shading_units);
    integer(out, &subject, &vocab::BASE_CLOCK, record.base_clock_mhz);
    integer(out, &subject, &vocab::BOOST_CLOCK, record.boost_clock_mhz);
    integer(out, &subject, &vocab::MAX_CLOCK, record.max_clock_mhz);
    integer(out, &subject, &vocab::MEMORY_SIZE, record.mem_size_kb);
    integer(out, &subject, &vocab::MEMORY_BUS, record.mem_bus_bits);
    decimal(out, &subject, &vocab::BANDWIDTH, record.bandwidth_mbs);
    out.literal(
        &subject,
        &vocab::SYSTEM_DEPENDENT_BANDWIDTH,
        Literal::Boolean(record.is_system_dependent),
    );
    decimal(out, &subject, &vocab::FP32, record.fp32_gflops);
    integer(out, &subject, &vocab::TDP, record.tdp_watts);

    if let Some(price) = record.launch_price {
        out.push(&subject, vocab::SCHEMA_PRICE, Term::integer(price));
        out.push(&subject, vocab::SCHEMA_PRICE_CURRENCY, Term::string(USD));
    }
    debug!("[gpu_graph:graph] emitted product {}", record.product_uri_id);
}

fn text(out: &mut Emitter, subject: &str, property: &PropertySpec, value: &str) {
    if !value.is_empty() {
        out.literal(subject, property, Literal::String(value.to_string()));
    }
}

fn integer(out: &mut Emitter, subject: &str, property: &PropertySpec, value: Option<i64>) {
    if let Some(value) = value {
        out.literal(subject, property, Literal::Integer(value));
    }
}

fn decimal(out: &mut Emitter, subject: &str, property: &PropertySpec, value: Option<f64>) {
    if let Some(value) = value {
        out.literal(subject, property, Literal::Float(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionPolicy;
    use crate::ids::assign_identifiers;
    use crate::links::StaticLinkTable;
    use chrono::NaiveDate;

    fn rtx_4090() -> CleanedRecord {
        CleanedRecord {
            brand: "NVIDIA".to_string(),
            product_name: "GeForce RTX 4090".to_string(),
            architecture: "Ada Lovelace".to_string(),
            gpu_codename: "AD102".to_string(),
            release_year: Some(2022),
            release_month: Some(9),
            release_date: NaiveDate::from_ymd_opt(2022, 9, 20),
            mem_size_kb: Some(25_165_824),
            bandwidth_mbs: Some(1_032_192.0),
            fp32_gflops: Some(82_580.0),
            tdp_watts: Some(450),
            launch_price: Some(1599),
            product_uri_id: "NVIDIA_GeForce_RTX_4090".to_string(),
            brand_uri_id: "NVIDIA".to_string(),
            arch_uri_id: Some("Ada_Lovelace".to_string()),
            ..CleanedRecord::default()
        }
    }

    fn product_iri() -> Iri {
        vocab::entity_iri("NVIDIA_GeForce_RTX_4090")
    }

    #[test]
    fn product_carries_typed_fields() {
        let links = StaticLinkTable::empty();
        let (graph, stats) = GraphBuilder::new(&links).build(&[rtx_4090()]);
        assert_eq!(stats.products, 1);
        assert_eq!(stats.brands, 1);
        assert_eq!(stats.architectures, 1);
        assert_eq!(stats.statements, graph.len());

        let product = product_iri();
        let tdp: Vec<&Term> = graph.objects(&product, &vocab::TDP.iri()).collect();
        assert_eq!(tdp, vec![&Term::integer(450)]);
        let memory: Vec<&Term> = graph.objects(&product, &vocab::MEMORY_SIZE.iri()).collect();
        assert_eq!(memory, vec![&Term::integer(25_165_824)]);
        let fp32: Vec<&Term> = graph.objects(&product, &vocab::FP32.iri()).collect();
        assert_eq!(fp32, vec![&Term::Literal(Literal::Float(82_580.0))]);
        let maker: Vec<&Term> = graph.objects(&product, vocab::SCHEMA_MANUFACTURER).collect();
        assert_eq!(maker, vec![&Term::iri(vocab::entity_iri("NVIDIA"))]);
        let price: Vec<&Term> = graph.objects(&product, vocab::SCHEMA_PRICE_CURRENCY).collect();
        assert_eq!(price, vec![&Term::string("USD")]);
        assert_eq!(graph.objects(&product, vocab::SCHEMA_RELEASE_DATE).count(), 1);
    }

    #[test]
    fn absent_fields_emit_no_statements() {
        let record = CleanedRecord {
            tdp_watts: None,
            launch_price: None,
            architecture: String::new(),
            arch_uri_id: None,
            gpu_codename: String::new(),
            ..rtx_4090()
        };
        let links = StaticLinkTable::empty();
        let (graph, stats) = GraphBuilder::new(&links).build(&[record]);
        let product = product_iri();
        assert_eq!(stats.architectures, 0);
        assert_eq!(graph.objects(&product, &vocab::TDP.iri()).count(), 0);
        assert_eq!(graph.objects(&product, vocab::SCHEMA_PRICE).count(), 0);
        assert_eq!(graph.objects(&product, &vocab::CODENAME.iri()).count(), 0);
        assert_eq!(graph.objects(&product, &vocab::HAS_ARCHITECTURE.iri()).count(), 0);
    }

    #[test]
    fn shared_brands_and_architectures_are_emitted_once() {
        let second = CleanedRecord {
            product_name: "GeForce RTX 4080".to_string(),
            product_uri_id: "NVIDIA_GeForce_RTX_4080".to_string(),
            ..rtx_4090()
        };
        let links = StaticLinkTable::empty();
        let (graph, stats) = GraphBuilder::new(&links).build(&[rtx_4090(), second]);
        assert_eq!(stats.products, 2);
        assert_eq!(stats.brands, 1);
        assert_eq!(stats.architectures, 1);
        assert_eq!(
            graph.subjects_of_type(vocab::SCHEMA_ORGANIZATION),
            vec!["http://example.org/gpu/NVIDIA"]
        );
        assert_eq!(graph.subjects_of_type(vocab::SCHEMA_PRODUCT).len(), 2);
    }

    #[test]
    fn metadata_is_independent_of_record_count() {
        let links = StaticLinkTable::empty();
        let builder = GraphBuilder::new(&links);
        let (empty, _) = builder.build(&[]);
        let (one, _) = builder.build(&[rtx_4090()]);
        let declared = vocab::CUSTOM_PROPERTIES.len();
        assert_eq!(empty.subjects_of_type(vocab::RDF_PROPERTY).len(), declared);
        assert_eq!(one.subjects_of_type(vocab::RDF_PROPERTY).len(), declared);
        assert_eq!(empty.subjects_of_type(vocab::RDFS_CLASS).len(), 2);
        let range: Vec<&Term> = empty
            .objects(&vocab::TDP.iri(), vocab::RDFS_RANGE)
            .collect();
        assert_eq!(range, vec![&Term::iri("http://www.w3.org/2001/XMLSchema#integer")]);
    }

    #[test]
    fn link_table_adds_same_as_statements() {
        let links = StaticLinkTable::empty()
            .with_brand("NVIDIA", "http://www.wikidata.org/entity/Q182477")
            .with_architecture("Ada Lovelace", "http://www.wikidata.org/entity/Q113693493");
        let (graph, _) = GraphBuilder::new(&links).build(&[rtx_4090()]);
        let brand: Vec<&Term> = graph
            .objects("http://example.org/gpu/NVIDIA", vocab::OWL_SAME_AS)
            .collect();
        assert_eq!(brand, vec![&Term::iri("http://www.wikidata.org/entity/Q182477")]);
        assert_eq!(
            graph
                .objects("http://example.org/gpu/Ada_Lovelace", vocab::OWL_SAME_AS)
                .count(),
            1
        );
    }

    #[test]
    fn brand_and_architecture_never_share_a_subject() {
        let record = CleanedRecord {
            brand: "Matrox".to_string(),
            product_name: "Parhelia 512".to_string(),
            architecture: "Matrox".to_string(),
            ..CleanedRecord::default()
        };
        let identified = assign_identifiers(vec![record], CollisionPolicy::KeepFirst).unwrap();
        let links = StaticLinkTable::empty();
        let (graph, stats) = GraphBuilder::new(&links).build(&identified.records);
        assert_eq!(stats.brands, 1);
        assert_eq!(stats.architectures, 0);
        let matrox = vocab::entity_iri("Matrox");
        let types: Vec<&Term> = graph.objects(&matrox, vocab::RDF_TYPE).collect();
        assert_eq!(types, vec![&Term::iri(vocab::SCHEMA_ORGANIZATION)]);
    }

    #[test]
    fn build_is_deterministic() {
        let links = StaticLinkTable::empty().with_brand("NVIDIA", "http://example.com/nv");
        let records = vec![rtx_4090()];
        let (first, _) = GraphBuilder::new(&links).build(&records);
        let (second, _) = GraphBuilder::new(&links).build(&records);
        assert_eq!(first, second);
    }
}

use std::fs;
use std::path::Path;

use gpu_graph::constants::columns;
use gpu_graph::graph::vocab;
use gpu_graph::serialize::read_cleaned;
use gpu_graph::{
    CsvFileSource, GraphBuilder, GraphFormat, Pipeline, PipelineConfig, StaticLinkTable, Term,
};

const HEADERS: [&str; 16] = [
    columns::BRAND,
    columns::NAME,
    columns::RELEASE_DATE,
    columns::GPU_NAME,
    columns::CODENAME,
    columns::ARCHITECTURE,
    columns::SHADING_UNITS,
    columns::BASE_CLOCK,
    columns::BOOST_CLOCK,
    columns::MEMORY_SIZE,
    columns::MEMORY_TYPE,
    columns::MEMORY_BUS,
    columns::BANDWIDTH,
    columns::FP32,
    columns::TDP,
    columns::LAUNCH_PRICE,
];

const RTX_4090: [&str; 16] = [
    "NVIDIA",
    "GeForce RTX 4090",
    "Sep 20th, 2022",
    "AD102",
    "AD102-300-A1",
    "Ada Lovelace",
    "16384",
    "2235 MHz",
    "2520 MHz",
    "24GB",
    "GDDR6X",
    "384bit",
    "1.01 TB/s",
    "82.58 TFLOPS",
    "450W",
    "$1,599 USD",
];

const ARC_A770: [&str; 16] = [
    "Intel",
    "Arc A770",
    "Oct 12th, 2022",
    "ACM-G10",
    "DG2-512",
    "Generation 12.7",
    "4096",
    "2100 MHz",
    "2400 MHz",
    "16 GB",
    "GDDR6",
    "256 bit",
    "560.0 GB/s",
    "19.66 TFLOPS",
    "225 W",
    "$349 USD",
];

const INTEGRATED: [&str; 16] = [
    "AMD",
    "Radeon 780M",
    "Jan 4th, 2023",
    "Phoenix",
    "",
    "RDNA 3.0",
    "768",
    "800 MHz",
    "2700 MHz",
    "System Shared",
    "System Shared",
    "System Shared",
    "System Dependent",
    "4.147 TFLOPS",
    "unknown",
    "",
];

fn write_source(dir: &Path, rows: &[&[&str; 16]]) -> std::path::PathBuf {
    let path = dir.join("gpu_1986-2026.csv");
    let mut writer = csv::Writer::from_path(&path).unwrap();
    writer.write_record(HEADERS).unwrap();
    for row in rows {
        writer.write_record(row.iter()).unwrap();
    }
    writer.flush().unwrap();
    path
}

#[test]
fn duplicate_rows_yield_one_product_and_one_organization() {
    let temp = tempfile::tempdir().unwrap();
    write_source(temp.path(), &[&RTX_4090, &RTX_4090]);
    let pipeline = Pipeline::new(PipelineConfig::in_dir(temp.path()));
    let summary = pipeline
        .run(&pipeline.default_source(), &StaticLinkTable::empty())
        .unwrap();

    assert_eq!(summary.rows_loaded, 2);
    assert_eq!(summary.duplicates_removed, 1);
    assert_eq!(summary.products, 1);
    assert_eq!(summary.brands, 1);
    assert_eq!(summary.architectures, 1);

    let records = read_cleaned(&pipeline.config().cleaned_path).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.product_uri_id, "NVIDIA_GeForce_RTX_4090");
    assert_eq!(record.brand_uri_id, "NVIDIA");
    assert_eq!(record.tdp_watts, Some(450));
    assert_eq!(record.mem_size_kb, Some(25_165_824));
    assert_eq!(record.max_clock_mhz, Some(2520));
    assert_eq!(record.launch_price, Some(1599));
    assert_eq!(record.release_year, Some(2022));
    assert_eq!(record.release_month, Some(9));

    let (graph, _) = GraphBuilder::new(&StaticLinkTable::empty()).build(&records);
    assert_eq!(
        graph.subjects_of_type(vocab::SCHEMA_PRODUCT),
        vec!["http://example.org/gpu/NVIDIA_GeForce_RTX_4090"]
    );
    assert_eq!(
        graph.subjects_of_type(vocab::SCHEMA_ORGANIZATION),
        vec!["http://example.org/gpu/NVIDIA"]
    );

    let turtle = fs::read_to_string(&pipeline.config().graph_path).unwrap();
    assert!(turtle.contains("ex:NVIDIA_GeForce_RTX_4090 a schema:Product, ex:GPU ;"));
    assert!(turtle.contains("ex:tdpWatts \"450\"^^xsd:integer"));
    assert!(turtle.contains("ex:memorySizeKB \"25165824\"^^xsd:integer"));
    assert!(turtle.contains("schema:manufacturer ex:NVIDIA"));
    assert!(turtle.contains("ex:hasArchitecture ex:Ada_Lovelace"));
    assert!(turtle.contains("schema:releaseDate \"2022-09-20\"^^xsd:date"));
}

#[test]
fn mixed_rows_normalize_units_and_absences() {
    let temp = tempfile::tempdir().unwrap();
    write_source(temp.path(), &[&RTX_4090, &ARC_A770, &INTEGRATED]);
    let pipeline = Pipeline::new(PipelineConfig::in_dir(temp.path()));
    pipeline.clean(&pipeline.default_source()).unwrap();
    assert!(!pipeline.config().graph_path.exists());

    let records = read_cleaned(&pipeline.config().cleaned_path).unwrap();
    assert_eq!(records.len(), 3);

    let arc = &records[1];
    assert_eq!(arc.architecture, "Intel Gen 12.7");
    assert_eq!(arc.arch_uri_id.as_deref(), Some("Intel_Gen_12_7"));
    assert_eq!(arc.mem_size_kb, Some(16 * 1_048_576));
    assert_eq!(arc.mem_bus_bits, Some(256));
    assert_eq!(arc.bandwidth_mbs, Some(560.0 * 1024.0));
    assert_eq!(arc.tdp_watts, Some(225));

    let apu = &records[2];
    assert_eq!(apu.mem_size_kb, None);
    assert_eq!(apu.mem_bus_bits, None);
    assert_eq!(apu.bandwidth_mbs, None);
    assert!(apu.is_system_dependent);
    assert_eq!(apu.tdp_watts, None);
    assert_eq!(apu.launch_price, None);
    assert_eq!(apu.gpu_codename, "");
    assert_eq!(apu.max_clock_mhz, Some(2700));
}

#[test]
fn identical_input_produces_identical_bytes() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let links = StaticLinkTable::empty()
        .with_brand("NVIDIA", "http://www.wikidata.org/entity/Q182477")
        .with_architecture("Ada Lovelace", "http://www.wikidata.org/entity/Q113693493");

    let mut outputs = Vec::new();
    for dir in [first_dir.path(), second_dir.path()] {
        let source = write_source(dir, &[&INTEGRATED, &RTX_4090, &ARC_A770]);
        let pipeline = Pipeline::new(PipelineConfig::in_dir(dir));
        pipeline.run(&CsvFileSource::new(source), &links).unwrap();
        outputs.push((
            fs::read(&pipeline.config().cleaned_path).unwrap(),
            fs::read(&pipeline.config().graph_path).unwrap(),
        ));
    }
    assert_eq!(outputs[0], outputs[1]);
    let turtle = String::from_utf8(outputs[0].1.clone()).unwrap();
    assert!(turtle.contains("owl:sameAs <http://www.wikidata.org/entity/Q182477>"));
}

#[test]
fn ntriples_output_and_graph_only_stage() {
    let temp = tempfile::tempdir().unwrap();
    write_source(temp.path(), &[&RTX_4090, &ARC_A770]);
    let graph_path = temp.path().join("gpu_data.nt");
    let config = PipelineConfig::in_dir(temp.path())
        .with_graph_format(GraphFormat::NTriples)
        .with_graph_path(&graph_path);
    let pipeline = Pipeline::new(config);
    pipeline.clean(&pipeline.default_source()).unwrap();

    let summary = pipeline
        .build_graph_from_cleaned(&StaticLinkTable::empty())
        .unwrap();
    assert_eq!(summary.products, 2);
    assert_eq!(summary.graph_path.as_deref(), Some(graph_path.as_path()));

    let text = fs::read_to_string(&graph_path).unwrap();
    assert_eq!(text.lines().count(), summary.statements);
    assert!(text.lines().all(|line| line.starts_with('<') && line.ends_with(" .")));
    assert!(text.contains(
        "<http://example.org/gpu/Intel_Arc_A770> <http://example.org/gpu/tdpWatts> \"225\"^^<http://www.w3.org/2001/XMLSchema#integer> ."
    ));
}

#[test]
fn property_metadata_is_emitted_once_per_property() {
    let temp = tempfile::tempdir().unwrap();
    write_source(temp.path(), &[&RTX_4090, &ARC_A770, &INTEGRATED]);
    let pipeline = Pipeline::new(PipelineConfig::in_dir(temp.path()));
    let cleaned = pipeline.prepare(&pipeline.default_source()).unwrap();
    let (graph, _) = pipeline.build_graph(&cleaned.records, &StaticLinkTable::empty());

    for property in vocab::CUSTOM_PROPERTIES {
        let labels: Vec<&Term> = graph.objects(&property.iri(), vocab::RDFS_LABEL).collect();
        assert_eq!(labels.len(), 1, "label count for {}", property.local);
        assert_eq!(graph.objects(&property.iri(), vocab::RDFS_RANGE).count(), 1);
        assert_eq!(graph.objects(&property.iri(), vocab::RDFS_COMMENT).count(), 1);
    }
    let arch_label: Vec<&Term> = graph
        .objects(vocab::EX_GPU_ARCHITECTURE, vocab::RDFS_LABEL)
        .collect();
    assert_eq!(arch_label, vec![&Term::string("GPU Architecture")]);
}

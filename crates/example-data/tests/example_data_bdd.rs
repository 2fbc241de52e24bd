//! Behavioural tests for example-data crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering registry parsing and deterministic dataset generation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use example_data::{
    ExampleDataset, LOG_ACTIONS, RegistryError, SeedDefinition, SeedRegistry,
    generate_example_dataset,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Base valid registry JSON used by multiple Given steps.
const VALID_REGISTRY_JSON: &str = r#"{
    "version": 1,
    "referenceDate": "2026-10-19",
    "practices": [
        {"id": "1", "name": "Cape Fertility Clinic", "address": "123 Main Street, Cape Town",
         "phone": "+27 794 3956", "email": "info@capefertility.co.za", "status": "active",
         "specialties": ["Fertility", "IVF", "Gynecology"], "patientsCount": 245,
         "doctorsCount": 12, "dateCreated": "2023-01-15"},
        {"id": "3", "name": "Oceanview Healthcare", "address": "78 Coastal Drive, Port Elizabeth",
         "phone": "+27 845 2190", "email": "info@oceanviewhealth.co.za", "status": "inactive",
         "specialties": ["Orthopedics"], "patientsCount": 156, "doctorsCount": 8,
         "dateCreated": "2023-06-10"}
    ],
    "seeds": [
        {"name": "test-seed", "seed": 42, "patientCount": 20, "userCount": 6, "logCount": 30}
    ]
}"#;

/// Test world holding parsed registry and generated datasets.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    registry_result: Slot<Result<SeedRegistry, RegistryError>>,
    seed_def: Slot<SeedDefinition>,
    generated: Slot<ExampleDataset>,
    second_generation: Slot<ExampleDataset>,
}

impl World {
    /// Extracts the valid registry from the world state.
    fn registry(&self) -> SeedRegistry {
        self.registry_result
            .get()
            .expect("registry should be set")
            .expect("registry should be valid")
    }

    /// Extracts the seed definition from the world state.
    fn seed_def(&self) -> SeedDefinition {
        self.seed_def.get().expect("seed definition should be set")
    }

    /// Extracts the registry result (Ok or Err) from the world state.
    fn registry_result(&self) -> Result<SeedRegistry, RegistryError> {
        self.registry_result
            .get()
            .expect("registry result should be set")
    }

    /// Extracts the generated dataset from the world state.
    fn dataset(&self) -> ExampleDataset {
        self.generated.get().expect("dataset should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a valid seed registry JSON")]
fn a_valid_seed_registry_json(world: &World) {
    world.json_input.set(VALID_REGISTRY_JSON.to_owned());
}

#[given("a valid seed registry")]
fn a_valid_seed_registry(world: &World) {
    let registry = SeedRegistry::from_json(VALID_REGISTRY_JSON).expect("valid test registry");
    world.registry_result.set(Ok(registry));
}

#[given("a seed definition with seed {seed:u64}")]
fn a_seed_definition_with_seed(world: &World, seed: u64) {
    let registry = world.registry();
    let seed_def = registry.find_seed("test-seed").expect("seed exists");
    assert_eq!(seed_def.seed(), seed, "seed value mismatch");
    world.seed_def.set(seed_def.clone());
}

#[given("a seed definition")]
fn a_seed_definition(world: &World) {
    let registry = world.registry();
    let seed_def = registry.find_seed("test-seed").expect("seed exists");
    world.seed_def.set(seed_def.clone());
}

#[given("malformed JSON")]
fn malformed_json(world: &World) {
    world.json_input.set("not valid json".to_owned());
}

#[given("registry JSON with an empty practices array")]
fn registry_json_with_an_empty_practices_array(world: &World) {
    let json = r#"{
        "version": 1,
        "referenceDate": "2026-10-19",
        "practices": [],
        "seeds": [{"name": "test", "seed": 1, "patientCount": 1, "userCount": 1, "logCount": 1}]
    }"#;
    world.json_input.set(json.to_owned());
}

#[given("registry JSON with reference date \"{date}\"")]
fn registry_json_with_reference_date(world: &World, date: String) {
    let json = VALID_REGISTRY_JSON.replace("2026-10-19", &date);
    world.json_input.set(json);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the registry is parsed")]
fn the_registry_is_parsed(world: &World) {
    let json_opt = world.json_input.get();
    let json = json_opt.expect("JSON input should be set");
    let result = SeedRegistry::from_json(&json);
    world.registry_result.set(result);
}

#[when("the dataset is generated")]
fn the_dataset_is_generated(world: &World) {
    let registry = world.registry();
    let seed_def = world.seed_def();
    let dataset = generate_example_dataset(&registry, &seed_def).expect("generation succeeds");
    world.generated.set(dataset);
}

#[when("the dataset is generated twice")]
fn the_dataset_is_generated_twice(world: &World) {
    let registry = world.registry();
    let seed_def = world.seed_def();

    let first = generate_example_dataset(&registry, &seed_def).expect("first generation");
    let second = generate_example_dataset(&registry, &seed_def).expect("second generation");

    world.generated.set(first);
    world.second_generation.set(second);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.registry_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("the registry contains the expected practices and seeds")]
fn the_registry_contains_the_expected_practices_and_seeds(world: &World) {
    let registry = world.registry();
    let names: Vec<&str> = registry
        .practices()
        .iter()
        .map(|practice| practice.name.as_str())
        .collect();
    assert_eq!(names, vec!["Cape Fertility Clinic", "Oceanview Healthcare"]);

    let seed = registry.find_seed("test-seed").expect("seed should exist");
    assert_eq!(seed.seed(), 42);
    assert_eq!(seed.patient_count(), 20);
    assert_eq!(seed.user_count(), 6);
    assert_eq!(seed.log_count(), 30);
}

#[then("both generations produce identical datasets")]
fn both_generations_produce_identical_datasets(world: &World) {
    let first_opt = world.generated.get();
    let first = first_opt.expect("first generation should be set");
    let second_opt = world.second_generation.get();
    let second = second_opt.expect("second generation should be set");

    assert_eq!(first, second, "Generations should be deterministic");
}

#[then("every patient and user belongs to a registry practice")]
fn every_patient_and_user_belongs_to_a_registry_practice(world: &World) {
    let registry = world.registry();
    let practices: HashSet<&str> = registry
        .practices()
        .iter()
        .map(|practice| practice.name.as_str())
        .collect();
    let dataset = world.dataset();

    for patient in &dataset.patients {
        assert!(
            practices.contains(patient.practice.as_str()),
            "Unknown practice for {}: {}",
            patient.id,
            patient.practice
        );
    }
    for user in &dataset.users {
        assert!(
            practices.contains(user.practice.as_str()),
            "Unknown practice for {}: {}",
            user.id,
            user.practice
        );
    }
}

#[then("every log entry describes a catalogued action")]
fn every_log_entry_describes_a_catalogued_action(world: &World) {
    for log in world.dataset().logs {
        assert!(
            LOG_ACTIONS.contains(&log.action.as_str()),
            "Unknown action: {}",
            log.action
        );
        assert!(log.details.starts_with("Details for "), "{}", log.details);
    }
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("parsing fails with empty practices error")]
fn parsing_fails_with_empty_practices_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::EmptyPractices) => {}
        other => panic!("Expected EmptyPractices, got: {other:?}"),
    }
}

#[then("parsing fails with invalid reference date error")]
fn parsing_fails_with_invalid_reference_date_error(world: &World) {
    match world.registry_result() {
        Err(RegistryError::InvalidReferenceDate { value }) => assert_eq!(value, "next tuesday"),
        other => panic!("Expected InvalidReferenceDate, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Valid registry parses successfully"
)]
fn valid_registry_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Deterministic generation produces identical datasets"
)]
fn deterministic_generation_produces_identical_datasets(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated records reference registry practices"
)]
fn generated_records_reference_registry_practices(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Generated log entries use the action catalogue"
)]
fn generated_log_entries_use_the_action_catalogue(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Invalid JSON fails parsing"
)]
fn invalid_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Registry without practices fails parsing"
)]
fn registry_without_practices_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/example_data.feature",
    name = "Invalid reference date fails parsing"
)]
fn invalid_reference_date_fails_parsing(world: World) {
    let _ = world;
}

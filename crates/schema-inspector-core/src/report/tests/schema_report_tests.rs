use crate::report::SchemaReportBuilder;
use crate::report::SkipReason;
use crate::report::TypeState;
use crate::schema::FieldCoordinate;

#[test]
fn empty_report() {
    let report = SchemaReportBuilder::new().build();
    assert!(report.is_empty());
    assert_eq!(report.unmapped_field_count(), 0);
    assert_eq!(report.skipped_type_count(), 0);
    assert_eq!(report.type_state("Query"), TypeState::Unvisited);
    assert_eq!(report.to_string(), concat!(
        "GraphQL schema inspection:\n",
        "\tUnmapped fields: {}\n",
        "\tUnmapped registrations: {}\n",
        "\tUnmapped arguments: {}\n",
        "\tSkipped types: []",
    ));
}

#[test]
fn findings_are_recorded_once() {
    let mut builder = SchemaReportBuilder::new();
    let price = FieldCoordinate::new("Car", "price");
    let vehicles = FieldCoordinate::new("Query", "vehicles");

    assert!(builder.add_unmapped_field(&price));
    assert!(!builder.add_unmapped_field(&price));
    assert!(builder.add_skipped_type("Bike", None, Some(&vehicles), SkipReason::NoHostCandidate));
    assert!(!builder.add_skipped_type("Bike", None, None, SkipReason::NoHostCandidate));
    assert!(builder.add_skipped_type(
        "Bike",
        Some("garage::Bike"),
        Some(&vehicles),
        SkipReason::NotActiveImplementation,
    ));
    assert!(builder.add_unmapped_argument(&vehicles, "color", "VehicleController::vehicles"));
    assert!(!builder.add_unmapped_argument(&vehicles, "color", "VehicleController::vehicles"));

    let report = builder.build();
    assert_eq!(report.unmapped_field_count(), 1);
    assert_eq!(report.skipped_type_count(), 2);
    assert_eq!(report.skipped_type_names(), vec!["Bike"]);
    assert_eq!(report.skipped_types_for("Bike")[0].field_coordinate(), Some(&vehicles));
    assert_eq!(report.unmapped_arguments().len(), 1);
}

#[test]
fn type_states_never_regress_from_resolved() {
    let mut builder = SchemaReportBuilder::new();
    builder.mark_visiting("Car");
    assert_eq!(builder.type_state("Car"), TypeState::Visiting);
    builder.add_skipped_type("Car", Some("garage::Car"), None, SkipReason::NotAssignable);
    assert_eq!(builder.type_state("Car"), TypeState::Visiting);
    builder.mark_resolved("Car");
    builder.mark_visiting("Car");
    assert_eq!(builder.type_state("Car"), TypeState::Resolved);

    builder.add_skipped_type("Bike", None, None, SkipReason::NoHostCandidate);
    assert_eq!(builder.type_state("Bike"), TypeState::Skipped);
}

#[test]
fn display_groups_by_type_and_field() {
    let mut builder = SchemaReportBuilder::new();
    builder.add_unmapped_field(&FieldCoordinate::new("Car", "price"));
    builder.add_unmapped_field(&FieldCoordinate::new("Car", "engineType"));
    builder.add_unmapped_field(&FieldCoordinate::new("Bike", "price"));
    builder.add_unmapped_registration(
        &FieldCoordinate::new("Query", "trucks"),
        "VehicleController::trucks",
    );
    builder.add_unmapped_argument(
        &FieldCoordinate::new("Query", "car"),
        "vin",
        "VehicleController::car",
    );
    builder.add_skipped_type("Boat", None, None, SkipReason::NoHostCandidate);

    let report = builder.build();
    assert!(!report.is_empty());
    assert_eq!(report.unmapped_fields_for("Car"), vec!["price", "engineType"]);
    assert_eq!(report.to_string(), concat!(
        "GraphQL schema inspection:\n",
        "\tUnmapped fields: {Car=[price, engineType], Bike=[price]}\n",
        "\tUnmapped registrations: {Query.trucks=VehicleController::trucks}\n",
        "\tUnmapped arguments: {Query.car=[vin]}\n",
        "\tSkipped types: [Boat]",
    ));
}

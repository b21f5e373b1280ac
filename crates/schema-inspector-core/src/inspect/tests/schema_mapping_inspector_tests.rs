use crate::controller::ControllerMethod;
use crate::controller::ControllerRegistry;
use crate::host::HostType;
use crate::host::HostTypeRegistry;
use crate::inspect::InspectError;
use crate::inspect::InterfaceFieldPolicy;
use crate::inspect::SchemaMappingInspector;
use crate::inspect::tests::test_utils::*;
use crate::report::SkipReason;
use crate::report::TypeState;
use crate::resolver::ClassNameTable;
use crate::resolver::ClassNameTypeResolver;
use crate::resolver::ClassResolverConfigError;
use crate::schema::FieldCoordinate;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaTypeGraph;

type Result<T> = std::result::Result<T, InspectError>;

mod interfaces {
    use super::*;

    #[test]
    fn interface_fields_not_on_host_interface() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::Car"),
            name_only("garage::Bike"),
        ]);

        let report = SchemaMappingInspector::builder()
            .build()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 3);
        assert_eq!(report.unmapped_fields_for("Car"), vec!["price", "engineType"]);
        assert_eq!(report.unmapped_fields_for("Bike"), vec!["price"]);
        assert!(report.unmapped_fields_for("Vehicle").is_empty());
        assert_eq!(report.skipped_type_count(), 0);
        assert_eq!(report.type_state("Vehicle"), TypeState::Resolved);
        assert_eq!(report.type_state("Car"), TypeState::Resolved);

        Ok(())
    }

    #[test]
    fn interface_fields_with_class_name_function() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::CarImpl"),
            name_only("garage::BikeImpl"),
        ]);

        let report = SchemaMappingInspector::builder()
            .class_name_function(|name| format!("{name}Impl"))
            .build()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 3);
        assert_eq!(report.unmapped_fields_for("Car"), vec!["price", "engineType"]);
        assert_eq!(report.unmapped_fields_for("Bike"), vec!["price"]);
        assert_eq!(report.skipped_type_count(), 0);

        Ok(())
    }

    #[test]
    fn interface_fields_with_class_name_type_resolver() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::CarImpl"),
            name_only("garage::BikeImpl"),
        ]);
        let mut type_resolver = ClassNameTypeResolver::new();
        type_resolver.add_mapping("garage::CarImpl", "Car");

        let report = SchemaMappingInspector::builder()
            .class_name_type_resolver(&type_resolver)
            .build()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 2);
        assert_eq!(report.unmapped_fields_for("Car"), vec!["price", "engineType"]);
        assert_eq!(report.skipped_type_count(), 1);
        assert_eq!(report.skipped_type_names(), vec!["Bike"]);
        assert_eq!(report.skipped_types_for("Bike")[0].reason(), SkipReason::NoHostCandidate);

        Ok(())
    }

    #[test]
    fn interface_without_host_implementations() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([vehicle_interface()]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 0);
        assert_eq!(report.skipped_type_count(), 2);
        assert_eq!(report.skipped_type_names(), vec!["Car", "Bike"]);
        let skipped_car = report.skipped_types_for("Car");
        assert_eq!(skipped_car.len(), 1);
        assert_eq!(skipped_car[0].reason(), SkipReason::NoHostCandidate);
        assert_eq!(skipped_car[0].host_type(), None);
        assert_eq!(
            skipped_car[0].field_coordinate(),
            Some(&FieldCoordinate::new("Query", "vehicles")),
        );
        assert_eq!(report.type_state("Vehicle"), TypeState::Skipped);
        assert_eq!(report.type_state("Car"), TypeState::Skipped);

        Ok(())
    }

    #[test]
    fn include_abstract_type_policy_checks_interface_fields() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::Car"),
            name_only("garage::Bike"),
        ]);

        let report = SchemaMappingInspector::builder()
            .interface_field_policy(InterfaceFieldPolicy::IncludeAbstractType)
            .build()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 4);
        assert_eq!(report.unmapped_fields_for("Vehicle"), vec!["price"]);

        Ok(())
    }

    #[test]
    fn candidate_not_assignable_to_declared_type() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::Car"),
            HostType::concrete("garage::Bike").with_member("name", named("String")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.skipped_type_names(), vec!["Bike"]);
        let skipped_bike = report.skipped_types_for("Bike");
        assert_eq!(skipped_bike[0].reason(), SkipReason::NotAssignable);
        assert_eq!(skipped_bike[0].host_type(), Some("garage::Bike"));
        assert_eq!(report.unmapped_fields_for("Bike"), Vec::<&str>::new());

        Ok(())
    }

    #[test]
    fn sealed_abstract_type_permits_implementations_elsewhere() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface()
                .permitting("cars::Car")
                .permitting("bikes::Bike"),
            HostType::concrete("cars::Car")
                .with_member("name", named("String"))
                .with_member("price", named("i32"))
                .with_member("engineType", named("String")),
            HostType::concrete("bikes::Bike")
                .with_member("name", named("String")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_fields().iter().collect::<Vec<_>>(), vec![
            &FieldCoordinate::new("Bike", "price"),
        ]);
        assert_eq!(report.skipped_type_count(), 0);

        Ok(())
    }
}

mod concrete_return_types {
    use super::*;

    fn full_car() -> HostType {
        name_only("garage::Car")
            .with_member("price", named("i32"))
            .with_member("engineType", named("String"))
    }

    #[test]
    fn only_returned_implementation_is_checked() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Car>");
        let host_types = host_types([
            vehicle_interface(),
            full_car(),
            name_only("garage::Bike"),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        // 2 implementations, 1 returned: N-1 skipped.
        assert_eq!(report.unmapped_field_count(), 0);
        assert_eq!(report.skipped_type_count(), 1);
        let skipped_bike = report.skipped_types_for("Bike");
        assert_eq!(skipped_bike[0].reason(), SkipReason::NotActiveImplementation);
        assert_eq!(skipped_bike[0].host_type(), Some("garage::Bike"));

        Ok(())
    }

    #[test]
    fn unresolvable_return_type_skips_every_implementation() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Truck>");
        let host_types = host_types([vehicle_interface(), full_car()]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.skipped_type_count(), 2);
        assert!(report.skipped_types().iter().all(|skipped| {
            skipped.reason() == SkipReason::UnknownHostType
                && skipped.host_type() == Some("garage::Truck")
        }));

        Ok(())
    }

    #[test]
    fn object_field_binds_declared_type_regardless_of_name() -> Result<()> {
        let schema = build_schema("
            type Query { book: Book }
            type Book { title: String isbn: String }
        ");
        let controllers = query_controller("book", "Option<library::BookDto>");
        let host_types = host_types([
            HostType::concrete("library::BookDto").with_member("title", named("String")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_fields_for("Book"), vec!["isbn"]);
        assert_eq!(report.skipped_type_count(), 0);

        Ok(())
    }

    #[test]
    fn object_field_with_abstract_declared_type() -> Result<()> {
        let schema = build_schema(&format!("{VEHICLES_SDL} extend type Query {{ car: Car }}"));
        let controllers = ControllerRegistry::builder()
            .query("vehicles", ControllerMethod::new("C", "vehicles", parse_ref("Vec<garage::Vehicle>")))
            .and_then(|builder| builder.query(
                "car",
                ControllerMethod::new("C", "car", parse_ref("Box<garage::Vehicle>")),
            ))
            .unwrap()
            .build();
        let host_types = host_types([vehicle_interface(), full_car()]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 0);
        assert_eq!(report.skipped_type_names(), vec!["Bike"]);
        assert_eq!(report.type_state("Car"), TypeState::Resolved);

        Ok(())
    }

    /// `vehicles` and `allVehicles` both return `[Vehicle]`; one is declared
    /// with `vehicles_type`, the other with `all_vehicles_type`.
    fn two_vehicle_fields(
        vehicles_type: &str,
        all_vehicles_type: &str,
    ) -> (SchemaTypeGraph, ControllerRegistry) {
        let schema = build_schema(&format!(
            "{VEHICLES_SDL} extend type Query {{ allVehicles: [Vehicle] }}",
        ));
        let controllers = ControllerRegistry::builder()
            .query("vehicles", ControllerMethod::new("C", "vehicles", parse_ref(vehicles_type)))
            .and_then(|builder| builder.query(
                "allVehicles",
                ControllerMethod::new("C", "allVehicles", parse_ref(all_vehicles_type)),
            ))
            .unwrap()
            .build();
        (schema, controllers)
    }

    #[test]
    fn implementation_returned_by_another_field_is_not_skipped() -> Result<()> {
        let host_types = host_types([
            vehicle_interface(),
            full_car(),
            name_only("garage::Bike"),
        ]);
        for (vehicles_type, all_vehicles_type) in [
            ("Vec<garage::Car>", "Vec<garage::Vehicle>"),
            ("Vec<garage::Vehicle>", "Vec<garage::Car>"),
        ] {
            let (schema, controllers) = two_vehicle_fields(vehicles_type, all_vehicles_type);

            let report = SchemaMappingInspector::default()
                .inspect(&schema, &controllers, &host_types)?;

            assert_eq!(report.skipped_type_count(), 0, "{vehicles_type} then {all_vehicles_type}");
            assert_eq!(report.type_state("Bike"), TypeState::Resolved);
            assert_eq!(report.unmapped_fields().iter().collect::<Vec<_>>(), vec![
                &FieldCoordinate::new("Bike", "price"),
            ]);
        }

        Ok(())
    }

    #[test]
    fn skip_without_host_candidate_is_withdrawn_once_resolved() -> Result<()> {
        let host_types = host_types([
            vehicle_interface().permitting("bikes::Bike"),
            full_car(),
            HostType::concrete("bikes::Bike")
                .implementing("garage::Vehicle")
                .with_member("name", named("String"))
                .with_member("price", named("i32")),
        ]);
        for (vehicles_type, all_vehicles_type) in [
            ("Vec<garage::Car>", "Vec<garage::Vehicle>"),
            ("Vec<garage::Vehicle>", "Vec<garage::Car>"),
        ] {
            let (schema, controllers) = two_vehicle_fields(vehicles_type, all_vehicles_type);

            let report = SchemaMappingInspector::default()
                .inspect(&schema, &controllers, &host_types)?;

            assert_eq!(report.skipped_type_count(), 0, "{vehicles_type} then {all_vehicles_type}");
            assert_eq!(report.type_state("Bike"), TypeState::Resolved);
            assert!(report.is_empty());
        }

        Ok(())
    }

    #[test]
    fn include_abstract_type_policy_ignores_concrete_declared_type() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Car>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::Car").with_member("engineType", named("String")),
            name_only("garage::Bike"),
        ]);

        let report = SchemaMappingInspector::builder()
            .interface_field_policy(InterfaceFieldPolicy::IncludeAbstractType)
            .build()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_fields().iter().collect::<Vec<_>>(), vec![
            &FieldCoordinate::new("Car", "price"),
        ]);
        assert_eq!(report.unmapped_fields_for("Vehicle"), Vec::<&str>::new());

        Ok(())
    }
}

mod unions {
    use super::*;

    const SEARCH_SDL: &str = "
        type Query { search(text: String!): [SearchResult!]! }
        union SearchResult = Book | Author
        type Book { title: String }
        type Author { name: String }
    ";

    #[test]
    fn union_members_resolved_from_abstract_return_type() -> Result<()> {
        let schema = build_schema(SEARCH_SDL);
        let controllers = query_controller("search", "Vec<library::SearchResult>");
        let host_types = host_types([
            HostType::abstract_type("library::SearchResult")
                .permitting("library::Book")
                .permitting("library::Author"),
            HostType::concrete("library::Book").with_member("title", named("String")),
            HostType::concrete("library::Author"),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_fields_for("Author"), vec!["name"]);
        assert_eq!(report.skipped_type_count(), 0);

        Ok(())
    }

    #[test]
    fn union_with_no_active_implementations() -> Result<()> {
        let schema = build_schema(SEARCH_SDL);
        let controllers = query_controller("search", "Vec<_>");
        let host_types = host_types([]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.skipped_type_names(), vec!["Book", "Author"]);
        assert!(report.skipped_types().iter().all(
            |skipped| skipped.reason() == SkipReason::OpaqueHostType,
        ));
        assert_eq!(report.type_state("SearchResult"), TypeState::Skipped);

        Ok(())
    }
}

mod traversal {
    use super::*;

    #[test]
    fn self_referential_type_terminates() -> Result<()> {
        let schema = build_schema("
            type Query { node: Node }
            type Node { name: String parent: Node children: [Node!]! missing: Int }
        ");
        let controllers = query_controller("node", "tree::Node");
        let host_types = host_types([
            HostType::concrete("tree::Node")
                .with_member("name", named("String"))
                .with_member("parent", parse_ref("Option<Box<tree::Node>>"))
                .with_member("children", parse_ref("Vec<tree::Node>")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_fields().iter().collect::<Vec<_>>(), vec![
            &FieldCoordinate::new("Node", "missing"),
        ]);
        assert_eq!(report.type_state("Node"), TypeState::Resolved);

        Ok(())
    }

    #[test]
    fn mutually_referential_types_terminate() -> Result<()> {
        let schema = build_schema("
            type Query { a: A }
            type A { b: B onlyOnA: Int }
            type B { a: A onlyOnB: Int }
        ");
        let controllers = query_controller("a", "m::A");
        let host_types = host_types([
            HostType::concrete("m::A").with_member("b", named("m::B")),
            HostType::concrete("m::B").with_member("a", named("m::A")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 2);
        assert_eq!(report.unmapped_fields_for("A"), vec!["onlyOnA"]);
        assert_eq!(report.unmapped_fields_for("B"), vec!["onlyOnB"]);

        Ok(())
    }

    #[test]
    fn registered_nested_field_overrides_host_member_lookup() -> Result<()> {
        let schema = build_schema("
            type Query { books: [Book] }
            type Book { title: String author: Author }
            type Author { name: String }
        ");
        let controllers = ControllerRegistry::builder()
            .query("books", ControllerMethod::new("BookController", "books", parse_ref("Vec<library::Book>")))
            .and_then(|builder| builder.schema_mapping(
                "Book",
                "author",
                ControllerMethod::new("BookController", "author", named("library::Author")),
            ))
            .unwrap()
            .build();
        let host_types = host_types([
            HostType::concrete("library::Book").with_member("title", named("String")),
            HostType::concrete("library::Author").with_member("name", named("String")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert!(report.is_empty());
        assert_eq!(report.type_state("Author"), TypeState::Resolved);

        Ok(())
    }

    #[test]
    fn unregistered_root_fields_are_unmapped() -> Result<()> {
        let schema = build_schema("
            type Query { count: Int books: [String] }
            type Mutation { addBook(title: String): Boolean }
        ");
        let controllers = query_controller("count", "i32");

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &HostTypeRegistry::new())?;

        assert_eq!(report.unmapped_fields().iter().map(|c| c.to_string()).collect::<Vec<_>>(), vec![
            "Query.books",
            "Mutation.addBook",
        ]);
        assert_eq!(report.type_state("Int"), TypeState::Resolved);
        assert_eq!(report.type_state("Boolean"), TypeState::Unvisited);

        Ok(())
    }

    #[test]
    fn wrapper_types_are_unwrapped() -> Result<()> {
        let schema = build_schema("
            type Query { book: Book }
            type Book { title: String }
        ");
        let controllers = query_controller(
            "book",
            "Mono<Result<Option<std::sync::Arc<library::Book>>, Error>>",
        );
        let host_types = host_types([
            HostType::concrete("library::Book").with_member("title", named("String")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;
        assert_eq!(report.skipped_types_for("Book")[0].reason(), SkipReason::UnknownHostType);

        let report = SchemaMappingInspector::builder()
            .wrapper_type("Mono")
            .build()
            .inspect(&schema, &controllers, &host_types)?;
        assert!(report.is_empty());

        Ok(())
    }

    #[test]
    fn opaque_member_type_is_skipped() -> Result<()> {
        let schema = build_schema("
            type Query { book: Book }
            type Book { metadata: Metadata }
            type Metadata { key: String }
        ");
        let controllers = query_controller("book", "library::Book");
        let host_types = host_types([
            HostType::concrete("library::Book").with_member("metadata", parse_ref("_")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_field_count(), 0);
        let skipped = report.skipped_types_for("Metadata");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].reason(), SkipReason::OpaqueHostType);
        assert_eq!(
            skipped[0].field_coordinate(),
            Some(&FieldCoordinate::new("Book", "metadata")),
        );

        Ok(())
    }

    #[test]
    fn member_names_are_case_sensitive() -> Result<()> {
        let schema = build_schema("
            type Query { book: Book }
            type Book { pageCount: Int }
        ");
        let controllers = query_controller("book", "library::Book");
        let host_types = host_types([
            HostType::concrete("library::Book").with_member("pagecount", named("i32")),
        ]);

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &host_types)?;

        assert_eq!(report.unmapped_fields_for("Book"), vec!["pageCount"]);

        Ok(())
    }
}

mod registrations {
    use super::*;

    #[test]
    fn registrations_and_arguments_missing_from_schema() -> Result<()> {
        let schema = build_schema("
            type Query { bookById(id: ID!): String }
        ");
        let controllers = ControllerRegistry::builder()
            .query("bookById", ControllerMethod::new("BookController", "bookById", named("String"))
                .with_argument("id")
                .with_argument("isbn"))
            .and_then(|builder| builder.query(
                "magazines",
                ControllerMethod::new("MagazineController", "magazines", parse_ref("Vec<String>")),
            ))
            .unwrap()
            .build();

        let report = SchemaMappingInspector::default()
            .inspect(&schema, &controllers, &HostTypeRegistry::new())?;

        assert_eq!(report.unmapped_field_count(), 0);
        assert_eq!(report.unmapped_registrations().len(), 1);
        let registration = &report.unmapped_registrations()[0];
        assert_eq!(registration.field_coordinate(), &FieldCoordinate::new("Query", "magazines"));
        assert_eq!(registration.method(), "MagazineController::magazines");

        assert_eq!(report.unmapped_arguments().len(), 1);
        let argument = &report.unmapped_arguments()[0];
        assert_eq!(argument.argument_name(), "isbn");
        assert_eq!(argument.field_coordinate(), &FieldCoordinate::new("Query", "bookById"));
        assert!(!report.is_empty());

        Ok(())
    }
}

mod resolver_configuration {
    use super::*;

    #[test]
    fn explicit_mapping_takes_precedence_over_class_name_function() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::Car")
                .with_member("price", named("i32"))
                .with_member("engineType", named("String")),
            name_only("garage::CarImpl"),
            name_only("garage::BikeImpl").with_member("price", named("i32")),
        ]);
        let mut type_resolver = ClassNameTypeResolver::new();
        type_resolver.add_mapping("garage::Car", "Car");

        let report = SchemaMappingInspector::builder()
            .class_name_function(|name| format!("{name}Impl"))
            .class_name_type_resolver(&type_resolver)
            .build()
            .inspect(&schema, &controllers, &host_types)?;
        assert!(report.is_empty());

        // Without the explicit mapping, `Car` resolves to `CarImpl`.
        let report = SchemaMappingInspector::builder()
            .class_name_function(|name| format!("{name}Impl"))
            .build()
            .inspect(&schema, &controllers, &host_types)?;
        assert_eq!(report.unmapped_fields_for("Car"), vec!["price", "engineType"]);

        Ok(())
    }

    #[test]
    fn custom_class_resolver_is_consulted_first() -> Result<()> {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([
            vehicle_interface(),
            name_only("garage::Car"),
            name_only("garage::Bike"),
            name_only("garage::Bicycle").with_member("price", named("i32")),
        ]);
        let mut table = ClassNameTable::new();
        table.insert("Bike", "garage::Bicycle");

        let report = SchemaMappingInspector::builder()
            .class_resolver(table)
            .build()
            .inspect(&schema, &controllers, &host_types)?;

        assert!(report.unmapped_fields_for("Bike").is_empty());
        assert_eq!(report.unmapped_fields_for("Car"), vec!["price", "engineType"]);

        Ok(())
    }

    #[test]
    fn mapping_to_unknown_schema_type_is_fatal() {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([vehicle_interface(), name_only("garage::Car")]);
        let mut type_resolver = ClassNameTypeResolver::new();
        type_resolver.add_mapping("garage::Car", "Truck");

        let result = SchemaMappingInspector::builder()
            .class_name_type_resolver(&type_resolver)
            .build()
            .inspect(&schema, &controllers, &host_types);

        assert_eq!(
            result.unwrap_err(),
            InspectError::ClassResolverConfig(ClassResolverConfigError::UnknownSchemaType {
                host_type_path: "garage::Car".to_string(),
                schema_type_name: "Truck".to_string(),
            }),
        );
    }

    #[test]
    fn mapping_to_unknown_host_type_is_fatal() {
        let schema = build_schema(VEHICLES_SDL);
        let controllers = query_controller("vehicles", "Vec<garage::Vehicle>");
        let host_types = host_types([vehicle_interface()]);
        let mut type_resolver = ClassNameTypeResolver::new();
        type_resolver.add_mapping("garage::Car", "Car");

        let result = SchemaMappingInspector::builder()
            .class_name_type_resolver(&type_resolver)
            .build()
            .inspect(&schema, &controllers, &host_types);

        assert!(matches!(
            result,
            Err(InspectError::ClassResolverConfig(ClassResolverConfigError::UnknownHostType { .. })),
        ));
    }

    #[test]
    fn malformed_sdl_is_fatal() {
        let result = SchemaMappingInspector::default().inspect_sdl(
            "type Query {",
            &ControllerRegistry::default(),
            &HostTypeRegistry::new(),
        );

        assert!(matches!(
            result,
            Err(InspectError::SchemaBuild(SchemaBuildError::ParseError { .. })),
        ));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const MEMBER_NAMES: [&str; 3] = ["name", "price", "engineType"];

    fn car_with_members(present: &[bool]) -> HostType {
        let mut car = HostType::concrete("garage::Car").implementing("garage::Vehicle");
        for (name, is_present) in MEMBER_NAMES.iter().zip(present) {
            if *is_present {
                car = car.with_member(*name, named("String"));
            }
        }
        car
    }

    proptest! {
        #[test]
        fn inspection_is_idempotent(
            car_members in prop::collection::vec(any::<bool>(), 3),
            register_bike in any::<bool>(),
            concrete_return in any::<bool>(),
        ) {
            let schema = build_schema(VEHICLES_SDL);
            let return_type =
                if concrete_return { "Vec<garage::Car>" } else { "Vec<garage::Vehicle>" };
            let controllers = query_controller("vehicles", return_type);
            let mut types = vec![vehicle_interface(), car_with_members(&car_members)];
            if register_bike {
                types.push(name_only("garage::Bike"));
            }
            let host_types = host_types(types);

            let inspector = SchemaMappingInspector::default();
            let first = inspector.inspect(&schema, &controllers, &host_types).unwrap();
            let second = inspector.inspect(&schema, &controllers, &host_types).unwrap();
            let fresh = SchemaMappingInspector::default()
                .inspect(&schema, &controllers, &host_types)
                .unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(&first, &fresh);

            let missing_car_members = car_members.iter().filter(|present| !**present).count();
            let expected_unmapped =
                missing_car_members + if register_bike && !concrete_return { 1 } else { 0 };
            prop_assert_eq!(first.unmapped_field_count(), expected_unmapped);
        }

        #[test]
        fn unmapped_fields_are_never_duplicated(depth in 1usize..6) {
            // A chain of types that all point back to the first one.
            let mut sdl = String::from("type Query { t0: T0 }\n");
            for idx in 0..depth {
                let next = (idx + 1) % depth;
                sdl.push_str(&format!("type T{idx} {{ next: T{next} back: T0 gap: Int }}\n"));
            }
            let schema = build_schema(&sdl);
            let controllers = query_controller("t0", "chain::T0");
            let host_types = host_types((0..depth).map(|idx| {
                let next = (idx + 1) % depth;
                HostType::concrete(format!("chain::T{idx}"))
                    .with_member("next", named(&format!("chain::T{next}")))
                    .with_member("back", named("chain::T0"))
            }));

            let report = SchemaMappingInspector::default()
                .inspect(&schema, &controllers, &host_types)
                .unwrap();

            prop_assert_eq!(report.unmapped_field_count(), depth);
            for idx in 0..depth {
                let type_name = format!("T{idx}");
                prop_assert_eq!(report.unmapped_fields_for(&type_name), vec!["gap"]);
            }
        }
    }
}

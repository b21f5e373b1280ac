use crate::controller::ControllerMethod;
use crate::controller::ControllerRegistry;
use crate::controller::ControllerRegistryError;
use crate::controller::MappingTarget;
use crate::host::HostTypeRef;
use crate::schema::FieldCoordinate;
use crate::schema::OperationKind;
use crate::schema::SchemaGraphBuilder;

type Result<T> = std::result::Result<T, ControllerRegistryError>;

fn method(name: &str) -> ControllerMethod {
    ControllerMethod::new("BookController", name, HostTypeRef::named("library::Book"))
}

#[test]
fn registrations_keep_insertion_order() -> Result<()> {
    let controllers = ControllerRegistry::builder()
        .query("bookById", method("bookById").with_argument("id"))?
        .mutation("addBook", method("addBook"))?
        .subscription("bookAdded", method("bookAdded"))?
        .coordinate("Book.author", method("author"))?
        .build();

    assert_eq!(
        controllers.mappings().keys().map(|t| t.to_string()).collect::<Vec<_>>(),
        vec!["Query.bookById", "Mutation.addBook", "Subscription.bookAdded", "Book.author"],
    );
    let book_by_id = controllers.get(&MappingTarget::Operation {
        field_name: "bookById".to_string(),
        operation: OperationKind::Query,
    }).unwrap();
    assert_eq!(book_by_id.arguments(), &["id".to_string()]);
    assert_eq!(book_by_id.to_string(), "BookController::bookById");

    Ok(())
}

#[test]
fn duplicate_mapping() -> Result<()> {
    let result = ControllerRegistry::builder()
        .query("books", method("books"))?
        .query("books", method("allBooks"));

    assert_eq!(result.unwrap_err(), ControllerRegistryError::DuplicateMapping {
        existing_method: "BookController::books".to_string(),
        new_method: "BookController::allBooks".to_string(),
        target: MappingTarget::Operation {
            field_name: "books".to_string(),
            operation: OperationKind::Query,
        },
    });

    Ok(())
}

#[test]
fn invalid_coordinate() {
    assert!(matches!(
        ControllerRegistry::builder().coordinate("Book", method("book")),
        Err(ControllerRegistryError::InvalidCoordinate { coordinate })
            if coordinate == "Book",
    ));
}

#[test]
fn operation_targets_follow_schema_root_types() -> Result<()> {
    let schema = SchemaGraphBuilder::new()
        .load_str(None, "schema { query: RootQuery }\ntype RootQuery { books: [String] }")
        .and_then(|builder| builder.build())
        .unwrap();

    let controllers = ControllerRegistry::builder()
        .query("books", method("books"))?
        .mutation("addBook", method("addBook"))?
        .build();

    let coordinates = controllers.coordinate_map(&schema);
    assert_eq!(
        coordinates.keys().cloned().collect::<Vec<_>>(),
        vec![
            FieldCoordinate::new("RootQuery", "books"),
            FieldCoordinate::new("Mutation", "addBook"),
        ],
    );

    Ok(())
}

#[test]
fn first_registration_wins_when_targets_collide() -> Result<()> {
    let schema = SchemaGraphBuilder::new()
        .load_str(None, "type Query { books: [String] }")
        .and_then(|builder| builder.build())
        .unwrap();

    let controllers = ControllerRegistry::builder()
        .query("books", method("books"))?
        .schema_mapping("Query", "books", method("otherBooks"))?
        .build();

    let coordinates = controllers.coordinate_map(&schema);
    assert_eq!(coordinates.len(), 1);
    assert_eq!(
        coordinates.get(&FieldCoordinate::new("Query", "books")).map(|m| m.name()),
        Some("books"),
    );

    Ok(())
}

mod schema_mapping_inspector_tests;

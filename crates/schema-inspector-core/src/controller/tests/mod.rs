mod controller_registry_tests;

mod host_type_derive_tests;

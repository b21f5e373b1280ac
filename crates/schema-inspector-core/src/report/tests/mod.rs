mod schema_report_tests;

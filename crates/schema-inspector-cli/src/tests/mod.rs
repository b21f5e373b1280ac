mod inspect_cmd_tests;

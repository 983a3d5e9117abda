mod value_from_ast_tests;

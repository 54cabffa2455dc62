pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

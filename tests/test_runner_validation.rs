#[path = "../test_utils/lib.rs"]
mod test_utils;

use std::fs::read_dir;
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::run_test_for_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_top_from_multiple_files() {
        // Read all files in the directory
        let files = read_dir(TEST_FILES_DIRECTORY).expect("Failed to read test files directory");

        let mut file_count = 0;
        for file in files {
            let file_path = file.expect("Failed to read file").path();

            // Run the test for each file (if it is a file)
            if file_path.is_file() {
                run_test_for_file(&file_path);
                file_count += 1;
            }
        }

        assert!(file_count > 0, "No test files found in {}", TEST_FILES_DIRECTORY);
    }
}

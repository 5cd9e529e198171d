use std::fs::File;
use std::io::{self, BufRead};

use log::info;

/// Load vocabulary words from a plain text file (one word per line).
///
/// Order is preserved so the jumbler's word selection stays stable
/// across restarts; deduplication is the vocabulary's job. Blank lines
/// are skipped, surrounding whitespace is stripped, and the words are
/// otherwise kept verbatim (no case normalization).
pub fn load_words(file_path: &str) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    info!("Loaded {} words from {}", words.len(), file_path);
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_words_skips_blanks_and_trims() {
        let dir = std::env::temp_dir();
        let path = dir.join("vocabd_loader_test.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  dog  ").unwrap();
        writeln!(file, "Bird").unwrap();
        drop(file);

        let words = load_words(path.to_str().unwrap()).unwrap();
        assert_eq!(words, vec!["cat", "dog", "Bird"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_words_missing_file() {
        assert!(load_words("/nonexistent/vocab.txt").is_err());
    }
}

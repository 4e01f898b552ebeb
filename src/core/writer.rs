use crate::core::numbers::word_file_name;
use crate::core::tiles::letter_distribution;
use crate::core::Storage;
use crate::domain::model::{PlayerMode, TileDistribution, WordFile, WordsByLength};
use crate::utils::error::Result;

pub const WORDS_DIR: &str = "words";

/// Resolves the output path of every bucket. Fails on the first length
/// without an English name, before anything is written.
pub fn plan_word_files(words: &WordsByLength) -> Result<Vec<WordFile>> {
    words
        .lengths()
        .map(|length| {
            Ok(WordFile {
                length,
                path: format!("{}/{}", WORDS_DIR, word_file_name(length)?),
            })
        })
        .collect()
}

/// Writes one JSON array per bucket, overwriting existing files.
pub async fn write_word_files<S: Storage>(
    storage: &S,
    words: &WordsByLength,
    files: &[WordFile],
) -> Result<Vec<String>> {
    storage.create_dir_all(WORDS_DIR).await?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let bucket = words.get(file.length).unwrap_or_default();
        let data = serde_json::to_vec(bucket)?;
        tracing::debug!("Writing {} words to {}", bucket.len(), file.path);
        storage.write_file(&file.path, &data).await?;
        written.push(file.path.clone());
    }
    Ok(written)
}

pub async fn write_tile_distribution<S: Storage>(
    storage: &S,
    mode: PlayerMode,
    tiles: &TileDistribution,
) -> Result<String> {
    let data = serde_json::to_vec(tiles)?;
    tracing::debug!(
        "Writing {} letters ({} tiles budget) to {}",
        tiles.len(),
        mode.tile_budget(),
        mode.file_name()
    );
    storage.write_file(mode.file_name(), &data).await?;
    Ok(mode.file_name().to_string())
}

/// Computes and writes the distribution for `mode` in one step.
pub async fn write_letter_distribution<S: Storage>(
    storage: &S,
    words: &WordsByLength,
    mode: PlayerMode,
) -> Result<String> {
    let tiles = letter_distribution(words, mode);
    write_tile_distribution(storage, mode, &tiles).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::core::grouper::group_by_length;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_plan_word_files() {
        let words = group_by_length(["fig", "kiwi", "plum"]);
        let files = plan_word_files(&words).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["words/threeLetterWords.json", "words/fourLetterWords.json"]
        );
    }

    #[test]
    fn test_plan_fails_for_hundred_letter_word() {
        let long = "a".repeat(100);
        let words = group_by_length(vec!["fig".to_string(), long]);
        assert!(plan_word_files(&words).is_err());
    }

    #[tokio::test]
    async fn test_word_file_reads_back_as_bucket() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let words = group_by_length(["kiwi", "fig", "plum", "pear"]);
        let files = plan_word_files(&words).unwrap();

        let written = write_word_files(&storage, &words, &files).await.unwrap();
        assert_eq!(written.len(), 2);

        let data = std::fs::read(temp_dir.path().join("words/fourLetterWords.json")).unwrap();
        let read_back: Vec<String> = serde_json::from_slice(&data).unwrap();
        assert_eq!(read_back, words.get(4).unwrap());
        assert_eq!(
            String::from_utf8(data).unwrap(),
            r#"["kiwi","plum","pear"]"#
        );
    }

    #[tokio::test]
    async fn test_words_dir_created_without_buckets() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let words = group_by_length(Vec::<String>::new());

        let written = write_word_files(&storage, &words, &[]).await.unwrap();
        assert!(written.is_empty());
        assert!(temp_dir.path().join(WORDS_DIR).is_dir());
    }

    #[tokio::test]
    async fn test_write_letter_distribution() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let words = group_by_length(["bat", "bee"]);

        let name = write_letter_distribution(&storage, &words, PlayerMode::SinglePlayer)
            .await
            .unwrap();
        assert_eq!(name, "tilesSinglePlayer.json");

        let data = std::fs::read(temp_dir.path().join(name)).unwrap();
        let tiles: BTreeMap<String, u64> = serde_json::from_slice(&data).unwrap();
        assert_eq!(tiles["B"], 24);
        assert_eq!(tiles["E"], 24);
        assert_eq!(
            String::from_utf8(data).unwrap(),
            r#"{"A":12,"B":24,"E":24,"T":12}"#
        );
    }
}

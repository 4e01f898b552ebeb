use crate::core::grouper::group_by_length;
use crate::core::loader::WordList;
use crate::core::tiles::letter_distribution;
use crate::core::writer::{plan_word_files, write_tile_distribution, write_word_files};
use crate::core::{ConfigProvider, Pipeline, Storage, WordSource};
use crate::domain::model::{LoadReport, PlayerMode, TransformResult};
use crate::utils::error::Result;

/// Word list → per-length word files and tile distributions.
pub struct WordListPipeline<S: Storage, W: WordSource, C: ConfigProvider> {
    storage: S,
    source: W,
    config: C,
}

impl<S: Storage, W: WordSource, C: ConfigProvider> WordListPipeline<S, W, C> {
    pub fn new(storage: S, source: W, config: C) -> Self {
        Self {
            storage,
            source,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, W: WordSource, C: ConfigProvider> Pipeline for WordListPipeline<S, W, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let content = self
            .source
            .fetch_or_load(self.config.word_list_url(), self.config.cache_path())
            .await?;

        let list = WordList::new(content);
        let words: Vec<String> = list.words().map(str::to_string).collect();
        tracing::debug!(
            "Kept {} of {} lines after proper-noun filter",
            words.len(),
            list.line_count()
        );
        Ok(words)
    }

    async fn transform(&self, words: Vec<String>) -> Result<TransformResult> {
        let words_by_length = group_by_length(words);
        let word_files = plan_word_files(&words_by_length)?;

        let single_player_tiles = letter_distribution(&words_by_length, PlayerMode::SinglePlayer);
        let multiplayer_tiles = letter_distribution(&words_by_length, PlayerMode::Multiplayer);

        Ok(TransformResult {
            words_by_length,
            word_files,
            single_player_tiles,
            multiplayer_tiles,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<LoadReport> {
        let mut files_written =
            write_word_files(&self.storage, &result.words_by_length, &result.word_files).await?;

        for mode in PlayerMode::ALL {
            let name = write_tile_distribution(&self.storage, mode, result.tiles(mode)).await?;
            files_written.push(name);
        }

        Ok(LoadReport {
            output_path: self.config.output_path().to_string(),
            files_written,
        })
    }
}

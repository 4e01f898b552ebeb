use crate::core::Pipeline;
use crate::domain::model::LoadReport;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadReport> {
        tracing::info!("Starting word list processing");

        // Extract
        let words = self.pipeline.extract().await?;
        tracing::info!("Extracted {} candidate words", words.len());

        // Transform
        let result = self.pipeline.transform(words).await?;
        tracing::info!(
            "Grouped {} words into {} length buckets ({} letters)",
            result.words_by_length.word_count(),
            result.words_by_length.bucket_count(),
            result.words_by_length.num_letters()
        );

        // Load
        let report = self.pipeline.load(result).await?;
        tracing::info!(
            "Wrote {} files to {}",
            report.files_written.len(),
            report.output_path
        );

        Ok(report)
    }
}

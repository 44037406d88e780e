//! Sentence embeddings and cosine similarity using Model2Vec

use crate::error::{AnalyzerError, Result};
use log::info;
use model2vec_rs::model::StaticModel;
use std::sync::OnceLock;
use std::time::Instant;

static ENGINE: OnceLock<EmbeddingEngine> = OnceLock::new();

/// Wraps the static embedding model. Loaded once per process and read-only
/// afterwards, so it can be shared without locking.
pub struct EmbeddingEngine {
    model: StaticModel,
    model_id: String,
}

impl EmbeddingEngine {
    pub fn load(model_id: &str) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading Model2Vec embedding model: {}", model_id);

        let model = StaticModel::from_pretrained(
            model_id, None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| AnalyzerError::Embedding(format!("Failed to load model: {}", e)))?;

        info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_id: model_id.to_string(),
        })
    }

    /// Process-wide engine, initialized lazily on first use and never torn
    /// down within the process lifetime. Requesting a different model id
    /// after initialization is an error rather than a silent reuse.
    pub fn global(model_id: &str) -> Result<&'static EmbeddingEngine> {
        if let Some(engine) = ENGINE.get() {
            check_model_id(engine.model_id(), model_id)?;
            return Ok(engine);
        }
        let engine = Self::load(model_id)?;
        let engine = ENGINE.get_or_init(|| engine);
        check_model_id(engine.model_id(), model_id)?;
        Ok(engine)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn encode(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }

    /// Cosine similarity between the embeddings of two texts, in [-1, 1].
    pub fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32> {
        let embedding_a = self.encode(text_a);
        let embedding_b = self.encode(text_b);
        cosine_similarity(&embedding_a, &embedding_b)
    }
}

fn check_model_id(loaded: &str, requested: &str) -> Result<()> {
    if loaded != requested {
        return Err(AnalyzerError::Embedding(format!(
            "Embedding engine already initialized with model '{}', cannot switch to '{}'",
            loaded, requested
        )));
    }
    Ok(())
}

/// Cosine similarity between two vectors.
///
/// Zero-magnitude or empty vectors score 0.0; mismatched dimensions are an
/// error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(AnalyzerError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5::{Config, T5ForConditionalGeneration};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::{Tokenizer, TruncationParams};

use crate::application::ports::{ModelSummary, Summarizer, SummarizerError, SummaryLength};

const TASK_PREFIX: &str = "summarize: ";
const MAX_INPUT_TOKENS: usize = 512;

/// Local T5-family summarizer. Decoding is greedy, so identical input always
/// yields the identical summary.
pub struct CandleT5Summarizer {
    runtime: Arc<T5Runtime>,
}

struct T5Runtime {
    model: Mutex<T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
}

impl CandleT5Summarizer {
    pub fn new(model_id: &str, revision: &str) -> Result<Self, SummarizerError> {
        let device = Device::Cpu;

        tracing::info!(
            device = ?device,
            model = model_id,
            revision,
            "Initializing Candle T5 summarization model"
        );

        let api = Api::new().map_err(|e| SummarizerError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::with_revision(
            model_id.to_string(),
            RepoType::Model,
            revision.to_string(),
        ));

        let config_path = repo
            .get("config.json")
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("model.safetensors: {}", e)))?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: Config = serde_json::from_str(&config_contents)
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("tokenizer: {}", e)))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_INPUT_TOKENS,
                ..Default::default()
            }))
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("truncation config: {}", e)))?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| SummarizerError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| SummarizerError::ModelLoadFailed(format!("model: {}", e)))?;

        tracing::info!("Candle T5 summarization model loaded successfully");

        Ok(Self {
            runtime: Arc::new(T5Runtime {
                model: Mutex::new(model),
                tokenizer,
                config,
                device,
            }),
        })
    }
}

fn inference_error(e: impl Display) -> SummarizerError {
    SummarizerError::InferenceFailed(e.to_string())
}

impl T5Runtime {
    fn generate(&self, text: &str, length: SummaryLength) -> Result<ModelSummary, SummarizerError> {
        let prompt = format!("{TASK_PREFIX}{text}");
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| SummarizerError::InferenceFailed(format!("tokenization: {}", e)))?;
        // The tokenizer cuts at MAX_INPUT_TOKENS and keeps the rest as overflow.
        let input_truncated = !encoding.get_overflowing().is_empty();

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(inference_error)?;

        let eos_token = self.config.eos_token_id as u32;
        let start_token = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;

        let mut model = self
            .model
            .lock()
            .map_err(|_| SummarizerError::InferenceFailed("model lock poisoned".to_string()))?;

        let encoder_output = model.encode(&input_ids).map_err(inference_error)?;
        let mut output_tokens = vec![start_token];

        for step in 0..length.max_tokens {
            let decoder_input = if step == 0 || !self.config.use_cache {
                Tensor::new(output_tokens.as_slice(), &self.device)
            } else {
                Tensor::new(&output_tokens[output_tokens.len() - 1..], &self.device)
            }
            .and_then(|t| t.unsqueeze(0))
            .map_err(inference_error)?;

            let mut scores: Vec<f32> = model
                .decode(&decoder_input, &encoder_output)
                .and_then(|logits| logits.squeeze(0))
                .and_then(|logits| logits.to_dtype(DType::F32))
                .and_then(|logits| logits.to_vec1())
                .map_err(inference_error)?;

            if step < length.min_tokens {
                if let Some(score) = scores.get_mut(eos_token as usize) {
                    *score = f32::NEG_INFINITY;
                }
            }

            let next_token = argmax(&scores);
            if next_token == eos_token {
                break;
            }
            output_tokens.push(next_token);
        }

        model.clear_kv_cache();
        drop(model);

        let summary = self
            .tokenizer
            .decode(&output_tokens[1..], true)
            .map_err(|e| SummarizerError::InferenceFailed(format!("detokenization: {}", e)))?;

        tracing::debug!(
            input_tokens = encoding.get_ids().len(),
            output_tokens = output_tokens.len() - 1,
            input_truncated,
            "T5 generation complete"
        );

        Ok(ModelSummary {
            text: summary.trim().to_string(),
            input_truncated,
        })
    }
}

fn argmax(scores: &[f32]) -> u32 {
    scores
        .iter()
        .enumerate()
        .fold((0usize, f32::NEG_INFINITY), |best, (index, &score)| {
            if score > best.1 { (index, score) } else { best }
        })
        .0 as u32
}

#[async_trait]
impl Summarizer for CandleT5Summarizer {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<ModelSummary, SummarizerError> {
        let runtime = Arc::clone(&self.runtime);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || runtime.generate(&text, length))
            .await
            .map_err(|e| SummarizerError::InferenceFailed(format!("task join error: {e}")))?
    }
}

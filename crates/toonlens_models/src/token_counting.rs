//! Local token counting with tiktoken.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tiktoken_rs::CoreBPE;
use toonlens_error::{ModelsError, ModelsErrorKind, ModelsResult};
use toonlens_interface::TokenCounting;
use tracing::{debug, instrument};

/// Encoding used for models tiktoken does not recognize.
pub const FALLBACK_ENCODING: &str = "cl100k_base";

/// Counts tokens with the BPE tokenizer matching a model name.
///
/// Unknown models are counted with [`FALLBACK_ENCODING`]. Loaded
/// tokenizers are cached per model.
#[derive(Default)]
pub struct TiktokenCounter {
    cache: Mutex<HashMap<String, Arc<CoreBPE>>>,
}

impl std::fmt::Debug for TiktokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("TiktokenCounter")
            .field("models", &cache.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TiktokenCounter {
    /// Creates a counter with an empty tokenizer cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `model` is counted with the fallback encoding.
    pub fn uses_fallback(model: &str) -> bool {
        tiktoken_rs::get_bpe_from_model(model).is_err()
    }

    fn tokenizer(&self, model: &str) -> ModelsResult<Arc<CoreBPE>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(bpe) = cache.get(model) {
            return Ok(Arc::clone(bpe));
        }

        let bpe = match tiktoken_rs::get_bpe_from_model(model) {
            Ok(bpe) => bpe,
            Err(e) => {
                debug!(
                    model,
                    error = %e,
                    encoding = FALLBACK_ENCODING,
                    "Unknown model, using fallback encoding"
                );
                tiktoken_rs::cl100k_base().map_err(|e| {
                    ModelsError::new(ModelsErrorKind::TokenCountingFailed(format!(
                        "Failed to load tokenizer: {}",
                        e
                    )))
                })?
            }
        };

        let bpe = Arc::new(bpe);
        cache.insert(model.to_string(), Arc::clone(&bpe));
        Ok(bpe)
    }
}

impl TokenCounting for TiktokenCounter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    fn count_tokens(&self, model: &str, text: &str) -> ModelsResult<u64> {
        let tokenizer = self.tokenizer(model)?;
        let count = tokenizer.encode_with_special_tokens(text).len() as u64;
        debug!(token_count = count, "Counted tokens");
        Ok(count)
    }
}

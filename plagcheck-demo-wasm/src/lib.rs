use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod tiers;

pub use tiers::{tier_infos, TierInfo};

use plagcheck::{
    align, tokenize, AlignmentDisplay, AnalysisResult, Analyzer, CompareRequest, RequestError,
    RequestLimits, TextSide, Verdict,
};

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Largest number of words accepted per text. The alignment table holds
/// one cell per word pair.
const MAX_WORDS: usize = 2_000;

fn limits() -> RequestLimits {
    RequestLimits {
        max_words: Some(MAX_WORDS),
    }
}

/// Error body returned instead of a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<RequestError> for ErrorResponse {
    fn from(err: RequestError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}

/// Either the requested record or an [`ErrorResponse`], serialized without a
/// wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> From<Result<T, RequestError>> for Response<T> {
    fn from(result: Result<T, RequestError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err.into()),
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

// ============================================================================
// COMPARISON API
// ============================================================================

/// Full comparison of two texts.
///
/// Returns the analysis record (score, message and details with matched
/// lines, consecutive sequences and highlighted texts), or
/// `{ error: "Both texts are required" }` when either text is missing.
#[wasm_bindgen]
pub fn analyze_texts(text1: Option<String>, text2: Option<String>) -> JsValue {
    init();
    to_js(&analyze_texts_internal(text1, text2))
}

fn analyze_texts_internal(
    text1: Option<String>,
    text2: Option<String>,
) -> Response<AnalysisResult> {
    let request = CompareRequest { text1, text2 };
    request.analyze(&Analyzer::default(), &limits()).into()
}

/// Score-only comparison: `{ score, message }`.
#[wasm_bindgen]
pub fn check_plagiarism(text1: Option<String>, text2: Option<String>) -> JsValue {
    init();
    to_js(&check_plagiarism_internal(text1, text2))
}

fn check_plagiarism_internal(text1: Option<String>, text2: Option<String>) -> Response<Verdict> {
    let request = CompareRequest { text1, text2 };
    request.verdict(&limits()).into()
}

/// Plain-text view of how the words of `text1` align with `text2`, as a
/// string, or an error object under the same rules as [`analyze_texts`].
#[wasm_bindgen]
pub fn render_alignment(text1: Option<String>, text2: Option<String>) -> JsValue {
    init();
    to_js(&render_alignment_internal(text1, text2))
}

fn render_alignment_internal(text1: Option<String>, text2: Option<String>) -> Response<String> {
    let request = CompareRequest { text1, text2 };
    let (text1, text2) = match request.validate(&limits()) {
        Ok(texts) => texts,
        Err(err) => return Response::Error(err.into()),
    };

    let analyzer = Analyzer::default();
    let tokens1 = tokenize(text1);
    let tokens2 = tokenize(text2);
    let alignment = align(&tokens1, &tokens2);

    let mut display = AlignmentDisplay::new(&tokens1, &alignment, TextSide::Text1);
    display
        .include_matches()
        .include_runs(analyzer.config().min_run_length);
    Response::Ok(display.to_string())
}

/// Tier thresholds, messages and colours for a legend.
#[wasm_bindgen]
pub fn get_similarity_tiers() -> JsValue {
    to_js(&tier_infos())
}

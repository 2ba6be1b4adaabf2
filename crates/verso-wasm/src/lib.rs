// WASM bindings for Spanish verse analysis.
//
// Exposes the four counting functions as free functions and a `WasmVerso`
// class that wraps `VersoHandle` for the editor's live feedback. Structured
// results (stats, readouts, form reports) are serialized to JavaScript
// objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   countText("Verso de once sílabas aquí");   // => 11
//   verseName(11);                             // => "Endecasílabo"
//
//   const verso = new WasmVerso();
//   verso.setIgnoreSectionMarkers(true);
//   verso.textStats(text);          // => { words, syllables, chars }
//   verso.lineReadout(text, caret); // => { syllables, verseName }
//   verso.selectionReadout(sel);    // => { syllables, verseName } | undefined
//   verso.checkPoem("soneto", text); // => { form, verses: [...], ... }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use verso_es::VersoError;
use verso_es::forms::{PoemForm, Stanza};
use verso_es::handle::VersoHandle;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a poem form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsForm {
    id: &'static str,
    name: &'static str,
    tag: &'static str,
    description: &'static str,
    stanzas: &'static [Stanza],
    verse_count: Option<usize>,
    guide: Vec<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn verso_error_to_js(e: VersoError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Convert a UTF-16 code unit offset (what DOM selections report) into a
/// character offset. Offsets inside a surrogate pair round down; offsets past
/// the end map to the character count.
fn utf16_to_char_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (chars, c) in text.chars().enumerate() {
        units += c.len_utf16();
        if units > utf16_offset {
            return chars;
        }
    }
    text.chars().count()
}

// ============================================================================
// Free functions
// ============================================================================

/// Count the syllables of a single word.
#[wasm_bindgen(js_name = "countWord")]
pub fn count_word(word: &str) -> usize {
    verso_es::count_word(word)
}

/// Count the syllables of free text. Punctuation and brackets are ignored.
#[wasm_bindgen(js_name = "countText")]
pub fn count_text(text: &str) -> usize {
    verso_es::count_text(text)
}

/// Count the whitespace-delimited words of free text.
#[wasm_bindgen(js_name = "countWords")]
pub fn count_words(text: &str) -> usize {
    verso_es::count_words(text)
}

/// Name the verse length for a syllable count, e.g. `11` -> `"Endecasílabo"`.
#[wasm_bindgen(js_name = "verseName")]
pub fn verse_name(n: i32) -> String {
    verso_es::verse_name(i64::from(n)).into_owned()
}

// ============================================================================
// WasmVerso
// ============================================================================

/// Spanish verse analysis engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmVerso {
    handle: VersoHandle,
}

impl Default for WasmVerso {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmVerso {
    /// Create a new instance with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmVerso {
        WasmVerso {
            handle: VersoHandle::new(),
        }
    }

    /// Word, syllable and character statistics for the editor status bar.
    ///
    /// Returns `{ words, syllables, chars }`.
    #[wasm_bindgen(js_name = "textStats")]
    pub fn text_stats(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.text_stats(text))
    }

    /// Readout for the line under the caret.
    ///
    /// `caret` is a UTF-16 offset as reported by DOM selections. Returns
    /// `{ syllables, verseName }`; `verseName` is null when no syllables
    /// were found.
    #[wasm_bindgen(js_name = "lineReadout")]
    pub fn line_readout(&self, text: &str, caret: usize) -> Result<JsValue, JsError> {
        let cursor = utf16_to_char_offset(text, caret);
        to_js(&self.handle.line_readout(text, cursor))
    }

    /// Readout for a selection, or `undefined` when the selection is blank.
    #[wasm_bindgen(js_name = "selectionReadout")]
    pub fn selection_readout(&self, selection: &str) -> Result<JsValue, JsError> {
        match self.handle.selection_readout(selection) {
            Some(readout) => to_js(&readout),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Readouts for every line of a text.
    ///
    /// Returns an array of `{ line, text, syllables, verseName }`.
    #[wasm_bindgen(js_name = "lineReadouts")]
    pub fn line_readouts(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.line_readouts(text))
    }

    /// Check a poem against a form by id or name ("soneto", "Décima", ...).
    ///
    /// Throws for unknown form names.
    #[wasm_bindgen(js_name = "checkPoem")]
    pub fn check_poem(&self, form: &str, text: &str) -> Result<JsValue, JsError> {
        let form: PoemForm = form.parse().map_err(verso_error_to_js)?;
        to_js(&self.handle.check_poem(form, text))
    }

    /// Every form in the catalog with its stanzas and composition guide.
    pub fn forms(&self) -> Result<JsValue, JsError> {
        let forms: Vec<JsForm> = self
            .handle
            .forms()
            .iter()
            .map(|f| {
                let spec = f.spec();
                JsForm {
                    id: spec.id,
                    name: spec.name,
                    tag: spec.tag,
                    description: spec.description,
                    stanzas: spec.stanzas,
                    verse_count: spec.verse_count(),
                    guide: spec.guide(),
                }
            })
            .collect();
        to_js(&forms)
    }

    /// Ids of every form in the catalog.
    #[wasm_bindgen(js_name = "formIds")]
    pub fn form_ids(&self) -> js_sys::Array {
        self.handle
            .forms()
            .iter()
            .map(|f| JsValue::from_str(f.id()))
            .collect()
    }

    /// Set whether bracketed song section markers are ignored when counting.
    #[wasm_bindgen(js_name = "setIgnoreSectionMarkers")]
    pub fn set_ignore_section_markers(&mut self, value: bool) {
        self.handle.set_ignore_section_markers(value);
    }
}

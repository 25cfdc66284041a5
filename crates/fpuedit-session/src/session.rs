use serde::{Deserialize, Serialize};

use fpuedit_float80::{hex, parse, special, Float80, HexError};

use crate::binding::RegisterBinding;

/// The two view strings, freshly derived from ground truth. Never a source
/// of truth itself; serialized as-is to the UI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditView {
    pub float_text: String,
    pub hex_text: String,
}

/// One edit of one 80-bit register. Holds the sole authoritative value;
/// both views are recomputed from it, never stored.
#[derive(Debug, Clone)]
pub struct EditSession {
    value: Float80,
}

impl EditSession {
    pub fn new(initial: Float80) -> Self {
        Self { value: initial }
    }

    /// Seed ground truth from the live register.
    pub fn from_register(binding: &impl RegisterBinding) -> Self {
        Self::new(binding.read())
    }

    /// Current ground truth.
    pub fn value(&self) -> Float80 {
        self.value
    }

    /// Both view strings for the current ground truth.
    pub fn view(&self) -> EditView {
        EditView {
            float_text: render_decimal(self.value),
            hex_text: hex::encode(self.value),
        }
    }

    /// The hex view's text changed. On success the new decimal text is
    /// returned; the hex view itself is left exactly as typed. On error
    /// ground truth is untouched — partial input while typing is expected
    /// and simply not applied yet (short input is not an error; `decode`
    /// pads it).
    pub fn on_hex_edited(&mut self, text: &str) -> Result<String, HexError> {
        match hex::decode(text) {
            Ok(value) => {
                self.value = value;
                tracing::trace!(value = ?self.value, "hex edit applied");
                Ok(render_decimal(self.value))
            }
            Err(err) => {
                tracing::debug!(%err, "hex edit rejected");
                Err(err)
            }
        }
    }

    /// The decimal view's text changed while typing. The hex text is
    /// regenerated from ground truth either way: an unparseable entry
    /// leaves the value untouched and the returned text silently reverts
    /// any stale hex display to the last valid value.
    pub fn on_float_edited(&mut self, text: &str) -> String {
        self.apply_float(text);
        hex::encode(self.value)
    }

    /// The decimal view lost focus. Same ground-truth rule as
    /// [`on_float_edited`](Self::on_float_edited), but the decimal text is
    /// also re-rendered, discarding whatever invalid text was left behind.
    pub fn on_float_defocused(&mut self, text: &str) -> EditView {
        self.apply_float(text);
        self.view()
    }

    /// Ground truth for the caller to write back to the register.
    pub fn commit(self) -> Float80 {
        self.value
    }

    /// Commit and perform the write-back.
    pub fn commit_to(self, binding: &mut impl RegisterBinding) -> Float80 {
        tracing::debug!(value = ?self.value, "committing register edit");
        binding.write(self.value);
        self.value
    }

    /// Discard the session; the register is untouched.
    pub fn cancel(self) {}

    fn apply_float(&mut self, text: &str) {
        match parse(text) {
            Ok(value) => {
                self.value = value;
                tracing::trace!(value = ?self.value, "decimal edit applied");
            }
            Err(_) => {
                tracing::debug!(text, "decimal edit not parseable (yet)");
            }
        }
    }
}

/// Decimal rendering of ground truth. The six canonical special patterns
/// render as their keyword spellings — they have no decimal spelling, and
/// this keeps the displayed text parseable back to the same bytes. Anything
/// else renders through `f64` with the default float formatting.
fn render_decimal(value: Float80) -> String {
    match special::keyword_for(value) {
        Some(keyword) => keyword.to_owned(),
        None => value.to_f64().to_string(),
    }
}

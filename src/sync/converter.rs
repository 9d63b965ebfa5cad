//! The synchronization coordinator.
//!
//! One conversion pass runs validate → parse → broadcast-format across
//! the linked fields: the edited field's text becomes the canonical
//! integer, which fans out to every other field in its own base. A
//! two-state guard makes the pass non-reentrant, since programmatic
//! field writes arrive on the same edit channel as user input.

use crate::radix::{self, Base};
use crate::sync::Field;

/// Pass state: exactly one conversion pass runs at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassState {
    /// Waiting for the next edit event.
    Idle,
    /// A pass is writing fields; further edits are dropped, not queued.
    Propagating,
}

/// Coordinates one input field per supported base.
///
/// The only entry point is [`on_edit`]; the pass state is never
/// externally settable. The error token shown in fields that fail to
/// format is supplied by the embedding layer (it is a localized,
/// presentation-only string the core does not interpret).
///
/// [`on_edit`]: Converter::on_edit
#[derive(Debug, Clone)]
pub struct Converter {
    fields: Vec<Field>,
    state: PassState,
    error_token: String,
}

impl Converter {
    /// Create a converter with one empty field per base, in radix
    /// economy order.
    pub fn new(error_token: impl Into<String>) -> Self {
        Self {
            fields: Base::ALL.iter().map(|&b| Field::new(b)).collect(),
            state: PassState::Idle,
            error_token: error_token.into(),
        }
    }

    /// All fields, in radix economy order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The field assigned to `base`.
    pub fn field(&self, base: Base) -> &Field {
        &self.fields[base.ordinal()]
    }

    /// Replace the localized error token (e.g. after a language toggle).
    ///
    /// Already-displayed tokens are not rewritten; the next failing pass
    /// uses the new one.
    pub fn set_error_token(&mut self, token: impl Into<String>) {
        self.error_token = token.into();
    }

    /// True when no conversion pass is in flight. Every call to
    /// [`on_edit`](Converter::on_edit) leaves the converter idle.
    pub fn is_idle(&self) -> bool {
        self.state == PassState::Idle
    }

    /// Handle an edit of the `base` field to `raw` text.
    ///
    /// In order:
    /// - invalid text marks the edited field and touches nothing else;
    /// - empty text (or a lone `-` where `-` is a sign, i.e. decimal)
    ///   clears every other field;
    /// - otherwise the parsed value is formatted into every other field,
    ///   and a field whose base cannot represent it exactly shows the
    ///   error token without blocking its siblings.
    ///
    /// Edits arriving while a pass is propagating are ignored.
    pub fn on_edit(&mut self, base: Base, raw: &str) {
        if self.state == PassState::Propagating {
            return;
        }

        self.state = PassState::Propagating;
        self.run_pass(base, raw);
        self.state = PassState::Idle;
    }

    fn run_pass(&mut self, base: Base, raw: &str) {
        let text = raw.trim().to_string();

        // The edited field always shows what was typed; its error flag
        // resets and is re-derived below.
        self.field_mut(base).set(raw.to_string(), false);

        if !radix::is_valid(&text, base) {
            self.field_mut(base).set_error(true);
            return;
        }

        if text.is_empty() || (base.allows_sign() && text == "-") {
            self.clear_others(base);
            return;
        }

        let value = match radix::parse(&text, base) {
            Ok(v) => v,
            Err(_) => {
                self.field_mut(base).set_error(true);
                return;
            }
        };

        let token = self.error_token.clone();
        for target in Base::ALL {
            if target == base {
                continue;
            }
            match radix::format(&value, target) {
                Ok(s) => self.field_mut(target).set(s, false),
                Err(_) => self.field_mut(target).set(token.clone(), true),
            }
        }
    }

    fn clear_others(&mut self, except: Base) {
        for target in Base::ALL {
            if target != except {
                self.field_mut(target).clear();
            }
        }
    }

    fn field_mut(&mut self, base: Base) -> &mut Field {
        &mut self.fields[base.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> Converter {
        Converter::new("Error")
    }

    #[test]
    fn test_decimal_42_fans_out() {
        let mut c = converter();
        c.on_edit(Base::Decimal, "42");

        assert_eq!(c.field(Base::Decimal).text(), "42");
        assert_eq!(c.field(Base::BalancedTernary).text(), "+---0");
        assert_eq!(c.field(Base::Binary).text(), "101010");
        assert_eq!(c.field(Base::Octal).text(), "52");
        assert_eq!(c.field(Base::Nonary).text(), "46");
        assert_eq!(c.field(Base::Hexadecimal).text(), "2a");
        for f in c.fields() {
            assert!(!f.has_error(), "{} should be error-free", f.base());
        }
        assert!(c.is_idle());
    }

    #[test]
    fn test_edit_from_any_base_agrees() {
        // The same number entered via different fields converges.
        let mut from_hex = converter();
        from_hex.on_edit(Base::Hexadecimal, "2a");
        let mut from_btr = converter();
        from_btr.on_edit(Base::BalancedTernary, "+---0");

        for b in [Base::Binary, Base::Octal, Base::Nonary, Base::Decimal] {
            assert_eq!(from_hex.field(b).text(), from_btr.field(b).text());
        }
        assert_eq!(from_btr.field(Base::Decimal).text(), "42");
    }

    #[test]
    fn test_empty_edit_clears_others() {
        let mut c = converter();
        c.on_edit(Base::Decimal, "42");
        c.on_edit(Base::Binary, "");

        assert_eq!(c.field(Base::Binary).text(), "");
        for b in Base::ALL {
            if b != Base::Binary {
                assert_eq!(c.field(b).text(), "", "{} should be cleared", b);
            }
            assert!(!c.field(b).has_error());
        }
    }

    #[test]
    fn test_lone_minus_clears_only_in_decimal() {
        let mut c = converter();
        c.on_edit(Base::Decimal, "42");
        c.on_edit(Base::Decimal, "-");
        for b in Base::ALL {
            assert_eq!(c.field(b).text(), if b == Base::Decimal { "-" } else { "" });
            assert!(!c.field(b).has_error());
        }

        // In balanced ternary `-` is the digit -1, a real value.
        let mut c = converter();
        c.on_edit(Base::BalancedTernary, "-");
        assert_eq!(c.field(Base::Decimal).text(), "-1");
        assert_eq!(c.field(Base::Binary).text(), "-1");
    }

    #[test]
    fn test_invalid_edit_marks_only_source() {
        let mut c = converter();
        c.on_edit(Base::Decimal, "42");
        c.on_edit(Base::Binary, "2");

        assert!(c.field(Base::Binary).has_error());
        assert_eq!(c.field(Base::Binary).text(), "2");
        // Everything else keeps its previous value, error-free.
        assert_eq!(c.field(Base::Decimal).text(), "42");
        assert_eq!(c.field(Base::Octal).text(), "52");
        assert_eq!(c.field(Base::Nonary).text(), "46");
        assert_eq!(c.field(Base::Hexadecimal).text(), "2a");
        assert_eq!(c.field(Base::BalancedTernary).text(), "+---0");
        for b in Base::ALL {
            if b != Base::Binary {
                assert!(!c.field(b).has_error());
            }
        }
    }

    #[test]
    fn test_error_cleared_by_next_valid_edit() {
        let mut c = converter();
        c.on_edit(Base::Binary, "2");
        assert!(c.field(Base::Binary).has_error());
        c.on_edit(Base::Binary, "10");
        assert!(!c.field(Base::Binary).has_error());
        assert_eq!(c.field(Base::Decimal).text(), "2");
    }

    #[test]
    fn test_overflow_marks_only_balanced_ternary() {
        // Twenty nines is well past the i64 encode ceiling.
        let huge = "9".repeat(20);
        let mut c = converter();
        c.on_edit(Base::Decimal, &huge);

        let btr = c.field(Base::BalancedTernary);
        assert!(btr.has_error());
        assert_eq!(btr.text(), "Error");

        // The positional targets still update exactly.
        assert!(!c.field(Base::Hexadecimal).has_error());
        assert_eq!(
            c.field(Base::Hexadecimal).text(),
            "56bc75e2d630fffff".to_string()
        );
        assert!(!c.field(Base::Nonary).has_error());
        assert!(!c.field(Base::Decimal).has_error());
    }

    #[test]
    fn test_long_balanced_ternary_input_still_converts_out() {
        // Decode is arbitrary precision, so a 50-trit input works even
        // though the value could not be re-encoded from decimal.
        let s = format!("+{}", "0".repeat(50));
        let mut c = converter();
        c.on_edit(Base::BalancedTernary, &s);

        assert!(!c.field(Base::BalancedTernary).has_error());
        assert_eq!(
            c.field(Base::Decimal).text(),
            num_bigint::BigInt::from(3u32).pow(50).to_string()
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut c = converter();
        c.on_edit(Base::Decimal, "  42  ");
        assert_eq!(c.field(Base::Binary).text(), "101010");
        assert!(!c.field(Base::Decimal).has_error());
    }

    #[test]
    fn test_error_token_follows_language() {
        let mut c = Converter::new("Erro");
        let huge = "9".repeat(20);
        c.on_edit(Base::Decimal, &huge);
        assert_eq!(c.field(Base::BalancedTernary).text(), "Erro");

        c.set_error_token("Error");
        c.on_edit(Base::Decimal, &huge);
        assert_eq!(c.field(Base::BalancedTernary).text(), "Error");
    }

    #[test]
    fn test_every_pass_ends_idle() {
        let mut c = converter();
        for (base, text) in [
            (Base::Decimal, "42"),
            (Base::Binary, "oops"),
            (Base::Decimal, ""),
            (Base::Decimal, &"9".repeat(30) as &str),
        ] {
            c.on_edit(base, text);
            assert!(c.is_idle(), "pass for {:?} did not return to idle", text);
        }
    }
}

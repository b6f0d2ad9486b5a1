//! Reading true/false answers typed by humans.

use crate::errors::domain::{DomainError, ValidationKind};

/// Truth value carried by the first word of `text`.
///
/// Accepts `true`/`false` and `verdadero`/`falso` in any case, with an
/// optional trailing period, so canonical answers such as
/// `"Falso. Lo que se usa es el Transport Layer Security."` resolve too.
pub fn parse_truth(text: &str) -> Result<bool, DomainError> {
    let first = text
        .split_whitespace()
        .next()
        .map(|w| w.trim_end_matches(['.', ',']))
        .unwrap_or_default();

    match first.to_uppercase().as_str() {
        "TRUE" | "VERDADERO" => Ok(true),
        "FALSE" | "FALSO" => Ok(false),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidAnswer,
            format!("Answer must start with TRUE or FALSE, got '{}'", text.trim()),
        )),
    }
}

/// Upper-case label for a truth value.
pub fn truth_label(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_decides() {
        assert!(parse_truth("Verdadero. HTTP es un protocolo sin estado.").unwrap());
        assert!(!parse_truth("FALSO. Se usa TLS.").unwrap());
        assert!(parse_truth("true").unwrap());
        assert!(!parse_truth("  false.  ").unwrap());
    }

    #[test]
    fn anything_else_is_invalid() {
        for raw in ["", "   ", "maybe", "truthy", "no"] {
            let err = parse_truth(raw).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidAnswer, _)
            ));
        }
    }
}

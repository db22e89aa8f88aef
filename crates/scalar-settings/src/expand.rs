//! `${VAR}` expansion for configuration strings.

use std::borrow::Cow;
use std::env::{self, VarError};

use crate::SettingsError;

/// Replace `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Strings without `${` are left untouched, so a bare `$` in a URL or path
/// survives. An unset variable without a default fails, naming `field`.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), SettingsError> {
    if !value.contains("${") {
        return Ok(());
    }

    let lookup = |name: &str| env::var(name).map(Some);
    let expanded = shellexpand::env_with_context(value.as_str(), lookup)
        .map(Cow::into_owned)
        .map_err(|err| SettingsError::EnvVar {
            field: field.to_owned(),
            message: unset_message(&err.var_name, &err.cause),
        })?;
    *value = expanded;
    Ok(())
}

fn unset_message(name: &str, cause: &VarError) -> String {
    match cause {
        VarError::NotPresent => format!("${{{name}}} not set"),
        VarError::NotUnicode(_) => format!("${{{name}}} is not valid unicode"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expanded(input: &str, field: &str) -> Result<String, SettingsError> {
        let mut value = input.to_owned();
        expand_in_place(&mut value, field)?;
        Ok(value)
    }

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            env::set_var("SCALAR_TEST_SIMPLE", "hello");
        }
        assert_eq!(expanded("${SCALAR_TEST_SIMPLE}", "server.host").unwrap(), "hello");
        unsafe {
            env::remove_var("SCALAR_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            env::remove_var("SCALAR_TEST_UNSET");
        }
        let mut value = "${SCALAR_TEST_UNSET:-127.0.0.1}".to_owned();
        expand_in_place(&mut value, "server.host").unwrap();
        assert_eq!(value, "127.0.0.1");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            env::remove_var("SCALAR_TEST_MISSING");
        }
        let mut value = "${SCALAR_TEST_MISSING}".to_owned();
        let err = expand_in_place(&mut value, "page.url").unwrap_err();
        assert!(matches!(err, SettingsError::EnvVar { .. }));
        assert!(err.to_string().contains("SCALAR_TEST_MISSING"));
        assert!(err.to_string().contains("page.url"));
        assert_eq!(value, "${SCALAR_TEST_MISSING}");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            env::set_var("SCALAR_TEST_API_HOST", "api.example.com");
        }
        assert_eq!(
            expanded("https://${SCALAR_TEST_API_HOST}/openapi.json", "page.url").unwrap(),
            "https://api.example.com/openapi.json"
        );
        unsafe {
            env::remove_var("SCALAR_TEST_API_HOST");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(
            expanded("https://example.com/$path", "page.url").unwrap(),
            "https://example.com/$path"
        );
    }

    #[test]
    fn test_unset_message_names_variable() {
        assert_eq!(unset_message("TOKEN", &VarError::NotPresent), "${TOKEN} not set");
    }
}

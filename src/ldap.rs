//! Helpers for LDAP distinguished names such as
//! `cn=jdoe,ou=lab,ou=people,dc=example,dc=org`.
//!
//! Values are split on raw commas and equals signs; escaped separators are
//! not recognised.

/// Everything after the first RDN, e.g. `ou=lab,ou=people,dc=example,dc=org`.
///
/// A DN without a comma is returned whole.
pub fn parent_dn(dn: &str) -> &str {
    dn.split_once(',').map_or(dn, |(_, parent)| parent)
}

/// The value of the first RDN, e.g. `jdoe`.
///
/// Returns `None`, with a warning, when the first RDN carries no value.
pub fn leaf_name(dn: &str) -> Option<&str> {
    let rdn = dn.split(',').next().unwrap_or_default();
    let name = rdn.split('=').nth(1).filter(|value| !value.is_empty());
    if name.is_none() {
        tracing::warn!(dn, "cannot split a name out of the DN");
    }
    name
}

/// Copies a multi-valued attribute such as `memberOf` into owned strings.
pub fn member_units<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DN: &str = "cn=test6,ou=unit test,ou=people,dc=example,dc=fr";

    #[test]
    fn test_parent_dn() {
        assert_eq!(parent_dn(DN), "ou=unit test,ou=people,dc=example,dc=fr");
        assert_eq!(parent_dn("dc=fr"), "dc=fr");
        assert_eq!(parent_dn("cn=x,"), "");
    }

    #[test]
    fn test_leaf_name() {
        assert_eq!(leaf_name(DN), Some("test6"));
        assert_eq!(leaf_name("cn=solo"), Some("solo"));
        assert_eq!(leaf_name("cn=a=b,dc=fr"), Some("a"));
    }

    #[test]
    fn test_leaf_name_without_value() {
        assert_eq!(leaf_name("nonsense,dc=fr"), None);
        assert_eq!(leaf_name("cn=,dc=fr"), None);
        assert_eq!(leaf_name(""), None);
    }

    #[test]
    fn test_member_units() {
        let values = ["cn=lab-a,ou=groups", "cn=lab-b,ou=groups"];
        assert_eq!(
            member_units(values),
            vec!["cn=lab-a,ou=groups".to_owned(), "cn=lab-b,ou=groups".to_owned()]
        );
        assert!(member_units(Vec::<String>::new()).is_empty());
    }
}

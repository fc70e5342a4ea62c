#![cfg(test)]

use std::cmp::Ordering;
use std::collections::HashSet;

use super::*;
use crate::error::Diagnostic;

fn path(value: &str) -> StructuredPath {
    StructuredPath::try_make(value).expect("test paths should be valid")
}

#[test]
fn test_default_is_invalid() {
    let empty = StructuredPath::default();
    assert!(!empty.is_valid());
    assert_eq!(empty.as_str(), "");
    assert_eq!(empty, StructuredPath::new());
    assert_eq!(empty.domain(), "");
    assert_eq!(empty.subpath(), None);
    assert_eq!(empty.segments().count(), 0);
    assert_eq!(empty.parent(), None);
}

#[test]
fn test_domain_case_normalization() {
    assert_eq!(path("/Domain/SubPath").as_str(), "/domain/SubPath");
    assert_eq!(path("/DOMAIN@Variant").as_str(), "/domain@variant");
    assert_eq!(
        path("/My-Domain.COM@V2/Some/Thing").as_str(),
        "/my-domain.com@v2/Some/Thing",
        "Only the domain should be lower-cased."
    );
    assert_ne!(
        path("/domain/Seg"),
        path("/domain/seg"),
        "Identifiers are case sensitive."
    );
    assert_eq!(path("/DoMaIn/seg"), path("/domain/seg"));

    let normalized = path("/Domain@X/A/b");
    assert_eq!(path(normalized.as_str()), normalized, "Normalization should be idempotent.");
}

#[test]
fn test_normalize_domain_case_in_place() {
    let mut value = String::from("/ABC@DEF/GHI/JKL");
    normalize_domain_case(&mut value);
    assert_eq!(value, "/abc@def/GHI/JKL");

    let mut value = String::from("/ONLY");
    normalize_domain_case(&mut value);
    assert_eq!(value, "/only");

    let mut value = String::new();
    normalize_domain_case(&mut value);
    assert_eq!(value, "", "The empty string should be left alone.");
}

#[test]
fn test_try_make_rejections() {
    for value in ["", "noleadingslash", "/", "/domain/", "/domain//seg", "/domain/1seg", "/-baddomain"] {
        assert!(StructuredPath::try_make(value).is_err(), "{value:?} should be rejected.");
    }

    assert_eq!(
        StructuredPath::try_make("/domain/1seg"),
        Err(Diagnostic::InvalidSubpath {
            segment: String::from("1seg"),
            reason: match crate::grammar::is_valid_ident("1seg", None) {
                Err(Diagnostic::InvalidIdent(reason)) => reason,
                other => panic!("unexpected result {other:?}"),
            },
        })
    );
}

#[test]
fn test_try_make_owned() {
    let made = StructuredPath::try_make_owned(String::from("/Domain/Seg"));
    assert_eq!(made.map(StructuredPath::into_string), Ok(String::from("/domain/Seg")));

    let rejected = StructuredPath::try_make_owned(String::from("/Domain//Seg"))
        .expect_err("consecutive slashes should be rejected");
    assert_eq!(rejected.input(), "/Domain//Seg", "The input should be handed back untouched.");
    assert!(rejected.diagnostic().is_consecutive_slashes());
    assert_eq!(rejected.to_string(), "path cannot have consecutive slashes");
    assert_eq!(rejected.into_input(), "/Domain//Seg");
}

#[test]
fn test_conversions() {
    let parsed: StructuredPath = "/Domain/Seg".parse().expect("should parse");
    assert_eq!(parsed.to_string(), "/domain/Seg");
    assert_eq!(StructuredPath::try_from("/Domain/Seg"), Ok(parsed.clone()));
    assert_eq!(StructuredPath::try_from(String::from("/Domain/Seg")), Ok(parsed.clone()));
    assert_eq!(String::from(parsed.clone()), "/domain/Seg");
    assert_eq!(AsRef::<str>::as_ref(&parsed), "/domain/Seg");

    assert!("/domain/".parse::<StructuredPath>().is_err());
}

#[test]
fn test_compare_is_byte_exact() {
    assert_eq!(path("/a/B").compare(&path("/a/a")), Ordering::Less, "'B' sorts before 'a'.");
    assert_eq!(path("/a/x").compare(&path("/a/x")), Ordering::Equal);
    assert_eq!(path("/b").compare(&path("/a/z")), Ordering::Greater);
    assert!(path("/a") < path("/a/b"));

    let set: HashSet<_> = ["/Domain/x", "/domain/x", "/domain/X"].into_iter().map(path).collect();
    assert_eq!(set.len(), 2, "Paths equal after normalization should hash the same.");
}

#[test]
fn test_is_base_of() {
    let base = path("/d/a");

    assert!(base.is_base_of(&path("/d/a")));
    assert_eq!(base.leaf_of(&path("/d/a")), Some(""), "Equal paths should have an empty leaf.");

    assert!(base.is_base_of(&path("/d/a/b")));
    assert_eq!(base.leaf_of(&path("/d/a/b")), Some("b"));
    assert_eq!(base.leaf_of(&path("/d/a/b/c")), Some("b/c"));

    assert!(!base.is_base_of(&path("/d/ab")), "A partial segment isn't a child.");
    assert_eq!(base.leaf_of(&path("/d/ab")), None);
    assert!(!base.is_base_of(&path("/d")));
    assert!(!base.is_base_of(&path("/e/a")));

    assert!(path("/d").is_base_of(&path("/d/a")));
    assert!(!path("/d").is_base_of(&path("/d@v/a")), "A domain label isn't a subpath.");

    assert!(
        !StructuredPath::default().is_base_of(&path("/d")),
        "The empty path is never a base."
    );
    assert!(!StructuredPath::default().is_base_of(&StructuredPath::default()));
}

#[test]
fn test_components() {
    let full = path("/Domain@Variant/Some/Thing");
    assert_eq!(full.domain(), "domain@variant");
    assert_eq!(full.domain_labels(), ("domain", Some("variant")));
    assert_eq!(full.subpath(), Some("Some/Thing"));
    assert_eq!(full.segments().collect::<Vec<_>>(), ["Some", "Thing"]);

    let bare = path("/domain");
    assert_eq!(bare.domain(), "domain");
    assert_eq!(bare.domain_labels(), ("domain", None));
    assert_eq!(bare.subpath(), None);
    assert_eq!(bare.segments().next(), None);

    let only = path("/d/only");
    let mut segments = only.segments();
    assert_eq!(segments.next(), Some("only"));
    assert_eq!(segments.next(), None);
    assert_eq!(segments.next(), None, "Segments should stay exhausted.");
}

#[test]
fn test_parent() {
    assert_eq!(path("/d/a/b").parent(), Some(path("/d/a")));
    assert_eq!(path("/d@v/a").parent(), Some(path("/d@v")));
    assert_eq!(path("/d").parent(), None, "A bare domain has no parent.");

    let child = path("/d/a/b");
    let parent = child.parent().expect("should have a parent");
    assert!(parent.is_base_of(&child));
}

#[test]
fn test_join() {
    let base = path("/Domain/A");
    assert_eq!(base.join("Child"), Ok(path("/domain/A/Child")));
    assert_eq!(
        base.join("1child").map_err(|d| d.to_string()),
        Err(String::from("segment cannot start with a number"))
    );
    assert_eq!(
        base.join("a/b").map_err(|d| d.to_string()),
        Err(String::from("segment cannot contain the following characters: /"))
    );

    assert_eq!(
        StructuredPath::default().join("Root"),
        Ok(path("/root")),
        "Joining onto the empty path should produce a domain."
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let made = path("/Domain@V/Seg");
    let json = serde_json::to_string(&made).expect("should serialize");
    assert_eq!(json, "\"/domain@v/Seg\"");
    assert_eq!(serde_json::from_str::<StructuredPath>(&json).ok(), Some(made));

    assert_eq!(
        serde_json::from_str::<StructuredPath>("\"/DOMAIN/Seg\"").ok(),
        Some(path("/domain/Seg")),
        "Deserialized paths should be normalized."
    );
    assert_eq!(
        serde_json::from_str::<StructuredPath>("\"\"").ok(),
        Some(StructuredPath::default()),
        "The empty path should survive a round trip."
    );

    let error = serde_json::from_str::<StructuredPath>("\"/domain//seg\"")
        .expect_err("invalid paths should fail to deserialize");
    assert!(error.to_string().contains("path cannot have consecutive slashes"));
}

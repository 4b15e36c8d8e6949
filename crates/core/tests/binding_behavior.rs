//! End-to-end binding behavior through the public API.
//!
//! Each test declares a small result record, binds its fields and checks the
//! stored values together with the three observation sequences.

use argbind_core::{
    ArgumentError, ArgumentParser, BorrowedParser, Maybe, NonEmpty, ParseOutcome,
};

#[derive(Debug, Default)]
struct Mixed {
    foo: Vec<String>,
    bar: bool,
    baz: String,
}

fn mixed_parser() -> ArgumentParser<Mixed> {
    ArgumentParser::<Mixed>::new()
        .bind("FOO", |r| &mut r.foo)
        .bind("BAR", |r| &mut r.bar)
        .bind("BAZ", |r| &mut r.baz)
}

fn empty(outcome: &ParseOutcome) -> bool {
    outcome.unparsed_arguments.is_empty()
        && outcome.keywords_missing_value.is_empty()
        && outcome.parsed_keywords.is_empty()
}

// ──────────────────────────────────────────────
// 1. Worked examples
// ──────────────────────────────────────────────

#[test]
fn list_flag_and_scalar_in_one_invocation() {
    let (mixed, outcome) = mixed_parser().parse(["FOO", "a", "b", "BAR", "BAZ", "c"]);
    assert_eq!(mixed.foo, vec!["a", "b"]);
    assert!(mixed.bar);
    assert_eq!(mixed.baz, "c");
    assert!(outcome.unparsed_arguments.is_empty());
    assert!(outcome.keywords_missing_value.is_empty());
    assert_eq!(outcome.parsed_keywords, vec!["FOO", "BAR", "BAZ"]);
}

#[test]
fn lone_scalar_keyword_is_missing_its_value() {
    let (mixed, outcome) = mixed_parser().parse(["BAZ"]);
    assert_eq!(outcome.keywords_missing_value, vec!["BAZ"]);
    assert_eq!(mixed.baz, "");
    assert_eq!(outcome.parsed_keywords, vec!["BAZ"]);
}

#[test]
fn flag_does_not_consume_following_tokens() {
    #[derive(Default)]
    struct OnlyFlag {
        foo: bool,
    }
    let parser = ArgumentParser::<OnlyFlag>::new().bind("FOO", |r| &mut r.foo);
    let (result, outcome) = parser.parse(["x", "FOO", "y"]);
    assert!(result.foo);
    assert_eq!(outcome.unparsed_arguments, vec!["x", "y"]);
    assert_eq!(outcome.parsed_keywords, vec!["FOO"]);
    assert!(outcome.keywords_missing_value.is_empty());
}

#[test]
fn each_group_keyword_starts_a_new_inner_list() {
    #[derive(Default)]
    struct Grouped {
        grp: Vec<Vec<String>>,
    }
    let parser = ArgumentParser::<Grouped>::new().bind("GRP", |r| &mut r.grp);
    let (result, outcome) = parser.parse(["GRP", "1", "GRP", "2", "3"]);
    assert_eq!(result.grp, vec![vec!["1"], vec!["2", "3"]]);
    assert_eq!(outcome.parsed_keywords, vec!["GRP", "GRP"]);
    assert!(outcome.is_clean());
}

// ──────────────────────────────────────────────
// 2. Receiver cardinality
// ──────────────────────────────────────────────

#[test]
fn tokens_without_keywords_pass_through_unmatched() {
    let (mixed, outcome) = mixed_parser().parse(["foo", "bar", "foo"]);
    assert_eq!(outcome.unparsed_arguments, vec!["foo", "bar", "foo"]);
    assert!(outcome.keywords_missing_value.is_empty());
    assert!(outcome.parsed_keywords.is_empty());
    assert!(mixed.foo.is_empty());
}

#[test]
fn empty_input_observes_nothing() {
    let (_, outcome) = mixed_parser().parse(Vec::<String>::new());
    assert!(empty(&outcome));
}

#[test]
fn scalar_followed_by_keyword_is_left_unmodified() {
    let parser = mixed_parser();
    let mut mixed = Mixed {
        baz: "previous".into(),
        ..Mixed::default()
    };
    let outcome = parser.parse_into(&mut mixed, ["BAZ", "BAR"]);
    assert_eq!(outcome.keywords_missing_value, vec!["BAZ"]);
    assert_eq!(mixed.baz, "previous");
    assert!(mixed.bar);
}

#[test]
fn empty_list_before_next_keyword_is_not_missing() {
    let (mixed, outcome) = mixed_parser().parse(["FOO", "BAR"]);
    assert!(mixed.foo.is_empty());
    assert!(outcome.keywords_missing_value.is_empty());
    assert_eq!(outcome.parsed_keywords, vec!["FOO", "BAR"]);
}

#[test]
fn scalar_takes_only_the_first_value() {
    let (mixed, outcome) = mixed_parser().parse(["BAZ", "c", "d"]);
    assert_eq!(mixed.baz, "c");
    assert_eq!(outcome.unparsed_arguments, vec!["d"]);
}

#[derive(Debug, Default)]
struct Sources {
    sources: NonEmpty<Vec<String>>,
    output: Option<Maybe<String>>,
}

fn sources_parser() -> ArgumentParser<Sources> {
    ArgumentParser::<Sources>::new()
        .bind("SOURCES", |r| &mut r.sources)
        .bind("OUTPUT", |r| &mut r.output)
}

#[test]
fn non_empty_list_with_values_is_satisfied() {
    let (result, outcome) =
        sources_parser().parse(["SOURCES", "a.c", "b.c", "c.c", "OUTPUT", "x"]);
    assert_eq!(*result.sources, vec!["a.c", "b.c", "c.c"]);
    assert_eq!(result.output, Some(Maybe("x".to_owned())));
    assert!(outcome.is_clean());
}

#[test]
fn non_empty_list_without_values_is_missing() {
    let (result, outcome) = sources_parser().parse(["SOURCES"]);
    assert!(result.sources.is_empty());
    assert_eq!(outcome.keywords_missing_value, vec!["SOURCES"]);
}

#[test]
fn optional_value_records_presence_without_error() {
    let (result, outcome) = sources_parser().parse(["OUTPUT", "SOURCES", "a.c"]);
    assert_eq!(result.output, Some(Maybe(String::new())));
    assert!(outcome.keywords_missing_value.is_empty());

    let (absent, _) = sources_parser().parse(["SOURCES", "a.c"]);
    assert_eq!(absent.output, None);
}

#[test]
fn repeated_scalar_without_values_is_missing_each_time() {
    let (mixed, outcome) = mixed_parser().parse(["BAZ", "BAZ"]);
    assert_eq!(outcome.keywords_missing_value, vec!["BAZ", "BAZ"]);
    assert_eq!(outcome.parsed_keywords, vec!["BAZ"]);
    assert_eq!(mixed.baz, "");
}

#[test]
fn reopened_non_empty_list_without_values_is_missing() {
    let (result, outcome) = sources_parser().parse(["SOURCES", "a.c", "SOURCES"]);
    assert_eq!(*result.sources, vec!["a.c"]);
    assert_eq!(outcome.keywords_missing_value, vec!["SOURCES"]);
    assert!(outcome.saw_keyword("SOURCES"));
    assert!(!outcome.saw_keyword("OUTPUT"));
}

#[test]
fn optional_string_requires_its_value_but_records_presence() {
    #[derive(Default)]
    struct Named {
        name: Option<String>,
        label: Maybe<String>,
    }
    let parser = ArgumentParser::<Named>::new()
        .bind("NAME", |r| &mut r.name)
        .bind("LABEL", |r| &mut r.label);

    let (result, outcome) = parser.parse(["NAME", "LABEL"]);
    assert_eq!(result.name.as_deref(), Some(""));
    assert_eq!(*result.label, "");
    assert_eq!(outcome.keywords_missing_value, vec!["NAME"]);

    let (absent, outcome) = parser.parse(["LABEL", "l"]);
    assert_eq!(absent.name, None);
    assert_eq!(*absent.label, "l");
    assert!(outcome.is_clean());
}

#[test]
fn repeated_list_keyword_keeps_appending() {
    let (mixed, outcome) = mixed_parser().parse(["FOO", "a", "BAR", "FOO", "b"]);
    assert_eq!(mixed.foo, vec!["a", "b"]);
    assert_eq!(outcome.parsed_keywords, vec!["FOO", "BAR"]);
}

#[test]
fn keywords_match_exactly() {
    let (mixed, outcome) = mixed_parser().parse(["foo", "FOO_", "FOO"]);
    assert!(mixed.foo.is_empty());
    assert_eq!(outcome.unparsed_arguments, vec!["foo", "FOO_"]);
}

#[test]
fn owned_tokens_are_accepted() {
    let tokens: Vec<String> = vec!["BAZ".into(), "value".into()];
    let (mixed, _) = mixed_parser().parse(&tokens);
    assert_eq!(mixed.baz, "value");
}

// ──────────────────────────────────────────────
// 3. Presence wrappers and strict policy
// ──────────────────────────────────────────────

#[test]
fn presence_wrappers_distinguish_absent_from_empty() {
    #[derive(Default)]
    struct Wrapped {
        configs: Option<Vec<String>>,
        names: Option<NonEmpty<Vec<String>>>,
        fast: Option<bool>,
    }
    let parser = ArgumentParser::<Wrapped>::new()
        .bind("CONFIGS", |r| &mut r.configs)
        .bind("NAMES", |r| &mut r.names)
        .bind("FAST", |r| &mut r.fast);

    let (result, outcome) = parser.parse(["CONFIGS", "NAMES"]);
    assert_eq!(result.configs, Some(Vec::new()));
    assert_eq!(result.names, Some(NonEmpty(Vec::new())));
    assert_eq!(result.fast, None);
    assert_eq!(outcome.keywords_missing_value, vec!["NAMES"]);
}

#[test]
fn strict_check_turns_observations_into_errors() {
    let (_, outcome) = mixed_parser().parse(["BAZ", "v", "stray"]);
    let err = outcome.check().unwrap_err();
    assert_eq!(
        err,
        ArgumentError::UnparsedArguments {
            arguments: vec!["stray".into()]
        }
    );
    assert_eq!(err.to_string(), "unparsed arguments: stray");

    let (_, outcome) = mixed_parser().parse(["BAZ"]);
    assert_eq!(
        outcome.check().unwrap_err().to_string(),
        "keyword 'BAZ' is missing its value"
    );
}

#[test]
fn borrowed_and_typed_parsers_agree() {
    let tokens = ["BAR", "FOO", "x", "y", "BAZ", "z", "w"];

    let (mixed, typed) = mixed_parser().parse(tokens);

    let mut foo: Vec<String> = Vec::new();
    let mut bar = false;
    let mut baz = String::new();
    let borrowed = BorrowedParser::new()
        .bind("FOO", &mut foo)
        .bind("BAR", &mut bar)
        .bind("BAZ", &mut baz)
        .parse(tokens);

    assert_eq!(typed, borrowed);
    assert_eq!(mixed.foo, foo);
    assert_eq!(mixed.bar, bar);
    assert_eq!(mixed.baz, baz);
}

#[test]
fn outcome_serializes_field_names() {
    let (_, outcome) = mixed_parser().parse(["x", "BAZ"]);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["unparsed_arguments"], serde_json::json!(["x"]));
    assert_eq!(json["keywords_missing_value"], serde_json::json!(["BAZ"]));
    assert_eq!(json["parsed_keywords"], serde_json::json!(["BAZ"]));
}

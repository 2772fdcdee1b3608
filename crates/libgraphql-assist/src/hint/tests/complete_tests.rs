use crate::hint::Completions;
use crate::hint::CursorToken;
use crate::hint::complete;
use crate::schema::Schema;
use crate::state::StateFrame;
use crate::state::StateKind;
use crate::state::with_state_chain;
use crate::test_utils::blog_schema;
use crate::test_utils::node_schema;
use std::collections::BTreeSet;

fn frame(kind: StateKind) -> StateFrame {
    StateFrame {
        kind,
        name: None,
        step: 0,
        type_name: None,
    }
}

fn named(kind: StateKind, name: &str) -> StateFrame {
    StateFrame {
        name: Some(name.to_string()),
        ..frame(kind)
    }
}

fn at_step(frame: StateFrame, step: usize) -> StateFrame {
    StateFrame { step, ..frame }
}

fn whitespace() -> CursorToken {
    CursorToken::new(" ", 0, 1)
}

fn complete_at<'schema>(
    schema: &'schema Schema,
    token: &CursorToken,
    frames: &[StateFrame],
) -> Option<Completions<'schema>> {
    with_state_chain(frames, |state| complete(Some(schema), token, state))
        .flatten()
}

fn texts(completions: &Option<Completions<'_>>) -> Vec<String> {
    let Some(completions) = completions else {
        panic!("expected completions");
    };
    completions.candidate_texts()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn text_set(completions: &Option<Completions<'_>>) -> BTreeSet<String> {
    texts(completions).into_iter().collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// `{ test { hasArgs(` and deeper.
fn has_args_frames() -> Vec<StateFrame> {
    vec![
        frame(StateKind::ShortQuery),
        frame(StateKind::SelectionSet),
        named(StateKind::Field, "test"),
        frame(StateKind::SelectionSet),
        named(StateKind::Field, "hasArgs"),
        frame(StateKind::Arguments),
    ]
}

mod selections {
    use super::*;

    #[test]
    fn query_root_fields_with_descriptions() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &CursorToken::new(" ", 1, 2), &[
            frame(StateKind::ShortQuery),
            frame(StateKind::SelectionSet),
        ]);

        assert_eq!(texts(&completions), vec![
            "test", "article", "feed", "__schema", "__type",
        ]);
        let Some(completions) = completions else {
            unreachable!();
        };
        let descriptions = completions.candidates()
            .iter()
            .map(|c| (c.text(), c.description()))
            .collect::<Vec<_>>();
        assert_eq!(descriptions[0], ("test", Some("Test field")));
        assert_eq!(descriptions[1], ("article", Some("Blog article")));
        assert_eq!(descriptions[2], ("feed", Some("A feed of blog articles")));
        assert_eq!(completions.replace_from(), 2);
        assert_eq!(completions.replace_to(), 2);
    }

    #[test]
    fn candidate_types_render_as_annotations() {
        let schema = blog_schema();
        let Some(completions) = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
        ]) else {
            panic!("expected completions");
        };

        let types = completions.candidates()
            .iter()
            .map(|c| (c.text(), c.type_().map(|t| t.to_string())))
            .collect::<Vec<_>>();
        assert_eq!(types[2], ("feed", Some("[Article]".to_string())));
        assert_eq!(types[3], ("__schema", Some("__Schema!".to_string())));
    }

    #[test]
    fn partial_field_name_is_ranked() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &CursorToken::new("tes", 2, 5), &[
            frame(StateKind::ShortQuery),
            frame(StateKind::SelectionSet),
            frame(StateKind::Field),
        ]);

        assert_eq!(texts(&completions), vec!["test"]);
        assert_eq!(completions.map(|c| c.replace_from()), Some(2));
    }

    #[test]
    fn nested_object_fields_without_meta_fields() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "article"),
            frame(StateKind::SelectionSet),
        ]);

        assert_eq!(texts(&completions), vec![
            "id", "isPublished", "author", "title", "body",
        ]);
    }

    #[test]
    fn abstract_parent_offers_typename() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "node"),
            frame(StateKind::SelectionSet),
        ]);

        assert_eq!(texts(&completions), vec!["id", "__typename"]);
    }

    #[test]
    fn union_parent_only_offers_typename() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "search"),
            frame(StateKind::SelectionSet),
        ]);

        assert_eq!(texts(&completions), vec!["__typename"]);
    }

    #[test]
    fn unknown_parent_has_no_completions() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "nope"),
            frame(StateKind::SelectionSet),
        ]);

        assert!(completions.is_none());
    }
}

mod arguments {
    use super::*;

    #[test]
    fn field_argument_names() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &has_args_frames());

        assert_eq!(text_set(&completions), set(&[
            "string", "int", "float", "boolean", "id", "enum", "object",
            "listString", "listInt", "listFloat", "listBoolean", "listID",
            "listEnum", "listObject",
        ]));
    }

    #[test]
    fn two_argument_field() {
        let schema = Schema::builder()
            .load_str(None, "type Query { hasArgs(string: String, int: Int): String }")
            .and_then(|builder| builder.build())
            .expect("schema builds");
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "hasArgs"),
            frame(StateKind::Arguments),
        ]);

        assert_eq!(text_set(&completions), set(&["string", "int"]));
    }

    #[test]
    fn argument_name_step_zero() {
        let schema = blog_schema();
        let mut frames = has_args_frames();
        frames.push(frame(StateKind::Argument));

        let completions = complete_at(&schema, &CursorToken::new("listI", 30, 35), &frames);

        assert_eq!(texts(&completions).first().map(String::as_str), Some("listID"));
    }

    #[test]
    fn directive_argument_names() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "test"),
            named(StateKind::Directive, "include"),
            frame(StateKind::Arguments),
        ]);

        assert_eq!(texts(&completions), vec!["if"]);
    }

    #[test]
    fn unknown_field_arguments_are_unresolved() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "nope"),
            frame(StateKind::Arguments),
        ]);

        assert!(completions.is_none());
    }
}

mod input_values {
    use super::*;

    #[test]
    fn enum_argument_values() {
        let schema = blog_schema();
        let mut frames = has_args_frames();
        frames.push(at_step(named(StateKind::Argument, "enum"), 2));

        let completions = complete_at(&schema, &whitespace(), &frames);

        assert_eq!(texts(&completions), vec!["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn enum_value_descriptions_and_type() {
        let schema = blog_schema();
        let Some(completions) = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "feed"),
            frame(StateKind::Arguments),
            at_step(named(StateKind::Argument, "context"), 2),
            frame(StateKind::EnumValue),
        ]) else {
            panic!("expected completions");
        };

        let first = &completions.candidates()[0];
        assert_eq!(first.text(), "DESKTOP");
        assert_eq!(first.description(), Some("Showing this blog on a desktop browser."));
        assert_eq!(first.type_().map(|t| t.to_string()), Some("Context".to_string()));
    }

    #[test]
    fn boolean_argument_values() {
        let schema = blog_schema();
        let mut frames = has_args_frames();
        frames.push(at_step(named(StateKind::Argument, "boolean"), 2));

        let Some(completions) = complete_at(&schema, &whitespace(), &frames) else {
            panic!("expected completions");
        };

        let entries = completions.candidates()
            .iter()
            .map(|c| (c.text(), c.description()))
            .collect::<Vec<_>>();
        assert_eq!(entries, vec![
            ("true", Some("Not false.")),
            ("false", Some("Not true.")),
        ]);
    }

    #[test]
    fn list_element_values() {
        let schema = blog_schema();
        let mut frames = has_args_frames();
        frames.push(at_step(named(StateKind::Argument, "listEnum"), 2));
        frames.push(at_step(frame(StateKind::ListValue), 1));

        let completions = complete_at(&schema, &whitespace(), &frames);

        assert_eq!(texts(&completions), vec!["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn scalar_argument_has_no_values() {
        let schema = blog_schema();
        let mut frames = has_args_frames();
        frames.push(at_step(named(StateKind::Argument, "string"), 2));

        assert!(complete_at(&schema, &whitespace(), &frames).is_none());
    }

    #[test]
    fn input_object_fields_and_values() {
        let schema = blog_schema();
        let mut frames = has_args_frames();
        frames.push(at_step(named(StateKind::Argument, "object"), 2));
        frames.push(frame(StateKind::ObjectValue));

        let field_names = complete_at(&schema, &whitespace(), &frames);
        assert_eq!(texts(&field_names).len(), 14);
        assert_eq!(texts(&field_names).first().map(String::as_str), Some("string"));

        frames.push(at_step(named(StateKind::ObjectField, "boolean"), 2));
        let values = complete_at(&schema, &CursorToken::new("tr", 40, 42), &frames);
        assert_eq!(texts(&values), vec!["true"]);
    }
}

mod type_conditions {
    use super::*;

    #[test]
    fn interface_parent_offers_implementations() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "node"),
            frame(StateKind::SelectionSet),
            at_step(frame(StateKind::InlineFragment), 2),
        ]);

        assert_eq!(text_set(&completions), set(&["A", "B"]));
    }

    #[test]
    fn union_parent_offers_members() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "search"),
            frame(StateKind::SelectionSet),
            frame(StateKind::InlineFragment),
            frame(StateKind::NamedType),
        ]);

        assert_eq!(text_set(&completions), set(&["A", "C"]));
    }

    #[test]
    fn object_parent_offers_itself() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "article"),
            frame(StateKind::SelectionSet),
            at_step(frame(StateKind::InlineFragment), 2),
        ]);

        assert_eq!(texts(&completions), vec!["Article"]);
    }

    #[test]
    fn scalar_parent_offers_itself() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::ShortQuery),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "node"),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "id"),
            frame(StateKind::SelectionSet),
            at_step(frame(StateKind::InlineFragment), 2),
        ]);

        assert_eq!(texts(&completions), vec!["ID"]);
    }

    #[test]
    fn fragment_definition_offers_every_composite_type() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            at_step(named(StateKind::FragmentDefinition, "nodeFields"), 3),
        ]);

        let candidates = text_set(&completions);
        for expected in ["A", "B", "C", "Node", "SearchResult", "Query", "__Type"] {
            assert!(candidates.contains(expected), "missing {expected}");
        }
        for unexpected in ["ID", "String", "__TypeKind"] {
            assert!(!candidates.contains(unexpected), "unexpected {unexpected}");
        }
    }

    #[test]
    fn type_descriptions_are_carried() {
        let schema = blog_schema();
        let Some(completions) = complete_at(&schema, &CursorToken::new("__Sch", 20, 25), &[
            at_step(named(StateKind::FragmentDefinition, "f"), 3),
        ]) else {
            panic!("expected completions");
        };

        let first = &completions.candidates()[0];
        assert_eq!(first.text(), "__Schema");
        assert!(first.description().is_some());
        assert_eq!(first.type_(), None);
    }
}

mod input_types {
    use super::*;

    #[test]
    fn variable_definition_offers_input_types() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::VariableDefinitions),
            at_step(frame(StateKind::VariableDefinition), 2),
        ]);

        let candidates = text_set(&completions);
        for expected in [
            "Boolean", "Float", "ID", "Int", "String",
            "TestEnum", "TestInput", "Context",
        ] {
            assert!(candidates.contains(expected), "missing {expected}");
        }
        for unexpected in ["Query", "Article", "Test"] {
            assert!(!candidates.contains(unexpected), "unexpected {unexpected}");
        }
    }

    #[test]
    fn list_type_element() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &CursorToken::new("TestI", 14, 19), &[
            frame(StateKind::Query),
            frame(StateKind::VariableDefinitions),
            at_step(frame(StateKind::VariableDefinition), 2),
            frame(StateKind::Type),
            frame(StateKind::ListType),
            frame(StateKind::NamedType),
        ]);

        assert_eq!(texts(&completions).first().map(String::as_str), Some("TestInput"));
    }
}

mod directives {
    use super::*;

    #[test]
    fn field_directives() {
        let schema = node_schema();
        let completions = complete_at(&schema, &CursorToken::new("@", 10, 11), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "node"),
            frame(StateKind::Directive),
        ]);

        assert_eq!(text_set(&completions), set(&["cached", "include", "skip"]));
        assert_eq!(completions.map(|c| c.replace_from()), Some(11));
    }

    #[test]
    fn operation_directives() {
        let schema = node_schema();
        for operation in [StateKind::Query, StateKind::Mutation, StateKind::Subscription] {
            let completions = complete_at(&schema, &whitespace(), &[
                frame(operation),
                frame(StateKind::Directive),
            ]);

            assert_eq!(texts(&completions), vec!["cached"], "{operation}");
        }
    }

    #[test]
    fn shorthand_query_takes_no_directives() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::ShortQuery),
            frame(StateKind::Directive),
        ]);

        assert_eq!(texts(&completions), Vec::<String>::new());
    }

    #[test]
    fn fragment_directives() {
        let schema = node_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            frame(StateKind::FragmentSpread),
            frame(StateKind::Directive),
        ]);

        assert_eq!(text_set(&completions), set(&["include", "skip", "trace"]));
    }

    #[test]
    fn partial_directive_name_is_ranked() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &CursorToken::new("@sk", 10, 13), &[
            frame(StateKind::Query),
            frame(StateKind::SelectionSet),
            named(StateKind::Field, "test"),
            frame(StateKind::Directive),
        ]);

        assert_eq!(texts(&completions), vec!["skip"]);
    }

    #[test]
    fn directive_outside_known_location_is_empty() {
        let schema = blog_schema();
        let completions = complete_at(&schema, &whitespace(), &[
            frame(StateKind::Directive),
        ]);

        assert_eq!(texts(&completions), Vec::<String>::new());
    }
}

#[test]
fn no_schema_no_completions() {
    let frames = [frame(StateKind::Query), frame(StateKind::SelectionSet)];

    let completions = with_state_chain(&frames, |state| {
        complete(None, &whitespace(), state)
    }).flatten();

    assert!(completions.is_none());
}

#[test]
fn non_completable_position() {
    let schema = blog_schema();
    let mut frames = has_args_frames();
    frames.push(at_step(named(StateKind::Argument, "string"), 2));
    frames.push(frame(StateKind::StringValue));

    assert!(complete_at(&schema, &whitespace(), &frames).is_none());
}

#[test]
fn completions_serialize_to_json() {
    let schema = blog_schema();
    let Some(completions) = complete_at(&schema, &CursorToken::new("art", 2, 5), &[
        frame(StateKind::ShortQuery),
        frame(StateKind::SelectionSet),
    ]) else {
        panic!("expected completions");
    };

    let json = serde_json::to_value(&completions).expect("completions serialize");

    assert_eq!(json, serde_json::json!({
        "candidates": [{
            "text": "article",
            "type": "Article",
            "description": "Blog article",
        }],
        "replace_from": 2,
        "replace_to": 5,
    }));
}

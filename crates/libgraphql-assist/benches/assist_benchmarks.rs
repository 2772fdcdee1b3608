use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_assist::Schema;
use libgraphql_assist::StateKind;
use libgraphql_assist::context::resolve_context;
use libgraphql_assist::hint::CursorToken;
use libgraphql_assist::hint::complete;
use libgraphql_assist::lint::lint;
use libgraphql_assist::ranking::rank;
use libgraphql_assist::schema::SchemaBuilder;
use libgraphql_assist::state::StateFrame;
use libgraphql_assist::state::with_state_chain;

const BLOG_SCHEMA: &str = include_str!("../fixtures/blog.graphql");

const VALID_QUERY: &str = r#"
query Feed($ctx: Context, $id: ID!) {
  feed(context: $ctx) {
    ...ArticleFields
    author { name pic(width: 64, height: 64) { url width height } }
  }
  article(id: $id) { ...ArticleFields }
}
fragment ArticleFields on Article { id title body isPublished }
"#;

const INVALID_QUERY: &str = r#"
query Feed($unused: Int) {
  feed(context: $ctx, nope: 1) {
    titel
    author { pic { url { nope } } }
  }
  article { ...Missing }
}
"#;

fn blog_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, BLOG_SCHEMA)
        .and_then(SchemaBuilder::build)
        .expect("blog schema builds")
}

fn frame(kind: StateKind, name: Option<&str>) -> StateFrame {
    StateFrame {
        kind,
        name: name.map(str::to_string),
        step: 0,
        type_name: None,
    }
}

/// `{ feed { author { pic(width: | } } }`
fn argument_frames() -> Vec<StateFrame> {
    vec![
        frame(StateKind::Document, None),
        frame(StateKind::ShortQuery, None),
        frame(StateKind::SelectionSet, None),
        frame(StateKind::Field, Some("feed")),
        frame(StateKind::SelectionSet, None),
        frame(StateKind::Field, Some("author")),
        frame(StateKind::SelectionSet, None),
        frame(StateKind::Field, Some("pic")),
        frame(StateKind::Arguments, None),
    ]
}

/// `{ feed { | } }`
fn selection_frames() -> Vec<StateFrame> {
    vec![
        frame(StateKind::Document, None),
        frame(StateKind::ShortQuery, None),
        frame(StateKind::SelectionSet, None),
        frame(StateKind::Field, Some("feed")),
        frame(StateKind::SelectionSet, None),
    ]
}

fn ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let candidates = (0..500)
        .map(|i| format!("candidate{i}Field"))
        .collect::<Vec<_>>();

    for text in ["", "c", "cand42", "zzz"] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{text:?}")),
            text,
            |b, text| b.iter(|| {
                black_box(rank(candidates.clone(), black_box(text)))
            }),
        );
    }

    group.finish();
}

fn context_resolution(c: &mut Criterion) {
    let schema = blog_schema();
    let mut group = c.benchmark_group("resolve_context");

    let frames = argument_frames();
    group.bench_function("nested_arguments", |b| {
        b.iter(|| with_state_chain(&frames, |state| {
            black_box(resolve_context(&schema, state)).parent_type().is_some()
        }))
    });

    group.finish();
}

fn completion(c: &mut Criterion) {
    let schema = blog_schema();
    let mut group = c.benchmark_group("complete");

    let frames = selection_frames();
    let token = CursorToken::new("ti", 14, 16);
    group.bench_function("selection", |b| {
        b.iter(|| with_state_chain(&frames, |state| {
            black_box(complete(Some(&schema), &token, state)).is_some()
        }))
    });

    let frames = argument_frames();
    let token = CursorToken::new(" ", 30, 31);
    group.bench_function("argument", |b| {
        b.iter(|| with_state_chain(&frames, |state| {
            black_box(complete(Some(&schema), &token, state)).is_some()
        }))
    });

    group.finish();
}

fn linting(c: &mut Criterion) {
    let schema = blog_schema();
    let mut group = c.benchmark_group("lint");

    group.bench_function("valid", |b| {
        b.iter(|| black_box(lint(black_box(VALID_QUERY), Some(&schema))))
    });
    group.bench_function("invalid", |b| {
        b.iter(|| black_box(lint(black_box(INVALID_QUERY), Some(&schema))))
    });
    group.bench_function("syntax_error", |b| {
        b.iter(|| black_box(lint(black_box("query { feed { "), Some(&schema))))
    });

    group.finish();
}

criterion_group!(
    benches,
    ranking,
    context_resolution,
    completion,
    linting,
);
criterion_main!(benches);

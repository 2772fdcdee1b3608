use crate::state::StateKind;
use smallvec::SmallVec;

/// One node of the parse state chain.
///
/// Each node describes the production the cursor is nested in and borrows
/// the node for the enclosing production. The chain is owned by the caller
/// and never mutated here; following [`prev()`](Self::prev) always ends at a
/// root node.
///
/// ```
/// # use libgraphql_assist::ParserState;
/// # use libgraphql_assist::StateKind;
/// let query = ParserState::new(StateKind::Query);
/// let selection_set = ParserState::new(StateKind::SelectionSet).within(&query);
/// let field = ParserState::new(StateKind::Field)
///     .with_name("hasArgs")
///     .within(&selection_set);
///
/// assert_eq!(field.prev().map(|s| s.kind()), Some(StateKind::SelectionSet));
/// assert_eq!(field.depth(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParserState<'a> {
    pub(super) kind: StateKind,
    pub(super) name: Option<String>,
    pub(super) prev: Option<&'a ParserState<'a>>,
    pub(super) step: usize,
    pub(super) type_name: Option<String>,
}
impl<'a> ParserState<'a> {
    /// A root state of the given kind at step 0.
    pub fn new(kind: StateKind) -> Self {
        Self {
            kind,
            name: None,
            prev: None,
            step: 0,
            type_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Attach the literal type name the grammar recorded for this production
    /// (e.g. the `Foo` of a fragment's `on Foo`).
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Nest this state inside `prev`.
    pub fn within(mut self, prev: &'a ParserState<'a>) -> Self {
        self.prev = Some(prev);
        self
    }

    /// This state followed by each enclosing state, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &ParserState<'a>> {
        std::iter::successors(Some(self), |state| state.prev)
    }

    /// The whole chain ordered outermost first, ending with `self`.
    pub fn chain(&self) -> SmallVec<[&ParserState<'a>; 16]> {
        let mut chain = self.ancestors().collect::<SmallVec<[_; 16]>>();
        chain.reverse();
        chain
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The state for the immediately enclosing production.
    pub fn prev(&self) -> Option<&'a ParserState<'a>> {
        self.prev
    }

    /// The kind of the immediately enclosing production.
    pub fn prev_kind(&self) -> Option<StateKind> {
        self.prev.map(|prev| prev.kind)
    }

    /// The sub-position inside the production (e.g. 0 while typing an
    /// argument's name, 2 after its colon).
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

/// Quoted data, as produced by `'datum` or `(quote datum)`.
///
/// Proper lists are stored as nested pairs terminated by the empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Datum {
    Number(i64),
    Boolean(bool),
    Str(String),
    Symbol(String),
    Pair(Box<Datum>, Box<Datum>),
    EmptyList,
}

impl Datum {
    pub fn pair(first: Datum, second: Datum) -> Self {
        Datum::Pair(Box::new(first), Box::new(second))
    }
}

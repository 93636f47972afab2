use lachs::Span;

#[lachs::token]
pub enum Token {
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal("'")]
    Quote,
    #[terminal(".")]
    Dot,
    #[terminal(":")]
    Colon,
    #[terminal("#t")]
    True,
    #[terminal("#f")]
    False,
    #[literal("[0-9]+")]
    Number,
    #[literal(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[literal(r"[a-zA-Z+\-*/<>=!?_][a-zA-Z0-9+\-*/<>=!?_]*")]
    Ident,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::Quote(inner) => inner.position.clone(),
            Token::Dot(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
            Token::True(inner) => inner.position.clone(),
            Token::False(inner) => inner.position.clone(),
            Token::Number(inner) => inner.position.clone(),
            Token::StringLiteral(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::Quote(_) => "\"'\"".to_string(),
            Token::Dot(_) => "'.'".to_string(),
            Token::Colon(_) => "':'".to_string(),
            Token::True(_) => "'#t'".to_string(),
            Token::False(_) => "'#f'".to_string(),
            Token::Number(inner) => format!("number '{}'", inner.value),
            Token::StringLiteral(inner) => format!("string {}", inner.value),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
        }
    }
}

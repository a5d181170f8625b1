use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("加", Keyword::Add);
        map.insert("减", Keyword::Subtract);
        map.insert("乘", Keyword::Multiply);
        map.insert("除", Keyword::Divide);
        map.insert("取余", Keyword::Modulo);
        map.insert("小于", Keyword::Less);
        map.insert("大于", Keyword::Greater);
        map.insert("等于", Keyword::Equal);
        map.insert("不等于", Keyword::NotEqual);
        map.insert("不大于", Keyword::AtMost);
        map.insert("不小于", Keyword::AtLeast);
        map.insert("且", Keyword::And);
        map.insert("或", Keyword::Or);
        map.insert("不", Keyword::Not);
        map.insert("如果", Keyword::If);
        map.insert("否则", Keyword::Else);
        map.insert("循环", Keyword::While);
        map.insert("遍历", Keyword::ForEach);
        map.insert("中的每一个", Keyword::In);
        map.insert("为", Keyword::Assign);
        map.insert("变量", Keyword::Variable);
        map.insert("函数", Keyword::Function);
        map.insert("返回", Keyword::Return);
        map.insert("导入", Keyword::Import);
        map
    };

    pub static ref BRACKET_LOOKUP: HashMap<char, Bracket> = {
        let mut map = HashMap::new();
        map.insert('（', Bracket::OpenParen);
        map.insert('）', Bracket::CloseParen);
        map.insert('【', Bracket::OpenSquare);
        map.insert('】', Bracket::CloseSquare);
        map.insert('{', Bracket::OpenCurly);
        map.insert('}', Bracket::CloseCurly);
        map
    };

    pub static ref TYPE_LOOKUP: HashMap<&'static str, TypeName> = {
        let mut map = HashMap::new();
        map.insert("整数类型", TypeName::Integer);
        map.insert("字符串类型", TypeName::String);
        map.insert("浮点数类型", TypeName::Float);
        map.insert("布尔类型", TypeName::Boolean);
        map.insert("空类型", TypeName::Null);
        map
    };

    pub static ref BUILTIN_LOOKUP: HashMap<&'static str, Builtin> = {
        let mut map = HashMap::new();
        map.insert("输出", Builtin::Print);
        map.insert("获取输入", Builtin::ReadInput);
        map
    };
}

pub const TRUE_WORD: &str = "真";
pub const FALSE_WORD: &str = "假";
pub const NULL_WORD: &str = "空";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Comparison
    Less,
    Greater,
    Equal,
    NotEqual,
    AtMost,  // 不大于
    AtLeast, // 不小于

    And,
    Or,
    Not,

    // Control
    If,
    Else,
    While,
    ForEach,
    In,

    // Definition
    Assign,
    Variable,
    Function,

    Return,
    Import,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Bracket {
    OpenParen,
    CloseParen,
    OpenSquare,
    CloseSquare,
    OpenCurly,
    CloseCurly,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TypeName {
    Integer,
    String,
    Float,
    Boolean,
    Null,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Builtin {
    Print,
    ReadInput,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Bracket(Bracket),
    TypeName(TypeName),
    BuiltinFunction(Builtin),
    Literal,
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LiteralType {
    Int,
    String,
    Float,
    Bool,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Float(f64),
    Bool(bool),
    Null,
}

impl Literal {
    pub fn literal_type(&self) -> LiteralType {
        match self {
            Literal::Int(_) => LiteralType::Int,
            Literal::Str(_) => LiteralType::String,
            Literal::Float(_) => LiteralType::Float,
            Literal::Bool(_) => LiteralType::Bool,
            Literal::Null => LiteralType::Null,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "Int {}", value),
            Literal::Str(value) => write!(f, "String {:?}", value),
            Literal::Float(value) => write!(f, "Float {:?}", value),
            Literal::Bool(value) => write!(f, "Bool {}", value),
            Literal::Null => write!(f, "Null"),
        }
    }
}

/// What a token carries: the matched source text, or the decoded value of a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::Text(text) => write!(f, "{}({})", self.kind, text),
            TokenValue::Literal(literal) => write!(f, "Literal({})", literal),
        }
    }
}

impl Token {
    /// Source text of a non-literal token.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::Literal(_) => None,
        }
    }

    pub fn literal(&self) -> Option<&Literal> {
        match &self.value {
            TokenValue::Literal(literal) => Some(literal),
            TokenValue::Text(_) => None,
        }
    }
}

/// Tokens of one retained source line, in scan order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    line: u32,
    tokens: Vec<Token>,
}

impl Statement {
    pub fn new(line: u32) -> Statement {
        Statement {
            line,
            tokens: vec![],
        }
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} |", self.line)?;
        for token in &self.tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST statement by statement, applies operators with
/// numeric promotion, and produces the program's terminal value.
///
/// # Responsibilities
/// - Evaluates literals, binary expressions and declarations.
/// - Promotes integers to floats for arithmetic and narrows the result back
///   when both operands were integers.
/// - Reports type errors tagged with the line of the current statement.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a list of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   line.
/// - Validates numeric, string and char literals.
/// - Reports lexical errors with the offending line and a caret column.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token list produced by the lexer and constructs
/// an AST by precedence climbing over four binary tiers.
///
/// # Responsibilities
/// - Converts tokens into AST nodes (declarations and expressions).
/// - Validates the grammar, reporting errors with a rebuilt source line.
/// - Rejects division by a literal zero.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;

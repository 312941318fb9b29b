//! Debug commands: `parse` and `lex` for inspecting interpreter internals.

use owo_ir::TokenKind;
use owo_lexer::Lexer;
use owo_parse::Parser;

use super::read_file;

/// Parse a file and display the reconstructed program.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.statements.len());
    println!("  Errors: {}", parser.errors().len());

    if !program.statements.is_empty() {
        println!();
        println!("Program:");
        println!("  {program}");
    }

    if !parser.errors().is_empty() {
        println!();
        println!("Errors:");
        for message in parser.errors() {
            println!("  {message}");
        }
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let mut lexer = Lexer::new(&source);

    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for token in &tokens {
        println!("  {:?} {:?}", token.kind, token.literal);
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use pede::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lexer
        if lexer::lex(s).is_ok() {
            // If lexing succeeds, fuzz the parser
            let _ = parser::parse(s);
        }
    }
});

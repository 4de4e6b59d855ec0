#![no_main]

use libfuzzer_sys::fuzz_target;
use pede::frontend::preprocessor::{PreprocessConfig, preprocess};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let source = preprocess(s, &PreprocessConfig::default());
        if let Ok(module) = pede::compile(&source, "linux", "amd64") {
            let _ = module.to_string();
        }
    }
});

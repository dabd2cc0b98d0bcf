#![no_main]

use libfuzzer_sys::fuzz_target;
use ojdrive::BuildRecipe;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let flags: Vec<String> = content.split('\0').map(str::to_string).collect();
        let recipe = BuildRecipe::new("g++", flags, "solution.cpp", "code");
        let rendered = recipe.invocation().to_string();
        assert!(rendered.starts_with("g++"));
    }
});

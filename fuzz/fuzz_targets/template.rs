#![no_main]

use libfuzzer_sys::fuzz_target;
use qfharness::Template;
use qfharness::generate::Fills;
use qfharness_core::LanguageId;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        for language in [LanguageId::Java, LanguageId::Python] {
            // If parsing succeeds, rendering must not panic on any span
            if let Ok(template) = Template::parse("fuzz", s, language) {
                let _ = template.render(&Fills::default());
            }
        }
    }
});
